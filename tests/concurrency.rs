use std::sync::Arc;
use std::thread;
use stylebridge::{
    convert_all, to_aggregate_value, BatchOptions, Conversion, Converted, HostLiteral, StyleValue,
};

#[test]
fn shared_input_from_many_threads() {
    let input = Arc::new(HostLiteral::from_json(r#"["a", 1, -2, 3.5, null]"#).unwrap());
    let expected = to_aggregate_value(&input).unwrap();

    let handles: Vec<_> = (0..8)
        .map(|_| {
            let input = Arc::clone(&input);
            thread::spawn(move || {
                (0..100)
                    .map(|_| to_aggregate_value(&input).unwrap())
                    .collect::<Vec<_>>()
            })
        })
        .collect();

    for handle in handles {
        for result in handle.join().unwrap() {
            assert_eq!(result, expected);
        }
    }
}

#[test]
fn batch_matches_sequential() {
    let literals: Vec<HostLiteral> = (0..200i64)
        .map(|i| {
            if i % 2 == 0 {
                HostLiteral::from(-i)
            } else {
                HostLiteral::from(i as f64 + 0.5)
            }
        })
        .collect();
    let sequential: Vec<_> = literals
        .iter()
        .map(|l| Conversion::Constant.apply(l).unwrap())
        .collect();
    let options = BatchOptions::with_threads(8);
    let parallel: Vec<_> = convert_all(literals, Conversion::Constant, &options)
        .into_iter()
        .map(Result::unwrap)
        .collect();
    assert_eq!(parallel, sequential);
    assert_eq!(parallel[1], Converted::Constant(StyleValue::Double(1.5)));
    assert_eq!(parallel[2], Converted::Constant(StyleValue::Int(-2)));
}
