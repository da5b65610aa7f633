use crate::convert::{Conversion, Converted};
use crate::error::{Error, Result};
use crate::literal::HostLiteral;
use std::sync::mpsc;
use std::sync::Arc;

pub const THREADS_ENV: &str = "STYLEBRIDGE_THREADS";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BatchOptions {
    pub threads: usize,
}

impl BatchOptions {
    pub fn with_threads(threads: usize) -> Self {
        Self { threads: threads.max(1) }
    }

    /// Thread count from `STYLEBRIDGE_THREADS`, falling back to the CPU count.
    pub fn from_env() -> Self {
        let threads = std::env::var(THREADS_ENV)
            .ok()
            .and_then(|v| v.trim().parse::<usize>().ok())
            .unwrap_or_else(num_cpus::get);
        Self::with_threads(threads)
    }
}

impl Default for BatchOptions {
    fn default() -> Self {
        Self::with_threads(num_cpus::get())
    }
}

/// Runs `conversion` over independent literals on a thread pool.
/// Results come back in input order, one per literal.
pub fn convert_all(
    literals: Vec<HostLiteral>,
    conversion: Conversion,
    options: &BatchOptions,
) -> Vec<Result<Converted>> {
    let total = literals.len();
    if total == 0 {
        return Vec::new();
    }
    let threads = options.threads.min(total).max(1);
    tracing::debug!(total, threads, conversion = conversion.name(), "batch conversion");

    let pool = threadpool::ThreadPool::new(threads);
    let (tx, rx) = mpsc::channel();
    let literals = Arc::new(literals);

    for index in 0..total {
        let tx = tx.clone();
        let literals = Arc::clone(&literals);
        pool.execute(move || {
            let result = conversion.apply(&literals[index]);
            // The receiver outlives the pool; a send error only means the caller is gone.
            let _ = tx.send((index, result));
        });
    }
    drop(tx);

    let mut slots: Vec<Option<Result<Converted>>> = (0..total).map(|_| None).collect();
    for (index, result) in rx {
        slots[index] = Some(result);
    }
    pool.join();

    slots
        .into_iter()
        .enumerate()
        .map(|(index, slot)| {
            slot.unwrap_or_else(|| {
                tracing::warn!(index, "batch worker produced no result");
                Err(Error::BatchItemLost { index })
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::StyleValue;

    #[test]
    fn results_keep_input_order() {
        let literals: Vec<HostLiteral> = (0..50u64).map(HostLiteral::from).collect();
        let out = convert_all(literals, Conversion::Constant, &BatchOptions::with_threads(4));
        assert_eq!(out.len(), 50);
        for (i, r) in out.into_iter().enumerate() {
            assert_eq!(r.unwrap(), Converted::Constant(StyleValue::UInt(i as u64)));
        }
    }

    #[test]
    fn failures_stay_in_place() {
        let literals = vec![
            HostLiteral::from("Point"),
            HostLiteral::from("Circle"),
            HostLiteral::from("Polygon"),
        ];
        let out = convert_all(literals, Conversion::FeatureType, &BatchOptions::with_threads(2));
        assert!(out[0].is_ok());
        assert!(matches!(out[1], Err(Error::UnknownFeatureType(_))));
        assert!(out[2].is_ok());
    }

    #[test]
    fn empty_input() {
        assert!(convert_all(vec![], Conversion::Aggregate, &BatchOptions::default()).is_empty());
    }

    #[test]
    fn thread_count_from_env() {
        // Only this test touches the variable.
        std::env::set_var(THREADS_ENV, " 3 ");
        assert_eq!(BatchOptions::from_env().threads, 3);

        std::env::set_var(THREADS_ENV, "auto");
        assert_eq!(BatchOptions::from_env(), BatchOptions::default());

        std::env::set_var(THREADS_ENV, "0");
        assert_eq!(BatchOptions::from_env().threads, 1);

        std::env::remove_var(THREADS_ENV);
        assert_eq!(BatchOptions::from_env().threads, num_cpus::get().max(1));
    }

    #[test]
    fn zero_threads_is_clamped() {
        assert_eq!(BatchOptions::with_threads(0).threads, 1);
    }
}
