use crate::error::{Error, Result};
use crate::literal::{HostLiteral, HostNumber};

/// Convert serde_json::Value to a host literal.
/// JSON integers keep their sign class; every other number is a float.
pub fn json_to_literal(json: serde_json::Value) -> Result<HostLiteral> {
    match json {
        serde_json::Value::Null => Ok(HostLiteral::Null),
        serde_json::Value::Bool(b) => Ok(HostLiteral::Boolean(b)),
        serde_json::Value::Number(n) => {
            if let Some(u) = n.as_u64() {
                Ok(HostLiteral::Number(HostNumber::Unsigned(u)))
            } else if let Some(i) = n.as_i64() {
                Ok(HostLiteral::Number(HostNumber::Signed(i)))
            } else if let Some(f) = n.as_f64() {
                Ok(HostLiteral::Number(HostNumber::Float(f)))
            } else {
                Err(Error::UnrepresentableJson(n.to_string()))
            }
        }
        serde_json::Value::String(s) => Ok(HostLiteral::String(s)),
        serde_json::Value::Array(arr) => {
            let mut result = Vec::with_capacity(arr.len());
            for item in arr {
                result.push(json_to_literal(item)?);
            }
            Ok(HostLiteral::Sequence(result))
        }
        serde_json::Value::Object(_) => Err(Error::UnrepresentableJson(json.to_string())),
    }
}

pub(crate) fn number_to_json(n: HostNumber) -> serde_json::Value {
    match n {
        HostNumber::Unsigned(u) => serde_json::Value::from(u),
        HostNumber::Signed(i) => serde_json::Value::from(i),
        // NaN and infinities have no JSON form and come out as null. Expression
        // arrays never hold them; only raw literals can reach this arm.
        HostNumber::Float(f) => serde_json::Number::from_f64(f)
            .map(serde_json::Value::Number)
            .unwrap_or(serde_json::Value::Null),
    }
}

pub fn literal_to_json(literal: &HostLiteral) -> serde_json::Value {
    match literal {
        HostLiteral::Null => serde_json::Value::Null,
        HostLiteral::Boolean(b) => serde_json::Value::Bool(*b),
        HostLiteral::Number(n) => number_to_json(*n),
        HostLiteral::String(s) => serde_json::Value::String(s.clone()),
        HostLiteral::Sequence(items) => {
            serde_json::Value::Array(items.iter().map(literal_to_json).collect())
        }
    }
}

impl HostLiteral {
    /// Parses JSON text into a literal.
    pub fn from_json(text: &str) -> Result<HostLiteral> {
        let json: serde_json::Value = serde_json::from_str(text)?;
        json_to_literal(json)
    }

    /// JSON form of the literal. NaN and infinite floats are written as `null`.
    pub fn to_json(&self) -> serde_json::Value {
        literal_to_json(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn numbers_map_by_sign_class() {
        let number = |text: &str| HostLiteral::from_json(text).unwrap();
        assert_eq!(number("3"), HostLiteral::Number(HostNumber::Unsigned(3)));
        assert_eq!(number("-3"), HostLiteral::Number(HostNumber::Signed(-3)));
        assert_eq!(number("3.0"), HostLiteral::Number(HostNumber::Float(3.0)));
    }

    #[test]
    fn nested_arrays() {
        let lit = HostLiteral::from_json(r#"["a", [true, null]]"#).unwrap();
        assert_eq!(
            lit,
            HostLiteral::Sequence(vec![
                "a".into(),
                HostLiteral::Sequence(vec![true.into(), HostLiteral::Null]),
            ])
        );
        assert_eq!(lit.to_json().to_string(), r#"["a",[true,null]]"#);
    }

    #[test]
    fn objects_and_bad_text_are_errors() {
        assert!(matches!(
            HostLiteral::from_json(r#"{"a": 1}"#),
            Err(Error::UnrepresentableJson(_))
        ));
        assert!(matches!(HostLiteral::from_json("[1,"), Err(Error::Json(_))));
    }
}
