use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};

/// A number as the host hands it over. The host keeps track of whether a
/// number was produced as an unsigned, signed or floating point quantity.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum HostNumber {
    Unsigned(u64),
    Signed(i64),
    Float(f64),
}

/// Result of classifying a host number for the style engine.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) enum NumericKind {
    Unsigned(u64),
    Signed(i64),
    Float(f64),
}

// 2^63 and 2^64, both exactly representable as f64.
const I64_BOUND: f64 = 9_223_372_036_854_775_808.0;
const U64_BOUND: f64 = 18_446_744_073_709_551_616.0;

impl HostNumber {
    /// Whole floats that fit an integer type are reported as integers so that
    /// `3.0` and `3` compare equal once converted. Negative wholes become signed.
    pub(crate) fn classify(self) -> NumericKind {
        match self {
            HostNumber::Unsigned(u) => NumericKind::Unsigned(u),
            HostNumber::Signed(i) => NumericKind::Signed(i),
            HostNumber::Float(f) => {
                if !f.is_finite() || f.fract() != 0.0 {
                    NumericKind::Float(f)
                } else if f < 0.0 {
                    if f >= -I64_BOUND {
                        NumericKind::Signed(f as i64)
                    } else {
                        NumericKind::Float(f)
                    }
                } else if f < U64_BOUND {
                    NumericKind::Unsigned(f as u64)
                } else {
                    NumericKind::Float(f)
                }
            }
        }
    }
}

impl Display for HostNumber {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            HostNumber::Unsigned(u) => write!(f, "{}", u),
            HostNumber::Signed(i) => write!(f, "{}", i),
            HostNumber::Float(x) => write!(f, "{:?}", x),
        }
    }
}

impl From<u64> for HostNumber {
    fn from(u: u64) -> Self {
        HostNumber::Unsigned(u)
    }
}

impl From<i64> for HostNumber {
    fn from(i: i64) -> Self {
        HostNumber::Signed(i)
    }
}

impl From<f64> for HostNumber {
    fn from(f: f64) -> Self {
        HostNumber::Float(f)
    }
}

/// A leaf of the host expression tree.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum HostLiteral {
    Null,
    Boolean(bool),
    Number(HostNumber),
    String(String),
    Sequence(Vec<HostLiteral>),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LiteralKind {
    String,
    Number,
    Boolean,
    Null,
    Sequence,
}

impl Display for LiteralKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            LiteralKind::String => "string",
            LiteralKind::Number => "number",
            LiteralKind::Boolean => "boolean",
            LiteralKind::Null => "null",
            LiteralKind::Sequence => "sequence",
        };
        f.write_str(name)
    }
}

impl HostLiteral {
    pub fn kind(&self) -> LiteralKind {
        match self {
            HostLiteral::Null => LiteralKind::Null,
            HostLiteral::Boolean(_) => LiteralKind::Boolean,
            HostLiteral::Number(_) => LiteralKind::Number,
            HostLiteral::String(_) => LiteralKind::String,
            HostLiteral::Sequence(_) => LiteralKind::Sequence,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            HostLiteral::String(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_sequence(&self) -> Option<&[HostLiteral]> {
        match self {
            HostLiteral::Sequence(items) => Some(items),
            _ => None,
        }
    }

    pub fn is_scalar(&self) -> bool {
        !matches!(self, HostLiteral::Sequence(_))
    }
}

impl Display for HostLiteral {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            HostLiteral::Null => f.write_str("null"),
            HostLiteral::Boolean(b) => write!(f, "{}", b),
            HostLiteral::Number(n) => write!(f, "{}", n),
            HostLiteral::String(s) => write!(f, "{:?}", s),
            HostLiteral::Sequence(items) => {
                f.write_str("[")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{}", item)?;
                }
                f.write_str("]")
            }
        }
    }
}

impl From<HostNumber> for HostLiteral {
    fn from(n: HostNumber) -> Self {
        HostLiteral::Number(n)
    }
}

impl From<&str> for HostLiteral {
    fn from(s: &str) -> Self {
        HostLiteral::String(s.to_string())
    }
}

impl From<String> for HostLiteral {
    fn from(s: String) -> Self {
        HostLiteral::String(s)
    }
}

impl From<bool> for HostLiteral {
    fn from(b: bool) -> Self {
        HostLiteral::Boolean(b)
    }
}

impl From<u64> for HostLiteral {
    fn from(u: u64) -> Self {
        HostLiteral::Number(HostNumber::Unsigned(u))
    }
}

impl From<i64> for HostLiteral {
    fn from(i: i64) -> Self {
        HostLiteral::Number(HostNumber::Signed(i))
    }
}

impl From<f64> for HostLiteral {
    fn from(f: f64) -> Self {
        HostLiteral::Number(HostNumber::Float(f))
    }
}

impl<T: Into<HostLiteral>> From<Vec<T>> for HostLiteral {
    fn from(items: Vec<T>) -> Self {
        HostLiteral::Sequence(items.into_iter().map(Into::into).collect())
    }
}
