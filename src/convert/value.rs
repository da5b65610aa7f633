use crate::convert::aggregate::map_members;
use crate::error::{Error, Result};
use crate::literal::{HostLiteral, HostNumber, NumericKind};
use crate::types::{AggregateStyleValue, StyleValue};

pub(crate) fn number_value(n: HostNumber) -> StyleValue {
    match n.classify() {
        NumericKind::Unsigned(u) => StyleValue::UInt(u),
        NumericKind::Signed(i) => StyleValue::Int(i),
        NumericKind::Float(f) => StyleValue::Double(f),
    }
}

/// Converts a scalar literal into the style engine's constant form.
pub fn to_constant_value(literal: &HostLiteral) -> Result<StyleValue> {
    let value = match literal {
        HostLiteral::Null => StyleValue::Null,
        HostLiteral::Boolean(b) => StyleValue::Bool(*b),
        HostLiteral::Number(n) => number_value(*n),
        HostLiteral::String(s) => StyleValue::String(s.clone()),
        HostLiteral::Sequence(_) => {
            return Err(Error::unsupported("string, number, boolean or null", literal.kind()))
        }
    };
    tracing::trace!(?value, "constant value");
    Ok(value)
}

/// Converts a flat sequence of scalars, e.g. the right hand side of `IN`.
pub fn to_aggregate_value(literal: &HostLiteral) -> Result<AggregateStyleValue> {
    map_members(literal, to_constant_value)
}
