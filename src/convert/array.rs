use crate::error::{Error, Result};
use crate::literal::{HostLiteral, HostNumber};
use crate::types::{ArrayItem, ExpressionArray};

pub const CONCAT_OPERATOR: &str = "concat";

/// Embeds a literal as an array element: scalars as themselves, sequences
/// as nested arrays. Nulls, NaN and infinities have no place in the list
/// grammar here.
pub(crate) fn literal_item(literal: &HostLiteral) -> Result<ArrayItem> {
    Ok(match literal {
        HostLiteral::String(s) => ArrayItem::String(s.clone()),
        HostLiteral::Number(HostNumber::Float(f)) if !f.is_finite() => {
            return Err(Error::NonFiniteNumber(*f))
        }
        HostLiteral::Number(n) => ArrayItem::Number(*n),
        HostLiteral::Boolean(b) => ArrayItem::Boolean(*b),
        HostLiteral::Sequence(members) => ArrayItem::Array(sequence_array(members)?),
        HostLiteral::Null => {
            return Err(Error::unsupported(
                "string, number, boolean or sequence",
                literal.kind(),
            ))
        }
    })
}

fn sequence_array(members: &[HostLiteral]) -> Result<ExpressionArray> {
    members
        .iter()
        .enumerate()
        .map(|(index, member)| {
            literal_item(member).map_err(|cause| Error::at_index(index, cause))
        })
        .collect::<Result<Vec<_>>>()
        .map(ExpressionArray::new)
}

/// Rebuilds the list form of a literal. A scalar becomes a one-element
/// array; a sequence becomes an array of its members at any depth.
pub fn to_expression_array(literal: &HostLiteral) -> Result<ExpressionArray> {
    match literal {
        HostLiteral::Sequence(members) => sequence_array(members),
        scalar => Ok(ExpressionArray::new(vec![literal_item(scalar)?])),
    }
}

/// `["concat", lhs, rhs]`. The concatenation is left to the evaluator.
pub fn append(lhs: &HostLiteral, rhs: &HostLiteral) -> Result<ExpressionArray> {
    let operand = |l: &HostLiteral| -> Result<ArrayItem> {
        l.as_str()
            .map(ArrayItem::from)
            .ok_or_else(|| Error::unsupported("string", l.kind()))
    };
    Ok(ExpressionArray::operator(CONCAT_OPERATOR, vec![operand(lhs)?, operand(rhs)?]))
}
