use crate::error::{Error, Result};
use crate::literal::HostLiteral;

/// Applies `convert` to every member of a one-level aggregate, in order.
///
/// The input must be a sequence. A member that is itself a sequence is a
/// nesting error; any other member failure is reported with its index.
/// Conversion stops at the first failing member.
pub(crate) fn map_members<T, F>(literal: &HostLiteral, mut convert: F) -> Result<Vec<T>>
where
    F: FnMut(&HostLiteral) -> Result<T>,
{
    let members = literal
        .as_sequence()
        .ok_or_else(|| Error::unsupported("sequence", literal.kind()))?;

    let mut out = Vec::with_capacity(members.len());
    for (index, member) in members.iter().enumerate() {
        if !member.is_scalar() {
            tracing::debug!(index, "nested aggregate rejected");
            return Err(Error::InvalidAggregateNesting { index });
        }
        let converted = convert(member).map_err(|cause| Error::at_index(index, cause))?;
        out.push(converted);
    }
    Ok(out)
}
