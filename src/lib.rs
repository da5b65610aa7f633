pub mod batch;
pub mod convert;
pub mod error;
pub mod expression;
pub mod json;
pub mod literal;
pub mod types;

pub use batch::{convert_all, BatchOptions};
pub use convert::{
    append, to_aggregate_feature_identifier, to_aggregate_feature_type, to_aggregate_value,
    to_constant_value, to_expression_array, to_feature_identifier, to_feature_type, Conversion,
    Converted,
};
pub use error::{Error, Result};
pub use expression::HostExpression;
pub use json::json_to_literal;
pub use literal::{HostLiteral, HostNumber, LiteralKind};
pub use types::{
    AggregateStyleValue, ArrayItem, ExpressionArray, FeatureIdentifier, FeatureType, StyleValue,
};

/// Parse JSON text as a host literal and apply a conversion to it.
pub fn convert_json(conversion: Conversion, json: &str) -> Result<Converted> {
    let literal = HostLiteral::from_json(json)?;
    conversion.apply(&literal)
}

/// Parse a JSON array of host literals and convert each one on a thread pool.
/// The outer error covers only unparsable input; item failures stay per item.
pub fn convert_json_batch(
    conversion: Conversion,
    json: &str,
    options: &BatchOptions,
) -> Result<Vec<Result<Converted>>> {
    let literals = match HostLiteral::from_json(json)? {
        HostLiteral::Sequence(items) => items,
        other => return Err(Error::unsupported("sequence", other.kind())),
    };
    Ok(convert_all(literals, conversion, options))
}
