//! Conversions from host literals into style engine values.
//!
//! Every conversion is a pure function of its input; nothing here keeps
//! state between calls, so conversions can run on any thread.

mod aggregate;
pub mod array;
pub mod feature;
pub mod value;

pub use array::{append, to_expression_array, CONCAT_OPERATOR};
pub use feature::{
    to_aggregate_feature_identifier, to_aggregate_feature_type, to_feature_identifier,
    to_feature_type,
};
pub use value::{to_aggregate_value, to_constant_value};

use crate::error::Result;
use crate::literal::HostLiteral;
use crate::types::{ExpressionArray, FeatureIdentifier, FeatureType, StyleValue};
use serde::Serialize;
use std::str::FromStr;

/// Names a single-literal conversion so it can be chosen at runtime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Conversion {
    Constant,
    Aggregate,
    FeatureType,
    AggregateFeatureType,
    FeatureIdentifier,
    AggregateFeatureIdentifier,
    ExpressionArray,
}

impl Conversion {
    pub const ALL: [Conversion; 7] = [
        Conversion::Constant,
        Conversion::Aggregate,
        Conversion::FeatureType,
        Conversion::AggregateFeatureType,
        Conversion::FeatureIdentifier,
        Conversion::AggregateFeatureIdentifier,
        Conversion::ExpressionArray,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Conversion::Constant => "constant",
            Conversion::Aggregate => "aggregate",
            Conversion::FeatureType => "feature-type",
            Conversion::AggregateFeatureType => "aggregate-feature-type",
            Conversion::FeatureIdentifier => "feature-id",
            Conversion::AggregateFeatureIdentifier => "aggregate-feature-id",
            Conversion::ExpressionArray => "expression-array",
        }
    }

    pub fn apply(&self, literal: &HostLiteral) -> Result<Converted> {
        Ok(match self {
            Conversion::Constant => Converted::Constant(to_constant_value(literal)?),
            Conversion::Aggregate => Converted::Aggregate(to_aggregate_value(literal)?),
            Conversion::FeatureType => Converted::FeatureType(to_feature_type(literal)?),
            Conversion::AggregateFeatureType => {
                Converted::FeatureTypes(to_aggregate_feature_type(literal)?)
            }
            Conversion::FeatureIdentifier => {
                Converted::FeatureIdentifier(to_feature_identifier(literal)?)
            }
            Conversion::AggregateFeatureIdentifier => {
                Converted::FeatureIdentifiers(to_aggregate_feature_identifier(literal)?)
            }
            Conversion::ExpressionArray => {
                Converted::ExpressionArray(to_expression_array(literal)?)
            }
        })
    }
}

impl FromStr for Conversion {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Conversion::ALL
            .iter()
            .find(|c| c.name() == s)
            .copied()
            .ok_or_else(|| format!("unknown conversion: {}", s))
    }
}

/// Output of [`Conversion::apply`]. Serializes as the bare converted value.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Converted {
    Constant(StyleValue),
    Aggregate(Vec<StyleValue>),
    FeatureType(FeatureType),
    FeatureTypes(Vec<FeatureType>),
    FeatureIdentifier(FeatureIdentifier),
    FeatureIdentifiers(Vec<FeatureIdentifier>),
    ExpressionArray(ExpressionArray),
}
