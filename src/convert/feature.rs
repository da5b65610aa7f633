use crate::convert::aggregate::map_members;
use crate::error::{Error, Result};
use crate::literal::{HostLiteral, NumericKind};
use crate::types::{FeatureIdentifier, FeatureType};
use std::collections::HashMap;

lazy_static::lazy_static! {
    // Exact, case-sensitive geometry names.
    static ref FEATURE_TYPE_NAMES: HashMap<&'static str, FeatureType> =
        FeatureType::ALL.iter().map(|ty| (ty.name(), *ty)).collect();
}

/// Maps a geometry name to a [`FeatureType`]. Names outside the fixed set
/// are errors; only the literal string `"Unknown"` yields `Unknown`.
pub fn to_feature_type(literal: &HostLiteral) -> Result<FeatureType> {
    let name = match literal {
        HostLiteral::String(s) => s.as_str(),
        other => return Err(Error::UnknownFeatureType(format!("{} {}", other.kind(), other))),
    };
    FEATURE_TYPE_NAMES
        .get(name)
        .copied()
        .ok_or_else(|| Error::UnknownFeatureType(format!("{:?}", name)))
}

pub fn to_aggregate_feature_type(literal: &HostLiteral) -> Result<Vec<FeatureType>> {
    map_members(literal, to_feature_type)
}

pub fn to_feature_identifier(literal: &HostLiteral) -> Result<FeatureIdentifier> {
    match literal {
        HostLiteral::String(s) => Ok(FeatureIdentifier::String(s.clone())),
        HostLiteral::Number(n) => Ok(match n.classify() {
            NumericKind::Unsigned(u) => FeatureIdentifier::UInt(u),
            NumericKind::Signed(i) => FeatureIdentifier::Int(i),
            NumericKind::Float(f) => FeatureIdentifier::Double(f),
        }),
        other => Err(Error::UnsupportedIdentifierKind(other.kind())),
    }
}

pub fn to_aggregate_feature_identifier(literal: &HostLiteral) -> Result<Vec<FeatureIdentifier>> {
    map_members(literal, to_feature_identifier)
}
