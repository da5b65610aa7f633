use crate::literal::{HostLiteral, HostNumber};
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};

/// A constant as the style engine's filter evaluator consumes it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum StyleValue {
    Null,
    Bool(bool),
    UInt(u64),
    Int(i64),
    Double(f64),
    String(String),
}

impl From<StyleValue> for HostLiteral {
    fn from(value: StyleValue) -> Self {
        match value {
            StyleValue::Null => HostLiteral::Null,
            StyleValue::Bool(b) => HostLiteral::Boolean(b),
            StyleValue::UInt(u) => HostLiteral::Number(HostNumber::Unsigned(u)),
            StyleValue::Int(i) => HostLiteral::Number(HostNumber::Signed(i)),
            StyleValue::Double(d) => HostLiteral::Number(HostNumber::Float(d)),
            StyleValue::String(s) => HostLiteral::String(s),
        }
    }
}

/// Operand list of a membership filter such as `in` / `!in`.
pub type AggregateStyleValue = Vec<StyleValue>;

/// Geometry kind of a map feature.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FeatureType {
    Unknown,
    Point,
    LineString,
    Polygon,
}

impl FeatureType {
    pub const ALL: [FeatureType; 4] = [
        FeatureType::Unknown,
        FeatureType::Point,
        FeatureType::LineString,
        FeatureType::Polygon,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            FeatureType::Unknown => "Unknown",
            FeatureType::Point => "Point",
            FeatureType::LineString => "LineString",
            FeatureType::Polygon => "Polygon",
        }
    }
}

impl Display for FeatureType {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl From<FeatureType> for HostLiteral {
    fn from(ty: FeatureType) -> Self {
        HostLiteral::String(ty.name().to_string())
    }
}

/// Unique key of a feature. Numeric ids keep the kind they were given as.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FeatureIdentifier {
    UInt(u64),
    Int(i64),
    Double(f64),
    String(String),
}

impl Display for FeatureIdentifier {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            FeatureIdentifier::UInt(u) => write!(f, "{}", u),
            FeatureIdentifier::Int(i) => write!(f, "{}", i),
            FeatureIdentifier::Double(d) => write!(f, "{:?}", d),
            FeatureIdentifier::String(s) => f.write_str(s),
        }
    }
}

impl From<FeatureIdentifier> for HostLiteral {
    fn from(id: FeatureIdentifier) -> Self {
        match id {
            FeatureIdentifier::UInt(u) => HostLiteral::Number(HostNumber::Unsigned(u)),
            FeatureIdentifier::Int(i) => HostLiteral::Number(HostNumber::Signed(i)),
            FeatureIdentifier::Double(d) => HostLiteral::Number(HostNumber::Float(d)),
            FeatureIdentifier::String(s) => HostLiteral::String(s),
        }
    }
}

/// One element of an [`ExpressionArray`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ArrayItem {
    Null,
    Boolean(bool),
    Number(HostNumber),
    String(String),
    Array(ExpressionArray),
}

impl ArrayItem {
    pub fn as_str(&self) -> Option<&str> {
        match self {
            ArrayItem::String(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_array(&self) -> Option<&ExpressionArray> {
        match self {
            ArrayItem::Array(a) => Some(a),
            _ => None,
        }
    }
}

impl From<&str> for ArrayItem {
    fn from(s: &str) -> Self {
        ArrayItem::String(s.to_string())
    }
}

impl From<ExpressionArray> for ArrayItem {
    fn from(a: ExpressionArray) -> Self {
        ArrayItem::Array(a)
    }
}

/// Nested list form of an expression, `["operator", operand, ...]` or a
/// plain list of literals, as written in a style document.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ExpressionArray(pub Vec<ArrayItem>);

impl ExpressionArray {
    pub fn new(items: Vec<ArrayItem>) -> Self {
        Self(items)
    }

    /// Builds `[operator, operands...]`.
    pub fn operator(name: &str, operands: Vec<ArrayItem>) -> Self {
        let mut items = Vec::with_capacity(operands.len() + 1);
        items.push(ArrayItem::String(name.to_string()));
        items.extend(operands);
        Self(items)
    }

    pub fn items(&self) -> &[ArrayItem] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Leading string element, if the array is in operator form.
    pub fn operator_name(&self) -> Option<&str> {
        self.0.first().and_then(ArrayItem::as_str)
    }

    /// Depth of array nesting; a flat array has depth 1.
    pub fn depth(&self) -> usize {
        1 + self
            .0
            .iter()
            .filter_map(ArrayItem::as_array)
            .map(ExpressionArray::depth)
            .max()
            .unwrap_or(0)
    }

    /// Folds the array back into a host literal. A single scalar element is
    /// the embedding of that scalar; anything else is a sequence.
    pub fn to_literal(&self) -> HostLiteral {
        match self.0.as_slice() {
            [only] if !matches!(only, ArrayItem::Array(_)) => item_to_literal(only),
            items => HostLiteral::Sequence(items.iter().map(item_to_literal).collect()),
        }
    }

    pub fn to_json(&self) -> serde_json::Value {
        serde_json::Value::Array(self.0.iter().map(item_to_json).collect())
    }
}

fn item_to_literal(item: &ArrayItem) -> HostLiteral {
    match item {
        ArrayItem::Null => HostLiteral::Null,
        ArrayItem::Boolean(b) => HostLiteral::Boolean(*b),
        ArrayItem::Number(n) => HostLiteral::Number(*n),
        ArrayItem::String(s) => HostLiteral::String(s.clone()),
        ArrayItem::Array(a) => HostLiteral::Sequence(a.0.iter().map(item_to_literal).collect()),
    }
}

fn item_to_json(item: &ArrayItem) -> serde_json::Value {
    match item {
        ArrayItem::Null => serde_json::Value::Null,
        ArrayItem::Boolean(b) => serde_json::Value::Bool(*b),
        ArrayItem::Number(n) => crate::json::number_to_json(*n),
        ArrayItem::String(s) => serde_json::Value::String(s.clone()),
        ArrayItem::Array(a) => a.to_json(),
    }
}

impl Display for ExpressionArray {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.to_json())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn feature_type_names() {
        let names: Vec<&str> = FeatureType::ALL.iter().map(|t| t.name()).collect();
        assert_eq!(names, vec!["Unknown", "Point", "LineString", "Polygon"]);
        assert_eq!(FeatureType::LineString.to_string(), "LineString");
    }

    #[test]
    fn style_value_back_to_literal_keeps_kind() {
        assert_eq!(
            HostLiteral::from(StyleValue::Int(-2)),
            HostLiteral::Number(HostNumber::Signed(-2))
        );
        assert_eq!(
            HostLiteral::from(StyleValue::UInt(2)),
            HostLiteral::Number(HostNumber::Unsigned(2))
        );
        assert_eq!(HostLiteral::from(StyleValue::Null), HostLiteral::Null);
    }

    #[test]
    fn operator_form_and_depth() {
        let inner = ExpressionArray::operator("get", vec!["name".into()]);
        let outer = ExpressionArray::operator("upcase", vec![inner.into()]);
        assert_eq!(outer.operator_name(), Some("upcase"));
        assert_eq!(outer.depth(), 2);
        assert_eq!(outer.to_string(), r#"["upcase",["get","name"]]"#);
    }

    #[test]
    fn single_scalar_folds_to_scalar() {
        let arr = ExpressionArray::new(vec![ArrayItem::Number(HostNumber::Unsigned(4))]);
        assert_eq!(arr.to_literal(), HostLiteral::Number(HostNumber::Unsigned(4)));
        let empty = ExpressionArray::default();
        assert_eq!(empty.to_literal(), HostLiteral::Sequence(vec![]));
    }

    #[test]
    fn style_values_serialize_as_plain_json() {
        let values = vec![
            StyleValue::UInt(1),
            StyleValue::Double(1.5),
            StyleValue::String("a".into()),
            StyleValue::Null,
        ];
        assert_eq!(serde_json::to_string(&values).unwrap(), r#"[1,1.5,"a",null]"#);
    }
}
