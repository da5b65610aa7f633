use crate::convert::{self, array::literal_item};
use crate::error::{Error, Result};
use crate::literal::HostLiteral;
use crate::types::{
    AggregateStyleValue, ArrayItem, ExpressionArray, FeatureIdentifier, FeatureType, StyleValue,
};
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};

pub const GET_OPERATOR: &str = "get";
pub const VAR_OPERATOR: &str = "var";

/// A node of the host expression graph that the bridge understands.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum HostExpression {
    Constant(HostLiteral),
    /// Feature attribute lookup.
    KeyPath(String),
    Variable(String),
    Function {
        operator: String,
        arguments: Vec<HostExpression>,
    },
    Aggregate(Vec<HostExpression>),
}

impl HostExpression {
    pub fn constant(literal: impl Into<HostLiteral>) -> Self {
        HostExpression::Constant(literal.into())
    }

    pub fn key_path(key: impl Into<String>) -> Self {
        HostExpression::KeyPath(key.into())
    }

    pub fn variable(name: impl Into<String>) -> Self {
        HostExpression::Variable(name.into())
    }

    pub fn function(operator: impl Into<String>, arguments: Vec<HostExpression>) -> Self {
        HostExpression::Function {
            operator: operator.into(),
            arguments,
        }
    }

    /// Folds constants, and aggregates made only of constants, into a literal.
    pub fn to_literal(&self) -> Result<HostLiteral> {
        match self {
            HostExpression::Constant(literal) => Ok(literal.clone()),
            HostExpression::Aggregate(members) => members
                .iter()
                .map(HostExpression::to_literal)
                .collect::<Result<Vec<_>>>()
                .map(HostLiteral::Sequence),
            other => Err(Error::NonConstantExpression(other.to_string())),
        }
    }

    pub fn constant_value(&self) -> Result<StyleValue> {
        convert::to_constant_value(&self.to_literal()?)
    }

    pub fn aggregate_value(&self) -> Result<AggregateStyleValue> {
        convert::to_aggregate_value(&self.to_literal()?)
    }

    pub fn feature_type(&self) -> Result<FeatureType> {
        convert::to_feature_type(&self.to_literal()?)
    }

    pub fn aggregate_feature_type(&self) -> Result<Vec<FeatureType>> {
        convert::to_aggregate_feature_type(&self.to_literal()?)
    }

    pub fn feature_identifier(&self) -> Result<FeatureIdentifier> {
        convert::to_feature_identifier(&self.to_literal()?)
    }

    pub fn aggregate_feature_identifier(&self) -> Result<Vec<FeatureIdentifier>> {
        convert::to_aggregate_feature_identifier(&self.to_literal()?)
    }

    /// List form of the whole expression.
    ///
    /// Key paths become `["get", key]`, variables `["var", name]` and function
    /// calls `[operator, args...]`. Constant scalar arguments are embedded
    /// directly; every other argument is a nested array.
    pub fn to_expression_array(&self) -> Result<ExpressionArray> {
        match self {
            HostExpression::Constant(literal) => convert::to_expression_array(literal),
            HostExpression::KeyPath(key) => Ok(ExpressionArray::operator(
                GET_OPERATOR,
                vec![ArrayItem::String(key.clone())],
            )),
            HostExpression::Variable(name) => Ok(ExpressionArray::operator(
                VAR_OPERATOR,
                vec![ArrayItem::String(name.clone())],
            )),
            HostExpression::Function {
                operator,
                arguments,
            } => {
                let operands = arguments
                    .iter()
                    .enumerate()
                    .map(|(index, arg)| {
                        operand_item(arg).map_err(|cause| Error::at_index(index, cause))
                    })
                    .collect::<Result<Vec<_>>>()?;
                Ok(ExpressionArray::operator(operator, operands))
            }
            HostExpression::Aggregate(members) => members
                .iter()
                .enumerate()
                .map(|(index, member)| {
                    operand_item(member).map_err(|cause| Error::at_index(index, cause))
                })
                .collect::<Result<Vec<_>>>()
                .map(ExpressionArray::new),
        }
    }
}

fn operand_item(expr: &HostExpression) -> Result<ArrayItem> {
    match expr {
        HostExpression::Constant(literal) => literal_item(literal),
        other => other.to_expression_array().map(ArrayItem::Array),
    }
}

impl Display for HostExpression {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            HostExpression::Constant(literal) => write!(f, "{}", literal),
            HostExpression::KeyPath(key) => f.write_str(key),
            HostExpression::Variable(name) => write!(f, "${}", name),
            HostExpression::Function {
                operator,
                arguments,
            } => {
                write!(f, "{}(", operator)?;
                write_list(f, arguments)?;
                f.write_str(")")
            }
            HostExpression::Aggregate(members) => {
                f.write_str("{")?;
                write_list(f, members)?;
                f.write_str("}")
            }
        }
    }
}

fn write_list(f: &mut Formatter<'_>, items: &[HostExpression]) -> std::fmt::Result {
    for (i, item) in items.iter().enumerate() {
        if i > 0 {
            f.write_str(", ")?;
        }
        write!(f, "{}", item)?;
    }
    Ok(())
}

impl From<HostLiteral> for HostExpression {
    fn from(literal: HostLiteral) -> Self {
        HostExpression::Constant(literal)
    }
}
