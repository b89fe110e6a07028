//! Scalar enums shared by the board snapshot and the request types
//!
//! All of these travel as plain strings in the frontend JSON, so each one
//! parses through `FromStr` and serializes back through `Display`.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// Error when parsing one of the board's string enums
#[derive(Debug, Clone)]
pub struct ParseEnumError {
    pub kind: &'static str,
    pub input: String,
}

impl fmt::Display for ParseEnumError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Unknown {} '{}'", self.kind, self.input)
    }
}

impl std::error::Error for ParseEnumError {}

/// String-backed serde impls via `FromStr` / `Display`
macro_rules! string_serde {
    ($ty:ty) => {
        impl<'de> Deserialize<'de> for $ty {
            fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
            where
                D: Deserializer<'de>,
            {
                let s = String::deserialize(deserializer)?;
                <$ty>::from_str(&s).map_err(serde::de::Error::custom)
            }
        }

        impl Serialize for $ty {
            fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
            where
                S: Serializer,
            {
                serializer.serialize_str(&self.to_string())
            }
        }
    };
}

// ============================================================================
// ValueType
// ============================================================================

/// Semantic type of a filter or column value
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ValueType {
    #[default]
    String,
    Numeric,
    Date,
    /// Raw SQL fragment (expression variables)
    Fragment,
}

impl fmt::Display for ValueType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValueType::String => write!(f, "STRING"),
            ValueType::Numeric => write!(f, "NUMERIC"),
            ValueType::Date => write!(f, "DATE"),
            ValueType::Fragment => write!(f, "FRAGMENT"),
        }
    }
}

impl FromStr for ValueType {
    type Err = ParseEnumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "string" | "text" => Ok(ValueType::String),
            "numeric" | "number" => Ok(ValueType::Numeric),
            "date" | "datetime" => Ok(ValueType::Date),
            "fragment" | "expression" => Ok(ValueType::Fragment),
            _ => Err(ParseEnumError { kind: "value type", input: s.to_string() }),
        }
    }
}

string_serde!(ValueType);

// ============================================================================
// FieldCategory
// ============================================================================

/// What a filter widget binds to in its related view
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldCategory {
    /// Constrains a query column
    Field,
    /// Substitutes into a named query parameter
    Variable,
}

impl fmt::Display for FieldCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldCategory::Field => write!(f, "field"),
            FieldCategory::Variable => write!(f, "variable"),
        }
    }
}

impl FromStr for FieldCategory {
    type Err = ParseEnumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "field" => Ok(FieldCategory::Field),
            "variable" => Ok(FieldCategory::Variable),
            _ => Err(ParseEnumError { kind: "field category", input: s.to_string() }),
        }
    }
}

string_serde!(FieldCategory);

// ============================================================================
// SqlOperator
// ============================================================================

/// Comparison operator of a filter clause
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SqlOperator {
    #[default]
    In,
    NotIn,
    Equal,
    NotEqual,
    Between,
    NotBetween,
    Contain,
    NotContain,
    PrefixContain,
    NotPrefixContain,
    SuffixContain,
    NotSuffixContain,
    IsNull,
    NotNull,
    GreaterThan,
    GreaterThanOrEqual,
    LessThan,
    LessThanOrEqual,
}

impl fmt::Display for SqlOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            SqlOperator::In => "IN",
            SqlOperator::NotIn => "NOT_IN",
            SqlOperator::Equal => "EQ",
            SqlOperator::NotEqual => "NE",
            SqlOperator::Between => "BETWEEN",
            SqlOperator::NotBetween => "NOT_BETWEEN",
            SqlOperator::Contain => "LIKE",
            SqlOperator::NotContain => "NOT_LIKE",
            SqlOperator::PrefixContain => "PREFIX_LIKE",
            SqlOperator::NotPrefixContain => "PREFIX_NOT_LIKE",
            SqlOperator::SuffixContain => "SUFFIX_LIKE",
            SqlOperator::NotSuffixContain => "SUFFIX_NOT_LIKE",
            SqlOperator::IsNull => "IS_NULL",
            SqlOperator::NotNull => "NOT_NULL",
            SqlOperator::GreaterThan => "GT",
            SqlOperator::GreaterThanOrEqual => "GTE",
            SqlOperator::LessThan => "LT",
            SqlOperator::LessThanOrEqual => "LTE",
        };
        f.write_str(s)
    }
}

impl FromStr for SqlOperator {
    type Err = ParseEnumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "IN" => Ok(SqlOperator::In),
            "NOT_IN" => Ok(SqlOperator::NotIn),
            "EQ" => Ok(SqlOperator::Equal),
            "NE" => Ok(SqlOperator::NotEqual),
            "BETWEEN" => Ok(SqlOperator::Between),
            "NOT_BETWEEN" => Ok(SqlOperator::NotBetween),
            "LIKE" => Ok(SqlOperator::Contain),
            "NOT_LIKE" => Ok(SqlOperator::NotContain),
            "PREFIX_LIKE" => Ok(SqlOperator::PrefixContain),
            "PREFIX_NOT_LIKE" => Ok(SqlOperator::NotPrefixContain),
            "SUFFIX_LIKE" => Ok(SqlOperator::SuffixContain),
            "SUFFIX_NOT_LIKE" => Ok(SqlOperator::NotSuffixContain),
            "IS_NULL" => Ok(SqlOperator::IsNull),
            "NOT_NULL" => Ok(SqlOperator::NotNull),
            "GT" => Ok(SqlOperator::GreaterThan),
            "GTE" => Ok(SqlOperator::GreaterThanOrEqual),
            "LT" => Ok(SqlOperator::LessThan),
            "LTE" => Ok(SqlOperator::LessThanOrEqual),
            _ => Err(ParseEnumError { kind: "sql operator", input: s.to_string() }),
        }
    }
}

string_serde!(SqlOperator);

// ============================================================================
// AggOperator
// ============================================================================

/// Aggregate applied to a column before filtering or selecting
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AggOperator {
    Sum,
    Avg,
    Count,
    CountDistinct,
    Max,
    Min,
}

impl fmt::Display for AggOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AggOperator::Sum => write!(f, "SUM"),
            AggOperator::Avg => write!(f, "AVG"),
            AggOperator::Count => write!(f, "COUNT"),
            AggOperator::CountDistinct => write!(f, "COUNT_DISTINCT"),
            AggOperator::Max => write!(f, "MAX"),
            AggOperator::Min => write!(f, "MIN"),
        }
    }
}

impl FromStr for AggOperator {
    type Err = ParseEnumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "SUM" => Ok(AggOperator::Sum),
            "AVG" | "AVERAGE" => Ok(AggOperator::Avg),
            "COUNT" => Ok(AggOperator::Count),
            "COUNT_DISTINCT" | "COUNTDISTINCT" => Ok(AggOperator::CountDistinct),
            "MAX" => Ok(AggOperator::Max),
            "MIN" => Ok(AggOperator::Min),
            _ => Err(ParseEnumError { kind: "aggregate", input: s.to_string() }),
        }
    }
}

string_serde!(AggOperator);

// ============================================================================
// WidgetKind
// ============================================================================

/// The `config.type` of a widget
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum WidgetKind {
    Chart,
    Filter,
    Media,
    Container,
    Controller,
    /// Any widget type this crate does not act on
    Other(String),
}

impl fmt::Display for WidgetKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WidgetKind::Chart => write!(f, "chart"),
            WidgetKind::Filter => write!(f, "filter"),
            WidgetKind::Media => write!(f, "media"),
            WidgetKind::Container => write!(f, "container"),
            WidgetKind::Controller => write!(f, "controller"),
            WidgetKind::Other(s) => write!(f, "{}", s),
        }
    }
}

impl FromStr for WidgetKind {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s {
            "chart" => WidgetKind::Chart,
            "filter" => WidgetKind::Filter,
            "media" => WidgetKind::Media,
            "container" => WidgetKind::Container,
            "controller" => WidgetKind::Controller,
            other => WidgetKind::Other(other.to_string()),
        })
    }
}

string_serde!(WidgetKind);
