//! Widget types
//!
//! A widget is anything placed on a board. Only two kinds matter for
//! request building: chart widgets, which issue queries, and filter widgets,
//! which constrain the charts they are related to.

use serde::{Deserialize, Deserializer};
use serde_json::Value;
use super::types::{AggOperator, FieldCategory, SqlOperator, ValueType, WidgetKind};
use crate::time::RelativeTime;

/// A placed, configured element on a board
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Widget {
    pub id: String,
    /// Saved chart backing a chart widget
    #[serde(default)]
    pub datachart_id: Option<String>,
    /// Views this widget reads from; only the first one is used for filter matching
    #[serde(default)]
    pub view_ids: Vec<String>,
    /// Outgoing links to other widgets, in board order
    #[serde(default)]
    pub relations: Vec<Relation>,
    pub config: WidgetConfig,
}

#[derive(Debug, Clone)]
pub struct WidgetConfig {
    pub kind: WidgetKind,
    pub name: Option<String>,
    pub content: Option<WidgetContent>,
}

/// Widget content: structured for filter widgets, opaque otherwise
#[derive(Debug, Clone)]
pub enum WidgetContent {
    Filter(FilterWidgetContent),
    Other(Value),
}

/// Wire shape of `WidgetConfig` before its content is typed
#[derive(Deserialize)]
struct RawWidgetConfig {
    #[serde(rename = "type")]
    kind: WidgetKind,
    #[serde(default)]
    name: Option<String>,
    #[serde(default)]
    content: Option<Value>,
}

// Filter widgets must carry well-formed filter content: an unknown category,
// operator or date form fails the whole snapshot.
impl<'de> Deserialize<'de> for WidgetConfig {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = RawWidgetConfig::deserialize(deserializer)?;
        let content = match (raw.content, &raw.kind) {
            (None, _) => None,
            (Some(value), WidgetKind::Filter) => Some(WidgetContent::Filter(
                serde_json::from_value(value)
                    .map_err(|e| serde::de::Error::custom(format!("invalid filter content: {}", e)))?,
            )),
            (Some(value), _) => Some(WidgetContent::Other(value)),
        };
        Ok(WidgetConfig { kind: raw.kind, name: raw.name, content })
    }
}

/// A link from one widget to another
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Relation {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub source_id: Option<String>,
    pub target_id: String,
    #[serde(default)]
    pub config: RelationConfig,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RelationConfig {
    #[serde(rename = "type", default)]
    pub kind: Option<String>,
    #[serde(default)]
    pub filter_to_widget: Option<FilterToWidget>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FilterToWidget {
    /// The filter replaces, rather than augments, the target's own filters
    #[serde(default)]
    pub widget_filter_covered: bool,
}

impl Relation {
    /// Whether this relation makes its filter a total override of the target's filters
    pub fn covers_target(&self) -> bool {
        self.config
            .filter_to_widget
            .as_ref()
            .map(|f| f.widget_filter_covered)
            .unwrap_or(false)
    }
}

impl Widget {
    pub fn is_chart(&self) -> bool {
        self.config.kind == WidgetKind::Chart
    }

    pub fn is_filter(&self) -> bool {
        self.config.kind == WidgetKind::Filter
    }

    /// The data chart id, treating an empty string as absent
    pub fn data_chart_id(&self) -> Option<&str> {
        self.datachart_id.as_deref().filter(|id| !id.is_empty())
    }

    pub fn first_view_id(&self) -> Option<&str> {
        self.view_ids.first().map(String::as_str)
    }

    /// The relation whose target is `target_id`, first match wins
    pub fn relation_to(&self, target_id: &str) -> Option<&Relation> {
        self.relations.iter().find(|r| r.target_id == target_id)
    }

    /// Structured content, if this is a filter widget with content
    pub fn filter_content(&self) -> Option<&FilterWidgetContent> {
        if !self.is_filter() {
            return None;
        }
        match self.config.content.as_ref()? {
            WidgetContent::Filter(content) => Some(content),
            WidgetContent::Other(_) => None,
        }
    }
}

// ============================================================================
// Filter widget content
// ============================================================================

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FilterWidgetContent {
    pub field_value_type: ValueType,
    #[serde(default)]
    pub related_views: Vec<RelatedView>,
    pub widget_filter: WidgetFilter,
}

impl FilterWidgetContent {
    /// The related view used for `view_id`.
    ///
    /// Entries without a field value are ignored; among the rest the first
    /// entry in list order whose view matches wins.
    pub fn related_view_for(&self, view_id: &str) -> Option<&RelatedView> {
        self.related_views
            .iter()
            .filter(|v| v.field_key().is_some())
            .find(|v| v.view_id == view_id)
    }
}

/// Association between a filter widget and one data view
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RelatedView {
    pub view_id: String,
    /// Column name (Field) or variable name (Variable)
    #[serde(default)]
    pub field_value: Option<Value>,
    pub filter_field_category: FieldCategory,
}

impl RelatedView {
    /// String form of the field value, `None` when it is empty
    pub fn field_key(&self) -> Option<String> {
        let value = self.field_value.as_ref()?;
        if !is_truthy(value) {
            return None;
        }
        Some(scalar_to_string(value))
    }
}

/// The user-entered filter form
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WidgetFilter {
    #[serde(default)]
    pub sql_operator: SqlOperator,
    #[serde(default)]
    pub filter_values: Option<Vec<Value>>,
    #[serde(default)]
    pub filter_date: Option<FilterDate>,
    #[serde(default)]
    pub operator_type: DateMode,
    #[serde(default)]
    pub aggregate: Option<AggOperator>,
}

/// How a date filter expresses its range
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DateMode {
    /// A named relative range such as "last7Days"
    Common,
    /// Explicit start/end bounds, each exact or relative
    #[default]
    Custom,
}

impl<'de> Deserialize<'de> for DateMode {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = Option::<String>::deserialize(deserializer)?;
        Ok(match s.as_deref() {
            Some("common") => DateMode::Common,
            _ => DateMode::Custom,
        })
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FilterDate {
    #[serde(default)]
    pub common_time: Option<String>,
    #[serde(default)]
    pub start_time: Option<TimeSpec>,
    #[serde(default)]
    pub end_time: Option<TimeSpec>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RelativeOrExact {
    Exact,
    Relative,
}

/// One bound of a custom date range, in its wire shape
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimeSpec {
    pub relative_or_exact: RelativeOrExact,
    #[serde(default)]
    pub exact_time: Option<String>,
    #[serde(default)]
    pub relative: Option<RelativeTime>,
}

/// A date bound after checking that its selected branch is present
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimeBound<'a> {
    Exact(&'a str),
    Relative(RelativeTime),
}

impl TimeSpec {
    pub fn exact(time: impl Into<String>) -> Self {
        Self {
            relative_or_exact: RelativeOrExact::Exact,
            exact_time: Some(time.into()),
            relative: None,
        }
    }

    pub fn relative(relative: RelativeTime) -> Self {
        Self {
            relative_or_exact: RelativeOrExact::Relative,
            exact_time: None,
            relative: Some(relative),
        }
    }

    /// `None` when the branch named by `relative_or_exact` carries no data
    pub fn bound(&self) -> Option<TimeBound<'_>> {
        match self.relative_or_exact {
            RelativeOrExact::Exact => self.exact_time.as_deref().map(TimeBound::Exact),
            RelativeOrExact::Relative => self.relative.map(TimeBound::Relative),
        }
    }
}

/// JavaScript-style truthiness for scalar JSON values
fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().map(|f| f != 0.0).unwrap_or(true),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

/// Render a JSON scalar the way it appears in a query: strings unquoted
pub fn scalar_to_string(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}
