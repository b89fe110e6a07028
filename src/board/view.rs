//! Data view definitions

use serde::Deserialize;

/// A named, queryable dataset definition backing one or more charts
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct View {
    pub id: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub source_id: Option<String>,
    /// View settings as stored by the backend: a JSON document in a string
    #[serde(default)]
    pub config: Option<String>,
}
