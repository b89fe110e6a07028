//! Root board snapshot

use serde::Deserialize;
use std::path::Path;
use super::chart::DataChart;
use super::view::View;
use super::widget::Widget;
use crate::error::ParseError;

/// Everything request building reads: one board's widgets plus the views
/// and saved charts they reference.
///
/// Widgets keep their board order; that order is the iteration order of
/// every board-wide pass.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Board {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub widgets: Vec<Widget>,
    #[serde(default)]
    pub views: Vec<View>,
    #[serde(default)]
    pub data_charts: Vec<DataChart>,
}

impl Board {
    /// Load a board snapshot from a YAML or JSON file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ParseError> {
        crate::parser::parse_file(path)
    }

    pub fn get_widget(&self, id: &str) -> Option<&Widget> {
        self.widgets.iter().find(|w| w.id == id)
    }

    pub fn get_view(&self, id: &str) -> Option<&View> {
        self.views.iter().find(|v| v.id == id)
    }

    pub fn get_data_chart(&self, id: &str) -> Option<&DataChart> {
        self.data_charts.iter().find(|c| c.id == id)
    }

    pub fn chart_widgets(&self) -> impl Iterator<Item = &Widget> + '_ {
        self.widgets.iter().filter(|w| w.is_chart())
    }
}
