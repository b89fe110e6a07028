use std::fmt;
use crate::board::WidgetKind;

/// A reference a chart request needs but the board snapshot lacks.
///
/// These are per-widget failures: the request for that widget is skipped,
/// the rest of the board is built as usual.
#[derive(Debug, Clone, PartialEq)]
pub enum BuildError {
    WidgetNotFound(String),
    NotAChart { widget: String, kind: WidgetKind },
    MissingDataChartId { widget: String },
    DataChartNotFound { widget: String, data_chart: String },
    ViewNotFound { data_chart: String, view: String },
}

impl fmt::Display for BuildError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BuildError::WidgetNotFound(id) => write!(f, "Widget '{}' not found", id),
            BuildError::NotAChart { widget, kind } => {
                write!(f, "Widget '{}' is a {} widget, not a chart", widget, kind)
            }
            BuildError::MissingDataChartId { widget } => {
                write!(f, "Chart widget '{}' has no data chart", widget)
            }
            BuildError::DataChartNotFound { widget, data_chart } => {
                write!(f, "Can't find chart '{}' for widget '{}'", data_chart, widget)
            }
            BuildError::ViewNotFound { data_chart, view } => {
                write!(f, "Can't find view '{}' for chart '{}'", view, data_chart)
            }
        }
    }
}

impl std::error::Error for BuildError {}
