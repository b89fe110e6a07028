use chrono::{Local, NaiveDateTime};
use serde::Deserialize;
use crate::resolver::ResolveContext;
use crate::time::TimeRangeConverter;
use super::base::{ChartConfigBuilder, RequestBuilder};
use super::report::{ErrorReporter, TracingReporter};
use super::view::{JsonViewConfig, ViewConfigTransformer};

/// Which link events feed a widget once any of them targets it
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LinkFanOut {
    /// Every link event on the board becomes a filter
    #[default]
    All,
    /// Only events whose linker is the widget being built
    Addressed,
}

/// Request-building options, loadable from YAML
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BuildOptions {
    #[serde(default)]
    pub link_fan_out: LinkFanOut,
}

/// Collaborators and options for one request-building pass
#[derive(Clone, Copy)]
pub struct BuildContext<'a> {
    pub resolve: ResolveContext<'a>,
    pub requests: &'a dyn RequestBuilder,
    pub views: &'a dyn ViewConfigTransformer,
    pub reporter: &'a dyn ErrorReporter,
    pub options: BuildOptions,
}

impl<'a> BuildContext<'a> {
    /// Default collaborators, resolving relative dates against `now`
    pub fn new(now: NaiveDateTime) -> Self {
        Self {
            resolve: ResolveContext::new(now),
            requests: &ChartConfigBuilder,
            views: &JsonViewConfig,
            reporter: &TracingReporter,
            options: BuildOptions::default(),
        }
    }

    /// Default collaborators, resolving relative dates against the local clock
    pub fn now() -> Self {
        Self::new(Local::now().naive_local())
    }

    pub fn with_time_ranges(self, time_ranges: &'a dyn TimeRangeConverter) -> Self {
        Self { resolve: self.resolve.with_time_ranges(time_ranges), ..self }
    }

    pub fn with_request_builder(self, requests: &'a dyn RequestBuilder) -> Self {
        Self { requests, ..self }
    }

    pub fn with_view_config(self, views: &'a dyn ViewConfigTransformer) -> Self {
        Self { views, ..self }
    }

    pub fn with_reporter(self, reporter: &'a dyn ErrorReporter) -> Self {
        Self { reporter, ..self }
    }

    pub fn with_options(self, options: BuildOptions) -> Self {
        Self { options, ..self }
    }
}

impl std::fmt::Debug for BuildContext<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BuildContext")
            .field("resolve", &self.resolve)
            .field("options", &self.options)
            .finish_non_exhaustive()
    }
}
