use tracing::warn;
use crate::board::View;
use crate::query::ViewConfigPatch;

/// Turns a view's stored configuration into request-level settings
pub trait ViewConfigTransformer {
    fn transform(&self, view: &View) -> ViewConfigPatch;
}

/// Default transformer: parses the view's JSON config string
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonViewConfig;

impl ViewConfigTransformer for JsonViewConfig {
    fn transform(&self, view: &View) -> ViewConfigPatch {
        let Some(raw) = view.config.as_deref().filter(|c| !c.trim().is_empty()) else {
            return ViewConfigPatch::default();
        };
        serde_json::from_str(raw).unwrap_or_else(|err| {
            warn!(view = %view.id, error = %err, "ignoring unparseable view config");
            ViewConfigPatch::default()
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn view(config: Option<&str>) -> View {
        View { id: "v1".into(), name: None, source_id: None, config: config.map(String::from) }
    }

    #[test]
    fn test_parses_known_keys() {
        let patch = JsonViewConfig.transform(&view(Some(
            r#"{"cache": true, "cacheExpires": 600, "concurrencyControl": false, "concurrencyControlMode": "DIRTYREAD", "expensiveQuery": false}"#,
        )));
        assert_eq!(patch, ViewConfigPatch {
            cache: Some(true),
            cache_expires: Some(600),
            concurrency_control: Some(false),
            concurrency_control_mode: Some("DIRTYREAD".into()),
        });
    }

    #[test]
    fn test_missing_or_broken_config_is_empty() {
        assert_eq!(JsonViewConfig.transform(&view(None)), ViewConfigPatch::default());
        assert_eq!(JsonViewConfig.transform(&view(Some(""))), ViewConfigPatch::default());
        assert_eq!(JsonViewConfig.transform(&view(Some("{cache:"))), ViewConfigPatch::default());
    }
}
