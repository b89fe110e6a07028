use serde::{Deserialize, Serialize};
use serde_json::Value;
use super::request::PageInfo;

/// A cross-widget "click to filter" event: selecting `trigger_value` on the
/// trigger chart filters the linker widget.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BoardLinkFilter {
    pub linker_widget_id: String,
    #[serde(default)]
    pub trigger_widget_id: Option<String>,
    pub trigger_data_chart_id: String,
    pub trigger_value: Value,
}

/// Page-number overrides applied after a request is built.
///
/// `one_off` (a single fetch, e.g. a pager click) wins over `widget`
/// (the widget's remembered page); both win over the chart's own page.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PageOverrides {
    pub widget: Option<PageInfo>,
    pub one_off: Option<PageInfo>,
}

impl PageOverrides {
    pub fn none() -> Self {
        Self::default()
    }

    /// The page number to use, if any override carries one
    pub fn page_no(&self) -> Option<u32> {
        let one_off = self
            .one_off
            .as_ref()
            .and_then(|p| p.page_no)
            .filter(|&n| n > 0);
        one_off.or_else(|| self.widget.as_ref().and_then(|p| p.page_no))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn page(no: u32) -> Option<PageInfo> {
        Some(PageInfo { page_no: Some(no), ..Default::default() })
    }

    #[test]
    fn test_one_off_wins_over_widget() {
        let overrides = PageOverrides { widget: page(2), one_off: page(5) };
        assert_eq!(overrides.page_no(), Some(5));
    }

    #[test]
    fn test_widget_page_used_alone() {
        let overrides = PageOverrides { widget: page(2), one_off: None };
        assert_eq!(overrides.page_no(), Some(2));
        assert_eq!(PageOverrides::none().page_no(), None);
    }

    #[test]
    fn test_zero_one_off_is_ignored() {
        let overrides = PageOverrides { widget: page(2), one_off: page(0) };
        assert_eq!(overrides.page_no(), Some(2));
    }

    #[test]
    fn test_widget_override_without_page_no_is_ignored() {
        let widget = Some(PageInfo { page_size: Some(20), ..Default::default() });
        let overrides = PageOverrides { widget, one_off: None };
        assert_eq!(overrides.page_no(), None);
    }
}
