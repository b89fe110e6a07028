use tracing::debug;
use crate::board::{Board, SqlOperator, Widget};
use crate::query::{BoardLinkFilter, ChartRequestFilter, FilterValue, PageOverrides, RequestParams};
use crate::resolver::{resolve_filters_for_widget, ResolvedFilters};
use super::context::{BuildContext, LinkFanOut};
use super::error::BuildError;

/// Build the requests for every chart widget on the board.
///
/// Widgets whose request cannot be built are reported and left out; the
/// result keeps board order for the rest.
pub fn build_board_requests(board: &Board, ctx: &BuildContext<'_>) -> Vec<RequestParams> {
    board
        .chart_widgets()
        .filter_map(|widget| {
            build_chart_widget_request(&widget.id, board, None, &PageOverrides::none(), ctx)
        })
        .collect()
}

/// Build the request for one chart widget, reporting failures.
///
/// Returns `None` after exactly one call to the context's error reporter
/// when the widget, its data chart or its view cannot be found.
pub fn build_chart_widget_request(
    widget_id: &str,
    board: &Board,
    link_filters: Option<&[BoardLinkFilter]>,
    pages: &PageOverrides,
    ctx: &BuildContext<'_>,
) -> Option<RequestParams> {
    match try_build_chart_widget_request(widget_id, board, link_filters, pages, ctx) {
        Ok(request) => Some(request),
        Err(err) => {
            ctx.reporter.report(&err);
            None
        }
    }
}

/// Build the request for one chart widget.
///
/// # Arguments
/// * `widget_id` - The chart widget to build for
/// * `board` - Board snapshot holding widgets, views and data charts
/// * `link_filters` - Active link events on the board, if any
/// * `pages` - Page-number overrides
/// * `ctx` - Collaborators and options
///
/// The final filter list is the board's field filters followed by either the
/// link filters (when any link targets this widget), nothing (when a covering
/// filter applies) or the chart's own filters. Resolved variables replace the
/// request's params wholesale.
pub fn try_build_chart_widget_request(
    widget_id: &str,
    board: &Board,
    link_filters: Option<&[BoardLinkFilter]>,
    pages: &PageOverrides,
    ctx: &BuildContext<'_>,
) -> Result<RequestParams, BuildError> {
    let widget = board
        .get_widget(widget_id)
        .ok_or_else(|| BuildError::WidgetNotFound(widget_id.to_string()))?;

    if !widget.is_chart() {
        return Err(BuildError::NotAChart {
            widget: widget.id.clone(),
            kind: widget.config.kind.clone(),
        });
    }

    let chart_id = widget
        .data_chart_id()
        .ok_or_else(|| BuildError::MissingDataChartId { widget: widget.id.clone() })?;

    let chart = board
        .get_data_chart(chart_id)
        .ok_or_else(|| BuildError::DataChartNotFound {
            widget: widget.id.clone(),
            data_chart: chart_id.to_string(),
        })?;

    let view = board
        .get_view(&chart.view_id)
        .ok_or_else(|| BuildError::ViewNotFound {
            data_chart: chart.id.clone(),
            view: chart.view_id.clone(),
        })?;

    let mut request = ctx.requests.build(chart);
    request.apply_view_config(ctx.views.transform(view));

    let ResolvedFilters { filters, covered, variables } =
        resolve_filters_for_widget(widget, &board.widgets, &request.params, &ctx.resolve);

    let own_filters = std::mem::take(&mut request.filters);
    let tail = match link_filters.and_then(|links| link_request_filters(widget, links, board, ctx)) {
        Some(link_filters) => link_filters,
        None if covered => Vec::new(),
        None => own_filters,
    };
    request.filters = filters;
    request.filters.extend(tail);

    request.params = variables;

    if let Some(page_no) = pages.page_no() {
        request.set_page_no(page_no);
    }

    Ok(request)
}

/// Link filters for `widget`, or `None` when no link event targets it
fn link_request_filters(
    widget: &Widget,
    links: &[BoardLinkFilter],
    board: &Board,
    ctx: &BuildContext<'_>,
) -> Option<Vec<ChartRequestFilter>> {
    if !links.iter().any(|link| link.linker_widget_id == widget.id) {
        return None;
    }

    let filters = links
        .iter()
        .filter(|link| match ctx.options.link_fan_out {
            LinkFanOut::All => true,
            LinkFanOut::Addressed => link.linker_widget_id == widget.id,
        })
        .filter_map(|link| link_filter(link, board, ctx))
        .collect();
    Some(filters)
}

/// An IN filter on the trigger chart's first group column
fn link_filter(link: &BoardLinkFilter, board: &Board, ctx: &BuildContext<'_>) -> Option<ChartRequestFilter> {
    let Some(chart) = board.get_data_chart(&link.trigger_data_chart_id) else {
        debug!(data_chart = %link.trigger_data_chart_id, "link trigger chart not found");
        return None;
    };

    let Some(column) = ctx.requests.group_columns(chart).into_iter().next() else {
        debug!(data_chart = %chart.id, "link trigger chart has no group column");
        return None;
    };

    Some(ChartRequestFilter {
        agg_operator: None,
        column: column.col_name,
        sql_operator: SqlOperator::In,
        values: vec![FilterValue {
            value: link.trigger_value.clone(),
            value_type: column.value_type,
        }],
    })
}
