//! Value resolution: a filter widget's form to typed filter values

use crate::board::{DateMode, FilterDate, TimeBound, TimeSpec, ValueType, WidgetFilter};
use crate::query::FilterValue;
use crate::time::{resolve_relative, Edge};
use super::error::ResolveError;
use super::types::ResolveContext;

/// Resolve the values a filter widget currently holds.
///
/// Returns `Ok(None)` when the form holds nothing (no date, no values) and
/// `Ok(Some(vec![]))` when a date range resolved to empty bounds only.
/// Every value is tagged with `value_type`; non-date values are passed
/// through without coercion.
pub fn resolve_values(
    value_type: ValueType,
    filter: &WidgetFilter,
    ctx: &ResolveContext<'_>,
) -> Result<Option<Vec<FilterValue>>, ResolveError> {
    if value_type == ValueType::Date {
        let Some(date) = filter.filter_date.as_ref() else {
            return Ok(None);
        };
        let values = date_values(filter.operator_type, date, ctx)?
            .into_iter()
            .filter(|slot| !slot.is_empty())
            .map(|slot| FilterValue::new(slot, value_type))
            .collect();
        return Ok(Some(values));
    }

    match filter.filter_values.as_deref() {
        Some(raw) if !raw.is_empty() => Ok(Some(
            raw.iter()
                .map(|value| FilterValue { value: value.clone(), value_type })
                .collect(),
        )),
        _ => Ok(None),
    }
}

/// The `[start, end]` slot pair of a date filter, before empty slots are dropped.
///
/// A named range expands through the context's converter. A custom range
/// resolves its bounds independently; a missing end bound leaves the second
/// slot empty.
pub fn date_values(
    mode: DateMode,
    date: &FilterDate,
    ctx: &ResolveContext<'_>,
) -> Result<[String; 2], ResolveError> {
    match mode {
        DateMode::Common => {
            let token = date.common_time.as_deref().ok_or_else(|| ResolveError::MalformedDateSpec {
                reason: "named range without a commonTime token".to_string(),
            })?;
            Ok(ctx.time_ranges.convert(token, ctx.now)?)
        }
        DateMode::Custom => {
            let start = date.start_time.as_ref().ok_or_else(|| ResolveError::MalformedDateSpec {
                reason: "custom range without a startTime".to_string(),
            })?;
            let start = resolve_bound(start, Edge::Start, ctx)?;
            let end = match date.end_time.as_ref() {
                Some(end) => resolve_bound(end, Edge::End, ctx)?,
                None => String::new(),
            };
            Ok([start, end])
        }
    }
}

fn resolve_bound(spec: &TimeSpec, edge: Edge, ctx: &ResolveContext<'_>) -> Result<String, ResolveError> {
    match spec.bound() {
        Some(TimeBound::Exact(time)) => Ok(time.to_string()),
        Some(TimeBound::Relative(relative)) => Ok(resolve_relative(&relative, ctx.now, edge)?),
        None => Err(ResolveError::MalformedDateSpec {
            reason: format!("{:?} bound without its value", spec.relative_or_exact),
        }),
    }
}
