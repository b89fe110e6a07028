use std::collections::BTreeSet;
use tracing::debug;
use crate::board::{FieldCategory, ValueType, Widget};
use crate::query::{ChartRequestFilter, FilterValue, Variables};
use super::types::{Contribution, Effect, ResolveContext, ResolvedFilters, VariablePolicy};
use super::values::resolve_values;

/// Resolve what every filter widget on the board contributes to `target`.
///
/// Filter widgets are visited in board order. A filter widget applies only
/// when it has a relation to `target`, a related view for the target's first
/// view, and at least one resolved value; everything else is skipped without
/// side effects.
///
/// # Arguments
/// * `target` - The chart widget being queried
/// * `widgets` - All widgets on the board
/// * `params` - Variable values already present on the target's base request;
///   String variables append these after the filter-sourced values
pub fn resolve_filters_for_widget(
    target: &Widget,
    widgets: &[Widget],
    params: &Variables,
    ctx: &ResolveContext<'_>,
) -> ResolvedFilters {
    widgets
        .iter()
        .filter(|w| w.is_filter())
        .filter_map(|filter_widget| contribution(filter_widget, target, ctx))
        .fold(FilterFold::default(), FilterFold::apply)
        .finish(params)
}

/// The effect of `filter_widget` on `target`, if it applies at all
fn contribution(filter_widget: &Widget, target: &Widget, ctx: &ResolveContext<'_>) -> Option<Contribution> {
    let relation = filter_widget.relation_to(&target.id)?;

    let Some(content) = filter_widget.filter_content() else {
        debug!(widget = %filter_widget.id, "filter widget has no filter content");
        return None;
    };

    let related = content.related_view_for(target.first_view_id()?)?;
    let key = related.field_key()?;

    let values = match resolve_values(content.field_value_type, &content.widget_filter, ctx) {
        Ok(Some(values)) if !values.is_empty() => values,
        Ok(_) => return None,
        Err(err) => {
            debug!(widget = %filter_widget.id, target = %target.id, error = %err, "filter widget skipped");
            return None;
        }
    };

    let effect = match related.filter_field_category {
        FieldCategory::Variable => Effect::Variable {
            key,
            values: values.iter().map(FilterValue::to_query_string).collect(),
            policy: if content.field_value_type == ValueType::String {
                VariablePolicy::Accumulate
            } else {
                VariablePolicy::Replace
            },
        },
        FieldCategory::Field => Effect::Field(ChartRequestFilter {
            agg_operator: content.widget_filter.aggregate,
            column: key,
            sql_operator: content.widget_filter.sql_operator,
            values,
        }),
    };

    Some(Contribution {
        covered: relation.covers_target(),
        effect,
    })
}

/// Running state of the fold over applicable filter widgets
#[derive(Debug, Default)]
struct FilterFold {
    filters: Vec<ChartRequestFilter>,
    covered: bool,
    variables: Variables,
    /// Keys whose latest contribution accumulated
    accumulated: BTreeSet<String>,
}

impl FilterFold {
    fn apply(self, contribution: Contribution) -> Self {
        let FilterFold { mut filters, covered, mut variables, mut accumulated } = self;

        match contribution.effect {
            Effect::Field(filter) => filters.push(filter),
            Effect::Variable { key, values, policy: VariablePolicy::Replace } => {
                accumulated.remove(&key);
                variables.insert(key, values.into_iter().take(1).collect());
            }
            Effect::Variable { key, values, policy: VariablePolicy::Accumulate } => {
                variables.entry(key.clone()).or_default().extend(values);
                accumulated.insert(key);
            }
        }

        FilterFold {
            filters,
            covered: covered || contribution.covered,
            variables,
            accumulated,
        }
    }

    fn finish(self, params: &Variables) -> ResolvedFilters {
        let FilterFold { filters, covered, mut variables, accumulated } = self;

        for key in &accumulated {
            if let (Some(prior), Some(values)) = (params.get(key), variables.get_mut(key)) {
                values.extend(prior.iter().cloned());
            }
        }

        ResolvedFilters { filters, covered, variables }
    }
}
