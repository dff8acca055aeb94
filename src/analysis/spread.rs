//! Numeric spread of one column within each category.
//!
//! The text counterpart of a violin plot: five-number summary plus mean per
//! category, and a control row over every category together.

use statrs::statistics::{Data, Distribution, Max, Median, Min, OrderStatistics};

use crate::core::{Dataset, Result};

#[derive(Debug, Clone, PartialEq)]
pub struct Spread {
    pub category: String,
    pub count: usize,
    pub min: f64,
    pub lower_quartile: f64,
    pub median: f64,
    pub upper_quartile: f64,
    pub max: f64,
    pub mean: f64,
}

impl Spread {
    /// Summarize `values`; `None` when there is nothing to summarize.
    pub fn of(category: impl Into<String>, values: Vec<f64>) -> Option<Self> {
        if values.is_empty() {
            return None;
        }
        let count = values.len();
        let mut data = Data::new(values);
        Some(Self {
            category: category.into(),
            count,
            min: data.min(),
            lower_quartile: data.lower_quartile(),
            median: data.median(),
            upper_quartile: data.upper_quartile(),
            max: data.max(),
            mean: data.mean()?,
        })
    }
}

/// Spread of `value_column` per distinct `category` value, in first-seen order,
/// plus the control spread over all counted rows.
///
/// Rows with a missing category or a non-numeric value are not counted.
pub fn spread_by(
    data: &Dataset,
    category: &str,
    value_column: &str,
) -> Result<(Vec<Spread>, Option<Spread>)> {
    let categories = data.column(category)?;
    let values = data.column(value_column)?;

    let mut groups: Vec<(String, Vec<f64>)> = Vec::new();
    let mut all = Vec::new();
    for (name, value) in categories.iter().zip(values) {
        let Some(number) = value.as_number() else {
            continue;
        };
        if name.is_missing() {
            continue;
        }
        let name = name.to_string();
        match groups.iter_mut().find(|(n, _)| *n == name) {
            Some((_, group)) => group.push(number),
            None => groups.push((name, vec![number])),
        }
        all.push(number);
    }

    let spreads = groups
        .into_iter()
        .filter_map(|(name, group)| Spread::of(name, group))
        .collect();
    Ok((spreads, Spread::of("all", all)))
}
