use crate::core::{Dataset, Result, Value};

/// Share of rows in one category that meet a condition.
#[derive(Debug, Clone, PartialEq)]
pub struct Proportion {
    pub category: String,
    pub observed: usize,
    pub total: usize,
    pub proportion: f64,
}

/// For every distinct value of `category` (first-seen order), the share of its
/// rows whose `observed` cell equals `condition`.
///
/// Rows are counted individually, not per household.
pub fn proportions(
    data: &Dataset,
    category: &str,
    observed: &str,
    condition: &Value,
) -> Result<Vec<Proportion>> {
    let categories = data.column(category)?;
    let observed = data.column(observed)?;

    let mut results: Vec<Proportion> = Vec::new();
    for (value, cell) in categories.iter().zip(observed) {
        let name = value.to_string();
        let index = match results.iter().position(|p| p.category == name) {
            Some(index) => index,
            None => {
                results.push(Proportion {
                    category: name,
                    observed: 0,
                    total: 0,
                    proportion: 0.0,
                });
                results.len() - 1
            }
        };
        let entry = &mut results[index];
        entry.total += 1;
        if cell == condition {
            entry.observed += 1;
        }
    }

    for entry in &mut results {
        entry.proportion = entry.observed as f64 / entry.total as f64;
    }
    Ok(results)
}

/// Unweighted mean of the per-category proportions.
pub fn mean_proportion(proportions: &[Proportion]) -> Option<f64> {
    if proportions.is_empty() {
        return None;
    }
    let sum: f64 = proportions.iter().map(|p| p.proportion).sum();
    Some(sum / proportions.len() as f64)
}
