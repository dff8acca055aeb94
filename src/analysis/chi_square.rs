//! Chi-square goodness-of-fit on category/condition counts.

use statrs::distribution::{ChiSquared, ContinuousCDF};

use crate::core::{Dataset, Error, Result, UNSPECIFIED_LABEL, Value};

/// Outcome of one goodness-of-fit test.
#[derive(Debug, Clone, PartialEq)]
pub struct ChiSquareTest {
    pub column: String,
    pub categories: Vec<String>,
    pub observed: Vec<f64>,
    pub expected: Vec<f64>,
    pub statistic: f64,
    pub p_value: f64,
    pub degrees_of_freedom: f64,
}

/// Compare, per category, how many rows meet `condition` against the count
/// expected if the condition were independent of the category.
///
/// Missing and unspecified categories are left out. Expected count for a
/// category is `category rows * rows meeting the condition / total rows`.
pub fn chi_square_prep(
    data: &Dataset,
    category: &str,
    condition_column: &str,
    condition: &Value,
) -> Result<ChiSquareTest> {
    let categories = data.column(category)?;
    let conditions = data.column(condition_column)?;

    let rows: Vec<(String, bool)> = categories
        .iter()
        .zip(conditions)
        .filter(|(value, _)| !value.is_missing())
        .map(|(value, cell)| (value.to_string(), cell == condition))
        .filter(|(name, _)| name != UNSPECIFIED_LABEL)
        .collect();

    let total = rows.len() as f64;
    let meeting = rows.iter().filter(|(_, met)| *met).count() as f64;

    let mut names: Vec<String> = Vec::new();
    let mut sizes: Vec<f64> = Vec::new();
    let mut observed: Vec<f64> = Vec::new();
    for (name, met) in &rows {
        let index = match names.iter().position(|n| n == name) {
            Some(index) => index,
            None => {
                names.push(name.clone());
                sizes.push(0.0);
                observed.push(0.0);
                names.len() - 1
            }
        };
        sizes[index] += 1.0;
        if *met {
            observed[index] += 1.0;
        }
    }

    let expected: Vec<f64> = sizes.iter().map(|size| size * meeting / total).collect();
    let (statistic, p_value) = chi_square(&observed, &expected).map_err(|reason| {
        Error::DegenerateTest {
            column: category.to_string(),
            reason,
        }
    })?;

    Ok(ChiSquareTest {
        column: category.to_string(),
        categories: names,
        degrees_of_freedom: (observed.len() - 1) as f64,
        observed,
        expected,
        statistic,
        p_value,
    })
}

/// Goodness-of-fit statistic and p-value for paired observed/expected counts.
pub fn chi_square(observed: &[f64], expected: &[f64]) -> std::result::Result<(f64, f64), String> {
    if observed.len() != expected.len() {
        return Err(format!(
            "{} observed counts but {} expected counts",
            observed.len(),
            expected.len()
        ));
    }
    if observed.len() < 2 {
        return Err(format!("needs at least 2 categories, found {}", observed.len()));
    }
    if expected.iter().any(|&e| e.is_nan() || e <= 0.0) {
        return Err("expected counts must be positive".to_string());
    }

    let statistic: f64 = observed
        .iter()
        .zip(expected)
        .map(|(o, e)| (o - e) * (o - e) / e)
        .sum();

    let dist = ChiSquared::new((observed.len() - 1) as f64).map_err(|e| e.to_string())?;
    let p_value = dist.sf(statistic).clamp(0.0, 1.0);
    Ok((statistic, p_value))
}
