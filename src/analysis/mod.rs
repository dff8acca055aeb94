//! Descriptive statistics over a recoded dataset.
//!
//! [`analyze`] runs the standard set of comparisons between household
//! language, linguistic isolation and public-assistance income.

pub mod chi_square;
pub mod filters;
pub mod proportions;
pub mod spread;

pub use chi_square::{ChiSquareTest, chi_square, chi_square_prep};
pub use filters::{exclude_english, filter_categories};
pub use proportions::{Proportion, mean_proportion, proportions};
pub use spread::{Spread, spread_by};

use tracing::{debug, warn};

use crate::core::{
    Dataset, Error, LanguageKey, Result, Value,
    recode::{
        AGE, HOUSEHOLD_LANGUAGE, LINGUISTIC_ISOLATION, PERSONAL_LANGUAGE, PRECISE_HOUSEHOLD_LANGUAGE,
        PUBLIC_ASSISTANCE, uncoded_column,
    },
};

/// Proportions of one category column meeting a condition.
#[derive(Debug, Clone, PartialEq)]
pub struct ProportionTable {
    pub title: String,
    pub category: String,
    pub observed: String,
    pub rows: Vec<Proportion>,
}

impl ProportionTable {
    pub fn mean(&self) -> Option<f64> {
        mean_proportion(&self.rows)
    }
}

/// Spread of a numeric column per category, with the all-rows control.
#[derive(Debug, Clone, PartialEq)]
pub struct SpreadTable {
    pub title: String,
    pub category: String,
    pub value: String,
    pub rows: Vec<Spread>,
    pub control: Option<Spread>,
}

/// A named chi-square test; degenerate inputs are kept as the error.
#[derive(Debug)]
pub struct NamedTest {
    pub title: String,
    pub outcome: std::result::Result<ChiSquareTest, Error>,
}

#[derive(Debug)]
pub struct Analysis {
    /// Rows left after merging, before any filter.
    pub row_count: usize,
    /// Rows in the focus-family subset.
    pub focus_row_count: usize,
    pub spreads: Vec<SpreadTable>,
    pub tables: Vec<ProportionTable>,
    pub tests: Vec<NamedTest>,
}

impl Analysis {
    pub fn table(&self, category: &str, observed: &str) -> Option<&ProportionTable> {
        self.tables
            .iter()
            .find(|t| t.category == category && t.observed == observed)
    }
}

/// Run every comparison on a recoded dataset.
///
/// English answers are blanked first (see [`exclude_english`]); the focus
/// subset holds the rows whose personal language family is in `focus_families`.
pub fn analyze(data: &Dataset, key: &LanguageKey, focus_families: &[String]) -> Result<Analysis> {
    let household_family = uncoded_column(PRECISE_HOUSEHOLD_LANGUAGE);
    let personal_family = uncoded_column(PERSONAL_LANGUAGE);
    let truth = Value::Bool(true);

    let mut filtered = data.clone();
    exclude_english(
        &mut filtered,
        &[household_family.as_str(), HOUSEHOLD_LANGUAGE, PERSONAL_LANGUAGE],
        key,
    )?;
    let focus = filter_categories(data, &personal_family, focus_families)?;
    debug!(
        rows = filtered.row_count(),
        focus_rows = focus.row_count(),
        "prepared analysis subsets"
    );

    let spread = |title: &str, category: &str| {
        spread_by(&filtered, category, AGE).map(|(rows, control)| SpreadTable {
            title: title.to_string(),
            category: category.to_string(),
            value: AGE.to_string(),
            rows,
            control,
        })
    };

    let spreads = vec![
        spread("Age by household language family", &household_family)?,
        spread("Age by household language", HOUSEHOLD_LANGUAGE)?,
    ];

    let table = |title: &str, data: &Dataset, category: &str, observed: &str| {
        proportions(data, category, observed, &truth).map(|rows| ProportionTable {
            title: title.to_string(),
            category: category.to_string(),
            observed: observed.to_string(),
            rows,
        })
    };

    let tables = vec![
        table(
            "Linguistic isolation by household language family",
            &filtered,
            &household_family,
            LINGUISTIC_ISOLATION,
        )?,
        table(
            "Linguistic isolation by household language",
            &filtered,
            HOUSEHOLD_LANGUAGE,
            LINGUISTIC_ISOLATION,
        )?,
        table(
            "Linguistic isolation by personal language family (focus families)",
            &focus,
            &personal_family,
            LINGUISTIC_ISOLATION,
        )?,
        table(
            "Public assistance by household language",
            &filtered,
            HOUSEHOLD_LANGUAGE,
            PUBLIC_ASSISTANCE,
        )?,
        table(
            "Public assistance by personal language family",
            &filtered,
            &personal_family,
            PUBLIC_ASSISTANCE,
        )?,
    ];

    let test = |title: &str, data: &Dataset, category: &str, condition: &str| {
        match chi_square_prep(data, category, condition, &truth) {
            Ok(result) => Ok(NamedTest {
                title: title.to_string(),
                outcome: Ok(result),
            }),
            Err(err @ Error::DegenerateTest { .. }) => {
                warn!("{}: {}", title, err);
                Ok(NamedTest {
                    title: title.to_string(),
                    outcome: Err(err),
                })
            }
            Err(err) => Err(err),
        }
    };

    let tests = vec![
        test(
            "Personal language family vs linguistic isolation",
            &filtered,
            &personal_family,
            LINGUISTIC_ISOLATION,
        )?,
        test(
            "Personal language family vs linguistic isolation (focus families)",
            &focus,
            &personal_family,
            LINGUISTIC_ISOLATION,
        )?,
        test(
            "Household language vs public assistance",
            &filtered,
            HOUSEHOLD_LANGUAGE,
            PUBLIC_ASSISTANCE,
        )?,
    ];

    Ok(Analysis {
        row_count: data.row_count(),
        focus_row_count: focus.row_count(),
        spreads,
        tables,
        tests,
    })
}
