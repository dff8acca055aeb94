use std::fmt;

use crate::utils::display_number;

/// A single dataset cell.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Missing,
    Number(f64),
    Text(String),
    Bool(bool),
}

impl Value {
    /// Interpret a raw CSV cell: empty or `NaN` is missing, numbers become
    /// [`Value::Number`], anything else is kept as text.
    pub fn parse_cell(cell: &str) -> Self {
        let cell = cell.trim();
        if cell.is_empty() {
            return Value::Missing;
        }
        match cell.parse::<f64>() {
            Ok(n) if n.is_nan() => Value::Missing,
            Ok(n) => Value::Number(n),
            Err(_) => Value::Text(cell.to_string()),
        }
    }

    pub fn text(s: impl Into<String>) -> Self {
        Value::Text(s.into())
    }

    pub fn is_missing(&self) -> bool {
        matches!(self, Value::Missing)
    }

    /// Numeric view of the cell. Text that spells a number counts.
    pub fn as_number(&self) -> Option<f64> {
        match self {
            Value::Number(n) => Some(*n),
            Value::Text(s) => s.trim().parse::<f64>().ok().filter(|n| !n.is_nan()),
            Value::Missing | Value::Bool(_) => None,
        }
    }

    /// Cell content as written to CSV output. Missing cells are empty.
    pub fn to_csv_field(&self) -> String {
        match self {
            Value::Missing => String::new(),
            other => other.to_string(),
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Missing => write!(f, "missing"),
            Value::Number(n) => write!(f, "{}", display_number(*n)),
            Value::Text(s) => write!(f, "{}", s),
            Value::Bool(true) => write!(f, "True"),
            Value::Bool(false) => write!(f, "False"),
        }
    }
}

impl From<f64> for Value {
    fn from(n: f64) -> Self {
        Value::Number(n)
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::Text(s.to_string())
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(value: Option<T>) -> Self {
        value.map_or(Value::Missing, Into::into)
    }
}
