//! Column-oriented survey table.
//!
//! Only what the recode and analysis stages need: CSV in and out, column
//! projection, row filtering and an inner join on a key column.

use std::{
    collections::HashMap,
    fs::File,
    io::{Read, Write},
    path::Path,
};

use super::{
    error::{Error, Result},
    value::Value,
};

/// Suffixes applied to non-key columns present on both sides of a join.
const LEFT_SUFFIX: &str = "_x";
const RIGHT_SUFFIX: &str = "_y";

#[derive(Debug, Clone, PartialEq)]
pub struct Column {
    pub name: String,
    pub values: Vec<Value>,
}

impl Column {
    pub fn new(name: impl Into<String>, values: Vec<Value>) -> Self {
        Self {
            name: name.into(),
            values,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Dataset {
    columns: Vec<Column>,
    rows: usize,
}

impl Dataset {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a dataset from whole columns. All columns must have the same length.
    pub fn from_columns(columns: Vec<Column>) -> Result<Self> {
        let mut dataset = Self::new();
        for column in columns {
            dataset.set_column(column.name, column.values)?;
        }
        Ok(dataset)
    }

    /// Read a CSV file with a header row, keeping only `columns` when given.
    pub fn from_csv_path(path: &Path, columns: Option<&[&str]>) -> Result<Self> {
        let file = File::open(path).map_err(|e| Error::io(path, e))?;
        Self::from_reader(file, columns).map_err(|err| match err {
            Error::Csv { source, .. } => Error::csv(path, source),
            other => other,
        })
    }

    pub fn from_reader<R: Read>(reader: R, columns: Option<&[&str]>) -> Result<Self> {
        let mut reader = csv::ReaderBuilder::new()
            .has_headers(true)
            .from_reader(reader);

        let headers = reader
            .headers()
            .map_err(|e| Error::csv(Path::new("<input>"), e))?
            .clone();

        let selected: Vec<(usize, String)> = match columns {
            Some(wanted) => wanted
                .iter()
                .map(|name| {
                    headers
                        .iter()
                        .position(|h| h.trim() == *name)
                        .map(|index| (index, name.to_string()))
                        .ok_or_else(|| Error::missing_column(name))
                })
                .collect::<Result<_>>()?,
            None => headers
                .iter()
                .enumerate()
                .map(|(index, name)| (index, name.trim().to_string()))
                .collect(),
        };

        let mut values: Vec<Vec<Value>> = vec![Vec::new(); selected.len()];
        for record in reader.records() {
            let record = record.map_err(|e| Error::csv(Path::new("<input>"), e))?;
            for (slot, (index, _)) in values.iter_mut().zip(&selected) {
                slot.push(Value::parse_cell(record.get(*index).unwrap_or("")));
            }
        }

        Self::from_columns(
            selected
                .into_iter()
                .zip(values)
                .map(|((_, name), values)| Column::new(name, values))
                .collect(),
        )
    }

    pub fn row_count(&self) -> usize {
        self.rows
    }

    pub fn column_count(&self) -> usize {
        self.columns.len()
    }

    pub fn column_names(&self) -> impl Iterator<Item = &str> {
        self.columns.iter().map(|c| c.name.as_str())
    }

    pub fn has_column(&self, name: &str) -> bool {
        self.columns.iter().any(|c| c.name == name)
    }

    pub fn column(&self, name: &str) -> Result<&[Value]> {
        self.columns
            .iter()
            .find(|c| c.name == name)
            .map(|c| c.values.as_slice())
            .ok_or_else(|| Error::missing_column(name))
    }

    pub fn column_mut(&mut self, name: &str) -> Result<&mut Vec<Value>> {
        self.columns
            .iter_mut()
            .find(|c| c.name == name)
            .map(|c| &mut c.values)
            .ok_or_else(|| Error::missing_column(name))
    }

    /// Replace a column's values, or append a new column.
    pub fn set_column(&mut self, name: impl Into<String>, values: Vec<Value>) -> Result<()> {
        let name = name.into();
        if self.columns.is_empty() {
            self.rows = values.len();
        } else if values.len() != self.rows {
            return Err(Error::ColumnLength {
                column: name,
                expected: self.rows,
                found: values.len(),
            });
        }

        match self.columns.iter_mut().find(|c| c.name == name) {
            Some(column) => column.values = values,
            None => self.columns.push(Column::new(name, values)),
        }
        Ok(())
    }

    /// Project onto `names`, in that order.
    pub fn select(&self, names: &[&str]) -> Result<Dataset> {
        let columns = names
            .iter()
            .map(|name| Ok(Column::new(*name, self.column(name)?.to_vec())))
            .collect::<Result<Vec<_>>>()?;
        Ok(Dataset {
            columns,
            rows: self.rows,
        })
    }

    /// Keep the rows for which `keep(row_index)` returns true.
    pub fn filter_rows(&self, mut keep: impl FnMut(usize) -> bool) -> Dataset {
        let kept: Vec<usize> = (0..self.rows).filter(|&row| keep(row)).collect();
        self.take_rows(&kept)
    }

    /// Drop rows in which every cell is missing. Returns how many were dropped.
    pub fn drop_empty_rows(&mut self) -> usize {
        let kept: Vec<usize> = (0..self.rows)
            .filter(|&row| self.columns.iter().any(|c| !c.values[row].is_missing()))
            .collect();
        let dropped = self.rows - kept.len();
        if dropped > 0 {
            *self = self.take_rows(&kept);
        }
        dropped
    }

    /// Inner join on `on`.
    ///
    /// Left row order is preserved and each left row is followed by its right
    /// matches in right order. The key column appears once. Rows with a
    /// missing key never match.
    pub fn inner_join(&self, right: &Dataset, on: &str) -> Result<Dataset> {
        let left_keys = self.column(on)?;
        let right_keys = right.column(on)?;

        let mut index: HashMap<String, Vec<usize>> = HashMap::new();
        for (row, key) in right_keys.iter().enumerate() {
            if !key.is_missing() {
                index.entry(key.to_string()).or_default().push(row);
            }
        }

        let mut pairs: Vec<(usize, usize)> = Vec::new();
        for (left_row, key) in left_keys.iter().enumerate() {
            if key.is_missing() {
                continue;
            }
            if let Some(matches) = index.get(&key.to_string()) {
                pairs.extend(matches.iter().map(|&right_row| (left_row, right_row)));
            }
        }

        let clashes = |name: &str| name != on && self.has_column(name) && right.has_column(name);

        let mut columns = Vec::with_capacity(self.columns.len() + right.columns.len());
        for column in &self.columns {
            let name = if clashes(&column.name) {
                format!("{}{}", column.name, LEFT_SUFFIX)
            } else {
                column.name.clone()
            };
            let values = pairs
                .iter()
                .map(|&(l, _)| column.values[l].clone())
                .collect();
            columns.push(Column::new(name, values));
        }
        for column in right.columns.iter().filter(|c| c.name != on) {
            let name = if clashes(&column.name) {
                format!("{}{}", column.name, RIGHT_SUFFIX)
            } else {
                column.name.clone()
            };
            let values = pairs
                .iter()
                .map(|&(_, r)| column.values[r].clone())
                .collect();
            columns.push(Column::new(name, values));
        }

        Ok(Dataset {
            columns,
            rows: pairs.len(),
        })
    }

    /// Write the dataset as CSV with a header row.
    pub fn write_csv<W: Write>(&self, writer: W) -> csv::Result<()> {
        let mut writer = csv::Writer::from_writer(writer);
        writer.write_record(self.column_names())?;
        for row in 0..self.rows {
            writer.write_record(self.columns.iter().map(|c| c.values[row].to_csv_field()))?;
        }
        writer.flush()?;
        Ok(())
    }

    fn take_rows(&self, rows: &[usize]) -> Dataset {
        let columns = self
            .columns
            .iter()
            .map(|c| {
                Column::new(
                    c.name.clone(),
                    rows.iter().map(|&row| c.values[row].clone()).collect(),
                )
            })
            .collect();
        Dataset {
            columns,
            rows: rows.len(),
        }
    }
}
