//! Final output artifact: price columns plus indicator columns.

use chrono::NaiveDate;

use super::{PriceTable, Series};
use crate::error::TableError;

/// A cell value as seen by downstream serialization.
///
/// Every cell is a finite number, explicitly undefined, or text (the
/// date/ticker fields); collaborators never encounter any other type.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Number(f64),
    Undefined,
    Text(String),
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        if v.is_nan() {
            Value::Undefined
        } else {
            Value::Number(v)
        }
    }
}

/// Column names carried over from the price table, in order.
pub const PRICE_COLUMNS: [&str; 5] = ["Open", "High", "Low", "Close", "Volume"];

/// Price table extended with indicator columns, joined by date index.
///
/// Row count and date order are always identical to the source table;
/// joining can only append columns.
#[derive(Debug, Clone)]
pub struct FeatureTable {
    dates: Vec<NaiveDate>,
    columns: Vec<Series>,
}

impl FeatureTable {
    /// Start from a price table, carrying its columns over unchanged.
    pub fn from_table(table: &PriceTable) -> Self {
        let columns = vec![
            Series::new(PRICE_COLUMNS[0], table.opens()),
            Series::new(PRICE_COLUMNS[1], table.highs()),
            Series::new(PRICE_COLUMNS[2], table.lows()),
            Series::new(PRICE_COLUMNS[3], table.closes()),
            Series::new(PRICE_COLUMNS[4], table.volumes()),
        ];
        Self {
            dates: table.dates(),
            columns,
        }
    }

    /// Left-join an indicator series by position.
    ///
    /// The series must carry exactly one value per table row; a duplicate
    /// column name is a configuration error.
    pub fn join(&mut self, series: Series) -> Result<(), TableError> {
        if series.len() != self.dates.len() {
            return Err(TableError::LengthMismatch {
                column: series.name().to_string(),
                expected: self.dates.len(),
                actual: series.len(),
            });
        }
        if self.columns.iter().any(|c| c.name() == series.name()) {
            return Err(TableError::DuplicateColumn(series.name().to_string()));
        }
        self.columns.push(series);
        Ok(())
    }

    /// Number of rows.
    #[inline]
    pub fn num_rows(&self) -> usize {
        self.dates.len()
    }

    /// Number of columns.
    #[inline]
    pub fn num_columns(&self) -> usize {
        self.columns.len()
    }

    /// The date index.
    pub fn dates(&self) -> &[NaiveDate] {
        &self.dates
    }

    /// All columns, in join order.
    pub fn columns(&self) -> &[Series] {
        &self.columns
    }

    /// Column names, in join order.
    pub fn column_names(&self) -> Vec<&str> {
        self.columns.iter().map(|c| c.name()).collect()
    }

    /// Look up a column by name.
    pub fn column(&self, name: &str) -> Option<&Series> {
        self.columns.iter().find(|c| c.name() == name)
    }

    /// One row of cells in column order, or None past the end.
    pub fn row(&self, index: usize) -> Option<Vec<(&str, Value)>> {
        if index >= self.dates.len() {
            return None;
        }
        Some(
            self.columns
                .iter()
                .map(|c| (c.name(), Value::from(c.values()[index])))
                .collect(),
        )
    }
}
