//! Named indicator output series.

/// One named column of indicator values, index-aligned to the price table
/// it was derived from.
///
/// `f64::NAN` marks the documented "insufficient history" state at
/// warm-up positions (and any numeric edge case such as a zero
/// denominator); it is never an error.
#[derive(Debug, Clone, PartialEq)]
pub struct Series {
    name: String,
    values: Vec<f64>,
}

impl Series {
    /// Create a new series.
    pub fn new(name: impl Into<String>, values: Vec<f64>) -> Self {
        Self {
            name: name.into(),
            values,
        }
    }

    /// Column label, also the join key.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The values, oldest first.
    pub fn values(&self) -> &[f64] {
        &self.values
    }

    /// Number of entries.
    #[inline]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Check if the series is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Get a value by position.
    pub fn get(&self, index: usize) -> Option<f64> {
        self.values.get(index).copied()
    }

    /// Count of leading undefined entries (the realized warm-up).
    pub fn leading_undefined(&self) -> usize {
        self.values.iter().take_while(|v| v.is_nan()).count()
    }

    /// Count of defined entries.
    pub fn defined_count(&self) -> usize {
        self.values.iter().filter(|v| !v.is_nan()).count()
    }

    /// Consume the series, returning its parts.
    pub fn into_parts(self) -> (String, Vec<f64>) {
        (self.name, self.values)
    }
}
