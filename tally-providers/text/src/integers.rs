//! Integer arrays stored one value per line.

use std::io::{self, BufRead};
use std::num::ParseIntError;

use thiserror::Error;
use tracing::debug;

/// Errors raised while reading an [`IntegerArray`].
#[derive(Debug, Error)]
pub enum IntegerArrayError {
    /// Reading from the underlying source failed.
    #[error("failed to read integer array: {0}")]
    Io(#[from] io::Error),
    /// A non-blank line was not a decimal integer.
    #[error("line {line}: `{value}` is not an integer")]
    InvalidInteger {
        /// 1-based line number.
        line: usize,
        /// Trimmed line content.
        value: String,
        /// Parser failure.
        #[source]
        source: ParseIntError,
    },
}

/// Named sequence of integers read from text.
///
/// # Examples
/// ```
/// use std::io::Cursor;
/// use tally_providers_text::IntegerArray;
///
/// let array = IntegerArray::try_from_reader("demo", Cursor::new("3\n1\n\n2\n"))?;
/// assert_eq!(array.values(), &[3, 1, 2]);
/// # Ok::<(), tally_providers_text::IntegerArrayError>(())
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct IntegerArray {
    name: String,
    values: Vec<i64>,
}

impl IntegerArray {
    /// Wraps values that are already in memory.
    #[must_use]
    pub fn new(name: impl Into<String>, values: Vec<i64>) -> Self {
        Self {
            name: name.into(),
            values,
        }
    }

    /// Reads one integer per line, skipping blank lines and trimming
    /// surrounding whitespace. An empty source yields an empty array.
    ///
    /// # Errors
    /// Returns [`IntegerArrayError::Io`] when reading fails and
    /// [`IntegerArrayError::InvalidInteger`] for the first line that does not
    /// parse.
    pub fn try_from_reader<R: BufRead>(
        name: impl Into<String>,
        reader: R,
    ) -> Result<Self, IntegerArrayError> {
        let mut values = Vec::new();
        for (index, line) in reader.lines().enumerate() {
            let text = line?;
            let trimmed = text.trim();
            if trimmed.is_empty() {
                continue;
            }
            let value = trimmed
                .parse::<i64>()
                .map_err(|source| IntegerArrayError::InvalidInteger {
                    line: index + 1,
                    value: trimmed.to_owned(),
                    source,
                })?;
            values.push(value);
        }

        let array = Self::new(name, values);
        debug!(name = %array.name, len = array.values.len(), "read integer array");
        Ok(array)
    }

    /// Returns the source name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the values in file order.
    #[must_use]
    pub fn values(&self) -> &[i64] {
        &self.values
    }

    /// Returns the number of values.
    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Returns `true` when the array holds no values.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}
