//! Error types for record containers and conversions.
//!
//! Organized by subsystem: [`RecordError`] for the record containers,
//! [`ConversionError`] for rule application and the driver.

use std::error::Error;
use std::fmt;

/// Errors from record construction and field enrichment.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RecordError {
    /// The record representation does not support adding fields.
    Unsupported {
        /// Concrete type name of the offending record.
        type_name: &'static str,
    },
    /// A field with this name is already present in an append-only record.
    DuplicateField {
        /// The contested field name.
        field: String,
    },
    /// A new column's length does not match the table's row count.
    RowCountMismatch {
        /// The offending field name.
        field: String,
        /// Rows in the table.
        expected: usize,
        /// Length of the rejected column.
        actual: usize,
    },
    /// Array-valued fields within one record must share a single length.
    LengthMismatch {
        /// Established array length.
        expected: usize,
        /// Conflicting array length.
        actual: usize,
    },
}

impl fmt::Display for RecordError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unsupported { type_name } => {
                write!(f, "record type '{type_name}' does not support adding fields")
            }
            Self::DuplicateField { field } => {
                write!(f, "field '{field}' already present")
            }
            Self::RowCountMismatch {
                field,
                expected,
                actual,
            } => {
                write!(
                    f,
                    "column '{field}' has {actual} rows, table has {expected}"
                )
            }
            Self::LengthMismatch { expected, actual } => {
                write!(
                    f,
                    "array length {actual} conflicts with established length {expected}"
                )
            }
        }
    }
}

impl Error for RecordError {}

/// Errors from applying a conversion rule or running the driver.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ConversionError {
    /// A transform looked up a field the record does not contain.
    ///
    /// Cannot occur under the driver's applicability check; raised when a
    /// rule is applied standalone with missing inputs.
    MissingField {
        /// Name of the rule performing the lookup.
        rule: String,
        /// The absent field.
        field: String,
    },
    /// The rule has no transform for its current direction.
    ///
    /// Raised at call time when a rule whose inverse transform was never
    /// supplied is applied after `inverse()` swapped its direction.
    NotImplemented {
        /// Name of the rule.
        rule: String,
    },
    /// Merging computed fields into the record failed.
    Record(RecordError),
}

impl fmt::Display for ConversionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingField { rule, field } => {
                write!(f, "rule '{rule}' requires field '{field}' which is not present")
            }
            Self::NotImplemented { rule } => {
                write!(f, "rule '{rule}' has no transform for its current direction")
            }
            Self::Record(err) => write!(f, "record update failed: {err}"),
        }
    }
}

impl Error for ConversionError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Record(err) => Some(err),
            _ => None,
        }
    }
}

impl From<RecordError> for ConversionError {
    fn from(err: RecordError) -> Self {
        Self::Record(err)
    }
}
