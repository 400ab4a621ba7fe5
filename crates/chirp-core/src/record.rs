//! The `Record` abstraction and its two concrete representations.
//!
//! Conversion rules operate uniformly on a [`Record`] trait object.
//! Two representations are provided: [`ParamTable`], a structured
//! multi-column array with append-only enrichment, and [`ParamMap`],
//! a plain ordered mapping with merge enrichment. Representations
//! that do not override [`Record::with_fields`] refuse enrichment
//! with [`RecordError::Unsupported`].

use crate::error::RecordError;
use crate::value::Value;
use indexmap::IndexMap;
use std::any::Any;
use std::fmt;

/// Computed output fields of one conversion, in production order.
pub type FieldMap = IndexMap<&'static str, Value>;

/// A set of named parameter fields, scalar or array valued.
///
/// # Object safety
///
/// This trait is designed for use as `dyn Record`; conversion rules and
/// the driver are written once against it. Use `downcast_ref` for
/// opt-in specialization on concrete representations.
pub trait Record: Any + fmt::Debug {
    /// Names of the fields currently present, in record order.
    fn field_names(&self) -> Vec<String>;

    /// Value of the named field, if present.
    fn get(&self, name: &str) -> Option<Value>;

    /// Whether the named field is present.
    fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    /// A new record containing all existing fields plus `new_fields`.
    ///
    /// Enrichment is additive: previously present fields keep their
    /// values (subject to each representation's collision policy).
    /// The default implementation refuses: a representation that does
    /// not opt in cannot be enriched.
    fn with_fields(&self, new_fields: FieldMap) -> Result<Box<dyn Record>, RecordError> {
        let _ = new_fields;
        Err(RecordError::Unsupported {
            type_name: std::any::type_name::<Self>(),
        })
    }
}

impl dyn Record {
    /// Attempt to downcast to a concrete record representation.
    pub fn downcast_ref<T: Record>(&self) -> Option<&T> {
        (self as &dyn Any).downcast_ref::<T>()
    }
}

/// Array-mode record: an ordered multi-column structured table.
///
/// Every column has the same number of rows. Enrichment is append-only:
/// [`with_fields`](Record::with_fields) returns a new table and rejects
/// names that already exist.
#[derive(Clone, Debug, PartialEq)]
pub struct ParamTable {
    columns: IndexMap<String, Vec<f64>>,
    rows: usize,
}

impl ParamTable {
    /// Build a table from named columns.
    ///
    /// The first column fixes the row count; later columns must match.
    pub fn from_columns<N, I>(columns: I) -> Result<Self, RecordError>
    where
        N: Into<String>,
        I: IntoIterator<Item = (N, Vec<f64>)>,
    {
        let mut table = Self {
            columns: IndexMap::new(),
            rows: 0,
        };
        for (name, col) in columns {
            let name = name.into();
            if table.columns.contains_key(&name) {
                return Err(RecordError::DuplicateField { field: name });
            }
            if table.columns.is_empty() {
                table.rows = col.len();
            } else if col.len() != table.rows {
                return Err(RecordError::RowCountMismatch {
                    field: name,
                    expected: table.rows,
                    actual: col.len(),
                });
            }
            table.columns.insert(name, col);
        }
        Ok(table)
    }

    /// Number of rows (posterior samples).
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns.
    pub fn width(&self) -> usize {
        self.columns.len()
    }

    /// Borrow a column by name.
    pub fn column(&self, name: &str) -> Option<&[f64]> {
        self.columns.get(name).map(Vec::as_slice)
    }
}

impl Record for ParamTable {
    fn field_names(&self) -> Vec<String> {
        self.columns.keys().cloned().collect()
    }

    fn get(&self, name: &str) -> Option<Value> {
        self.columns.get(name).map(|col| Value::Array(col.clone()))
    }

    fn with_fields(&self, new_fields: FieldMap) -> Result<Box<dyn Record>, RecordError> {
        let mut out = self.clone();
        for (name, value) in new_fields {
            if out.columns.contains_key(name) {
                return Err(RecordError::DuplicateField { field: name.into() });
            }
            let col = match value {
                // Scalars broadcast to a full column.
                Value::Scalar(v) => vec![v; out.rows],
                Value::Array(a) => {
                    if a.len() != out.rows {
                        return Err(RecordError::RowCountMismatch {
                            field: name.into(),
                            expected: out.rows,
                            actual: a.len(),
                        });
                    }
                    a
                }
            };
            out.columns.insert(name.into(), col);
        }
        Ok(Box::new(out))
    }
}

/// Mapping-mode record: an ordered name-to-value mapping.
///
/// Enrichment merges the new fields into a copy of the mapping and
/// returns the merged mapping. A colliding name overwrites the existing
/// value (update semantics); rules are expected never to produce outputs
/// that already exist in full.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ParamMap {
    values: IndexMap<String, Value>,
}

impl ParamMap {
    /// An empty mapping.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a mapping from named values, enforcing the shared array
    /// length invariant.
    pub fn from_fields<N, I>(fields: I) -> Result<Self, RecordError>
    where
        N: Into<String>,
        I: IntoIterator<Item = (N, Value)>,
    {
        let mut map = Self::new();
        for (name, value) in fields {
            map.insert(name, value)?;
        }
        Ok(map)
    }

    /// Insert or replace one field, enforcing the shared array length.
    pub fn insert(&mut self, name: impl Into<String>, value: Value) -> Result<(), RecordError> {
        let name = name.into();
        if let Some(n) = value.len() {
            let established = self
                .values
                .iter()
                .filter(|(k, _)| k.as_str() != name.as_str())
                .find_map(|(_, v)| v.len());
            if let Some(m) = established {
                if m != n {
                    return Err(RecordError::LengthMismatch {
                        expected: m,
                        actual: n,
                    });
                }
            }
        }
        self.values.insert(name, value);
        Ok(())
    }

    /// Number of fields.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Whether the mapping has no fields.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Shared length of the array-valued fields, if any are present.
    pub fn array_len(&self) -> Option<usize> {
        self.values.values().find_map(Value::len)
    }

    /// Iterate over `(name, value)` pairs in record order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.values.iter().map(|(k, v)| (k.as_str(), v))
    }
}

impl Record for ParamMap {
    fn field_names(&self) -> Vec<String> {
        self.values.keys().cloned().collect()
    }

    fn get(&self, name: &str) -> Option<Value> {
        self.values.get(name).cloned()
    }

    fn with_fields(&self, new_fields: FieldMap) -> Result<Box<dyn Record>, RecordError> {
        let mut out = self.clone();
        for (name, value) in new_fields {
            out.insert(name, value)?;
        }
        Ok(Box::new(out))
    }
}
