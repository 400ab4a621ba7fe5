//! Field values and elementwise lifting of scalar functions.
//!
//! A record field holds either a single number or an array of posterior
//! samples. [`lift`] applies a pure scalar function elementwise over a
//! mixed scalar/array argument list, broadcasting scalars across the
//! common array length.

use crate::error::RecordError;
use smallvec::SmallVec;

/// A field value: a single number or an array of samples.
///
/// All array-valued fields of one record share the same length.
#[derive(Clone, Debug, PartialEq)]
pub enum Value {
    /// A single number.
    Scalar(f64),
    /// One number per posterior sample.
    Array(Vec<f64>),
}

impl Value {
    /// Array length, or `None` for a scalar.
    pub fn len(&self) -> Option<usize> {
        match self {
            Self::Scalar(_) => None,
            Self::Array(a) => Some(a.len()),
        }
    }

    /// Whether this is a zero-length array. Scalars are never empty.
    pub fn is_empty(&self) -> bool {
        matches!(self, Self::Array(a) if a.is_empty())
    }

    /// Element at row `i`. Scalars broadcast to every row.
    ///
    /// # Panics
    ///
    /// Panics if `i` is out of bounds for an array value.
    pub fn at(&self, i: usize) -> f64 {
        match self {
            Self::Scalar(v) => *v,
            Self::Array(a) => a[i],
        }
    }

    /// The scalar payload, if this is a scalar.
    pub fn as_scalar(&self) -> Option<f64> {
        match self {
            Self::Scalar(v) => Some(*v),
            Self::Array(_) => None,
        }
    }

    /// The array payload, if this is an array.
    pub fn as_array(&self) -> Option<&[f64]> {
        match self {
            Self::Scalar(_) => None,
            Self::Array(a) => Some(a),
        }
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Self::Scalar(v)
    }
}

impl From<Vec<f64>> for Value {
    fn from(v: Vec<f64>) -> Self {
        Self::Array(v)
    }
}

/// The broadcast length shared by `args`: `None` if all are scalars.
///
/// All array arguments must agree on one length.
pub fn common_len(args: &[&Value]) -> Result<Option<usize>, RecordError> {
    let mut len = None;
    for v in args {
        if let Some(n) = v.len() {
            match len {
                None => len = Some(n),
                Some(m) if m != n => {
                    return Err(RecordError::LengthMismatch {
                        expected: m,
                        actual: n,
                    })
                }
                Some(_) => {}
            }
        }
    }
    Ok(len)
}

/// Apply a pure scalar function elementwise over `args`.
///
/// Scalars broadcast across the common array length; an all-scalar
/// argument list yields a scalar. `f` receives one `f64` per argument,
/// in the order of `args`.
pub fn lift(args: &[&Value], f: impl Fn(&[f64]) -> f64) -> Result<Value, RecordError> {
    let mut row: SmallVec<[f64; 8]> = SmallVec::with_capacity(args.len());
    match common_len(args)? {
        None => {
            row.extend(args.iter().map(|v| v.at(0)));
            Ok(Value::Scalar(f(&row)))
        }
        Some(n) => {
            let mut out = Vec::with_capacity(n);
            for i in 0..n {
                row.clear();
                row.extend(args.iter().map(|v| v.at(i)));
                out.push(f(&row));
            }
            Ok(Value::Array(out))
        }
    }
}
