//! Test utilities and mock record types for Chirp development.
//!
//! Provides [`OpaqueRecord`], a record representation that does not
//! support enrichment (for exercising the unsupported-representation
//! failure path), and sample-data [`fixtures`] for tests and benches.

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

use chirp_core::{Record, Value};

pub mod fixtures;

/// A minimal record representation that cannot be enriched.
///
/// Implements only the read side of [`Record`]; `with_fields` falls
/// through to the default refusal. Conversion code that receives one of
/// these must surface the unsupported-representation error rather than
/// silently succeeding.
#[derive(Debug)]
pub struct OpaqueRecord {
    samples: Vec<f64>,
}

impl OpaqueRecord {
    pub fn new(samples: Vec<f64>) -> Self {
        Self { samples }
    }
}

impl Record for OpaqueRecord {
    fn field_names(&self) -> Vec<String> {
        vec!["samples".to_string()]
    }

    fn get(&self, name: &str) -> Option<Value> {
        (name == "samples").then(|| Value::Array(self.samples.clone()))
    }
}
