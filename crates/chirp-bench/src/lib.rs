//! Benchmark profiles for the Chirp parameter-conversion library.
//!
//! Provides pre-built records sized for benchmarking the conversion
//! driver; the benches themselves live under `benches/`.

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use chirp_core::{catalog, ParamMap, ParamTable, Value};
use chirp_test_utils::fixtures;

/// Fixed seed shared by all bench profiles for run-to-run stability.
pub const BENCH_SEED: u64 = 42;

/// An array-mode posterior table with `rows` samples of every field the
/// standard registry consumes.
pub fn table_profile(rows: usize) -> ParamTable {
    fixtures::posterior_table(rows, BENCH_SEED)
}

/// A mapping-mode record holding the same sampled fields as
/// [`table_profile`], as arrays.
pub fn map_profile(rows: usize) -> ParamMap {
    let table = table_profile(rows);
    let mut map = ParamMap::new();
    for name in [
        catalog::MCHIRP,
        catalog::Q,
        catalog::SPIN1_A,
        catalog::SPIN1_AZIMUTHAL,
        catalog::SPIN1_POLAR,
        catalog::SPIN2_A,
        catalog::SPIN2_AZIMUTHAL,
        catalog::SPIN2_POLAR,
        catalog::DISTANCE,
    ] {
        let column = table.column(name).expect("profile column").to_vec();
        map.insert(name, Value::Array(column))
            .expect("profile columns share one length");
    }
    map
}
