//! peaks-flags: maximum equally-spaced flags placed on sequence peaks.
//!
//! The crate is split into a pure, total algorithmic core (`core`), a
//! wall-clock sweep harness that times the core on random input (`harness`),
//! and text rendering for intermediate state (`diagnostics`).

pub mod core;
pub mod diagnostics;
pub mod error;
pub mod harness;
pub mod telemetry;

pub use crate::core::{FlagsSolution, SuccessorTable, flags_possible, max_flags, peak_indices, solve};
pub use error::{FlagsError, FlagsResult};
