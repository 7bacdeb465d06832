//! Outcome — the closed result type every handler returns.
//!
//! Expected domain failures travel as data inside an [`Outcome`], never as
//! errors across the handler boundary. The failure vocabulary is a small set
//! of string tags ([`codes`]) plus caller-chosen custom codes.

mod outcome;

pub use outcome::{codes, FieldErrors, Outcome};
