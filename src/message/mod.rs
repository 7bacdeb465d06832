//! Message contracts — the three marker shapes a request can take.

mod message;

pub use message::{Command, CommandWithOutput, Query};
