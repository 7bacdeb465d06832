//! Error types for discovery and dispatch.
//!
//! These mark wiring and contract violations. Expected domain failures never
//! appear here — they travel inside an [`Outcome`](crate::Outcome).

use std::error::Error;
use std::fmt;

use crate::discovery::discover::AmbiguousBinding;

/// Error from strict discovery installation.
#[derive(Debug)]
pub enum DiscoveryError {
    /// A (shape, message type) signature was bound by more than one handler.
    AmbiguousBinding(AmbiguousBinding),
}

impl fmt::Display for DiscoveryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DiscoveryError::AmbiguousBinding(ambiguous) => {
                write!(
                    f,
                    "ambiguous binding for message {}: handlers ",
                    ambiguous.message
                )?;
                for (i, handler) in ambiguous.handlers.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{}", handler)?;
                }
                Ok(())
            }
        }
    }
}

impl Error for DiscoveryError {}

/// Error from typed dispatch through a registry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DispatchError {
    /// No handler is bound to this message type.
    Unbound {
        /// Fully qualified name of the unbound message type.
        message: &'static str,
    },
    /// A binding exists but its factory does not produce the expected
    /// handler shape. Unreachable through module registration; guards
    /// hand-built surfaces.
    FactoryMismatch {
        /// Fully qualified name of the message type.
        message: &'static str,
        /// Fully qualified name of the bound handler type.
        handler: &'static str,
    },
}

impl fmt::Display for DispatchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DispatchError::Unbound { message } => {
                write!(f, "no handler bound for message type {}", message)
            }
            DispatchError::FactoryMismatch { message, handler } => write!(
                f,
                "factory for {} does not produce the expected handler shape (bound type: {})",
                message, handler
            ),
        }
    }
}

impl Error for DispatchError {}
