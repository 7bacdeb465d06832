//! mediator_rust — Command/Query contracts with handler discovery.
//!
//! Defines typed message contracts ([`Command`], [`CommandWithOutput`],
//! [`Query`]), the async handler capability per shape, the closed
//! [`Outcome`] type replacing errors-as-control-flow for expected failures,
//! and a discovery mechanism that binds every handler registration in a set
//! of [`HandlerModule`]s to its message type.
//!
//! ## Quick Start
//!
//! ```ignore
//! use mediator_rust::{
//!     handler_module, install, CancellationToken, HandlerRegistry,
//! };
//!
//! // Handlers are registered per module, discovered, then installed once at
//! // startup.
//! let mut registry = HandlerRegistry::new();
//! install(
//!     vec![handler_module!("users",
//!         command_with_output CreateUser => CreateUserHandler,
//!         query GetUser => GetUserHandler,
//!     )],
//!     &mut registry,
//! );
//!
//! // Per request: resolve the handler for the message type and process.
//! let outcome = registry
//!     .dispatch_command_with_output(
//!         CreateUser { name: "Alice".into() },
//!         CancellationToken::new(),
//!     )
//!     .await?;
//! assert!(outcome.is_success());
//! ```

mod discovery;
mod handler;
mod message;
mod outcome;

pub use discovery::{
    discover, duplicates, install, install_strict, AmbiguousBinding, Binding, DiscoveryError,
    DispatchError, HandlerModule, HandlerRegistry, HandlerShape, RegistrationSurface, TypeKey,
};
pub use handler::{CommandHandler, CommandOutputHandler, QueryHandler};
pub use message::{Command, CommandWithOutput, Query};
pub use outcome::{codes, FieldErrors, Outcome};

// Re-export the cancellation token handlers receive, so implementers don't
// need a direct tokio-util dependency.
pub use tokio_util::sync::CancellationToken;

// HTTP response mapping (requires "http" feature)
#[cfg(feature = "http")]
mod http;
