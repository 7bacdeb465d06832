//! Handler capability traits.
//!
//! One trait per message shape, each exposing a single operation:
//! `process(message, cancel)` asynchronously produces an [`Outcome`].
//!
//! Handlers are expected to be stateless or to hold only per-invocation
//! state. The registration surface resolves a fresh instance per logical
//! request, so a handler must never assume it is shared across invocations —
//! but any one instance may still run concurrently with other instances of
//! the same type.
//!
//! ## Cancellation
//!
//! Every `process` call receives a [`CancellationToken`]. A handler should
//! check it at suspension points (before or during any awaited
//! sub-operation) and return [`Outcome::cancelled`] rather than swallowing
//! the signal or reporting it as an ordinary failure.
//!
//! ## Failure propagation
//!
//! Expected domain failures never escape `process` as errors or panics —
//! they are returned inside the `Outcome`. Translating an infrastructure
//! error (a dependency failing) into an outcome is the handler's own choice.

use async_trait::async_trait;
use tokio_util::sync::CancellationToken;

use crate::message::{Command, CommandWithOutput, Query};
use crate::outcome::Outcome;

/// Processes a [`Command`] — a state change with no output value.
///
/// ## Example
///
/// ```
/// use async_trait::async_trait;
/// use mediator_rust::{Command, CommandHandler, CancellationToken, Outcome};
///
/// struct DeactivateUser { pub id: u64 }
/// impl Command for DeactivateUser {}
///
/// #[derive(Default)]
/// struct DeactivateUserHandler;
///
/// #[async_trait]
/// impl CommandHandler<DeactivateUser> for DeactivateUserHandler {
///     async fn process(&self, command: DeactivateUser, cancel: CancellationToken) -> Outcome {
///         if cancel.is_cancelled() {
///             return Outcome::cancelled();
///         }
///         // ... perform the state change for command.id ...
///         Outcome::ok()
///     }
/// }
/// ```
#[async_trait]
pub trait CommandHandler<C: Command>: Send + Sync {
    /// Process one command instance.
    async fn process(&self, command: C, cancel: CancellationToken) -> Outcome;
}

/// Processes a [`CommandWithOutput`] — a state change producing
/// `C::Output`.
#[async_trait]
pub trait CommandOutputHandler<C: CommandWithOutput>: Send + Sync {
    /// Process one command instance, producing the declared output on
    /// success.
    async fn process(&self, command: C, cancel: CancellationToken) -> Outcome<C::Output>;
}

/// Processes a [`Query`] — a read-only request producing `Q::Output`.
///
/// Query handlers must not mutate observable state (documented convention,
/// see [`Query`]).
#[async_trait]
pub trait QueryHandler<Q: Query>: Send + Sync {
    /// Process one query instance, producing the declared output on success.
    async fn process(&self, query: Q, cancel: CancellationToken) -> Outcome<Q::Output>;
}
