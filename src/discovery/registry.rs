//! HandlerRegistry — the reference registration surface.

use std::any::TypeId;
use std::collections::HashMap;

use tokio_util::sync::CancellationToken;
use tracing::warn;

use crate::discovery::binding::{Binding, HandlerShape};
use crate::discovery::discover::RegistrationSurface;
use crate::discovery::error::DispatchError;
use crate::handler::{CommandHandler, CommandOutputHandler, QueryHandler};
use crate::message::{Command, CommandWithOutput, Query};
use crate::outcome::Outcome;

/// In-memory registration surface keyed by (shape, message type).
///
/// Registration of an already-bound signature is last-write-wins, with a
/// `tracing` warning naming both handler types — use
/// [`install_strict`](crate::install_strict) for a hard startup failure
/// instead. Once installation is done the registry is read-only; resolution
/// takes `&self` and the registry is safe for unsynchronized concurrent
/// reads for the rest of the process lifetime.
///
/// Resolution invokes the binding's factory, handing out a fresh handler
/// instance per call — the scoped lifetime. The registry never pools or
/// shares handler instances.
///
/// ## Example
///
/// ```ignore
/// let mut registry = HandlerRegistry::new();
/// install(vec![users_module()], &mut registry);
///
/// let outcome = registry
///     .dispatch_command_with_output(CreateUser { name: "Alice".into() }, cancel)
///     .await?;
/// ```
#[derive(Default)]
pub struct HandlerRegistry {
    bindings: HashMap<(HandlerShape, TypeId), Binding>,
}

impl HandlerRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of bound signatures.
    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    /// Whether the registry has no bindings.
    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }

    /// Names of every bound message type, sorted for stable output.
    pub fn message_types(&self) -> Vec<&'static str> {
        let mut names: Vec<_> = self
            .bindings
            .values()
            .map(|b| b.message().name())
            .collect();
        names.sort_unstable();
        names
    }

    fn binding_for<M: 'static>(&self, shape: HandlerShape) -> Option<&Binding> {
        self.bindings.get(&(shape, TypeId::of::<M>()))
    }

    /// Resolve a fresh [`CommandHandler`] for command type `C`.
    pub fn resolve_command<C: Command>(&self) -> Option<Box<dyn CommandHandler<C>>> {
        self.binding_for::<C>(HandlerShape::Command)
            .and_then(|b| b.instantiate())
    }

    /// Resolve a fresh [`CommandOutputHandler`] for command type `C`.
    pub fn resolve_command_with_output<C: CommandWithOutput>(
        &self,
    ) -> Option<Box<dyn CommandOutputHandler<C>>> {
        self.binding_for::<C>(HandlerShape::CommandWithOutput)
            .and_then(|b| b.instantiate())
    }

    /// Resolve a fresh [`QueryHandler`] for query type `Q`.
    pub fn resolve_query<Q: Query>(&self) -> Option<Box<dyn QueryHandler<Q>>> {
        self.binding_for::<Q>(HandlerShape::Query)
            .and_then(|b| b.instantiate())
    }

    /// Resolve and process a plain command in one step.
    pub async fn dispatch_command<C: Command>(
        &self,
        command: C,
        cancel: CancellationToken,
    ) -> Result<Outcome, DispatchError> {
        let binding = self
            .binding_for::<C>(HandlerShape::Command)
            .ok_or(DispatchError::Unbound {
                message: std::any::type_name::<C>(),
            })?;
        let handler: Box<dyn CommandHandler<C>> =
            binding.instantiate().ok_or(DispatchError::FactoryMismatch {
                message: std::any::type_name::<C>(),
                handler: binding.handler().name(),
            })?;
        Ok(handler.process(command, cancel).await)
    }

    /// Resolve and process a value-producing command in one step.
    pub async fn dispatch_command_with_output<C: CommandWithOutput>(
        &self,
        command: C,
        cancel: CancellationToken,
    ) -> Result<Outcome<C::Output>, DispatchError> {
        let binding = self
            .binding_for::<C>(HandlerShape::CommandWithOutput)
            .ok_or(DispatchError::Unbound {
                message: std::any::type_name::<C>(),
            })?;
        let handler: Box<dyn CommandOutputHandler<C>> =
            binding.instantiate().ok_or(DispatchError::FactoryMismatch {
                message: std::any::type_name::<C>(),
                handler: binding.handler().name(),
            })?;
        Ok(handler.process(command, cancel).await)
    }

    /// Resolve and process a query in one step.
    pub async fn dispatch_query<Q: Query>(
        &self,
        query: Q,
        cancel: CancellationToken,
    ) -> Result<Outcome<Q::Output>, DispatchError> {
        let binding = self
            .binding_for::<Q>(HandlerShape::Query)
            .ok_or(DispatchError::Unbound {
                message: std::any::type_name::<Q>(),
            })?;
        let handler: Box<dyn QueryHandler<Q>> =
            binding.instantiate().ok_or(DispatchError::FactoryMismatch {
                message: std::any::type_name::<Q>(),
                handler: binding.handler().name(),
            })?;
        Ok(handler.process(query, cancel).await)
    }
}

impl RegistrationSurface for HandlerRegistry {
    fn register(&mut self, binding: Binding) {
        let kept = binding.handler().name();
        if let Some(previous) = self.bindings.insert(binding.signature(), binding) {
            warn!(
                message_type = previous.message().name(),
                replaced = previous.handler().name(),
                kept,
                "duplicate handler binding, keeping the last registration"
            );
        }
    }
}
