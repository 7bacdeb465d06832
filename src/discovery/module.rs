//! HandlerModule — an explicit, ordered handler registration unit.

use std::any::Any;
use std::sync::Arc;

use crate::discovery::binding::{Binding, ErasedFactory, HandlerShape, TypeKey};
use crate::handler::{CommandHandler, CommandOutputHandler, QueryHandler};
use crate::message::{Command, CommandWithOutput, Query};

/// A named, ordered collection of handler registrations — the unit
/// discovery scans.
///
/// Registration is where the capability test happens: each builder method
/// only admits a handler type satisfying the matching contract for the given
/// message type, and records the resolved type parameters in the binding.
/// Registration order is the enumeration order, so a module's binding set is
/// deterministic.
///
/// A module with zero registrations is valid and yields zero bindings.
/// Nothing prevents two registrations for the same message type — discovery
/// surfaces that as an ambiguity rather than silently picking one (see
/// [`duplicates`](crate::duplicates)).
///
/// ## Example
///
/// ```ignore
/// let module = HandlerModule::new("users")
///     .command::<DeactivateUser, _, _>(|| DeactivateUserHandler::new(pool.clone()))
///     .command_with_output::<CreateUser, CreateUserHandler, _>(CreateUserHandler::default)
///     .query::<GetUser, GetUserHandler, _>(GetUserHandler::default);
/// ```
pub struct HandlerModule {
    name: String,
    bindings: Vec<Binding>,
}

impl HandlerModule {
    /// Create an empty module with a diagnostic name.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            bindings: Vec::new(),
        }
    }

    /// The module's diagnostic name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Register a [`CommandHandler`] for command `C`. The factory runs once
    /// per resolution — a fresh handler per logical request.
    pub fn command<C, H, F>(mut self, factory: F) -> Self
    where
        C: Command,
        H: CommandHandler<C> + 'static,
        F: Fn() -> H + Send + Sync + 'static,
    {
        let erased: ErasedFactory = Arc::new(move || {
            let handler: Box<dyn CommandHandler<C>> = Box::new(factory());
            Box::new(handler) as Box<dyn Any + Send>
        });
        self.bindings.push(Binding::new(
            HandlerShape::Command,
            TypeKey::of::<C>(),
            None,
            TypeKey::of::<H>(),
            erased,
        ));
        self
    }

    /// Register a [`CommandOutputHandler`] for command `C`, recording
    /// `C::Output` as the bound output type.
    pub fn command_with_output<C, H, F>(mut self, factory: F) -> Self
    where
        C: CommandWithOutput,
        H: CommandOutputHandler<C> + 'static,
        F: Fn() -> H + Send + Sync + 'static,
    {
        let erased: ErasedFactory = Arc::new(move || {
            let handler: Box<dyn CommandOutputHandler<C>> = Box::new(factory());
            Box::new(handler) as Box<dyn Any + Send>
        });
        self.bindings.push(Binding::new(
            HandlerShape::CommandWithOutput,
            TypeKey::of::<C>(),
            Some(TypeKey::of::<C::Output>()),
            TypeKey::of::<H>(),
            erased,
        ));
        self
    }

    /// Register a [`QueryHandler`] for query `Q`, recording `Q::Output` as
    /// the bound output type.
    pub fn query<Q, H, F>(mut self, factory: F) -> Self
    where
        Q: Query,
        H: QueryHandler<Q> + 'static,
        F: Fn() -> H + Send + Sync + 'static,
    {
        let erased: ErasedFactory = Arc::new(move || {
            let handler: Box<dyn QueryHandler<Q>> = Box::new(factory());
            Box::new(handler) as Box<dyn Any + Send>
        });
        self.bindings.push(Binding::new(
            HandlerShape::Query,
            TypeKey::of::<Q>(),
            Some(TypeKey::of::<Q::Output>()),
            TypeKey::of::<H>(),
            erased,
        ));
        self
    }

    /// The bindings registered so far, in registration order.
    pub fn bindings(&self) -> &[Binding] {
        &self.bindings
    }

    pub(crate) fn into_bindings(self) -> Vec<Binding> {
        self.bindings
    }
}
