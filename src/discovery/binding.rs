//! Binding records — the product of discovery.

use std::any::{Any, TypeId};
use std::fmt;
use std::sync::Arc;

/// Which of the three handler capability shapes a binding satisfies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HandlerShape {
    /// `CommandHandler<C>` — command with no output value.
    Command,
    /// `CommandOutputHandler<C>` — command producing `C::Output`.
    CommandWithOutput,
    /// `QueryHandler<Q>` — read-only request producing `Q::Output`.
    Query,
}

/// A resolved type parameter: runtime identity plus a readable name for
/// diagnostics.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct TypeKey {
    id: TypeId,
    name: &'static str,
}

impl TypeKey {
    /// The key for type `T`.
    pub fn of<T: 'static>() -> Self {
        Self {
            id: TypeId::of::<T>(),
            name: std::any::type_name::<T>(),
        }
    }

    /// Runtime identity of the type.
    pub fn id(&self) -> TypeId {
        self.id
    }

    /// Fully qualified type name.
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// The trailing path segment of the type name — readable in logs.
    pub fn short_name(&self) -> &'static str {
        self.name.rsplit("::").next().unwrap_or(self.name)
    }
}

impl fmt::Debug for TypeKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name)
    }
}

impl fmt::Display for TypeKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.short_name())
    }
}

/// Produces one fresh, type-erased handler per call. The erased box holds a
/// `Box<dyn CommandHandler<C>>` (or the other two shapes), recovered by
/// downcast at resolution time.
pub(crate) type ErasedFactory = Arc<dyn Fn() -> Box<dyn Any + Send> + Send + Sync>;

/// One discovered association: a message type signature bound to the
/// concrete handler type that processes it, with a scoped factory.
///
/// Created during discovery, read-only afterward. Cloning shares the
/// factory. The factory is never invoked during discovery — only when the
/// host resolves a handler for a request.
#[derive(Clone)]
pub struct Binding {
    shape: HandlerShape,
    message: TypeKey,
    output: Option<TypeKey>,
    handler: TypeKey,
    factory: ErasedFactory,
}

impl Binding {
    pub(crate) fn new(
        shape: HandlerShape,
        message: TypeKey,
        output: Option<TypeKey>,
        handler: TypeKey,
        factory: ErasedFactory,
    ) -> Self {
        Self {
            shape,
            message,
            output,
            handler,
            factory,
        }
    }

    /// The capability shape this binding satisfies.
    pub fn shape(&self) -> HandlerShape {
        self.shape
    }

    /// The bound message type.
    pub fn message(&self) -> TypeKey {
        self.message
    }

    /// The bound output type, where the shape has one.
    pub fn output(&self) -> Option<TypeKey> {
        self.output
    }

    /// The concrete handler type.
    pub fn handler(&self) -> TypeKey {
        self.handler
    }

    /// What this binding binds: the capability shape and message type.
    /// Two bindings with the same signature are ambiguous.
    pub fn signature(&self) -> (HandlerShape, TypeId) {
        (self.shape, self.message.id())
    }

    /// Instantiate a fresh handler and recover its typed trait object.
    /// `None` means the stored factory does not produce `H` — a wiring
    /// mismatch, not a missing binding.
    pub(crate) fn instantiate<H: 'static>(&self) -> Option<H> {
        (self.factory)().downcast::<H>().ok().map(|h| *h)
    }
}

impl fmt::Debug for Binding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Binding")
            .field("shape", &self.shape)
            .field("message", &self.message)
            .field("output", &self.output)
            .field("handler", &self.handler)
            .finish()
    }
}
