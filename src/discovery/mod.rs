//! Handler discovery and binding.
//!
//! A [`HandlerModule`] is an explicit, ordered registration unit — the
//! stand-in for a loadable program module. Registering a handler on a module
//! is where the capability test happens: the trait bounds on
//! [`HandlerModule::command`] (and friends) only admit types that satisfy
//! the matching handler contract, with the message and output type
//! parameters resolved at that point.
//!
//! [`discover`] takes a set of modules and yields the complete binding set:
//! a strict union in module order, then registration order within each
//! module. Nothing is deduplicated and no handler is instantiated —
//! discovery only produces [`Binding`] records. [`install`] hands the set to
//! a host [`RegistrationSurface`]; [`HandlerRegistry`] is the reference
//! surface with per-request factory resolution and typed dispatch.
//!
//! ## Quick start
//!
//! ```ignore
//! use mediator_rust::{handler_module, install, HandlerRegistry, CancellationToken};
//!
//! let module = handler_module!("users",
//!     command_with_output CreateUser => CreateUserHandler,
//!     query GetUser => GetUserHandler,
//! );
//!
//! let mut registry = HandlerRegistry::new();
//! install(vec![module], &mut registry);
//!
//! let outcome = registry
//!     .dispatch_command_with_output(CreateUser { name: "Alice".into() }, CancellationToken::new())
//!     .await?;
//! ```

mod binding;
mod discover;
mod error;
mod module;
mod registry;

pub use binding::{Binding, HandlerShape, TypeKey};
pub use discover::{discover, duplicates, install, install_strict, AmbiguousBinding, RegistrationSurface};
pub use error::{DiscoveryError, DispatchError};
pub use module::HandlerModule;
pub use registry::HandlerRegistry;

/// Build a [`HandlerModule`] from `Default`-constructible handlers.
///
/// Each entry is `<shape> <MessageType> => <HandlerType>`, where `<shape>`
/// is one of `command`, `command_with_output`, or `query` — the same names
/// as the builder methods. Handlers needing real construction arguments
/// should use the builder methods directly with a factory closure.
///
/// # Example
/// ```ignore
/// let module = mediator_rust::handler_module!("users",
///     command DeactivateUser => DeactivateUserHandler,
///     command_with_output CreateUser => CreateUserHandler,
///     query GetUser => GetUserHandler,
/// );
/// ```
#[macro_export]
macro_rules! handler_module {
    ($name:expr, $( $shape:ident $message:ty => $handler:ty ),+ $(,)?) => {
        $crate::HandlerModule::new($name)
        $(
            .$shape::<$message, $handler, _>(|| {
                <$handler as ::std::default::Default>::default()
            })
        )+
    };
}
