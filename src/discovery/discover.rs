//! Discovery over modules and hand-off to the host registration surface.

use std::any::TypeId;
use std::collections::HashMap;

use tracing::debug;

use crate::discovery::binding::{Binding, HandlerShape, TypeKey};
use crate::discovery::error::DiscoveryError;
use crate::discovery::module::HandlerModule;

/// The host's registration interface.
///
/// The core produces the binding set; the host owns it afterward. Each
/// binding is to be registered as a scoped factory — a fresh handler
/// instance per logical request. [`HandlerRegistry`](crate::HandlerRegistry)
/// is the reference implementation.
pub trait RegistrationSurface {
    /// Register one binding.
    fn register(&mut self, binding: Binding);
}

/// Scan `modules` and produce the complete binding set.
///
/// The result is the strict union of scanning each module individually, in
/// module order then registration order — deterministic within a run, never
/// deduplicated. A module with no registrations contributes nothing; the
/// same signature appearing in two modules contributes two records, so
/// ambiguity stays detectable by the caller (see [`duplicates`]).
///
/// No handler is instantiated here; discovery only yields records.
pub fn discover(modules: Vec<HandlerModule>) -> Vec<Binding> {
    let mut bindings = Vec::new();
    for module in modules {
        debug!(
            module = module.name(),
            count = module.bindings().len(),
            "scanned handler module"
        );
        bindings.extend(module.into_bindings());
    }
    bindings
}

/// A (shape, message) signature bound by more than one record.
#[derive(Debug, Clone)]
pub struct AmbiguousBinding {
    /// The contested capability shape.
    pub shape: HandlerShape,
    /// The contested message type.
    pub message: TypeKey,
    /// Every handler type bound to the signature, in discovery order.
    pub handlers: Vec<TypeKey>,
}

/// Report every signature bound more than once in `bindings`, in first-seen
/// order.
///
/// Exactly one handler per message type is an operational convention the
/// contracts cannot enforce, so discovery surfaces violations instead of
/// silently merging them.
pub fn duplicates(bindings: &[Binding]) -> Vec<AmbiguousBinding> {
    let mut seen: HashMap<(HandlerShape, TypeId), usize> = HashMap::new();
    let mut ambiguous: Vec<AmbiguousBinding> = Vec::new();

    for binding in bindings {
        match seen.get(&binding.signature()) {
            None => {
                seen.insert(binding.signature(), ambiguous.len());
                ambiguous.push(AmbiguousBinding {
                    shape: binding.shape(),
                    message: binding.message(),
                    handlers: vec![binding.handler()],
                });
            }
            Some(&index) => ambiguous[index].handlers.push(binding.handler()),
        }
    }

    ambiguous.retain(|a| a.handlers.len() > 1);
    ambiguous
}

/// Discover `modules` and register every binding on `surface`.
///
/// Duplicate signatures are passed through as-is; the surface decides the
/// policy (the reference registry keeps the last and warns). Use
/// [`install_strict`] to refuse ambiguity outright.
pub fn install<S: RegistrationSurface + ?Sized>(modules: Vec<HandlerModule>, surface: &mut S) {
    for binding in discover(modules) {
        debug!(
            shape = ?binding.shape(),
            message_type = binding.message().name(),
            handler = binding.handler().name(),
            "registering handler binding"
        );
        surface.register(binding);
    }
}

/// Like [`install`], but fail at startup when any signature is bound more
/// than once. Nothing is registered on failure.
pub fn install_strict<S: RegistrationSurface + ?Sized>(
    modules: Vec<HandlerModule>,
    surface: &mut S,
) -> Result<(), DiscoveryError> {
    let bindings = discover(modules);
    if let Some(ambiguous) = duplicates(&bindings).into_iter().next() {
        return Err(DiscoveryError::AmbiguousBinding(ambiguous));
    }
    for binding in bindings {
        surface.register(binding);
    }
    Ok(())
}
