//! Marker traits distinguishing the three message shapes.
//!
//! A message is a plain data record describing intent. It has no behavior —
//! it only fixes, at the type level, which output type a compliant handler
//! must produce. Messages are created by the caller, are immutable, and live
//! for a single invocation.

/// A command that changes state and produces no value beyond the outcome
/// itself.
///
/// ## Example
///
/// ```
/// use mediator_rust::Command;
///
/// struct DeactivateUser {
///     pub id: u64,
/// }
///
/// impl Command for DeactivateUser {}
/// ```
pub trait Command: Send + 'static {}

/// A command that changes state and produces a value of type `Output`.
pub trait CommandWithOutput: Send + 'static {
    /// The value a successful handler invocation carries.
    type Output: Send + 'static;
}

/// A read-only request producing a value of type `Output`.
///
/// Structurally identical to [`CommandWithOutput`], but semantically
/// distinct: a query must not mutate observable state. That rule is a
/// convention for implementers, not something the contract can enforce.
pub trait Query: Send + 'static {
    /// The value a successful handler invocation carries.
    type Output: Send + 'static;
}
