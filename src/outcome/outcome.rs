//! The outcome value produced by one handler invocation.

use std::collections::BTreeMap;

use serde::Serialize;

/// Well-known error code tags.
///
/// The code set is a convention, not an enum — custom codes stay possible
/// through [`Outcome::failure_with_code`].
pub mod codes {
    /// Generic failure with no more specific classification.
    pub const FAILURE: &str = "Failure";
    /// The requested resource does not exist.
    pub const NOT_FOUND: &str = "NotFound";
    /// One or more input fields failed validation.
    pub const VALIDATION: &str = "ValidationError";
    /// The invocation observed its cancellation token and stopped early.
    pub const CANCELLED: &str = "Cancelled";
}

/// Per-field validation messages: field name → ordered list of messages.
///
/// A `BTreeMap` keeps field order deterministic across runs.
pub type FieldErrors = BTreeMap<String, Vec<String>>;

const VALIDATION_MESSAGE: &str = "One or more validation errors occurred.";

/// The outcome of one handler invocation: success (optionally carrying a
/// value) or a tagged failure.
///
/// An `Outcome` is immutable once built — the named constructors are the only
/// mutation point. `Outcome<()>` (the default) is the no-value form returned
/// by plain commands; `Outcome<T>` carries a value of the message's declared
/// output type.
///
/// ## Example
///
/// ```
/// use mediator_rust::Outcome;
///
/// let found: Outcome<u32> = Outcome::success(7);
/// assert!(found.is_success());
/// assert_eq!(found.value(), Some(&7));
///
/// let missing: Outcome<u32> = Outcome::not_found("no such user");
/// assert_eq!(missing.error_code(), "NotFound");
/// assert_eq!(missing.value(), None);
/// ```
///
/// Serialization is one-way: an `Outcome` is produced by a handler and
/// consumed once by its caller. `Deserialize` is deliberately not derived,
/// so parsed data can never bypass the construction invariants.
#[must_use]
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Outcome<T = ()> {
    #[serde(rename = "isSuccess")]
    success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    value: Option<T>,
    #[serde(rename = "errorCode")]
    error_code: String,
    #[serde(rename = "errorMessage")]
    error_message: String,
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    errors: FieldErrors,
}

impl Outcome<()> {
    /// Successful outcome with no value — the plain-command form.
    pub fn ok() -> Self {
        Self {
            success: true,
            value: Some(()),
            error_code: String::new(),
            error_message: String::new(),
            errors: FieldErrors::new(),
        }
    }
}

impl<T> Outcome<T> {
    /// Successful outcome carrying `value`.
    ///
    /// Taking `value` by ownership is the null-value guard: a value-carrying
    /// success without a value is unrepresentable.
    pub fn success(value: T) -> Self {
        Self {
            success: true,
            value: Some(value),
            error_code: String::new(),
            error_message: String::new(),
            errors: FieldErrors::new(),
        }
    }

    /// Generic failure with code [`codes::FAILURE`].
    pub fn failure(message: impl Into<String>) -> Self {
        Self::failure_with_code(codes::FAILURE, message)
    }

    /// Failure with a caller-chosen machine-readable code.
    pub fn failure_with_code(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            success: false,
            value: None,
            error_code: code.into(),
            error_message: message.into(),
            errors: FieldErrors::new(),
        }
    }

    /// Failure with code [`codes::NOT_FOUND`].
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::failure_with_code(codes::NOT_FOUND, message)
    }

    /// Failure with code [`codes::NOT_FOUND`] and per-field detail.
    pub fn not_found_with_errors(message: impl Into<String>, errors: FieldErrors) -> Self {
        Self {
            errors,
            ..Self::failure_with_code(codes::NOT_FOUND, message)
        }
    }

    /// Validation failure with code [`codes::VALIDATION`], a fixed summary
    /// message, and the supplied per-field errors.
    pub fn bad_request(errors: FieldErrors) -> Self {
        Self {
            errors,
            ..Self::failure_with_code(codes::VALIDATION, VALIDATION_MESSAGE)
        }
    }

    /// Failure with code [`codes::CANCELLED`] — returned by a handler that
    /// observed its cancellation token.
    pub fn cancelled() -> Self {
        Self::failure_with_code(codes::CANCELLED, "The operation was cancelled.")
    }

    /// Whether the invocation succeeded.
    pub fn is_success(&self) -> bool {
        self.success
    }

    /// Whether the invocation failed.
    pub fn is_failure(&self) -> bool {
        !self.success
    }

    /// Machine-readable error tag. Empty when successful.
    pub fn error_code(&self) -> &str {
        &self.error_code
    }

    /// Human-readable failure summary. Empty when successful.
    pub fn error_message(&self) -> &str {
        &self.error_message
    }

    /// Per-field validation messages. Empty unless this is a validation (or
    /// detailed not-found) failure.
    pub fn errors(&self) -> &FieldErrors {
        &self.errors
    }

    /// The carried value, present only on success.
    pub fn value(&self) -> Option<&T> {
        self.value.as_ref()
    }

    /// Consume the outcome, yielding the carried value if successful.
    pub fn into_value(self) -> Option<T> {
        self.value
    }

    /// Map the success value, leaving failure metadata untouched.
    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Outcome<U> {
        Outcome {
            success: self.success,
            value: self.value.map(f),
            error_code: self.error_code,
            error_message: self.error_message,
            errors: self.errors,
        }
    }
}
