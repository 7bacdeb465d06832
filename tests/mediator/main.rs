//! mediator integration tests.

mod support;

mod discovery;

#[cfg(feature = "http")]
mod http;
