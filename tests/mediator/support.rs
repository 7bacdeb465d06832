//! Shared message and handler fixtures for the integration tests.
#![allow(dead_code)]

use async_trait::async_trait;
use mediator_rust::{
    handler_module, CancellationToken, Command, CommandHandler, CommandOutputHandler,
    CommandWithOutput, FieldErrors, HandlerModule, Outcome, Query, QueryHandler,
};
use uuid::Uuid;

// ============================================================================
// CreateUser — command with output (the end-to-end scenario)
// ============================================================================

pub struct CreateUser {
    pub name: String,
}

impl CommandWithOutput for CreateUser {
    type Output = Uuid;
}

#[derive(Default)]
pub struct CreateUserHandler;

#[async_trait]
impl CommandOutputHandler<CreateUser> for CreateUserHandler {
    async fn process(&self, command: CreateUser, cancel: CancellationToken) -> Outcome<Uuid> {
        if cancel.is_cancelled() {
            return Outcome::cancelled();
        }
        if command.name.trim().is_empty() {
            let mut errors = FieldErrors::new();
            errors.insert("name".to_string(), vec!["must not be empty".to_string()]);
            return Outcome::bad_request(errors);
        }
        Outcome::success(Uuid::new_v4())
    }
}

/// Competing CreateUser handler for ambiguity tests. Fails with a
/// distinctive code so dispatch reveals which handler ran.
#[derive(Default)]
pub struct StubCreateUserHandler;

#[async_trait]
impl CommandOutputHandler<CreateUser> for StubCreateUserHandler {
    async fn process(&self, _command: CreateUser, _cancel: CancellationToken) -> Outcome<Uuid> {
        Outcome::failure_with_code("Stub", "stub handler ran")
    }
}

// ============================================================================
// DeactivateUser — plain command
// ============================================================================

pub struct DeactivateUser {
    pub id: Uuid,
}

impl Command for DeactivateUser {}

#[derive(Default)]
pub struct DeactivateUserHandler;

#[async_trait]
impl CommandHandler<DeactivateUser> for DeactivateUserHandler {
    async fn process(&self, _command: DeactivateUser, cancel: CancellationToken) -> Outcome {
        if cancel.is_cancelled() {
            return Outcome::cancelled();
        }
        Outcome::ok()
    }
}

// ============================================================================
// GetUser — query
// ============================================================================

#[derive(Debug, PartialEq, serde::Serialize)]
pub struct UserView {
    pub id: Uuid,
    pub name: String,
}

pub struct GetUser {
    pub id: Uuid,
}

impl Query for GetUser {
    type Output = UserView;
}

#[derive(Default)]
pub struct GetUserHandler;

#[async_trait]
impl QueryHandler<GetUser> for GetUserHandler {
    async fn process(&self, query: GetUser, _cancel: CancellationToken) -> Outcome<UserView> {
        if query.id.is_nil() {
            return Outcome::not_found(format!("no user {}", query.id));
        }
        Outcome::success(UserView {
            id: query.id,
            name: "Alice".to_string(),
        })
    }
}

// ============================================================================
// Modules
// ============================================================================

pub fn users_module() -> HandlerModule {
    handler_module!("users",
        command_with_output CreateUser => CreateUserHandler,
        command DeactivateUser => DeactivateUserHandler,
    )
}

pub fn queries_module() -> HandlerModule {
    handler_module!("queries",
        query GetUser => GetUserHandler,
    )
}

pub fn stub_users_module() -> HandlerModule {
    handler_module!("stub_users",
        command_with_output CreateUser => StubCreateUserHandler,
    )
}
