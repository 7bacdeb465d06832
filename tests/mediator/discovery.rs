//! Discovery properties — union semantics, determinism, ambiguity surfacing.

use std::collections::HashSet;

use mediator_rust::{
    discover, duplicates, install, install_strict, DiscoveryError, HandlerModule, HandlerRegistry,
    HandlerShape, TypeKey,
};
use uuid::Uuid;

use crate::support::{
    queries_module, stub_users_module, users_module, CreateUser, CreateUserHandler, GetUser,
    GetUserHandler,
};

#[test]
fn single_handler_yields_single_binding_with_resolved_types() {
    let bindings = discover(vec![HandlerModule::new("users")
        .command_with_output::<CreateUser, CreateUserHandler, _>(CreateUserHandler::default)]);

    assert_eq!(bindings.len(), 1);
    let binding = &bindings[0];
    assert_eq!(binding.shape(), HandlerShape::CommandWithOutput);
    assert_eq!(binding.message(), TypeKey::of::<CreateUser>());
    assert_eq!(binding.output(), Some(TypeKey::of::<Uuid>()));
    assert_eq!(binding.handler(), TypeKey::of::<CreateUserHandler>());
}

#[test]
fn module_without_handlers_yields_empty_set() {
    let bindings = discover(vec![HandlerModule::new("nothing")]);
    assert!(bindings.is_empty());
}

#[test]
fn disjoint_modules_union_is_order_independent() {
    let forward = discover(vec![users_module(), queries_module()]);
    let backward = discover(vec![queries_module(), users_module()]);

    assert_eq!(forward.len(), 3);
    assert_eq!(backward.len(), 3);

    let forward_set: HashSet<_> = forward.iter().map(|b| b.signature()).collect();
    let backward_set: HashSet<_> = backward.iter().map(|b| b.signature()).collect();
    assert_eq!(forward_set, backward_set);
}

#[test]
fn binding_order_is_deterministic_within_a_run() {
    let first = discover(vec![users_module(), queries_module()]);
    let second = discover(vec![users_module(), queries_module()]);

    let first_order: Vec<_> = first.iter().map(|b| (b.signature(), b.handler())).collect();
    let second_order: Vec<_> = second.iter().map(|b| (b.signature(), b.handler())).collect();
    assert_eq!(first_order, second_order);
}

#[test]
fn same_message_in_two_modules_yields_two_records() {
    let bindings = discover(vec![users_module(), stub_users_module()]);

    let create_user: Vec<_> = bindings
        .iter()
        .filter(|b| b.message() == TypeKey::of::<CreateUser>())
        .collect();
    assert_eq!(create_user.len(), 2);
    assert_ne!(create_user[0].handler(), create_user[1].handler());
}

#[test]
fn duplicates_surface_the_contested_message() {
    let bindings = discover(vec![users_module(), stub_users_module()]);
    let ambiguous = duplicates(&bindings);

    assert_eq!(ambiguous.len(), 1);
    assert_eq!(ambiguous[0].message, TypeKey::of::<CreateUser>());
    assert_eq!(ambiguous[0].handlers.len(), 2);
}

#[test]
fn install_strict_fails_on_ambiguity_and_registers_nothing() {
    let mut registry = HandlerRegistry::new();
    let result = install_strict(vec![users_module(), stub_users_module()], &mut registry);

    assert!(matches!(result, Err(DiscoveryError::AmbiguousBinding(_))));
    assert!(registry.is_empty());
}

#[test]
fn install_strict_accepts_unambiguous_modules() {
    let mut registry = HandlerRegistry::new();
    install_strict(vec![users_module(), queries_module()], &mut registry).unwrap();
    assert_eq!(registry.len(), 3);
}

#[test]
fn macro_and_builder_produce_identical_bindings() {
    let from_macro = discover(vec![queries_module()]);
    let from_builder = discover(vec![
        HandlerModule::new("queries").query::<GetUser, GetUserHandler, _>(GetUserHandler::default)
    ]);

    assert_eq!(from_macro.len(), from_builder.len());
    assert_eq!(from_macro[0].signature(), from_builder[0].signature());
    assert_eq!(from_macro[0].handler(), from_builder[0].handler());
    assert_eq!(from_macro[0].output(), from_builder[0].output());
}

#[test]
fn registry_lists_bound_message_types() {
    let mut registry = HandlerRegistry::new();
    install(vec![users_module(), queries_module()], &mut registry);

    let names = registry.message_types();
    assert_eq!(names.len(), 3);
    assert!(names.iter().any(|n| n.ends_with("CreateUser")));
    assert!(names.iter().any(|n| n.ends_with("GetUser")));
}
