use thiserror::Error;

/// Diagnostic raised when a validated field access sees an invalid instance.
pub const NULL_INSTANCE_MSG: &str =
    "Field access on nullptr instance, please make sure your instance is not null";

/// Failures surfaced by field access helpers.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum FieldError {
    #[error("{}", NULL_INSTANCE_MSG)]
    NullInstance,

    #[error("Class for static field with name: {0} is null")]
    ClassNotFound(String),

    #[error("Could not find static field with name: {0}")]
    FieldNotFound(String),

    #[error("IL2CPP runtime API is not installed")]
    RuntimeNotInstalled,
}

/// Failures while binding the IL2CPP runtime API.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RuntimeError {
    #[error("failed to load runtime library: {0}")]
    Load(String),

    #[error("runtime library is missing symbol {0}")]
    MissingSymbol(String),

    #[error("runtime API was already installed")]
    AlreadyInstalled,
}
