//! Declare Client - health declaration API client
//!
//! This crate provides typed access to the health declaration backend
//! (submit a screening record, list submitted records) together with the
//! error-handling pipeline around it: a failure classifier, a pluggable
//! notification sink and a top-level failure boundary.

// Core modules
pub mod config;
pub mod error;
pub mod types;

// Main functionality modules
pub mod boundary;
pub mod classifier;
pub mod client;
pub mod form;
pub mod notify;
pub mod renderers;
pub mod service;

// Re-export main types for convenience
pub use boundary::{BoundaryState, ViewBoundary, GENERIC_FAILURE_MESSAGE};
pub use classifier::{classify, handle_api_error, DEFAULT_ERROR_MESSAGE};
pub use client::HttpClient;
pub use config::{ClientConfig, ClientConfigBuilder};
pub use error::{DeclareError, Result};
pub use form::{FieldError, FormState, SubmitOutcome};
pub use notify::{MemoryNotifier, Notifier, Severity};
pub use renderers::{OutputRenderer, TableRenderer};
pub use service::DeclarationService;
pub use types::{
    ApiErrorPayload, CreateResponse, Declaration, DeclarationInput, ErrorDetail, ListResponse,
    SYMPTOM_OPTIONS,
};
