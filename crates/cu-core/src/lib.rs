//! # cu-core
//!
//! Core domain models and business logic for the ConnectU signup flow.
//!
//! This crate contains pure business logic without any infrastructure dependencies.

// Public module exports
pub mod catalogue;
pub mod config;
pub mod navigation;
pub mod ports;
pub mod security;
pub mod signup;
pub mod user;

// Re-export commonly used types at the crate root
pub use config::AppConfig;
pub use navigation::{EntryView, ViewAction, ViewEvent, ViewState, ViewStateMachine};
pub use security::SecretString;
pub use signup::{SignupForm, SignupPayload, SignupValidationError, ValidatedSignup};
pub use user::{DateOfBirth, PasswordHash, UserProfile, UserRecord};
