//! # cu-shell
//!
//! Outer layer of ConnectU: configuration, tracing, dependency wiring, the
//! command surface and the line-oriented shell that drives it.

pub mod bootstrap;
pub mod commands;
pub mod presenter;

pub use bootstrap::{create_runtime, load_config, resolve_config, run_app, AppRuntime};
