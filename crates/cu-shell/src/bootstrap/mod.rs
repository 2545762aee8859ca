pub mod config;
pub mod run;
pub mod runtime;
pub mod tracing;
pub mod wiring;

pub use config::{load_config, resolve_config, CONFIG_ENV_VAR, DEFAULT_CONFIG_FILE};
pub use run::run_app;
pub use runtime::{create_runtime, AppRuntime};
