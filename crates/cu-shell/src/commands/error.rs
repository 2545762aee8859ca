/// Centralized error mapping for commands.
///
/// Keeps the full context chain so the shell user sees why a line failed.
pub fn map_err(err: anyhow::Error) -> String {
    format!("{err:#}")
}
