#[derive(Debug, thiserror::Error)]
pub enum FromEnvError {
  #[error("Invalid value for {0}: {1}")]
  InvalidKey(String, anyhow::Error),
}

/// Read an environment variable, treating an empty value as unset.
pub fn optional_var(name: &str) -> Option<String> {
  std::env::var(name)
    .ok()
    .filter(|value| !value.trim().is_empty())
}
