//! This module configures `tracing_subscriber` to write to a log file and/or
//! standard output.
//!
//! Tracing is disabled by default.
use std::path::PathBuf;

use anyhow::anyhow;
use serde::Deserialize;
use serde::Serialize;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::fmt::format::FmtSpan;
use tracing_subscriber::prelude::*;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::Registry;

use crate::from_env::{optional_var, FromEnvError};

pub const TRACING_MODE_VAR: &str = "SCSS_LINT_TRACING_MODE";

#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase", tag = "mode")]
pub enum TracerMode {
  /// Output the logs to stdout
  Stdout,
  /// Output the logs to rotating files in `directory`
  File { directory: PathBuf },
}

impl TracerMode {
  pub fn from_env() -> Result<Vec<Self>, FromEnvError> {
    let Some(mode) = optional_var(TRACING_MODE_VAR) else {
      return Ok(vec![]);
    };

    let mut tracer_modes = vec![];
    for mode in mode.split(',').map(|s| s.trim()) {
      let tracer_mode = match mode {
        "stdout" => Self::stdout(),
        "file" => Self::file(),
        "" => continue,
        value => {
          return Err(FromEnvError::InvalidKey(
            String::from(TRACING_MODE_VAR),
            anyhow!("Invalid value: {}", value),
          ))
        }
      };

      if !tracer_modes.contains(&tracer_mode) {
        tracer_modes.push(tracer_mode);
      }
    }

    Ok(tracer_modes)
  }

  pub fn stdout() -> Self {
    Self::Stdout
  }

  /// Default file configuration, under the system temp directory
  pub fn file() -> Self {
    Self::File {
      directory: std::env::temp_dir().join("scss_lint_trace"),
    }
  }
}

pub struct Tracer {
  #[allow(unused)]
  worker_guards: Vec<WorkerGuard>,
}

impl Tracer {
  pub fn new(options: &[TracerMode]) -> anyhow::Result<Self> {
    let mut worker_guards = vec![];
    let mut layers = Vec::new();

    for mode in options {
      let (non_blocking, worker_guard) = match mode {
        TracerMode::Stdout => tracing_appender::non_blocking(std::io::stdout()),
        TracerMode::File { directory } => {
          let file_appender = tracing_appender::rolling::Builder::new()
            .rotation(tracing_appender::rolling::Rotation::HOURLY)
            .max_log_files(4)
            .filename_prefix("scss-lint-tracing")
            .build(directory)
            .map_err(|err| anyhow!(err))?;
          tracing_appender::non_blocking(file_appender)
        }
      };

      let layer = tracing_subscriber::fmt::layer()
        .with_writer(non_blocking)
        .with_ansi(matches!(mode, TracerMode::Stdout))
        .with_span_events(FmtSpan::CLOSE)
        .with_filter(EnvFilter::from_default_env())
        .boxed();

      layers.push(layer);
      worker_guards.push(worker_guard);
    }

    let subscriber = Registry::default().with(layers);
    tracing::subscriber::set_global_default(subscriber)?;

    Ok(Self { worker_guards })
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  static TEST_LOCK: std::sync::Mutex<()> = std::sync::Mutex::new(());

  fn set_mode(value: Option<&str>) {
    match value {
      Some(value) => std::env::set_var(TRACING_MODE_VAR, value),
      None => std::env::remove_var(TRACING_MODE_VAR),
    }
  }

  #[test]
  fn test_tracing_options_are_empty_if_no_mode_is_set() {
    let _guard = TEST_LOCK.lock();
    set_mode(None);
    assert!(TracerMode::from_env().unwrap().is_empty());

    set_mode(Some("  "));
    assert!(TracerMode::from_env().unwrap().is_empty());
    set_mode(None);
  }

  #[test]
  fn test_tracing_options_reads_modes() {
    let _guard = TEST_LOCK.lock();
    set_mode(Some("stdout, file,stdout"));
    let options = TracerMode::from_env().unwrap();
    assert_eq!(options, vec![TracerMode::stdout(), TracerMode::file()]);
    set_mode(None);
  }

  #[test]
  fn test_tracing_options_rejects_unknown_modes() {
    let _guard = TEST_LOCK.lock();
    set_mode(Some("stdout,chrome"));
    let error = TracerMode::from_env().unwrap_err();
    assert_eq!(
      error.to_string(),
      "Invalid value for SCSS_LINT_TRACING_MODE: Invalid value: chrome"
    );
    set_mode(None);
  }

  #[test]
  fn test_tracer_mode_serde() {
    let mode: TracerMode =
      serde_json::from_str(r#"{"mode": "file", "directory": "/tmp/logs"}"#).unwrap();
    assert_eq!(
      mode,
      TracerMode::File {
        directory: PathBuf::from("/tmp/logs")
      }
    );
    assert_eq!(
      serde_json::to_string(&TracerMode::Stdout).unwrap(),
      r#"{"mode":"stdout"}"#
    );
  }
}
