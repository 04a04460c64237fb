use std::fs::{create_dir_all, File};
use std::io;
use std::path::{Path, PathBuf};

use tracing_subscriber::{EnvFilter, Layer};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

use crate::Optional;

/// Builds and installs the global tracing subscriber: a console layer writing to stderr, and optionally a file layer.
///
/// Filters that are not set explicitly are read from the `CONSOLE_LOG` and `FILE_LOG` environment variables.
#[derive(Default)]
pub struct AppTracingBuilder {
  console_filter: Optional<EnvFilter>,
  log_file_path: Optional<PathBuf>,
  file_filter: Optional<EnvFilter>,
}
impl AppTracingBuilder {
  pub fn with_console_filter(mut self, console_filter: EnvFilter) -> Self {
    self.console_filter = Optional::of(console_filter);
    self
  }

  pub fn with_log_file_path(mut self, log_file_path: impl Into<PathBuf>) -> Self {
    self.log_file_path = Optional::of(log_file_path.into());
    self
  }
  pub fn with_log_file_path_opt(mut self, log_file_path: Optional<impl Into<PathBuf>>) -> Self {
    self.log_file_path = log_file_path.map(Into::into);
    self
  }
  pub fn with_file_filter(mut self, file_filter: EnvFilter) -> Self {
    self.file_filter = Optional::of(file_filter);
    self
  }

  pub fn build(self) -> AppTracing {
    let console_filter = self.console_filter.or_else_get(|| filter_from_env("CONSOLE_LOG"));
    let file_filter = self.file_filter;
    let file = self.log_file_path
      .map(|path| (path, file_filter.or_else_get(|| filter_from_env("FILE_LOG"))));
    AppTracing::new(console_filter, file)
  }
}

fn filter_from_env(key: &str) -> EnvFilter {
  EnvFilter::try_from_env(key).unwrap_or_default()
}

/// Installed tracing subscriber. Keep this alive until the application exits, so that buffered file logs get flushed.
pub struct AppTracing {
  _file_tracing: FileTracing,
}
#[cfg(feature = "app_tracing_file")]
#[derive(Default)]
struct FileTracing(Optional<tracing_appender::non_blocking::WorkerGuard>);
#[cfg(not(feature = "app_tracing_file"))]
#[derive(Default)]
struct FileTracing;

impl AppTracing {
  fn new(console_filter: EnvFilter, file: Optional<(PathBuf, EnvFilter)>) -> Self {
    let layered = tracing_subscriber::registry()
      .with(
        tracing_subscriber::fmt::layer()
          .with_writer(io::stderr)
          .with_filter(console_filter)
      );

    let _file_tracing = match file.into_option() {
      #[cfg(feature = "app_tracing_file")]
      Some((file_path, file_filter)) => match create_log_file(&file_path) {
        Err(e) => {
          layered.init();
          tracing::warn!("Cannot log to file; could not truncate/create and open log file '{}' for writing: {}", file_path.display(), e);
          FileTracing::default()
        }
        Ok(log_file) => {
          let (non_blocking, guard) = tracing_appender::non_blocking(io::BufWriter::new(log_file));
          layered
            .with(
              tracing_subscriber::fmt::layer()
                .with_writer(non_blocking)
                .with_ansi(false)
                .with_filter(file_filter)
            )
            .init();
          FileTracing(Optional::of(guard))
        }
      },
      #[cfg(not(feature = "app_tracing_file"))]
      Some((file_path, _)) => {
        layered.init();
        tracing::warn!("Cannot log to file '{}'; file logging is not enabled", file_path.display());
        FileTracing::default()
      }
      None => {
        layered.init();
        FileTracing::default()
      }
    };

    Self { _file_tracing }
  }
}

#[cfg_attr(not(feature = "app_tracing_file"), allow(dead_code))]
fn create_log_file(file_path: &Path) -> Result<File, io::Error> {
  if let Some(parent) = file_path.parent() {
    create_dir_all(parent)?;
  }
  File::create(file_path)
}
