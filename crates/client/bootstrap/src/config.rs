//! Client configuration structures and loaders.
use std::env;
use std::path::PathBuf;
use std::time::{SystemTime, UNIX_EPOCH};

use client_authority::AuthorityConfig;
use directories::ProjectDirs;

/// Configuration required to bootstrap a client's authority and logging.
#[derive(Clone, Debug, Default)]
pub struct ClientConfig {
    pub authority: AuthorityConfig,
    pub log: LogConfig,
}

impl ClientConfig {
    pub const fn new(authority: AuthorityConfig, log: LogConfig) -> Self {
        Self { authority, log }
    }

    /// Construct configuration from process environment variables.
    ///
    /// See [`AuthorityConfig::from_env`] and [`LogConfig::from_env`] for the
    /// variables read.
    pub fn from_env() -> Self {
        Self {
            authority: AuthorityConfig::from_env(),
            log: LogConfig::from_env(),
        }
    }
}

/// Where log files go for this run.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LogConfig {
    /// Overrides the platform cache directory.
    pub dir: Option<PathBuf>,
    /// Label of the per-run sub-directory.
    pub run_id: Option<String>,
}

impl LogConfig {
    /// Environment variables:
    /// - `DUNGEON_LOG_DIR` - Root log directory (default: platform cache dir + `logs/`)
    /// - `DUNGEON_RUN_ID` - Run label (default: `run_<unix-seconds>`)
    pub fn from_env() -> Self {
        Self {
            dir: read_env_string("DUNGEON_LOG_DIR").map(PathBuf::from),
            run_id: read_env_string("DUNGEON_RUN_ID"),
        }
    }

    /// Root directory holding one sub-directory per run.
    pub fn root_dir(&self) -> PathBuf {
        if let Some(dir) = &self.dir {
            return dir.clone();
        }

        match ProjectDirs::from("", "", "dungeon") {
            Some(dirs) => dirs.cache_dir().join("logs"),
            None => env::temp_dir().join("dungeon").join("logs"),
        }
    }

    pub fn run_id(&self) -> String {
        self.run_id.clone().unwrap_or_else(|| {
            let secs = SystemTime::now()
                .duration_since(UNIX_EPOCH)
                .map(|elapsed| elapsed.as_secs())
                .unwrap_or_default();
            format!("run_{secs}")
        })
    }

    /// `<root>/<run id>`.
    pub fn run_dir(&self) -> PathBuf {
        self.root_dir().join(self.run_id())
    }
}

fn read_env_string(key: &str) -> Option<String> {
    let value = env::var(key).ok()?;
    let value = value.trim();
    (!value.is_empty()).then(|| value.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn explicit_dir_and_run_id_win() {
        let tmp = tempfile::tempdir().unwrap();
        let config = LogConfig {
            dir: Some(tmp.path().to_path_buf()),
            run_id: Some("nightly".into()),
        };

        assert_eq!(config.root_dir(), tmp.path());
        assert_eq!(config.run_dir(), tmp.path().join("nightly"));
    }

    #[test]
    fn generated_run_id_is_labelled() {
        let config = LogConfig::default();
        let run_id = config.run_id();
        assert!(run_id.starts_with("run_"));
        assert!(run_id["run_".len()..].parse::<u64>().is_ok());
    }

    #[test]
    fn default_root_ends_in_logs() {
        let config = LogConfig::default();
        assert!(config.root_dir().ends_with("logs"));
    }
}
