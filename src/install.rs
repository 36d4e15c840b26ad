//! Host-configuration installer.
//!
//! Writes the server's launch entry into an agent host's JSON configuration
//! (the `mcpServers` table used by Claude Desktop and compatible hosts). The
//! merge is surgical: only the targeted entry is replaced, every other key
//! round-trips in place, and a pre-existing file is copied to a sibling
//! backup before the first write.

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use serde_json::{Map, Value, json};
use thiserror::Error;

/// Errors raised while merging a launch entry into a host configuration.
#[derive(Debug, Error)]
pub enum InstallError {
    /// Existing configuration could not be read.
    #[error("Failed to read config at {path}: {source}")]
    Read {
        /// Path of the configuration file.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },
    /// Existing configuration was not valid JSON.
    #[error("Failed to parse config at {path}: {source}")]
    Parse {
        /// Path of the configuration file.
        path: PathBuf,
        /// Underlying JSON error.
        #[source]
        source: serde_json::Error,
    },
    /// Existing configuration parsed to something other than a JSON object.
    #[error("Config at {path} is not a JSON object")]
    NotAnObject {
        /// Path of the configuration file.
        path: PathBuf,
    },
    /// Backup copy could not be written.
    #[error("Failed to back up config to {path}: {source}")]
    Backup {
        /// Path of the backup file.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },
    /// Updated configuration could not be serialized.
    #[error("Failed to serialize config: {0}")]
    Serialize(#[source] serde_json::Error),
    /// Updated configuration could not be written.
    #[error("Failed to write config at {path}: {source}")]
    Write {
        /// Path being written.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },
}

/// Key under which hosts look up server launch entries.
pub const SERVERS_KEY: &str = "mcpServers";

/// Launch descriptor recorded under `mcpServers` for one server entry.
#[derive(Debug, Clone)]
pub struct LaunchSpec {
    /// Executable the host starts.
    pub command: String,
    /// Arguments passed to the executable.
    pub args: Vec<String>,
    /// Environment variables exported to the process.
    pub env: BTreeMap<String, String>,
}

impl LaunchSpec {
    fn to_value(&self) -> Value {
        json!({
            "command": self.command,
            "args": self.args,
            "env": self.env,
        })
    }
}

/// What the merge did, for operator reporting.
#[derive(Debug)]
pub struct InstallOutcome {
    /// Path of the backup copy, present iff the target pre-existed.
    pub backup: Option<PathBuf>,
    /// Whether an entry with the same name was replaced.
    pub replaced: bool,
    /// Whether the configuration file was created from scratch.
    pub created: bool,
}

/// Derive the sibling backup path for a configuration file.
pub fn backup_path(config_path: &Path) -> PathBuf {
    config_path.with_extension("json.backup")
}

/// Merge `spec` into the configuration at `config_path` under `server_name`.
///
/// The target entry is replaced wholesale; all other keys and sibling server
/// entries are preserved. When the file pre-exists, a byte-identical backup
/// is written before any mutation. Parent directories are created as needed.
pub fn install_server_entry(
    config_path: &Path,
    server_name: &str,
    spec: &LaunchSpec,
) -> Result<InstallOutcome, InstallError> {
    let existed = config_path.exists();

    let backup = if existed {
        let backup = backup_path(config_path);
        fs::copy(config_path, &backup).map_err(|source| InstallError::Backup {
            path: backup.clone(),
            source,
        })?;
        tracing::debug!(backup = %backup.display(), "Backed up existing config");
        Some(backup)
    } else {
        None
    };

    let mut config = if existed {
        load_config_object(config_path)?
    } else {
        if let Some(parent) = config_path.parent() {
            fs::create_dir_all(parent).map_err(|source| InstallError::Write {
                path: parent.to_path_buf(),
                source,
            })?;
        }
        Map::new()
    };

    let servers_value = config
        .entry(SERVERS_KEY.to_string())
        .or_insert_with(|| Value::Object(Map::new()));
    if !servers_value.is_object() {
        *servers_value = Value::Object(Map::new());
    }
    let servers = servers_value
        .as_object_mut()
        .expect("servers value forced to an object above");

    let replaced = servers
        .insert(server_name.to_string(), spec.to_value())
        .is_some();

    let serialized =
        serde_json::to_string_pretty(&config).map_err(InstallError::Serialize)?;
    fs::write(config_path, serialized).map_err(|source| InstallError::Write {
        path: config_path.to_path_buf(),
        source,
    })?;

    Ok(InstallOutcome {
        backup,
        replaced,
        created: !existed,
    })
}

fn load_config_object(config_path: &Path) -> Result<Map<String, Value>, InstallError> {
    let content = fs::read_to_string(config_path).map_err(|source| InstallError::Read {
        path: config_path.to_path_buf(),
        source,
    })?;
    let value: Value = serde_json::from_str(&content).map_err(|source| InstallError::Parse {
        path: config_path.to_path_buf(),
        source,
    })?;
    match value {
        Value::Object(map) => Ok(map),
        _ => Err(InstallError::NotAnObject {
            path: config_path.to_path_buf(),
        }),
    }
}
