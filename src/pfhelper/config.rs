//! YAML configuration and table-file path resolution.
//!
//! The config maps logical table names to files and directories:
//!
//! ```yaml
//! postmap: /usr/sbin/postmap
//! filesystem:
//!   files:
//!     virtual-alias: virtual-alias
//!     sender-login-maps: sender-login-maps
//!   pathes:
//!     default: /etc/postfix
//!     other: /etc/postfix/maps
//!   file-path-map:
//!     sender-login-maps: other
//! ```
//!
//! [`FileConfig`] resolves every `files` entry to an absolute path.
//! Absolute and `~`-prefixed values stand alone, `./` values are taken
//! relative to the config file, anything else is joined onto the directory
//! named by `file-path-map` (falling back to `pathes.default`).

use serde::Deserialize;
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

use crate::error::{PfError, Result};

const DEFAULT_POSTMAP: &str = "postmap";
const DEFAULT_PATH_KEY: &str = "default";

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub postmap: Option<String>,

    #[serde(default)]
    pub filesystem: Option<Filesystem>,

    /// Backing file, set by [`Config::load`]. Needed to resolve `./`
    /// relative file entries.
    #[serde(skip)]
    pub filename: Option<PathBuf>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Filesystem {
    #[serde(default)]
    pub files: BTreeMap<String, String>,

    #[serde(default)]
    pub pathes: BTreeMap<String, String>,

    #[serde(default, rename = "file-path-map")]
    pub file_path_map: BTreeMap<String, String>,
}

impl Config {
    /// Parses config text without a backing file.
    pub fn from_yaml_str(text: &str) -> Result<Self> {
        Ok(serde_yaml::from_str(text)?)
    }

    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|e| {
            PfError::Config(format!(
                "Error loading configuration file {}: {}",
                path.display(),
                e
            ))
        })?;
        let mut config = Self::from_yaml_str(&text)?;
        config.filename = Some(path.to_path_buf());
        Ok(config)
    }

    /// The map-compiler command, `postmap` unless configured otherwise.
    pub fn postmap(&self) -> &str {
        self.postmap.as_deref().unwrap_or(DEFAULT_POSTMAP)
    }
}

/// Logical table name to absolute file path, resolved once at startup.
#[derive(Debug, Clone, Default)]
pub struct FileConfig {
    paths: BTreeMap<String, PathBuf>,
}

impl FileConfig {
    pub fn new(config: &Config) -> Result<Self> {
        let mut paths = BTreeMap::new();

        let Some(filesystem) = &config.filesystem else {
            warn!("no filesystem entry in config");
            return Ok(Self { paths });
        };
        if filesystem.files.is_empty() {
            info!("no files entry under 'filesystem' in config");
            return Ok(Self { paths });
        }

        for (name, file) in &filesystem.files {
            if Path::new(file).is_absolute() || file.starts_with('~') {
                paths.insert(name.clone(), expand_user(file));
            } else if file.starts_with('.') {
                let Some(config_file) = &config.filename else {
                    return Err(PfError::Config(
                        "Can not handle relative pathes without a config file".to_string(),
                    ));
                };
                let dir = config_file.parent().unwrap_or_else(|| Path::new("."));
                paths.insert(name.clone(), dir.join(file));
            } else if let Some(dir) = resolve_dir(filesystem, name) {
                paths.insert(name.clone(), expand_user(dir).join(file));
            } else {
                info!(name = %name, "path for table not found in config");
            }
        }

        Ok(Self { paths })
    }

    pub fn get(&self, name: &str) -> Option<&Path> {
        self.paths.get(name).map(PathBuf::as_path)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Path)> {
        self.paths.iter().map(|(n, p)| (n.as_str(), p.as_path()))
    }

    pub fn len(&self) -> usize {
        self.paths.len()
    }

    pub fn is_empty(&self) -> bool {
        self.paths.is_empty()
    }
}

/// Directory for a plain file entry: the `file-path-map` alias wins, the
/// `default` path is the fallback. A name mapped to a missing path
/// resolves to nothing rather than falling back.
fn resolve_dir<'a>(filesystem: &'a Filesystem, name: &str) -> Option<&'a str> {
    if filesystem.pathes.is_empty() {
        info!("couldn't find 'pathes' in config");
        return None;
    }
    match filesystem.file_path_map.get(name) {
        Some(alias) => filesystem.pathes.get(alias).map(String::as_str),
        None => filesystem.pathes.get(DEFAULT_PATH_KEY).map(String::as_str),
    }
}

fn expand_user(path: &str) -> PathBuf {
    if let Some(rest) = path.strip_prefix("~/") {
        if let Some(dirs) = directories::BaseDirs::new() {
            return dirs.home_dir().join(rest);
        }
    } else if path == "~" {
        if let Some(dirs) = directories::BaseDirs::new() {
            return dirs.home_dir().to_path_buf();
        }
    }
    PathBuf::from(path)
}
