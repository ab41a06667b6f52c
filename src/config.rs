//! Resolution of the store endpoint and credential, plus the default
//! locations the application claims beneath the user's home directory.
//! Precedence is flags over environment over the config file, so a one-off
//! override never requires editing anything on disk.

use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{anyhow, Context, Result};
use directories::BaseDirs;
use serde::Deserialize;

/// Folder name used beneath the user's home directory for application data.
const DATA_DIR_NAME: &str = ".creatorverse";
/// Config file name stored inside the application data directory.
const CONFIG_FILE_NAME: &str = "config.json";
/// Subdirectory of the data directory that receives rolling log files.
const LOG_DIR_NAME: &str = "logs";

/// Environment variable naming the store endpoint.
const URL_ENV: &str = "CREATORVERSE_URL";
/// Environment variable carrying the store credential.
const API_KEY_ENV: &str = "CREATORVERSE_API_KEY";

/// Connection settings for the hosted record store, resolved once at
/// startup and handed to the REST client.
#[derive(Debug, Clone)]
pub struct StoreConfig {
    /// Base endpoint of the hosted store, without the table path.
    pub url: String,
    /// Credential sent with every request.
    pub api_key: String,
}

/// On-disk shape of the optional config file. Both fields are optional so a
/// file carrying only the endpoint still contributes.
#[derive(Debug, Default, Deserialize)]
struct ConfigFile {
    url: Option<String>,
    #[serde(rename = "apiKey")]
    api_key: Option<String>,
}

impl StoreConfig {
    /// Resolve the endpoint and credential from CLI flags, the environment,
    /// and the optional config file, in that order of precedence. Fails with
    /// a hint naming every source when a value is missing everywhere.
    pub fn resolve(url_flag: Option<String>, api_key_flag: Option<String>) -> Result<Self> {
        let file = load_config_file()?.unwrap_or_default();

        let url = pick(url_flag, env_var(URL_ENV), file.url).ok_or_else(|| {
            anyhow!("store URL missing; pass --url, set {URL_ENV}, or add `url` to the config file")
        })?;
        let api_key = pick(api_key_flag, env_var(API_KEY_ENV), file.api_key).ok_or_else(|| {
            anyhow!(
                "store credential missing; pass --api-key, set {API_KEY_ENV}, \
                 or add `apiKey` to the config file"
            )
        })?;

        Ok(Self { url, api_key })
    }
}

/// First non-blank value in precedence order.
fn pick(flag: Option<String>, env: Option<String>, file: Option<String>) -> Option<String> {
    [flag, env, file]
        .into_iter()
        .flatten()
        .map(|value| value.trim().to_string())
        .find(|value| !value.is_empty())
}

fn env_var(name: &str) -> Option<String> {
    env::var(name).ok()
}

/// Resolve the absolute path to the config file inside the user's home.
fn config_file_path() -> Option<PathBuf> {
    let base_dirs = BaseDirs::new()?;
    Some(
        base_dirs
            .home_dir()
            .join(DATA_DIR_NAME)
            .join(CONFIG_FILE_NAME),
    )
}

/// Load the config file when it exists. A missing file is not an error; an
/// unreadable or malformed one is, since silently ignoring it would send the
/// user hunting through precedence rules.
fn load_config_file() -> Result<Option<ConfigFile>> {
    let Some(path) = config_file_path() else {
        return Ok(None);
    };
    if !path.exists() {
        return Ok(None);
    }
    parse_config_file(&path)
        .map(Some)
        .with_context(|| format!("failed to load config file at {}", path.display()))
}

fn parse_config_file(path: &Path) -> Result<ConfigFile> {
    let raw = fs::read_to_string(path)?;
    Ok(serde_json::from_str(&raw)?)
}

/// Default directory for rolling log files, beneath the application data
/// directory in the user's home.
pub fn default_log_dir() -> Result<PathBuf> {
    let base_dirs = BaseDirs::new().ok_or_else(|| anyhow!("could not locate home directory"))?;
    Ok(base_dirs
        .home_dir()
        .join(DATA_DIR_NAME)
        .join(LOG_DIR_NAME))
}
