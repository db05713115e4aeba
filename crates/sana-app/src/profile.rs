use std::env;
use std::fs::File;
use std::io::{self, BufReader};
use std::path::{Path, PathBuf};

use anyhow::Context;
use sana_config::Config;

/// Looked up in the working directory when no path is given
const DEFAULT_CONFIG_FILE: &str = "sana.json";

pub struct LoadedConfig {
    pub config: Config,
    /// None when built from environment defaults
    pub source: Option<PathBuf>,
    /// Logged by the caller once tracing is up
    pub warnings: Vec<String>,
}

/// Ok(None) when the file does not exist; parse errors are fatal
fn load_config_file(path: &Path) -> anyhow::Result<Option<Config>> {
    let file = match File::open(path) {
        Ok(file) => file,
        Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(None),
        Err(e) => return Err(e).with_context(|| format!("opening {}", path.display())),
    };
    let reader = BufReader::new(file);
    let config = serde_json::from_reader(reader)
        .with_context(|| format!("parsing {}", path.display()))?;
    Ok(Some(config))
}

/// Resolve the config: explicit path, then SANA_CONFIG, then ./sana.json,
/// then environment defaults. A named file that is missing falls back to
/// environment defaults with a warning.
pub fn load_config(explicit: Option<&Path>) -> anyhow::Result<LoadedConfig> {
    resolve_config(
        explicit,
        env::var_os("SANA_CONFIG").map(PathBuf::from),
        Path::new("."),
    )
}

pub(crate) fn resolve_config(
    explicit: Option<&Path>,
    from_env: Option<PathBuf>,
    workdir: &Path,
) -> anyhow::Result<LoadedConfig> {
    let mut warnings = Vec::new();

    let named = explicit.map(Path::to_path_buf).or(from_env);
    if let Some(path) = named {
        match load_config_file(&path)? {
            Some(config) => {
                return Ok(LoadedConfig {
                    config,
                    source: Some(path),
                    warnings,
                });
            }
            None => warnings.push(format!(
                "Config file {} not found, using environment defaults",
                path.display()
            )),
        }
    } else {
        let fallback = workdir.join(DEFAULT_CONFIG_FILE);
        if let Some(config) = load_config_file(&fallback)? {
            return Ok(LoadedConfig {
                config,
                source: Some(fallback),
                warnings,
            });
        }
    }

    Ok(LoadedConfig {
        config: Config::new(),
        source: None,
        warnings,
    })
}

/// Log filter precedence: SANA_LOG, then RUST_LOG, then the config value
pub fn log_filter(config: &Config) -> String {
    pick_log_filter(
        env::var("SANA_LOG").ok(),
        env::var("RUST_LOG").ok(),
        &config.log_filter,
    )
}

pub(crate) fn pick_log_filter(
    sana_log: Option<String>,
    rust_log: Option<String>,
    configured: &str,
) -> String {
    sana_log
        .filter(|v| !v.trim().is_empty())
        .or_else(|| rust_log.filter(|v| !v.trim().is_empty()))
        .unwrap_or_else(|| configured.to_string())
}
