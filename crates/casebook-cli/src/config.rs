use std::path::{Path, PathBuf};

use casebook_core::case_files::{FAILURES_SUFFIX, MAX_ZERO_PAD};
use serde::{Deserialize, Serialize};

/// Current config version. Bump this when adding fields or changing shape.
/// Each bump requires a corresponding entry in [`migrate`].
const CURRENT_VERSION: u32 = 1;

/// Environment variable naming the config file.
pub const CONFIG_ENV: &str = "CASEBOOK_CONFIG";

/// Config file looked up in the working directory when [`CONFIG_ENV`] is unset.
pub const DEFAULT_CONFIG_FILE: &str = "casebook.json";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConvertConfig {
    /// Schema version. Missing or 0 = pre-versioned config.
    #[serde(default)]
    pub config_version: u32,
    /// Line-delimited JSON export of raw cases.
    #[serde(default = "default_input")]
    pub input: PathBuf,
    #[serde(default = "default_output_dir")]
    pub output_dir: PathBuf,
    /// Number given to the first converted case.
    #[serde(default = "default_start_index")]
    pub start_index: u64,
    /// Digits in the case number, e.g. 5 gives `case_00001.json`.
    #[serde(default = "default_zero_pad")]
    pub zero_pad: usize,
    /// Where rejected records are reported. Defaults to the input path with
    /// `.fail.jsonl` appended.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub failures_path: Option<PathBuf>,
}

fn default_input() -> PathBuf {
    PathBuf::from("data/raw_cactus.jsonl")
}

fn default_output_dir() -> PathBuf {
    PathBuf::from("data/cases")
}

fn default_start_index() -> u64 {
    1
}

fn default_zero_pad() -> usize {
    5
}

impl Default for ConvertConfig {
    fn default() -> Self {
        Self {
            config_version: CURRENT_VERSION,
            input: default_input(),
            output_dir: default_output_dir(),
            start_index: default_start_index(),
            zero_pad: default_zero_pad(),
            failures_path: None,
        }
    }
}

impl ConvertConfig {
    pub fn failures_path(&self) -> PathBuf {
        self.failures_path.clone().unwrap_or_else(|| {
            let mut path = self.input.clone().into_os_string();
            path.push(FAILURES_SUFFIX);
            PathBuf::from(path)
        })
    }
}

fn config_path() -> Option<PathBuf> {
    match std::env::var_os(CONFIG_ENV) {
        Some(path) => Some(PathBuf::from(path)),
        None => {
            let local = PathBuf::from(DEFAULT_CONFIG_FILE);
            local.exists().then_some(local)
        }
    }
}

/// Load the config file (if any), then apply environment overrides.
pub fn load_config() -> eyre::Result<ConvertConfig> {
    let mut config = match config_path() {
        Some(path) => load_config_from(&path)?,
        None => {
            tracing::debug!("no config file, using defaults");
            ConvertConfig::default()
        }
    };

    apply_overrides(&mut config, |key| std::env::var(key).ok())?;
    validate(&config)?;
    Ok(config)
}

pub fn load_config_from(path: &Path) -> eyre::Result<ConvertConfig> {
    let contents = std::fs::read_to_string(path)
        .map_err(|e| eyre::eyre!("failed to read config at {}: {e}", path.display()))?;
    let config = parse_config(&contents)?;
    tracing::info!(path = %path.display(), "config loaded");
    Ok(config)
}

pub fn parse_config(contents: &str) -> eyre::Result<ConvertConfig> {
    // Parse as raw JSON so we can run migrations before deserializing.
    let json: serde_json::Value = serde_json::from_str(contents)?;
    let on_disk_version = json
        .get("config_version")
        .and_then(|v| v.as_u64())
        .unwrap_or(0) as u32;

    let migrated = migrate(json, on_disk_version)?;
    let config: ConvertConfig = serde_json::from_value(migrated)?;
    Ok(config)
}

/// Run sequential migrations from `from_version` up to [`CURRENT_VERSION`].
fn migrate(mut json: serde_json::Value, from_version: u32) -> eyre::Result<serde_json::Value> {
    if from_version > CURRENT_VERSION {
        return Err(eyre::eyre!(
            "config_version {from_version} is newer than this build supports ({CURRENT_VERSION})"
        ));
    }

    // v0 → v1: unversioned files have the v1 shape; only stamp the version.
    if from_version < 1 {
        let obj = json
            .as_object_mut()
            .ok_or_else(|| eyre::eyre!("config is not a JSON object"))?;
        obj.insert(
            "config_version".to_string(),
            serde_json::Value::Number(1.into()),
        );
        tracing::info!("migrated config v0 → v1");
    }

    // Future migrations go here:
    // if from_version < 2 { ... }

    Ok(json)
}

/// Override config values from `CASEBOOK_*` variables resolved by `lookup`.
pub fn apply_overrides(
    config: &mut ConvertConfig,
    lookup: impl Fn(&str) -> Option<String>,
) -> eyre::Result<()> {
    if let Some(input) = lookup("CASEBOOK_INPUT") {
        config.input = PathBuf::from(input);
    }
    if let Some(dir) = lookup("CASEBOOK_OUTPUT_DIR") {
        config.output_dir = PathBuf::from(dir);
    }
    if let Some(start) = lookup("CASEBOOK_START_INDEX") {
        config.start_index = start
            .trim()
            .parse()
            .map_err(|e| eyre::eyre!("invalid CASEBOOK_START_INDEX {start:?}: {e}"))?;
    }
    if let Some(pad) = lookup("CASEBOOK_ZERO_PAD") {
        config.zero_pad = pad
            .trim()
            .parse()
            .map_err(|e| eyre::eyre!("invalid CASEBOOK_ZERO_PAD {pad:?}: {e}"))?;
    }
    if let Some(path) = lookup("CASEBOOK_FAILURES_PATH") {
        config.failures_path = Some(PathBuf::from(path));
    }
    Ok(())
}

pub fn validate(config: &ConvertConfig) -> eyre::Result<()> {
    if config.zero_pad == 0 || config.zero_pad > MAX_ZERO_PAD {
        return Err(eyre::eyre!(
            "zero_pad must be between 1 and {MAX_ZERO_PAD}, got {}",
            config.zero_pad
        ));
    }
    Ok(())
}
