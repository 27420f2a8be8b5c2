use anyhow::{Context, Result};
use confyg::{env, Confygery};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use tagwright_core::Script;

/// Configuration for tagwright.
///
/// Configuration is loaded from multiple sources with the following priority:
/// 1. CLI arguments (highest priority)
/// 2. Environment variables (TAGWRIGHT_* prefix)
/// 3. Config file (~/.config/tagwright/config.toml)
/// 4. Built-in defaults (lowest priority)
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    /// Options consulted while mapping documents.
    ///
    /// Config: the `[mapping]` table.
    #[serde(default)]
    pub mapping: Settings,

    /// Logger options handed to twyg by the binary.
    ///
    /// Config: the `[logging]` table.
    #[serde(default)]
    pub logging: twyg::Opts,
}

/// A script whose presence suppresses artist-name translation.
///
/// Translation is skipped when at least `weight` percent of the letters in
/// an artist's name are written in `script`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScriptException {
    pub script: Script,
    pub weight: u8,
}

impl ScriptException {
    /// The weight as a share in `0.0..=1.0`.
    pub fn share(&self) -> f64 {
        f64::from(self.weight) / 100.0
    }
}

/// User options that steer the mapper.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
#[allow(clippy::struct_excessive_bools)]
pub struct Settings {
    /// Use canonical artist names instead of credited names.
    pub standardize_artists: bool,

    /// Use canonical instrument names instead of instrument credits.
    pub standardize_instruments: bool,

    /// Replace artist names with a locale alias where one matches.
    pub translate_artist_names: bool,

    /// Consult `script_exceptions` before translating.
    pub translate_artist_names_script_exception: bool,

    /// Scripts that keep an artist name untranslated.
    pub script_exceptions: Vec<ScriptException>,

    /// Preferred locales for alias lookup, most preferred first
    /// (e.g. `["ja_JP", "en"]`).
    pub artist_locales: Vec<String>,

    /// Map release-level relationships.
    pub release_ars: bool,

    /// Countries to surface as `releasecountry`, most preferred first.
    pub preferred_release_countries: Vec<String>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            standardize_artists: false,
            standardize_instruments: true,
            translate_artist_names: false,
            translate_artist_names_script_exception: false,
            script_exceptions: Vec::new(),
            artist_locales: vec!["en".to_string()],
            release_ars: true,
            preferred_release_countries: Vec::new(),
        }
    }
}

impl Config {
    /// Load configuration from file and environment variables.
    ///
    /// Searches for config file at: ~/.config/tagwright/config.toml
    /// Reads environment variables with TAGWRIGHT_ prefix.
    ///
    /// # Errors
    ///
    /// Returns an error if the config file exists but cannot be parsed.
    pub fn load() -> Result<Self> {
        Self::load_from(config_file_path())
    }

    /// Load configuration from an explicit file path plus the environment.
    ///
    /// This is used when the --config CLI flag is provided. A missing file
    /// is not an error; defaults and the environment still apply.
    ///
    /// Environment keys are `TAGWRIGHT_<SECTION>_<KEY>`, so
    /// `TAGWRIGHT_MAPPING_RELEASE_ARS=false` overrides `release_ars` in
    /// `[mapping]` and `TAGWRIGHT_LOGGING_LEVEL=debug` overrides `level` in
    /// `[logging]`.
    pub fn load_from(config_path: PathBuf) -> Result<Self> {
        let mut builder = Confygery::new()
            .context("Failed to create config builder")?;

        if config_path.exists() {
            let path_str = config_path.to_str()
                .ok_or_else(|| anyhow::anyhow!("Config path contains invalid UTF-8"))?;
            builder.add_file(path_str)
                .with_context(|| format!("Failed to load config file {}", config_path.display()))?;
        } else {
            log::debug!("No config file at {}, using defaults", config_path.display());
        }

        // Sections become the second segment of the variable name.
        let env_opts = env::Options::with_top_level("tagwright");
        builder.add_env(env_opts)
            .context("Failed to load environment variables")?;

        let config: Self = builder.build()
            .context("Failed to build configuration")?;

        Ok(config)
    }
}

/// Get the config file path.
///
/// Returns:
/// - Linux: ~/.config/tagwright/config.toml
/// - macOS: ~/Library/Application Support/tagwright/config.toml
/// - Windows: %APPDATA%\tagwright\config.toml
pub fn config_file_path() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("tagwright")
        .join("config.toml")
}

/// Get the example config file content.
pub fn example_config() -> &'static str {
    r#"# Tagwright Configuration File
#
# Configuration is loaded from multiple sources with the following priority:
# 1. CLI arguments (highest priority)
# 2. Environment variables (TAGWRIGHT_* prefix)
# 3. This config file
# 4. Built-in defaults (lowest priority)

[mapping]
# Use canonical artist names instead of the names printed on the release
standardize_artists = false

# Use canonical instrument names instead of instrument credits
standardize_instruments = true

# Replace artist names with an alias in one of the locales below
translate_artist_names = false
artist_locales = ["en"]

# Keep names untranslated when enough of their letters use these scripts
translate_artist_names_script_exception = false
#script_exceptions = [{ script = "LATIN", weight = 50 }]

# Map release-level relationships (producers, engineers, license URLs...)
release_ars = true

# Countries to report as the release country when the release was issued there
preferred_release_countries = []
"#
}

/// Create default config file if it doesn't exist.
///
/// Returns true if a new file was created, false if it already existed.
pub fn ensure_config_file() -> Result<bool> {
    ensure_config_file_at(&config_file_path())
}

/// Create the config file at `config_path` if it doesn't exist.
pub fn ensure_config_file_at(config_path: &std::path::Path) -> Result<bool> {
    if config_path.exists() {
        return Ok(false);
    }

    if let Some(parent) = config_path.parent() {
        std::fs::create_dir_all(parent)
            .context("Failed to create config directory")?;
    }

    std::fs::write(config_path, example_config())
        .context("Failed to write config file")?;

    Ok(true)
}
