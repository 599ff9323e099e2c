//! # Settings Loader
//!
//! Centralized loading of the calculator's `settings.json`: the minimum
//! salary threshold, the currency symbol used for formatting, and an
//! optional default distribution overriding the built-in 25/30/15/15/10/5
//! split.
//!
//! Every loader degrades gracefully: a missing file yields `None` (the
//! calculator then runs on `Settings::default()`), while a present but
//! malformed file is a hard error so a typo in the distribution does not
//! silently change what users see.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use models::Settings;

/// Parses settings from a JSON string and validates the distribution.
pub fn parse_settings(raw: &str) -> Result<Settings> {
    let settings: Settings =
        serde_json::from_str(raw).context("Parsing settings JSON")?;
    validate(&settings)?;
    Ok(settings)
}

/// Loads settings from a JSON file
pub fn load_settings<P: AsRef<Path>>(path: P) -> Result<Settings> {
    let path = path.as_ref();
    let raw = fs::read_to_string(path)
        .with_context(|| format!("Reading settings file: {}", path.display()))?;
    parse_settings(&raw).with_context(|| format!("In settings file {}", path.display()))
}

/// Loads settings from a default location (settings.json in the current directory)
pub fn load_default_settings() -> Result<Settings> {
    load_settings("settings.json")
}

/// Loads settings from an optional path, returning None if no path is provided
pub fn load_optional_settings(path: Option<&PathBuf>) -> Result<Option<Settings>> {
    match path {
        Some(settings_path) => Ok(Some(load_settings(settings_path)?)),
        None => Ok(None),
    }
}

/// Tries the provided path first, then falls back to the default location.
/// Returns None only if no settings file is found anywhere.
///
/// A provided path that exists but fails to load is a hard error; the
/// fallback is only for absent files.
pub fn load_settings_with_fallback(path: Option<&PathBuf>) -> Result<Option<Settings>> {
    if let Some(settings_path) = path {
        if settings_file_exists(settings_path) {
            return Ok(Some(load_settings(settings_path)?));
        }
    }

    match load_default_settings() {
        Ok(settings) => Ok(Some(settings)),
        Err(_) => Ok(None),
    }
}

/// Checks if a settings file exists at the given path
pub fn settings_file_exists<P: AsRef<Path>>(path: P) -> bool {
    path.as_ref().exists() && path.as_ref().is_file()
}

fn validate(settings: &Settings) -> Result<()> {
    if settings.minimum_salary < 0.0 {
        bail!("minimum_salary must be non-negative");
    }
    if let Some(distribution) = &settings.default_distribution {
        for category in models::Category::ALL {
            let share = distribution.get(category);
            if !(0.0..=1.0).contains(&share) {
                bail!(
                    "default_distribution.{} = {} is outside [0, 1]",
                    category.as_str(),
                    share
                );
            }
        }
        let total = distribution.sum();
        if (total - 1.0).abs() > 1e-6 {
            bail!("default_distribution sums to {}, expected 1.0", total);
        }
    }
    Ok(())
}
