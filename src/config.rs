//! Profile loading for folio
//!
//! The portfolio content can be overridden by a TOML file; every field
//! falls back to the built-in sample, so a partial file is fine.
//! Profile file location: ~/.config/folio/profile.toml
//!
//! View state (active tab, theme) is deliberately never written anywhere;
//! each run starts fresh.

use crate::content::Profile;
use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// Default profile file path
pub fn profile_path() -> Result<PathBuf> {
    let config_dir = dirs::config_dir()
        .context("Could not determine config directory")?
        .join("folio");
    Ok(config_dir.join("profile.toml"))
}

/// Load the profile, preferring an explicit path over the default location.
///
/// A missing default file yields the built-in sample; an unreadable or
/// malformed file is an error (an explicitly requested path should never be
/// silently ignored).
pub fn load_profile(override_path: Option<&Path>) -> Result<Profile> {
    let path = match override_path {
        Some(p) => p.to_path_buf(),
        None => {
            let default = profile_path()?;
            if !default.exists() {
                return Ok(Profile::sample());
            }
            default
        }
    };

    let content = fs::read_to_string(&path)
        .with_context(|| format!("Failed to read profile from {:?}", path))?;

    toml::from_str(&content)
        .with_context(|| format!("Failed to parse profile from {:?}", path))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn temp_profile(name: &str, contents: &str) -> PathBuf {
        let path = std::env::temp_dir().join(format!("folio-test-{}-{}", std::process::id(), name));
        let mut file = fs::File::create(&path).unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        path
    }

    #[test]
    fn test_partial_profile_fills_defaults() {
        let path = temp_profile("partial.toml", "[identity]\nname = \"Jane Doe\"\n");

        let profile = load_profile(Some(&path)).unwrap();
        assert_eq!(profile.identity.name, "Jane Doe");
        // Everything unspecified falls back to the sample
        assert!(!profile.skills.is_empty());
        assert!(!profile.projects.is_empty());

        fs::remove_file(&path).ok();
    }

    #[test]
    fn test_malformed_profile_is_an_error() {
        let path = temp_profile("broken.toml", "identity = [not toml\n");
        assert!(load_profile(Some(&path)).is_err());
        fs::remove_file(&path).ok();
    }

    #[test]
    fn test_missing_explicit_path_is_an_error() {
        let path = std::env::temp_dir().join("folio-test-does-not-exist.toml");
        assert!(load_profile(Some(&path)).is_err());
    }
}
