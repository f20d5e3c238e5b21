//! Configuration file upgrades: detect keys missing from an older file and
//! write them back with their default values, keeping the user's values.

use super::Config;
use crate::errors::AppResult;
use serde_yaml::{Mapping, Value};
use std::fs;
use std::path::Path;

fn default_mapping() -> AppResult<Mapping> {
    let value = serde_yaml::to_value(Config::default())?;
    Ok(value.as_mapping().cloned().unwrap_or_default())
}

fn read_mapping(path: &Path) -> AppResult<Mapping> {
    if !path.exists() {
        return Ok(Mapping::new());
    }
    let content = fs::read_to_string(path)?;
    if content.trim().is_empty() {
        return Ok(Mapping::new());
    }
    let value: Value = serde_yaml::from_str(&content)?;
    Ok(value.as_mapping().cloned().unwrap_or_default())
}

/// Keys present in the default configuration but absent from the file.
pub fn missing_keys(path: &Path) -> AppResult<Vec<String>> {
    let current = read_mapping(path)?;
    let defaults = default_mapping()?;

    Ok(defaults
        .keys()
        .filter(|k| !current.contains_key(*k))
        .filter_map(|k| k.as_str().map(str::to_string))
        .collect())
}

/// Add every missing key with its default value.
/// Returns the keys that were added (empty → file untouched).
pub fn migrate_config(path: &Path) -> AppResult<Vec<String>> {
    let mut current = read_mapping(path)?;
    let defaults = default_mapping()?;

    let mut added = Vec::new();
    for (k, v) in defaults {
        if !current.contains_key(&k) {
            if let Some(name) = k.as_str() {
                added.push(name.to_string());
            }
            current.insert(k, v);
        }
    }

    if added.is_empty() {
        return Ok(added);
    }

    if let Some(dir) = path.parent() {
        fs::create_dir_all(dir)?;
    }
    fs::write(path, serde_yaml::to_string(&Value::Mapping(current))?)?;

    Ok(added)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn migration_adds_only_missing_keys() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("fieldops.conf");
        fs::write(&path, "api_url: http://example.test/api\n").unwrap();

        let missing = missing_keys(&path).unwrap();
        assert!(missing.contains(&"request_timeout_secs".to_string()));
        assert!(!missing.contains(&"api_url".to_string()));

        let added = migrate_config(&path).unwrap();
        assert_eq!(added, missing);

        let cfg = Config::load_from(&path).unwrap();
        assert_eq!(cfg.api_url, "http://example.test/api");
        assert!(missing_keys(&path).unwrap().is_empty());

        // second run is a no-op
        assert!(migrate_config(&path).unwrap().is_empty());
    }
}
