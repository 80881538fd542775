use crate::error::{LensError, Result};
use crate::types::config::LensConfig;
use std::path::{Path, PathBuf};
use toml::map::Map;
use toml::Value;

pub const DEFAULT_CONFIG_FILE: &str = "lens.toml";
pub const DEFAULT_LOCAL_FILE: &str = ".lens/local.toml";
pub const DEFAULT_GLOBAL_CONFIG_FILE: &str = ".config/lens/config.toml";

/// Loads global, then `lens.toml`, then `.lens/local.toml` under `root`.
/// No file at all means the built-in defaults.
pub fn load_config(root: &Path) -> Result<LensConfig> {
    let global = std::env::var_os("HOME")
        .map(PathBuf::from)
        .map(|home| home.join(DEFAULT_GLOBAL_CONFIG_FILE));
    load_config_with_global(root, global.as_deref())
}

pub(crate) fn load_config_with_global(
    root: &Path,
    global_path: Option<&Path>,
) -> Result<LensConfig> {
    let mut merged = Value::Table(Map::new());
    let mut layers = 0;
    if let Some(path) = global_path {
        layers += merge_file_if_exists(&mut merged, path)?;
    }
    layers += merge_file_if_exists(&mut merged, &root.join(DEFAULT_CONFIG_FILE))?;
    layers += merge_file_if_exists(&mut merged, &root.join(DEFAULT_LOCAL_FILE))?;

    if layers == 0 {
        tracing::debug!(root = %root.display(), "no config found, using defaults");
        return Ok(LensConfig::default());
    }

    merged
        .try_into()
        .map_err(|e: toml::de::Error| LensError::ConfigParse(e.to_string()))
}

fn merge_file_if_exists(merged: &mut Value, path: &Path) -> Result<usize> {
    if !path.exists() {
        return Ok(0);
    }
    let value = read_toml_value(path)?;
    merge_toml(merged, value);
    tracing::info!(path = %path.display(), "config layer loaded");
    Ok(1)
}

fn read_toml_value(path: &Path) -> Result<Value> {
    let content = std::fs::read_to_string(path)?;
    toml::from_str(&content)
        .map_err(|e| LensError::ConfigParse(format!("{}: {}", path.display(), e)))
}

/// Tables merge key by key; anything else, arrays included, is replaced.
fn merge_toml(base: &mut Value, overlay: Value) {
    match (base, overlay) {
        (Value::Table(base_table), Value::Table(overlay_table)) => {
            for (key, value) in overlay_table {
                match base_table.get_mut(&key) {
                    Some(existing) => merge_toml(existing, value),
                    None => {
                        base_table.insert(key, value);
                    }
                }
            }
        }
        (slot, value) => {
            *slot = value;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::config::RangePolicy;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn load_config_defaults_when_no_file_exists() {
        let dir = TempDir::new().expect("temp dir should be created");
        let cfg = load_config_with_global(dir.path(), None).expect("load should not fail");
        assert_eq!(cfg.range_policy(), RangePolicy::Reject);
        assert!(cfg.categories.is_none());
    }

    #[test]
    fn load_config_merges_global_repo_and_local_in_order() {
        let root = TempDir::new().expect("root temp dir should be created");
        let global_root = TempDir::new().expect("global temp dir should be created");
        let global_path = global_root.path().join("config.toml");

        fs::write(
            &global_path,
            r#"
[scoring]
out_of_range = "clamp"

[weights]
"Story/Plot" = 0.10
Acting = 0.10
"#,
        )
        .expect("global config should write");

        fs::write(
            root.path().join(DEFAULT_CONFIG_FILE),
            r#"
[weights]
"Story/Plot" = 0.20
"#,
        )
        .expect("repo config should write");

        fs::create_dir_all(root.path().join(".lens")).expect("local lens dir should create");
        fs::write(
            root.path().join(DEFAULT_LOCAL_FILE),
            r#"
[scoring]
out_of_range = "reject"
"#,
        )
        .expect("local override should write");

        let cfg = load_config_with_global(root.path(), Some(&global_path))
            .expect("load should succeed");

        assert_eq!(cfg.range_policy(), RangePolicy::Reject);
        let weights = cfg.weights.expect("weights should be merged");
        assert_eq!(weights.get("Story/Plot"), Some(&0.20));
        assert_eq!(weights.get("Acting"), Some(&0.10));
    }

    #[test]
    fn load_config_reports_parse_errors_with_path() {
        let root = TempDir::new().expect("root temp dir should be created");
        fs::write(root.path().join(DEFAULT_CONFIG_FILE), "[scoring\n")
            .expect("broken config should write");

        let result = load_config_with_global(root.path(), None);
        assert!(matches!(result, Err(LensError::ConfigParse(msg)) if msg.contains("lens.toml")));
    }
}
