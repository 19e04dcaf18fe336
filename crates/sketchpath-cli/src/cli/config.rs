//! Loading `DrawOptions` from a config file.
//!
//! YAML for `.yaml`/`.yml`, JSON for anything else. Fields left out of the
//! file keep their defaults.

use std::fs;
use std::path::{Path, PathBuf};

use sketchpath::DrawOptions;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum OptionsError {
    #[error("failed to read config {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid YAML config {path}: {source}")]
    Yaml {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },
    #[error("invalid JSON config {path}: {source}")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Read a config file into `DrawOptions`.
pub fn load_options<P: AsRef<Path>>(path: P) -> Result<DrawOptions, OptionsError> {
    let path = path.as_ref();
    let content = fs::read_to_string(path).map_err(|source| OptionsError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    let options = if is_yaml(path) {
        serde_yaml::from_str(&content).map_err(|source| OptionsError::Yaml {
            path: path.to_path_buf(),
            source,
        })?
    } else {
        serde_json::from_str(&content).map_err(|source| OptionsError::Json {
            path: path.to_path_buf(),
            source,
        })?
    };

    tracing::debug!(path = %path.display(), ?options, "loaded config");
    Ok(options)
}

fn is_yaml(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("yaml") || ext.eq_ignore_ascii_case("yml"))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_file(name: &str, content: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!("sketchpath-config-{}", std::process::id()));
        fs::create_dir_all(&dir).unwrap();
        let path = dir.join(name);
        fs::write(&path, content).unwrap();
        path
    }

    #[test]
    fn yaml_merges_over_defaults() {
        let path = temp_file("rough.yaml", "roughness: 2.5\nhachureGap: 6\n");
        let options = load_options(&path).unwrap();
        assert_eq!(options.roughness, 2.5);
        assert_eq!(options.hachure_gap, Some(6.0));
        assert_eq!(options.bowing, DrawOptions::default().bowing);
    }

    #[test]
    fn json_config() {
        let path = temp_file("smooth.json", r#"{ "roughness": 0, "hachureAngle": 30 }"#);
        let options = load_options(&path).unwrap();
        assert_eq!(options.roughness, 0.0);
        assert_eq!(options.hachure_angle, 30.0);
    }

    #[test]
    fn missing_file_is_read_error() {
        let result = load_options("/definitely/not/here.yaml");
        assert!(matches!(result, Err(OptionsError::Read { .. })));
    }

    #[test]
    fn malformed_json_is_reported() {
        let path = temp_file("broken.json", "{ roughness: ");
        assert!(matches!(load_options(&path), Err(OptionsError::Json { .. })));
    }
}
