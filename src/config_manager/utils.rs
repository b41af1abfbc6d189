use std::fs;
use std::path::Path;
use anyhow::Result;
use once_cell::sync::Lazy;
use regex::{Captures, Regex};
use serde_json::Value;
use tracing::debug;

static ENV_VAR_PATTERN: Lazy<Regex> = Lazy::new(|| Regex::new(r"\$\{(\w+)\}").unwrap());

/// On-disk formats understood by the loader, chosen by file extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigFormat {
    Json,
    Yaml,
}

impl ConfigFormat {
    pub fn from_path(path: &Path) -> Self {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_lowercase());
        match ext.as_deref() {
            Some("json") | Some("jsonld") => ConfigFormat::Json,
            _ => ConfigFormat::Yaml,
        }
    }
}

/// Replace `${VAR_NAME}` with the environment value, leaving unknown
/// variables untouched.
pub fn substitute_env_vars(content: &str) -> String {
    ENV_VAR_PATTERN
        .replace_all(content, |caps: &Captures| {
            std::env::var(&caps[1]).unwrap_or_else(|_| caps[0].to_string())
        })
        .into_owned()
}

/// Read a configuration file as UTF-8, dropping a leading BOM.
pub fn read_config_text(path: &Path) -> Result<String> {
    if !path.exists() {
        anyhow::bail!("Configuration file not found: {}", path.display());
    }

    let mut bytes = fs::read(path)?;
    if bytes.starts_with(&[0xEF, 0xBB, 0xBF]) {
        bytes.drain(0..3);
    }
    let content = String::from_utf8(bytes)?;
    debug!("Read {} bytes of configuration from {}", content.len(), path.display());
    Ok(substitute_env_vars(&content))
}

/// Parse configuration text into a generic JSON tree, whatever the source format.
pub fn parse_config_value(content: &str, format: ConfigFormat) -> Result<Value> {
    let value = match format {
        ConfigFormat::Json => serde_json::from_str(content)?,
        ConfigFormat::Yaml => serde_yaml::from_str(content)?,
    };
    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn format_follows_extension() {
        assert_eq!(ConfigFormat::from_path(Path::new("conf.jsonld")), ConfigFormat::Json);
        assert_eq!(ConfigFormat::from_path(Path::new("conf.JSON")), ConfigFormat::Json);
        assert_eq!(ConfigFormat::from_path(Path::new("conf.yaml")), ConfigFormat::Yaml);
        assert_eq!(ConfigFormat::from_path(Path::new("conf")), ConfigFormat::Yaml);
    }

    #[test]
    fn unknown_env_vars_are_kept() {
        let out = substitute_env_vars("port: ${AGENT_CHAT_SURELY_UNSET_VAR}");
        assert_eq!(out, "port: ${AGENT_CHAT_SURELY_UNSET_VAR}");
    }

    #[test]
    fn known_env_vars_are_replaced() {
        std::env::set_var("AGENT_CHAT_TEST_NAME", "Chef");
        let out = substitute_env_vars("name: ${AGENT_CHAT_TEST_NAME}");
        assert_eq!(out, "name: Chef");
    }

    #[test]
    fn bom_is_stripped() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("conf.json");
        let mut bytes = vec![0xEF, 0xBB, 0xBF];
        bytes.extend_from_slice(b"{}");
        fs::write(&path, bytes).unwrap();

        assert_eq!(read_config_text(&path).unwrap(), "{}");
    }
}
