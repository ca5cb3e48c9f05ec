use crate::utils::error::{Result, SweepError};
use crate::utils::logger::LogFormat;
use crate::utils::validation::{validate_non_empty_string, validate_one_of, validate_path, Validate};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

const LOG_FORMATS: [&str; 2] = ["compact", "json"];

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TomlConfig {
    pub sweep: Option<SweepConfig>,
    pub logging: Option<LoggingConfig>,

    /// Directory of the file this config was read from.
    #[serde(skip)]
    pub base_dir: Option<PathBuf>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SweepConfig {
    pub root: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LoggingConfig {
    pub level: Option<String>,
    pub format: Option<String>,
}

impl TomlConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(SweepError::IoError)?;
        let mut config = Self::from_toml_str(&content)?;
        config.base_dir = path.parent().map(Path::to_path_buf);
        Ok(config)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| SweepError::ConfigError {
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// 替換環境變數 (例如 ${DOCS_ROOT})，未設定的保持原樣
    fn substitute_env_vars(content: &str) -> Result<String> {
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| SweepError::ConfigError {
            message: format!("Invalid substitution pattern: {}", e),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    /// 取得掃描根目錄；相對路徑以設定檔所在目錄為基準
    pub fn root(&self) -> Option<PathBuf> {
        let root = self.sweep.as_ref()?.root.as_deref()?;
        let root = PathBuf::from(root);
        match &self.base_dir {
            Some(base) if root.is_relative() => Some(base.join(root)),
            _ => Some(root),
        }
    }

    pub fn log_level(&self) -> Option<&str> {
        self.logging.as_ref()?.level.as_deref()
    }

    pub fn log_format(&self) -> LogFormat {
        match self.logging.as_ref().and_then(|l| l.format.as_deref()) {
            Some("json") => LogFormat::Json,
            _ => LogFormat::Compact,
        }
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        if let Some(root) = self.sweep.as_ref().and_then(|s| s.root.as_deref()) {
            validate_path("sweep.root", root)?;
        }

        if let Some(logging) = &self.logging {
            if let Some(level) = &logging.level {
                validate_non_empty_string("logging.level", level)?;
            }
            if let Some(format) = &logging.format {
                validate_one_of("logging.format", format, &LOG_FORMATS)?;
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_parse_full_config() {
        let toml_content = r#"
[sweep]
root = "/srv/site/docs"

[logging]
level = "debug"
format = "json"
"#;

        let config = TomlConfig::from_toml_str(toml_content).unwrap();

        assert_eq!(config.root(), Some(PathBuf::from("/srv/site/docs")));
        assert_eq!(config.log_level(), Some("debug"));
        assert_eq!(config.log_format(), LogFormat::Json);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_empty_config_uses_defaults() {
        let config = TomlConfig::from_toml_str("").unwrap();

        assert_eq!(config.root(), None);
        assert_eq!(config.log_level(), None);
        assert_eq!(config.log_format(), LogFormat::Compact);
    }

    #[test]
    #[serial]
    fn test_env_var_substitution() {
        std::env::set_var("CLEAN_DOCS_TEST_ROOT", "/tmp/docs-from-env");

        let config = TomlConfig::from_toml_str(
            r#"
[sweep]
root = "${CLEAN_DOCS_TEST_ROOT}"
"#,
        )
        .unwrap();
        assert_eq!(config.root(), Some(PathBuf::from("/tmp/docs-from-env")));

        std::env::remove_var("CLEAN_DOCS_TEST_ROOT");
    }

    #[test]
    #[serial]
    fn test_unknown_env_var_is_left_alone() {
        let config = TomlConfig::from_toml_str(
            r#"
[sweep]
root = "${CLEAN_DOCS_TEST_UNSET_VAR}"
"#,
        )
        .unwrap();
        assert_eq!(
            config.root(),
            Some(PathBuf::from("${CLEAN_DOCS_TEST_UNSET_VAR}"))
        );
    }

    #[test]
    fn test_config_validation() {
        let config = TomlConfig::from_toml_str(
            r#"
[logging]
format = "pretty"
"#,
        )
        .unwrap();
        assert!(config.validate().is_err());

        let config = TomlConfig::from_toml_str(
            r#"
[sweep]
root = ""
"#,
        )
        .unwrap();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_invalid_toml_is_config_error() {
        let err = TomlConfig::from_toml_str("[sweep\nroot = 1").unwrap_err();
        assert!(matches!(err, SweepError::ConfigError { .. }));
    }

    #[test]
    fn test_relative_root_resolves_against_config_dir() {
        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file
            .write_all(b"[sweep]\nroot = \"docs\"\n")
            .unwrap();

        let config = TomlConfig::from_file(temp_file.path()).unwrap();
        let expected = temp_file.path().parent().unwrap().join("docs");
        assert_eq!(config.root(), Some(expected));
    }
}
