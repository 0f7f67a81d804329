// Fri Oct 16 2026 - Alex

use crate::layout::Capabilities;
use crate::reference::SUITES;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub suites: Vec<String>,
    pub type_filter: Option<String>,
    pub check_type_alignment: bool,
    pub check_field_alignment: bool,
    pub cross_check: bool,
    pub parallel: bool,
    pub max_threads: usize,
    pub report_success: bool,
    pub use_color: bool,
    pub text_report: Option<PathBuf>,
    pub markdown_report: Option<PathBuf>,
    pub json_report: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            suites: SUITES.iter().map(|s| s.to_string()).collect(),
            type_filter: None,
            check_type_alignment: true,
            check_field_alignment: true,
            cross_check: true,
            parallel: false,
            max_threads: num_cpus::get(),
            report_success: false,
            use_color: true,
            text_report: None,
            markdown_report: None,
            json_report: None,
        }
    }
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_suites(mut self, suites: Vec<String>) -> Self {
        self.suites = suites;
        self
    }

    pub fn with_type_filter(mut self, filter: String) -> Self {
        self.type_filter = Some(filter);
        self
    }

    pub fn with_parallel(mut self, threads: usize) -> Self {
        self.parallel = true;
        self.max_threads = threads;
        self
    }

    pub fn with_report_success(mut self, report_success: bool) -> Self {
        self.report_success = report_success;
        self
    }

    pub fn with_color(mut self, use_color: bool) -> Self {
        self.use_color = use_color;
        self
    }

    pub fn with_alignment_checks(mut self, type_alignment: bool, field_alignment: bool) -> Self {
        self.check_type_alignment = type_alignment;
        self.check_field_alignment = field_alignment;
        self
    }

    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();

        if !path.exists() {
            return Err(ConfigError::NotFound(path.to_path_buf()));
        }

        let contents = fs::read_to_string(path)?;
        let ext = path.extension().and_then(|e| e.to_str()).unwrap_or("");

        let config: Config = match ext {
            "json" => serde_json::from_str(&contents)?,
            _ => return Err(ConfigError::UnsupportedFormat(ext.to_string())),
        };

        config.validate()?;
        log::debug!("Loaded config from {}", path.display());
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.suites.is_empty() {
            return Err(ConfigError::Validation("at least one suite must be selected".to_string()));
        }
        if let Some(unknown) = self.suites.iter().find(|s| !SUITES.contains(&s.as_str())) {
            return Err(ConfigError::Validation(format!("unknown suite: {}", unknown)));
        }
        if self.max_threads == 0 {
            return Err(ConfigError::Validation("max_threads must be greater than 0".to_string()));
        }
        self.type_filter_regex()?;
        Ok(())
    }

    pub fn type_filter_regex(&self) -> Result<Option<Regex>, ConfigError> {
        self.type_filter
            .as_deref()
            .map(Regex::new)
            .transpose()
            .map_err(ConfigError::from)
    }

    pub fn capabilities(&self) -> Capabilities {
        let mut capabilities = Capabilities::empty();
        capabilities.set(Capabilities::TYPE_ALIGNMENT, self.check_type_alignment);
        capabilities.set(Capabilities::FIELD_ALIGNMENT, self.check_field_alignment);
        capabilities
    }
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Config file not found: {0:?}")]
    NotFound(PathBuf),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Parse error: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("Unsupported format: {0}")]
    UnsupportedFormat(String),
    #[error("Validation error: {0}")]
    Validation(String),
    #[error("Invalid type filter: {0}")]
    Filter(#[from] regex::Error),
}
