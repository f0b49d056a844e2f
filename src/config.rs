use std::path::PathBuf;

use crate::error::ConfigError;

pub const DEFAULT_BASE_URL: &str = "https://dev.api.gotracksuit.com/v1";
pub const DEFAULT_WAVE_DATE: &str = "2024-06-01";
pub const DEFAULT_CONCURRENCY: usize = 10;

/// Everything one export run needs. Built once, then only borrowed.
#[derive(Debug, Clone)]
pub struct RunConfig {
    pub token: String,
    pub base_url: String,
    pub start: String,
    pub end: String,
    pub quiet: bool,
    pub dest_dir: Option<PathBuf>,
    pub concurrency: usize,
}

impl RunConfig {
    pub fn new(
        token: Option<String>,
        start: String,
        end: String,
        quiet: bool,
        dest_dir: Option<PathBuf>,
    ) -> Result<Self, ConfigError> {
        let token = token
            .filter(|t| !t.is_empty())
            .ok_or(ConfigError::MissingToken)?;

        // rough JWT shape: base64url of `{"` always starts with `ey`
        if !token.contains("ey") {
            return Err(ConfigError::MalformedToken);
        }

        if let Some(dir) = &dest_dir {
            if !dir.is_dir() {
                return Err(ConfigError::MissingDestDir(dir.clone()));
            }
        }

        Ok(Self {
            token,
            base_url: DEFAULT_BASE_URL.to_string(),
            start,
            end,
            quiet,
            dest_dir,
            concurrency: DEFAULT_CONCURRENCY,
        })
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn with_concurrency(mut self, concurrency: usize) -> Result<Self, ConfigError> {
        if concurrency == 0 {
            return Err(ConfigError::ZeroConcurrency);
        }
        self.concurrency = concurrency;
        Ok(self)
    }
}
