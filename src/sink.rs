use std::io::Write;
use std::path::PathBuf;

use crate::config::RunConfig;
use crate::error::ApiError;
use crate::model::AccountBrandId;
use crate::model::FunnelData;

/// Where downloaded funnel data ends up.
#[derive(Debug, Clone)]
pub enum Sink {
    /// One pretty-printed file per brand.
    Directory(PathBuf),
    /// One compact JSON line per brand.
    Stdout,
}

pub fn file_name_for(id: &AccountBrandId) -> String {
    format!("funnel_data_{}.json", id)
}

/// Writes `data` as a single compact JSON line.
pub fn write_line(out: &mut impl Write, data: &FunnelData) -> Result<(), ApiError> {
    let line = serde_json::to_string(data)?;
    writeln!(out, "{}", line).map_err(|source| ApiError::Io {
        path: PathBuf::from("<stdout>"),
        source,
    })
}

impl Sink {
    pub fn from_config(config: &RunConfig) -> Self {
        match &config.dest_dir {
            Some(dir) => Sink::Directory(dir.clone()),
            None => Sink::Stdout,
        }
    }

    pub async fn write(&self, id: &AccountBrandId, data: &FunnelData) -> Result<(), ApiError> {
        match self {
            Sink::Directory(dir) => {
                let path = dir.join(file_name_for(id));
                let json = serde_json::to_string_pretty(data)?;
                tokio::fs::write(&path, json)
                    .await
                    .map_err(|source| ApiError::Io { path, source })
            }
            Sink::Stdout => write_line(&mut std::io::stdout().lock(), data),
        }
    }
}
