//! Bulk export of funnel data from the Tracksuit analytics API.
//!
//! Lists every account brand visible to the token, then for each brand whose
//! wave dates include both ends of the requested window downloads the bulk
//! funnel payload and hands it to a [`Sink`].

pub mod client;
pub mod config;
pub mod error;
pub mod funnel;
pub mod gate;
pub mod model;
pub mod sink;

use std::sync::Arc;

pub use client::ApiClient;
pub use config::RunConfig;
pub use error::{ApiError, ConfigError};
pub use funnel::{fetch_funnel_data, list_brands};
pub use model::{AccountBrand, AccountBrandId, FunnelData, FunnelFilter};
pub use sink::Sink;

#[derive(Default, Debug, Clone, PartialEq, Eq)]
pub struct DownloadSummary {
    pub brands: usize,
    pub written: usize,
    pub skipped: usize,
}

enum Outcome {
    Written,
    Skipped,
}

struct BrandWorker {
    client: ApiClient,
    sink: Sink,
    start: String,
    end: String,
}

impl BrandWorker {
    async fn process(&self, brand: AccountBrand) -> Result<Outcome, ApiError> {
        log::info!("Processing {}", brand);

        let result = self.download(&brand).await;
        if let Err(e) = &result {
            log::error!("Failed to download {}: {}", brand, e);
        }
        result
    }

    async fn download(&self, brand: &AccountBrand) -> Result<Outcome, ApiError> {
        match fetch_funnel_data(&self.client, brand, &self.start, &self.end).await? {
            Some(data) => {
                self.sink.write(&brand.account_brand_id, &data).await?;
                Ok(Outcome::Written)
            }
            None => {
                log::warn!("No wave data available for {}", brand);
                Ok(Outcome::Skipped)
            }
        }
    }
}

/// Runs one full export. Every brand is attempted even if some fail; the
/// first failure to complete is returned once all brands have settled.
pub async fn download_all(config: &RunConfig) -> Result<DownloadSummary, ApiError> {
    let client = ApiClient::new(config)?;
    let brands = list_brands(&client).await?;

    log::info!(
        "Downloading {} brand(s) between {}--{}",
        brands.len(),
        config.start,
        config.end
    );

    let mut summary = DownloadSummary {
        brands: brands.len(),
        ..Default::default()
    };

    let worker = Arc::new(BrandWorker {
        client,
        sink: Sink::from_config(config),
        start: config.start.clone(),
        end: config.end.clone(),
    });

    let results = gate::for_each_bounded(brands, config.concurrency, |brand| {
        let worker = worker.clone();
        async move { worker.process(brand).await }
    })
    .await;

    let mut first_error = None;
    for result in results {
        match result {
            Ok(Outcome::Written) => summary.written += 1,
            Ok(Outcome::Skipped) => summary.skipped += 1,
            Err(e) => {
                first_error.get_or_insert(e);
            }
        }
    }

    if let Some(e) = first_error {
        return Err(e);
    }

    log::info!("All data fetched and saved successfully.");
    Ok(summary)
}
