use crate::client::ApiClient;
use crate::error::ApiError;
use crate::model::AccountBrand;
use crate::model::FunnelData;
use crate::model::FunnelFilter;

pub async fn list_brands(client: &ApiClient) -> Result<Vec<AccountBrand>, ApiError> {
    log::debug!("Fetching account brands");
    client.get_json("/account-brands", &[]).await
}

/// Returns `None` when the brand has no wave on either `start` or `end`;
/// the bulk endpoint is only hit when both are listed.
pub async fn fetch_funnel_data(
    client: &ApiClient,
    brand: &AccountBrand,
    start: &str,
    end: &str,
) -> Result<Option<FunnelData>, ApiError> {
    let id = brand.account_brand_id.to_string();

    let filter: FunnelFilter = client
        .get_json("/funnel/filters", &[("accountBrandId", id.as_str())])
        .await?;

    if !filter.covers_window(start, end) {
        return Ok(None);
    }

    let data = client
        .get_json(
            &format!("/bulk/funnel/{}", id),
            &[("waveStartDate", start), ("waveEndDate", end)],
        )
        .await?;

    Ok(Some(data))
}
