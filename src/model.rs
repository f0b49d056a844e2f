use std::fmt;

use serde::Deserialize;
use serde::Serialize;

/// Brand ids come back as integers from some environments and strings from
/// others; either way they are echoed back into URLs untouched.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AccountBrandId {
    Number(i64),
    Text(String),
}

impl fmt::Display for AccountBrandId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AccountBrandId::Number(n) => write!(f, "{}", n),
            AccountBrandId::Text(s) => f.write_str(s),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccountBrand {
    pub account_brand_id: AccountBrandId,
    pub brand_name: String,
}

impl fmt::Display for AccountBrand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.brand_name, self.account_brand_id)
    }
}

#[derive(Default, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FunnelFilter {
    pub wave_dates: Vec<String>,
}

impl FunnelFilter {
    /// Both bounds must be listed verbatim; no date arithmetic.
    pub fn covers_window(&self, start: &str, end: &str) -> bool {
        self.wave_dates.iter().any(|d| d == start) && self.wave_dates.iter().any(|d| d == end)
    }
}

/// Bulk funnel payload, passed through without interpretation.
pub type FunnelData = serde_json::Value;
