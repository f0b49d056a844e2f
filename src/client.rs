use reqwest::header::CONTENT_TYPE;
use serde::de::DeserializeOwned;

use crate::config::RunConfig;
use crate::error::ApiError;

/// Authenticated GET access to the analytics API.
#[derive(Debug, Clone)]
pub struct ApiClient {
    client: reqwest::Client,
    base_url: String,
    token: String,
}

impl ApiClient {
    pub fn new(config: &RunConfig) -> Result<Self, ApiError> {
        let client = reqwest::Client::builder().build()?;
        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            token: config.token.clone(),
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    pub async fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, &str)],
    ) -> Result<T, ApiError> {
        let response = self
            .client
            .get(self.url(path))
            .bearer_auth(&self.token)
            .header(CONTENT_TYPE, "application/json")
            .query(query)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ApiError::UnexpectedStatus {
                status: status.as_u16(),
                reason: status.canonical_reason().unwrap_or("Unknown").to_string(),
                path: path.to_string(),
                body: body.trim().to_string(),
            });
        }

        let body = response.bytes().await?;
        serde_json::from_slice(&body).map_err(|source| ApiError::Decode {
            path: path.to_string(),
            source,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::Value;
    use wiremock::matchers::{header, method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn client_for(server: &MockServer) -> ApiClient {
        let config = RunConfig::new(
            Some("eyJtest".to_string()),
            "2024-06-01".to_string(),
            "2024-06-01".to_string(),
            true,
            None,
        )
        .unwrap()
        .with_base_url(format!("{}/v1/", server.uri()));
        ApiClient::new(&config).unwrap()
    }

    #[tokio::test]
    async fn sends_bearer_token_and_json_content_type() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/v1/ping"))
            .and(header("authorization", "Bearer eyJtest"))
            .and(header("content-type", "application/json"))
            .and(query_param("a", "b c"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({"ok": true})))
            .expect(1)
            .mount(&server)
            .await;

        let body: Value = client_for(&server)
            .get_json("/ping", &[("a", "b c")])
            .await
            .unwrap();
        assert_eq!(body["ok"], true);
    }

    #[tokio::test]
    async fn non_success_status_is_an_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/v1/account-brands"))
            .respond_with(ResponseTemplate::new(403).set_body_string("token expired\n"))
            .mount(&server)
            .await;

        let err = client_for(&server)
            .get_json::<Value>("account-brands", &[])
            .await
            .unwrap_err();
        match &err {
            ApiError::UnexpectedStatus {
                status,
                reason,
                body,
                ..
            } => {
                assert_eq!(*status, 403);
                assert_eq!(reason, "Forbidden");
                assert_eq!(body, "token expired");
                assert!(err.to_string().ends_with("for account-brands: token expired"));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[tokio::test]
    async fn malformed_body_is_a_decode_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/v1/account-brands"))
            .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
            .mount(&server)
            .await;

        let err = client_for(&server)
            .get_json::<Value>("account-brands", &[])
            .await
            .unwrap_err();
        assert!(matches!(err, ApiError::Decode { .. }));
    }
}
