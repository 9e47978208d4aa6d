//! HTTP client for the advice endpoint
//!
//! One request/response exchange per call: the symptom record is POSTed as
//! JSON to `{base_url}/advice` and the plain-text body of a 2xx response is
//! the advice. Every other outcome collapses into [`Error::Submission`].

use std::time::Duration;

use reqwest::header::ACCEPT;
use url::Url;

use aidhf_core::prelude::*;
use aidhf_core::SymptomRecord;

/// Path segment appended to the configured base URL.
pub const ADVICE_ROUTE: &str = "advice";

/// Upper bound on a single advice request.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Build the advice endpoint URL from an API base URL.
///
/// A trailing slash on the base is tolerated; only `http` and `https` are
/// accepted.
pub fn advice_endpoint(base_url: &str) -> Result<Url> {
    let mut url =
        Url::parse(base_url.trim()).map_err(|e| Error::invalid_url(base_url, e.to_string()))?;

    if !matches!(url.scheme(), "http" | "https") {
        let reason = format!("unsupported scheme '{}'", url.scheme());
        return Err(Error::invalid_url(base_url, reason));
    }

    url.path_segments_mut()
        .map_err(|_| Error::invalid_url(base_url, "URL cannot be used as a base"))?
        .pop_if_empty()
        .push(ADVICE_ROUTE);

    Ok(url)
}

/// Stateless client for the remote advice endpoint
#[derive(Debug, Clone)]
pub struct AdviceClient {
    http: reqwest::Client,
    endpoint: Url,
}

impl AdviceClient {
    /// Create a client for the given API base URL with the default timeout.
    pub fn new(base_url: &str) -> Result<Self> {
        Self::with_timeout(base_url, DEFAULT_TIMEOUT)
    }

    /// Create a client with an explicit request timeout.
    pub fn with_timeout(base_url: &str, timeout: Duration) -> Result<Self> {
        let endpoint = advice_endpoint(base_url)?;
        let http = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| Error::config(format!("Failed to build HTTP client: {}", e)))?;

        debug!("Advice client targeting {}", endpoint);
        Ok(Self { http, endpoint })
    }

    /// The fully resolved advice endpoint.
    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }

    /// POST the record and return the advice text.
    pub async fn request_advice(&self, record: &SymptomRecord) -> Result<String> {
        debug!("POST {} {:?}", self.endpoint, record);

        let response = self
            .http
            .post(self.endpoint.clone())
            .header(ACCEPT, "text/plain")
            .json(record)
            .send()
            .await
            .map_err(|e| {
                warn!("Advice request failed: {}", e);
                Error::submission(format!("request failed: {}", e))
            })?;

        let status = response.status();
        if !status.is_success() {
            warn!("Advice endpoint returned {}", status);
            return Err(Error::submission(format!("HTTP {}", status)));
        }

        let advice = response.text().await.map_err(|e| {
            warn!("Failed to read advice body: {}", e);
            Error::submission(format!("failed to read response body: {}", e))
        })?;

        info!("Received advice ({} bytes)", advice.len());
        Ok(advice)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{serve_once, unused_local_addr};
    use aidhf_core::{Grade, YesNo};

    fn scenario_record() -> SymptomRecord {
        SymptomRecord {
            orthopnea: Grade::Grade1,
            cough: Grade::Grade0,
            edema: Grade::Grade2,
            dizziness: Grade::Grade0,
            syncope: Some(YesNo::Yes),
        }
    }

    #[test]
    fn test_endpoint_appends_advice_segment() {
        let url = advice_endpoint("http://localhost:8080/api").unwrap();
        assert_eq!(url.as_str(), "http://localhost:8080/api/advice");
    }

    #[test]
    fn test_endpoint_tolerates_trailing_slash() {
        let url = advice_endpoint("https://example.org/api/").unwrap();
        assert_eq!(url.as_str(), "https://example.org/api/advice");
    }

    #[test]
    fn test_endpoint_on_bare_host() {
        let url = advice_endpoint("http://127.0.0.1:9000").unwrap();
        assert_eq!(url.as_str(), "http://127.0.0.1:9000/advice");
    }

    #[test]
    fn test_endpoint_rejects_unsupported_scheme() {
        let err = advice_endpoint("ftp://example.org/api").unwrap_err();
        assert!(matches!(err, Error::InvalidUrl { .. }));
        assert!(err.to_string().contains("ftp"));
    }

    #[test]
    fn test_endpoint_rejects_garbage() {
        assert!(matches!(
            advice_endpoint("not a url"),
            Err(Error::InvalidUrl { .. })
        ));
    }

    #[tokio::test]
    async fn test_success_returns_body_text() {
        let (addr, request_rx) = serve_once("200 OK", "Seek care within 24h.").await;
        let client = AdviceClient::new(&format!("http://{}/api", addr)).unwrap();

        let advice = client.request_advice(&scenario_record()).await.unwrap();
        assert_eq!(advice, "Seek care within 24h.");

        let request = request_rx.await.unwrap();
        assert!(request.starts_with("POST /api/advice HTTP/1.1"));
        let body = request.split("\r\n\r\n").nth(1).unwrap();
        let json: serde_json::Value = serde_json::from_str(body).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "orthopnea": 1,
                "cough": 0,
                "edema": 2,
                "dizziness": 0,
                "syncope": "yes"
            })
        );
    }

    #[tokio::test]
    async fn test_server_error_is_submission_failure() {
        let (addr, _request_rx) = serve_once("500 Internal Server Error", "").await;
        let client = AdviceClient::new(&format!("http://{}/api", addr)).unwrap();

        let err = client.request_advice(&scenario_record()).await.unwrap_err();
        assert!(matches!(err, Error::Submission { .. }));
        assert!(err.to_string().contains("500"));
    }

    #[tokio::test]
    async fn test_unprocessable_entity_is_submission_failure() {
        let (addr, _request_rx) =
            serve_once("422 Unprocessable Entity", r#"{"syncope":"must not be null"}"#).await;
        let client = AdviceClient::new(&format!("http://{}/api", addr)).unwrap();

        let err = client.request_advice(&scenario_record()).await.unwrap_err();
        assert!(matches!(err, Error::Submission { .. }));
    }

    #[tokio::test]
    async fn test_connection_refused_is_submission_failure() {
        let addr = unused_local_addr().await;
        let client = AdviceClient::new(&format!("http://{}/api", addr)).unwrap();

        let err = client.request_advice(&scenario_record()).await.unwrap_err();
        assert!(matches!(err, Error::Submission { .. }));
    }
}
