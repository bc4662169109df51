//! Low-level HTTP transport: `FundingHttp`.
//!
//! Sends signed requests and returns the raw response bytes. Decoding happens
//! in the facade, so this layer stays unaware of the row layouts.

use crate::auth::{AuthenticatedRequest, RequestFactory};
use crate::error::{HttpError, SdkError};
use crate::http::retry::RetryPolicy;
use crate::permission::Permission;

use reqwest::Client;
use serde_json::Value;
use std::time::Duration;

/// Low-level HTTP client for the authenticated REST API.
#[derive(Debug, Clone)]
pub struct FundingHttp {
    base_url: String,
    client: Client,
}

impl FundingHttp {
    pub fn new(base_url: &str) -> Result<Self, HttpError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(30))
            .pool_max_idle_per_host(10)
            .build()?;

        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Sign and send, re-signing on every attempt so each carries a fresh nonce.
    pub async fn execute<F>(
        &self,
        factory: &F,
        permission: Permission,
        path: &str,
        body: Option<Vec<u8>>,
        retry: &RetryPolicy,
    ) -> Result<Vec<u8>, SdkError>
    where
        F: RequestFactory + ?Sized,
    {
        let sign = || match &body {
            Some(bytes) => factory.new_authenticated_request_with_bytes(permission, path, bytes.clone()),
            None => factory.new_authenticated_request(permission, path),
        };

        let Some(config) = retry.config() else {
            return Ok(self.dispatch(&sign()?).await?);
        };

        let mut last_error = None;

        for attempt in 0..=config.max_retries {
            let request = sign()?;
            match self.dispatch(&request).await {
                Ok(bytes) => return Ok(bytes),
                Err(e) => {
                    let should_retry = match &e {
                        HttpError::ServerError { status, .. } => config.is_retryable_status(*status),
                        HttpError::RateLimited => config.is_retryable_status(429),
                        HttpError::Reqwest(re) => re.is_connect() || re.is_timeout() || re.is_request(),
                        _ => false,
                    };

                    if !should_retry {
                        return Err(e.into());
                    }
                    last_error = Some(e);
                    if attempt < config.max_retries {
                        let delay = config.delay_for_attempt(attempt);
                        tracing::debug!(
                            attempt = attempt + 1,
                            max = config.max_retries,
                            delay_ms = delay.as_millis() as u64,
                            "Retrying {}",
                            request.path
                        );
                        futures_timer::Delay::new(delay).await;
                    }
                }
            }
        }

        Err(HttpError::MaxRetriesExceeded {
            attempts: config.max_retries + 1,
            last_error: last_error
                .map(|e| e.to_string())
                .unwrap_or_else(|| "unknown".to_string()),
        }
        .into())
    }

    /// One POST of an already-signed request.
    pub async fn dispatch(&self, request: &AuthenticatedRequest) -> Result<Vec<u8>, HttpError> {
        let url = format!("{}/{}", self.base_url, request.path);
        tracing::debug!(
            permission = %request.permission,
            nonce = request.nonce,
            "POST {}",
            request.path
        );

        let mut req = self.client.post(&url).body(request.body.clone());
        for (name, value) in &request.headers {
            req = req.header(*name, value);
        }

        let resp = req.send().await?;
        let status = resp.status();

        if status.is_success() {
            return Ok(resp.bytes().await?.to_vec());
        }

        let status_code = status.as_u16();
        let body_text = resp.text().await.unwrap_or_default();
        let err = map_status(status_code, body_text);
        tracing::warn!(status = status_code, path = %request.path, "{}", err);
        Err(err)
    }
}

fn map_status(status: u16, body: String) -> HttpError {
    match status {
        401 | 403 => HttpError::Unauthorized(body),
        404 => HttpError::NotFound(body),
        429 => HttpError::RateLimited,
        _ => match venue_error(&body) {
            Some((code, message)) => HttpError::Venue { code, message },
            None if (400..500).contains(&status) => HttpError::BadRequest(body),
            None => HttpError::ServerError { status, body },
        },
    }
}

/// `["error", CODE, "message"]`
pub(crate) fn venue_error(body: &str) -> Option<(i64, String)> {
    let value: Value = serde_json::from_str(body).ok()?;
    match value.as_array()?.as_slice() {
        [tag, code, message, ..] if tag.as_str() == Some("error") => {
            Some((code.as_i64()?, message.as_str().unwrap_or_default().to_string()))
        }
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_venue_error_parsing() {
        assert_eq!(
            venue_error(r#"["error",10100,"apikey: invalid"]"#),
            Some((10100, "apikey: invalid".to_string()))
        );
        assert_eq!(venue_error(r#"["error","x","y"]"#), None);
        assert_eq!(venue_error(r#"{"error":"nope"}"#), None);
        assert_eq!(venue_error("not json"), None);
    }

    #[test]
    fn test_status_mapping() {
        assert!(matches!(map_status(401, String::new()), HttpError::Unauthorized(_)));
        assert!(matches!(map_status(403, String::new()), HttpError::Unauthorized(_)));
        assert!(matches!(map_status(404, String::new()), HttpError::NotFound(_)));
        assert!(matches!(map_status(429, String::new()), HttpError::RateLimited));
        assert!(matches!(
            map_status(400, r#"["error",10020,"amount: invalid"]"#.to_string()),
            HttpError::Venue { code: 10020, .. }
        ));
        assert!(matches!(map_status(422, "bad".to_string()), HttpError::BadRequest(_)));
        assert!(matches!(
            map_status(503, String::new()),
            HttpError::ServerError { status: 503, .. }
        ));
    }

    #[test]
    fn test_venue_error_on_server_status() {
        match map_status(500, r#"["error",10001,"Invalid offer"]"#.to_string()) {
            HttpError::Venue { code, message } => {
                assert_eq!(code, 10001);
                assert_eq!(message, "Invalid offer");
            }
            other => panic!("unexpected error: {other:?}"),
        }
        assert!(matches!(
            map_status(502, "<html>bad gateway</html>".to_string()),
            HttpError::ServerError { status: 502, .. }
        ));
    }

    #[test]
    fn test_base_url_trailing_slash_trimmed() {
        let http = FundingHttp::new("http://localhost:1234/v2/").unwrap();
        assert_eq!(http.base_url(), "http://localhost:1234/v2");
    }
}
