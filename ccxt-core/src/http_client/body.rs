use crate::error::{Error, NetworkError, Result, excerpt};
use futures_util::StreamExt;
use reqwest::{Response, StatusCode};
use serde_json::Value;
use tracing::{debug, warn};

use super::client::HttpClient;

const PREVIEW_CHARS: usize = 200;

impl HttpClient {
    pub(crate) async fn read_json(&self, response: Response) -> Result<Value> {
        let status = response.status();
        let body = self.read_body(response).await?;

        if self.config().verbose {
            let text = String::from_utf8_lossy(&body);
            let preview: String = text.chars().take(PREVIEW_CHARS).collect();
            debug!(status = status.as_u16(), bytes = body.len(), body = %preview, "HTTP response");
        }

        if !status.is_success() {
            let err = status_error(status, &String::from_utf8_lossy(&body));
            warn!(status = status.as_u16(), error = %err, "HTTP error response");
            return Err(err);
        }

        Ok(serde_json::from_slice(&body)?)
    }

    /// Collects the body, refusing anything above `max_response_size`.
    async fn read_body(&self, response: Response) -> Result<Vec<u8>> {
        let limit = self.config().max_response_size;
        let too_large = |size: usize| {
            warn!(size, limit, "Response exceeds size limit");
            Error::from(NetworkError::ResponseTooLarge { size, limit })
        };

        if let Some(declared) = response.content_length() {
            let declared = usize::try_from(declared).unwrap_or(usize::MAX);
            if declared > limit {
                return Err(too_large(declared));
            }
        }

        let mut body = Vec::new();
        let mut chunks = response.bytes_stream();
        while let Some(chunk) = chunks.next().await {
            let chunk = chunk?;
            let size = body.len().saturating_add(chunk.len());
            if size > limit {
                return Err(too_large(size));
            }
            body.extend_from_slice(&chunk);
        }
        Ok(body)
    }
}

fn status_error(status: StatusCode, body: &str) -> Error {
    match status {
        StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => {
            Error::authentication(format!("HTTP {}: {}", status.as_u16(), excerpt(body)))
        }
        StatusCode::BAD_REQUEST => Error::invalid_request(excerpt(body)),
        StatusCode::REQUEST_TIMEOUT | StatusCode::GATEWAY_TIMEOUT => NetworkError::Timeout.into(),
        s if s.is_server_error() => Error::exchange(s.as_u16().to_string(), excerpt(body)),
        _ => NetworkError::RequestFailed {
            status: status.as_u16(),
            message: excerpt(body),
        }
        .into(),
    }
}
