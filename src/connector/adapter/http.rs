//! Shared HTTP plumbing for the provider adapters.

use reqwest::{Response, StatusCode};

use crate::domain::LookupError;

/// Maps a provider response onto the error taxonomy and returns the body of
/// successful responses.
///
/// 401/403 → [`LookupError::Auth`], 429 → [`LookupError::RateLimited`],
/// 404 → [`LookupError::NotFound`], any other non-2xx → [`LookupError::Network`].
pub(crate) async fn read_success_body(response: Response) -> Result<String, LookupError> {
    let status = response.status();

    if status.is_success() {
        return response
            .text()
            .await
            .map_err(|e| LookupError::network(format!("failed to read response body: {e}")));
    }

    let body = response.text().await.unwrap_or_default();
    Err(match status {
        StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => {
            LookupError::auth(format!("provider returned {status}: {body}"))
        }
        StatusCode::TOO_MANY_REQUESTS => {
            LookupError::rate_limited(format!("provider returned {status}: {body}"))
        }
        StatusCode::NOT_FOUND => LookupError::not_found(format!("provider returned {status}: {body}")),
        _ => LookupError::network(format!("provider returned {status}: {body}")),
    })
}

/// Maps reqwest transport failures (DNS, connect, timeout) onto
/// [`LookupError::Network`].
pub(crate) fn transport_error(e: reqwest::Error) -> LookupError {
    LookupError::network(format!("request failed: {e}"))
}
