//! Grid page download using ureq (simple blocking HTTP)

use std::time::Duration;

use tracing::info;

use crate::config::FetchConfig;
use crate::error::GridError;

/// Fetch the page body. One attempt, no retries.
pub fn fetch_html_blocking(config: &FetchConfig) -> Result<String, GridError> {
    let url = url::Url::parse(&config.url)?;

    let agent = ureq::Agent::new_with_config(
        ureq::Agent::config_builder()
            .timeout_global(Some(Duration::from_secs(config.timeout_secs)))
            .user_agent(config.user_agent.as_str())
            .http_status_as_error(false)
            .build(),
    );

    info!(url = %url, "fetching live grid");

    let resp = agent.get(url.as_str()).call().map_err(|e| GridError::Fetch {
        url: url.to_string(),
        message: e.to_string(),
    })?;

    if !resp.status().is_success() {
        return Err(GridError::HttpStatus {
            url: url.to_string(),
            status: resp.status().as_u16(),
        });
    }

    let body = resp
        .into_body()
        .read_to_string()
        .map_err(|e| GridError::Fetch {
            url: url.to_string(),
            message: e.to_string(),
        })?;

    info!(bytes = body.len(), "fetched live grid");
    Ok(body)
}
