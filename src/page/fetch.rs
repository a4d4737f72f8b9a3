/// Blocking page fetch. One GET per invocation, no retries.
use std::time::Duration;

use reqwest::blocking::Client;

use super::errors::PageError;

/// Fetch a conjugation page and return its body as text.
///
/// # Errors
///
/// Returns `PageError::Http` on transport failure (including timeout) and
/// `PageError::Status` on a non-success HTTP status.
pub fn fetch(url: &str, timeout: Duration) -> Result<String, PageError> {
    let client = Client::builder().timeout(timeout).build()?;
    let response = client.get(url).send()?;

    let status = response.status();
    if !status.is_success() {
        return Err(PageError::Status {
            status: status.as_u16(),
            url: url.to_owned(),
        });
    }

    Ok(response.text()?)
}
