use std::time::{Duration, Instant};

use encoding_rs::WINDOWS_1252;
use reqwest::{Client, Error as RequestError};
use tracing::{instrument, Level};
use url::Url;

use crate::config::Site;

pub fn make_client() -> Client {
    Client::builder()
        .gzip(true)
        .timeout(Duration::from_secs(20))
        .build()
        .expect("client creation should succeed")
}

/// Downloads the menu page of `site`. Any non-success status is an error.
#[instrument(skip(client, site), fields(site = site.name), level = Level::DEBUG)]
pub async fn fetch_page(client: &Client, site: &Site) -> crate::Result<String> {
    let url = Url::parse(site.url)
        .map_err(|e| crate::Error::Config(format!("bad url for {}: {e}", site.name)))?;
    let start = Instant::now();
    let bytes = fetch_bytes(client, url).await?;
    log::debug!("Got {} bytes of {} in \t {:?}", bytes.len(), site.name, start.elapsed());
    Ok(decode(&bytes))
}

async fn fetch_bytes(client: &Client, url: Url) -> Result<Vec<u8>, RequestError> {
    let response = client.get(url).send().await?.error_for_status()?;
    Ok(response.bytes().await?.to_vec())
}

/// UTF-8 when the body is valid UTF-8, otherwise windows-1252 (what browsers
/// read for a latin-1 label).
///
/// Some of the pages claim latin-1 in their headers while sending UTF-8, so
/// the declared charset is not trusted.
pub fn decode(bytes: &[u8]) -> String {
    match std::str::from_utf8(bytes) {
        Ok(text) => text.to_string(),
        Err(_) => {
            log::debug!("body is not UTF-8, decoding as windows-1252");
            let (text, _, _) = WINDOWS_1252.decode(bytes);
            text.into_owned()
        }
    }
}
