use anyhow::Result;
use std::io::Read;

/// Fetches the body of the given URL with a blocking GET.
///
/// Returns the body with line breaks stripped out, so the extractor always
/// sees one contiguous document. Any failure (malformed URL, connection or
/// read error, non-success status) is logged and observed as `None`.
pub fn fetch_body(url: &str) -> Option<String> {
    match get_text(url) {
        Ok(text) => Some(text),
        Err(err) => {
            tracing::error!("lookup request failed: {err:#}");
            None
        }
    }
}

fn get_text(url: &str) -> Result<String> {
    let client = reqwest::blocking::Client::builder().build()?;
    let mut response = client.get(url).send()?;
    if !response.status().is_success() {
        anyhow::bail!("Failed to fetch {}: {}", url, response.status());
    }

    let mut text = String::new();
    response.read_to_string(&mut text)?;
    Ok(text.lines().filter(|line| !line.is_empty()).collect())
}
