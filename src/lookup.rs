use serde::Deserialize;

/// Base of the iTunes lookup endpoint; the query parameter is appended raw.
const LOOKUP_ENDPOINT: &str = "https://itunes.apple.com/lookup?";

/// The root structure of a lookup API response.
#[derive(Debug, Deserialize)]
struct LookupResponse {
    /// Number of matches found; the API omits it for some error documents.
    #[serde(rename = "resultCount", default)]
    result_count: i64,
    /// Per-app metadata entries, one object per match.
    #[serde(default)]
    results: Vec<LookupEntry>,
}

#[derive(Debug, Deserialize)]
struct LookupEntry {
    #[serde(rename = "bundleId")]
    bundle_id: Option<String>,
}

/// Builds the lookup URL for the given app identifier.
///
/// An all-digits identifier is a numeric store id and queries `id=`; anything
/// else is treated as a bundle identifier and queries `bundleId=`. Returns
/// `None` for an empty identifier. The value is concatenated without
/// percent-encoding, matching what the API accepts for both identifier kinds.
pub fn lookup_url(app_id: &str) -> Option<String> {
    if app_id.is_empty() {
        return None;
    }

    let parameter = if app_id.bytes().all(|b| b.is_ascii_digit()) {
        "id"
    } else {
        "bundleId"
    };
    Some(format!("{}{}={}", LOOKUP_ENDPOINT, parameter, app_id))
}

/// Extracts the bundle id from a raw lookup response body.
///
/// Returns `None` for empty input, malformed JSON, a `resultCount` below 1,
/// or a first entry without a `bundleId` field. Only the parse failure is
/// logged; a well-formed document with no data is a normal outcome.
pub fn bundle_id_from_json(body: &str) -> Option<String> {
    if body.is_empty() {
        return None;
    }

    let response: LookupResponse = match serde_json::from_str(body) {
        Ok(response) => response,
        Err(err) => {
            tracing::error!("failed to parse lookup response: {err}");
            return None;
        }
    };

    if response.result_count < 1 {
        return None;
    }
    response.results.into_iter().next()?.bundle_id
}

/// Resolves an app identifier through an injected fetch step.
///
/// Chains builder, fetcher, and extractor, short-circuiting to `None` at the
/// first absent result. Tests plug in stub closures here; production code
/// goes through [`resolve`].
pub fn resolve_with<F>(app_id: &str, fetch: F) -> Option<String>
where
    F: FnOnce(&str) -> Option<String>,
{
    let url = lookup_url(app_id)?;
    let body = fetch(&url)?;
    bundle_id_from_json(&body)
}

/// Resolves an app identifier against the live lookup API.
///
/// Never returns an error: every failure along the way is logged and observed
/// as `None`.
pub fn resolve(app_id: &str) -> Option<String> {
    resolve_with(app_id, crate::http::fetch_body)
}
