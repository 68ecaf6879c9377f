//! Pulls JSON embedded in inline scripts out of community pages.
//!
//! Inventory pages are not built for programmatic access. A missing match is expected (an empty
//! inventory, or the page layout changed) and is not treated as an error.

use lazy_regex::RegexBuilder;
use crate::error::Error;
use crate::types::AppContextData;

/// Matches the `g_rgAppContextData` assignment on an inventory page. The object is captured
/// non-greedily up to the first `};`, so a nested `};` inside the object truncates the capture.
pub const APP_CONTEXT_DATA_PATTERN: &str = r"var g_rgAppContextData = (\{.*?\});";

/// Searches `html` for `pattern` and parses its first capture group as a JSON object. `.`
/// matches newlines so objects spanning several lines are captured whole.
///
/// Returns `Ok(None)` when the pattern does not match.
pub fn try_extract_json_from_html(
    html: &str,
    pattern: &str,
) -> Result<Option<AppContextData>, Error> {
    let regex = RegexBuilder::new(pattern)
        .dot_matches_new_line(true)
        .build()?;
    
    if regex.captures_len() < 2 {
        return Err(Error::Pattern(format!("{pattern} has no capture group")));
    }
    
    let json = match regex.captures(html).and_then(|captures| captures.get(1)) {
        Some(json) => json.as_str(),
        None => return Ok(None),
    };
    let data = match serde_json::from_str::<serde_json::Value>(json)? {
        serde_json::Value::Object(data) => data,
        other => return Err(Error::MalformedResponse(format!(
            "expected an object, got {}",
            json_type_name(&other),
        ))),
    };
    
    Ok(Some(data))
}

fn json_type_name(value: &serde_json::Value) -> &'static str {
    match value {
        serde_json::Value::Null => "null",
        serde_json::Value::Bool(_) => "a boolean",
        serde_json::Value::Number(_) => "a number",
        serde_json::Value::String(_) => "a string",
        serde_json::Value::Array(_) => "an array",
        serde_json::Value::Object(_) => "an object",
    }
}

/// Same as [`try_extract_json_from_html`] but every failure resolves to an empty map. Decode
/// failures print a diagnostic; a missing match is silent.
pub fn extract_json_from_html(
    html: &str,
    pattern: &str,
) -> AppContextData {
    match try_extract_json_from_html(html, pattern) {
        Ok(Some(data)) => data,
        Ok(None) => {
            log::debug!("No match for {pattern}");
            AppContextData::new()
        },
        Err(Error::Parse(error)) => {
            log::warn!("Captured text is not valid JSON: {error}");
            println!("JSON decode error: {error}");
            AppContextData::new()
        },
        Err(error) => {
            log::warn!("{error}");
            println!("Exception: {error}");
            AppContextData::new()
        },
    }
}
