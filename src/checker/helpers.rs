use std::time::Duration;
use reqwest::header::{self, HeaderMap, HeaderName, HeaderValue};
use crate::error::Error;
use crate::types::HttpClient;

/// Desktop browser user agent. Steam rejects requests without a browser-like user agent.
pub const USER_AGENT_STRING: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36";

/// Converts a header mapping into a [`HeaderMap`]. Later entries replace earlier ones with the same
/// name.
pub fn to_header_map<I, K, V>(headers: I) -> Result<HeaderMap, Error>
where
    I: IntoIterator<Item = (K, V)>,
    K: AsRef<str>,
    V: AsRef<str>,
{
    let mut map = HeaderMap::new();
    
    for (name, value) in headers {
        let name = HeaderName::from_bytes(name.as_ref().as_bytes())?;
        let value = HeaderValue::from_str(value.as_ref())?;
        
        map.insert(name, value);
    }
    
    Ok(map)
}

/// Builds the client shared by every request from a checker.
pub fn get_default_client(
    mut headers: HeaderMap,
    user_agent: Option<&str>,
    timeout: Duration,
) -> Result<HttpClient, Error> {
    if let Some(user_agent) = user_agent {
        headers.insert(header::USER_AGENT, HeaderValue::from_str(user_agent)?);
    }
    
    let client = reqwest::ClientBuilder::new()
        .default_headers(headers)
        .timeout(timeout)
        .build()?;
    
    Ok(client)
}
