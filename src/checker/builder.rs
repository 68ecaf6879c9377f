use super::{InventoryChecker, DEFAULT_COUNT, DEFAULT_TIMEOUT};
use super::helpers::{get_default_client, to_header_map, USER_AGENT_STRING};
use crate::enums::Language;
use crate::error::Error;
use crate::profile::ProfileId;
use std::time::Duration;

/// Builder for constructing an [`InventoryChecker`].
#[derive(Debug, Clone)]
pub struct InventoryCheckerBuilder {
    /// The profile whose inventory is checked.
    pub(crate) profile: ProfileId,
    /// Headers sent with every request.
    pub(crate) headers: Vec<(String, String)>,
    /// User agent for requests. Replaces any `User-Agent` in `headers`.
    pub(crate) user_agent: Option<String>,
    /// The language the page is rendered in.
    pub(crate) language: Language,
    /// The number of items requested per page.
    pub(crate) count: u32,
    /// How long to wait for a response before giving up.
    pub(crate) timeout: Duration,
    /// The community hostname, including the scheme.
    pub(crate) hostname: String,
}

impl InventoryCheckerBuilder {
    /// Creates a new [`InventoryCheckerBuilder`] for a profile. The user agent defaults to a
    /// desktop browser string.
    pub fn new(profile: ProfileId) -> Self {
        Self {
            profile,
            headers: Vec::new(),
            user_agent: Some(USER_AGENT_STRING.into()),
            language: Language::default(),
            count: DEFAULT_COUNT,
            timeout: DEFAULT_TIMEOUT,
            hostname: InventoryChecker::HOSTNAME.into(),
        }
    }
    
    /// The user agent.
    pub fn user_agent<T>(mut self, user_agent: T) -> Self
    where
        T: Into<String>,
    {
        self.user_agent = Some(user_agent.into());
        self
    }
    
    /// Adds a header sent with every request.
    pub fn header<K, V>(mut self, name: K, value: V) -> Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        self.headers.push((name.into(), value.into()));
        self
    }
    
    /// Replaces all headers. Clears the default user agent so a `User-Agent` entry in `headers`
    /// is used as given.
    pub fn headers<I, K, V>(mut self, headers: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        self.headers = headers
            .into_iter()
            .map(|(name, value)| (name.into(), value.into()))
            .collect();
        self.user_agent = None;
        self
    }
    
    /// The language the page is rendered in. Defaults to [`Language::Russian`].
    pub fn language(mut self, language: Language) -> Self {
        self.language = language;
        self
    }
    
    /// The number of items requested per page. Defaults to 1; only the app list is needed.
    pub fn count(mut self, count: u32) -> Self {
        self.count = count;
        self
    }
    
    /// How long to wait for a response. Defaults to 20 seconds.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
    
    /// The community hostname, including the scheme. Defaults to
    /// [`InventoryChecker::HOSTNAME`].
    pub fn hostname<T>(mut self, hostname: T) -> Self
    where
        T: Into<String>,
    {
        self.hostname = hostname.into();
        self
    }
    
    /// Builds the [`InventoryChecker`].
    pub fn build(self) -> Result<InventoryChecker, Error> {
        if self.count == 0 {
            return Err(Error::Parameter("count must be at least 1"));
        }
        
        let headers = to_header_map(self.headers.iter().map(|(name, value)| (name, value)))?;
        let client = get_default_client(
            headers,
            self.user_agent.as_deref(),
            self.timeout,
        )?;
        
        Ok(InventoryChecker {
            profile: self.profile,
            client,
            language: self.language,
            count: self.count,
            hostname: self.hostname.trim_end_matches('/').to_string(),
        })
    }
}
