//! Fetches inventory pages and lists the games in them.

mod builder;
mod helpers;

pub use builder::InventoryCheckerBuilder;
pub use helpers::USER_AGENT_STRING;

use std::time::Duration;
use reqwest::StatusCode;
use serde::Serialize;
use crate::enums::Language;
use crate::error::Error;
use crate::extract::{extract_json_from_html, APP_CONTEXT_DATA_PATTERN};
use crate::profile::ProfileId;
use crate::response::{normalize, GamesList};
use crate::types::HttpClient;
use helpers::{get_default_client, to_header_map};

const DEFAULT_COUNT: u32 = 1;
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(20);

/// Checks which games a public Steam profile has inventory items for.
/// 
/// Holds one client, and its headers, for the lifetime of the checker.
#[derive(Debug, Clone)]
pub struct InventoryChecker {
    profile: ProfileId,
    client: HttpClient,
    language: Language,
    count: u32,
    hostname: String,
}

impl InventoryChecker {
    /// The hostname for community pages.
    pub const HOSTNAME: &'static str = "https://steamcommunity.com";
    
    /// Creates a new [`InventoryChecker`] sending exactly `headers` with each request. Include a
    /// `User-Agent`; Steam rejects requests without one.
    pub fn new<I, K, V>(profile: ProfileId, headers: I) -> Result<Self, Error>
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: AsRef<str>,
    {
        let client = get_default_client(to_header_map(headers)?, None, DEFAULT_TIMEOUT)?;
        
        Ok(Self {
            profile,
            client,
            language: Language::default(),
            count: DEFAULT_COUNT,
            hostname: Self::HOSTNAME.into(),
        })
    }
    
    /// Creates a new [`InventoryCheckerBuilder`].
    pub fn builder(profile: ProfileId) -> InventoryCheckerBuilder {
        InventoryCheckerBuilder::new(profile)
    }
    
    /// The profile whose inventory is checked.
    pub fn profile(&self) -> &ProfileId {
        &self.profile
    }
    
    /// The URL of the inventory page, without query parameters.
    pub fn inventory_url(&self) -> String {
        format!("{}{}", self.hostname, self.profile.inventory_path())
    }
    
    /// Requests the inventory page. Any status code is returned alongside the body; only
    /// transport failures are errors.
    pub async fn fetch(&self) -> Result<(String, StatusCode), Error> {
        #[derive(Serialize)]
        struct Query<'a> {
            l: &'a str,
            count: u32,
        }
        
        let uri = self.inventory_url();
        
        log::debug!("GET {uri}");
        
        let response = self.client.get(&uri)
            .query(&Query {
                l: self.language.community_code(),
                count: self.count,
            })
            .send()
            .await?;
        let status = response.status();
        
        log::debug!("{uri} responded with {status}");
        
        let body = response.text().await?;
        
        Ok((body, status))
    }
    
    /// Gets the games in the inventory.
    /// 
    /// Fails on a transport error, a status other than 200, or an app entry that is not an
    /// object. A page without `g_rgAppContextData`, or with data that cannot be decoded, gives an
    /// empty list.
    pub async fn try_get_inventory_games(&self) -> Result<GamesList, Error> {
        let (body, status) = self.fetch().await?;
        
        if status != StatusCode::OK {
            return Err(Error::Http(status));
        }
        
        let app_context_data = extract_json_from_html(&body, APP_CONTEXT_DATA_PATTERN);
        
        normalize(&app_context_data)
    }
    
    /// Gets the games in the inventory. Every failure prints a diagnostic and gives an empty
    /// list, so an empty result may mean either no games or a failed check. Use
    /// [`InventoryChecker::try_get_inventory_games`] to tell them apart.
    pub async fn get_inventory_games(&self) -> GamesList {
        match self.try_get_inventory_games().await {
            Ok(games) => games,
            Err(error) => {
                log::warn!("Checking inventory for {} failed: {error}", self.profile);
                
                match error {
                    Error::Http(status) => println!("HTTP Error: {}", status.as_u16()),
                    Error::Network(error) => println!("Network error: {error}"),
                    error => println!("Exception: {error}"),
                }
                
                GamesList::new()
            },
        }
    }
}
