use std::fmt;
use std::str::FromStr;
use steamid_ng::SteamID;
use crate::error::Error;

/// The lowest 64-bit Steam ID for an individual account.
const INDIVIDUAL_ACCOUNT_BASE: u64 = 76561197960265728;

/// Identifies the owner of a Steam community profile.
#[derive(Debug, Clone, PartialEq)]
pub enum ProfileId {
    /// A custom URL handle, e.g. `tempo_218`. Resolves to `/id/{handle}`.
    Vanity(String),
    /// A 64-bit Steam ID. Resolves to `/profiles/{steamid}`.
    SteamId(SteamID),
}

impl ProfileId {
    /// The path to the profile's inventory page, relative to the community hostname.
    pub fn inventory_path(&self) -> String {
        match self {
            Self::Vanity(handle) => format!("/id/{handle}/inventory/"),
            Self::SteamId(steamid) => format!("/profiles/{}/inventory/", u64::from(*steamid)),
        }
    }
}

impl fmt::Display for ProfileId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Vanity(handle) => write!(f, "{handle}"),
            Self::SteamId(steamid) => write!(f, "{}", u64::from(*steamid)),
        }
    }
}

impl FromStr for ProfileId {
    type Err = Error;
    
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        
        if s.is_empty() {
            return Err(Error::Parameter("Profile identifier cannot be empty"));
        }
        
        match s.parse::<u64>() {
            Ok(sid) if sid >= INDIVIDUAL_ACCOUNT_BASE => Ok(Self::SteamId(SteamID::from(sid))),
            _ => Ok(Self::Vanity(s.to_string())),
        }
    }
}

impl From<SteamID> for ProfileId {
    fn from(steamid: SteamID) -> Self {
        Self::SteamId(steamid)
    }
}
