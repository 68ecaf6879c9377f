use std::fmt;
use serde::Deserialize;
use serde_json::Value;

fn empty_string() -> Value {
    Value::String(String::new())
}

fn zero() -> Value {
    Value::from(0)
}

/// Writes a string without quotes and any other JSON value as JSON text.
fn write_field(f: &mut fmt::Formatter<'_>, value: &Value) -> fmt::Result {
    match value.as_str() {
        Some(s) => write!(f, "{s}"),
        None => write!(f, "{value}"),
    }
}

/// A game (or app) with items in an inventory.
/// 
/// Values are kept exactly as Steam sent them. Only a missing key falls back to a default: `""`
/// for `appid` and `name`, `0` for `asset_count`.
#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct GameEntry {
    /// The app ID. Usually a number, sometimes a string.
    #[serde(default = "empty_string")]
    pub appid: Value,
    /// The display name of the app, localized to the requested language.
    #[serde(default = "empty_string")]
    pub name: Value,
    /// The number of items the user owns for this app.
    #[serde(default = "zero")]
    pub asset_count: Value,
}

impl Default for GameEntry {
    fn default() -> Self {
        Self {
            appid: empty_string(),
            name: empty_string(),
            asset_count: zero(),
        }
    }
}

impl fmt::Display for GameEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_field(f, &self.name)?;
        write!(f, " (AppID: ")?;
        write_field(f, &self.appid)?;
        write!(f, ") - ")?;
        write_field(f, &self.asset_count)?;
        write!(f, " items")
    }
}
