use serde::Deserialize;
use super::GameEntry;
use crate::error::Error;
use crate::types::{AppContextData, ContextKey};

/// Games found in an inventory, keyed by context key in the order Steam listed them.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct GamesList(Vec<(ContextKey, GameEntry)>);

impl GamesList {
    /// Creates an empty [`GamesList`].
    pub fn new() -> Self {
        Self::default()
    }
    
    /// The number of games.
    pub fn len(&self) -> usize {
        self.0.len()
    }
    
    /// Whether no games were found.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
    
    /// Gets the game for a context key.
    pub fn get(&self, context_key: &str) -> Option<&GameEntry> {
        self.0
            .iter()
            .find(|(key, _)| key == context_key)
            .map(|(_, entry)| entry)
    }
    
    /// Iterates over context keys and games in order.
    pub fn iter(&self) -> impl Iterator<Item = (&ContextKey, &GameEntry)> {
        self.0.iter().map(|(key, entry)| (key, entry))
    }
}

impl IntoIterator for GamesList {
    type Item = (ContextKey, GameEntry);
    type IntoIter = std::vec::IntoIter<(ContextKey, GameEntry)>;
    
    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

/// Collects in order. Keys are not deduplicated.
impl FromIterator<(ContextKey, GameEntry)> for GamesList {
    fn from_iter<I: IntoIterator<Item = (ContextKey, GameEntry)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

/// Reshapes raw `g_rgAppContextData` into a [`GamesList`], one game per top-level key.
/// 
/// Field values are copied as-is and missing fields get defaults. Fails if any value is not an
/// object.
pub fn normalize(raw: &AppContextData) -> Result<GamesList, Error> {
    raw
        .iter()
        .map(|(context_key, game_info)| {
            if !game_info.is_object() {
                return Err(Error::MalformedResponse(format!(
                    "app context {context_key} is not an object",
                )));
            }
            
            let entry = GameEntry::deserialize(game_info)?;
            
            Ok((context_key.clone(), entry))
        })
        .collect()
}
