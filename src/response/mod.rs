//! Models for data scraped from inventory pages.

mod game_entry;
mod games_list;

pub use game_entry::GameEntry;
pub use games_list::{GamesList, normalize};
