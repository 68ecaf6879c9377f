//! Lists the games a public Steam profile has inventory items for.
//! 
//! The inventory page embeds its app list as a `g_rgAppContextData` script variable. This crate
//! requests the page, extracts that object, and reshapes it into a [`GamesList`].
//! 
//! ```no_run
//! use steam_inventory_checker::{InventoryChecker, ProfileId};
//! 
//! # async fn run() -> Result<(), steam_inventory_checker::error::Error> {
//! let profile = "tempo_218".parse::<ProfileId>()?;
//! let checker = InventoryChecker::builder(profile).build()?;
//! 
//! for (_context_key, game) in checker.try_get_inventory_games().await?.iter() {
//!     println!("{game}");
//! }
//! # Ok(())
//! # }
//! ```

mod checker;
mod profile;

pub mod enums;
pub mod error;
pub mod extract;
pub mod report;
pub mod response;
pub mod types;

pub use checker::{InventoryChecker, InventoryCheckerBuilder, USER_AGENT_STRING};
pub use error::Error;
pub use profile::ProfileId;
pub use response::{GameEntry, GamesList, normalize};
pub use steamid_ng::SteamID;
