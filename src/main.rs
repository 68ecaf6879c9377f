use std::io;
use steam_inventory_checker::{
    Error,
    GamesList,
    InventoryChecker,
    InventoryCheckerBuilder,
    ProfileId,
    USER_AGENT_STRING,
    enums::Language,
    report::{self, BANNER},
};

const DEFAULT_STEAM_ID: &str = "tempo_218";

fn get_env(key: &str) -> Option<String> {
    std::env::var(key)
        .ok()
        .filter(|value| !value.trim().is_empty())
}

fn get_builder() -> Result<InventoryCheckerBuilder, Error> {
    let steam_id = get_env("STEAM_ID").unwrap_or_else(|| DEFAULT_STEAM_ID.into());
    let user_agent = get_env("STEAM_USER_AGENT").unwrap_or_else(|| USER_AGENT_STRING.into());
    let mut builder = InventoryChecker::builder(steam_id.parse::<ProfileId>()?)
        .user_agent(user_agent);
    
    if let Some(hostname) = get_env("STEAM_HOSTNAME") {
        builder = builder.hostname(hostname);
    }
    
    if let Some(language) = get_env("STEAM_LANGUAGE") {
        match language.parse::<Language>() {
            Ok(language) => builder = builder.language(language),
            Err(error) => log::warn!("Ignoring STEAM_LANGUAGE={language}: {error}"),
        }
    }
    
    Ok(builder)
}

async fn get_games() -> GamesList {
    match get_builder().and_then(InventoryCheckerBuilder::build) {
        Ok(checker) => checker.get_inventory_games().await,
        Err(error) => {
            println!("Exception: {error}");
            GamesList::new()
        },
    }
}

#[tokio::main(flavor = "current_thread")]
async fn main() {
    dotenv::dotenv().ok();
    
    println!("{BANNER}");
    
    let games = get_games().await;
    
    if let Err(error) = report::write_report(&mut io::stdout().lock(), &games) {
        log::warn!("Failed to write report: {error}");
    }
}
