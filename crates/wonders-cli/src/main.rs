//! Wonders ledger demo: loads a catalog and reports what a player can afford.

use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use wonders_core::{ExoticResource, Ledger, Requirement, Resource};

mod config;

use config::Config;

fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info".into()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::from_env();
    let catalog = config.load_catalog()?;
    let wonder = config.select_wonder(&catalog)?;

    info!(
        cards = catalog.cards.len(),
        wonder = %wonder.name,
        "Loaded catalog"
    );

    let mut ledger = Ledger::with_rules("me", wonder, catalog.rules);
    ledger.exotics.extend([
        ExoticResource::new([Resource::Wood, Resource::Brick])?,
        ExoticResource::new([Resource::Wood, Resource::Stone, Resource::Ore, Resource::Brick])?,
        ExoticResource::new([Resource::Wood, Resource::Ore])?,
    ]);

    let queries = [
        Requirement::new()
            .with(Resource::Brick, 2)
            .with(Resource::Ore, 1),
        Requirement::new()
            .with(Resource::Ore, 2)
            .with(Resource::Stone, 1),
    ];
    for requirement in &queries {
        info!(
            requirement = %serde_json::to_string(requirement)?,
            satisfiable = ledger.has_resources(requirement),
            "Requirement"
        );
    }

    for card in &catalog.cards {
        if ledger.can_afford(card) {
            info!(card = %card.name, color = ?card.color, "Affordable");
        } else {
            warn!(card = %card.name, cost = %serde_json::to_string(&card.cost)?, "Unaffordable");
        }
    }

    if let Some(stage) = ledger.wonder.next_stage() {
        info!(
            stage = %stage.name,
            affordable = ledger.has_resources(&stage.cost),
            "Next wonder stage"
        );
    }

    Ok(())
}
