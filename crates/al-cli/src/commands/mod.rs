pub mod brew;
pub mod harvest;
pub mod rarity;
pub mod resolve;

use al_core::Category;
use rand::SeedableRng;
use rand::rngs::StdRng;
use serde::Serialize;

use al_mechanics::CraftConfig;

/// Seeded RNG: the flag wins over the config file.
fn rng(config: &CraftConfig, seed: Option<u64>) -> StdRng {
    let seed = seed.unwrap_or(config.seed);
    tracing::debug!(seed, "seeding rng");
    StdRng::seed_from_u64(seed)
}

/// Resolve the preferred category from a flag or the config file.
///
/// Unknown names are ignored with a warning, so the dominant category is
/// used instead.
fn preferred(config: &CraftConfig, flag: Option<&str>) -> Option<Category> {
    match flag {
        Some(name) => {
            let parsed = Category::parse(name);
            if parsed.is_none() {
                tracing::warn!("unknown category '{name}', using the dominant category");
            }
            parsed
        }
        None => config.preferred,
    }
}

/// Print a value as pretty JSON on stdout.
fn print_json<T: Serialize>(value: &T) -> Result<(), String> {
    let json = serde_json::to_string_pretty(value).map_err(|e| e.to_string())?;
    println!("{json}");
    Ok(())
}

fn plural(n: u32) -> &'static str {
    if n == 1 { "" } else { "s" }
}
