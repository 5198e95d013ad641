use std::path::PathBuf;

use colored::Colorize;

use al_core::ReagentCatalog;
use al_mechanics::{CheckSource, CraftConfig, SkillCheck, brew, find_reagents};

pub struct Args {
    pub reagents: PathBuf,
    pub ids: Vec<String>,
    pub check: Option<i32>,
    pub modifier: i32,
    pub prefer: Option<String>,
    pub seed: Option<u64>,
    pub json: bool,
}

pub fn run(config: &CraftConfig, args: Args) -> Result<(), String> {
    let catalog = ReagentCatalog::load(&args.reagents).map_err(|e| e.to_string())?;
    let reagents = find_reagents(&catalog, &args.ids).map_err(|e| e.to_string())?;

    let preferred = super::preferred(config, args.prefer.as_deref());
    let mut rng = super::rng(config, args.seed);
    let check = match args.check {
        Some(total) => CheckSource::Total(total),
        None => CheckSource::Roll(SkillCheck::new(args.modifier)),
    };

    let result = brew(&reagents, check, preferred, &mut rng).map_err(|e| e.to_string())?;

    if args.json {
        return super::print_json(&result);
    }

    let names: Vec<&str> = reagents.iter().map(|r| r.name.as_str()).collect();
    println!("  {} {}", "Reagents".bold(), names.join(", "));
    println!("  {} {}", "Influence".bold(), result.sums.to_string().dimmed());
    match result.check {
        Some(roll) => println!(
            "  {} {roll} vs DC {} (margin {:+})",
            "Check".bold(),
            result.dc,
            result.outcome.margin
        ),
        None => println!(
            "  {} {} vs DC {} (margin {:+})",
            "Check".bold(),
            result.check_total,
            result.dc,
            result.outcome.margin
        ),
    }
    super::resolve::print_outcome(&result.outcome);
    println!(
        "  {} {} x{}",
        "Brewed".green().bold(),
        result.item_name,
        result.outcome.quantity
    );
    Ok(())
}
