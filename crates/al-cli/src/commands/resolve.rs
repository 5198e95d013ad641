use colored::{ColoredString, Colorize};

use al_core::{IpSums, Rarity};
use al_mechanics::{CraftConfig, Outcome, resolve_outcome};

pub struct Args {
    pub sums: IpSums,
    pub check: i32,
    pub dc: i32,
    pub prefer: Option<String>,
    pub seed: Option<u64>,
    pub json: bool,
}

pub fn run(config: &CraftConfig, args: Args) -> Result<(), String> {
    let preferred = super::preferred(config, args.prefer.as_deref());
    let mut rng = super::rng(config, args.seed);

    let outcome = resolve_outcome(args.sums, args.check, args.dc, preferred, &mut rng);

    if args.json {
        return super::print_json(&outcome);
    }

    println!("  {} {}", "Influence".bold(), args.sums.to_string().dimmed());
    println!(
        "  {} {} vs DC {} (margin {:+})",
        "Check".bold(),
        args.check,
        args.dc,
        outcome.margin
    );
    print_outcome(&outcome);
    Ok(())
}

/// Print the resolved part of a craft.
pub fn print_outcome(outcome: &Outcome) {
    if let Some(reduction) = outcome.reduction {
        println!(
            "  {} -{reduction} {} ({} → {})",
            "Reduced".red(),
            outcome.selected,
            outcome.original_sum,
            outcome.final_sum
        );
    }
    println!(
        "  {} {} {}, {} item{}",
        "Result".bold(),
        colorize_rarity(outcome.rarity),
        outcome.category,
        outcome.quantity,
        super::plural(outcome.quantity)
    );
    println!("  {} {} gp", "Cost".bold(), outcome.cost());
}

pub fn colorize_rarity(rarity: Rarity) -> ColoredString {
    let label = rarity.to_string();
    match rarity {
        Rarity::Common => label.white(),
        Rarity::Uncommon => label.green(),
        Rarity::Rare => label.blue(),
        Rarity::VeryRare => label.magenta(),
        Rarity::Legendary => label.yellow().bold(),
    }
}
