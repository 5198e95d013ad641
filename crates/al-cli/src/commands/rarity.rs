use colored::Colorize;
use comfy_table::{ContentArrangement, Table};

use al_core::Rarity;

pub fn run(sum: Option<u32>) -> Result<(), String> {
    if let Some(sum) = sum {
        let tier = Rarity::from_sum(sum);
        println!(
            "  {} {}  {}",
            sum.to_string().bold(),
            "→".dimmed(),
            super::resolve::colorize_rarity(tier)
        );
        println!("  DC {}, {} gp", tier.dc(), tier.base_cost());
        return Ok(());
    }

    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["Tier", "Influence", "DC", "Cost (gp)"]);
    for tier in Rarity::ALL {
        let band = match tier.band() {
            (low, Some(high)) => format!("{low}-{high}"),
            (low, None) => format!("{low}+"),
        };
        table.add_row(vec![
            tier.to_string(),
            band,
            tier.dc().to_string(),
            tier.base_cost().to_string(),
        ]);
    }
    println!("{table}");
    Ok(())
}
