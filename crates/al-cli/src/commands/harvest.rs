use std::path::{Path, PathBuf};

use colored::Colorize;
use comfy_table::{ContentArrangement, Table};

use al_core::{MemoryTableStore, TableStore};
use al_mechanics::{CraftConfig, MechError, harvest, harvest_tally};

pub struct Args {
    pub tables: PathBuf,
    pub table: String,
    pub count: Option<u32>,
    pub drop_rate: Option<f64>,
    pub seed: Option<u64>,
    pub json: bool,
}

pub fn run(config: &CraftConfig, args: Args) -> Result<(), String> {
    let store = MemoryTableStore::load(&args.tables).map_err(|e| e.to_string())?;
    let table = store
        .get(&args.table)
        .ok_or_else(|| MechError::UnknownTable(args.table.clone()).to_string())?;

    let mut rng = super::rng(config, args.seed);
    let run = harvest(table, config, args.count, args.drop_rate, &mut rng)
        .map_err(|e| e.to_string())?;

    if args.json {
        return super::print_json(&run);
    }

    let title = if table.name.is_empty() {
        &table.id
    } else {
        &table.name
    };
    println!(
        "  {} {} {}",
        "Harvest".bold(),
        title,
        format!(
            "({} attempt{}, {}% drop rate)",
            run.attempts,
            super::plural(run.attempts),
            run.drop_rate
        )
        .dimmed()
    );

    if run.rolls.is_empty() {
        println!("  {}", "Nothing found.".dimmed());
        return Ok(());
    }

    let mut out = Table::new();
    out.set_content_arrangement(ContentArrangement::Dynamic);
    out.set_header(vec!["Reagent", "Qty"]);
    for (reference, qty) in harvest_tally(&run.rolls) {
        out.add_row(vec![reference, qty.to_string()]);
    }
    println!("{out}");
    Ok(())
}

pub fn list(path: &Path) -> Result<(), String> {
    let store = MemoryTableStore::load(path).map_err(|e| e.to_string())?;
    if store.is_empty() {
        println!("  {}", "(no tables)".dimmed());
        return Ok(());
    }

    let mut out = Table::new();
    out.set_content_arrangement(ContentArrangement::Dynamic);
    out.set_header(vec!["Id", "Name", "Drop rate", "Slots", "Total weight"]);
    for id in store.ids() {
        if let Some(table) = store.get(&id) {
            out.add_row(vec![
                table.id.clone(),
                table.name.clone(),
                format!("{}%", table.drop_rate),
                table.slots.len().to_string(),
                table.total_weight().to_string(),
            ]);
        }
    }
    println!("{out}");
    Ok(())
}
