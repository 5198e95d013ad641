//! Weighted table rolls for harvesting.
//!
//! Each attempt first checks the drop rate; only attempts that pass pick a
//! slot, with probability proportional to the slot's weight.

use al_core::{HarvestTable, WeightedSlot};
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::config::CraftConfig;
use crate::error::{MechError, MechResult};

/// Reject drop rates that are not a finite percentage in `0..=100`.
pub fn check_drop_rate(drop_rate_percent: f64) -> MechResult<()> {
    if !drop_rate_percent.is_finite() || !(0.0..=100.0).contains(&drop_rate_percent) {
        return Err(MechError::InvalidArgument(format!(
            "drop rate must be between 0 and 100, got {drop_rate_percent}"
        )));
    }
    Ok(())
}

/// The result of rolling a harvest table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HarvestRun {
    /// Id of the table that was rolled.
    pub table: String,
    /// Number of attempts made.
    pub attempts: u32,
    /// Drop rate the attempts were rolled with, in percent.
    pub drop_rate: f64,
    /// References hit, in roll order.
    pub rolls: Vec<String>,
}

/// Roll `count` attempts against a set of weighted slots.
///
/// Returns the references of the slots hit, in roll order and including
/// repeats. Slots with a blank reference never roll. `drop_rate_percent`
/// must lie in `0..=100`.
pub fn roll_from_table<R: Rng + ?Sized>(
    slots: &[WeightedSlot],
    count: u32,
    drop_rate_percent: f64,
    rng: &mut R,
) -> MechResult<Vec<String>> {
    check_drop_rate(drop_rate_percent)?;

    let valid: Vec<&WeightedSlot> = slots.iter().filter(|s| s.is_valid()).collect();
    let total_weight: u64 = valid.iter().map(|s| u64::from(s.effective_weight())).sum();
    if total_weight == 0 {
        tracing::debug!(count, "no valid slots to roll");
        return Ok(Vec::new());
    }

    let mut results = Vec::new();
    for attempt in 0..count {
        let chance: f64 = rng.random_range(0.0..100.0);
        if chance >= drop_rate_percent {
            tracing::trace!(attempt, chance, "no drop");
            continue;
        }

        let pick = rng.random_range(0..total_weight);
        let mut cumulative = 0u64;
        for slot in &valid {
            cumulative += u64::from(slot.effective_weight());
            if cumulative > pick {
                tracing::trace!(attempt, pick, reference = %slot.reference, "drop");
                results.push(slot.reference.clone());
                break;
            }
        }
    }

    tracing::debug!(count, drops = results.len(), drop_rate_percent, "table rolled");
    Ok(results)
}

/// Roll a harvest table.
///
/// Explicit `count` and `drop_rate` arguments win over the config, and the
/// config's drop rate wins over the table's own.
pub fn harvest<R: Rng + ?Sized>(
    table: &HarvestTable,
    config: &CraftConfig,
    count: Option<u32>,
    drop_rate: Option<f64>,
    rng: &mut R,
) -> MechResult<HarvestRun> {
    let attempts = count.unwrap_or(config.harvest_count);
    let drop_rate = drop_rate.or(config.drop_rate).unwrap_or(table.drop_rate);
    tracing::debug!(table = %table.id, attempts, drop_rate, "harvesting");
    let rolls = roll_from_table(&table.slots, attempts, drop_rate, rng)?;
    Ok(HarvestRun {
        table: table.id.clone(),
        attempts,
        drop_rate,
        rolls,
    })
}

/// Collapse a roll sequence into `(reference, quantity)` pairs, keeping the
/// order in which each reference first appeared.
pub fn harvest_tally(results: &[String]) -> Vec<(String, u32)> {
    let mut tally: Vec<(String, u32)> = Vec::new();
    for reference in results {
        match tally.iter_mut().find(|(r, _)| r == reference) {
            Some((_, n)) => *n += 1,
            None => tally.push((reference.clone(), 1)),
        }
    }
    tally
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn rng() -> StdRng {
        StdRng::seed_from_u64(42)
    }

    #[test]
    fn empty_slots_yield_nothing() {
        let results = roll_from_table(&[], 5, 100.0, &mut rng()).unwrap();
        assert!(results.is_empty());
    }

    #[test]
    fn blank_references_yield_nothing() {
        let slots = [WeightedSlot::new("", 5), WeightedSlot::new("  ", 1)];
        let results = roll_from_table(&slots, 5, 100.0, &mut rng()).unwrap();
        assert!(results.is_empty());
    }

    #[test]
    fn zero_drop_rate_yields_nothing() {
        let slots = [WeightedSlot::new("a", 1)];
        let results = roll_from_table(&slots, 10, 0.0, &mut rng()).unwrap();
        assert!(results.is_empty());
    }

    #[test]
    fn full_drop_rate_always_hits() {
        let slots = [WeightedSlot::new("a", 1)];
        let results = roll_from_table(&slots, 25, 100.0, &mut rng()).unwrap();
        assert_eq!(results.len(), 25);
        assert!(results.iter().all(|r| r == "a"));
    }

    #[test]
    fn zero_count_yields_nothing() {
        let slots = [WeightedSlot::new("a", 1)];
        assert!(roll_from_table(&slots, 0, 100.0, &mut rng()).unwrap().is_empty());
    }

    #[test]
    fn weights_shape_distribution() {
        let slots = [WeightedSlot::new("a", 1), WeightedSlot::new("b", 3)];
        let results = roll_from_table(&slots, 10_000, 100.0, &mut rng()).unwrap();
        assert_eq!(results.len(), 10_000);
        let b = results.iter().filter(|r| *r == "b").count() as f64 / 10_000.0;
        assert!((b - 0.75).abs() < 0.03, "b frequency was {b}");
    }

    #[test]
    fn drop_rate_shapes_hit_count() {
        let slots = [WeightedSlot::new("a", 1)];
        let results = roll_from_table(&slots, 10_000, 30.0, &mut rng()).unwrap();
        let rate = results.len() as f64 / 10_000.0;
        assert!((rate - 0.30).abs() < 0.03, "hit rate was {rate}");
    }

    #[test]
    fn invalid_slots_do_not_take_weight() {
        let slots = [WeightedSlot::new("", 1000), WeightedSlot::new("only", 1)];
        let results = roll_from_table(&slots, 50, 100.0, &mut rng()).unwrap();
        assert_eq!(results.len(), 50);
        assert!(results.iter().all(|r| r == "only"));
    }

    #[test]
    fn zero_weight_counts_as_one() {
        let slots = [WeightedSlot::new("a", 0), WeightedSlot::new("b", 0)];
        let results = roll_from_table(&slots, 2_000, 100.0, &mut rng()).unwrap();
        let a = results.iter().filter(|r| *r == "a").count();
        assert!(a > 800 && a < 1_200, "a hit {a} times");
    }

    #[test]
    fn deterministic_with_seed() {
        let slots = [
            WeightedSlot::new("a", 2),
            WeightedSlot::new("b", 5),
            WeightedSlot::new("c", 1),
        ];
        let r1 = roll_from_table(&slots, 20, 60.0, &mut StdRng::seed_from_u64(5)).unwrap();
        let r2 = roll_from_table(&slots, 20, 60.0, &mut StdRng::seed_from_u64(5)).unwrap();
        assert_eq!(r1, r2);
    }

    #[test]
    fn out_of_range_drop_rate_rejected() {
        let slots = [WeightedSlot::new("a", 1)];
        for rate in [-0.1, 100.5, f64::NAN, f64::INFINITY] {
            let err = roll_from_table(&slots, 1, rate, &mut rng()).unwrap_err();
            assert!(matches!(err, MechError::InvalidArgument(_)));
        }
    }

    #[test]
    fn invalid_drop_rate_rejected_even_when_empty() {
        assert!(roll_from_table(&[], 1, 150.0, &mut rng()).is_err());
    }

    #[test]
    fn harvest_uses_table_rate() {
        let config = CraftConfig::default().with_harvest_count(10);
        let table = HarvestTable::new("barren", "Barren Flats")
            .with_drop_rate(0.0)
            .with_slot("dust", 1);
        let run = harvest(&table, &config, None, None, &mut rng()).unwrap();
        assert_eq!(run.attempts, 10);
        assert!(run.rolls.is_empty());

        let table = table.with_drop_rate(100.0);
        let run = harvest(&table, &config, None, None, &mut rng()).unwrap();
        assert_eq!(run.rolls.len(), 10);
        assert_eq!(run.table, "barren");
    }

    #[test]
    fn harvest_config_rate_beats_table() {
        let table = HarvestTable::new("grove", "Grove")
            .with_drop_rate(100.0)
            .with_slot("moss", 1);
        let config = CraftConfig::default().with_drop_rate(0.0);
        let run = harvest(&table, &config, Some(8), None, &mut rng()).unwrap();
        assert!((run.drop_rate - 0.0).abs() < f64::EPSILON);
        assert!(run.rolls.is_empty());
    }

    #[test]
    fn harvest_argument_beats_config() {
        let table = HarvestTable::new("grove", "Grove")
            .with_drop_rate(0.0)
            .with_slot("moss", 1);
        let config = CraftConfig::default()
            .with_drop_rate(0.0)
            .with_harvest_count(2);
        let run = harvest(&table, &config, Some(6), Some(100.0), &mut rng()).unwrap();
        assert_eq!(run.attempts, 6);
        assert!((run.drop_rate - 100.0).abs() < f64::EPSILON);
        assert_eq!(run.rolls, vec!["moss"; 6]);
    }

    #[test]
    fn harvest_rejects_out_of_range_config_rate() {
        let table = HarvestTable::new("grove", "Grove").with_slot("moss", 1);
        let config = CraftConfig::default().with_drop_rate(150.0);
        let err = harvest(&table, &config, None, None, &mut rng()).unwrap_err();
        assert!(matches!(err, MechError::InvalidArgument(_)));
    }

    #[test]
    fn tally_keeps_first_seen_order() {
        let results: Vec<String> = ["b", "a", "b", "c", "b"]
            .into_iter()
            .map(String::from)
            .collect();
        assert_eq!(
            harvest_tally(&results),
            vec![("b".into(), 3), ("a".into(), 1), ("c".into(), 1)]
        );
        assert!(harvest_tally(&[]).is_empty());
    }
}
