//! Alchemical brewing: up to three reagents in, one resolved craft out.

use al_core::{Category, IpSums, Rarity, Reagent, ReagentCatalog};
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::check::{CheckRoll, SkillCheck};
use crate::error::{MechError, MechResult};
use crate::outcome::{Outcome, resolve_outcome};

/// Reagent slots in an alembic.
pub const MAX_REAGENTS: usize = 3;

/// Where the check total for a brew comes from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CheckSource {
    /// A total the caller already rolled.
    Total(i32),
    /// Roll a check now.
    Roll(SkillCheck),
}

/// A finished brew.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Brew {
    /// Ids of the reagents used, in slot order.
    pub reagents: Vec<String>,
    /// Combined influence of the reagents.
    pub sums: IpSums,
    /// Difficulty class set by the reagents' tier.
    pub dc: i32,
    /// The rolled check, if the brew rolled one.
    pub check: Option<CheckRoll>,
    /// Total the check was resolved with.
    pub check_total: i32,
    /// The resolved craft.
    pub outcome: Outcome,
    /// Display name of the resulting consumable.
    pub item_name: String,
}

impl Brew {
    /// Material cost of the whole batch in gold pieces.
    pub fn cost(&self) -> u64 {
        self.outcome.cost()
    }
}

/// Look up reagent ids in a catalog.
pub fn find_reagents<'a>(
    catalog: &'a ReagentCatalog,
    ids: &[String],
) -> MechResult<Vec<&'a Reagent>> {
    ids.iter()
        .map(|id| {
            catalog
                .get(id)
                .ok_or_else(|| MechError::UnknownReagent(id.clone()))
        })
        .collect()
}

/// Brew a consumable from one to three reagents.
///
/// The reagents' combined influence sets the difficulty class; the check
/// is then resolved against it.
pub fn brew<R: Rng + ?Sized>(
    reagents: &[&Reagent],
    check: CheckSource,
    preferred: Option<Category>,
    rng: &mut R,
) -> MechResult<Brew> {
    if reagents.is_empty() {
        return Err(MechError::NoReagents);
    }
    if reagents.len() > MAX_REAGENTS {
        return Err(MechError::TooManyReagents {
            max: MAX_REAGENTS,
            got: reagents.len(),
        });
    }

    let sums: IpSums = reagents.iter().map(|r| r.ip).sum();
    let dc = Rarity::from_sum(sums.total()).dc();

    let (check, check_total) = match check {
        CheckSource::Total(total) => (None, total),
        CheckSource::Roll(skill) => {
            let roll = skill.roll(rng);
            (Some(roll), roll.total)
        }
    };
    tracing::debug!(%sums, dc, check_total, "brewing");

    let outcome = resolve_outcome(sums, check_total, dc, preferred, rng);
    let item_name = format!(
        "{} {} {}",
        outcome.rarity,
        capitalize(&outcome.category.to_string()),
        outcome.category.brew_form()
    );

    Ok(Brew {
        reagents: reagents.iter().map(|r| r.id.clone()).collect(),
        sums,
        dc,
        check,
        check_total,
        outcome,
        item_name,
    })
}

fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn catalog() -> ReagentCatalog {
        ReagentCatalog::new(vec![
            Reagent::new("emberroot", "Emberroot", IpSums::new(6, 1, 0)),
            Reagent::new("mistcap", "Mistcap", IpSums::new(0, 5, 1)),
            Reagent::new("voidsalt", "Void Salt", IpSums::new(1, 0, 4)),
            Reagent::new("ash", "Grave Ash", IpSums::new(0, 0, 2)),
        ])
        .unwrap()
    }

    fn ids(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn brew_with_given_total() {
        let catalog = catalog();
        let reagents =
            find_reagents(&catalog, &ids(&["emberroot", "mistcap", "voidsalt"])).unwrap();
        let mut rng = StdRng::seed_from_u64(1);
        let brew = brew(&reagents, CheckSource::Total(25), None, &mut rng).unwrap();

        assert_eq!(brew.sums, IpSums::new(7, 6, 5));
        // Total 18 is uncommon, DC 15.
        assert_eq!(brew.dc, 15);
        assert_eq!(brew.check, None);
        assert_eq!(brew.outcome.margin, 10);
        assert_eq!(brew.outcome.quantity, 2);
        assert_eq!(brew.outcome.category, Category::Combat);
        assert_eq!(brew.item_name, "Uncommon Combat Draught");
        assert_eq!(brew.cost(), 400);
        assert_eq!(brew.reagents, ids(&["emberroot", "mistcap", "voidsalt"]));
    }

    #[test]
    fn brew_rolls_check_when_asked() {
        let catalog = catalog();
        let reagents = find_reagents(&catalog, &ids(&["mistcap"])).unwrap();
        let mut rng = StdRng::seed_from_u64(11);
        let brew = brew(&reagents, CheckSource::Roll(SkillCheck::new(2)), None, &mut rng).unwrap();
        let check = brew.check.unwrap();
        assert_eq!(brew.check_total, check.total);
        assert_eq!(brew.dc, 10);
        assert_eq!(brew.outcome.margin, i64::from(check.total) - 10);
    }

    #[test]
    fn brew_with_preference() {
        let catalog = catalog();
        let reagents = find_reagents(&catalog, &ids(&["emberroot", "ash"])).unwrap();
        let mut rng = StdRng::seed_from_u64(1);
        let preferred = Some(Category::Entropy);
        let brew = brew(&reagents, CheckSource::Total(12), preferred, &mut rng).unwrap();
        assert_eq!(brew.outcome.category, Category::Entropy);
        assert_eq!(brew.item_name, "Common Entropy Philter");
    }

    #[test]
    fn failed_brew_is_reduced() {
        let catalog = catalog();
        let reagents = find_reagents(&catalog, &ids(&["emberroot", "emberroot"])).unwrap();
        let mut rng = StdRng::seed_from_u64(4);
        let brew = brew(&reagents, CheckSource::Total(1), None, &mut rng).unwrap();
        // 14 influence, uncommon DC 15, margin -14.
        assert_eq!(brew.dc, 15);
        assert!(brew.outcome.reduction.is_some());
        assert!(brew.outcome.final_sum < 12);
        assert_eq!(brew.outcome.quantity, 1);
    }

    #[test]
    fn no_reagents_rejected() {
        let mut rng = StdRng::seed_from_u64(1);
        assert!(matches!(
            brew(&[], CheckSource::Total(10), None, &mut rng),
            Err(MechError::NoReagents)
        ));
    }

    #[test]
    fn too_many_reagents_rejected() {
        let catalog = catalog();
        let reagents =
            find_reagents(&catalog, &ids(&["emberroot", "mistcap", "voidsalt", "ash"])).unwrap();
        let mut rng = StdRng::seed_from_u64(1);
        assert!(matches!(
            brew(&reagents, CheckSource::Total(10), None, &mut rng),
            Err(MechError::TooManyReagents { max: 3, got: 4 })
        ));
    }

    #[test]
    fn unknown_reagent_rejected() {
        let catalog = catalog();
        let err = find_reagents(&catalog, &ids(&["emberroot", "dragonscale"])).unwrap_err();
        assert!(matches!(err, MechError::UnknownReagent(id) if id == "dragonscale"));
    }

    #[test]
    fn capitalize_words() {
        assert_eq!(capitalize("utility"), "Utility");
        assert_eq!(capitalize(""), "");
    }
}
