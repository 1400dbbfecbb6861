use rand::RngCore;
use smallvec::SmallVec;

use crate::model::{PenaltyEnforcement, PenaltyRecord, PenaltyTiming, PlayType, Possession};
use crate::penalty::{PenaltyCatalog, PenaltyDef};
use crate::rng::Roll;

/// Roll for any foul in the family the catalog assigns to `timing` on `play_type`.
///
/// One draw decides whether a flag flies: it hits when under the family's
/// combined odds, and the same draw names the foul by walking the family's
/// cumulative odds. A second draw, taken only on a hit, decides the side: at
/// or under the foul's away odds flags the visitors. No draw is taken when
/// the table has no entry.
pub fn penalty_check<R: RngCore>(
    catalog: &PenaltyCatalog,
    timing: PenaltyTiming,
    play_type: PlayType,
    rng: &mut R,
) -> Option<PenaltyRecord> {
    let family: SmallVec<[&PenaltyDef; 16]> = catalog.for_check(timing, play_type).collect();
    if family.is_empty() {
        return None;
    }
    let total: f64 = family.iter().map(|def| def.odds).sum();
    let roll = rng.roll();
    if roll >= total {
        return None;
    }
    let mut cumulative = 0.0;
    let def = family
        .iter()
        .copied()
        .find(|def| {
            cumulative += def.odds;
            roll < cumulative
        })
        .or_else(|| family.last().copied())?;
    let called_on = if rng.roll() <= def.away_odds {
        Possession::Away
    } else {
        Possession::Home
    };
    Some(PenaltyRecord {
        name: def.name,
        timing,
        odds: def.odds,
        away_odds: def.away_odds,
        called_on,
        yards: def.yards,
        automatic_first_down: def.automatic_first_down,
        enforcement: PenaltyEnforcement::Pending,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::penalty::{PenaltyCheckEntry, PenaltyName};
    use crate::rng::GameRng;

    fn def(name: PenaltyName, odds: f64, away_odds: f64) -> PenaltyDef {
        PenaltyDef {
            name,
            odds,
            home_odds: 1.0 - away_odds,
            away_odds,
            yards: 5,
            automatic_first_down: false,
        }
    }

    fn catalog(penalties: Vec<PenaltyDef>) -> PenaltyCatalog {
        let names = penalties.iter().map(|def| def.name).collect();
        PenaltyCatalog {
            penalties,
            checks: vec![PenaltyCheckEntry {
                timing: PenaltyTiming::Before,
                play_type: PlayType::Run,
                penalties: names,
            }],
        }
    }

    fn always(away_odds: f64) -> PenaltyCatalog {
        catalog(vec![def(PenaltyName::FalseStart, 1.0, away_odds)])
    }

    #[test]
    fn side_follows_away_odds() {
        let mut rng = GameRng::from_seed(8);
        let away = penalty_check(&always(1.0), PenaltyTiming::Before, PlayType::Run, &mut rng)
            .expect("flag");
        assert_eq!(away.called_on, Possession::Away);
        assert_eq!(away.enforcement, PenaltyEnforcement::Pending);
        let home = penalty_check(&always(0.0), PenaltyTiming::Before, PlayType::Run, &mut rng)
            .expect("flag");
        assert_eq!(home.called_on, Possession::Home);
    }

    #[test]
    fn missing_table_entry_draws_nothing() {
        let mut rng = GameRng::from_seed(8);
        assert!(penalty_check(&always(0.5), PenaltyTiming::After, PlayType::Pass, &mut rng).is_none());
        assert_eq!(rng.draws(), 0);
    }

    #[test]
    fn family_members_are_picked_by_cumulative_odds() {
        let family = catalog(vec![
            def(PenaltyName::FalseStart, 0.3, 0.5),
            def(PenaltyName::DelayofGame, 0.0, 0.5),
            def(PenaltyName::Encroachment, 0.7, 0.5),
        ]);
        let mut rng = GameRng::from_seed(21);
        let mut seen = [0_u32; 2];
        for _ in 0..2000 {
            let foul = penalty_check(&family, PenaltyTiming::Before, PlayType::Run, &mut rng)
                .expect("family odds sum to one");
            match foul.name {
                PenaltyName::FalseStart => seen[0] += 1,
                PenaltyName::Encroachment => seen[1] += 1,
                other => panic!("zero-odds foul {other} was flagged"),
            }
        }
        assert!((500..700).contains(&seen[0]), "false starts {}", seen[0]);
        assert_eq!(seen[0] + seen[1], 2000);
    }

    #[test]
    fn miss_takes_a_single_draw() {
        let family = catalog(vec![
            def(PenaltyName::FalseStart, 0.0, 0.5),
            def(PenaltyName::DelayofGame, 0.0, 0.5),
        ]);
        let mut rng = GameRng::from_seed(4);
        assert!(penalty_check(&family, PenaltyTiming::Before, PlayType::Run, &mut rng).is_none());
        assert_eq!(rng.draws(), 1);
    }
}
