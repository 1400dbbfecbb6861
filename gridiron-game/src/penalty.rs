//! Penalty catalog and the table deciding which fouls each check looks for.
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::OnceLock;

use crate::config::{ConfigError, check_probability};
use crate::model::{PenaltyTiming, PlayType};

const DEFAULT_PENALTY_DATA: &str = include_str!("../data/penalties.json");

/// Every infraction the catalog knows about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PenaltyName {
    OffensiveHolding,
    FalseStart,
    DefensivePassInterference,
    UnnecessaryRoughness,
    DefensiveHolding,
    DefensiveOffside,
    NeutralZoneInfraction,
    DelayofGame,
    IllegalBlockAbovetheWaist,
    IllegalUseofHands,
    OffensivePassInterference,
    FaceMask15Yards,
    RoughingthePasser,
    UnsportsmanlikeConduct,
    IllegalContact,
    IllegalFormation,
    Defensive12OnField,
    Encroachment,
    IntentionalGrounding,
    IllegalShift,
    Taunting,
    IneligibleDownfieldPass,
    OffsideonFreeKick,
    ChopBlock,
    PlayerOutofBoundsonPunt,
    RunningIntotheKicker,
    HorseCollarTackle,
    IllegalMotion,
    Tripping,
    Offensive12OnField,
    IllegalSubstitution,
    PersonalFoul,
    IneligibleDownfieldKick,
    IllegalForwardPass,
    Clipping,
    IllegalBlindsideBlock,
    DefensiveDelayofGame,
    IllegalTouchPass,
    FairCatchInterference,
    OffensiveOffside,
    IllegalTouchKick,
    LowBlock,
    IllegalPeelback,
    Leaping,
    RoughingtheKicker,
    IllegalCrackback,
    InvalidFairCatchSignal,
    Disqualification,
    InterferencewithOpportunitytoCatch,
    Leverage,
}

impl fmt::Display for PenaltyName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}

/// Reference odds and enforcement data for one infraction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PenaltyDef {
    pub name: PenaltyName,
    pub odds: f64,
    #[serde(default)]
    pub home_odds: f64,
    pub away_odds: f64,
    pub yards: u8,
    #[serde(default)]
    pub automatic_first_down: bool,
}

/// The family of fouls a check at `timing` on `play_type` rolls against.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PenaltyCheckEntry {
    pub timing: PenaltyTiming,
    pub play_type: PlayType,
    pub penalties: Vec<PenaltyName>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct PenaltyCatalog {
    #[serde(default)]
    pub penalties: Vec<PenaltyDef>,
    #[serde(default)]
    pub checks: Vec<PenaltyCheckEntry>,
}

impl PenaltyCatalog {
    /// Parse and validate the embedded catalog.
    ///
    /// # Errors
    ///
    /// Returns the errors of [`PenaltyCatalog::from_json`].
    pub fn load_from_static() -> Result<Self, ConfigError> {
        Self::from_json(DEFAULT_PENALTY_DATA)
    }

    /// The embedded catalog, parsed once per process.
    ///
    /// A rejected embedded file is logged and replaced by an empty catalog,
    /// under which no flag is ever thrown.
    #[must_use]
    pub fn default_catalog() -> &'static Self {
        static CATALOG: OnceLock<PenaltyCatalog> = OnceLock::new();
        CATALOG.get_or_init(|| {
            Self::load_from_static().unwrap_or_else(|err| {
                log::error!("embedded penalty catalog rejected: {err}");
                Self::default()
            })
        })
    }

    /// Parse and validate a custom catalog.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Parse`] for malformed JSON and the errors of
    /// [`PenaltyCatalog::validate`].
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let catalog: Self =
            serde_json::from_str(json).map_err(|err| ConfigError::Parse(err.to_string()))?;
        catalog.validate()?;
        Ok(catalog)
    }

    /// Every odds value must be a probability, every check must name known
    /// fouls, and a check's combined odds may not exceed one.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::ProbabilityOutOfRange`] naming the first bad
    /// value, or [`ConfigError::UnknownPenalty`] for a dangling check entry.
    pub fn validate(&self) -> Result<(), ConfigError> {
        for def in &self.penalties {
            check_probability("penalties.odds", def.odds)?;
            check_probability("penalties.home_odds", def.home_odds)?;
            check_probability("penalties.away_odds", def.away_odds)?;
        }
        for entry in &self.checks {
            let mut total = 0.0;
            for &name in &entry.penalties {
                let def = self.get(name).ok_or(ConfigError::UnknownPenalty {
                    timing: entry.timing,
                    play_type: entry.play_type,
                    name,
                })?;
                total += def.odds;
            }
            check_probability("checks.total_odds", total)?;
        }
        Ok(())
    }

    #[must_use]
    pub fn get(&self, name: PenaltyName) -> Option<&PenaltyDef> {
        self.penalties.iter().find(|def| def.name == name)
    }

    /// Catalog entries a check rolls against, in table order.
    pub fn for_check(
        &self,
        timing: PenaltyTiming,
        play_type: PlayType,
    ) -> impl Iterator<Item = &PenaltyDef> + '_ {
        self.checks
            .iter()
            .filter(move |entry| entry.timing == timing && entry.play_type == play_type)
            .flat_map(|entry| entry.penalties.iter())
            .filter_map(move |&name| self.get(name))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    const TIMINGS: [PenaltyTiming; 3] =
        [PenaltyTiming::Before, PenaltyTiming::During, PenaltyTiming::After];
    const PLAY_TYPES: [PlayType; 5] = [
        PlayType::Kickoff,
        PlayType::Punt,
        PlayType::FieldGoal,
        PlayType::Run,
        PlayType::Pass,
    ];

    #[test]
    fn embedded_catalog_parses() {
        let catalog = PenaltyCatalog::load_from_static().expect("embedded catalog valid");
        assert_eq!(catalog.penalties.len(), 50);
        assert_eq!(&catalog, PenaltyCatalog::default_catalog());
        let holding = catalog
            .get(PenaltyName::OffensiveHolding)
            .expect("holding present");
        assert!((holding.odds - 0.019_000_18).abs() < f64::EPSILON);
        assert_eq!(holding.yards, 10);
    }

    #[test]
    fn every_timing_and_play_type_has_a_family() {
        let catalog = PenaltyCatalog::default_catalog();
        for timing in TIMINGS {
            for play_type in PLAY_TYPES {
                assert!(
                    catalog.for_check(timing, play_type).next().is_some(),
                    "{timing:?} {play_type:?}"
                );
            }
        }
        let during_pass: Vec<PenaltyName> = catalog
            .for_check(PenaltyTiming::During, PlayType::Pass)
            .map(|def| def.name)
            .collect();
        assert_eq!(during_pass.first(), Some(&PenaltyName::OffensiveHolding));
        assert!(during_pass.contains(&PenaltyName::DefensivePassInterference));
        let pre_snap: Vec<PenaltyName> = catalog
            .for_check(PenaltyTiming::Before, PlayType::Run)
            .map(|def| def.name)
            .collect();
        assert_eq!(pre_snap.first(), Some(&PenaltyName::FalseStart));
        assert!(pre_snap.len() >= 12);
    }

    #[test]
    fn every_catalog_entry_is_reachable_from_a_check() {
        let catalog = PenaltyCatalog::default_catalog();
        let reachable: HashSet<PenaltyName> = TIMINGS
            .into_iter()
            .flat_map(|timing| PLAY_TYPES.into_iter().map(move |play_type| (timing, play_type)))
            .flat_map(|(timing, play_type)| catalog.for_check(timing, play_type))
            .map(|def| def.name)
            .collect();
        let unreachable: Vec<PenaltyName> = catalog
            .penalties
            .iter()
            .map(|def| def.name)
            .filter(|name| !reachable.contains(name))
            .collect();
        assert!(unreachable.is_empty(), "never checked: {unreachable:?}");
    }

    #[test]
    fn custom_catalog_rejects_bad_odds() {
        let json = r#"{ "penalties": [
            { "name": "Taunting", "odds": 1.5, "away_odds": 0.5, "yards": 15 }
        ] }"#;
        assert!(matches!(
            PenaltyCatalog::from_json(json),
            Err(ConfigError::ProbabilityOutOfRange { .. })
        ));
        assert!(matches!(
            PenaltyCatalog::from_json("not json"),
            Err(ConfigError::Parse(_))
        ));
    }

    #[test]
    fn check_naming_a_missing_foul_is_rejected() {
        let json = r#"{
            "penalties": [
                { "name": "Taunting", "odds": 0.01, "away_odds": 0.5, "yards": 15 }
            ],
            "checks": [
                { "timing": "After", "play_type": "Run", "penalties": ["Taunting", "Tripping"] }
            ]
        }"#;
        assert_eq!(
            PenaltyCatalog::from_json(json),
            Err(ConfigError::UnknownPenalty {
                timing: PenaltyTiming::After,
                play_type: PlayType::Run,
                name: PenaltyName::Tripping,
            })
        );
    }

    #[test]
    fn family_odds_above_one_are_rejected() {
        let json = r#"{
            "penalties": [
                { "name": "Taunting", "odds": 0.6, "away_odds": 0.5, "yards": 15 },
                { "name": "Tripping", "odds": 0.6, "away_odds": 0.5, "yards": 10 }
            ],
            "checks": [
                { "timing": "After", "play_type": "Run", "penalties": ["Taunting", "Tripping"] }
            ]
        }"#;
        assert!(matches!(
            PenaltyCatalog::from_json(json),
            Err(ConfigError::ProbabilityOutOfRange {
                field: "checks.total_odds",
                ..
            })
        ));
    }
}
