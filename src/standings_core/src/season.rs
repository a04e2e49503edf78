use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashSet};
use std::fmt;

use crate::constants::{points_for_position, PODIUM_CUTOFF};
use crate::error::{Result, SeasonError};

/// Race classification for a single result.
///
/// Purely informational: points always come from the finishing position
/// or an explicit override.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ResultStatus {
    Finished,
    Dnf,
    Dns,
    Dsq,
    Nc,
    Other(String),
}

impl From<String> for ResultStatus {
    fn from(value: String) -> Self {
        match value.to_ascii_uppercase().as_str() {
            "FINISHED" => ResultStatus::Finished,
            "DNF" => ResultStatus::Dnf,
            "DNS" => ResultStatus::Dns,
            "DSQ" => ResultStatus::Dsq,
            "NC" => ResultStatus::Nc,
            _ => ResultStatus::Other(value),
        }
    }
}

impl From<ResultStatus> for String {
    fn from(status: ResultStatus) -> Self {
        status.to_string()
    }
}

impl fmt::Display for ResultStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ResultStatus::Finished => write!(f, "Finished"),
            ResultStatus::Dnf => write!(f, "DNF"),
            ResultStatus::Dns => write!(f, "DNS"),
            ResultStatus::Dsq => write!(f, "DSQ"),
            ResultStatus::Nc => write!(f, "NC"),
            ResultStatus::Other(label) => write!(f, "{}", label),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PenaltyKind {
    Time,
    DriveThrough,
    StopGo,
    Grid,
    Points,
}

/// A steward's penalty attached to a result. Never changes scored points.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Penalty {
    #[serde(rename = "type")]
    pub kind: PenaltyKind,
    /// e.g. "5s", "3 positions"
    pub value: String,
    pub reason: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PolePosition {
    pub driver: String,
    pub team: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time: Option<String>,
}

/// One driver's outcome in one race.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RaceResult {
    /// 1-based finishing rank, unique within a race
    pub position: u32,
    pub driver: String,
    /// Team the driver raced for in this event
    pub team: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<ResultStatus>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dnf_reason: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub penalty: Option<Penalty>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fastest_lap: Option<bool>,
    /// Precomputed points; overrides the points table when present
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub points: Option<u32>,
}

impl RaceResult {
    /// Create a plain classified result with no optional fields.
    pub fn new(position: u32, driver: impl Into<String>, team: impl Into<String>) -> Self {
        RaceResult {
            position,
            driver: driver.into(),
            team: team.into(),
            status: None,
            dnf_reason: None,
            penalty: None,
            fastest_lap: None,
            points: None,
        }
    }

    /// Create a copy carrying an explicit points override
    pub fn with_points(mut self, points: u32) -> Self {
        self.points = Some(points);
        self
    }

    /// Points this result contributes to the standings.
    pub fn scored_points(&self) -> u32 {
        self.points.unwrap_or_else(|| points_for_position(self.position))
    }

    pub fn is_win(&self) -> bool {
        self.position == 1
    }

    pub fn is_podium(&self) -> bool {
        (1..=PODIUM_CUTOFF).contains(&self.position)
    }
}

/// A single grand prix.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Race {
    /// Round number within the season
    #[serde(default, rename = "gpOrder", skip_serializing_if = "Option::is_none")]
    pub order: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pole_position: Option<PolePosition>,
    #[serde(default)]
    pub results: Vec<RaceResult>,
}

impl Race {
    pub fn new(results: Vec<RaceResult>) -> Self {
        Race {
            results,
            ..Race::default()
        }
    }

    pub fn with_order(mut self, order: u32) -> Self {
        self.order = Some(order);
        self
    }
}

/// A championship season: every race run so far, keyed by circuit.
///
/// A circuit missing from `races` has not been run yet.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Season {
    #[serde(rename = "season")]
    pub year: u16,
    #[serde(default)]
    pub races: BTreeMap<String, Race>,
}

impl Season {
    pub fn new(year: u16) -> Self {
        Season {
            year,
            races: BTreeMap::new(),
        }
    }

    /// Add or replace a race
    pub fn with_race(mut self, circuit: impl Into<String>, race: Race) -> Self {
        self.races.insert(circuit.into(), race);
        self
    }

    /// Number of races that have been run
    pub fn completed_races(&self) -> usize {
        self.races.len()
    }

    /// Races in season order.
    ///
    /// Races with a round number come first, by round; the rest follow by
    /// circuit name.
    pub fn races_in_order(&self) -> Vec<(&str, &Race)> {
        let mut races: Vec<(&str, &Race)> = self
            .races
            .iter()
            .map(|(circuit, race)| (circuit.as_str(), race))
            .collect();
        races.sort_by(|(a_name, a), (b_name, b)| {
            let a_key = (a.order.is_none(), a.order);
            let b_key = (b.order.is_none(), b.order);
            a_key.cmp(&b_key).then_with(|| a_name.cmp(b_name))
        });
        races
    }

    /// The most recent race by season order
    pub fn latest_race(&self) -> Option<(&str, &Race)> {
        self.races_in_order().pop()
    }

    /// Copy of this season without its most recent race.
    pub fn without_latest_race(&self) -> Season {
        let mut season = self.clone();
        if let Some((circuit, _)) = self.latest_race() {
            season.races.remove(circuit);
        }
        season
    }

    /// Check the invariants the calculators rely on: positions start at 1
    /// and no position is shared within a race.
    pub fn validate(&self) -> Result<()> {
        for (circuit, race) in &self.races {
            let mut seen = HashSet::with_capacity(race.results.len());
            for result in &race.results {
                if result.position == 0 {
                    return Err(SeasonError::InvalidPosition {
                        circuit: circuit.clone(),
                        driver: result.driver.clone(),
                        position: result.position,
                    });
                }
                if !seen.insert(result.position) {
                    return Err(SeasonError::DuplicatePosition {
                        circuit: circuit.clone(),
                        position: result.position,
                    });
                }
            }
        }
        Ok(())
    }
}
