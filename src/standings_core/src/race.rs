use serde::{Deserialize, Serialize};

use crate::constants::{PODIUM_CUTOFF, POINTS_TABLE};
use crate::season::{Race, RaceResult, Season};

/// A result alongside the points it scored
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoredResult {
    pub result: RaceResult,
    pub points: u32,
}

/// Winner, podium and points finishers of a single race.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RaceSummary {
    pub circuit: String,
    pub date: Option<String>,
    pub winner: Option<String>,
    pub podium: Vec<String>,
    /// Top ten finishers by position
    pub classified: Vec<ScoredResult>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum CalendarEntry {
    Completed(RaceSummary),
    Pending { circuit: String },
}

impl CalendarEntry {
    pub fn circuit(&self) -> &str {
        match self {
            CalendarEntry::Completed(summary) => &summary.circuit,
            CalendarEntry::Pending { circuit } => circuit,
        }
    }

    pub fn is_completed(&self) -> bool {
        matches!(self, CalendarEntry::Completed(_))
    }
}

/// Summarise one race. Results may arrive in any order.
pub fn summarize_race(circuit: &str, race: &Race) -> RaceSummary {
    let mut sorted: Vec<&RaceResult> = race.results.iter().collect();
    sorted.sort_by_key(|result| result.position);

    let winner = sorted
        .first()
        .filter(|result| result.is_win())
        .map(|result| result.driver.clone());

    let podium = sorted
        .iter()
        .take_while(|result| result.position <= PODIUM_CUTOFF)
        .map(|result| result.driver.clone())
        .collect();

    let classified = sorted
        .iter()
        .take(POINTS_TABLE.len())
        .map(|&result| ScoredResult {
            result: result.clone(),
            points: result.scored_points(),
        })
        .collect();

    RaceSummary {
        circuit: circuit.to_string(),
        date: race.date.clone(),
        winner,
        podium,
        classified,
    }
}

/// Lay a season over a calendar.
///
/// Each calendar circuit is either completed or pending. Races the season
/// holds that the calendar doesn't list are appended in season order.
pub fn race_calendar(season: &Season, calendar: &[&str]) -> Vec<CalendarEntry> {
    let mut entries: Vec<CalendarEntry> = calendar
        .iter()
        .map(|&circuit| match season.races.get(circuit) {
            Some(race) => CalendarEntry::Completed(summarize_race(circuit, race)),
            None => CalendarEntry::Pending {
                circuit: circuit.to_string(),
            },
        })
        .collect();

    for (circuit, race) in season.races_in_order() {
        if !calendar.contains(&circuit) {
            entries.push(CalendarEntry::Completed(summarize_race(circuit, race)));
        }
    }

    entries
}
