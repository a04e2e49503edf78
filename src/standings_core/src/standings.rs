#[cfg(feature = "python")]
use pyo3::prelude::*;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::collections::{BTreeSet, HashMap};
use tracing::debug;

use crate::season::{RaceResult, Season};

/// A driver's row in the championship table.
#[cfg_attr(feature = "python", pyclass(get_all))]
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DriverStanding {
    /// 1-based championship position
    pub position: u32,
    pub driver: String,
    /// Team from the driver's most recent race in season order
    pub team: String,
    pub points: u32,
    pub wins: u32,
    pub podiums: u32,
    /// Places gained (positive) or lost since the previous race
    pub change: i32,
}

/// A team's row in the constructors' table.
#[cfg_attr(feature = "python", pyclass(get_all))]
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConstructorStanding {
    pub position: u32,
    pub team: String,
    pub points: u32,
    pub wins: u32,
    pub podiums: u32,
    /// Every driver who raced for the team this season
    pub drivers: BTreeSet<String>,
}

#[cfg(feature = "python")]
#[pymethods]
impl DriverStanding {
    fn __repr__(&self) -> String {
        format!(
            "DriverStanding({}, {:?}, {:?}, points={}, wins={})",
            self.position, self.driver, self.team, self.points, self.wins
        )
    }
}

#[cfg(feature = "python")]
#[pymethods]
impl ConstructorStanding {
    fn __repr__(&self) -> String {
        format!(
            "ConstructorStanding({}, {:?}, points={}, wins={})",
            self.position, self.team, self.points, self.wins
        )
    }
}

/// Running points, wins and podiums for one driver or team.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
struct Tally {
    points: u32,
    wins: u32,
    podiums: u32,
}

impl Tally {
    fn record(&mut self, result: &RaceResult) {
        self.points = self.points.saturating_add(result.scored_points());
        if result.is_win() {
            self.wins = self.wins.saturating_add(1);
        }
        if result.is_podium() {
            self.podiums = self.podiums.saturating_add(1);
        }
    }

    /// Championship order: more points, then more wins, then more podiums.
    fn championship_cmp(&self, other: &Tally) -> Ordering {
        other
            .points
            .cmp(&self.points)
            .then(other.wins.cmp(&self.wins))
            .then(other.podiums.cmp(&self.podiums))
    }
}

/// Rank every driver in the season, without position change.
fn rank_drivers(season: &Season) -> Vec<DriverStanding> {
    let mut drivers: HashMap<&str, (Tally, &str)> = HashMap::new();

    for (_, race) in season.races_in_order() {
        for result in &race.results {
            let entry = drivers
                .entry(result.driver.as_str())
                .or_insert((Tally::default(), result.team.as_str()));
            entry.0.record(result);
            entry.1 = result.team.as_str();
        }
    }

    let mut ranked: Vec<(&str, Tally, &str)> = drivers
        .into_iter()
        .map(|(driver, (tally, team))| (driver, tally, team))
        .collect();
    ranked.sort_by(|a, b| a.1.championship_cmp(&b.1).then_with(|| a.0.cmp(b.0)));

    ranked
        .into_iter()
        .enumerate()
        .map(|(index, (driver, tally, team))| DriverStanding {
            position: index as u32 + 1,
            driver: driver.to_string(),
            team: team.to_string(),
            points: tally.points,
            wins: tally.wins,
            podiums: tally.podiums,
            change: 0,
        })
        .collect()
}

/// Compute the drivers' championship table for a season.
///
/// Drivers are ordered by points, then wins, then podiums, then name.
/// `change` compares each position with the table before the season's most
/// recent race; drivers with no earlier result report 0.
pub fn compute_driver_standings(season: &Season) -> Vec<DriverStanding> {
    let mut standings = rank_drivers(season);

    if season.completed_races() > 1 {
        let previous: HashMap<String, u32> = rank_drivers(&season.without_latest_race())
            .into_iter()
            .map(|standing| (standing.driver, standing.position))
            .collect();

        for standing in &mut standings {
            if let Some(&before) = previous.get(&standing.driver) {
                standing.change = before as i32 - standing.position as i32;
            }
        }
    }

    debug!(
        year = season.year,
        races = season.completed_races(),
        drivers = standings.len(),
        "Computed driver standings"
    );
    standings
}

/// Compute the constructors' championship table for a season.
///
/// Points go to the team recorded on each individual result, so a driver
/// who switches teams mid-season scores for both.
pub fn compute_constructor_standings(season: &Season) -> Vec<ConstructorStanding> {
    let mut teams: HashMap<&str, (Tally, BTreeSet<String>)> = HashMap::new();

    for race in season.races.values() {
        for result in &race.results {
            let entry = teams.entry(result.team.as_str()).or_default();
            entry.0.record(result);
            entry.1.insert(result.driver.clone());
        }
    }

    let mut ranked: Vec<(&str, Tally, BTreeSet<String>)> = teams
        .into_iter()
        .map(|(team, (tally, drivers))| (team, tally, drivers))
        .collect();
    ranked.sort_by(|a, b| a.1.championship_cmp(&b.1).then_with(|| a.0.cmp(b.0)));

    let standings: Vec<ConstructorStanding> = ranked
        .into_iter()
        .enumerate()
        .map(|(index, (team, tally, drivers))| ConstructorStanding {
            position: index as u32 + 1,
            team: team.to_string(),
            points: tally.points,
            wins: tally.wins,
            podiums: tally.podiums,
            drivers,
        })
        .collect();

    debug!(
        year = season.year,
        races = season.completed_races(),
        teams = standings.len(),
        "Computed constructor standings"
    );
    standings
}
