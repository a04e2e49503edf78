#[cfg(feature = "python")]
use pyo3::prelude::*;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use tracing::debug;

use crate::constants::HALL_OF_FAME_SIZE;
use crate::season::Season;
use crate::standings::{
    compute_constructor_standings, compute_driver_standings, ConstructorStanding, DriverStanding,
};

/// Settings for the all-time tables.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HallOfFameConfig {
    /// Maximum entries in each leaderboard
    pub top_n: usize,
}

impl Default for HallOfFameConfig {
    fn default() -> Self {
        HallOfFameConfig {
            top_n: HALL_OF_FAME_SIZE,
        }
    }
}

/// Drivers' champion (or current leader) of a season.
#[cfg_attr(feature = "python", pyclass(get_all))]
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DriverChampion {
    pub driver: String,
    pub team: String,
    pub points: u32,
}

#[cfg_attr(feature = "python", pyclass(get_all))]
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConstructorChampion {
    pub team: String,
    pub points: u32,
}

/// One season's drivers' title.
///
/// `champion` is `None` when the season has no races yet, which is distinct
/// from a leader on zero points.
#[cfg_attr(feature = "python", pyclass(get_all))]
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeasonChampion {
    pub year: u16,
    pub champion: Option<DriverChampion>,
    /// True for the latest known season
    pub in_progress: bool,
}

/// One season's constructors' title. Same conventions as [`SeasonChampion`].
#[cfg_attr(feature = "python", pyclass(get_all))]
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeasonConstructorChampion {
    pub year: u16,
    pub champion: Option<ConstructorChampion>,
    pub in_progress: bool,
}

#[cfg_attr(feature = "python", pyclass(get_all))]
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct WinsLeader {
    pub driver: String,
    pub wins: u32,
    /// Seasons in which the driver won at least one race
    pub winning_seasons: Vec<u16>,
}

#[cfg_attr(feature = "python", pyclass(get_all))]
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PointsLeader {
    pub driver: String,
    pub points: u32,
    /// Seasons in which the driver appears in the standings
    pub seasons: u32,
    /// Points per season, rounded to one decimal place
    pub avg_per_season: f64,
}

/// Everything the hall of fame shows.
#[cfg_attr(feature = "python", pyclass(get_all))]
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CareerSummary {
    pub champions: Vec<SeasonChampion>,
    pub constructor_champions: Vec<SeasonConstructorChampion>,
    pub most_wins: Vec<WinsLeader>,
    pub most_points: Vec<PointsLeader>,
}

#[derive(Default)]
struct CareerTally {
    wins: u32,
    winning_seasons: Vec<u16>,
    points: u32,
    seasons: u32,
}

fn round_one_decimal(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

/// Build the hall of fame with the default leaderboard size.
pub fn compute_career_summary(seasons: &[Season]) -> CareerSummary {
    compute_career_summary_with(seasons, &HallOfFameConfig::default())
}

/// Build the hall of fame across every season given, oldest first.
///
/// Season tables are computed in parallel; the all-time tallies are folded
/// and sorted only once every season is in.
pub fn compute_career_summary_with(seasons: &[Season], config: &HallOfFameConfig) -> CareerSummary {
    let latest_year = seasons.iter().map(|season| season.year).max();

    let tables: Vec<(u16, Vec<DriverStanding>, Vec<ConstructorStanding>)> = seasons
        .par_iter()
        .map(|season| {
            (
                season.year,
                compute_driver_standings(season),
                compute_constructor_standings(season),
            )
        })
        .collect();

    let mut champions = Vec::with_capacity(tables.len());
    let mut constructor_champions = Vec::with_capacity(tables.len());
    let mut careers: HashMap<String, CareerTally> = HashMap::new();

    for (year, drivers, constructors) in &tables {
        let in_progress = Some(*year) == latest_year;

        champions.push(SeasonChampion {
            year: *year,
            champion: drivers.first().map(|leader| DriverChampion {
                driver: leader.driver.clone(),
                team: leader.team.clone(),
                points: leader.points,
            }),
            in_progress,
        });

        constructor_champions.push(SeasonConstructorChampion {
            year: *year,
            champion: constructors.first().map(|leader| ConstructorChampion {
                team: leader.team.clone(),
                points: leader.points,
            }),
            in_progress,
        });

        for standing in drivers {
            let career = careers.entry(standing.driver.clone()).or_default();
            career.wins = career.wins.saturating_add(standing.wins);
            if standing.wins > 0 {
                career.winning_seasons.push(*year);
            }
            career.points = career.points.saturating_add(standing.points);
            career.seasons = career.seasons.saturating_add(1);
        }
    }

    let mut most_wins: Vec<WinsLeader> = careers
        .iter()
        .filter(|(_, career)| career.wins > 0)
        .map(|(driver, career)| WinsLeader {
            driver: driver.clone(),
            wins: career.wins,
            winning_seasons: career.winning_seasons.clone(),
        })
        .collect();
    most_wins.sort_by(|a, b| b.wins.cmp(&a.wins).then_with(|| a.driver.cmp(&b.driver)));
    most_wins.truncate(config.top_n);

    let mut most_points: Vec<PointsLeader> = careers
        .into_iter()
        .map(|(driver, career)| PointsLeader {
            driver,
            points: career.points,
            seasons: career.seasons,
            avg_per_season: round_one_decimal(career.points as f64 / career.seasons as f64),
        })
        .collect();
    most_points.sort_by(|a, b| b.points.cmp(&a.points).then_with(|| a.driver.cmp(&b.driver)));
    most_points.truncate(config.top_n);

    debug!(
        seasons = seasons.len(),
        latest = ?latest_year,
        "Computed career summary"
    );

    CareerSummary {
        champions,
        constructor_champions,
        most_wins,
        most_points,
    }
}
