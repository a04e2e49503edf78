//! Standings Core - championship standings engine for the racing dashboard.
//!
//! Turns race-by-race results into ranked driver and constructor tables
//! under the 25-18-15-12-10-8-6-4-2-1 points system, and folds every season
//! into the all-time hall of fame. Python bindings are available behind the
//! `python` feature.

#[cfg(feature = "python")]
use pyo3::prelude::*;

pub mod career;
pub mod constants;
pub mod error;
pub mod loader;
pub mod metadata;
pub mod race;
pub mod season;
pub mod standings;

pub use career::{
    compute_career_summary, compute_career_summary_with, CareerSummary, ConstructorChampion,
    DriverChampion, HallOfFameConfig, PointsLeader, SeasonChampion, SeasonConstructorChampion,
    WinsLeader,
};
pub use constants::{points_for_position, DEFAULT_CALENDAR, HALL_OF_FAME_SIZE, POINTS_TABLE};
pub use error::{Result, SeasonError};
pub use loader::{parse_archive, parse_season, SeasonCatalog};
pub use metadata::{parse_drivers, parse_teams, DriverInfo, TeamInfo};
pub use race::{race_calendar, summarize_race, CalendarEntry, RaceSummary, ScoredResult};
pub use season::{Penalty, PenaltyKind, PolePosition, Race, RaceResult, ResultStatus, Season};
pub use standings::{
    compute_constructor_standings, compute_driver_standings, ConstructorStanding, DriverStanding,
};

#[cfg(feature = "python")]
fn to_py_err(err: SeasonError) -> PyErr {
    pyo3::exceptions::PyValueError::new_err(err.to_string())
}

/// Driver standings for a season document.
#[cfg(feature = "python")]
#[pyfunction]
#[pyo3(name = "compute_driver_standings")]
fn py_compute_driver_standings(season_json: &str) -> PyResult<Vec<DriverStanding>> {
    let season = parse_season(season_json).map_err(to_py_err)?;
    Ok(compute_driver_standings(&season))
}

/// Constructor standings for a season document.
#[cfg(feature = "python")]
#[pyfunction]
#[pyo3(name = "compute_constructor_standings")]
fn py_compute_constructor_standings(season_json: &str) -> PyResult<Vec<ConstructorStanding>> {
    let season = parse_season(season_json).map_err(to_py_err)?;
    Ok(compute_constructor_standings(&season))
}

/// Hall of fame across season documents, oldest first.
#[cfg(feature = "python")]
#[pyfunction]
#[pyo3(name = "compute_career_summary", signature = (season_jsons, top_n = HALL_OF_FAME_SIZE))]
fn py_compute_career_summary(season_jsons: Vec<String>, top_n: usize) -> PyResult<CareerSummary> {
    let seasons = season_jsons
        .iter()
        .map(|json| parse_season(json))
        .collect::<Result<Vec<Season>>>()
        .map_err(to_py_err)?;
    Ok(compute_career_summary_with(&seasons, &HallOfFameConfig { top_n }))
}

/// Points for a finishing position.
#[cfg(feature = "python")]
#[pyfunction]
#[pyo3(name = "points_for_position")]
fn py_points_for_position(position: u32) -> u32 {
    points_for_position(position)
}

/// Python module definition
#[cfg(feature = "python")]
#[pymodule]
fn standings_core(m: &Bound<'_, PyModule>) -> PyResult<()> {
    // Classes
    m.add_class::<DriverStanding>()?;
    m.add_class::<ConstructorStanding>()?;
    m.add_class::<DriverChampion>()?;
    m.add_class::<ConstructorChampion>()?;
    m.add_class::<SeasonChampion>()?;
    m.add_class::<SeasonConstructorChampion>()?;
    m.add_class::<WinsLeader>()?;
    m.add_class::<PointsLeader>()?;
    m.add_class::<CareerSummary>()?;

    // Standings functions
    m.add_function(wrap_pyfunction!(py_compute_driver_standings, m)?)?;
    m.add_function(wrap_pyfunction!(py_compute_constructor_standings, m)?)?;
    m.add_function(wrap_pyfunction!(py_compute_career_summary, m)?)?;
    m.add_function(wrap_pyfunction!(py_points_for_position, m)?)?;

    // Constants
    m.add("POINTS_TABLE", POINTS_TABLE.to_vec())?;
    m.add("HALL_OF_FAME_SIZE", HALL_OF_FAME_SIZE)?;

    Ok(())
}
