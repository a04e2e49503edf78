//! Season loading boundary.
//!
//! Season data comes in two shapes: one document per season with nested
//! race metadata, and a flat archive keyed by year then circuit. Both are
//! turned into validated [`Season`] values here, so the calculators only
//! ever see one shape.

use std::collections::BTreeMap;
use tracing::{debug, warn};

use crate::error::{Result, SeasonError};
use crate::metadata::{parse_drivers, parse_teams, DriverInfo, TeamInfo};
use crate::season::{Race, Season};

/// Parse a single-season document:
/// `{"season": 2027, "races": {"<circuit>": {"gpOrder": 1, "results": [...]}}}`
pub fn parse_season(json: &str) -> Result<Season> {
    let season: Season = serde_json::from_str(json)?;
    checked(season)
}

/// Parse a multi-season archive:
/// `{"2025": {"<circuit>": {"date": "...", "results": [...]}}, ...}`
///
/// Seasons come back oldest first.
pub fn parse_archive(json: &str) -> Result<Vec<Season>> {
    let archive: BTreeMap<String, BTreeMap<String, Race>> = serde_json::from_str(json)?;

    let mut seasons = Vec::with_capacity(archive.len());
    for (year, races) in archive {
        let year: u16 = year
            .trim()
            .parse()
            .map_err(|_| SeasonError::InvalidYear(year.clone()))?;
        seasons.push(checked(Season { year, races })?);
    }
    seasons.sort_by_key(|season| season.year);

    Ok(seasons)
}

fn checked(season: Season) -> Result<Season> {
    if let Err(err) = season.validate() {
        warn!(year = season.year, error = %err, "Rejected season data");
        return Err(err);
    }
    debug!(
        year = season.year,
        races = season.completed_races(),
        "Loaded season"
    );
    Ok(season)
}

/// The seasons available to the dashboard, keyed by year.
#[derive(Clone, Debug, Default)]
pub struct SeasonCatalog {
    seasons: BTreeMap<u16, Season>,
    drivers: BTreeMap<String, DriverInfo>,
    teams: BTreeMap<String, TeamInfo>,
}

impl SeasonCatalog {
    pub fn new() -> Self {
        SeasonCatalog::default()
    }

    /// Build a catalog from an archive document.
    pub fn from_archive(json: &str) -> Result<Self> {
        let mut catalog = SeasonCatalog::new();
        for season in parse_archive(json)? {
            catalog.insert(season);
        }
        Ok(catalog)
    }

    /// Add a season, replacing any season with the same year.
    pub fn insert(&mut self, season: Season) {
        self.seasons.insert(season.year, season);
    }

    /// Parse and add a single-season document.
    pub fn load_season(&mut self, json: &str) -> Result<u16> {
        let season = parse_season(json)?;
        let year = season.year;
        self.insert(season);
        Ok(year)
    }

    /// Parse and merge a driver metadata document. Returns the number of drivers read.
    pub fn load_drivers(&mut self, json: &str) -> Result<usize> {
        let drivers = parse_drivers(json)?;
        let count = drivers.len();
        self.drivers.extend(drivers);
        Ok(count)
    }

    /// Parse and merge a team metadata document. Returns the number of teams read.
    pub fn load_teams(&mut self, json: &str) -> Result<usize> {
        let teams = parse_teams(json)?;
        let count = teams.len();
        self.teams.extend(teams);
        Ok(count)
    }

    pub fn driver_info(&self, driver: &str) -> Option<&DriverInfo> {
        self.drivers.get(driver)
    }

    pub fn team_info(&self, team: &str) -> Option<&TeamInfo> {
        self.teams.get(team)
    }

    pub fn get(&self, year: u16) -> Result<&Season> {
        self.seasons
            .get(&year)
            .ok_or(SeasonError::SeasonNotFound(year))
    }

    pub fn is_available(&self, year: u16) -> bool {
        self.seasons.contains_key(&year)
    }

    /// Years on file, oldest first
    pub fn available_seasons(&self) -> Vec<u16> {
        self.seasons.keys().copied().collect()
    }

    pub fn latest_season(&self) -> Option<u16> {
        self.seasons.keys().next_back().copied()
    }

    /// Seasons oldest first, ready for the career summary
    pub fn seasons(&self) -> Vec<Season> {
        self.seasons.values().cloned().collect()
    }

    pub fn len(&self) -> usize {
        self.seasons.len()
    }

    pub fn is_empty(&self) -> bool {
        self.seasons.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::season::{PenaltyKind, ResultStatus};

    const NESTED: &str = r#"{
        "season": 2027,
        "races": {
            "Australia": {
                "gpOrder": 1,
                "polePosition": {"driver": "Driver X", "team": "Team A", "time": "1:15.096"},
                "results": [
                    {"position": 1, "driver": "Driver X", "team": "Team A", "fastestLap": true},
                    {"position": 2, "driver": "Driver Y", "team": "Team B",
                     "penalty": {"type": "time", "value": "5s", "reason": "Track limits"}},
                    {"position": 20, "driver": "Driver Z", "team": "Team C",
                     "status": "DNF", "dnfReason": "Engine"}
                ]
            }
        }
    }"#;

    const ARCHIVE: &str = r#"{
        "2026": {
            "Australia": {"date": "2026-03-15", "results": [
                {"position": 1, "driver": "Driver Y", "team": "Team B"},
                {"position": 2, "driver": "Driver X", "team": "Team A"}
            ]}
        },
        "2025": {
            "Australia": {"date": "2025-03-16", "results": [
                {"position": 1, "driver": "Driver X", "team": "Team A"}
            ]}
        }
    }"#;

    #[test]
    fn test_parse_nested_season() {
        let season = parse_season(NESTED).unwrap();
        assert_eq!(season.year, 2027);

        let race = &season.races["Australia"];
        assert_eq!(race.order, Some(1));
        assert_eq!(race.pole_position.as_ref().unwrap().driver, "Driver X");
        assert_eq!(race.results.len(), 3);
        assert_eq!(race.results[0].fastest_lap, Some(true));
        assert_eq!(
            race.results[1].penalty.as_ref().map(|p| p.kind),
            Some(PenaltyKind::Time)
        );
        assert_eq!(race.results[2].status, Some(ResultStatus::Dnf));
        assert_eq!(race.results[2].dnf_reason.as_deref(), Some("Engine"));
    }

    #[test]
    fn test_parse_archive_orders_by_year() {
        let seasons = parse_archive(ARCHIVE).unwrap();
        assert_eq!(seasons.len(), 2);
        assert_eq!(seasons[0].year, 2025);
        assert_eq!(seasons[1].year, 2026);
        assert_eq!(
            seasons[1].races["Australia"].date.as_deref(),
            Some("2026-03-15")
        );
    }

    #[test]
    fn test_malformed_json_is_parse_error() {
        assert!(matches!(parse_season("{not json"), Err(SeasonError::Parse(_))));
        assert!(matches!(
            parse_archive(r#"{"2025": []}"#),
            Err(SeasonError::Parse(_))
        ));
    }

    #[test]
    fn test_bad_year_rejected() {
        assert!(matches!(
            parse_archive(r#"{"next": {}}"#),
            Err(SeasonError::InvalidYear(_))
        ));
    }

    #[test]
    fn test_duplicate_position_rejected_at_load() {
        let json = r#"{"season": 2027, "races": {"Monaco": {"results": [
            {"position": 1, "driver": "A", "team": "T"},
            {"position": 1, "driver": "B", "team": "T"}
        ]}}}"#;
        assert!(matches!(
            parse_season(json),
            Err(SeasonError::DuplicatePosition { .. })
        ));
    }

    #[test]
    fn test_catalog() {
        let mut catalog = SeasonCatalog::from_archive(ARCHIVE).unwrap();
        assert_eq!(catalog.available_seasons(), vec![2025, 2026]);

        let year = catalog.load_season(NESTED).unwrap();
        assert_eq!(year, 2027);
        assert_eq!(catalog.latest_season(), Some(2027));
        assert!(catalog.is_available(2026));
        assert_eq!(catalog.len(), 3);
        assert_eq!(catalog.get(2025).unwrap().completed_races(), 1);
        assert!(matches!(
            catalog.get(2030),
            Err(SeasonError::SeasonNotFound(2030))
        ));

        let years: Vec<u16> = catalog.seasons().iter().map(|s| s.year).collect();
        assert_eq!(years, vec![2025, 2026, 2027]);
    }

    #[test]
    fn test_catalog_metadata() {
        let mut catalog = SeasonCatalog::new();
        let drivers = catalog
            .load_drivers(
                r#"{"drivers": {"Driver X": {"number": 1, "nationality": "NED", "dateOfBirth": "1997-09-30"}}}"#,
            )
            .unwrap();
        let teams = catalog
            .load_teams(
                r#"{"teams": {"Team A": {"fullName": "Team A Racing", "teamPrincipal": "C. Horner", "championships": 6}}}"#,
            )
            .unwrap();

        assert_eq!((drivers, teams), (1, 1));
        assert_eq!(catalog.driver_info("Driver X").map(|d| d.number), Some(1));
        assert_eq!(
            catalog.team_info("Team A").map(|t| t.full_name.as_str()),
            Some("Team A Racing")
        );
        assert!(catalog.driver_info("Nobody").is_none());
        assert!(catalog.team_info("Nobody").is_none());
        assert!(catalog.is_empty());
    }

    #[test]
    fn test_empty_catalog() {
        let catalog = SeasonCatalog::new();
        assert!(catalog.is_empty());
        assert_eq!(catalog.latest_season(), None);
    }
}
