use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use tracing::debug;

use crate::error::Result;

/// Static details about a driver, keyed by driver name.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DriverInfo {
    /// Race number
    pub number: u32,
    pub nationality: String,
    pub date_of_birth: String,
}

/// Static details about a team, keyed by team name.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TeamInfo {
    pub full_name: String,
    pub team_principal: String,
    /// Constructors' titles won before the dashboard's first season
    pub championships: u32,
}

#[derive(Deserialize)]
struct DriversDocument {
    drivers: BTreeMap<String, DriverInfo>,
}

#[derive(Deserialize)]
struct TeamsDocument {
    teams: BTreeMap<String, TeamInfo>,
}

/// Parse `{"drivers": {"<name>": {"number": 1, "nationality": "...", "dateOfBirth": "..."}}}`
pub fn parse_drivers(json: &str) -> Result<BTreeMap<String, DriverInfo>> {
    let document: DriversDocument = serde_json::from_str(json)?;
    debug!(drivers = document.drivers.len(), "Loaded driver metadata");
    Ok(document.drivers)
}

/// Parse `{"teams": {"<name>": {"fullName": "...", "teamPrincipal": "...", "championships": 0}}}`
pub fn parse_teams(json: &str) -> Result<BTreeMap<String, TeamInfo>> {
    let document: TeamsDocument = serde_json::from_str(json)?;
    debug!(teams = document.teams.len(), "Loaded team metadata");
    Ok(document.teams)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::SeasonError;

    #[test]
    fn test_parse_drivers() {
        let json = r#"{"drivers": {
            "Driver X": {"number": 44, "nationality": "GBR", "dateOfBirth": "1985-01-07"}
        }}"#;

        let drivers = parse_drivers(json).unwrap();
        let info = &drivers["Driver X"];
        assert_eq!(info.number, 44);
        assert_eq!(info.nationality, "GBR");
        assert_eq!(info.date_of_birth, "1985-01-07");
    }

    #[test]
    fn test_parse_teams() {
        let json = r#"{"teams": {
            "Ferrari": {"fullName": "Scuderia Ferrari", "teamPrincipal": "F. Vasseur", "championships": 16}
        }}"#;

        let teams = parse_teams(json).unwrap();
        assert_eq!(teams["Ferrari"].full_name, "Scuderia Ferrari");
        assert_eq!(teams["Ferrari"].championships, 16);
    }

    #[test]
    fn test_missing_root_key_is_parse_error() {
        assert!(matches!(parse_drivers(r#"{"teams": {}}"#), Err(SeasonError::Parse(_))));
        assert!(matches!(parse_teams("[]"), Err(SeasonError::Parse(_))));
    }
}
