/// Points awarded for finishing positions 1 through 10
pub const POINTS_TABLE: [u32; 10] = [25, 18, 15, 12, 10, 8, 6, 4, 2, 1];

/// Lowest finishing position that still counts as a podium
pub const PODIUM_CUTOFF: u32 = 3;

/// Number of entries kept in each all-time leaderboard
pub const HALL_OF_FAME_SIZE: usize = 10;

/// Championship calendar in running order
pub const DEFAULT_CALENDAR: [&str; 24] = [
    "Australia",
    "China",
    "Japan",
    "Saudi Arabia",
    "Russia",
    "Azerbaijan",
    "Italy (Imola)",
    "Monaco",
    "Portugal",
    "Canada",
    "Great Britain",
    "Hungary",
    "Belgium",
    "Netherlands",
    "Germany",
    "Monza (Italy)",
    "South Africa",
    "Singapore",
    "Phoenix",
    "Las Vegas",
    "Brazil",
    "Spain",
    "United Arab Emirates",
    "Qatar",
];

/// Points for a finishing position. Anything outside 1..=10 scores nothing.
pub fn points_for_position(position: u32) -> u32 {
    match position {
        1..=10 => POINTS_TABLE[(position - 1) as usize],
        _ => 0,
    }
}
