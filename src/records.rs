//! Flat, storage-ready records produced by the normalizer.
//! None of these carry optional fields.

use serde::{Deserialize, Serialize};

use crate::store::Record;
use crate::types::Season;

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CountryRecord {
    pub name: String,
    pub code: String,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeagueRecord {
    pub league_id: i64,
    pub name: String,
    pub kind: String,
    pub country: String,
    pub country_code: String,
    pub year: Season,
    pub start: String,
    pub end: String,
    pub current: bool,
    pub team_id: i64,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TeamRecord {
    pub team_id: i64,
    pub team_name: String,
    pub code: String,
    pub country: String,
    pub founded: i64,
    pub national: bool,
    pub venue_id: i64,
    pub venue_name: String,
    pub address: String,
    pub city: String,
    pub capacity: i64,
    pub surface: String,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct VenueRecord {
    pub venue_id: i64,
    pub venue_name: String,
    pub address: String,
    pub city: String,
    pub capacity: i64,
    pub surface: String,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TeamStatsRecord {
    pub team_id: i64,
    pub team_name: String,
    pub league_id: i64,
    pub league_name: String,
    pub country: String,
    pub season: Season,
    pub form: String,

    pub played_home: i64,
    pub played_away: i64,
    pub played_total: i64,
    pub wins_home: i64,
    pub wins_away: i64,
    pub wins_total: i64,
    pub draws_home: i64,
    pub draws_away: i64,
    pub draws_total: i64,
    pub loses_home: i64,
    pub loses_away: i64,
    pub loses_total: i64,

    pub goals_for_home: i64,
    pub goals_for_away: i64,
    pub goals_for_total: i64,
    pub goals_against_home: i64,
    pub goals_against_away: i64,
    pub goals_against_total: i64,

    pub goals_for_avg_home: String,
    pub goals_for_avg_away: String,
    pub goals_for_avg_total: String,
    pub goals_against_avg_home: String,
    pub goals_against_avg_away: String,
    pub goals_against_avg_total: String,

    pub streak_wins: i64,
    pub streak_draws: i64,
    pub streak_loses: i64,
    pub biggest_win_home: String,
    pub biggest_win_away: String,
    pub biggest_lose_home: String,
    pub biggest_lose_away: String,
    pub biggest_goals_for_home: i64,
    pub biggest_goals_for_away: i64,
    pub biggest_goals_against_home: i64,
    pub biggest_goals_against_away: i64,

    pub clean_sheet_home: i64,
    pub clean_sheet_away: i64,
    pub clean_sheet_total: i64,
    pub failed_to_score_home: i64,
    pub failed_to_score_away: i64,
    pub failed_to_score_total: i64,

    pub penalty_scored_total: i64,
    pub penalty_scored_pct: String,
    pub penalty_missed_total: i64,
    pub penalty_missed_pct: String,
    pub penalty_total: i64,

    /// Sum of the eight minute-range buckets.
    pub yellow_cards_total: i64,
    pub red_cards_total: i64,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineupRecord {
    pub team_id: i64,
    pub season: Season,
    pub formation: String,
    pub played: i64,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StandingRecord {
    pub league_id: i64,
    pub league_name: String,
    pub country: String,
    pub season: Season,

    pub team_id: i64,
    pub team_name: String,
    pub team_logo: String,
    pub rank: i64,
    pub points: i64,
    pub goals_diff: i64,
    pub group_name: String,
    pub form: String,
    pub status: String,
    pub description: String,

    pub played_all: i64,
    pub wins_all: i64,
    pub draws_all: i64,
    pub loses_all: i64,
    pub goals_for_all: i64,
    pub goals_against_all: i64,

    pub played_home: i64,
    pub wins_home: i64,
    pub draws_home: i64,
    pub loses_home: i64,
    pub goals_for_home: i64,
    pub goals_against_home: i64,

    pub played_away: i64,
    pub wins_away: i64,
    pub draws_away: i64,
    pub loses_away: i64,
    pub goals_for_away: i64,
    pub goals_against_away: i64,

    pub updated_at: String,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FixtureRecord {
    pub fixture_id: i64,
    pub referee: String,
    pub timezone: String,
    pub date: String,
    pub timestamp: i64,
    pub period_first: i64,
    pub period_second: i64,

    pub venue_id: i64,
    pub venue_name: String,
    pub venue_city: String,

    pub status_long: String,
    pub status_short: String,
    pub status_elapsed: i64,
    pub status_extra: String,

    pub league_id: i64,
    pub league_name: String,
    pub country: String,
    pub league_logo: String,
    pub league_flag: String,
    pub season: Season,
    pub round: String,
    pub standings: bool,

    pub home_team_id: i64,
    pub home_team_name: String,
    pub home_team_logo: String,
    pub home_winner: bool,
    pub away_team_id: i64,
    pub away_team_name: String,
    pub away_team_logo: String,
    pub away_winner: bool,

    pub goals_home: i64,
    pub goals_away: i64,
    pub halftime_home: i64,
    pub halftime_away: i64,
    pub fulltime_home: i64,
    pub fulltime_away: i64,
    pub extratime_home: i64,
    pub extratime_away: i64,
    pub penalty_home: i64,
    pub penalty_away: i64,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct InjuryRecord {
    pub player_id: i64,
    pub player_name: String,
    pub player_photo: String,
    pub kind: String,
    pub reason: String,

    pub team_id: i64,
    pub team_name: String,
    pub team_logo: String,

    pub fixture_id: i64,
    pub fixture_date: String,
    pub fixture_timestamp: i64,
    pub fixture_timezone: String,

    pub league_id: i64,
    pub league_name: String,
    pub country: String,
    pub season: Season,
    pub league_logo: String,
    pub flag: String,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SquadRecord {
    pub team_id: i64,
    pub team_name: String,
    pub team_logo: String,
    pub player_id: i64,
    pub player_name: String,
    pub age: i64,
    pub number: i64,
    pub position: String,
    pub player_photo: String,
}

impl Record for CountryRecord {
    const TABLE: &'static str = "countries";
}
impl Record for LeagueRecord {
    const TABLE: &'static str = "leagues";
}
impl Record for TeamRecord {
    const TABLE: &'static str = "teams";
}
impl Record for VenueRecord {
    const TABLE: &'static str = "venues";
}
impl Record for TeamStatsRecord {
    const TABLE: &'static str = "team_stats";
}
impl Record for LineupRecord {
    const TABLE: &'static str = "lineups";
}
impl Record for StandingRecord {
    const TABLE: &'static str = "standings";
}
impl Record for FixtureRecord {
    const TABLE: &'static str = "fixtures";
}
impl Record for InjuryRecord {
    const TABLE: &'static str = "injuries";
}
impl Record for SquadRecord {
    const TABLE: &'static str = "squad";
}
