//! Response shapes of the upstream football API.
//!
//! Fields the provider may send as `null` are `Option`s; the normalizer
//! resolves them to concrete defaults. Every struct defaults missing keys.

use serde::{Deserialize, Serialize};

pub type Season = i64;

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CountryResponse {
    pub results: i64,
    pub response: Vec<Country>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Country {
    pub name: String,
    pub code: Option<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LeagueResponse {
    pub results: i64,
    pub response: Vec<LeagueEntry>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LeagueEntry {
    pub league: LeagueInfo,
    pub country: Country,
    pub seasons: Vec<LeagueSeason>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LeagueInfo {
    pub id: i64,
    pub name: String,
    #[serde(rename = "type")]
    pub kind: String,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LeagueSeason {
    pub year: Season,
    pub start: String,
    pub end: String,
    pub current: bool,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TeamResponse {
    pub results: i64,
    pub response: Vec<TeamEntry>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TeamEntry {
    pub team: TeamInfo,
    pub venue: Venue,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TeamInfo {
    pub id: i64,
    pub name: String,
    pub code: Option<String>,
    pub country: Option<String>,
    pub founded: Option<i64>,
    pub national: bool,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Venue {
    pub id: Option<i64>,
    pub name: Option<String>,
    pub address: Option<String>,
    pub city: Option<String>,
    pub capacity: Option<i64>,
    pub surface: Option<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct VenueResponse {
    pub results: i64,
    pub response: Vec<Venue>,
}

// team statistics

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TeamStatsResponse {
    pub results: i64,
    pub response: TeamStats,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TeamStats {
    pub league: StatsLeague,
    pub team: StatsTeam,
    pub form: Option<String>,
    pub fixtures: FixtureTally,
    pub goals: Goals,
    pub biggest: Biggest,
    pub clean_sheet: HomeAwayTotal,
    pub failed_to_score: HomeAwayTotal,
    pub penalty: Penalty,
    pub lineups: Vec<Lineup>,
    pub cards: Cards,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StatsLeague {
    pub id: i64,
    pub name: String,
    pub country: String,
    pub season: Season,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StatsTeam {
    pub id: i64,
    pub name: String,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HomeAwayTotal {
    pub home: Option<i64>,
    pub away: Option<i64>,
    pub total: Option<i64>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FixtureTally {
    pub played: HomeAwayTotal,
    pub wins: HomeAwayTotal,
    pub draws: HomeAwayTotal,
    pub loses: HomeAwayTotal,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Goals {
    #[serde(rename = "for")]
    pub scored: GoalsSide,
    pub against: GoalsSide,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GoalsSide {
    pub total: HomeAwayTotal,
    pub average: GoalsAverage,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GoalsAverage {
    pub home: Option<String>,
    pub away: Option<String>,
    pub total: Option<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Biggest {
    pub streak: Streak,
    pub wins: HomeAwayText,
    pub loses: HomeAwayText,
    pub goals: BiggestGoals,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Streak {
    pub wins: Option<i64>,
    pub draws: Option<i64>,
    pub loses: Option<i64>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HomeAwayText {
    pub home: Option<String>,
    pub away: Option<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BiggestGoals {
    #[serde(rename = "for")]
    pub scored: HomeAwayTotal,
    pub against: HomeAwayTotal,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Penalty {
    pub scored: PenaltyDetail,
    pub missed: PenaltyDetail,
    pub total: Option<i64>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PenaltyDetail {
    pub total: Option<i64>,
    pub percentage: Option<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Lineup {
    pub formation: String,
    pub played: i64,
}

/// Count of cards shown within one match-minute range.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MinuteBucket {
    pub total: Option<i64>,
    pub percentage: Option<String>,
}

impl MinuteBucket {
    pub fn count(total: Option<i64>) -> Self {
        Self {
            total,
            percentage: None,
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CardDistribution {
    #[serde(rename = "0-15")]
    pub m0_15: MinuteBucket,
    #[serde(rename = "16-30")]
    pub m16_30: MinuteBucket,
    #[serde(rename = "31-45")]
    pub m31_45: MinuteBucket,
    #[serde(rename = "46-60")]
    pub m46_60: MinuteBucket,
    #[serde(rename = "61-75")]
    pub m61_75: MinuteBucket,
    #[serde(rename = "76-90")]
    pub m76_90: MinuteBucket,
    #[serde(rename = "91-105")]
    pub m91_105: MinuteBucket,
    #[serde(rename = "106-120")]
    pub m106_120: MinuteBucket,
}

impl CardDistribution {
    pub fn buckets(&self) -> [&MinuteBucket; 8] {
        [
            &self.m0_15,
            &self.m16_30,
            &self.m31_45,
            &self.m46_60,
            &self.m61_75,
            &self.m76_90,
            &self.m91_105,
            &self.m106_120,
        ]
    }
}

impl From<[Option<i64>; 8]> for CardDistribution {
    fn from(counts: [Option<i64>; 8]) -> Self {
        let [a, b, c, d, e, f, g, h] = counts.map(MinuteBucket::count);
        Self {
            m0_15: a,
            m16_30: b,
            m31_45: c,
            m46_60: d,
            m61_75: e,
            m76_90: f,
            m91_105: g,
            m106_120: h,
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Cards {
    pub yellow: CardDistribution,
    pub red: CardDistribution,
}

// standings

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StandingResponse {
    pub response: Vec<StandingWrapper>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StandingWrapper {
    pub league: StandingLeague,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StandingLeague {
    pub id: i64,
    pub name: String,
    pub country: String,
    pub season: Season,
    /// Groups of table rows; a plain league has a single group.
    pub standings: Vec<Vec<StandingEntry>>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StandingEntry {
    pub rank: i64,
    pub team: StandingTeam,
    pub points: i64,
    #[serde(rename = "goalsDiff")]
    pub goals_diff: i64,
    pub group: Option<String>,
    pub form: Option<String>,
    pub status: Option<String>,
    pub description: Option<String>,
    pub all: StandingTally,
    pub home: StandingTally,
    pub away: StandingTally,
    pub update: Option<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StandingTeam {
    pub id: i64,
    pub name: String,
    pub logo: Option<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StandingTally {
    pub played: Option<i64>,
    pub win: Option<i64>,
    pub draw: Option<i64>,
    pub lose: Option<i64>,
    pub goals: StandingGoals,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StandingGoals {
    #[serde(rename = "for")]
    pub scored: Option<i64>,
    pub against: Option<i64>,
}

// fixtures

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FixtureResponse {
    pub response: Vec<FixtureEntry>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FixtureEntry {
    pub fixture: FixtureInfo,
    pub league: FixtureLeague,
    pub teams: FixtureTeams,
    pub goals: ScorePair,
    pub score: FixtureScore,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FixtureInfo {
    pub id: i64,
    pub referee: Option<String>,
    pub timezone: String,
    pub date: String,
    pub timestamp: i64,
    pub periods: FixturePeriods,
    pub venue: FixtureVenue,
    pub status: FixtureStatus,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FixturePeriods {
    pub first: Option<i64>,
    pub second: Option<i64>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FixtureVenue {
    pub id: Option<i64>,
    pub name: Option<String>,
    pub city: Option<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FixtureStatus {
    pub long: String,
    pub short: String,
    pub elapsed: Option<i64>,
    pub extra: Option<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FixtureLeague {
    pub id: i64,
    pub name: String,
    pub country: String,
    pub logo: Option<String>,
    pub flag: Option<String>,
    pub season: Season,
    pub round: String,
    pub standings: Option<bool>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FixtureTeams {
    pub home: FixtureTeam,
    pub away: FixtureTeam,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FixtureTeam {
    pub id: i64,
    pub name: String,
    pub logo: Option<String>,
    pub winner: Option<bool>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScorePair {
    pub home: Option<i64>,
    pub away: Option<i64>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FixtureScore {
    pub halftime: ScorePair,
    pub fulltime: ScorePair,
    pub extratime: ScorePair,
    pub penalty: ScorePair,
}

// injuries

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct InjuryResponse {
    pub response: Vec<InjuryEntry>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct InjuryEntry {
    pub player: InjuredPlayer,
    pub team: InjuryTeam,
    pub fixture: InjuryFixture,
    pub league: InjuryLeague,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct InjuredPlayer {
    pub id: i64,
    pub name: String,
    pub photo: Option<String>,
    #[serde(rename = "type")]
    pub kind: Option<String>,
    pub reason: Option<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct InjuryTeam {
    pub id: i64,
    pub name: String,
    pub logo: Option<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct InjuryFixture {
    pub id: i64,
    pub timezone: String,
    pub date: String,
    pub timestamp: i64,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct InjuryLeague {
    pub id: i64,
    pub season: Season,
    pub name: String,
    pub country: String,
    pub logo: Option<String>,
    pub flag: Option<String>,
}

// squad

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SquadResponse {
    pub response: Vec<SquadEntry>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SquadEntry {
    pub team: SquadTeam,
    pub players: Vec<SquadPlayer>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SquadTeam {
    pub id: i64,
    pub name: String,
    pub logo: Option<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SquadPlayer {
    pub id: i64,
    pub name: String,
    pub age: Option<i64>,
    pub number: Option<i64>,
    pub position: Option<String>,
    pub photo: Option<String>,
}
