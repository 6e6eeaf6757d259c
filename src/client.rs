use async_trait::async_trait;

use crate::error::FetchError;
use crate::types::*;

/// Upstream football data source. One call is one request; nothing is
/// retried.
#[async_trait]
pub trait FootballClient: Send + Sync {
    async fn fetch_countries(&self) -> Result<CountryResponse, FetchError>;
    async fn fetch_leagues(&self, team_id: i64) -> Result<LeagueResponse, FetchError>;
    async fn fetch_team(&self, team_id: i64) -> Result<TeamResponse, FetchError>;
    async fn fetch_venues(&self, country: &str) -> Result<VenueResponse, FetchError>;
    async fn fetch_squad(&self, team_id: i64) -> Result<SquadResponse, FetchError>;

    async fn fetch_team_stats(
        &self,
        team_id: i64,
        league_id: i64,
        season: Season,
    ) -> Result<TeamStatsResponse, FetchError>;
    async fn fetch_standings(
        &self,
        league_id: i64,
        team_id: i64,
        season: Season,
    ) -> Result<StandingResponse, FetchError>;
    async fn fetch_fixtures(
        &self,
        league_id: i64,
        team_id: i64,
        season: Season,
    ) -> Result<FixtureResponse, FetchError>;
    async fn fetch_injuries(
        &self,
        team_id: i64,
        season: Season,
    ) -> Result<InjuryResponse, FetchError>;
}
