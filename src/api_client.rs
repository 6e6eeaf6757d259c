use std::fmt;

use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderValue};
use reqwest::StatusCode;
use serde::de::DeserializeOwned;
use tracing::debug;

use crate::client::FootballClient;
use crate::config::{ApiConfig, API_HOST};
use crate::error::{Error, FetchError};
use crate::types::*;

/// A logical upstream resource plus the integer parameters it needs.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Endpoint<'a> {
    Countries,
    Leagues { team_id: i64 },
    Team { team_id: i64 },
    Venues { country: &'a str },
    Squad { team_id: i64 },
    TeamStatistics { league_id: i64, team_id: i64, season: Season },
    Standings { league_id: i64, team_id: i64, season: Season },
    Fixtures { league_id: i64, team_id: i64, season: Season },
    Injuries { team_id: i64, season: Season },
}

impl Endpoint<'_> {
    pub fn path(&self) -> &'static str {
        match self {
            Endpoint::Countries => "/countries",
            Endpoint::Leagues { .. } => "/leagues",
            Endpoint::Team { .. } => "/teams",
            Endpoint::Venues { .. } => "/venues",
            Endpoint::Squad { .. } => "/players/squads",
            Endpoint::TeamStatistics { .. } => "/teams/statistics",
            Endpoint::Standings { .. } => "/standings",
            Endpoint::Fixtures { .. } => "/fixtures",
            Endpoint::Injuries { .. } => "/injuries",
        }
    }

    pub fn query(&self) -> Vec<(&'static str, String)> {
        match *self {
            Endpoint::Countries => vec![],
            Endpoint::Leagues { team_id } => vec![("team", team_id.to_string())],
            Endpoint::Team { team_id } => vec![("id", team_id.to_string())],
            Endpoint::Venues { country } => vec![("country", country.to_string())],
            Endpoint::Squad { team_id } => vec![("team", team_id.to_string())],
            Endpoint::TeamStatistics {
                league_id,
                team_id,
                season,
            } => vec![
                ("league", league_id.to_string()),
                ("team", team_id.to_string()),
                ("season", season.to_string()),
            ],
            Endpoint::Standings {
                league_id,
                team_id,
                season,
            }
            | Endpoint::Fixtures {
                league_id,
                team_id,
                season,
            } => vec![
                ("league", league_id.to_string()),
                ("season", season.to_string()),
                ("team", team_id.to_string()),
            ],
            Endpoint::Injuries { team_id, season } => vec![
                ("season", season.to_string()),
                ("team", team_id.to_string()),
            ],
        }
    }
}

impl fmt::Display for Endpoint<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.path())?;
        for (i, (key, value)) in self.query().iter().enumerate() {
            let sep = if i == 0 { '?' } else { '&' };
            write!(f, "{sep}{key}={value}")?;
        }
        Ok(())
    }
}

pub struct ApiFootballClient {
    client: reqwest::Client,
    base_url: String,
}

impl ApiFootballClient {
    pub fn new(config: &ApiConfig) -> Result<Self, Error> {
        let mut headers = HeaderMap::new();
        headers.insert("accept", HeaderValue::from_static("application/json"));
        headers.insert("x-rapidapi-key", HeaderValue::from_str(&config.api_key)?);
        headers.insert("x-rapidapi-host", HeaderValue::from_static(API_HOST));

        Ok(Self {
            client: reqwest::Client::builder()
                .default_headers(headers)
                .timeout(config.timeout)
                .build()
                .map_err(Error::Client)?,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    async fn get<T: DeserializeOwned>(&self, endpoint: Endpoint<'_>) -> Result<T, FetchError> {
        let target = endpoint.to_string();
        debug!(endpoint = %target, "upstream request");

        let response = self
            .client
            .get(format!("{}{}", self.base_url, endpoint.path()))
            .query(&endpoint.query())
            .send()
            .await?;

        if response.status() != StatusCode::OK {
            return Err(FetchError::status(&target, response.status()));
        }

        let body = response.bytes().await?;
        serde_json::from_slice(&body).map_err(|e| FetchError::decode(&target, e))
    }
}

#[async_trait]
impl FootballClient for ApiFootballClient {
    async fn fetch_countries(&self) -> Result<CountryResponse, FetchError> {
        self.get(Endpoint::Countries).await
    }

    async fn fetch_leagues(&self, team_id: i64) -> Result<LeagueResponse, FetchError> {
        self.get(Endpoint::Leagues { team_id }).await
    }

    async fn fetch_team(&self, team_id: i64) -> Result<TeamResponse, FetchError> {
        self.get(Endpoint::Team { team_id }).await
    }

    async fn fetch_venues(&self, country: &str) -> Result<VenueResponse, FetchError> {
        self.get(Endpoint::Venues { country }).await
    }

    async fn fetch_squad(&self, team_id: i64) -> Result<SquadResponse, FetchError> {
        self.get(Endpoint::Squad { team_id }).await
    }

    async fn fetch_team_stats(
        &self,
        team_id: i64,
        league_id: i64,
        season: Season,
    ) -> Result<TeamStatsResponse, FetchError> {
        self.get(Endpoint::TeamStatistics {
            league_id,
            team_id,
            season,
        })
        .await
    }

    async fn fetch_standings(
        &self,
        league_id: i64,
        team_id: i64,
        season: Season,
    ) -> Result<StandingResponse, FetchError> {
        self.get(Endpoint::Standings {
            league_id,
            team_id,
            season,
        })
        .await
    }

    async fn fetch_fixtures(
        &self,
        league_id: i64,
        team_id: i64,
        season: Season,
    ) -> Result<FixtureResponse, FetchError> {
        self.get(Endpoint::Fixtures {
            league_id,
            team_id,
            season,
        })
        .await
    }

    async fn fetch_injuries(
        &self,
        team_id: i64,
        season: Season,
    ) -> Result<InjuryResponse, FetchError> {
        self.get(Endpoint::Injuries { team_id, season }).await
    }
}
