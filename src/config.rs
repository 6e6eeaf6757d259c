use std::env;
use std::path::PathBuf;
use std::str::FromStr;
use std::time::Duration;

use crate::error::{EnvVarError, Error};
use crate::types::Season;

pub const DEFAULT_BASE_URL: &str = "https://v3.football.api-sports.io";
pub const API_HOST: &str = "v3.football.api-sports.io";
pub const DEFAULT_TIMEOUT_SECS: u64 = 15;
pub const DEFAULT_TEAM_ID: i64 = 33;
pub const DEFAULT_LEAGUE_ID: i64 = 39;
pub const DEFAULT_SEASONS: [Season; 3] = [2021, 2022, 2023];
pub const DEFAULT_VENUE_COUNTRY: &str = "england";

/// Upstream connection settings.
#[derive(Clone, Debug)]
pub struct ApiConfig {
    pub api_key: String,
    pub base_url: String,
    pub timeout: Duration,
}

/// Which club, competition and seasons get imported.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Subject {
    pub team_id: i64,
    pub league_id: i64,
    pub seasons: Vec<Season>,
    pub venue_country: String,
}

impl Default for Subject {
    fn default() -> Self {
        Self {
            team_id: DEFAULT_TEAM_ID,
            league_id: DEFAULT_LEAGUE_ID,
            seasons: DEFAULT_SEASONS.to_vec(),
            venue_country: DEFAULT_VENUE_COUNTRY.into(),
        }
    }
}

#[derive(Clone, Debug)]
pub struct Config {
    pub subject: Subject,
    pub data_dir: PathBuf,
}

impl ApiConfig {
    // requires API_KEY env var
    // can use dotenv
    pub fn from_env() -> Result<Self, Error> {
        Ok(Self {
            api_key: env::var("API_KEY").map_err(|e| EnvVarError::new("API_KEY", e))?,
            base_url: optional_var("BASE_URL").unwrap_or_else(|| DEFAULT_BASE_URL.into()),
            timeout: timeout_from_env()?,
        })
    }
}

fn timeout_from_env() -> Result<Duration, Error> {
    let secs = parsed_var("HTTP_TIMEOUT_SECS")?.unwrap_or(DEFAULT_TIMEOUT_SECS);
    Ok(Duration::from_secs(secs))
}

impl Config {
    pub fn from_env() -> Result<Self, Error> {
        let mut subject = Subject::default();
        if let Some(team_id) = parsed_var("TEAM_ID")? {
            subject.team_id = team_id;
        }
        if let Some(league_id) = parsed_var("LEAGUE_ID")? {
            subject.league_id = league_id;
        }
        if let Some(seasons) = optional_var("SEASONS") {
            subject.seasons = parse_seasons(&seasons)?;
        }
        if let Some(country) = optional_var("VENUE_COUNTRY") {
            subject.venue_country = country;
        }

        let data_dir = match optional_var("DATA_DIR") {
            Some(dir) => PathBuf::from(dir),
            None => default_data_dir()?,
        };

        Ok(Self { subject, data_dir })
    }
}

/// Parses a comma separated season list such as `2021,2022,2023`.
pub fn parse_seasons(raw: &str) -> Result<Vec<Season>, Error> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(|s| {
            s.parse::<Season>()
                .map_err(|_| Error::Config(format!("invalid season {s:?}")))
        })
        .collect()
}

fn optional_var(var: &str) -> Option<String> {
    env::var(var).ok().filter(|v| !v.trim().is_empty())
}

fn parsed_var<T: FromStr>(var: &str) -> Result<Option<T>, Error> {
    optional_var(var)
        .map(|raw| {
            raw.trim()
                .parse()
                .map_err(|_| Error::Config(format!("{var} is not a number: {raw:?}")))
        })
        .transpose()
}

fn default_data_dir() -> Result<PathBuf, Error> {
    let home = env::var("HOME").map_err(|e| EnvVarError::new("HOME", e))?;
    let mut base_path = PathBuf::from(home);
    base_path.push(".club_seasons");
    Ok(base_path)
}
