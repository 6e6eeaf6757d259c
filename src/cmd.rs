use std::path::PathBuf;
use std::sync::Arc;

use clap::{Parser, Subcommand};
use serde::Serialize;
use tracing::info;

use crate::api_client::ApiFootballClient;
use crate::config::{parse_seasons, ApiConfig, Config};
use crate::importer::{ImportSummary, Importer};
use crate::query::{Provider, StatsKind};
use crate::store::RecordStore;
use crate::types::Season;

#[derive(Parser, Debug)]
#[command(about = "Import a club's football data for several seasons and query it")]
pub struct Args {
    /// Comma separated seasons, overrides SEASONS
    #[arg(long, global = true)]
    pub seasons: Option<String>,

    /// Record store directory, overrides DATA_DIR
    #[arg(long, global = true)]
    pub data_dir: Option<PathBuf>,

    #[command(subcommand)]
    pub cmd: Cmd,
}

#[derive(Subcommand, Debug)]
pub enum Cmd {
    FetchCountries,
    FetchLeagues,
    FetchTeam,
    FetchTeamStats,
    FetchVenues,
    FetchStandings,
    FetchFixtures,
    FetchInjuries,
    FetchSquad,
    /// Print stored data as JSON
    #[command(subcommand)]
    Show(Show),
    /// Delete every stored record
    Clear,
}

#[derive(Subcommand, Debug)]
pub enum Show {
    Countries,
    Country { name: String },
    Leagues,
    Team,
    TeamStats {
        #[arg(value_enum)]
        kind: StatsKind,
        season: Season,
    },
    Venues {
        #[arg(long)]
        city: Option<String>,
        /// Only the venues with the largest and smallest capacity
        #[arg(long, conflicts_with = "city")]
        extremes: bool,
    },
    Standings { season: Season },
    Fixtures { season: Season },
    Injuries {
        season: Season,
        /// Count injuries per player instead of listing them
        #[arg(long)]
        by_player: bool,
    },
    Squad,
}

fn print_json<T: Serialize>(value: &T) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

fn report(what: &str, summary: &ImportSummary) {
    for (table, count) in &summary.tables {
        println!("saved {count} {table} records");
    }
    if summary.seasons.is_empty() {
        println!("{what} saved");
    } else {
        println!("{what} saved for seasons {:?}", summary.seasons);
    }
}

impl Args {
    pub async fn run(self) -> anyhow::Result<()> {
        let mut config = Config::from_env()?;
        if let Some(seasons) = &self.seasons {
            config.subject.seasons = parse_seasons(seasons)?;
        }
        if let Some(data_dir) = self.data_dir {
            config.data_dir = data_dir;
        }
        let store = RecordStore::open(&config.data_dir)?;

        let cmd = match self.cmd {
            Cmd::Show(show) => return show.run(&Provider::new(&store, config.subject.team_id)),
            Cmd::Clear => {
                println!("deleting stored data in {}", store.base_path().display());
                store.clear()?;
                return Ok(());
            }
            cmd => cmd,
        };

        let client = Arc::new(ApiFootballClient::new(&ApiConfig::from_env()?)?);
        info!(
            team_id = config.subject.team_id,
            league_id = config.subject.league_id,
            seasons = ?config.subject.seasons,
            "starting import"
        );
        let importer = Importer::new(client, config.subject, store);

        let (what, summary) = match cmd {
            Cmd::FetchCountries => ("countries", importer.countries().await?),
            Cmd::FetchLeagues => ("leagues", importer.leagues().await?),
            Cmd::FetchTeam => ("team", importer.team().await?),
            Cmd::FetchTeamStats => ("team stats", importer.team_stats().await?),
            Cmd::FetchVenues => ("venues", importer.venues().await?),
            Cmd::FetchStandings => ("standings", importer.standings().await?),
            Cmd::FetchFixtures => ("fixtures", importer.fixtures().await?),
            Cmd::FetchInjuries => ("injuries", importer.injuries().await?),
            Cmd::FetchSquad => ("squad", importer.squad().await?),
            Cmd::Show(_) | Cmd::Clear => unreachable!("handled before the import"),
        };
        report(what, &summary);

        Ok(())
    }
}

impl Show {
    fn run(self, provider: &Provider<'_>) -> anyhow::Result<()> {
        match self {
            Show::Countries => print_json(&provider.countries()?),
            Show::Country { name } => print_json(&provider.country_by_name(&name)?),
            Show::Leagues => print_json(&provider.leagues()?),
            Show::Team => print_json(&provider.team()?),
            Show::TeamStats { kind, season } => print_json(&provider.team_stats(season, kind)?),
            Show::Venues { city: Some(city), .. } => print_json(&provider.venues_by_city(&city)?),
            Show::Venues { extremes: true, .. } => {
                print_json(&provider.venues_biggest_and_smallest()?)
            }
            Show::Venues { .. } => print_json(&provider.venues()?),
            Show::Standings { season } => print_json(&provider.standing(season)?),
            Show::Fixtures { season } => print_json(&provider.fixtures(season)?),
            Show::Injuries {
                season,
                by_player: true,
            } => {
                println!("Injuries | Player Name");
                for (player, count) in provider.injury_counts(season)? {
                    println!(" {count} | {player}");
                }
                Ok(())
            }
            Show::Injuries { season, .. } => print_json(&provider.injuries(season)?),
            Show::Squad => print_json(&provider.squad()?),
        }
    }
}
