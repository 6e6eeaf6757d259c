//! Fetch, normalize and persist, one resource at a time.
//!
//! A batch reaches the store only after every season was fetched and
//! normalized, so a failed season leaves the store untouched. Team stats and
//! their lineups are committed as one store batch.

use std::sync::Arc;

use tracing::info;

use crate::client::FootballClient;
use crate::config::Subject;
use crate::error::Error;
use crate::fan_out::SeasonFetcher;
use crate::normalize;
use crate::records::{LineupRecord, TeamStatsRecord};
use crate::store::{Record, RecordStore};
use crate::types::Season;

/// Rows written to each table by one import.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ImportSummary {
    pub seasons: Vec<Season>,
    pub tables: Vec<(&'static str, usize)>,
}

impl ImportSummary {
    fn new(seasons: &[Season]) -> Self {
        Self {
            seasons: seasons.to_vec(),
            tables: Vec::new(),
        }
    }

    fn written<R: Record>(mut self, count: usize) -> Self {
        self.tables.push((R::TABLE, count));
        self
    }

    pub fn rows(&self, table: &str) -> usize {
        self.tables
            .iter()
            .filter(|(name, _)| *name == table)
            .map(|(_, count)| count)
            .sum()
    }
}

pub struct Importer<C> {
    client: Arc<C>,
    fetcher: SeasonFetcher<C>,
    subject: Subject,
    store: RecordStore,
}

impl<C: FootballClient + 'static> Importer<C> {
    pub fn new(client: Arc<C>, subject: Subject, store: RecordStore) -> Self {
        Self {
            fetcher: SeasonFetcher::new(Arc::clone(&client), &subject),
            client,
            subject,
            store,
        }
    }

    pub fn store(&self) -> &RecordStore {
        &self.store
    }

    fn persist<R: Record>(&self, summary: ImportSummary, records: &[R]) -> Result<ImportSummary, Error> {
        let count = self.store.insert(records)?;
        info!(table = R::TABLE, count, "stored records");
        Ok(summary.written::<R>(count))
    }

    pub async fn countries(&self) -> Result<ImportSummary, Error> {
        let response = self.client.fetch_countries().await?;
        let records = normalize::countries(&response);
        self.persist(ImportSummary::default(), &records)
    }

    pub async fn leagues(&self) -> Result<ImportSummary, Error> {
        let team_id = self.subject.team_id;
        let response = self.client.fetch_leagues(team_id).await?;
        let records = normalize::leagues(&response, team_id);
        self.persist(ImportSummary::default(), &records)
    }

    pub async fn team(&self) -> Result<ImportSummary, Error> {
        let response = self.client.fetch_team(self.subject.team_id).await?;
        let records = normalize::teams(&response);
        self.persist(ImportSummary::default(), &records)
    }

    pub async fn venues(&self) -> Result<ImportSummary, Error> {
        let response = self.client.fetch_venues(&self.subject.venue_country).await?;
        let records = normalize::venues(&response);
        self.persist(ImportSummary::default(), &records)
    }

    pub async fn squad(&self) -> Result<ImportSummary, Error> {
        let response = self.client.fetch_squad(self.subject.team_id).await?;
        let records = normalize::squad(&response);
        self.persist(ImportSummary::default(), &records)
    }

    pub async fn team_stats(&self) -> Result<ImportSummary, Error> {
        let responses = self.fetcher.team_stats().await?;

        let mut stats = Vec::with_capacity(responses.len());
        let mut lineups: Vec<LineupRecord> = Vec::new();
        for response in &responses {
            let (record, season_lineups) = normalize::team_stats(response);
            stats.push(record);
            lineups.extend(season_lineups);
        }

        let mut batch = self.store.batch();
        let stats_count = batch.stage(&stats)?;
        let lineup_count = batch.stage(&lineups)?;
        batch.commit()?;
        info!(table = TeamStatsRecord::TABLE, count = stats_count, "stored records");
        info!(table = LineupRecord::TABLE, count = lineup_count, "stored records");

        Ok(ImportSummary::new(self.fetcher.seasons())
            .written::<TeamStatsRecord>(stats_count)
            .written::<LineupRecord>(lineup_count))
    }

    pub async fn standings(&self) -> Result<ImportSummary, Error> {
        let responses = self.fetcher.standings().await?;
        let records: Vec<_> = responses.iter().flat_map(normalize::standings).collect();
        self.persist(ImportSummary::new(self.fetcher.seasons()), &records)
    }

    pub async fn fixtures(&self) -> Result<ImportSummary, Error> {
        let responses = self.fetcher.fixtures().await?;
        let records: Vec<_> = responses.iter().flat_map(normalize::fixtures).collect();
        self.persist(ImportSummary::new(self.fetcher.seasons()), &records)
    }

    pub async fn injuries(&self) -> Result<ImportSummary, Error> {
        let responses = self.fetcher.injuries().await?;
        let records: Vec<_> = responses.iter().flat_map(normalize::injuries).collect();
        self.persist(ImportSummary::new(self.fetcher.seasons()), &records)
    }
}
