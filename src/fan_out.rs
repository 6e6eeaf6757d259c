//! Per-season concurrent fetching.
//!
//! One worker task per season, all launched at once. Every worker runs to
//! completion even when a sibling has already failed; the batch is judged
//! only after the join. Failures go into an error queue sized to the worker
//! count, so a worker never waits to report.

use std::future::Future;
use std::sync::Arc;

use tokio::sync::mpsc;
use tokio::task::JoinSet;

use crate::client::FootballClient;
use crate::config::Subject;
use crate::error::{Error, FetchError};
use crate::types::*;

/// Fetches one payload per season and returns them in `seasons` order.
///
/// All-or-nothing: if any season failed, one of the collected errors (the
/// first to arrive) is returned and every fetched payload is dropped.
pub async fn fan_out<T, F, Fut>(seasons: &[Season], fetch: F) -> Result<Vec<T>, Error>
where
    F: Fn(Season) -> Fut,
    Fut: Future<Output = Result<T, FetchError>> + Send + 'static,
    T: Send + 'static,
{
    if seasons.is_empty() {
        return Ok(Vec::new());
    }

    let (err_tx, mut err_rx) = mpsc::channel::<FetchError>(seasons.len());
    let mut workers = JoinSet::new();

    for (index, &season) in seasons.iter().enumerate() {
        let task = fetch(season);
        let err_tx = err_tx.clone();
        workers.spawn(async move {
            match task.await {
                Ok(payload) => Some((index, payload)),
                Err(e) => {
                    // capacity equals the worker count, so this never fills up
                    let _ = err_tx.try_send(e.in_season(season));
                    None
                }
            }
        });
    }
    drop(err_tx);

    let mut slots: Vec<Option<T>> = std::iter::repeat_with(|| None).take(seasons.len()).collect();
    let mut crashed = None;
    while let Some(joined) = workers.join_next().await {
        match joined {
            Ok(Some((index, payload))) => slots[index] = Some(payload),
            Ok(None) => {}
            // dropping the JoinSet early would abort the remaining workers
            Err(e) => {
                crashed.get_or_insert(e);
            }
        }
    }

    if let Some(e) = crashed {
        return Err(e.into());
    }
    if let Ok(e) = err_rx.try_recv() {
        return Err(e.into());
    }

    Ok(slots.into_iter().flatten().collect())
}

/// Runs the season-parameterized resources of one club through [`fan_out`].
pub struct SeasonFetcher<C> {
    client: Arc<C>,
    team_id: i64,
    league_id: i64,
    seasons: Vec<Season>,
}

impl<C: FootballClient + 'static> SeasonFetcher<C> {
    pub fn new(client: Arc<C>, subject: &Subject) -> Self {
        Self {
            client,
            team_id: subject.team_id,
            league_id: subject.league_id,
            seasons: subject.seasons.clone(),
        }
    }

    pub fn seasons(&self) -> &[Season] {
        &self.seasons
    }

    pub async fn team_stats(&self) -> Result<Vec<TeamStatsResponse>, Error> {
        let (team_id, league_id) = (self.team_id, self.league_id);
        fan_out(&self.seasons, |season| {
            let client = Arc::clone(&self.client);
            async move { client.fetch_team_stats(team_id, league_id, season).await }
        })
        .await
    }

    pub async fn standings(&self) -> Result<Vec<StandingResponse>, Error> {
        let (team_id, league_id) = (self.team_id, self.league_id);
        fan_out(&self.seasons, |season| {
            let client = Arc::clone(&self.client);
            async move { client.fetch_standings(league_id, team_id, season).await }
        })
        .await
    }

    pub async fn fixtures(&self) -> Result<Vec<FixtureResponse>, Error> {
        let (team_id, league_id) = (self.team_id, self.league_id);
        fan_out(&self.seasons, |season| {
            let client = Arc::clone(&self.client);
            async move { client.fetch_fixtures(league_id, team_id, season).await }
        })
        .await
    }

    pub async fn injuries(&self) -> Result<Vec<InjuryResponse>, Error> {
        let team_id = self.team_id;
        fan_out(&self.seasons, |season| {
            let client = Arc::clone(&self.client);
            async move { client.fetch_injuries(team_id, season).await }
        })
        .await
    }
}

#[cfg(test)]
mod test {
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::time::Duration;

    use tokio::time::{sleep, timeout};

    use super::*;
    use crate::test_support::FakeClient;

    #[tokio::test]
    async fn keeps_season_order_when_later_seasons_finish_first() {
        let seasons = [2019, 2020, 2021, 2022, 2023];

        let results = fan_out(&seasons, |season| async move {
            // the last season resolves first, the first season last
            sleep(Duration::from_millis(((2024 - season) * 15) as u64)).await;
            Ok::<_, FetchError>(season * 10)
        })
        .await
        .unwrap();

        assert_eq!(results, vec![20190, 20200, 20210, 20220, 20230]);
    }

    #[tokio::test]
    async fn single_failure_discards_the_batch() {
        let seasons = [2021, 2022, 2023];

        let err = fan_out(&seasons, |season| async move {
            if season == 2022 {
                Err(FetchError::message("connection reset"))
            } else {
                Ok(season)
            }
        })
        .await
        .unwrap_err();

        match err {
            Error::Fetch(e) => assert_eq!(e.season(), Some(2022)),
            other => panic!("expected fetch error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn all_failures_return_an_error_without_hanging() {
        let seasons = [2021, 2022, 2023];

        let outcome = timeout(
            Duration::from_secs(5),
            fan_out(&seasons, |season| async move {
                sleep(Duration::from_millis(5)).await;
                Err::<(), _>(FetchError::message(format!("boom {season}")))
            }),
        )
        .await
        .expect("fan-out should finish");

        match outcome {
            Err(Error::Fetch(e)) => assert!(seasons.contains(&e.season().unwrap())),
            other => panic!("expected fetch error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn failure_does_not_cancel_slow_siblings() {
        let seasons = [2021, 2022, 2023];
        let finished = Arc::new(AtomicUsize::new(0));

        let result = fan_out(&seasons, |season| {
            let finished = Arc::clone(&finished);
            async move {
                if season == 2021 {
                    return Err(FetchError::message("fast failure"));
                }
                sleep(Duration::from_millis(40)).await;
                finished.fetch_add(1, Ordering::SeqCst);
                Ok(season)
            }
        })
        .await;

        assert!(result.is_err());
        assert_eq!(finished.load(Ordering::SeqCst), 2);
    }

    #[tokio::test]
    async fn panicking_worker_does_not_abort_siblings() {
        let seasons = [2021, 2022, 2023];
        let finished = Arc::new(AtomicUsize::new(0));

        let result = fan_out(&seasons, |season| {
            let finished = Arc::clone(&finished);
            async move {
                if season == 2022 {
                    panic!("worker for {season} crashed");
                }
                sleep(Duration::from_millis(100)).await;
                finished.fetch_add(1, Ordering::SeqCst);
                Ok::<_, FetchError>(season)
            }
        })
        .await;

        assert!(matches!(result, Err(Error::Worker(_))));
        assert_eq!(finished.load(Ordering::SeqCst), 2);
    }

    #[tokio::test]
    async fn empty_season_list_yields_empty_batch() {
        let results = fan_out(&[], |season| async move { Ok::<_, FetchError>(season) })
            .await
            .unwrap();
        assert!(results.is_empty());
    }

    #[tokio::test]
    async fn fetcher_substitutes_each_season() {
        let client = Arc::new(FakeClient::default());
        let subject = Subject {
            seasons: vec![2021, 2022],
            ..Subject::default()
        };
        let fetcher = SeasonFetcher::new(Arc::clone(&client), &subject);

        let stats = fetcher.team_stats().await.unwrap();

        let seasons: Vec<_> = stats.iter().map(|s| s.response.league.season).collect();
        assert_eq!(seasons, vec![2021, 2022]);
        assert!(stats.iter().all(|s| s.response.team.id == 33 && s.response.league.id == 39));
        assert_eq!(client.calls(), 2);
    }

    #[tokio::test]
    async fn fetcher_reports_failing_season() {
        let client = Arc::new(FakeClient::failing_in(2023));
        let fetcher = SeasonFetcher::new(client, &Subject::default());

        let err = fetcher.injuries().await.unwrap_err();

        assert_eq!(err.to_string(), "season 2023: simulated transport failure");
    }
}
