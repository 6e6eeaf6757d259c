//! Read-side projections over stored records.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::error::Error;
use crate::records::*;
use crate::store::RecordStore;
use crate::types::Season;

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct CountryView {
    pub name: String,
    pub code: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct LeagueView {
    pub name: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub country: String,
    pub year: Season,
    pub start: String,
    pub end: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct TeamView {
    pub name: String,
    pub code: String,
    pub country: String,
    pub founded: i64,
    pub venue_name: String,
    pub address: String,
    pub city: String,
    pub capacity: i64,
    pub surface: String,
}

/// Header shared by every team-stats section.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct SeasonHeader {
    pub name: String,
    pub league: String,
    pub season: Season,
    pub form: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Tally {
    pub home: i64,
    pub away: i64,
    pub total: i64,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct HomeAway<T> {
    pub home: T,
    pub away: T,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(tag = "section", rename_all = "snake_case")]
pub enum StatsSection {
    Games {
        played: Tally,
        wins: Tally,
        draws: Tally,
        loses: Tally,
    },
    Goals {
        scored: Tally,
        conceded: Tally,
        scored_avg: HomeAway<String>,
        scored_avg_total: String,
        conceded_avg: HomeAway<String>,
        conceded_avg_total: String,
    },
    Streak {
        wins: i64,
        draws: i64,
        loses: i64,
    },
    Biggest {
        win: HomeAway<String>,
        lose: HomeAway<String>,
        goals_for: HomeAway<i64>,
        goals_against: HomeAway<i64>,
    },
    CleanSheet(Tally),
    FailedToScore(Tally),
    Penalty {
        scored_total: i64,
        scored_percentage: String,
        missed_total: i64,
        missed_percentage: String,
        total: i64,
    },
    Cards {
        yellow_total: i64,
        red_total: i64,
    },
    Lineups {
        lineups: Vec<LineupView>,
    },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, clap::ValueEnum)]
pub enum StatsKind {
    Games,
    Goals,
    Streak,
    Biggest,
    CleanSheet,
    FailedToScore,
    Penalty,
    Cards,
    Lineups,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct LineupView {
    pub formation: String,
    pub played: i64,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct TeamStatsView {
    pub team: SeasonHeader,
    #[serde(flatten)]
    pub section: StatsSection,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct VenueView {
    pub id: i64,
    pub name: String,
    pub address: String,
    pub city: String,
    pub capacity: i64,
    pub surface: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct StandingView {
    pub league_name: String,
    pub season: Season,
    pub team_name: String,
    pub rank: i64,
    pub points: i64,
    pub goals_diff: i64,
    pub description: String,
    pub all: StandingSplit,
    pub home: StandingSplit,
    pub away: StandingSplit,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct StandingSplit {
    pub played: i64,
    pub wins: i64,
    pub draws: i64,
    pub loses: i64,
    pub goals_for: i64,
    pub goals_against: i64,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct FixtureView {
    pub referee: String,
    pub date: String,
    pub venue_name: String,
    pub venue_city: String,
    pub status_long: String,
    pub status_short: String,
    pub status_elapsed: i64,
    pub status_extra: String,
    pub league_name: String,
    pub country: String,
    pub season: Season,
    pub round: String,
    pub home_team_name: String,
    pub home_winner: bool,
    pub away_team_name: String,
    pub away_winner: bool,
    pub goals_home: i64,
    pub goals_away: i64,
    pub half_time: HomeAway<i64>,
    pub full_time: HomeAway<i64>,
    pub extra_time: HomeAway<i64>,
    pub penalty: HomeAway<i64>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct InjuryView {
    pub player_name: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub reason: String,
    pub fixture_date: String,
    pub league_name: String,
    pub country: String,
    pub season: Season,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct InjuryList {
    pub count: usize,
    pub injuries: Vec<InjuryView>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct SquadView {
    pub squad_depth: usize,
    pub footballers: Vec<FootballerView>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct FootballerView {
    pub player_name: String,
    pub age: i64,
    pub number: i64,
    pub position: String,
}

/// Answers questions about the imported club from the record store.
pub struct Provider<'a> {
    store: &'a RecordStore,
    team_id: i64,
}

impl<'a> Provider<'a> {
    pub fn new(store: &'a RecordStore, team_id: i64) -> Self {
        Self { store, team_id }
    }

    pub fn countries(&self) -> Result<Vec<CountryView>, Error> {
        Ok(self
            .store
            .load::<CountryRecord>()?
            .into_iter()
            .map(|c| CountryView {
                name: c.name,
                code: c.code,
            })
            .collect())
    }

    pub fn country_by_name(&self, name: &str) -> Result<CountryView, Error> {
        self.countries()?
            .into_iter()
            .find(|c| c.name.eq_ignore_ascii_case(name))
            .ok_or_else(|| Error::not_found(format!("country {name:?} not found")))
    }

    pub fn leagues(&self) -> Result<Vec<LeagueView>, Error> {
        Ok(self
            .store
            .load::<LeagueRecord>()?
            .into_iter()
            .filter(|l| l.team_id == self.team_id)
            .map(|l| LeagueView {
                name: l.name,
                kind: l.kind,
                country: l.country,
                year: l.year,
                start: l.start,
                end: l.end,
            })
            .collect())
    }

    pub fn team(&self) -> Result<TeamView, Error> {
        let team = self
            .store
            .load::<TeamRecord>()?
            .into_iter()
            .find(|t| t.team_id == self.team_id)
            .ok_or_else(|| Error::not_found(format!("team {} not found", self.team_id)))?;

        Ok(TeamView {
            name: team.team_name,
            code: team.code,
            country: team.country,
            founded: team.founded,
            venue_name: team.venue_name,
            address: team.address,
            city: team.city,
            capacity: team.capacity,
            surface: team.surface,
        })
    }

    fn season_stats(&self, season: Season) -> Result<TeamStatsRecord, Error> {
        self.store
            .load::<TeamStatsRecord>()?
            .into_iter()
            .find(|s| s.season == season && s.team_id == self.team_id)
            .ok_or_else(|| Error::not_found(format!("team stats for season {season} not found")))
    }

    pub fn team_stats(&self, season: Season, kind: StatsKind) -> Result<TeamStatsView, Error> {
        let s = self.season_stats(season)?;

        let section = match kind {
            StatsKind::Games => StatsSection::Games {
                played: Tally {
                    home: s.played_home,
                    away: s.played_away,
                    total: s.played_total,
                },
                wins: Tally {
                    home: s.wins_home,
                    away: s.wins_away,
                    total: s.wins_total,
                },
                draws: Tally {
                    home: s.draws_home,
                    away: s.draws_away,
                    total: s.draws_total,
                },
                loses: Tally {
                    home: s.loses_home,
                    away: s.loses_away,
                    total: s.loses_total,
                },
            },
            StatsKind::Goals => StatsSection::Goals {
                scored: Tally {
                    home: s.goals_for_home,
                    away: s.goals_for_away,
                    total: s.goals_for_total,
                },
                conceded: Tally {
                    home: s.goals_against_home,
                    away: s.goals_against_away,
                    total: s.goals_against_total,
                },
                scored_avg: HomeAway {
                    home: s.goals_for_avg_home.clone(),
                    away: s.goals_for_avg_away.clone(),
                },
                scored_avg_total: s.goals_for_avg_total.clone(),
                conceded_avg: HomeAway {
                    home: s.goals_against_avg_home.clone(),
                    away: s.goals_against_avg_away.clone(),
                },
                conceded_avg_total: s.goals_against_avg_total.clone(),
            },
            StatsKind::Streak => StatsSection::Streak {
                wins: s.streak_wins,
                draws: s.streak_draws,
                loses: s.streak_loses,
            },
            StatsKind::Biggest => StatsSection::Biggest {
                win: HomeAway {
                    home: s.biggest_win_home.clone(),
                    away: s.biggest_win_away.clone(),
                },
                lose: HomeAway {
                    home: s.biggest_lose_home.clone(),
                    away: s.biggest_lose_away.clone(),
                },
                goals_for: HomeAway {
                    home: s.biggest_goals_for_home,
                    away: s.biggest_goals_for_away,
                },
                goals_against: HomeAway {
                    home: s.biggest_goals_against_home,
                    away: s.biggest_goals_against_away,
                },
            },
            StatsKind::CleanSheet => StatsSection::CleanSheet(Tally {
                home: s.clean_sheet_home,
                away: s.clean_sheet_away,
                total: s.clean_sheet_total,
            }),
            StatsKind::FailedToScore => StatsSection::FailedToScore(Tally {
                home: s.failed_to_score_home,
                away: s.failed_to_score_away,
                total: s.failed_to_score_total,
            }),
            StatsKind::Penalty => StatsSection::Penalty {
                scored_total: s.penalty_scored_total,
                scored_percentage: s.penalty_scored_pct.clone(),
                missed_total: s.penalty_missed_total,
                missed_percentage: s.penalty_missed_pct.clone(),
                total: s.penalty_total,
            },
            StatsKind::Cards => StatsSection::Cards {
                yellow_total: s.yellow_cards_total,
                red_total: s.red_cards_total,
            },
            StatsKind::Lineups => StatsSection::Lineups {
                lineups: self
                    .store
                    .load::<LineupRecord>()?
                    .into_iter()
                    .filter(|l| l.season == s.season && l.team_id == s.team_id)
                    .map(|l| LineupView {
                        formation: l.formation,
                        played: l.played,
                    })
                    .collect(),
            },
        };

        Ok(TeamStatsView {
            team: SeasonHeader {
                name: s.team_name,
                league: s.league_name,
                season: s.season,
                form: s.form,
            },
            section,
        })
    }

    pub fn venues(&self) -> Result<Vec<VenueView>, Error> {
        Ok(self
            .store
            .load::<VenueRecord>()?
            .into_iter()
            .map(venue_view)
            .collect())
    }

    pub fn venues_by_city(&self, city: &str) -> Result<Vec<VenueView>, Error> {
        Ok(self
            .venues()?
            .into_iter()
            .filter(|v| v.city.eq_ignore_ascii_case(city))
            .collect())
    }

    /// Every venue whose capacity equals the smallest or the largest one.
    pub fn venues_biggest_and_smallest(&self) -> Result<Vec<VenueView>, Error> {
        let venues = self.venues()?;
        let (Some(min), Some(max)) = (
            venues.iter().map(|v| v.capacity).min(),
            venues.iter().map(|v| v.capacity).max(),
        ) else {
            return Ok(Vec::new());
        };

        Ok(venues
            .into_iter()
            .filter(|v| v.capacity == min || v.capacity == max)
            .collect())
    }

    pub fn standing(&self, season: Season) -> Result<StandingView, Error> {
        let s = self
            .store
            .load::<StandingRecord>()?
            .into_iter()
            .find(|s| s.season == season && s.team_id == self.team_id)
            .ok_or_else(|| Error::not_found(format!("standings for season {season} not found")))?;

        Ok(StandingView {
            league_name: s.league_name,
            season: s.season,
            team_name: s.team_name,
            rank: s.rank,
            points: s.points,
            goals_diff: s.goals_diff,
            description: s.description,
            all: StandingSplit {
                played: s.played_all,
                wins: s.wins_all,
                draws: s.draws_all,
                loses: s.loses_all,
                goals_for: s.goals_for_all,
                goals_against: s.goals_against_all,
            },
            home: StandingSplit {
                played: s.played_home,
                wins: s.wins_home,
                draws: s.draws_home,
                loses: s.loses_home,
                goals_for: s.goals_for_home,
                goals_against: s.goals_against_home,
            },
            away: StandingSplit {
                played: s.played_away,
                wins: s.wins_away,
                draws: s.draws_away,
                loses: s.loses_away,
                goals_for: s.goals_for_away,
                goals_against: s.goals_against_away,
            },
        })
    }

    pub fn fixtures(&self, season: Season) -> Result<Vec<FixtureView>, Error> {
        Ok(self
            .store
            .load::<FixtureRecord>()?
            .into_iter()
            .filter(|f| f.season == season)
            .map(|f| FixtureView {
                referee: f.referee,
                date: f.date,
                venue_name: f.venue_name,
                venue_city: f.venue_city,
                status_long: f.status_long,
                status_short: f.status_short,
                status_elapsed: f.status_elapsed,
                status_extra: f.status_extra,
                league_name: f.league_name,
                country: f.country,
                season: f.season,
                round: f.round,
                home_team_name: f.home_team_name,
                home_winner: f.home_winner,
                away_team_name: f.away_team_name,
                away_winner: f.away_winner,
                goals_home: f.goals_home,
                goals_away: f.goals_away,
                half_time: HomeAway {
                    home: f.halftime_home,
                    away: f.halftime_away,
                },
                full_time: HomeAway {
                    home: f.fulltime_home,
                    away: f.fulltime_away,
                },
                extra_time: HomeAway {
                    home: f.extratime_home,
                    away: f.extratime_away,
                },
                penalty: HomeAway {
                    home: f.penalty_home,
                    away: f.penalty_away,
                },
            })
            .collect())
    }

    pub fn injuries(&self, season: Season) -> Result<InjuryList, Error> {
        let injuries: Vec<_> = self
            .store
            .load::<InjuryRecord>()?
            .into_iter()
            .filter(|i| i.season == season)
            .map(|i| InjuryView {
                player_name: i.player_name,
                kind: i.kind,
                reason: i.reason,
                fixture_date: i.fixture_date,
                league_name: i.league_name,
                country: i.country,
                season: i.season,
            })
            .collect();

        Ok(InjuryList {
            count: injuries.len(),
            injuries,
        })
    }

    /// Injury counts per player for a season, most frequent first.
    pub fn injury_counts(&self, season: Season) -> Result<Vec<(String, usize)>, Error> {
        let mut counts: BTreeMap<String, usize> = BTreeMap::new();
        for injury in self.injuries(season)?.injuries {
            *counts.entry(injury.player_name).or_default() += 1;
        }
        let mut counts: Vec<_> = counts.into_iter().collect();
        counts.sort_by(|a, b| b.1.cmp(&a.1));
        Ok(counts)
    }

    pub fn squad(&self) -> Result<SquadView, Error> {
        let footballers: Vec<_> = self
            .store
            .load::<SquadRecord>()?
            .into_iter()
            .filter(|p| p.team_id == self.team_id)
            .map(|p| FootballerView {
                player_name: p.player_name,
                age: p.age,
                number: p.number,
                position: p.position,
            })
            .collect();

        Ok(SquadView {
            squad_depth: footballers.len(),
            footballers,
        })
    }
}

fn venue_view(v: VenueRecord) -> VenueView {
    VenueView {
        id: v.venue_id,
        name: v.venue_name,
        address: v.address,
        city: v.city,
        capacity: v.capacity,
        surface: v.surface,
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn venue(id: i64, city: &str, capacity: i64) -> VenueRecord {
        VenueRecord {
            venue_id: id,
            venue_name: format!("venue {id}"),
            city: city.into(),
            capacity,
            ..Default::default()
        }
    }

    fn stats(season: Season) -> TeamStatsRecord {
        TeamStatsRecord {
            team_id: 33,
            team_name: "Manchester United".into(),
            league_name: "Premier League".into(),
            season,
            form: "WWD".into(),
            played_home: 10,
            played_away: 9,
            played_total: 19,
            yellow_cards_total: 6,
            red_cards_total: 1,
            ..Default::default()
        }
    }

    #[test]
    fn missing_season_is_not_found() {
        let dir = tempfile::tempdir().unwrap();
        let store = RecordStore::open(dir.path()).unwrap();
        store.insert(&[stats(2021)]).unwrap();
        let provider = Provider::new(&store, 33);

        let err = provider.team_stats(2022, StatsKind::Games).unwrap_err();
        assert!(matches!(err, Error::NotFound(_)));
        assert!(matches!(provider.standing(2021), Err(Error::NotFound(_))));
        assert!(matches!(provider.team(), Err(Error::NotFound(_))));
    }

    #[test]
    fn team_stats_sections_project_the_record() {
        let dir = tempfile::tempdir().unwrap();
        let store = RecordStore::open(dir.path()).unwrap();
        store.insert(&[stats(2021), stats(2022)]).unwrap();
        store
            .insert(&[
                LineupRecord {
                    team_id: 33,
                    season: 2021,
                    formation: "4-2-3-1".into(),
                    played: 15,
                },
                LineupRecord {
                    team_id: 33,
                    season: 2022,
                    formation: "4-3-3".into(),
                    played: 4,
                },
                // another club stored in the same directory
                LineupRecord {
                    team_id: 40,
                    season: 2022,
                    formation: "3-5-2".into(),
                    played: 20,
                },
            ])
            .unwrap();
        let provider = Provider::new(&store, 33);

        let games = provider.team_stats(2021, StatsKind::Games).unwrap();
        assert_eq!(games.team.season, 2021);
        assert_eq!(games.team.form, "WWD");
        match games.section {
            StatsSection::Games { played, .. } => assert_eq!(
                played,
                Tally {
                    home: 10,
                    away: 9,
                    total: 19
                }
            ),
            other => panic!("unexpected section {other:?}"),
        }

        let cards = provider.team_stats(2022, StatsKind::Cards).unwrap();
        assert_eq!(
            cards.section,
            StatsSection::Cards {
                yellow_total: 6,
                red_total: 1
            }
        );

        let lineups = provider.team_stats(2022, StatsKind::Lineups).unwrap();
        assert_eq!(
            lineups.section,
            StatsSection::Lineups {
                lineups: vec![LineupView {
                    formation: "4-3-3".into(),
                    played: 4
                }]
            }
        );
    }

    #[test]
    fn team_stats_view_serializes_flat_section() {
        let dir = tempfile::tempdir().unwrap();
        let store = RecordStore::open(dir.path()).unwrap();
        store.insert(&[stats(2021)]).unwrap();
        let provider = Provider::new(&store, 33);

        let view = provider.team_stats(2021, StatsKind::Streak).unwrap();
        let json = serde_json::to_value(&view).unwrap();

        assert_eq!(json["section"], "streak");
        assert_eq!(json["team"]["name"], "Manchester United");
        assert_eq!(json["wins"], 0);
    }

    #[test]
    fn biggest_and_smallest_venues() {
        let dir = tempfile::tempdir().unwrap();
        let store = RecordStore::open(dir.path()).unwrap();
        store
            .insert(&[
                venue(1, "Manchester", 76212),
                venue(2, "Manchester", 55097),
                venue(3, "Bournemouth", 11329),
                venue(4, "London", 76212),
            ])
            .unwrap();
        let provider = Provider::new(&store, 33);

        let ids: Vec<_> = provider
            .venues_biggest_and_smallest()
            .unwrap()
            .iter()
            .map(|v| v.id)
            .collect();
        assert_eq!(ids, vec![1, 3, 4]);

        let manchester = provider.venues_by_city("manchester").unwrap();
        assert_eq!(manchester.len(), 2);
    }

    #[test]
    fn no_venues_means_no_extremes() {
        let dir = tempfile::tempdir().unwrap();
        let store = RecordStore::open(dir.path()).unwrap();
        let provider = Provider::new(&store, 33);

        assert!(provider.venues_biggest_and_smallest().unwrap().is_empty());
    }

    #[test]
    fn standing_picks_configured_team() {
        let dir = tempfile::tempdir().unwrap();
        let store = RecordStore::open(dir.path()).unwrap();
        let row = |team_id: i64, rank: i64| StandingRecord {
            season: 2022,
            team_id,
            rank,
            ..Default::default()
        };
        store.insert(&[row(50, 1), row(33, 3)]).unwrap();
        let provider = Provider::new(&store, 33);

        assert_eq!(provider.standing(2022).unwrap().rank, 3);
    }

    #[test]
    fn injuries_and_counts_by_season() {
        let dir = tempfile::tempdir().unwrap();
        let store = RecordStore::open(dir.path()).unwrap();
        let injury = |name: &str, season: Season| InjuryRecord {
            player_name: name.into(),
            season,
            ..Default::default()
        };
        store
            .insert(&[
                injury("L. Shaw", 2023),
                injury("L. Martinez", 2023),
                injury("L. Shaw", 2023),
                injury("L. Shaw", 2022),
            ])
            .unwrap();
        let provider = Provider::new(&store, 33);

        let list = provider.injuries(2023).unwrap();
        assert_eq!(list.count, 3);

        let counts = provider.injury_counts(2023).unwrap();
        assert_eq!(
            counts,
            vec![("L. Shaw".to_string(), 2), ("L. Martinez".to_string(), 1)]
        );
    }

    #[test]
    fn country_lookup_by_name() {
        let dir = tempfile::tempdir().unwrap();
        let store = RecordStore::open(dir.path()).unwrap();
        store
            .insert(&[CountryRecord {
                name: "England".into(),
                code: "GB".into(),
            }])
            .unwrap();
        let provider = Provider::new(&store, 33);

        assert_eq!(provider.country_by_name("england").unwrap().code, "GB");
        assert!(matches!(
            provider.country_by_name("Narnia"),
            Err(Error::NotFound(_))
        ));
    }
}
