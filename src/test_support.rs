//! In-memory upstream used by the fan-out and import tests.

use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;

use crate::client::FootballClient;
use crate::error::FetchError;
use crate::types::*;

#[derive(Default)]
pub struct FakeClient {
    failing_season: Option<Season>,
    calls: AtomicUsize,
}

impl FakeClient {
    pub fn failing_in(season: Season) -> Self {
        Self {
            failing_season: Some(season),
            ..Self::default()
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    fn check(&self, season: Season) -> Result<(), FetchError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        match self.failing_season {
            Some(failing) if failing == season => {
                Err(FetchError::message("simulated transport failure"))
            }
            _ => Ok(()),
        }
    }
}

fn standing_entry(rank: i64, team_id: i64, name: &str) -> StandingEntry {
    StandingEntry {
        rank,
        team: StandingTeam {
            id: team_id,
            name: name.into(),
            logo: None,
        },
        points: 80 - rank,
        ..Default::default()
    }
}

#[async_trait]
impl FootballClient for FakeClient {
    async fn fetch_countries(&self) -> Result<CountryResponse, FetchError> {
        Ok(CountryResponse {
            results: 2,
            response: vec![
                Country {
                    name: "England".into(),
                    code: Some("GB".into()),
                },
                Country {
                    name: "World".into(),
                    code: None,
                },
            ],
        })
    }

    async fn fetch_leagues(&self, _team_id: i64) -> Result<LeagueResponse, FetchError> {
        Ok(LeagueResponse {
            results: 1,
            response: vec![LeagueEntry {
                league: LeagueInfo {
                    id: 39,
                    name: "Premier League".into(),
                    kind: "League".into(),
                },
                country: Country {
                    name: "England".into(),
                    code: Some("GB".into()),
                },
                seasons: vec![
                    LeagueSeason {
                        year: 2022,
                        start: "2022-08-05".into(),
                        end: "2023-05-28".into(),
                        current: false,
                    },
                    LeagueSeason {
                        year: 2023,
                        start: "2023-08-11".into(),
                        end: "2024-05-19".into(),
                        current: true,
                    },
                ],
            }],
        })
    }

    async fn fetch_team(&self, team_id: i64) -> Result<TeamResponse, FetchError> {
        Ok(TeamResponse {
            results: 1,
            response: vec![TeamEntry {
                team: TeamInfo {
                    id: team_id,
                    name: "Manchester United".into(),
                    code: Some("MUN".into()),
                    country: Some("England".into()),
                    founded: Some(1878),
                    national: false,
                },
                venue: Venue {
                    id: Some(556),
                    name: Some("Old Trafford".into()),
                    address: Some("Sir Matt Busby Way".into()),
                    city: Some("Manchester".into()),
                    capacity: Some(76212),
                    surface: Some("grass".into()),
                },
            }],
        })
    }

    async fn fetch_venues(&self, _country: &str) -> Result<VenueResponse, FetchError> {
        let venue = |id: i64, name: &str, city: &str, capacity: i64| Venue {
            id: Some(id),
            name: Some(name.into()),
            address: None,
            city: Some(city.into()),
            capacity: Some(capacity),
            surface: Some("grass".into()),
        };
        Ok(VenueResponse {
            results: 3,
            response: vec![
                venue(556, "Old Trafford", "Manchester", 76212),
                venue(555, "Etihad Stadium", "Manchester", 55097),
                venue(8560, "Vitality Stadium", "Bournemouth", 11329),
            ],
        })
    }

    async fn fetch_squad(&self, team_id: i64) -> Result<SquadResponse, FetchError> {
        Ok(SquadResponse {
            response: vec![SquadEntry {
                team: SquadTeam {
                    id: team_id,
                    name: "Manchester United".into(),
                    logo: None,
                },
                players: vec![
                    SquadPlayer {
                        id: 526,
                        name: "A. Onana".into(),
                        age: Some(28),
                        number: Some(24),
                        position: Some("Goalkeeper".into()),
                        photo: None,
                    },
                    SquadPlayer {
                        id: 909,
                        name: "M. Rashford".into(),
                        age: Some(26),
                        number: None,
                        position: Some("Attacker".into()),
                        photo: None,
                    },
                ],
            }],
        })
    }

    async fn fetch_team_stats(
        &self,
        team_id: i64,
        league_id: i64,
        season: Season,
    ) -> Result<TeamStatsResponse, FetchError> {
        self.check(season)?;
        let mut response = TeamStatsResponse {
            results: 11,
            ..Default::default()
        };
        let stats = &mut response.response;
        stats.league = StatsLeague {
            id: league_id,
            name: "Premier League".into(),
            country: "England".into(),
            season,
        };
        stats.team = StatsTeam {
            id: team_id,
            name: "Manchester United".into(),
        };
        stats.fixtures.played = HomeAwayTotal {
            home: Some(10),
            away: Some(9),
            total: Some(19),
        };
        stats.cards.yellow = CardDistribution::from([Some(1), None, Some(3), None, None, Some(2), None, Some(0)]);
        stats.lineups = vec![Lineup {
            formation: "4-2-3-1".into(),
            played: 19,
        }];
        Ok(response)
    }

    async fn fetch_standings(
        &self,
        league_id: i64,
        team_id: i64,
        season: Season,
    ) -> Result<StandingResponse, FetchError> {
        self.check(season)?;
        Ok(StandingResponse {
            response: vec![StandingWrapper {
                league: StandingLeague {
                    id: league_id,
                    name: "Premier League".into(),
                    country: "England".into(),
                    season,
                    standings: vec![vec![
                        standing_entry(1, 50, "Manchester City"),
                        standing_entry(2, team_id, "Manchester United"),
                    ]],
                },
            }],
        })
    }

    async fn fetch_fixtures(
        &self,
        league_id: i64,
        team_id: i64,
        season: Season,
    ) -> Result<FixtureResponse, FetchError> {
        self.check(season)?;
        let fixture = |id: i64, opponent: &str| FixtureEntry {
            fixture: FixtureInfo {
                id,
                ..Default::default()
            },
            league: FixtureLeague {
                id: league_id,
                name: "Premier League".into(),
                season,
                ..Default::default()
            },
            teams: FixtureTeams {
                home: FixtureTeam {
                    id: team_id,
                    name: "Manchester United".into(),
                    logo: None,
                    winner: Some(true),
                },
                away: FixtureTeam {
                    id: 0,
                    name: opponent.into(),
                    logo: None,
                    winner: Some(false),
                },
            },
            goals: ScorePair {
                home: Some(2),
                away: Some(1),
            },
            ..Default::default()
        };
        Ok(FixtureResponse {
            response: vec![fixture(season * 10, "Fulham"), fixture(season * 10 + 1, "Wolves")],
        })
    }

    async fn fetch_injuries(
        &self,
        team_id: i64,
        season: Season,
    ) -> Result<InjuryResponse, FetchError> {
        self.check(season)?;
        Ok(InjuryResponse {
            response: vec![InjuryEntry {
                player: InjuredPlayer {
                    id: 909,
                    name: "M. Rashford".into(),
                    photo: None,
                    kind: Some("Missing Fixture".into()),
                    reason: Some("Knock".into()),
                },
                team: InjuryTeam {
                    id: team_id,
                    name: "Manchester United".into(),
                    logo: None,
                },
                league: InjuryLeague {
                    season,
                    name: "Premier League".into(),
                    ..Default::default()
                },
                ..Default::default()
            }],
        })
    }
}
