//! Flattens upstream responses into storage records.
//!
//! Every function here is pure: the same payload always yields the same
//! records, in the same order.

use crate::records::*;
use crate::types::*;

/// Resolves an optional upstream field to its storage value.
///
/// Absent integers become `0`, strings `""` and booleans `false`; present
/// values pass through unchanged.
pub fn resolve<T: Default>(field: Option<T>) -> T {
    field.unwrap_or_default()
}

/// Sums the cards of all minute ranges, counting an absent bucket as zero.
pub fn card_total(cards: &CardDistribution) -> i64 {
    cards
        .buckets()
        .iter()
        .map(|bucket| bucket.total.unwrap_or(0))
        .sum()
}

pub fn countries(response: &CountryResponse) -> Vec<CountryRecord> {
    response
        .response
        .iter()
        .map(|c| CountryRecord {
            name: c.name.clone(),
            code: resolve(c.code.clone()),
        })
        .collect()
}

/// One record per league and season the team took part in.
pub fn leagues(response: &LeagueResponse, team_id: i64) -> Vec<LeagueRecord> {
    let mut records = Vec::new();
    for entry in &response.response {
        for season in &entry.seasons {
            records.push(LeagueRecord {
                league_id: entry.league.id,
                name: entry.league.name.clone(),
                kind: entry.league.kind.clone(),
                country: entry.country.name.clone(),
                country_code: resolve(entry.country.code.clone()),
                year: season.year,
                start: season.start.clone(),
                end: season.end.clone(),
                current: season.current,
                team_id,
            });
        }
    }
    records
}

pub fn teams(response: &TeamResponse) -> Vec<TeamRecord> {
    response
        .response
        .iter()
        .map(|entry| {
            let team = &entry.team;
            let venue = venue(&entry.venue);
            TeamRecord {
                team_id: team.id,
                team_name: team.name.clone(),
                code: resolve(team.code.clone()),
                country: resolve(team.country.clone()),
                founded: resolve(team.founded),
                national: team.national,
                venue_id: venue.venue_id,
                venue_name: venue.venue_name,
                address: venue.address,
                city: venue.city,
                capacity: venue.capacity,
                surface: venue.surface,
            }
        })
        .collect()
}

pub fn venues(response: &VenueResponse) -> Vec<VenueRecord> {
    response.response.iter().map(venue).collect()
}

fn venue(v: &Venue) -> VenueRecord {
    VenueRecord {
        venue_id: resolve(v.id),
        venue_name: resolve(v.name.clone()),
        address: resolve(v.address.clone()),
        city: resolve(v.city.clone()),
        capacity: resolve(v.capacity),
        surface: resolve(v.surface.clone()),
    }
}

/// A season's statistics become one stats record plus one lineup record
/// per formation used.
pub fn team_stats(response: &TeamStatsResponse) -> (TeamStatsRecord, Vec<LineupRecord>) {
    let stats = &response.response;
    let fixtures = &stats.fixtures;
    let goals = &stats.goals;
    let biggest = &stats.biggest;
    let penalty = &stats.penalty;

    let record = TeamStatsRecord {
        team_id: stats.team.id,
        team_name: stats.team.name.clone(),
        league_id: stats.league.id,
        league_name: stats.league.name.clone(),
        country: stats.league.country.clone(),
        season: stats.league.season,
        form: resolve(stats.form.clone()),

        played_home: resolve(fixtures.played.home),
        played_away: resolve(fixtures.played.away),
        played_total: resolve(fixtures.played.total),
        wins_home: resolve(fixtures.wins.home),
        wins_away: resolve(fixtures.wins.away),
        wins_total: resolve(fixtures.wins.total),
        draws_home: resolve(fixtures.draws.home),
        draws_away: resolve(fixtures.draws.away),
        draws_total: resolve(fixtures.draws.total),
        loses_home: resolve(fixtures.loses.home),
        loses_away: resolve(fixtures.loses.away),
        loses_total: resolve(fixtures.loses.total),

        goals_for_home: resolve(goals.scored.total.home),
        goals_for_away: resolve(goals.scored.total.away),
        goals_for_total: resolve(goals.scored.total.total),
        goals_against_home: resolve(goals.against.total.home),
        goals_against_away: resolve(goals.against.total.away),
        goals_against_total: resolve(goals.against.total.total),

        goals_for_avg_home: resolve(goals.scored.average.home.clone()),
        goals_for_avg_away: resolve(goals.scored.average.away.clone()),
        goals_for_avg_total: resolve(goals.scored.average.total.clone()),
        goals_against_avg_home: resolve(goals.against.average.home.clone()),
        goals_against_avg_away: resolve(goals.against.average.away.clone()),
        goals_against_avg_total: resolve(goals.against.average.total.clone()),

        streak_wins: resolve(biggest.streak.wins),
        streak_draws: resolve(biggest.streak.draws),
        streak_loses: resolve(biggest.streak.loses),
        biggest_win_home: resolve(biggest.wins.home.clone()),
        biggest_win_away: resolve(biggest.wins.away.clone()),
        biggest_lose_home: resolve(biggest.loses.home.clone()),
        biggest_lose_away: resolve(biggest.loses.away.clone()),
        biggest_goals_for_home: resolve(biggest.goals.scored.home),
        biggest_goals_for_away: resolve(biggest.goals.scored.away),
        biggest_goals_against_home: resolve(biggest.goals.against.home),
        biggest_goals_against_away: resolve(biggest.goals.against.away),

        clean_sheet_home: resolve(stats.clean_sheet.home),
        clean_sheet_away: resolve(stats.clean_sheet.away),
        clean_sheet_total: resolve(stats.clean_sheet.total),
        failed_to_score_home: resolve(stats.failed_to_score.home),
        failed_to_score_away: resolve(stats.failed_to_score.away),
        failed_to_score_total: resolve(stats.failed_to_score.total),

        penalty_scored_total: resolve(penalty.scored.total),
        penalty_scored_pct: resolve(penalty.scored.percentage.clone()),
        penalty_missed_total: resolve(penalty.missed.total),
        penalty_missed_pct: resolve(penalty.missed.percentage.clone()),
        penalty_total: resolve(penalty.total),

        yellow_cards_total: card_total(&stats.cards.yellow),
        red_cards_total: card_total(&stats.cards.red),
    };

    let lineups = stats
        .lineups
        .iter()
        .map(|l| LineupRecord {
            team_id: stats.team.id,
            season: stats.league.season,
            formation: l.formation.clone(),
            played: l.played,
        })
        .collect();

    (record, lineups)
}

/// Every entry of every group becomes one record carrying its league's
/// id, name, country and season.
pub fn standings(response: &StandingResponse) -> Vec<StandingRecord> {
    let mut records = Vec::new();
    for wrapper in &response.response {
        let league = &wrapper.league;
        for group in &league.standings {
            for entry in group {
                records.push(StandingRecord {
                    league_id: league.id,
                    league_name: league.name.clone(),
                    country: league.country.clone(),
                    season: league.season,

                    team_id: entry.team.id,
                    team_name: entry.team.name.clone(),
                    team_logo: resolve(entry.team.logo.clone()),
                    rank: entry.rank,
                    points: entry.points,
                    goals_diff: entry.goals_diff,
                    group_name: resolve(entry.group.clone()),
                    form: resolve(entry.form.clone()),
                    status: resolve(entry.status.clone()),
                    description: resolve(entry.description.clone()),

                    played_all: resolve(entry.all.played),
                    wins_all: resolve(entry.all.win),
                    draws_all: resolve(entry.all.draw),
                    loses_all: resolve(entry.all.lose),
                    goals_for_all: resolve(entry.all.goals.scored),
                    goals_against_all: resolve(entry.all.goals.against),

                    played_home: resolve(entry.home.played),
                    wins_home: resolve(entry.home.win),
                    draws_home: resolve(entry.home.draw),
                    loses_home: resolve(entry.home.lose),
                    goals_for_home: resolve(entry.home.goals.scored),
                    goals_against_home: resolve(entry.home.goals.against),

                    played_away: resolve(entry.away.played),
                    wins_away: resolve(entry.away.win),
                    draws_away: resolve(entry.away.draw),
                    loses_away: resolve(entry.away.lose),
                    goals_for_away: resolve(entry.away.goals.scored),
                    goals_against_away: resolve(entry.away.goals.against),

                    updated_at: resolve(entry.update.clone()),
                });
            }
        }
    }
    records
}

pub fn fixtures(response: &FixtureResponse) -> Vec<FixtureRecord> {
    response.response.iter().map(fixture).collect()
}

fn fixture(entry: &FixtureEntry) -> FixtureRecord {
    let FixtureEntry {
        fixture,
        league,
        teams,
        goals,
        score,
    } = entry;

    FixtureRecord {
        fixture_id: fixture.id,
        referee: resolve(fixture.referee.clone()),
        timezone: fixture.timezone.clone(),
        date: fixture.date.clone(),
        timestamp: fixture.timestamp,
        period_first: resolve(fixture.periods.first),
        period_second: resolve(fixture.periods.second),

        venue_id: resolve(fixture.venue.id),
        venue_name: resolve(fixture.venue.name.clone()),
        venue_city: resolve(fixture.venue.city.clone()),

        status_long: fixture.status.long.clone(),
        status_short: fixture.status.short.clone(),
        status_elapsed: resolve(fixture.status.elapsed),
        status_extra: resolve(fixture.status.extra.clone()),

        league_id: league.id,
        league_name: league.name.clone(),
        country: league.country.clone(),
        league_logo: resolve(league.logo.clone()),
        league_flag: resolve(league.flag.clone()),
        season: league.season,
        round: league.round.clone(),
        standings: resolve(league.standings),

        home_team_id: teams.home.id,
        home_team_name: teams.home.name.clone(),
        home_team_logo: resolve(teams.home.logo.clone()),
        home_winner: resolve(teams.home.winner),
        away_team_id: teams.away.id,
        away_team_name: teams.away.name.clone(),
        away_team_logo: resolve(teams.away.logo.clone()),
        away_winner: resolve(teams.away.winner),

        goals_home: resolve(goals.home),
        goals_away: resolve(goals.away),
        halftime_home: resolve(score.halftime.home),
        halftime_away: resolve(score.halftime.away),
        fulltime_home: resolve(score.fulltime.home),
        fulltime_away: resolve(score.fulltime.away),
        extratime_home: resolve(score.extratime.home),
        extratime_away: resolve(score.extratime.away),
        penalty_home: resolve(score.penalty.home),
        penalty_away: resolve(score.penalty.away),
    }
}

pub fn injuries(response: &InjuryResponse) -> Vec<InjuryRecord> {
    response
        .response
        .iter()
        .map(|inj| InjuryRecord {
            player_id: inj.player.id,
            player_name: inj.player.name.clone(),
            player_photo: resolve(inj.player.photo.clone()),
            kind: resolve(inj.player.kind.clone()),
            reason: resolve(inj.player.reason.clone()),

            team_id: inj.team.id,
            team_name: inj.team.name.clone(),
            team_logo: resolve(inj.team.logo.clone()),

            fixture_id: inj.fixture.id,
            fixture_date: inj.fixture.date.clone(),
            fixture_timestamp: inj.fixture.timestamp,
            fixture_timezone: inj.fixture.timezone.clone(),

            league_id: inj.league.id,
            league_name: inj.league.name.clone(),
            country: inj.league.country.clone(),
            season: inj.league.season,
            league_logo: resolve(inj.league.logo.clone()),
            flag: resolve(inj.league.flag.clone()),
        })
        .collect()
}

pub fn squad(response: &SquadResponse) -> Vec<SquadRecord> {
    let mut records = Vec::new();
    for entry in &response.response {
        for player in &entry.players {
            records.push(SquadRecord {
                team_id: entry.team.id,
                team_name: entry.team.name.clone(),
                team_logo: resolve(entry.team.logo.clone()),
                player_id: player.id,
                player_name: player.name.clone(),
                age: resolve(player.age),
                number: resolve(player.number),
                position: resolve(player.position.clone()),
                player_photo: resolve(player.photo.clone()),
            });
        }
    }
    records
}
