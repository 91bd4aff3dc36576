//! Recent form of a team

use crate::game::settlement::Game;
use crate::types::Outcome;

/// Outcomes of a team's last `count` completed games.
///
/// `games` must be ordered most recent first. Games the team did not play in
/// and games that are not fully scored are skipped.
pub fn recent_form(team_id: &str, games: &[Game], count: usize) -> Vec<Outcome> {
    games
        .iter()
        .filter(|game| game.involves(team_id))
        .filter_map(|game| {
            let team1_outcome = game.score.outcome_for_team1()?;
            if game.team1_id == team_id {
                Some(team1_outcome)
            } else {
                Some(team1_outcome.complement())
            }
        })
        .take(count)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::score::{LegScore, TieScore};

    #[test]
    fn test_no_games() {
        assert!(recent_form("lions", &[], 5).is_empty());
    }

    #[test]
    fn test_outcomes_from_both_sides() {
        let games = vec![
            // Lions host and win 5-2
            Game::new("lions", "tigers", TieScore::new((3, 1), (2, 1))),
            // Lions visit and lose 2-5
            Game::new("bears", "lions", TieScore::new((3, 1), (2, 1))),
            // Lions visit and draw
            Game::new("tigers", "lions", TieScore::new((1, 1), (2, 2))),
        ];

        assert_eq!(
            recent_form("lions", &games, 5),
            vec![Outcome::Win, Outcome::Loss, Outcome::Draw]
        );
        assert_eq!(recent_form("bears", &games, 5), vec![Outcome::Win]);
    }

    #[test]
    fn test_skips_incomplete_and_limits_count() {
        let unfinished = TieScore {
            leg1: LegScore::new(1, 0),
            leg2: LegScore::default(),
        };

        let mut games = vec![Game::new("lions", "tigers", unfinished)];
        for _ in 0..7 {
            games.push(Game::new("lions", "tigers", TieScore::new((1, 0), (1, 0))));
        }

        let form = recent_form("lions", &games, 5);
        assert_eq!(form.len(), 5);
        assert!(form.iter().all(|outcome| *outcome == Outcome::Win));
    }
}
