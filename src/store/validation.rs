use std::fmt;

use super::error::StoreError;
use crate::domain::{Bracket, LoadedBoard, SeasonId};

/// Suspicious but loadable data: a worse rank carrying a strictly higher rating
#[derive(Debug, Clone, PartialEq)]
pub struct RatingInversion {
    pub season: SeasonId,
    pub bracket: Bracket,
    pub rank: u32,
    pub rating: i32,
    pub better_rank: u32,
    pub better_rating: i32,
}

impl fmt::Display for RatingInversion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "season {} {}: rank {} ({}) is rated above rank {} ({})",
            self.season, self.bracket, self.rank, self.rating, self.better_rank, self.better_rating
        )
    }
}

/// Order a board by rank and check it against the leaderboard invariants
pub fn validate_board(board: &mut LoadedBoard) -> Result<Vec<RatingInversion>, StoreError> {
    check_bracket_exists(board)?;

    board.records.sort_by_key(|r| r.rank);
    check_unique_ranks(board)?;

    Ok(find_rating_inversions(board))
}

fn check_bracket_exists(board: &LoadedBoard) -> Result<(), StoreError> {
    if board.bracket.available_in(board.season) {
        Ok(())
    } else {
        Err(StoreError::UnsupportedBracket {
            season: board.season,
            bracket: board.bracket,
            path: board.source.clone(),
        })
    }
}

fn check_unique_ranks(board: &LoadedBoard) -> Result<(), StoreError> {
    let duplicate = board
        .records
        .windows(2)
        .find(|pair| pair[0].rank == pair[1].rank);

    match duplicate {
        Some(pair) => Err(StoreError::DuplicateRank {
            season: board.season,
            bracket: board.bracket,
            rank: pair[0].rank,
            path: board.source.clone(),
        }),
        None => Ok(()),
    }
}

fn find_rating_inversions(board: &LoadedBoard) -> Vec<RatingInversion> {
    board
        .records
        .windows(2)
        .filter(|pair| pair[1].rating > pair[0].rating)
        .map(|pair| RatingInversion {
            season: board.season,
            bracket: board.bracket,
            rank: pair[1].rank,
            rating: pair[1].rating,
            better_rank: pair[0].rank,
            better_rating: pair[0].rating,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::PlayerRecord;
    use std::path::PathBuf;

    fn record(rank: u32, rating: i32) -> PlayerRecord {
        PlayerRecord {
            season: SeasonId(10),
            bracket: Bracket::ThreeVsThree,
            rank,
            rating,
            name: format!("player{}", rank),
            team: None,
            realm: None,
            faction: None,
            class: None,
            race: None,
            wins: 0,
            losses: 0,
            members: Vec::new(),
        }
    }

    fn board(bracket: Bracket, season: u32, records: Vec<PlayerRecord>) -> LoadedBoard {
        LoadedBoard {
            season: SeasonId(season),
            bracket,
            revision: 0,
            source: PathBuf::from("board.json"),
            records,
        }
    }

    #[test]
    fn test_board_is_sorted_by_rank() {
        let mut b = board(
            Bracket::ThreeVsThree,
            10,
            vec![record(7, 1800), record(1, 2300), record(3, 2100)],
        );

        let warnings = validate_board(&mut b).unwrap();

        let ranks: Vec<u32> = b.records.iter().map(|r| r.rank).collect();
        assert_eq!(ranks, vec![1, 3, 7]);
        assert!(warnings.is_empty());
    }

    #[test]
    fn test_duplicate_rank_is_integrity_violation() {
        let mut b = board(
            Bracket::ThreeVsThree,
            10,
            vec![record(1, 2300), record(2, 2100), record(2, 2050)],
        );

        let err = validate_board(&mut b).unwrap_err();

        assert!(err.is_integrity_violation());
        assert!(matches!(err, StoreError::DuplicateRank { rank: 2, .. }));
    }

    #[test]
    fn test_rbg_before_season_nine_is_rejected() {
        let mut b = board(Bracket::Rbg, 8, vec![record(1, 2000)]);

        let err = validate_board(&mut b).unwrap_err();

        assert!(matches!(err, StoreError::UnsupportedBracket { .. }));
    }

    #[test]
    fn test_rating_inversion_is_reported() {
        let mut b = board(
            Bracket::ThreeVsThree,
            10,
            vec![record(1, 2300), record(2, 2300), record(3, 2350)],
        );

        let warnings = validate_board(&mut b).unwrap();

        assert_eq!(warnings.len(), 1);
        assert_eq!(warnings[0].rank, 3);
        assert_eq!(warnings[0].better_rank, 2);
    }
}
