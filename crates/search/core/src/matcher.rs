//! Straight-line word matching from a single start cell.
//!
//! The first character of a word fans out over all eight directions; every
//! later character must continue along the direction chosen at the first
//! step. Each direction is evaluated independently, so a symmetric word can
//! match the same start cell several times.
use std::fmt;

use crate::direction::Direction;
use crate::grid::{GridOracle, Position};

/// Target word as an ordered sequence of characters.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Word {
    chars: Vec<char>,
}

impl Word {
    pub fn new(text: &str) -> Self {
        Self {
            chars: text.chars().collect(),
        }
    }

    pub fn chars(&self) -> &[char] {
        &self.chars
    }

    pub fn len(&self) -> usize {
        self.chars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }

    pub fn first(&self) -> Option<char> {
        self.chars.first().copied()
    }

    /// Character-reversed copy of this word.
    pub fn reversed(&self) -> Self {
        Self {
            chars: self.chars.iter().rev().copied().collect(),
        }
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.chars.iter().try_for_each(|c| write!(f, "{c}"))
    }
}

/// One straight-line placement of a word.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Occurrence {
    pub start: Position,
    pub direction: Direction,
}

impl fmt::Display for Occurrence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.start, self.direction)
    }
}

/// A single evaluation of `word` at `start`, optionally locked to one
/// direction. Attempts carry no state between evaluations.
#[derive(Clone, Copy, Debug)]
pub struct MatchAttempt<'w> {
    word: &'w [char],
    start: Position,
    locked: Option<Direction>,
}

impl<'w> MatchAttempt<'w> {
    pub fn new(word: &'w Word, start: Position) -> Self {
        Self::from_chars(word.chars(), start)
    }

    pub fn from_chars(word: &'w [char], start: Position) -> Self {
        Self {
            word,
            start,
            locked: None,
        }
    }

    /// Restricts the attempt to a single direction (builder pattern).
    #[must_use]
    pub fn locked(mut self, direction: Direction) -> Self {
        self.locked = Some(direction);
        self
    }

    #[must_use]
    pub fn with_lock(mut self, locked: Option<Direction>) -> Self {
        self.locked = locked;
        self
    }

    /// Number of straight-line placements found from the start cell.
    pub fn count<G>(&self, grid: &G) -> usize
    where
        G: GridOracle + ?Sized,
    {
        let Some((&first, rest)) = self.word.split_first() else {
            return 1;
        };
        if !grid.contains(self.start) || grid.get(self.start) != Some(first) {
            return 0;
        }
        if rest.is_empty() {
            return 1;
        }

        match self.locked {
            Some(direction) => usize::from(continues_along(grid, rest, self.start, direction)),
            None => Direction::ALL
                .into_iter()
                .filter(|&direction| continues_along(grid, rest, self.start, direction))
                .count(),
        }
    }

    /// Every placement found from the start cell, in fan-out order. The
    /// length always equals [`MatchAttempt::count`] for non-empty words.
    pub fn occurrences<G>(&self, grid: &G) -> Vec<Occurrence>
    where
        G: GridOracle + ?Sized,
    {
        let Some((&first, rest)) = self.word.split_first() else {
            return Vec::new();
        };
        if !grid.contains(self.start) || grid.get(self.start) != Some(first) {
            return Vec::new();
        }

        // A single character has no direction to fan out over; report it once.
        let candidates = match self.locked {
            Some(direction) => vec![direction],
            None if rest.is_empty() => vec![Direction::ALL[0]],
            None => Direction::ALL.to_vec(),
        };

        candidates
            .into_iter()
            .filter(|&direction| continues_along(grid, rest, self.start, direction))
            .map(|direction| Occurrence {
                start: self.start,
                direction,
            })
            .collect()
    }
}

/// Counts placements of `word` starting at `start`.
///
/// An empty word succeeds trivially with 1. Otherwise the start must be in
/// bounds and hold the first character; a single-character word then counts
/// once. Longer words continue along `locked` only, or along each of the
/// eight directions independently when no direction is locked.
pub fn count_matches<G>(grid: &G, word: &Word, start: Position, locked: Option<Direction>) -> usize
where
    G: GridOracle + ?Sized,
{
    MatchAttempt::new(word, start).with_lock(locked).count(grid)
}

/// Checks the characters after the first one, beginning one step past
/// `origin` and advancing strictly along `direction`.
fn continues_along<G>(grid: &G, tail: &[char], origin: Position, direction: Direction) -> bool
where
    G: GridOracle + ?Sized,
{
    let mut position = origin;
    tail.iter().all(|&expected| {
        position = position.step(direction);
        grid.contains(position) && grid.get(position) == Some(expected)
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::Grid;

    fn word(text: &str) -> Word {
        Word::new(text)
    }

    #[test]
    fn empty_word_matches_everywhere() {
        let grid = Grid::from_lines(["AB"]);

        for start in [Position::ORIGIN, Position::new(-4, 9), Position::new(7, 7)] {
            assert_eq!(count_matches(&grid, &word(""), start, None), 1);
            assert_eq!(
                count_matches(&grid, &word(""), start, Some(Direction::West)),
                1
            );
        }
    }

    #[test]
    fn empty_word_on_empty_grid_still_succeeds() {
        let grid = Grid::default();
        assert_eq!(count_matches(&grid, &word(""), Position::ORIGIN, None), 1);
    }

    #[test]
    fn out_of_bounds_start_never_matches() {
        let grid = Grid::from_lines(["XMAS"]);

        assert_eq!(count_matches(&grid, &word("X"), Position::new(0, -1), None), 0);
        assert_eq!(count_matches(&grid, &word("X"), Position::new(1, 0), None), 0);
    }

    #[test]
    fn mismatched_first_character_short_circuits() {
        let grid = Grid::from_lines(["XMAS"]);

        assert_eq!(count_matches(&grid, &word("MAS"), Position::ORIGIN, None), 0);
        for direction in Direction::ALL {
            assert_eq!(
                count_matches(&grid, &word("MAS"), Position::ORIGIN, Some(direction)),
                0
            );
        }
    }

    #[test]
    fn single_character_counts_once_without_fan_out() {
        let grid = Grid::from_lines(["AAA", "AAA", "AAA"]);

        assert_eq!(count_matches(&grid, &word("A"), Position::new(1, 1), None), 1);
        assert_eq!(
            count_matches(&grid, &word("A"), Position::new(1, 1), Some(Direction::North)),
            1
        );
    }

    #[test]
    fn word_in_one_direction_counts_once() {
        let grid = Grid::from_lines(["XMAS", "....", "....", "...."]);

        assert_eq!(count_matches(&grid, &word("XMAS"), Position::ORIGIN, None), 1);
    }

    #[test]
    fn each_direction_counts_independently() {
        let grid = Grid::from_lines(["BBB", "BAB", "BBB"]);

        assert_eq!(count_matches(&grid, &word("AB"), Position::new(1, 1), None), 8);
        assert_eq!(
            count_matches(&grid, &word("AB"), Position::new(1, 1), Some(Direction::NorthEast)),
            1
        );
    }

    #[test]
    fn locked_direction_does_not_turn() {
        // X M
        //   A S  -> the word bends after M, so no straight line exists.
        let grid = Grid::from_lines(["XM..", ".AS.", "...."]);

        assert_eq!(count_matches(&grid, &word("XMAS"), Position::ORIGIN, None), 0);
        assert_eq!(
            count_matches(&grid, &word("MAS"), Position::new(0, 1), Some(Direction::South)),
            0
        );
    }

    #[test]
    fn match_running_off_the_edge_fails() {
        let grid = Grid::from_lines(["XMA"]);

        assert_eq!(count_matches(&grid, &word("XMAS"), Position::ORIGIN, None), 0);
    }

    #[test]
    fn ragged_padding_blocks_matches() {
        let grid = Grid::from_lines(["XMAS", "M", "A", "S"]);

        assert_eq!(count_matches(&grid, &word("XMAS"), Position::ORIGIN, None), 2);
        assert_eq!(
            count_matches(&grid, &word("SA"), Position::new(0, 3), Some(Direction::South)),
            0
        );
    }

    #[test]
    fn repeated_calls_are_deterministic() {
        let grid = Grid::from_lines(["XMASAMX", "MMMMMMM", "AAAAAAA", "SSSSSSS"]);
        let target = word("XMAS");

        let first = count_matches(&grid, &target, Position::ORIGIN, None);
        for _ in 0..10 {
            assert_eq!(count_matches(&grid, &target, Position::ORIGIN, None), first);
        }
    }

    #[test]
    fn occurrences_agree_with_count() {
        let grid = Grid::from_lines(["BBB", "BAB", "BBB"]);
        let target = word("AB");
        let attempt = MatchAttempt::new(&target, Position::new(1, 1));

        let found = attempt.occurrences(&grid);
        assert_eq!(found.len(), attempt.count(&grid));
        assert_eq!(found[0].direction, Direction::East);
        assert!(found.iter().all(|o| o.start == Position::new(1, 1)));
    }

    #[test]
    fn single_character_occurrence_is_reported_once() {
        let grid = Grid::from_lines(["A"]);
        let target = word("A");

        let found = MatchAttempt::new(&target, Position::ORIGIN).occurrences(&grid);
        assert_eq!(found.len(), 1);
    }

    #[test]
    fn word_helpers() {
        let mas = word("MAS");

        assert_eq!(mas.reversed(), word("SAM"));
        assert_eq!(mas.first(), Some('M'));
        assert_eq!(mas.to_string(), "MAS");
    }
}
