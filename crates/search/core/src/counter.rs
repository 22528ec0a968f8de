//! Grid-wide aggregation of straight-line and crossing-pattern counts.
//!
//! Both scans visit every declared coordinate in row-major order and only
//! invoke the matcher on cells whose character can start (or center) a match.
use crate::config::SearchConfig;
use crate::direction::Direction;
use crate::error::PatternError;
use crate::grid::{GridOracle, Position};
use crate::matcher::{MatchAttempt, Occurrence, Word};

/// Validated crossing ("X") pattern: two diagonal arms that share a center.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CrossPattern {
    forward: Word,
    backward: Word,
    center: char,
    reach: i32,
}

impl CrossPattern {
    /// Diagonals evaluated for each candidate center. Each arm is read from
    /// the cell `reach` steps before the center along its direction.
    pub const ARMS: [Direction; 2] = [Direction::SouthEast, Direction::SouthWest];

    pub fn new(word: Word) -> Result<Self, PatternError> {
        let len = word.len();
        if len < 3 {
            return Err(PatternError::TooShort { len });
        }
        if len % 2 == 0 {
            return Err(PatternError::EvenLength { len });
        }

        let reach = len / 2;
        let center = word.chars()[reach];
        Ok(Self {
            backward: word.reversed(),
            forward: word,
            center,
            reach: reach as i32,
        })
    }

    pub fn word(&self) -> &Word {
        &self.forward
    }

    pub fn center(&self) -> char {
        self.center
    }

    /// Whether both diagonal arms through `center` read the word in either
    /// orientation. The two arms choose their orientation independently.
    pub fn matches_at<G>(&self, grid: &G, center: Position) -> bool
    where
        G: GridOracle + ?Sized,
    {
        grid.get(center) == Some(self.center)
            && Self::ARMS
                .into_iter()
                .all(|direction| self.arm_matches(grid, center, direction))
    }

    fn arm_matches<G>(&self, grid: &G, center: Position, direction: Direction) -> bool
    where
        G: GridOracle + ?Sized,
    {
        let anchor = center.offset(direction, -self.reach);
        [&self.forward, &self.backward]
            .into_iter()
            .any(|word| MatchAttempt::new(word, anchor).locked(direction).count(grid) > 0)
    }
}

impl TryFrom<&str> for CrossPattern {
    type Error = PatternError;

    fn try_from(text: &str) -> Result<Self, Self::Error> {
        Self::new(Word::new(text))
    }
}

/// Scans a grid and aggregates match counts.
pub struct PatternCounter<'g, G: ?Sized> {
    grid: &'g G,
}

impl<'g, G> PatternCounter<'g, G>
where
    G: GridOracle + ?Sized,
{
    pub fn new(grid: &'g G) -> Self {
        Self { grid }
    }

    /// Total straight-line placements of `word` anywhere in the grid, every
    /// direction and every overlapping placement counted on its own.
    pub fn count_word(&self, word: &Word) -> usize {
        self.word_starts(word)
            .map(|start| MatchAttempt::new(word, start).count(self.grid))
            .sum()
    }

    /// Every straight-line placement of `word`, ordered by start cell and
    /// then by fan-out direction.
    pub fn all_occurrences(&self, word: &Word) -> Vec<Occurrence> {
        self.word_starts(word)
            .flat_map(|start| MatchAttempt::new(word, start).occurrences(self.grid))
            .collect()
    }

    /// Number of cells at which `pattern` forms a complete "X".
    pub fn count_crossings(&self, pattern: &CrossPattern) -> usize {
        self.crossing_centers(pattern).count()
    }

    /// Centers of every complete "X" in row-major order.
    pub fn crossing_centers<'p>(
        &'p self,
        pattern: &'p CrossPattern,
    ) -> impl Iterator<Item = Position> + 'p {
        self.grid
            .dimensions()
            .positions()
            .filter(move |&center| pattern.matches_at(self.grid, center))
    }

    fn word_starts<'w>(&'w self, word: &'w Word) -> impl Iterator<Item = Position> + 'w {
        let first = word.first();
        self.grid
            .dimensions()
            .positions()
            .filter(move |&position| first.is_some() && self.grid.get(position) == first)
    }
}

/// Both counts for one grid under a [`SearchConfig`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SearchReport {
    pub word_count: usize,
    pub crossing_count: usize,
}

impl SearchReport {
    pub fn run<G>(grid: &G, config: &SearchConfig) -> Result<Self, PatternError>
    where
        G: GridOracle + ?Sized,
    {
        let pattern = CrossPattern::try_from(config.cross_word.as_str())?;
        let counter = PatternCounter::new(grid);

        Ok(Self {
            word_count: counter.count_word(&Word::new(&config.word)),
            crossing_count: counter.count_crossings(&pattern),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::Grid;

    fn mas() -> CrossPattern {
        CrossPattern::try_from("MAS").unwrap()
    }

    #[test]
    fn overlapping_forward_and_reverse_placements() {
        let grid = Grid::from_lines(["XMASAMX"]);
        let counter = PatternCounter::new(&grid);

        assert_eq!(counter.count_word(&Word::new("XMAS")), 2);

        let found = counter.all_occurrences(&Word::new("XMAS"));
        assert_eq!(
            found,
            vec![
                Occurrence {
                    start: Position::new(0, 0),
                    direction: Direction::East,
                },
                Occurrence {
                    start: Position::new(0, 6),
                    direction: Direction::West,
                },
            ]
        );
    }

    #[test]
    fn palindrome_counts_both_readings() {
        let grid = Grid::from_lines(["ABA"]);

        assert_eq!(PatternCounter::new(&grid).count_word(&Word::new("ABA")), 2);
    }

    #[test]
    fn empty_word_has_no_qualifying_cells() {
        let grid = Grid::from_lines(["ABC"]);

        assert_eq!(PatternCounter::new(&grid).count_word(&Word::default()), 0);
    }

    #[test]
    fn single_character_word_counts_cells() {
        let grid = Grid::from_lines(["AXA", "XAX"]);

        assert_eq!(PatternCounter::new(&grid).count_word(&Word::new("A")), 3);
    }

    #[test]
    fn minimal_cross() {
        let grid = Grid::from_lines(["M.S", ".A.", "M.S"]);
        let counter = PatternCounter::new(&grid);

        assert_eq!(counter.count_crossings(&mas()), 1);
        assert_eq!(
            counter.crossing_centers(&mas()).collect::<Vec<_>>(),
            vec![Position::new(1, 1)]
        );
    }

    #[test]
    fn arms_choose_orientation_independently() {
        for rows in [
            ["M.M", ".A.", "S.S"],
            ["S.S", ".A.", "M.M"],
            ["S.M", ".A.", "S.M"],
            ["M.S", ".A.", "M.S"],
        ] {
            let grid = Grid::from_lines(rows);
            assert_eq!(PatternCounter::new(&grid).count_crossings(&mas()), 1, "{rows:?}");
        }
    }

    #[test]
    fn straight_cross_is_not_an_x() {
        let grid = Grid::from_lines([".M.", "MAS", ".S."]);

        assert_eq!(PatternCounter::new(&grid).count_crossings(&mas()), 0);
    }

    #[test]
    fn one_matching_arm_is_not_enough() {
        let grid = Grid::from_lines(["M.M", ".A.", "X.S"]);

        assert_eq!(PatternCounter::new(&grid).count_crossings(&mas()), 0);
    }

    #[test]
    fn centers_on_the_border_never_match() {
        let grid = Grid::from_lines(["A.S", ".A.", "M.S"]);

        // Only the middle cell has a full neighbourhood.
        assert_eq!(PatternCounter::new(&grid).count_crossings(&mas()), 0);
    }

    #[test]
    fn longer_odd_words_extend_the_arms() {
        let grid = Grid::from_lines(["X...S", ".M.M.", "..A..", ".M.M.", "X...S"]);
        let pattern = CrossPattern::try_from("XMAMS").unwrap();

        assert_eq!(pattern.center(), 'A');
        assert_eq!(PatternCounter::new(&grid).count_crossings(&pattern), 1);
    }

    #[test]
    fn rejects_words_without_a_center() {
        assert_eq!(
            CrossPattern::try_from("XMAS"),
            Err(PatternError::EvenLength { len: 4 })
        );
        assert_eq!(
            CrossPattern::try_from("A"),
            Err(PatternError::TooShort { len: 1 })
        );
        assert_eq!(
            CrossPattern::try_from(""),
            Err(PatternError::TooShort { len: 0 })
        );
    }

    #[test]
    fn empty_grid_counts_nothing() {
        let grid = Grid::default();
        let report = SearchReport::run(&grid, &SearchConfig::default()).unwrap();

        assert_eq!(report, SearchReport::default());
    }

    #[test]
    fn report_rejects_even_cross_word() {
        let grid = Grid::from_lines(["XMAS"]);
        let config = SearchConfig::default().with_cross_word("AMAS");

        assert!(SearchReport::run(&grid, &config).is_err());
    }
}
