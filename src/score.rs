//! Whole-board tallies.
//!
//! Both scorers walk every coordinate once: a stone counts for its own color,
//! an empty point pulls in its whole region, which is then removed from the
//! walk. They differ only in how a region is credited.

use std::collections::{BTreeMap, BTreeSet};

use tracing::debug;

use crate::board::{Board, Intersection, Point};
use crate::group::{adjacent_color_map, bordering_colors, friends};

/// Count per color. `Empty` collects whatever is not credited to a stone color.
pub type Tally = BTreeMap<Intersection, usize>;

/// Tally stones directly and fold in each empty region's
/// [`adjacent_color_map`].
///
/// Because that map is keyed by the region's own color, every region lands
/// on `Empty` with the count of points touching it (its bordering stones
/// included), so the total can exceed `size * size`.
pub fn score(board: &Board) -> Tally {
    walk(board, |region, tally| {
        for (color, n) in adjacent_color_map(board, region) {
            *tally.entry(color).or_default() += n;
        }
    })
}

/// Area scoring: a region bordered by exactly one stone color is credited to
/// that color, any other region to `Empty`. The total is always
/// `size * size`.
pub fn area_score(board: &Board) -> Tally {
    walk(board, |region, tally| {
        let borders = bordering_colors(board, region);
        let owner = match (borders.len(), borders.first()) {
            (1, Some(&color)) => color,
            _ => Intersection::Empty,
        };
        *tally.entry(owner).or_default() += region.len();
    })
}

fn walk<F>(board: &Board, mut credit_region: F) -> Tally
where
    F: FnMut(&BTreeSet<Point>, &mut Tally),
{
    let mut to_visit: BTreeSet<Point> = board.points().collect();
    let mut tally = Tally::new();
    let mut regions = 0usize;
    while let Some(p) = to_visit.pop_first() {
        if p.color == Intersection::Empty {
            let region: BTreeSet<Point> = friends(board, p).into_iter().collect();
            for member in &region {
                to_visit.remove(member);
            }
            credit_region(&region, &mut tally);
            regions += 1;
        } else {
            *tally.entry(p.color).or_default() += 1;
        }
    }
    debug!(size = board.size(), regions, ?tally, "scored board");
    tally
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Intersection::{Black, Empty, White};

    #[test]
    fn test_score_empty_board() {
        let board = Board::new(3).unwrap();
        assert_eq!(score(&board), Tally::from([(Empty, 9)]));
    }

    #[test]
    fn test_score_full_board_counts_each_stone() {
        let board: Board = "bwb\nwbw\nbwb".parse().unwrap();
        let tally = score(&board);
        assert_eq!(tally, Tally::from([(Black, 5), (White, 4)]));
        assert_eq!(tally.values().sum::<usize>(), 9);
    }

    #[test]
    fn test_score_region_counts_its_border() {
        let board: Board = "b--\n---\n---".parse().unwrap();
        assert_eq!(score(&board), Tally::from([(Black, 1), (Empty, 9)]));
    }

    #[test]
    fn test_score_sums_separate_regions() {
        // Two regions: {(0,0)} touches 2 points, the right column touches 6.
        let board: Board = "-b-\nbb-\nbb-".parse().unwrap();
        assert_eq!(score(&board), Tally::from([(Black, 5), (Empty, 8)]));
    }

    #[test]
    fn test_area_score_single_owner() {
        let board: Board = "b--\n---\n---".parse().unwrap();
        assert_eq!(area_score(&board), Tally::from([(Black, 9)]));
    }

    #[test]
    fn test_area_score_neutral_region() {
        let board: Board = "-b-w-\n-b-w-\n-b-w-\n-b-w-\n-b-w-".parse().unwrap();
        assert_eq!(
            area_score(&board),
            Tally::from([(Black, 10), (White, 10), (Empty, 5)])
        );
    }

    #[test]
    fn test_area_score_empty_board_is_neutral() {
        let board = Board::new(4).unwrap();
        assert_eq!(area_score(&board), Tally::from([(Empty, 16)]));
    }
}
