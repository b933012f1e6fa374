//! Chain discovery, liberty counting and region border queries.
//!
//! All traversals use an explicit worklist, so a board-filling chain does not
//! grow the call stack.

use std::collections::{BTreeMap, BTreeSet, HashSet};

use tracing::trace;

use crate::board::{Board, Intersection, Point};

/// The chain reachable from `seed`.
///
/// From each popped point `p`, its close friends are `p` itself and every
/// neighbor whose current color equals `p.color`. The visited set is keyed on
/// the whole `(x, y, color)` point, and the seed's color is taken as given
/// rather than re-read from the board.
pub fn friends(board: &Board, seed: Point) -> HashSet<Point> {
    let mut seen: HashSet<Point> = HashSet::new();
    let mut stack = vec![seed];
    while let Some(p) = stack.pop() {
        if !seen.insert(p) {
            continue;
        }
        for n in board.neighbors(p.x, p.y) {
            if n.color == p.color && !seen.contains(&n) {
                stack.push(n);
            }
        }
    }
    trace!(x = seed.x, y = seed.y, color = %seed.color, size = seen.len(), "chain");
    seen
}

/// Number of distinct empty intersections adjacent to the chain of `seed`.
pub fn liberties(board: &Board, seed: Point) -> usize {
    let mut libs: HashSet<Point> = HashSet::new();
    for p in friends(board, seed) {
        libs.extend(
            board
                .neighbors(p.x, p.y)
                .into_iter()
                .filter(|n| n.color == Intersection::Empty),
        );
    }
    libs.len()
}

/// For each color present among `group`'s members, the number of distinct
/// points adjacent to the members of that color.
///
/// The key is the member's own color, not the neighbor's, so an all-empty
/// region yields a single `Empty` entry counting every point that touches it
/// (region members included).
pub fn adjacent_color_map<'a, I>(board: &Board, group: I) -> BTreeMap<Intersection, usize>
where
    I: IntoIterator<Item = &'a Point>,
{
    let mut adjacent: BTreeMap<Intersection, HashSet<Point>> = BTreeMap::new();
    for p in group {
        adjacent
            .entry(p.color)
            .or_default()
            .extend(board.neighbors(p.x, p.y));
    }
    adjacent.into_iter().map(|(c, s)| (c, s.len())).collect()
}

/// Stone colors touching any point of `region`.
pub fn bordering_colors<'a, I>(board: &Board, region: I) -> BTreeSet<Intersection>
where
    I: IntoIterator<Item = &'a Point>,
{
    region
        .into_iter()
        .flat_map(|p| board.neighbors(p.x, p.y))
        .map(|n| n.color)
        .filter(|c| c.is_stone())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Intersection::{Black, Empty, White};

    fn coords(chain: &HashSet<Point>) -> BTreeSet<(usize, usize)> {
        chain.iter().map(Point::coord).collect()
    }

    #[test]
    fn test_friends_single_stone() {
        let mut board = Board::new(5).unwrap();
        board.set_color(2, 2, Black);
        let chain = friends(&board, Point::new(2, 2, Black));
        assert_eq!(chain.len(), 1);
        assert!(chain.contains(&Point::new(2, 2, Black)));
    }

    #[test]
    fn test_friends_follows_same_color_only() {
        let board: Board = "bb---\n-bw--\n-ww--\n-----\n----b".parse().unwrap();
        let black = friends(&board, Point::new(0, 0, Black));
        assert_eq!(coords(&black), BTreeSet::from([(0, 0), (1, 0), (1, 1)]));

        let white = friends(&board, Point::new(2, 1, White));
        assert_eq!(coords(&white), BTreeSet::from([(2, 1), (1, 2), (2, 2)]));
    }

    #[test]
    fn test_friends_empty_region() {
        let board: Board = "-b-\nbb-\n---".parse().unwrap();
        let region = friends(&board, Point::new(0, 0, Empty));
        assert_eq!(coords(&region), BTreeSet::from([(0, 0)]));
        let region = friends(&board, Point::new(2, 2, Empty));
        assert_eq!(region.len(), 5);
    }

    #[test]
    fn test_friends_seed_color_taken_as_given() {
        // Seeding an empty cell with Black collects the black stones next to it
        // but never the seed coordinate under its real color.
        let board: Board = "---\n-b-\n---".parse().unwrap();
        let chain = friends(&board, Point::new(1, 0, Black));
        assert_eq!(
            chain,
            HashSet::from([Point::new(1, 0, Black), Point::new(1, 1, Black)])
        );
    }

    #[test]
    fn test_liberties_isolated_stone() {
        let mut board = Board::new(5).unwrap();
        board.set_color(2, 2, Black);
        board.set_color(0, 2, Black);
        board.set_color(4, 4, White);
        assert_eq!(liberties(&board, Point::new(2, 2, Black)), 4);
        assert_eq!(liberties(&board, Point::new(0, 2, Black)), 3);
        assert_eq!(liberties(&board, Point::new(4, 4, White)), 2);
    }

    #[test]
    fn test_liberties_shared_are_counted_once() {
        // (1,1) touches both (1,0) and (0,1).
        let board: Board = "bb-\nb--\n---".parse().unwrap();
        assert_eq!(liberties(&board, Point::new(0, 0, Black)), 3);
    }

    #[test]
    fn test_liberties_zero_when_surrounded() {
        let board: Board = "-w-\nwbw\n-w-".parse().unwrap();
        assert_eq!(liberties(&board, Point::new(1, 1, Black)), 0);
    }

    #[test]
    fn test_adjacent_color_map_empty_board() {
        let board = Board::new(3).unwrap();
        let region = friends(&board, Point::new(0, 0, Empty));
        let map = adjacent_color_map(&board, &region);
        assert_eq!(map, BTreeMap::from([(Empty, 9)]));
    }

    #[test]
    fn test_adjacent_color_map_keys_by_member_color() {
        let board: Board = "-b-\nbb-\n---".parse().unwrap();
        let corner = friends(&board, Point::new(0, 0, Empty));
        // (0,0) touches (0,1) and (1,0), both black, but the key is Empty.
        assert_eq!(
            adjacent_color_map(&board, &corner),
            BTreeMap::from([(Empty, 2)])
        );

        let mixed = [Point::new(0, 0, Empty), Point::new(1, 1, Black)];
        assert_eq!(
            adjacent_color_map(&board, &mixed),
            BTreeMap::from([(Empty, 2), (Black, 4)])
        );
    }

    #[test]
    fn test_bordering_colors() {
        let board: Board = "-b-\nbb-\n--w".parse().unwrap();
        let corner = friends(&board, Point::new(0, 0, Empty));
        assert_eq!(bordering_colors(&board, &corner), BTreeSet::from([Black]));
        let rest = friends(&board, Point::new(2, 0, Empty));
        assert_eq!(
            bordering_colors(&board, &rest),
            BTreeSet::from([Black, White])
        );
    }
}
