//! The knight move rule.
//!
//! A knight has exactly eight legal displacements. The table order below is
//! the exploration order of every search in the workspace, which is what
//! makes their output reproducible.

use crate::geom::Point;

/// A displacement applied to a [`Point`].
pub type Move = Point;

/// The eight legal knight displacements, in exploration order.
pub const KNIGHT_MOVES: [Move; 8] = [
    Point::new(1, 2),
    Point::new(2, 1),
    Point::new(2, -1),
    Point::new(1, -2),
    Point::new(-1, 2),
    Point::new(-2, 1),
    Point::new(-2, -1),
    Point::new(-1, -2),
];

/// Query functions over [`KNIGHT_MOVES`].
#[derive(Debug, Clone, Copy, Default)]
pub struct MoveRule;

impl MoveRule {
    /// Whether `mv` is one of the eight knight displacements.
    #[inline]
    pub fn is_legal(mv: Move) -> bool {
        KNIGHT_MOVES.contains(&mv)
    }

    /// The legal displacements in their fixed order.
    #[inline]
    pub fn legal_moves() -> &'static [Move; 8] {
        &KNIGHT_MOVES
    }

    /// The cell a move passes over: halfway along its long (magnitude 2)
    /// axis, level with `from` on the short axis.
    ///
    /// Every knight displacement has exactly one component of magnitude 2,
    /// so there is exactly one such cell.
    #[inline]
    pub fn midpoint(from: Point, mv: Move) -> Point {
        if mv.x.abs() == 2 {
            from.shift(mv.x / 2, 0)
        } else {
            from.shift(0, mv.y / 2)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn legal_set_is_exactly_the_knight_moves() {
        let mut legal = Vec::new();
        for dy in -4..=4 {
            for dx in -4..=4 {
                let d = Point::new(dx, dy);
                if MoveRule::is_legal(d) {
                    legal.push(d);
                }
            }
        }
        assert_eq!(legal.len(), 8);
        for d in legal {
            let (ax, ay) = (d.x.abs(), d.y.abs());
            assert!((ax, ay) == (1, 2) || (ax, ay) == (2, 1), "{d}");
        }
    }

    #[test]
    fn zero_and_diagonal_are_illegal() {
        assert!(!MoveRule::is_legal(Point::new(0, 0)));
        assert!(!MoveRule::is_legal(Point::new(1, 1)));
        assert!(!MoveRule::is_legal(Point::new(2, 2)));
        assert!(!MoveRule::is_legal(Point::new(0, 3)));
    }

    #[test]
    fn legal_moves_order_is_fixed() {
        let moves = MoveRule::legal_moves();
        assert_eq!(moves[0], Point::new(1, 2));
        assert_eq!(moves[1], Point::new(2, 1));
        assert_eq!(moves[7], Point::new(-1, -2));
    }

    #[test]
    fn exactly_one_long_axis() {
        for mv in KNIGHT_MOVES {
            assert!((mv.x.abs() == 2) ^ (mv.y.abs() == 2), "{mv}");
        }
    }

    #[test]
    fn midpoint_lies_on_long_axis() {
        let from = Point::new(3, 3);
        assert_eq!(MoveRule::midpoint(from, Point::new(2, 1)), Point::new(4, 3));
        assert_eq!(MoveRule::midpoint(from, Point::new(-2, -1)), Point::new(2, 3));
        assert_eq!(MoveRule::midpoint(from, Point::new(1, 2)), Point::new(3, 4));
        assert_eq!(MoveRule::midpoint(from, Point::new(-1, -2)), Point::new(3, 2));
    }
}
