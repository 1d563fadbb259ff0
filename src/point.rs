use std::fmt;
use std::ops::Add;

/// A 2D integer coordinate, used both as a board cell address and as a
/// directional delta for move actions.
///
/// The derived `Ord` is lexicographic (x, then y), which is what the
/// pathfinder's priority queue needs to break ties between entries with
/// equal keys. Tie order is arbitrary and nothing should depend on it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub const fn new(x: i32, y: i32) -> Self {
        Point { x, y }
    }

    /// True if this delta is axis-aligned (no diagonal component).
    pub fn is_axis_aligned(&self) -> bool {
        self.x == 0 || self.y == 0
    }

    /// Manhattan magnitude — 1 for an orthogonal step, 2 for a jump.
    pub fn manhattan(&self) -> i32 {
        self.x.abs() + self.y.abs()
    }
}

impl Add for Point {
    type Output = Point;

    fn add(self, other: Point) -> Point {
        Point::new(self.x + other.x, self.y + other.y)
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({},{})", self.x, self.y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add() {
        assert_eq!(Point::new(1, 2) + Point::new(-1, 3), Point::new(0, 5));
    }

    #[test]
    fn test_axis_aligned() {
        assert!(Point::new(2, 0).is_axis_aligned());
        assert!(Point::new(0, -1).is_axis_aligned());
        assert!(!Point::new(1, 1).is_axis_aligned());
    }

    #[test]
    fn test_manhattan() {
        assert_eq!(Point::new(0, -2).manhattan(), 2);
        assert_eq!(Point::new(1, 0).manhattan(), 1);
    }

    #[test]
    fn test_ordering_is_lexicographic() {
        assert!(Point::new(0, 9) < Point::new(1, 0));
        assert!(Point::new(1, 0) < Point::new(1, 1));
    }
}
