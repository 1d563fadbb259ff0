use crate::point::Point;

/// One of the two players. `Top` starts on row 0 and must reach row N−1;
/// `Bottom` starts on row N−1 and must reach row 0.
///
/// Used as an array index throughout via [`Player::index`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Player {
    Top,
    Bottom,
}

impl Player {
    pub fn opponent(self) -> Player {
        match self {
            Player::Top => Player::Bottom,
            Player::Bottom => Player::Top,
        }
    }

    pub fn index(self) -> usize {
        match self {
            Player::Top => 0,
            Player::Bottom => 1,
        }
    }

    /// The row this player must reach to win.
    pub fn goal_row(self, board_size: i32) -> i32 {
        match self {
            Player::Top => board_size - 1,
            Player::Bottom => 0,
        }
    }

    /// Starting position: center column of the player's home row.
    pub fn start_position(self, board_size: i32) -> Point {
        let row = match self {
            Player::Top => 0,
            Player::Bottom => board_size - 1,
        };
        Point::new(board_size / 2, row)
    }

    /// Whether this player's perspective frame is the point reflection of
    /// the physical board. `Bottom`'s frame is the identity.
    pub fn is_reflected(self) -> bool {
        matches!(self, Player::Top)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_opponent() {
        assert_eq!(Player::Top.opponent(), Player::Bottom);
        assert_eq!(Player::Bottom.opponent(), Player::Top);
    }

    #[test]
    fn test_goal_rows() {
        assert_eq!(Player::Top.goal_row(9), 8);
        assert_eq!(Player::Bottom.goal_row(9), 0);
    }

    #[test]
    fn test_start_positions() {
        assert_eq!(Player::Top.start_position(4), Point::new(2, 0));
        assert_eq!(Player::Bottom.start_position(4), Point::new(2, 3));
        assert_eq!(Player::Top.start_position(9), Point::new(4, 0));
    }
}
