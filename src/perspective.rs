//! Perspective transforms between the two players' coordinate frames.
//!
//! Both players' policies are expressed in a frame where their own forward
//! direction is +1 along the row axis. `Bottom`'s frame coincides with the
//! physical board; `Top`'s frame is the board point-reflected. The same
//! transform converts in both directions — it is its own inverse.

use crate::actions::Action;
use crate::player::Player;
use crate::point::Point;

/// Negate a move delta — `Top`'s forward step is the board's backward step.
pub fn reflect_move_delta(delta: Point) -> Point {
    Point::new(-delta.x, -delta.y)
}

/// Point-reflect a wall-slot position within the (N−1)×(N−1) wall grid.
/// Orientation is unaffected: the board is reflected, not rotated.
pub fn reflect_wall_position(position: Point, board_size: i32) -> Point {
    Point::new(board_size - 2 - position.x, board_size - 2 - position.y)
}

/// Reflect an action into the opposite frame.
pub fn reflect_action(action: Action, board_size: i32) -> Action {
    match action {
        Action::Move(delta) => Action::Move(reflect_move_delta(delta)),
        Action::Wall {
            position,
            orientation,
        } => Action::Wall {
            position: reflect_wall_position(position, board_size),
            orientation,
        },
    }
}

/// Convert an action between `player`'s frame and the physical board frame.
///
/// Identity for `Bottom`, reflection for `Top`. Because the reflection is an
/// involution, the same call maps self-perspective to global and back.
pub fn transform_action(player: Player, action: Action, board_size: i32) -> Action {
    if player.is_reflected() {
        reflect_action(action, board_size)
    } else {
        action
    }
}
