use crate::point::Point;

/// Orientation of a wall segment. A horizontal wall blocks movement between
/// vertically adjacent cells; a vertical wall blocks horizontal movement.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Orientation {
    Horizontal,
    Vertical,
}

/// Every action a player can take: step or jump the token by a delta, or
/// anchor a wall at a slot of the (N−1)×(N−1) wall grid.
///
/// Actions are pure values compared structurally; agents address them by
/// their index in the [`ActionCatalog`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Action {
    Move(Point),
    Wall {
        position: Point,
        orientation: Orientation,
    },
}

/// The 8 canonical move deltas: 4 orthogonal steps followed by 4 jumps.
/// This order is load-bearing — the catalog index space starts with these,
/// and learning agents address actions by position.
pub const MOVE_DELTAS: [Point; 8] = [
    Point::new(1, 0),
    Point::new(-1, 0),
    Point::new(0, 1),
    Point::new(0, -1),
    Point::new(2, 0),
    Point::new(-2, 0),
    Point::new(0, 2),
    Point::new(0, -2),
];

/// The ordered enumeration of every action for a given board size, and the
/// bidirectional mapping between actions and their integer indices.
///
/// Agents compute action indices, so this catalog is what turns an index
/// back into an action object the board state can check and apply. It is
/// constructed once per board size and shared read-only by all callers.
///
/// Ordering: the 8 move actions of [`MOVE_DELTAS`], then every wall slot in
/// x-outer/y-inner order, each slot emitting Horizontal then Vertical.
#[derive(Clone, Debug)]
pub struct ActionCatalog {
    moves: Vec<Action>,
    walls: Vec<Action>,
}

impl ActionCatalog {
    pub fn new(board_size: i32) -> Self {
        let moves = MOVE_DELTAS.iter().map(|&delta| Action::Move(delta)).collect();

        // Only board_size - 1 slots per row and column: walls sit between
        // board squares, never outside them.
        let mut walls = Vec::with_capacity(2 * (board_size as usize - 1).pow(2));
        for x in 0..board_size - 1 {
            for y in 0..board_size - 1 {
                walls.push(Action::Wall {
                    position: Point::new(x, y),
                    orientation: Orientation::Horizontal,
                });
                walls.push(Action::Wall {
                    position: Point::new(x, y),
                    orientation: Orientation::Vertical,
                });
            }
        }

        ActionCatalog { moves, walls }
    }

    pub fn num_moves(&self) -> usize {
        self.moves.len()
    }

    pub fn num_walls(&self) -> usize {
        self.walls.len()
    }

    /// Total number of actions — the learning agent's action-output
    /// cardinality.
    pub fn len(&self) -> usize {
        self.moves.len() + self.walls.len()
    }

    pub fn is_empty(&self) -> bool {
        self.moves.is_empty() && self.walls.is_empty()
    }

    /// Look up the action at `index`.
    ///
    /// # Panics
    /// If `index` is out of range — that is a programming error, never
    /// silently clamped.
    pub fn action_at(&self, index: usize) -> Action {
        if index < self.moves.len() {
            self.moves[index]
        } else {
            self.walls[index - self.moves.len()]
        }
    }

    /// Index of a structurally equal action in the canonical ordering, or
    /// `None` if the action is not a catalog member (e.g. a diagonal delta).
    pub fn index_of(&self, action: &Action) -> Option<usize> {
        match action {
            Action::Move(_) => self.moves.iter().position(|a| a == action),
            Action::Wall { .. } => self
                .walls
                .iter()
                .position(|a| a == action)
                .map(|i| i + self.moves.len()),
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = &Action> {
        self.moves.iter().chain(self.walls.iter())
    }
}
