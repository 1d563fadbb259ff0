use ndarray::{Array1, Array2};

use crate::actions::{Action, ActionCatalog, Orientation, MOVE_DELTAS};
use crate::config::GameConfig;
use crate::pathfinding::path_length;
use crate::player::Player;
use crate::point::Point;

// Cell values in the projection grid fed to the learning agent.
// These must stay stable across calls for the learning signal to mean anything.
pub const CELL_EMPTY: i8 = 0;
pub const CELL_WALL: i8 = -1;
pub const CELL_SELF: i8 = 5;
pub const CELL_ENEMY: i8 = 1;

/// The mutable state of one game: token positions, placed walls, remaining
/// wall stock and the winner, plus the legality predicates and action
/// application that mutate it.
///
/// The engine does not track whose turn it is — every call takes a `Player`
/// and turn alternation is the caller's job. It also does not refuse actions
/// submitted after `winner` is set; the turn loop must stop on a terminal
/// state.
#[derive(Clone, Debug)]
pub struct BoardState {
    board_size: i32,
    /// (N−1)×(N−1) wall-slot grid, indexed `[x, y]`.
    walls: Array2<Option<Orientation>>,
    /// Remaining wall stock, indexed by `Player::index()`. Never negative.
    wall_counts: [i32; 2],
    /// Token positions, indexed by `Player::index()`. The two tokens never
    /// share a cell.
    positions: [Point; 2],
    winner: Option<Player>,
    reward_win: f32,
    reward_alive: f32,
}

impl BoardState {
    /// Fresh game: tokens on their home rows, full wall stock, no winner.
    pub fn new(config: &GameConfig) -> Self {
        let n = config.board_size;
        let slots = (n - 1) as usize;
        BoardState {
            board_size: n,
            walls: Array2::from_elem((slots, slots), None),
            wall_counts: [config.num_walls; 2],
            positions: [
                Player::Top.start_position(n),
                Player::Bottom.start_position(n),
            ],
            winner: None,
            reward_win: config.reward_win,
            reward_alive: config.reward_alive,
        }
    }

    pub fn board_size(&self) -> i32 {
        self.board_size
    }

    pub fn winner(&self) -> Option<Player> {
        self.winner
    }

    pub fn position(&self, player: Player) -> Point {
        self.positions[player.index()]
    }

    pub fn walls_remaining(&self, player: Player) -> i32 {
        self.wall_counts[player.index()]
    }

    /// The wall occupying a slot, if any.
    pub fn wall_at(&self, slot: Point) -> Option<Orientation> {
        self.walls[[slot.x as usize, slot.y as usize]]
    }

    fn in_bounds(&self, p: Point) -> bool {
        p.x >= 0 && p.x < self.board_size && p.y >= 0 && p.y < self.board_size
    }

    fn slot_in_bounds(&self, slot: Point) -> bool {
        slot.x >= 0 && slot.x < self.board_size - 1 && slot.y >= 0 && slot.y < self.board_size - 1
    }

    fn token_at(&self, p: Point) -> bool {
        self.positions[0] == p || self.positions[1] == p
    }

    /// Whether `player` may take `action` in the physical board frame.
    pub fn is_legal_action(&mut self, player: Player, action: Action) -> bool {
        match action {
            Action::Move(delta) => self.is_legal_move(self.position(player), delta),
            Action::Wall {
                position,
                orientation,
            } => self.is_legal_wall(player, position, orientation),
        }
    }

    /// Whether moving by `delta` from `position` is legal.
    ///
    /// Illegal moves: leaving the board, any diagonal delta, stepping into a
    /// wall or a token, or jumping without the other token at the midpoint.
    /// Diagonal side-step jumps around a blocked straight jump are not
    /// modeled.
    pub fn is_legal_move(&self, position: Point, delta: Point) -> bool {
        let destination = position + delta;

        if !self.in_bounds(destination) || !delta.is_axis_aligned() {
            return false;
        }

        match delta.manhattan() {
            1 => !self.token_at(destination) && !self.wall_between(position, destination),
            2 => {
                // Jumps only clear the other token, never an empty cell.
                let midpoint = position + Point::new(delta.x / 2, delta.y / 2);
                self.token_at(midpoint)
                    && !self.wall_between(position, midpoint)
                    && !self.wall_between(midpoint, destination)
            }
            _ => false,
        }
    }

    /// Whether a wall segment crosses the edge between the axis-aligned
    /// adjacent cells `a` and `b`.
    ///
    /// Each cell boundary is shared by up to two wall slots (one at a board
    /// edge); a horizontal wall cuts vertical movement and a vertical wall
    /// cuts horizontal movement.
    pub fn wall_between(&self, a: Point, b: Point) -> bool {
        if a.x == b.x {
            let y = a.y.min(b.y);
            // Horizontal wall centered to the left or right of the column
            (a.x > 0 && self.wall_at(Point::new(a.x - 1, y)) == Some(Orientation::Horizontal))
                || (a.x < self.board_size - 1
                    && self.wall_at(Point::new(a.x, y)) == Some(Orientation::Horizontal))
        } else {
            let x = a.x.min(b.x);
            // Vertical wall centered above or below the row
            (a.y > 0 && self.wall_at(Point::new(x, a.y - 1)) == Some(Orientation::Vertical))
                || (a.y < self.board_size - 1
                    && self.wall_at(Point::new(x, a.y)) == Some(Orientation::Vertical))
        }
    }

    /// Positions reachable in one move from `position`, including jumps over
    /// a token. This is the neighbor function the reachability oracle
    /// searches over.
    pub fn valid_neighbors(&self, position: Point) -> Vec<Point> {
        MOVE_DELTAS
            .iter()
            .filter(|&&delta| self.is_legal_move(position, delta))
            .map(|&delta| position + delta)
            .collect()
    }

    /// Whether placing a wall of `orientation` at `slot` by `player` is legal.
    ///
    /// Rejected when the player is out of walls, the slot is outside the wall
    /// grid or occupied, the wall would cut off either player's last path to
    /// their goal, or it would collinearly overlap an adjacent wall of the
    /// same orientation.
    ///
    /// Takes `&mut self` because the connectivity guard provisionally places
    /// the wall before probing reachability; the placement is always reverted
    /// before returning, and the exclusive borrow guarantees no reader can
    /// observe the probe.
    pub fn is_legal_wall(&mut self, player: Player, slot: Point, orientation: Orientation) -> bool {
        if self.wall_counts[player.index()] <= 0 {
            return false;
        }

        if !self.slot_in_bounds(slot) || self.wall_at(slot).is_some() {
            return false;
        }

        // Connectivity guard: a wall may never strand either player from
        // their goal edge. place_wall/remove_wall are exact inverses, so the
        // probe leaves no trace.
        self.place_wall(player, slot, orientation);
        let both_reachable =
            self.path_to_goal_exists(Player::Top) && self.path_to_goal_exists(Player::Bottom);
        self.remove_wall(player, slot);
        if !both_reachable {
            return false;
        }

        // A wall spans two slot-lengths, so same-orientation neighbors along
        // its axis would overlap it.
        match orientation {
            Orientation::Vertical => {
                if (slot.y != self.board_size - 2
                    && self.wall_at(Point::new(slot.x, slot.y + 1)) == Some(Orientation::Vertical))
                    || (slot.y != 0
                        && self.wall_at(Point::new(slot.x, slot.y - 1))
                            == Some(Orientation::Vertical))
                {
                    return false;
                }
            }
            Orientation::Horizontal => {
                if (slot.x != self.board_size - 2
                    && self.wall_at(Point::new(slot.x + 1, slot.y))
                        == Some(Orientation::Horizontal))
                    || (slot.x != 0
                        && self.wall_at(Point::new(slot.x - 1, slot.y))
                            == Some(Orientation::Horizontal))
                {
                    return false;
                }
            }
        }

        true
    }

    fn place_wall(&mut self, player: Player, slot: Point, orientation: Orientation) {
        self.walls[[slot.x as usize, slot.y as usize]] = Some(orientation);
        self.wall_counts[player.index()] -= 1;
    }

    /// Exact inverse of `place_wall`: clears the slot and refunds the wall.
    fn remove_wall(&mut self, player: Player, slot: Point) {
        self.walls[[slot.x as usize, slot.y as usize]] = None;
        self.wall_counts[player.index()] += 1;
    }

    /// Shortest path length from `player`'s token to their goal edge given
    /// the current walls, or `None` if no path exists.
    pub fn distance_to_goal(&self, player: Player) -> Option<u32> {
        let goal_row = player.goal_row(self.board_size);
        path_length(
            |p| self.valid_neighbors(p),
            self.position(player),
            |p| p.y == goal_row,
            |p| (p.y - goal_row).unsigned_abs(),
        )
    }

    /// Reachability oracle used by the wall-legality connectivity guard.
    pub fn path_to_goal_exists(&self, player: Player) -> bool {
        self.distance_to_goal(player).is_some()
    }

    /// Apply an already-confirmed legal action and return its reward.
    ///
    /// Submitting an action that was not confirmed legal is a precondition
    /// violation: debug builds fail fast, release builds assume it never
    /// happens.
    pub fn apply_action(&mut self, player: Player, action: Action) -> f32 {
        match action {
            Action::Move(delta) => {
                debug_assert!(
                    self.is_legal_move(self.position(player), delta),
                    "illegal move {delta} applied by {player:?}"
                );
                let destination = self.position(player) + delta;
                self.positions[player.index()] = destination;

                if destination.y == player.goal_row(self.board_size) {
                    self.winner = Some(player);
                    return self.reward_win;
                }
                self.reward_alive
            }
            Action::Wall {
                position,
                orientation,
            } => {
                debug_assert!(
                    self.is_legal_wall(player, position, orientation),
                    "illegal wall {position} applied by {player:?}"
                );
                self.place_wall(player, position, orientation);
                self.reward_alive
            }
        }
    }

    /// Legality of every catalog action for `player`, indexed by catalog
    /// position. Actions are taken in the physical board frame; callers
    /// working in `Top`'s perspective transform before masking.
    pub fn legal_action_mask(&mut self, player: Player, catalog: &ActionCatalog) -> Vec<bool> {
        let mut mask = Vec::with_capacity(catalog.len());
        for &action in catalog.iter() {
            mask.push(self.is_legal_action(player, action));
        }
        mask
    }

    /// Whether `player` has any legal action at all. An entirely boxed-in
    /// player (possible on tiny boards) is a distinguishable condition the
    /// turn loop uses to abandon the episode.
    pub fn has_legal_action(&mut self, player: Player, catalog: &ActionCatalog) -> bool {
        catalog
            .iter()
            .any(|&action| self.is_legal_action(player, action))
    }

    /// Side length of the projection grid: cells interleaved with wall space.
    pub fn full_grid_size(&self) -> i32 {
        self.board_size * 2 - 1
    }

    /// Length of the state vector: flattened projection grid plus the two
    /// wall counts.
    pub fn vector_state_size(&self) -> usize {
        let g = self.full_grid_size() as usize;
        g * g + 2
    }

    /// Project the state onto a (2N−1)×(2N−1) grid, indexed `[x, y]`.
    ///
    /// Even/even coordinates are board cells, marked with [`CELL_SELF`] for
    /// `current`'s token and [`CELL_ENEMY`] for the other; odd coordinates
    /// are the space between cells, marked [`CELL_WALL`] where a wall spans
    /// that boundary.
    pub fn build_grid(&self, current: Player) -> Array2<i8> {
        let g = self.full_grid_size() as usize;
        let mut grid = Array2::from_elem((g, g), CELL_EMPTY);

        for x in 0..self.board_size - 1 {
            for y in 0..self.board_size - 1 {
                let gx = (2 * x + 1) as usize;
                let gy = (2 * y + 1) as usize;
                match self.wall_at(Point::new(x, y)) {
                    Some(Orientation::Horizontal) => {
                        grid[[gx - 1, gy]] = CELL_WALL;
                        grid[[gx, gy]] = CELL_WALL;
                        grid[[gx + 1, gy]] = CELL_WALL;
                    }
                    Some(Orientation::Vertical) => {
                        grid[[gx, gy - 1]] = CELL_WALL;
                        grid[[gx, gy]] = CELL_WALL;
                        grid[[gx, gy + 1]] = CELL_WALL;
                    }
                    None => {}
                }
            }
        }

        let own = self.position(current);
        grid[[(own.x * 2) as usize, (own.y * 2) as usize]] = CELL_SELF;
        let enemy = self.position(current.opponent());
        grid[[(enemy.x * 2) as usize, (enemy.y * 2) as usize]] = CELL_ENEMY;

        grid
    }

    /// The state as `player` sees it, flattened for the learning agent:
    /// projection grid in `player`'s frame, then own wall stock, then the
    /// enemy's. `Top` reads the grid with both axes reversed, which is the
    /// same point reflection the action transform applies.
    pub fn state_vector(&self, player: Player) -> Array1<f32> {
        let grid = self.build_grid(player);
        let g = self.full_grid_size() as usize;

        let mut vector = Vec::with_capacity(self.vector_state_size());
        if player.is_reflected() {
            for y in (0..g).rev() {
                for x in (0..g).rev() {
                    vector.push(grid[[x, y]] as f32);
                }
            }
        } else {
            for y in 0..g {
                for x in 0..g {
                    vector.push(grid[[x, y]] as f32);
                }
            }
        }

        vector.push(self.walls_remaining(player) as f32);
        vector.push(self.walls_remaining(player.opponent()) as f32);

        Array1::from(vector)
    }
}
