//! Rules engine for Quoridor, a two-player abstract strategy game: move a
//! token toward the opposite edge or spend a limited wall stock to block the
//! opponent, with the guarantee that no wall may ever make either player's
//! goal unreachable.
//!
//! The crate provides the board state with its legality predicates and
//! action application, the dense integer action-index space that learning
//! agents address actions through, the reachability search guarding wall
//! placement, and the perspective transforms that let each player's policy
//! see the board with its own forward direction positive.
//!
//! Turn alternation, rendering, human input and the learning loop are the
//! caller's concern: candidate actions must pass [`BoardState::is_legal_action`]
//! before being submitted to [`BoardState::apply_action`], and the caller
//! stops the game once [`BoardState::winner`] is set.

pub mod actions;
pub mod config;
pub mod pathfinding;
pub mod perspective;
pub mod player;
pub mod point;
pub mod state;

pub use actions::{Action, ActionCatalog, Orientation, MOVE_DELTAS};
pub use config::{load_config, GameConfig};
pub use pathfinding::path_length;
pub use perspective::{reflect_action, transform_action};
pub use player::Player;
pub use point::Point;
pub use state::{BoardState, CELL_EMPTY, CELL_ENEMY, CELL_SELF, CELL_WALL};
