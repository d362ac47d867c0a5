//! Candidate move generation

use crate::board::{Board, Player, Pos};
use crate::game::GameState;
use crate::rules::legal_targets;

/// A board together with the placement that produced it.
///
/// The move label travels with the board through the recursion so the root
/// can tell which of its children a leaf value came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchNode {
    pub board: Board,
    /// `None` only for a root taken before the first stone
    pub mov: Option<Pos>,
}

impl SearchNode {
    pub fn new(board: Board, mov: Option<Pos>) -> Self {
        Self { board, mov }
    }

    /// Root node for searching from a live game.
    pub fn root(state: &GameState) -> Self {
        Self::new(state.board, state.adjacency_anchor())
    }

    /// All children reachable by `player` placing one stone, in the
    /// row-major order of [`legal_targets`].
    pub fn children(&self, player: Player) -> Vec<SearchNode> {
        generate(&self.board, self.mov, player)
    }
}

/// One child per legal target of `last`, each a fresh board copy with
/// `player`'s stone added.
pub fn generate(board: &Board, last: Option<Pos>, player: Player) -> Vec<SearchNode> {
    legal_targets(board, last)
        .into_iter()
        .map(|pos| SearchNode::new(board.with_stone(pos, player), Some(pos)))
        .collect()
}
