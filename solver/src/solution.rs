use std::iter;

use either::Either::*;
use games::index::IndexedVec;
use games::{ParityGame, Player, VertexId};

/// The outcome of a solve call: a winner for every vertex and, for the
/// vertices whose owner is their winner, a positional strategy.
pub struct Solution {
    solved: bool,
    winners: IndexedVec<VertexId, Option<Player>>,
    strategy: IndexedVec<VertexId, Option<VertexId>>,
}

impl Solution {
    pub fn new(game: &ParityGame) -> Self {
        Self {
            solved: false,
            winners: game.vertices().map(|_| None).collect(),
            strategy: game.vertices().map(|_| None).collect(),
        }
    }

    pub fn is_solved(&self) -> bool {
        self.solved
    }

    pub fn set_solved(&mut self, solved: bool) {
        self.solved = solved;
    }

    pub fn winner(&self, v: VertexId) -> Player {
        self.winners[v].expect("winner of an undecided vertex")
    }

    pub fn try_winner(&self, v: VertexId) -> Option<Player> {
        self.winners[v]
    }

    pub fn set_winner(&mut self, v: VertexId, player: Player) {
        self.winners[v] = Some(player);
    }

    pub fn has_strategy(&self, v: VertexId) -> bool {
        self.strategy[v].is_some()
    }

    /// The strategy successor of `v`. Only defined when `has_strategy(v)`.
    pub fn strategy(&self, v: VertexId) -> VertexId {
        self.strategy[v].expect("strategy of a vertex without one")
    }

    pub fn try_strategy(&self, v: VertexId) -> Option<VertexId> {
        self.strategy[v]
    }

    pub fn set_strategy(&mut self, v: VertexId, w: VertexId) {
        self.strategy[v] = Some(w);
    }

    /// The moves available from `v` once the recorded strategy is committed:
    /// the single strategy edge if there is one, all out-edges otherwise.
    pub fn successors_under<'a>(
        &'a self,
        game: &'a ParityGame,
        v: VertexId,
    ) -> impl Iterator<Item = VertexId> + 'a {
        match self.strategy[v] {
            Some(w) => Left(iter::once(w)),
            None => Right(game.successors_of(v)),
        }
    }

    /// Drops strategies of vertices that are not owned by their winner. The
    /// loser gains nothing from a fixed move, so only winner-owned choices
    /// are part of a solution.
    pub fn retain_owned_strategies(&mut self, game: &ParityGame) {
        for v in game.vertices() {
            if self.strategy[v].is_some() && self.winners[v] != Some(game.player_of(v)) {
                self.strategy[v] = None;
            }
        }
    }

    /// Gives every winner-owned vertex that still lacks a strategy some
    /// out-edge that stays in its winner's region.
    pub fn complete_strategies(&mut self, game: &ParityGame) {
        for v in game.vertices() {
            let winner = self.winner(v);
            if game.player_of(v) != winner || self.strategy[v].is_some() {
                continue;
            }
            let choice = game.successors_of(v).find(|&w| self.try_winner(w) == Some(winner));
            self.strategy[v] = choice;
        }
    }
}
