use games::index::IndexedVec;
use games::{ParityGame, Player, VertexId};

use crate::attractor::attract;
use crate::solution::Solution;

/// Solves `game` with a fresh [`RecursiveSolver`] without a depth limit.
pub fn solve(game: &ParityGame) -> Solution {
    RecursiveSolver::new().solve(game)
}

/// Zielonka's recursive algorithm.
///
/// The highest priority's player attracts the vertices carrying it; the rest
/// of the game is solved recursively. If the opponent wins part of that
/// subgame, the opponent's attractor to those wins is settled for them and
/// the remainder is solved again. Subgames are expressed by masking
/// vertices out of `active` rather than by copying the graph.
#[derive(Default)]
pub struct RecursiveSolver {
    /// Recursion depth at which the solve gives up, 0 for unlimited.
    max_depth: usize,
    deepest: usize,
    subgames: u64,
}

impl RecursiveSolver {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_max_depth(max_depth: usize) -> Self {
        Self { max_depth, ..Self::default() }
    }

    pub fn solve(&mut self, game: &ParityGame) -> Solution {
        let mut solution = Solution::new(game);
        if game.is_empty() {
            solution.set_solved(true);
            return solution;
        }

        self.deepest = 0;
        self.subgames = 0;

        let preds = game.predecessors();
        let mut active = game.vertices().map(|_| true).collect::<IndexedVec<VertexId, _>>();

        if !self.split(game, &preds, &mut active, 0, &mut solution) {
            log::warn!("giving up: recursion depth limit {} exceeded", self.max_depth);
            return solution;
        }

        log::debug!("solved after {} subgames, deepest recursion {}", self.subgames, self.deepest);

        // Winners are final; strategies are picked afterwards so that every
        // winner-owned vertex gets an edge that stays in its region.
        solution.complete_strategies(game);
        solution.set_solved(true);
        solution
    }

    /// Solves the subgame of the vertices marked in `active`, recording
    /// winners in `solution`. Restores `active` before returning true;
    /// returns false if the depth limit was hit.
    fn split(
        &mut self,
        game: &ParityGame,
        preds: &IndexedVec<VertexId, Vec<VertexId>>,
        active: &mut IndexedVec<VertexId, bool>,
        depth: usize,
        solution: &mut Solution,
    ) -> bool {
        if self.max_depth > 0 && depth >= self.max_depth {
            return false;
        }
        self.deepest = self.deepest.max(depth);

        let Some(top) = game
            .vertices()
            .filter(|&v| active[v])
            .map(|v| game.priority_of(v))
            .max()
        else {
            return true;
        };
        let player = Player::of_priority(top);

        let targets = game
            .vertices()
            .filter(|&v| active[v] && game.priority_of(v) == top)
            .collect::<Vec<_>>();

        let attraction = attract(game, preds, active, player, &targets);
        for &v in &attraction.vertices {
            solution.set_winner(v, player);
            active[v] = false;
        }

        self.subgames += 1;
        if !self.split(game, preds, active, depth + 1, solution) {
            return false;
        }

        let opponent = player.opponent();
        let opp_won = game
            .vertices()
            .filter(|&v| active[v] && solution.try_winner(v) == Some(opponent))
            .collect::<Vec<_>>();

        for &v in &attraction.vertices {
            active[v] = true;
        }

        if opp_won.is_empty() {
            return true;
        }

        // The opponent snatches its attractor to the vertices it won; the
        // rest of this level must be solved again from scratch.
        let back = attract(game, preds, active, opponent, &opp_won);
        for &v in &back.vertices {
            solution.set_winner(v, opponent);
            active[v] = false;
        }

        self.subgames += 1;
        let solved = self.split(game, preds, active, depth + 1, solution);

        for &v in &back.vertices {
            active[v] = true;
        }
        solved
    }
}
