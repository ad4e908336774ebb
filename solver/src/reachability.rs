use games::index::IndexedVec;
use games::{ParityGame, Player, VertexId};

use crate::attractor::attract;
use crate::solution::Solution;

/// Solves a reachability game encoded as a parity graph: priority 1 marks
/// the vertices player 0 tries to reach, priority 0 everything else. The
/// winning region of player 0 is exactly the attractor to the targets.
///
/// Graphs with other priorities are rejected with an unsolved solution.
pub fn solve(game: &ParityGame) -> Solution {
    let mut solution = Solution::new(game);
    if game.is_empty() {
        solution.set_solved(true);
        return solution;
    }

    if game.vertices().any(|v| game.priority_of(v) > 1) {
        log::error!("invalid reachability game: priorities must be 0 or 1");
        return solution;
    }

    let targets = game.vertices().filter(|&v| game.priority_of(v) == 1).collect::<Vec<_>>();
    log::debug!("reachability game with {} target vertices", targets.len());

    if targets.is_empty() {
        for v in game.vertices() {
            solution.set_winner(v, Player::P1);
        }
        solution.complete_strategies(game);
        solution.set_solved(true);
        return solution;
    }

    let preds = game.predecessors();
    let active = game.vertices().map(|_| true).collect::<IndexedVec<VertexId, _>>();
    let attraction = attract(game, &preds, &active, Player::P0, &targets);

    for &v in &attraction.vertices {
        solution.set_winner(v, Player::P0);
    }
    for v in game.vertices() {
        if solution.try_winner(v).is_none() {
            solution.set_winner(v, Player::P1);
        }
    }

    for (u, w) in attraction.strategy {
        solution.set_strategy(u, w);
    }
    solution.retain_owned_strategies(game);
    // Vertices player 1 keeps can always stay outside the attractor; give
    // them such an edge. Target vertices may legitimately end up without a
    // strategy, reaching them is already the win.
    solution.complete_strategies(game);

    solution.set_solved(true);
    solution
}
