use games::index::IndexedVec;
use games::{ParityGame, Player, VertexId};

use crate::attractor::attract;
use crate::solution::Solution;

/// Solves a Büchi game encoded as a parity graph with priorities 0 and 1:
/// player 1 wins a play that visits priority 1 infinitely often.
///
/// Iterated fixed point: player 1's attractor to the accepting vertices is
/// computed within the still active subgame; the complement is a trap from
/// which player 0 can avoid the accepting set forever, so player 0 wins its
/// attractor, which is removed. Once the complement comes out empty the
/// remaining vertices are won by player 1.
pub fn solve(game: &ParityGame) -> Solution {
    let mut solution = Solution::new(game);
    if game.is_empty() {
        solution.set_solved(true);
        return solution;
    }

    if game.vertices().any(|v| game.priority_of(v) > 1) {
        log::error!("invalid büchi game: priorities must be 0 or 1");
        return solution;
    }

    let targets = game.vertices().filter(|&v| game.priority_of(v) == 1).collect::<Vec<_>>();
    log::debug!("büchi game with {} accepting vertices", targets.len());

    let preds = game.predecessors();
    let mut active = game.vertices().map(|_| true).collect::<IndexedVec<VertexId, _>>();
    let mut remaining = game.vertex_count();
    let mut iterations = 0u64;

    while remaining > 0 {
        iterations += 1;

        let to_targets = attract(game, &preds, &active, Player::P1, &targets);
        let mut reaches_targets =
            game.vertices().map(|_| false).collect::<IndexedVec<VertexId, bool>>();
        for &v in &to_targets.vertices {
            reaches_targets[v] = true;
        }

        let trap = game
            .vertices()
            .filter(|&v| active[v] && !reaches_targets[v])
            .collect::<Vec<_>>();

        if trap.is_empty() {
            for v in game.vertices().filter(|&v| active[v]) {
                solution.set_winner(v, Player::P1);
            }
            break;
        }

        let won = attract(game, &preds, &active, Player::P0, &trap);
        for &v in &won.vertices {
            solution.set_winner(v, Player::P0);
            active[v] = false;
        }
        remaining -= won.vertices.len();
    }

    log::debug!("büchi fixed point reached after {iterations} iterations");

    solution.complete_strategies(game);
    solution.set_solved(true);
    solution
}
