use std::collections::VecDeque;

use games::index::IndexedVec;
use games::{ParityGame, Player, VertexId};

/// Result of an attractor computation.
pub struct Attraction {
    /// The attracted vertices in insertion order, starting with the part of
    /// the target that was active.
    pub vertices: Vec<VertexId>,
    /// A witness successor for every vertex attracted beyond the target. For
    /// vertices owned by the attracting player this is a strategy that
    /// guarantees entry into the target; for opponent vertices it is mere
    /// bookkeeping, since all their moves stay inside the attractor anyway.
    pub strategy: Vec<(VertexId, VertexId)>,
}

/// Computes the least set of vertices from which `player` can force the play
/// into `target`, considering only the vertices marked in `active`.
///
/// A `player` vertex is attracted as soon as one of its edges enters the
/// attractor, an opponent vertex once all of its active edges do. Backward
/// worklist over the predecessor lists, every edge is looked at once.
pub fn attract(
    game: &ParityGame,
    preds: &IndexedVec<VertexId, Vec<VertexId>>,
    active: &IndexedVec<VertexId, bool>,
    player: Player,
    target: &[VertexId],
) -> Attraction {
    let mut attracted = game.vertices().map(|_| false).collect::<IndexedVec<VertexId, _>>();

    // Number of active out-edges not yet leading into the attractor; an
    // opponent vertex is forced once this drops to zero.
    let mut remaining = game.vertices().map(|_| 0).collect::<IndexedVec<VertexId, usize>>();
    for v in game.vertices() {
        if active[v] {
            remaining[v] = game.successors_of(v).filter(|&w| active[w]).count();
        }
    }

    let mut vertices = Vec::new();
    let mut strategy = Vec::new();
    let mut queue = VecDeque::new();

    for &v in target {
        if active[v] && !attracted[v] {
            attracted[v] = true;
            vertices.push(v);
            queue.push_back(v);
        }
    }

    while let Some(v) = queue.pop_front() {
        for &u in &preds[v] {
            if !active[u] || attracted[u] {
                continue;
            }

            let joins = if game.player_of(u) == player {
                true
            } else {
                remaining[u] -= 1;
                remaining[u] == 0
            };

            if joins {
                attracted[u] = true;
                strategy.push((u, v));
                vertices.push(u);
                queue.push_back(u);
            }
        }
    }

    Attraction { vertices, strategy }
}
