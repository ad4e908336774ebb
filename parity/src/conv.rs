use anyhow::{bail, Context, Result};
use games::{ParityGame, VertexId};
use solver::{Map, Set};

use crate::RawVertex;

/// Turns parsed vertex rows into a dense game arena, checking everything the
/// solvers assume: known ids, no duplicate declarations or edges, and at
/// least one outgoing edge per vertex. Returns the game together with the
/// mapping from file ids to arena ids; vertices are numbered in file order.
pub fn build_game(rows: &[RawVertex]) -> Result<(ParityGame, Map<usize, VertexId>)> {
    let mut game = ParityGame::new();
    let mut ids = Map::default();

    for row in rows {
        if row.successors.is_empty() {
            bail!("vertex {} has no successors", row.id);
        }
        let v = game.add_vertex(row.player, row.priority);
        if ids.insert(row.id, v).is_some() {
            bail!("vertex {} is declared twice", row.id);
        }
    }

    let mut seen = Set::default();
    for row in rows {
        let v = ids[&row.id];
        for &succ in &row.successors {
            let w = *ids
                .get(&succ)
                .with_context(|| format!("vertex {} has an unknown successor {succ}", row.id))?;
            if !seen.insert((v, w)) {
                bail!("duplicate edge from {} to {succ}", row.id);
            }
            game.add_edge(v, w);
        }
    }

    debug_assert!(game.is_total());
    Ok((game, ids))
}
