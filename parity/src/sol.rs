use games::index::AsIndex;
use games::VertexId;
use solver::solution::Solution;

use crate::RawVertex;

/// Renders a solution in the `paritysol` format: one row per vertex with its
/// winner and, for vertices owned by the winner, the strategy successor.
/// Vertices keep the ids they had in the game file.
pub fn write_solution(rows: &[RawVertex], solution: &Solution) -> String {
    let max_id = rows.iter().map(|row| row.id).max().unwrap_or(0);

    let mut out = format!("paritysol {max_id};\n");
    for (k, row) in rows.iter().enumerate() {
        let v = VertexId(k);
        let winner = solution.winner(v).index();
        match solution.try_strategy(v) {
            Some(w) => out.push_str(&format!("{} {winner} {};\n", row.id, rows[w.to_usize()].id)),
            None => out.push_str(&format!("{} {winner};\n", row.id)),
        }
    }
    out
}
