pub mod index;


use std::cmp::Reverse;
use std::collections::{BTreeMap, BTreeSet};

use crate::index::{new_index, AsIndex, IndexedVec};

new_index!(pub index VertexId);

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Player {
    P0,
    P1,
}

impl Player {
    pub fn opponent(self) -> Player {
        match self {
            Player::P0 => Player::P1,
            Player::P1 => Player::P0,
        }
    }

    /// The player that wins a play whose dominant priority is `priority`.
    pub fn of_priority(priority: usize) -> Player {
        match priority % 2 {
            0 => Player::P0,
            _ => Player::P1,
        }
    }

    pub fn index(self) -> usize {
        match self {
            Player::P0 => 0,
            Player::P1 => 1,
        }
    }
}

/// A two player game graph where every vertex carries an owner and a
/// priority. Vertices are numbered densely so that all per-vertex solver
/// state can live in plain arrays.
#[derive(Debug, Default)]
pub struct ParityGame {
    players: IndexedVec<VertexId, Player>,
    priorities: IndexedVec<VertexId, usize>,
    successors: IndexedVec<VertexId, Vec<VertexId>>,
    edge_count: usize,
}

impl ParityGame {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_vertex(&mut self, player: Player, priority: usize) -> VertexId {
        self.priorities.push(priority);
        self.successors.push(Vec::new());
        self.players.push(player)
    }

    pub fn add_edge(&mut self, source: VertexId, target: VertexId) {
        debug_assert!(target.to_usize() < self.vertex_count());
        self.successors[source].push(target);
        self.edge_count += 1;
    }

    pub fn vertex_count(&self) -> usize {
        self.players.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edge_count
    }

    pub fn is_empty(&self) -> bool {
        self.players.is_empty()
    }

    pub fn player_of(&self, v: VertexId) -> Player {
        self.players[v]
    }

    pub fn priority_of(&self, v: VertexId) -> usize {
        self.priorities[v]
    }

    pub fn successors_of(&self, v: VertexId) -> impl Iterator<Item = VertexId> + '_ {
        self.successors[v].iter().copied()
    }

    pub fn out_degree(&self, v: VertexId) -> usize {
        self.successors[v].len()
    }

    pub fn vertices(&self) -> impl Iterator<Item = VertexId> {
        let count = self.vertex_count();
        (0..count).map(VertexId)
    }

    pub fn max_priority(&self) -> usize {
        self.priorities.iter().copied().max().unwrap_or(0)
    }

    /// All vertices ordered by decreasing priority, ties broken by vertex id.
    /// This is the scan order of the priority based solvers.
    pub fn vertices_by_priority_descending(&self) -> Vec<VertexId> {
        let mut order = self.vertices().collect::<Vec<_>>();
        order.sort_unstable_by_key(|&v| (Reverse(self.priorities[v]), v.to_usize()));
        order
    }

    /// The reverse adjacency lists. Solvers derive this once per solve call.
    pub fn predecessors(&self) -> IndexedVec<VertexId, Vec<VertexId>> {
        let mut preds = self.vertices().map(|_| Vec::new()).collect::<IndexedVec<_, _>>();
        for v in self.vertices() {
            for &w in &self.successors[v] {
                preds[w].push(v);
            }
        }
        preds
    }

    /// The first vertex without outgoing edges, if any. The solvers require a
    /// total graph, so callers must reject games where this returns `Some`.
    pub fn first_deadlock(&self) -> Option<VertexId> {
        self.vertices().find(|&v| self.successors[v].is_empty())
    }

    pub fn is_total(&self) -> bool {
        self.first_deadlock().is_none()
    }

    /// Remaps priorities to the smallest values that preserve both their
    /// relative order and their parity. Consecutive priorities of the same
    /// parity collapse onto a single value, and the parity of the lowest
    /// priority is preserved.
    pub fn compress_priorities(&mut self) {
        let unique = self.priorities.iter().copied().collect::<BTreeSet<_>>();
        let Some(&min) = unique.first() else { return };

        let (mut next_even, mut next_odd) = match min % 2 {
            0 => (0, 1),
            _ => (2, 1),
        };

        let mut mapping = BTreeMap::new();
        let mut current = [None, None];
        let mut last_parity = None;

        for &priority in &unique {
            let parity = priority % 2;
            // A run of same-parity priorities shares one compressed value; a
            // priority of the opposite parity in between starts a new run.
            if current[parity].is_none() || last_parity != Some(parity) {
                let next = match parity {
                    0 => &mut next_even,
                    _ => &mut next_odd,
                };
                current[parity] = Some(*next);
                *next += 2;
            }
            mapping.insert(priority, current[parity].unwrap());
            last_parity = Some(parity);
        }

        for priority in self.priorities.iter_mut() {
            *priority = mapping[priority];
        }
    }
}
