use std::collections::VecDeque;

use games::index::IndexedVec;
use games::{ParityGame, Player, VertexId};

use crate::attractor::{attract, Attraction};
use crate::solution::Solution;

#[cfg(test)]
mod test;

/// Solves `game` with a fresh [`PromotionSolver`].
pub fn solve(game: &ParityGame) -> Solution {
    PromotionSolver::new().solve(game)
}

/// Outcome of the closure test on a region.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum RegionStatus {
    /// Some vertex of the region can still be abandoned by its player or
    /// escaped from by the opponent towards a lower region.
    Open,
    /// Closed with no opponent exit to a higher region: the region's player
    /// wins everything the region attracts.
    Dominion,
    /// Closed, but the opponent can flee upwards; the region merges into the
    /// lowest region it can reach this way.
    PromoteTo(usize),
}

/// Priority promotion solver.
///
/// Vertices are scanned from highest to lowest priority. Each priority
/// gathers the vertices currently assigned to it into a region and extends
/// it with an attractor pass. A closed region either turns out to be a
/// dominion, which is handed to the winner wholesale, or gets promoted to a
/// higher priority where the search continues. Disabling a dominion can
/// reopen decisions taken anywhere else, so the scan restarts from the top
/// after every dominion.
///
/// All working state lives in this struct. It is reset at the start of each
/// solve call, so a single instance can solve any number of games in
/// sequence.
#[derive(Default)]
pub struct PromotionSolver {
    /// Priority each vertex is currently assigned to. Starts at the vertex's
    /// own priority and only ever grows, until the vertex is disabled.
    region: IndexedVec<VertexId, usize>,
    strategy: IndexedVec<VertexId, Option<VertexId>>,
    /// Solved vertices, excluded from every later computation.
    disabled: IndexedVec<VertexId, bool>,
    /// Members of each region, keyed by priority.
    regions: Vec<Vec<VertexId>>,
    /// Position in `order` where each priority's block starts being useful;
    /// promotion chains resume the status check from here.
    representative: Vec<usize>,
    order: Vec<VertexId>,
    preds: IndexedVec<VertexId, Vec<VertexId>>,
    queue: VecDeque<VertexId>,
    stats: Stats,
}

impl PromotionSolver {
    pub fn new() -> Self {
        Self::default()
    }

    /// Total number of promotions performed by the last solve call.
    pub fn promotions(&self) -> u64 {
        self.stats.total_promotions
    }

    /// Number of dominions found by the last solve call.
    pub fn dominions(&self) -> u64 {
        self.stats.dominions
    }

    pub fn solve(&mut self, game: &ParityGame) -> Solution {
        let mut solution = Solution::new(game);
        if game.is_empty() {
            solution.set_solved(true);
            return solution;
        }

        self.reset(game);

        let mut i = 0;
        while i < self.order.len() {
            let mut p = game.priority_of(self.order[i]);

            // Skip vertices that are already solved or sit in a higher region.
            while i < self.order.len()
                && game.priority_of(self.order[i]) == p
                && (self.disabled[self.order[i]] || self.region[self.order[i]] > p)
            {
                i += 1;
            }
            if i >= self.order.len() {
                break;
            }

            // The whole block at p was skipped: clear any stale leftovers of
            // the region and rescan at the priority we landed on.
            if game.priority_of(self.order[i]) != p {
                if !self.regions[p].is_empty() {
                    self.reset_region(game, p);
                }
                continue;
            }

            self.representative[p] = i;
            self.stats.queries += 1;

            if !self.setup_region(game, i, p) {
                i = self.skip_block(game, i, p);
                continue;
            }

            // Promotion chain: keep merging upwards until the region at the
            // current level is open or a dominion.
            loop {
                match self.region_status(game, i, p) {
                    RegionStatus::Open => {
                        i = self.skip_block(game, i, p);
                        break;
                    }
                    RegionStatus::Dominion => {
                        self.set_dominion(game, p, &mut solution);
                        // Disabling vertices can close regions at any level,
                        // so the scan must restart from the top.
                        i = 0;
                        break;
                    }
                    RegionStatus::PromoteTo(target) => {
                        self.promote(game, p, target);
                        i = self.representative[target];
                        p = target;
                    }
                }
            }
        }

        // Keep exactly the strategies of vertices owned by their winner.
        for v in game.vertices() {
            if let Some(w) = self.strategy[v] {
                if game.player_of(v) == solution.winner(v) {
                    solution.set_strategy(v, w);
                }
            }
        }

        self.stats.flush();
        log::debug!(
            "solved with {} queries, {} promotions and {} dominions",
            self.stats.total_queries,
            self.stats.total_promotions,
            self.stats.dominions
        );
        log::trace!(
            "hardest dominion took {} queries and {} promotions",
            self.stats.max_queries,
            self.stats.max_promotions
        );

        solution.set_solved(true);
        solution
    }

    fn reset(&mut self, game: &ParityGame) {
        self.order = game.vertices_by_priority_descending();
        self.preds = game.predecessors();

        self.region = game.vertices().map(|v| game.priority_of(v)).collect();
        self.strategy = game.vertices().map(|_| None).collect();
        self.disabled = game.vertices().map(|_| false).collect();

        self.regions.clear();
        self.regions.resize(game.max_priority() + 1, Vec::new());
        self.representative.clear();
        self.representative.resize(game.max_priority() + 1, 0);

        self.queue.clear();
        self.stats = Stats::default();
    }

    /// First index past the block of vertices with priority `p`.
    fn skip_block(&self, game: &ParityGame, mut i: usize, p: usize) -> usize {
        while i < self.order.len() && game.priority_of(self.order[i]) == p {
            i += 1;
        }
        i
    }

    /// Sends the undisabled members of region `p` back to their own priority
    /// and forgets their strategies.
    fn reset_region(&mut self, game: &ParityGame, p: usize) {
        for k in 0..self.regions[p].len() {
            let v = self.regions[p][k];
            if !self.disabled[v] && self.region[v] == p {
                self.region[v] = game.priority_of(v);
                self.strategy[v] = None;
            }
        }
        self.regions[p].clear();
    }

    /// Rebuilds region `p` from the vertices of priority `p` that are still
    /// at their own level, then extends it with an attractor pass. Returns
    /// false if the region came out empty.
    fn setup_region(&mut self, game: &ParityGame, i: usize, p: usize) -> bool {
        if !self.regions[p].is_empty() {
            self.reset_region(game, p);
        }

        let mut j = i;
        while j < self.order.len() && game.priority_of(self.order[j]) == p {
            let v = self.order[j];
            if !self.disabled[v] && self.region[v] == p {
                self.regions[p].push(v);
                self.strategy[v] = None;
            }
            j += 1;
        }

        if self.regions[p].is_empty() {
            return false;
        }

        self.attract_to_region(game, p);
        true
    }

    /// Region-level attractor. Unlike the plain attractor this works under
    /// the current region assignment: vertices in higher regions are never
    /// recruited, and they block the opponent's escape routes.
    fn attract_to_region(&mut self, game: &ParityGame, p: usize) {
        let player = Player::of_priority(p);

        // An empty queue means a fresh region; after a promotion the queue
        // already holds the vertices that just arrived.
        if self.queue.is_empty() {
            self.queue.extend(self.regions[p].iter().copied());
        }

        while let Some(v) = self.queue.pop_front() {
            for k in 0..self.preds[v].len() {
                let u = self.preds[v][k];
                if self.disabled[u] || self.region[u] > p {
                    continue;
                }

                if self.region[u] == p {
                    // Freshly reset member: repair its strategy edge.
                    if game.player_of(u) == player && self.strategy[u].is_none() {
                        self.strategy[u] = Some(v);
                    }
                } else if game.player_of(u) == player {
                    self.region[u] = p;
                    self.strategy[u] = Some(v);
                    self.regions[p].push(u);
                    self.queue.push_back(u);
                } else {
                    let escapes = game
                        .successors_of(u)
                        .any(|w| !self.disabled[w] && self.region[w] < p);
                    if !escapes {
                        self.region[u] = p;
                        self.strategy[u] = None;
                        self.regions[p].push(u);
                        self.queue.push_back(u);
                    }
                }
            }
        }
    }

    /// Closure test for region `p`, whose block starts at `i`.
    fn region_status(&self, game: &ParityGame, i: usize, p: usize) -> RegionStatus {
        let player = Player::of_priority(p);

        let mut j = i;
        while j < self.order.len() && game.priority_of(self.order[j]) == p {
            let v = self.order[j];
            j += 1;
            if self.disabled[v] || self.region[v] > p {
                continue;
            }
            if game.player_of(v) == player {
                if self.strategy[v].is_none() {
                    return RegionStatus::Open;
                }
            } else {
                let escapes = game
                    .successors_of(v)
                    .any(|w| !self.disabled[w] && self.region[w] < p);
                if escapes {
                    return RegionStatus::Open;
                }
            }
        }

        // Closed. The lowest higher region the opponent can reach becomes
        // the promotion target; with no way up the region is a dominion.
        let mut target = None;
        for &v in &self.regions[p] {
            if game.player_of(v) == player {
                continue;
            }
            for w in game.successors_of(v) {
                if self.disabled[w] {
                    continue;
                }
                let r = self.region[w];
                if r > p && target.map_or(true, |t| r < t) {
                    target = Some(r);
                }
            }
        }

        match target {
            Some(t) => RegionStatus::PromoteTo(t),
            None => RegionStatus::Dominion,
        }
    }

    /// Merges region `p` into region `target` and re-attracts at the higher
    /// level, seeded with the vertices that moved up.
    fn promote(&mut self, game: &ParityGame, p: usize, target: usize) {
        debug_assert!(p < target);
        self.stats.promotions += 1;

        let members = std::mem::take(&mut self.regions[p]);
        for &v in &members {
            self.region[v] = target;
            self.queue.push_back(v);
        }
        self.regions[target].extend(members);

        self.attract_to_region(game, target);
    }

    /// Region `p` is a dominion: its player wins everything the closed
    /// region attracts among the undisabled vertices. This is a plain
    /// attractor over the remaining subgame, not the region-level one, since
    /// only `disabled` restricts it.
    fn set_dominion(&mut self, game: &ParityGame, p: usize, solution: &mut Solution) {
        let winner = Player::of_priority(p);

        let core = self.regions[p]
            .iter()
            .copied()
            .filter(|&v| !self.disabled[v] && self.region[v] == p)
            .collect::<Vec<_>>();

        let active = game.vertices().map(|v| !self.disabled[v]).collect::<IndexedVec<_, _>>();
        let Attraction { vertices, strategy } = attract(game, &self.preds, &active, winner, &core);

        log::trace!(
            "dominion of {} vertices for player {} at priority {}",
            vertices.len(),
            winner.index(),
            p
        );

        for (u, w) in strategy {
            self.strategy[u] = Some(w);
        }
        for &v in &vertices {
            solution.set_winner(v, winner);
            self.disabled[v] = true;
        }

        self.stats.dominion();
    }
}

#[derive(Clone, Copy, Default)]
struct Stats {
    /// Region setups and promotions since the last dominion.
    queries: u64,
    promotions: u64,
    total_queries: u64,
    total_promotions: u64,
    max_queries: u64,
    max_promotions: u64,
    dominions: u64,
}

impl Stats {
    fn dominion(&mut self) {
        self.dominions += 1;
        self.max_queries = self.max_queries.max(self.queries);
        self.max_promotions = self.max_promotions.max(self.promotions);
        self.flush();
    }

    fn flush(&mut self) {
        self.total_queries += self.queries;
        self.total_promotions += self.promotions;
        self.queries = 0;
        self.promotions = 0;
    }
}
