//! Resumable uniform-cost search engine.
//!
//! [`WeightedPathfinder`] owns one search session at a time. A session is
//! opened by [`WeightedPathfinder::start_search`] and advanced by
//! [`WeightedPathfinder::continue_search`], which may be called any number of
//! times with a cost budget. Nothing is discarded between calls, so a search
//! interrupted by its budget resumes exactly where it stopped.
//!
//! # Expansion
//!
//! Each step peeks the cheapest frontier entry. A pending goal ends the call
//! with [`SearchOutcome::Found`] and stays queued, so the next call expands it
//! and keeps going toward the remaining goals. Any other node is popped and its
//! neighbors are relaxed: a neighbor whose recorded cost drops (or that was
//! never reached) gets a new cost, a new parent, and a fresh frontier entry.
//! Older entries for that neighbor are left in place and skipped when popped.

use std::collections::{HashMap, HashSet};
use std::hash::Hash;

use crate::config::SearchConfig;
use crate::error::ConfigError;
use crate::frontier::Frontier;
use crate::graph::{Cost, PathCost, UNBOUNDED, WeightedGraph};
use crate::outcome::SearchOutcome;
use crate::path::reconstruct_path;

/// Mutable state of the current search.
///
/// `cost_so_far` and `parents` always hold the same key set: both are written
/// together when a node is discovered or relaxed.
#[derive(Debug, Clone)]
struct SearchSession<T> {
    start: Option<T>,
    frontier: Frontier<T>,
    cost_so_far: HashMap<T, PathCost>,
    parents: HashMap<T, T>,
    goals: HashSet<T>,
    stale_entries: usize,
}

impl<T: Eq + Hash + Clone> SearchSession<T> {
    fn new() -> Self {
        Self {
            start: None,
            frontier: Frontier::new(),
            cost_so_far: HashMap::new(),
            parents: HashMap::new(),
            goals: HashSet::new(),
            stale_entries: 0,
        }
    }

    /// Clears everything and seeds the session with `start` at cost 0.
    fn reset(&mut self, start: T) {
        self.frontier.clear();
        self.cost_so_far.clear();
        self.parents.clear();
        self.goals.clear();
        self.stale_entries = 0;

        self.cost_so_far.insert(start.clone(), 0);
        self.parents.insert(start.clone(), start.clone());
        self.frontier.push(0, start.clone());
        self.start = Some(start);
    }

    /// Drops frontier entries whose priority is above the node's best cost.
    fn compact(&mut self) {
        let cost_so_far = &self.cost_so_far;
        let dropped = self.frontier.retain(|priority, node| {
            cost_so_far
                .get(node)
                .is_some_and(|&best| priority <= best)
        });
        self.stale_entries = 0;
        tracing::trace!(
            "compacted frontier: dropped {} stale entries, {} remain",
            dropped,
            self.frontier.len()
        );
    }
}

/// Incremental multi-goal shortest-path search over a [`WeightedGraph`].
///
/// # Example
///
/// ```rust,ignore
/// use pathfinding::{SearchOutcome, WeightedPathfinder};
///
/// let mut pathfinder = WeightedPathfinder::new(&dungeon);
///
/// // Plan over several turns, spending at most 10 cost units per turn.
/// pathfinder.start_search(npc_tile);
/// pathfinder.add_goal(exit_tile);
/// let path = loop {
///     match pathfinder.continue_search(10) {
///         SearchOutcome::Found(goal) => break pathfinder.reconstruct_path(&goal),
///         SearchOutcome::Exhausted => break None,
///         SearchOutcome::BudgetExceeded => end_turn(),
///     }
/// };
/// ```
///
/// # Concurrency
///
/// An engine holds one session and every mutating call takes `&mut self`.
/// Run parallel searches on separate engines; a graph wrapped in `Arc` can be
/// shared between them.
#[derive(Debug, Clone)]
pub struct WeightedPathfinder<T, G> {
    graph: G,
    config: SearchConfig,
    session: SearchSession<T>,
}

impl<T, G> WeightedPathfinder<T, G>
where
    T: Eq + Hash + Clone,
    G: WeightedGraph<T>,
{
    /// Creates a pathfinder over `graph` with the default configuration.
    pub fn new(graph: G) -> Self {
        Self {
            graph,
            config: SearchConfig::default(),
            session: SearchSession::new(),
        }
    }

    /// Creates a pathfinder with a custom configuration.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if `config` fails [`SearchConfig::validate`].
    pub fn with_config(graph: G, config: SearchConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            graph,
            config,
            session: SearchSession::new(),
        })
    }

    /// Returns the graph this pathfinder searches.
    pub fn graph(&self) -> &G {
        &self.graph
    }

    /// Returns the active configuration.
    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    // ===== session control =====

    /// Discards any previous search and opens a new one rooted at `start`.
    ///
    /// Afterwards `start` has cost 0, is its own parent, and is the only
    /// frontier entry. The pending goal set is empty.
    pub fn start_search(&mut self, start: T) {
        let previous_frontier = self.session.frontier.len();
        let previous_visited = self.session.parents.len();
        self.session.reset(start);
        tracing::debug!(
            "search started, discarded previous session (frontier={}, visited={})",
            previous_frontier,
            previous_visited
        );
    }

    /// Adds a goal to the pending set. Adding a goal twice has no effect.
    pub fn add_goal(&mut self, goal: T) {
        self.session.goals.insert(goal);
    }

    /// Adds every goal yielded by `goals` to the pending set.
    pub fn add_goals<I>(&mut self, goals: I)
    where
        I: IntoIterator<Item = T>,
    {
        self.session.goals.extend(goals);
    }

    /// Advances the current search by at most `max_additional_cost` above the
    /// cheapest frontier entry.
    ///
    /// The cutoff is `floor + max_additional_cost`, where `floor` is the lowest
    /// queued priority. Entries priced at or above the cutoff are left for a
    /// later call. [`UNBOUNDED`] removes the cutoff entirely: the call runs
    /// until a goal is found or the frontier is empty, whatever the path costs.
    ///
    /// A budget of 0 never makes progress.
    pub fn continue_search(&mut self, max_additional_cost: Cost) -> SearchOutcome<T> {
        let session = &mut self.session;
        let cutoff = (max_additional_cost != UNBOUNDED).then(|| {
            session
                .frontier
                .floor()
                .saturating_add(PathCost::from(max_additional_cost))
        });
        let mut expanded = 0usize;

        loop {
            let Some((priority, node)) = session.frontier.peek() else {
                tracing::debug!(
                    "search exhausted after {} expansions, {} goals unreachable",
                    expanded,
                    session.goals.len()
                );
                return SearchOutcome::Exhausted;
            };

            if cutoff.is_some_and(|cutoff| priority >= cutoff) {
                tracing::debug!(
                    "search paused at cost {} (cutoff {:?}) after {} expansions",
                    priority,
                    cutoff,
                    expanded
                );
                return SearchOutcome::BudgetExceeded;
            }

            if session.goals.contains(node) {
                let goal = node.clone();
                session.goals.remove(&goal);
                tracing::debug!(
                    "goal reached at cost {} after {} expansions, {} goals pending",
                    priority,
                    expanded,
                    session.goals.len()
                );
                return SearchOutcome::Found(goal);
            }

            let Some((priority, current)) = session.frontier.pop() else {
                return SearchOutcome::Exhausted;
            };

            let Some(&current_cost) = session.cost_so_far.get(&current) else {
                continue;
            };
            if priority > current_cost {
                // Superseded by a cheaper entry that was already expanded.
                session.stale_entries = session.stale_entries.saturating_sub(1);
                continue;
            }

            expanded += 1;
            tracing::trace!("expanding node at cost {}", current_cost);

            for next in self.graph.neighbors(&current) {
                let new_cost = current_cost + PathCost::from(self.graph.cost(&current, &next));
                match session.cost_so_far.get(&next) {
                    Some(&known) if new_cost >= known => continue,
                    Some(_) => session.stale_entries += 1,
                    None => {}
                }

                session.cost_so_far.insert(next.clone(), new_cost);
                session.parents.insert(next.clone(), current.clone());
                session.frontier.push(new_cost, next);
            }

            if session.stale_entries >= self.config.stale_compaction_threshold {
                session.compact();
            }
        }
    }

    /// Continues without a budget and returns the path to the next goal found.
    ///
    /// Returns `None` without doing any work if no goals are pending.
    pub fn resume(&mut self) -> Option<Vec<T>> {
        if self.session.goals.is_empty() {
            return None;
        }
        self.resume_within(UNBOUNDED)
    }

    /// Continues with a budget and returns the path to the goal found, if any.
    ///
    /// `None` does not distinguish an exhausted search from a paused one; use
    /// [`Self::continue_search`] when that matters.
    pub fn resume_within(&mut self, max_additional_cost: Cost) -> Option<Vec<T>> {
        match self.continue_search(max_additional_cost) {
            SearchOutcome::Found(goal) => self.reconstruct_path(&goal),
            SearchOutcome::Exhausted | SearchOutcome::BudgetExceeded => None,
        }
    }

    // ===== one-shot searches =====

    /// Cheapest path from `start` to `goal`, or `None` if unreachable.
    pub fn search(&mut self, start: T, goal: T) -> Option<Vec<T>> {
        self.start_search(start);
        self.add_goal(goal);
        self.resume()
    }

    /// Cheapest path from `start` to whichever goal is closest.
    ///
    /// Goals left unfound stay pending, so [`Self::resume`] yields the path to
    /// the next closest one.
    pub fn search_any<I>(&mut self, start: T, goals: I) -> Option<Vec<T>>
    where
        I: IntoIterator<Item = T>,
    {
        self.start_search(start);
        self.add_goals(goals);
        self.resume()
    }

    /// Like [`Self::search_any`], but gives up on goals whose path would cost
    /// `max_path_weight` or more.
    pub fn search_any_within<I>(
        &mut self,
        start: T,
        goals: I,
        max_path_weight: Cost,
    ) -> Option<Vec<T>>
    where
        I: IntoIterator<Item = T>,
    {
        self.start_search(start);
        self.add_goals(goals);
        self.resume_within(max_path_weight)
    }

    /// Explores every node cheaper than `max_path_weight` from `start`.
    ///
    /// Returns the parent table of the coverage. It holds every node reached
    /// with a cost below `max_path_weight` plus their direct neighbors, and can
    /// be handed to [`reconstruct_path`].
    pub fn search_coverage(&mut self, start: T, max_path_weight: Cost) -> &HashMap<T, T> {
        self.start_search(start);
        let _ = self.continue_search(max_path_weight);
        &self.session.parents
    }

    // ===== inspection =====

    /// Path from the session start to `target`, following recorded parents.
    ///
    /// Does not modify the session and may be called repeatedly.
    pub fn reconstruct_path(&self, target: &T) -> Option<Vec<T>> {
        let start = self.session.start.as_ref()?;
        reconstruct_path(&self.session.parents, start, target)
    }

    /// Parent table of every node discovered so far. The start maps to itself.
    pub fn visited(&self) -> &HashMap<T, T> {
        &self.session.parents
    }

    /// Best known cost from the session start to `node`.
    pub fn cost_to(&self, node: &T) -> Option<PathCost> {
        self.session.cost_so_far.get(node).copied()
    }

    /// Start node of the current session, or `None` before the first search.
    pub fn search_start(&self) -> Option<&T> {
        self.session.start.as_ref()
    }

    /// Goals added to this session that have not been found yet.
    pub fn pending_goals(&self) -> &HashSet<T> {
        &self.session.goals
    }

    /// Number of queued frontier entries, superseded ones included.
    pub fn frontier_len(&self) -> usize {
        self.session.frontier.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Directed graph over `char` nodes backed by an edge list.
    struct EdgeList(Vec<(char, char, Cost)>);

    impl WeightedGraph<char> for EdgeList {
        fn neighbors(&self, node: &char) -> Vec<char> {
            self.0
                .iter()
                .filter(|(from, _, _)| from == node)
                .map(|&(_, to, _)| to)
                .collect()
        }

        fn cost(&self, from: &char, to: &char) -> Cost {
            self.0
                .iter()
                .find(|(f, t, _)| f == from && t == to)
                .map(|&(_, _, cost)| cost)
                .expect("cost queried for a non-edge")
        }
    }

    fn diamond() -> EdgeList {
        EdgeList(vec![('A', 'B', 1), ('B', 'D', 1), ('A', 'C', 4), ('C', 'D', 1)])
    }

    fn path_cost(graph: &EdgeList, path: &[char]) -> Cost {
        path.windows(2).map(|w| graph.cost(&w[0], &w[1])).sum()
    }

    #[test]
    fn picks_cheaper_route() {
        let graph = diamond();
        let mut pathfinder = WeightedPathfinder::new(&graph);

        let path = pathfinder.search('A', 'D').unwrap();
        assert_eq!(path, vec!['A', 'B', 'D']);
        assert_eq!(path_cost(&graph, &path), 2);
        assert_eq!(pathfinder.cost_to(&'D'), Some(2));
    }

    #[test]
    fn small_budget_stops_before_goal() {
        let graph = diamond();
        let mut pathfinder = WeightedPathfinder::new(&graph);

        assert_eq!(pathfinder.search_any_within('A', ['D'], 1), None);
        assert!(pathfinder.pending_goals().contains(&'D'));

        assert_eq!(pathfinder.search_any_within('A', ['D'], 3), Some(vec!['A', 'B', 'D']));
    }

    #[test]
    fn unreachable_goal_is_none() {
        let graph = diamond();
        let mut pathfinder = WeightedPathfinder::new(&graph);

        assert_eq!(pathfinder.search('D', 'A'), None);
        assert!(!pathfinder.visited().contains_key(&'A'));
    }

    #[test]
    fn start_is_its_own_goal() {
        let graph = diamond();
        let mut pathfinder = WeightedPathfinder::new(&graph);

        assert_eq!(pathfinder.search('A', 'A'), Some(vec!['A']));
        assert_eq!(pathfinder.cost_to(&'A'), Some(0));
        assert_eq!(pathfinder.visited().get(&'A'), Some(&'A'));
    }

    #[test]
    fn found_goal_stays_queued_for_next_call() {
        let graph = diamond();
        let mut pathfinder = WeightedPathfinder::new(&graph);

        pathfinder.start_search('A');
        pathfinder.add_goals(['B', 'D']);

        assert_eq!(pathfinder.continue_search(UNBOUNDED), SearchOutcome::Found('B'));
        let frontier_after_b = pathfinder.frontier_len();
        assert_eq!(pathfinder.pending_goals().len(), 1);

        assert_eq!(pathfinder.continue_search(UNBOUNDED), SearchOutcome::Found('D'));
        assert!(pathfinder.frontier_len() >= frontier_after_b - 1);
        assert_eq!(pathfinder.reconstruct_path(&'B'), Some(vec!['A', 'B']));
        assert_eq!(pathfinder.reconstruct_path(&'D'), Some(vec!['A', 'B', 'D']));

        assert_eq!(pathfinder.continue_search(UNBOUNDED), SearchOutcome::Exhausted);
    }

    #[test]
    fn search_any_returns_closest_goal_and_keeps_the_rest() {
        let graph = diamond();
        let mut pathfinder = WeightedPathfinder::new(&graph);

        assert_eq!(pathfinder.search_any('A', ['C', 'D']), Some(vec!['A', 'B', 'D']));
        assert_eq!(pathfinder.resume(), Some(vec!['A', 'C']));
        assert_eq!(pathfinder.resume(), None);
    }

    #[test]
    fn resume_without_goals_does_no_work() {
        let graph = diamond();
        let mut pathfinder = WeightedPathfinder::new(&graph);

        pathfinder.start_search('A');
        assert_eq!(pathfinder.resume(), None);
        assert_eq!(pathfinder.frontier_len(), 1);
        assert_eq!(pathfinder.visited().len(), 1);
    }

    #[test]
    fn budget_exceeded_then_resumed() {
        let graph = diamond();
        let mut pathfinder = WeightedPathfinder::new(&graph);

        pathfinder.start_search('A');
        pathfinder.add_goal('C');

        let mut outcomes = Vec::new();
        loop {
            let outcome = pathfinder.continue_search(1);
            let done = !outcome.is_resumable();
            outcomes.push(outcome);
            if done {
                break;
            }
        }

        assert_eq!(outcomes.last(), Some(&SearchOutcome::Found('C')));
        assert!(outcomes.len() > 1, "a budget of 1 cannot reach cost 4 in one call");
        assert_eq!(pathfinder.reconstruct_path(&'C'), Some(vec!['A', 'C']));
    }

    #[test]
    fn zero_budget_makes_no_progress() {
        let graph = diamond();
        let mut pathfinder = WeightedPathfinder::new(&graph);

        pathfinder.start_search('A');
        pathfinder.add_goal('D');
        assert_eq!(pathfinder.continue_search(0), SearchOutcome::BudgetExceeded);
        assert_eq!(pathfinder.visited().len(), 1);
    }

    #[test]
    fn start_search_discards_previous_session() {
        let graph = diamond();
        let mut pathfinder = WeightedPathfinder::new(&graph);

        pathfinder.search('A', 'D').unwrap();
        pathfinder.start_search('C');

        assert_eq!(pathfinder.search_start(), Some(&'C'));
        assert_eq!(pathfinder.visited().len(), 1);
        assert_eq!(pathfinder.cost_to(&'B'), None);
        assert!(pathfinder.pending_goals().is_empty());
        assert_eq!(pathfinder.reconstruct_path(&'B'), None);
    }

    #[test]
    fn coverage_respects_budget() {
        let graph = diamond();
        let mut pathfinder = WeightedPathfinder::new(&graph);

        let covered = pathfinder.search_coverage('A', 2);
        // A (0) and B (1) are expanded; their neighbors are discovered.
        let mut nodes: Vec<char> = covered.keys().copied().collect();
        nodes.sort_unstable();
        assert_eq!(nodes, vec!['A', 'B', 'C', 'D']);

        let covered = pathfinder.search_coverage('A', 1);
        let mut nodes: Vec<char> = covered.keys().copied().collect();
        nodes.sort_unstable();
        assert_eq!(nodes, vec!['A', 'B', 'C']);
    }

    #[test]
    fn relaxation_overwrites_parent() {
        // A reaches C directly at 10, then through B at 2.
        let graph = EdgeList(vec![('A', 'C', 10), ('A', 'B', 1), ('B', 'C', 1)]);
        let mut pathfinder = WeightedPathfinder::new(&graph);

        assert_eq!(pathfinder.search('A', 'C'), Some(vec!['A', 'B', 'C']));
        assert_eq!(pathfinder.visited().get(&'C'), Some(&'B'));
        assert_eq!(pathfinder.cost_to(&'C'), Some(2));
    }

    #[test]
    fn compaction_does_not_change_results() {
        let graph = EdgeList(vec![
            ('A', 'E', 20),
            ('A', 'D', 12),
            ('A', 'C', 8),
            ('A', 'B', 1),
            ('B', 'C', 1),
            ('C', 'D', 1),
            ('D', 'E', 1),
        ]);
        let config = SearchConfig::with_stale_compaction_threshold(1);
        let mut compacting = WeightedPathfinder::with_config(&graph, config).unwrap();
        let mut plain = WeightedPathfinder::new(&graph);

        let expected = plain.search('A', 'E');
        assert_eq!(expected, Some(vec!['A', 'B', 'C', 'D', 'E']));
        assert_eq!(compacting.search('A', 'E'), expected);
        assert!(compacting.frontier_len() <= plain.frontier_len());
    }

    #[test]
    fn edge_at_cost_limit_is_reachable() {
        let graph = EdgeList(vec![('A', 'B', UNBOUNDED)]);
        let mut pathfinder = WeightedPathfinder::new(&graph);

        assert_eq!(pathfinder.search('A', 'B'), Some(vec!['A', 'B']));
        assert_eq!(pathfinder.cost_to(&'B'), Some(PathCost::from(UNBOUNDED)));

        pathfinder.start_search('A');
        pathfinder.add_goal('B');
        assert_eq!(pathfinder.continue_search(UNBOUNDED), SearchOutcome::Found('B'));
    }

    #[test]
    fn largest_finite_budget_still_pauses_and_resumes() {
        let graph = EdgeList(vec![('A', 'B', UNBOUNDED), ('B', 'C', UNBOUNDED)]);
        let mut pathfinder = WeightedPathfinder::new(&graph);

        pathfinder.start_search('A');
        pathfinder.add_goal('C');
        assert_eq!(pathfinder.continue_search(UNBOUNDED - 1), SearchOutcome::BudgetExceeded);
        assert_eq!(pathfinder.continue_search(UNBOUNDED - 1), SearchOutcome::BudgetExceeded);
        assert_eq!(pathfinder.continue_search(UNBOUNDED), SearchOutcome::Found('C'));
        assert_eq!(pathfinder.cost_to(&'C'), Some(2 * PathCost::from(UNBOUNDED)));
    }

    #[test]
    fn paths_beyond_edge_cost_range_stay_distinct() {
        // Both routes cost more than `Cost::MAX`; the one through C is 5 cheaper.
        let graph = EdgeList(vec![
            ('A', 'B', UNBOUNDED),
            ('A', 'C', UNBOUNDED),
            ('B', 'D', 10),
            ('C', 'D', 5),
        ]);
        let mut pathfinder = WeightedPathfinder::new(&graph);

        assert_eq!(pathfinder.search('A', 'D'), Some(vec!['A', 'C', 'D']));
        assert_eq!(pathfinder.cost_to(&'D'), Some(PathCost::from(UNBOUNDED) + 5));
    }

    #[test]
    fn invalid_config_is_rejected() {
        let graph = diamond();
        let result = WeightedPathfinder::<char, _>::with_config(
            &graph,
            SearchConfig::with_stale_compaction_threshold(0),
        );
        assert_eq!(result.err(), Some(ConfigError::ZeroCompactionThreshold));
    }
}
