//! The traversal loop shared by every strategy.

use std::panic::{catch_unwind, AssertUnwindSafe};

use serde::Serialize;
use tracing::{debug, info, trace};

use crate::contract::{Cost, SearchProblem};
use crate::error::{PanicStage, SearchError};
use crate::frontier::Frontier;
use crate::node::{NodeArena, NodeId, SearchNode};
use crate::path::reconstruct_actions;
use crate::policy::SearchPolicy;
use crate::trace::{ExpandEvent, SearchTrace};
use crate::visited::VisitedSet;

/// Why the search loop stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Termination {
    /// A popped node passed the goal test.
    GoalReached { node: NodeId, depth: u32 },
    /// The frontier emptied without a goal being accepted.
    FrontierExhausted,
    /// `max_expansions` was reached before a goal was accepted.
    ExpansionBudgetExceeded,
}

impl Termination {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::GoalReached { .. } => "goal_reached",
            Self::FrontierExhausted => "frontier_exhausted",
            Self::ExpansionBudgetExceeded => "expansion_budget_exceeded",
        }
    }
}

/// Counters for one search invocation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct SearchStats {
    /// Calls to `successors`.
    pub expansions: u64,
    /// Distinct states popped and marked visited (expanded or goal-tested).
    pub states_closed: u64,
    /// Child nodes pushed onto the frontier.
    pub nodes_generated: u64,
    /// Popped nodes dropped because their state was already closed.
    pub stale_pops: u64,
    /// Successors dropped at generation because their state was closed.
    pub duplicates_suppressed: u64,
    /// Closed nodes not expanded because they sat at `max_depth`.
    pub depth_limited: u64,
    /// Largest frontier size seen.
    pub frontier_high_water: u64,
}

/// Result of one search invocation.
///
/// `actions` is empty both when the start state is a goal and when no goal
/// was reached; `termination` tells the two apart.
#[derive(Debug, Clone)]
pub struct SearchOutcome<A, C> {
    pub termination: Termination,
    /// Actions from the start state to the accepted goal.
    pub actions: Vec<A>,
    /// Accumulated cost of `actions` (`None` without a goal).
    pub path_cost: Option<C>,
    pub stats: SearchStats,
    /// Expansion log, present when the policy asked for it.
    pub trace: Option<SearchTrace<C>>,
}

impl<A, C> SearchOutcome<A, C> {
    #[must_use]
    pub fn is_goal_reached(&self) -> bool {
        matches!(self.termination, Termination::GoalReached { .. })
    }
}

/// Run a problem callback, converting a panic into a typed error.
pub(crate) fn guarded<T>(stage: PanicStage, f: impl FnOnce() -> T) -> Result<T, SearchError> {
    catch_unwind(AssertUnwindSafe(f)).map_err(|_| SearchError::ProblemPanicked { stage })
}

/// Graph search over `problem`, ordered by `frontier` and `priority`.
///
/// Each iteration pops one node and:
///
/// 1. drops it if its state was already closed (a stale duplicate);
/// 2. closes its state;
/// 3. accepts it if it is a goal;
/// 4. stops if the expansion budget is spent;
/// 5. skips expansion at `max_depth`;
/// 6. pushes every successor whose state is not closed, keyed by `priority`.
///
/// The goal test runs at pop time for every ordering, which is what makes the
/// first accepted goal cost-optimal under a priority frontier.
///
/// # Errors
///
/// - [`SearchError::Policy`] if `policy` is invalid (before any step).
/// - [`SearchError::InvalidStepCost`] if a successor has cost `< 0` or NaN.
/// - [`SearchError::ProblemPanicked`] if a problem callback panics.
/// - [`SearchError::EmptyFrontierPop`] / [`SearchError::InconsistentParentRelation`]
///   on internal invariant violations.
pub fn graph_search<P, F, K, KF>(
    problem: &P,
    mut frontier: F,
    mut priority: KF,
    policy: &SearchPolicy,
) -> Result<SearchOutcome<P::Action, P::Cost>, SearchError>
where
    P: SearchProblem + ?Sized,
    F: Frontier<NodeId, K>,
    KF: FnMut(&SearchNode<P::State, P::Action, P::Cost>) -> Result<K, SearchError>,
{
    policy.validate()?;

    let frontier_policy = frontier.policy();
    let span = tracing::info_span!(
        "graph_search",
        problem = problem.problem_id(),
        frontier = frontier_policy.as_str()
    );
    let _entered = span.enter();

    let mut arena: NodeArena<P::State, P::Action, P::Cost> = NodeArena::new();
    let mut visited = VisitedSet::new();
    let mut stats = SearchStats::default();
    let mut audit = policy
        .record_trace
        .then(|| SearchTrace::new(frontier_policy));

    let start = guarded(PanicStage::StartState, || problem.start_state())?;
    let root = arena.insert_root(start);
    let root_key = priority(arena.get(root)?)?;
    frontier.push(root, root_key);

    let termination = loop {
        if frontier.is_empty() {
            break Termination::FrontierExhausted;
        }

        let current = frontier.pop()?;
        let (state, parent, depth, g_cost) = {
            let node = arena.get(current)?;
            (node.state.clone(), node.parent, node.depth, node.g_cost)
        };

        if !visited.mark_expanded(&state) {
            stats.stale_pops += 1;
            continue;
        }
        stats.states_closed += 1;

        if guarded(PanicStage::IsGoal, || problem.is_goal(&state))? {
            debug!(node = current.index(), depth, ?g_cost, "goal accepted");
            break Termination::GoalReached {
                node: current,
                depth,
            };
        }

        if stats.expansions >= policy.max_expansions {
            debug!(
                max_expansions = policy.max_expansions,
                "expansion budget exhausted"
            );
            break Termination::ExpansionBudgetExceeded;
        }

        if depth >= policy.max_depth {
            stats.depth_limited += 1;
            continue;
        }

        let successors = guarded(PanicStage::Successors, || problem.successors(&state))?;
        stats.expansions += 1;

        let mut children = Vec::with_capacity(successors.len());
        let mut suppressed = 0u64;
        for successor in successors {
            if !successor.step_cost.is_valid_step() {
                return Err(SearchError::InvalidStepCost {
                    node: current.index(),
                    cost: format!("{:?}", successor.step_cost),
                });
            }
            if visited.contains(&successor.state) {
                suppressed += 1;
                continue;
            }
            let child = arena.insert_child(current, successor)?;
            let key = priority(arena.get(child)?)?;
            frontier.push(child, key);
            children.push(child);
        }

        stats.nodes_generated += children.len() as u64;
        stats.duplicates_suppressed += suppressed;
        trace!(
            node = current.index(),
            depth,
            children = children.len(),
            suppressed,
            frontier = frontier.len(),
            "expanded"
        );

        if let Some(audit) = audit.as_mut() {
            audit.expansions.push(ExpandEvent {
                expansion_order: stats.expansions - 1,
                node: current,
                parent,
                depth,
                g_cost,
                children,
                duplicates_suppressed: suppressed,
            });
        }
    };

    stats.frontier_high_water = frontier.high_water() as u64;

    let (actions, path_cost) = match termination {
        Termination::GoalReached { node, .. } => (
            reconstruct_actions(&arena, node)?,
            Some(arena.get(node)?.g_cost),
        ),
        Termination::FrontierExhausted | Termination::ExpansionBudgetExceeded => {
            (Vec::new(), None)
        }
    };

    info!(
        termination = termination.as_str(),
        actions = actions.len(),
        expansions = stats.expansions,
        nodes_generated = stats.nodes_generated,
        stale_pops = stats.stale_pops,
        frontier_high_water = stats.frontier_high_water,
        "search finished"
    );

    Ok(SearchOutcome {
        termination,
        actions,
        path_cost,
        stats,
        trace: audit,
    })
}

/// Key function for stack and queue frontiers.
pub(crate) fn unkeyed<S, A, C>(_node: &SearchNode<S, A, C>) -> Result<(), SearchError> {
    Ok(())
}

/// Key function for uniform-cost search: the accumulated path cost.
pub(crate) fn path_cost_key<S, A, C: Cost>(node: &SearchNode<S, A, C>) -> Result<C, SearchError> {
    Ok(node.g_cost)
}
