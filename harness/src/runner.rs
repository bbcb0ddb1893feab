//! Harness runner: solve a problem, validate the plan, build a report.
//!
//! The runner uses ONLY `waypoint_search` public APIs. It does not implement
//! any search logic itself; its job is to refuse to report a plan it cannot
//! replay.
//!
//! # Pipeline
//!
//! ```text
//! solve() → replay_plan() → cost_of_actions() (if implemented)
//!   → cross-check costs → RunReport
//! ```

use std::fmt::Display;

use serde::Serialize;
use tracing::{info, warn};

use waypoint_search::{
    solve, Capability, Cost, Heuristic, SearchError, SearchPolicy, SearchProblem, Strategy,
    Termination,
};

use crate::report::RunReport;

/// Error during a harness run.
#[derive(Debug, thiserror::Error)]
pub enum RunError {
    #[error(transparent)]
    Search(#[from] SearchError),
    /// A returned action is not among the successors of the state it is
    /// applied to.
    #[error("action {index} ({action}) is not applicable")]
    ActionNotApplicable { index: usize, action: String },
    /// Replaying the full plan does not end in a goal state.
    #[error("plan of {len} actions does not end in a goal state")]
    PlanMissesGoal { len: usize },
    /// Two cost computations for the same plan disagree.
    #[error("{source_name} cost {recomputed} differs from engine cost {engine}")]
    CostMismatch {
        source_name: &'static str,
        engine: String,
        recomputed: String,
    },
    #[error("cost serialization failed: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Apply `actions` from the start state through `successors`, and return
/// the accumulated step cost.
///
/// # Errors
///
/// - [`RunError::ActionNotApplicable`] if an action is not offered by the
///   current state.
/// - [`RunError::PlanMissesGoal`] if the final state is not a goal.
pub fn replay_plan<P>(problem: &P, actions: &[P::Action]) -> Result<P::Cost, RunError>
where
    P: SearchProblem + ?Sized,
    P::Action: PartialEq,
{
    let mut state = problem.start_state();
    let mut cost = P::Cost::zero();
    for (index, action) in actions.iter().enumerate() {
        let successor = problem
            .successors(&state)
            .into_iter()
            .find(|s| s.action == *action)
            .ok_or_else(|| RunError::ActionNotApplicable {
                index,
                action: format!("{action:?}"),
            })?;
        cost = cost.add_step(successor.step_cost);
        state = successor.state;
    }
    if !problem.is_goal(&state) {
        return Err(RunError::PlanMissesGoal { len: actions.len() });
    }
    Ok(cost)
}

fn check_cost<C: Cost>(source_name: &'static str, engine: C, recomputed: C) -> Result<(), RunError> {
    if engine == recomputed {
        Ok(())
    } else {
        Err(RunError::CostMismatch {
            source_name,
            engine: format!("{engine:?}"),
            recomputed: format!("{recomputed:?}"),
        })
    }
}

/// Run `strategy` on `problem` and produce a validated [`RunReport`].
///
/// A goal-reaching plan is replayed step by step and its cost is checked
/// against both the replay and the problem's `cost_of_actions`. A problem
/// that does not implement `cost_of_actions` is reported with
/// `validated_cost: None`.
///
/// # Errors
///
/// Any [`SearchError`] from the search itself, and any validation failure
/// described on [`RunError`].
pub fn run_problem<P, H>(
    problem: &P,
    strategy: Strategy,
    heuristic: &H,
    policy: &SearchPolicy,
) -> Result<RunReport, RunError>
where
    P: SearchProblem + ?Sized,
    P::Action: PartialEq + Display,
    P::Cost: Serialize,
    H: Heuristic<P> + ?Sized,
{
    let outcome = solve(problem, strategy, heuristic, policy)?;

    let mut validated_cost = None;
    if let Some(path_cost) = outcome.path_cost {
        let replayed = replay_plan(problem, &outcome.actions)?;
        check_cost("replayed", path_cost, replayed)?;

        match problem.cost_of_actions(&outcome.actions) {
            Ok(cost) => {
                check_cost("cost_of_actions", path_cost, cost)?;
                validated_cost = Some(serde_json::to_value(cost)?);
            }
            Err(SearchError::UnimplementedCapability {
                capability: Capability::CostOfActions,
            }) => {
                warn!(
                    problem = problem.problem_id(),
                    "cost_of_actions not implemented; plan validated by replay only"
                );
            }
            Err(err) => return Err(err.into()),
        }
    }

    let goal_depth = match outcome.termination {
        Termination::GoalReached { depth, .. } => Some(depth),
        Termination::FrontierExhausted | Termination::ExpansionBudgetExceeded => None,
    };

    info!(
        problem = problem.problem_id(),
        strategy = strategy.name(),
        termination = outcome.termination.as_str(),
        actions = outcome.actions.len(),
        expansions = outcome.stats.expansions,
        "run complete"
    );

    Ok(RunReport {
        problem_id: problem.problem_id().to_string(),
        strategy: strategy.name().to_string(),
        frontier_policy: strategy.frontier_policy().as_str().to_string(),
        termination: outcome.termination.as_str().to_string(),
        goal_reached: outcome.is_goal_reached(),
        goal_depth,
        actions: outcome.actions.iter().map(ToString::to_string).collect(),
        path_cost: outcome.path_cost.map(serde_json::to_value).transpose()?,
        validated_cost,
        stats: outcome.stats,
        expansion_order: outcome.trace.map(|trace| {
            trace
                .expansion_order()
                .into_iter()
                .map(|id| id.index())
                .collect()
        }),
    })
}
