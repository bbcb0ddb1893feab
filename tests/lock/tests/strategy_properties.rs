//! Behavioural locks shared by all four strategies: goal at start, no path,
//! plan validity, BFS minimality, UCS/A* optimality, single expansion per
//! state, and the diamond scenario.

use lock_tests::CountingProblem;
use waypoint_harness::runner::{replay_plan, run_problem};
use waypoint_harness::worlds::eight_puzzle::{
    manhattan_distance, misplaced_tiles, EightPuzzle, PuzzleMove,
};
use waypoint_harness::worlds::explicit_graph::{EdgeAction, ExplicitGraph};
use waypoint_harness::worlds::grid_maze::{manhattan_heuristic, GridMaze, SMALL_MAZE, TINY_MAZE};
use waypoint_search::{
    astar, bfs, dfs, solve, ucs, NullHeuristic, SearchPolicy, SearchProblem, Strategy, Termination,
};

fn names(actions: &[EdgeAction]) -> Vec<String> {
    actions.iter().map(ToString::to_string).collect()
}

fn bounded() -> SearchPolicy {
    SearchPolicy {
        max_expansions: 50_000,
        ..SearchPolicy::default()
    }
}

fn scrambled_puzzle() -> EightPuzzle {
    use PuzzleMove::{Down, Left, Right, Up};
    EightPuzzle::scrambled(&[Right, Down, Left, Down, Right, Up, Right, Down]).unwrap()
}

// ---------------------------------------------------------------------------
// Goal at start
// ---------------------------------------------------------------------------

#[test]
fn goal_at_start_returns_empty_plan_for_every_strategy() {
    let graph = ExplicitGraph::new("A").edge("A", "B", 1).goal("A");
    for strategy in Strategy::ALL {
        let problem = CountingProblem::new(graph.clone());
        let outcome = solve(&problem, strategy, &NullHeuristic, &SearchPolicy::default()).unwrap();
        assert!(outcome.actions.is_empty(), "{strategy}");
        assert!(
            matches!(outcome.termination, Termination::GoalReached { depth: 0, .. }),
            "{strategy}: {:?}",
            outcome.termination
        );
        assert_eq!(outcome.path_cost, Some(0));
        assert_eq!(problem.expansions(), 0, "{strategy} expanded the start");
    }
}

// ---------------------------------------------------------------------------
// No path
// ---------------------------------------------------------------------------

#[test]
fn unreachable_goal_returns_empty_plan_for_every_strategy() {
    let graph = ExplicitGraph::new("A")
        .bidirectional("A", "B", 1)
        .bidirectional("B", "C", 2)
        .edge("C", "A", 1)
        .edge("Z", "A", 1)
        .goal("Z");
    for strategy in Strategy::ALL {
        let problem = CountingProblem::new(graph.clone());
        let outcome = solve(&problem, strategy, &NullHeuristic, &SearchPolicy::default()).unwrap();
        assert!(outcome.actions.is_empty(), "{strategy}");
        assert_eq!(outcome.termination, Termination::FrontierExhausted, "{strategy}");
        assert_eq!(outcome.path_cost, None);
        assert_eq!(problem.expansions(), 3, "{strategy} must exhaust A, B, C");
        assert!(!problem.was_expanded(&"Z".to_string()));
    }
}

#[test]
fn walled_off_maze_goal_is_not_an_error() {
    let maze = GridMaze::parse("%%%%%\n%P%.%\n%%%%%").unwrap();
    for strategy in Strategy::ALL {
        let report =
            run_problem(&maze, strategy, &manhattan_heuristic, &SearchPolicy::default()).unwrap();
        assert!(!report.goal_reached);
        assert_eq!(report.termination, "frontier_exhausted");
        assert_eq!(report.stats.expansions, 1);
    }
}

// ---------------------------------------------------------------------------
// Validity
// ---------------------------------------------------------------------------

#[test]
fn every_returned_plan_replays_to_a_goal() {
    let tiny = GridMaze::parse(TINY_MAZE).unwrap();
    let small = GridMaze::parse(SMALL_MAZE).unwrap();
    let puzzle = scrambled_puzzle();
    for strategy in Strategy::ALL {
        // run_problem replays the plan and cross-checks cost_of_actions.
        for report in [
            run_problem(&tiny, strategy, &manhattan_heuristic, &bounded()).unwrap(),
            run_problem(&small, strategy, &manhattan_heuristic, &bounded()).unwrap(),
            run_problem(&ExplicitGraph::diamond(), strategy, &NullHeuristic, &bounded())
                .unwrap(),
        ] {
            assert!(report.goal_reached, "{strategy} on {}", report.problem_id);
            assert_eq!(report.path_cost, report.validated_cost);
        }
        let report = run_problem(&puzzle, strategy, &manhattan_distance, &bounded()).unwrap();
        if report.goal_reached {
            assert_eq!(report.path_cost, report.validated_cost);
        } else {
            assert_eq!(strategy, Strategy::DepthFirst);
            assert_eq!(report.termination, "expansion_budget_exceeded");
        }
    }
}

#[test]
fn dfs_plan_cost_matches_traversed_steps() {
    let maze = GridMaze::parse(SMALL_MAZE).unwrap();
    let actions = dfs(&maze).unwrap();
    assert!(!actions.is_empty());
    let traversed = replay_plan(&maze, &actions).unwrap();
    assert_eq!(maze.cost_of_actions(&actions).unwrap(), traversed);
}

// ---------------------------------------------------------------------------
// BFS minimality
// ---------------------------------------------------------------------------

#[test]
fn bfs_finds_shortest_tiny_maze_path() {
    let maze = GridMaze::parse(TINY_MAZE).unwrap();
    assert_eq!(bfs(&maze).unwrap().len(), 8);
}

#[test]
fn bfs_on_open_grid_matches_manhattan_distance() {
    let grid = GridMaze::open(6, 9, (5, 0), (1, 7)).unwrap();
    assert_eq!(bfs(&grid).unwrap().len(), 4 + 7);
}

#[test]
fn bfs_ignores_step_costs() {
    let graph = ExplicitGraph::new("A")
        .edge("A", "B", 1)
        .edge("B", "C", 1)
        .edge("C", "D", 1)
        .edge("A", "D", 10)
        .goal("D");
    assert_eq!(names(&bfs(&graph).unwrap()), vec!["A->D"]);
}

// ---------------------------------------------------------------------------
// UCS / A* optimality
// ---------------------------------------------------------------------------

#[test]
fn ucs_prefers_cheaper_longer_path() {
    let graph = ExplicitGraph::new("A")
        .edge("A", "B", 1)
        .edge("B", "C", 1)
        .edge("C", "D", 1)
        .edge("A", "D", 10)
        .goal("D");
    let actions = ucs(&graph).unwrap();
    assert_eq!(names(&actions), vec!["A->B", "B->C", "C->D"]);
    assert_eq!(graph.cost_of_actions(&actions).unwrap(), 3);
}

/// `S->A 1, S->B 4, A->B 2, A->C 5, B->C 1, C->G 3`; optimal cost 7.
fn weighted() -> ExplicitGraph {
    ExplicitGraph::new("S")
        .edge("S", "A", 1)
        .edge("S", "B", 4)
        .edge("A", "B", 2)
        .edge("A", "C", 5)
        .edge("B", "C", 1)
        .edge("C", "G", 3)
        .goal("G")
}

#[test]
fn astar_with_consistent_heuristic_is_optimal() {
    let graph = weighted();
    // Admissible and consistent on this graph.
    let heuristic = |state: &String, _graph: &ExplicitGraph| -> u64 {
        match state.as_str() {
            "S" => 6,
            "A" => 5,
            "B" => 4,
            "C" => 3,
            _ => 0,
        }
    };
    let actions = astar(&graph, &heuristic).unwrap();
    assert_eq!(names(&actions), vec!["S->A", "A->B", "B->C", "C->G"]);
    assert_eq!(graph.cost_of_actions(&actions).unwrap(), 7);
    assert_eq!(graph.cost_of_actions(&ucs(&graph).unwrap()).unwrap(), 7);
}

#[test]
fn astar_and_ucs_agree_on_eight_puzzle_cost() {
    let puzzle = scrambled_puzzle();
    let ucs_cost = puzzle.cost_of_actions(&ucs(&puzzle).unwrap()).unwrap();
    for h in [manhattan_distance, misplaced_tiles] {
        let plan = astar(&puzzle, &h).unwrap();
        assert_eq!(puzzle.cost_of_actions(&plan).unwrap(), ucs_cost);
    }
    assert!(ucs_cost <= 8);
}

#[test]
fn astar_expands_no_more_than_ucs_on_open_grid() {
    let grid = GridMaze::open(15, 15, (7, 7), (7, 10)).unwrap();
    let policy = SearchPolicy::default();
    let by_ucs = solve(&grid, Strategy::UniformCost, &NullHeuristic, &policy).unwrap();
    let by_astar = solve(&grid, Strategy::AStar, &manhattan_heuristic, &policy).unwrap();
    assert_eq!(by_ucs.path_cost, Some(3));
    assert_eq!(by_astar.path_cost, Some(3));
    assert!(
        by_astar.stats.expansions <= by_ucs.stats.expansions,
        "A* {} > UCS {}",
        by_astar.stats.expansions,
        by_ucs.stats.expansions
    );
    assert_eq!(by_astar.stats.expansions, 3);
}

#[test]
fn astar_expands_no_more_than_ucs_on_eight_puzzle() {
    let puzzle = scrambled_puzzle();
    let policy = SearchPolicy::default();
    let by_ucs = solve(&puzzle, Strategy::UniformCost, &NullHeuristic, &policy).unwrap();
    let by_astar = solve(&puzzle, Strategy::AStar, &manhattan_distance, &policy).unwrap();
    assert_eq!(by_astar.path_cost, by_ucs.path_cost);
    assert!(by_astar.stats.expansions <= by_ucs.stats.expansions);
}

// ---------------------------------------------------------------------------
// No double expansion
// ---------------------------------------------------------------------------

#[test]
fn no_state_is_expanded_twice() {
    for strategy in Strategy::ALL {
        let maze = CountingProblem::new(GridMaze::parse(SMALL_MAZE).unwrap());
        solve(&maze, strategy, &NullHeuristic, &SearchPolicy::default()).unwrap();
        assert_eq!(maze.max_calls_per_state(), 1, "{strategy} on maze");

        let grid = CountingProblem::new(GridMaze::open(8, 8, (0, 0), (7, 7)).unwrap());
        solve(&grid, strategy, &NullHeuristic, &SearchPolicy::default()).unwrap();
        assert_eq!(grid.max_calls_per_state(), 1, "{strategy} on open grid");

        let puzzle = CountingProblem::new(scrambled_puzzle());
        solve(&puzzle, strategy, &NullHeuristic, &bounded()).unwrap();
        assert_eq!(puzzle.max_calls_per_state(), 1, "{strategy} on puzzle");
    }
}

// ---------------------------------------------------------------------------
// Diamond scenario
// ---------------------------------------------------------------------------

#[test]
fn diamond_bfs_takes_first_listed_branch() {
    let actions = bfs(&ExplicitGraph::diamond()).unwrap();
    assert_eq!(names(&actions), vec!["A->B", "B->D"]);
}

#[test]
fn diamond_bfs_follows_successor_order() {
    let graph = ExplicitGraph::new("A")
        .edge("A", "C", 5)
        .edge("A", "B", 1)
        .edge("B", "D", 1)
        .edge("C", "D", 1)
        .goal("D");
    assert_eq!(names(&bfs(&graph).unwrap()), vec!["A->C", "C->D"]);
}

#[test]
fn diamond_ucs_and_astar_take_cheap_branch() {
    let graph = ExplicitGraph::diamond();
    for actions in [ucs(&graph).unwrap(), astar(&graph, &NullHeuristic).unwrap()] {
        assert_eq!(names(&actions), vec!["A->B", "B->D"]);
        assert_eq!(graph.cost_of_actions(&actions).unwrap(), 2);
    }
}

#[test]
fn diamond_dfs_returns_a_valid_plan() {
    let graph = ExplicitGraph::diamond();
    let actions = dfs(&graph).unwrap();
    let traversed = replay_plan(&graph, &actions).unwrap();
    assert_eq!(graph.cost_of_actions(&actions).unwrap(), traversed);
}
