use knapbench_algorithms::knapsack::{backtracking, branch_and_bound, dynamic};
use knapbench_challenges::knapsack::{Challenge, Difficulty, Item, Solution};

type SolveFn = fn(&Challenge) -> anyhow::Result<Solution>;

const SOLVERS: [(&str, SolveFn); 3] = [
    ("dynamic", dynamic::solve_challenge),
    ("backtracking", backtracking::solve_challenge),
    ("branch_and_bound", branch_and_bound::solve_challenge),
];

fn challenge_from_items(items: Vec<Item>, max_weight: u32) -> Challenge {
    let num_items = items.len();
    Challenge {
        seed: [0u8; 32],
        difficulty: Difficulty {
            num_items,
            max_item_weight: 100,
            max_item_value: 100,
            max_weight,
        },
        items,
        max_weight,
    }
}

fn scenario() -> Challenge {
    challenge_from_items(
        vec![
            Item { weight: 2, value: 3 },
            Item { weight: 3, value: 4 },
            Item { weight: 4, value: 5 },
            Item { weight: 5, value: 6 },
        ],
        5,
    )
}

#[test]
fn test_concrete_scenario_all_solvers() {
    let challenge = scenario();
    for (name, solve) in SOLVERS {
        let solution = solve(&challenge).unwrap();
        assert_eq!(solution.total_value, 7, "{} value", name);
        assert_eq!(solution.total_weight, 5, "{} weight", name);
        // The optimum is unique here: items 0 and 1.
        assert_eq!(solution.items, vec![0, 1], "{} items", name);
        challenge.verify_solution(&solution).unwrap();
    }
}

#[test]
fn test_dynamic_comparison_count_on_scenario() {
    // Fill phase: 3 + 2 + 1 eligible cells across rows 1..4; backtrace adds
    // one comparison per row.
    let solution = dynamic::solve_challenge(&scenario()).unwrap();
    assert_eq!(solution.comparisons, 10);
}

#[test]
fn test_empty_item_list_yields_empty_solution() {
    let challenge = challenge_from_items(vec![], 5);
    for (name, solve) in SOLVERS {
        let solution = solve(&challenge).unwrap();
        assert!(solution.items.is_empty(), "{}", name);
        assert_eq!(solution.total_weight, 0, "{}", name);
        assert_eq!(solution.total_value, 0, "{}", name);
    }
}

#[test]
fn test_zero_capacity_yields_empty_solution() {
    let challenge = scenario();
    let challenge = challenge_from_items(challenge.items, 0);
    for (name, solve) in SOLVERS {
        let solution = solve(&challenge).unwrap();
        assert!(solution.items.is_empty(), "{}", name);
        assert_eq!(solution.total_weight, 0, "{}", name);
        assert_eq!(solution.total_value, 0, "{}", name);
    }
}

#[test]
fn test_solvers_agree_on_random_instances() {
    let difficulty = Difficulty {
        num_items: 12,
        max_item_weight: 100,
        max_item_value: 100,
        max_weight: 100,
    };
    for seed in 0u8..5 {
        let challenge = Challenge::generate_instance(&[seed; 32], &difficulty).unwrap();
        let mut values = Vec::new();
        for (name, solve) in SOLVERS {
            let solution = solve(&challenge).unwrap();
            // Feasibility, totals consistency, and index validity.
            challenge.verify_solution(&solution).unwrap();
            assert!(
                solution.items.windows(2).all(|w| w[0] < w[1]),
                "{} indices not strictly ascending (seed {})",
                name,
                seed
            );
            values.push(solution.total_value);
        }
        assert!(
            values.iter().all(|&v| v == values[0]),
            "solvers disagree on seed {}: {:?}",
            seed,
            values
        );
    }
}

#[test]
fn test_capacity_monotonicity() {
    let base = Challenge::generate_instance(
        &[42u8; 32],
        &Difficulty {
            num_items: 16,
            max_item_weight: 20,
            max_item_value: 100,
            max_weight: 0,
        },
    )
    .unwrap();

    let mut previous = 0;
    for max_weight in 0..=60 {
        let challenge = challenge_from_items(base.items.clone(), max_weight);
        let solution = dynamic::solve_challenge(&challenge).unwrap();
        assert!(
            solution.total_value >= previous,
            "optimal value dropped from {} to {} at capacity {}",
            previous,
            solution.total_value,
            max_weight
        );
        previous = solution.total_value;
    }
}

#[test]
fn test_backtrace_takes_item_zero_at_row_boundary() {
    // Optimum must include item 0; exercises the special row-0 step of the
    // dynamic programming backtrace.
    let challenge = challenge_from_items(
        vec![Item { weight: 5, value: 10 }, Item { weight: 5, value: 1 }],
        5,
    );
    let solution = dynamic::solve_challenge(&challenge).unwrap();
    assert_eq!(solution.items, vec![0]);
    assert_eq!(solution.total_weight, 5);
    assert_eq!(solution.total_value, 10);
}

#[test]
fn test_backtrace_single_item() {
    let challenge = challenge_from_items(vec![Item { weight: 3, value: 10 }], 5);
    let solution = dynamic::solve_challenge(&challenge).unwrap();
    assert_eq!(solution.items, vec![0]);
    assert_eq!(solution.total_weight, 3);
    assert_eq!(solution.total_value, 10);
}

#[test]
fn test_pruning_never_exceeds_exhaustive_search() {
    // One dominant item plus twelve fillers, everything fits: backtracking
    // must visit all 2^13 terminal nodes while the bound collapses the tree
    // as soon as the dominant path has been completed.
    let mut items = vec![Item { weight: 1, value: 1000 }];
    items.extend((0..12).map(|_| Item { weight: 1, value: 1 }));
    let challenge = challenge_from_items(items, 13);

    let exhaustive = backtracking::solve_challenge(&challenge).unwrap();
    let bounded = branch_and_bound::solve_challenge(&challenge).unwrap();

    assert_eq!(exhaustive.comparisons, 1u64 << 13);
    assert!(bounded.comparisons < exhaustive.comparisons);
    assert_eq!(exhaustive.total_value, 1012);
    assert_eq!(bounded.total_value, 1012);
    assert_eq!(
        dynamic::solve_challenge(&challenge).unwrap().total_value,
        1012
    );
}
