use anyhow::{anyhow, Result};
use clap::{arg, ArgAction, Command};
use knapbench_algorithms::knapsack::{backtracking, branch_and_bound, dynamic};
use knapbench_challenges::knapsack::{Challenge, Difficulty, Solution};
use knapbench_structs::core::{OutputData, RunSettings};
use knapbench_utils::{compress_obj, dejsonify, jsonify};
use std::{fs, path::PathBuf, time::Instant};

type SolveFn = fn(&Challenge) -> Result<Solution>;

const ALGORITHMS: [(&str, SolveFn); 3] = [
    ("dynamic", dynamic::solve_challenge),
    ("backtracking", backtracking::solve_challenge),
    ("branch_and_bound", branch_and_bound::solve_challenge),
];

// Experiment suite: item counts double each pass, weight/value ranges and
// knapsack capacity stay fixed.
const EXPERIMENTS: [Difficulty; 5] = [
    Difficulty { num_items: 4, max_item_weight: 100, max_item_value: 100, max_weight: 100 },
    Difficulty { num_items: 8, max_item_weight: 100, max_item_value: 100, max_weight: 100 },
    Difficulty { num_items: 16, max_item_weight: 100, max_item_value: 100, max_weight: 100 },
    Difficulty { num_items: 32, max_item_weight: 100, max_item_value: 100, max_weight: 100 },
    Difficulty { num_items: 64, max_item_weight: 100, max_item_value: 100, max_weight: 100 },
];

fn cli() -> Command {
    Command::new("knapbench-runtime")
        .about("Benchmarks and runs the knapsack solvers")
        .arg_required_else_help(true)
        .subcommand(
            Command::new("benchmark")
                .about("Runs every solver over the built-in experiment suite")
                .arg(
                    arg!(--rand_hash [RAND_HASH] "A string used in seed generation")
                        .default_value("knapbench")
                        .value_parser(clap::value_parser!(String)),
                )
                .arg(
                    arg!(--nonce [NONCE] "Nonce value")
                        .default_value("0")
                        .value_parser(clap::value_parser!(u64)),
                ),
        )
        .subcommand(
            Command::new("compute_solution")
                .about("Computes a solution with a single algorithm")
                .arg(
                    arg!(<SETTINGS> "Settings json string or path to json file")
                        .value_parser(clap::value_parser!(String)),
                )
                .arg(
                    arg!(<RAND_HASH> "A string used in seed generation")
                        .value_parser(clap::value_parser!(String)),
                )
                .arg(arg!(<NONCE> "Nonce value").value_parser(clap::value_parser!(u64)))
                .arg(
                    arg!(--output [OUTPUT_FILE] "If set, the output data will be saved to this file path (default json)")
                        .value_parser(clap::value_parser!(PathBuf)),
                )
                .arg(
                    arg!(--compress [COMPRESS] "If output file is set, the output data will be compressed as zlib")
                        .action(ArgAction::SetTrue),
                ),
        )
}

fn main() {
    let matches = cli().get_matches();

    if let Err(e) = match matches.subcommand() {
        Some(("benchmark", sub_m)) => benchmark(
            sub_m.get_one::<String>("rand_hash").unwrap().clone(),
            *sub_m.get_one::<u64>("nonce").unwrap(),
        ),
        Some(("compute_solution", sub_m)) => compute_solution(
            sub_m.get_one::<String>("SETTINGS").unwrap().clone(),
            sub_m.get_one::<String>("RAND_HASH").unwrap().clone(),
            *sub_m.get_one::<u64>("NONCE").unwrap(),
            sub_m.get_one::<PathBuf>("output").cloned(),
            *sub_m.get_one::<bool>("compress").unwrap(),
        ),
        _ => Err(anyhow!("Invalid subcommand")),
    } {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

pub fn benchmark(rand_hash: String, nonce: u64) -> Result<()> {
    for difficulty in EXPERIMENTS {
        let settings = RunSettings {
            challenge_id: "knapsack".to_string(),
            algorithm_id: "all".to_string(),
            difficulty: difficulty.clone().into(),
        };
        let seed = settings.calc_seed(&rand_hash, nonce);
        let challenge = Challenge::generate_instance(&seed, &difficulty)?;

        println!(
            "items: {} max weight: {} rand weight: {} rand value: {}",
            difficulty.num_items,
            difficulty.max_weight,
            difficulty.max_item_weight,
            difficulty.max_item_value
        );

        let mut values = Vec::new();
        for (name, solve) in ALGORITHMS {
            let start = Instant::now();
            let solution = solve(&challenge)?;
            let elapsed = start.elapsed();

            challenge
                .verify_solution(&solution)
                .map_err(|e| anyhow!("{} produced an invalid solution: {}", name, e))?;

            println!(
                "{:<16} (elapsed {:8} ms) : {}",
                name,
                elapsed.as_millis(),
                solution
            );
            values.push(solution.total_value);
        }
        if !values.iter().all(|&v| v == values[0]) {
            return Err(anyhow!("Solvers disagree on optimal value: {:?}", values));
        }
        println!();
    }
    Ok(())
}

pub fn compute_solution(
    settings: String,
    rand_hash: String,
    nonce: u64,
    output_file: Option<PathBuf>,
    compress: bool,
) -> Result<()> {
    let settings = load_settings(&settings);
    if settings.challenge_id.as_str() != "knapsack" {
        return Err(anyhow!("Unsupported challenge: {}", settings.challenge_id));
    }
    let solve: SolveFn = ALGORITHMS
        .iter()
        .find(|(name, _)| *name == settings.algorithm_id.as_str())
        .map(|(_, solve)| *solve)
        .ok_or_else(|| anyhow!("Unsupported algorithm: {}", settings.algorithm_id))?;

    let difficulty = Difficulty::from(settings.difficulty.clone());
    let seed = settings.calc_seed(&rand_hash, nonce);
    let challenge = Challenge::generate_instance(&seed, &difficulty)?;

    let start = Instant::now();
    let solution = solve(&challenge)?;
    let elapsed_ms = start.elapsed().as_millis() as u64;

    let solution = serde_json::to_value(&solution)?
        .as_object()
        .cloned()
        .ok_or_else(|| anyhow!("Solution did not serialize to an object"))?;
    let output_data = OutputData {
        nonce,
        elapsed_ms,
        solution,
    };
    if let Some(path) = output_file {
        if compress {
            fs::write(&path, compress_obj(&output_data))?;
        } else {
            fs::write(&path, jsonify(&output_data))?;
        }
        println!("output_data written to: {:?}", path);
    } else {
        println!("{}", jsonify(&output_data));
    }
    Ok(())
}

fn load_settings(settings: &str) -> RunSettings {
    let settings = if settings.ends_with(".json") {
        fs::read_to_string(settings).unwrap_or_else(|_| {
            eprintln!("Failed to read settings file: {}", settings);
            std::process::exit(1);
        })
    } else {
        settings.to_string()
    };

    dejsonify::<RunSettings>(&settings).unwrap_or_else(|_| {
        eprintln!("Failed to parse settings");
        std::process::exit(1);
    })
}
