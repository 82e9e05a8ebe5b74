use anyhow::{anyhow, Result};
use clap::{arg, Command};
use knapbench_challenges::knapsack;
use knapbench_structs::core::{RunSettings, Solution};
use knapbench_utils::dejsonify;
use serde_json::Value;
use std::{fs, io::Read};

fn cli() -> Command {
    Command::new("knapbench-verifier")
        .about("Verifies a knapsack solution")
        .arg_required_else_help(true)
        .subcommand(
            Command::new("verify_solution")
                .about("Verifies a solution against its regenerated instance")
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
                    arg!(<SOLUTION> "Solution json string, path to json file, or '-' for stdin")
                        .value_parser(clap::value_parser!(String)),
                ),
        )
}

fn main() {
    let matches = cli().get_matches();

    if let Err(e) = match matches.subcommand() {
        Some(("verify_solution", sub_m)) => verify_solution(
            sub_m.get_one::<String>("SETTINGS").unwrap().clone(),
            sub_m.get_one::<String>("RAND_HASH").unwrap().clone(),
            *sub_m.get_one::<u64>("NONCE").unwrap(),
            sub_m.get_one::<String>("SOLUTION").unwrap().clone(),
        ),
        _ => Err(anyhow!("Invalid subcommand")),
    } {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

pub fn verify_solution(
    settings: String,
    rand_hash: String,
    nonce: u64,
    solution_path: String,
) -> Result<()> {
    let settings = load_settings(&settings);
    let mut solution = load_solution(&solution_path);
    // Accept the runtime's output_data wrapper as well as a bare solution.
    if let Some(Value::Object(inner)) = solution.get("solution") {
        solution = inner.clone();
    }
    let seed = settings.calc_seed(&rand_hash, nonce);

    if settings.challenge_id.as_str() != "knapsack" {
        return Err(anyhow!("Unsupported challenge: {}", settings.challenge_id));
    }

    let challenge =
        knapsack::Challenge::generate_instance(&seed, &settings.difficulty.clone().into())?;

    let mut err_msg = Option::<String>::None;
    match knapsack::Solution::try_from(solution) {
        Ok(solution) => match challenge.verify_solution(&solution) {
            Ok(_) => println!("Solution is valid"),
            Err(e) => err_msg = Some(format!("Invalid solution: {}", e)),
        },
        Err(_) => err_msg = Some("Invalid solution. Cannot convert to knapsack::Solution".to_string()),
    }

    if let Some(err_msg) = err_msg {
        eprintln!("Verification error: {}", err_msg);
        std::process::exit(1);
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

fn load_solution(solution: &str) -> Solution {
    let solution = if solution == "-" {
        let mut buffer = String::new();
        std::io::stdin()
            .read_to_string(&mut buffer)
            .unwrap_or_else(|_| {
                eprintln!("Failed to read solution from stdin");
                std::process::exit(1);
            });
        buffer
    } else if solution.ends_with(".json") {
        fs::read_to_string(solution).unwrap_or_else(|_| {
            eprintln!("Failed to read solution file: {}", solution);
            std::process::exit(1);
        })
    } else {
        solution.to_string()
    };

    dejsonify::<Solution>(&solution).unwrap_or_else(|_| {
        eprintln!("Failed to parse solution");
        std::process::exit(1);
    })
}
