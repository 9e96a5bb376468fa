//! Sends a cube description to the solver and prints the moves.
//!
//! The cube is given either as 54 notation letters or as 54 color names
//! separated by whitespace or commas, faces in Top, Right, Front, Bottom,
//! Left, Back order.

use std::process::ExitCode;

use clap::Parser;
use facelace_client::{ClientConfig, DEFAULT_ENDPOINT, SolveClient};
use facelace_core::Color;
use facelace_store::{CubeString, decode, validate};

#[derive(Debug, Parser)]
#[command(author, version, about)]
struct Args {
    /// Solver endpoint.
    #[arg(long, default_value = DEFAULT_ENDPOINT)]
    endpoint: String,

    /// Total request timeout in seconds.
    #[arg(long, default_value_t = 30)]
    timeout_secs: u64,

    /// Cube as 54 letters (URFDLB) or 54 color names.
    #[arg(required = true, num_args = 1..)]
    cube: Vec<String>,
}

fn parse_cube(words: &[String]) -> Result<CubeString, String> {
    if let [single] = words
        && !single.contains(',')
    {
        return single.parse().map_err(|e| format!("{e}"));
    }

    let colors = words
        .iter()
        .flat_map(|word| word.split(','))
        .filter(|name| !name.is_empty())
        .map(|name| name.parse::<Color>().map(Color::notation_letter))
        .collect::<Result<String, _>>()
        .map_err(|e| format!("{e}"))?;
    colors.parse().map_err(|e| format!("{e}"))
}

fn main() -> ExitCode {
    env_logger::init();
    let args = Args::parse();

    let cube = match parse_cube(&args.cube) {
        Ok(cube) => cube,
        Err(err) => {
            eprintln!("invalid cube: {err}");
            return ExitCode::FAILURE;
        }
    };

    // Reject inputs the solver would refuse anyway.
    let state = decode(&cube);
    if let Err(err) = validate(&state) {
        eprintln!("{err}");
        return ExitCode::FAILURE;
    }

    let config = ClientConfig {
        timeout: std::time::Duration::from_secs(args.timeout_secs),
        ..ClientConfig::with_endpoint(args.endpoint)
    };
    let client = match SolveClient::new(&config) {
        Ok(client) => client,
        Err(err) => {
            eprintln!("{err}");
            return ExitCode::FAILURE;
        }
    };

    match client.solve(&cube) {
        Ok(solution) if solution.moves.is_empty() => {
            println!("Already solved.");
            ExitCode::SUCCESS
        }
        Ok(solution) => {
            for (i, mv) in solution.moves.iter().enumerate() {
                println!("{:>3}. {mv}", i + 1);
            }
            if let Some(message) = solution.message {
                println!("{message}");
            }
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("Error solving: {err}");
            ExitCode::FAILURE
        }
    }
}
