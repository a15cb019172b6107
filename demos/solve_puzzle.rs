//! 8-puzzle example comparing iterative deepening and A*
//!
//! Pass nine tiles on the command line (8 is the blank), or run without
//! arguments to solve a built-in board:
//!
//! ```bash
//! cargo run --example solve_puzzle -- 6 4 7 8 5 0 3 2 1
//! RUST_LOG=debug cargo run --example solve_puzzle
//! ```

use std::env;
use std::process;

use eightpuzzle_td::{AStar, Board, IterativeDeepening, PuzzleError, SearchConfig, Solver};

fn parse_board(args: &[String]) -> Result<Board, PuzzleError> {
    if args.is_empty() {
        return Board::new([0, 4, 1, 3, 8, 2, 6, 7, 5]);
    }

    let mut tiles = Vec::with_capacity(args.len());
    for arg in args {
        match arg.parse::<u8>() {
            Ok(tile) => tiles.push(tile),
            Err(_) => {
                eprintln!("'{}' is not a tile label (expected 0-8)", arg);
                process::exit(2);
            }
        }
    }
    Board::try_from(tiles)
}

fn build_solvers(config: SearchConfig) -> Result<Vec<Box<dyn Solver>>, PuzzleError> {
    Ok(vec![
        Box::new(IterativeDeepening::new(config.clone())?),
        Box::new(AStar::new(config)?),
    ])
}

fn main() {
    // Initialize logging
    env_logger::init();

    let args: Vec<String> = env::args().skip(1).collect();
    let board = match parse_board(&args) {
        Ok(board) => board,
        Err(err) => {
            eprintln!("{}", err);
            process::exit(2);
        }
    };

    println!("8-Puzzle Solver");
    println!("===============");
    println!();
    println!("{}", board);
    println!(
        "Manhattan distance: {}, solvable: {}",
        board.manhattan_distance(),
        board.is_solvable()
    );
    println!();

    let solvers = match build_solvers(SearchConfig::default()) {
        Ok(solvers) => solvers,
        Err(err) => {
            eprintln!("{}", err);
            process::exit(2);
        }
    };

    for solver in &solvers {
        let solution = solver.solve(&board);

        if solution.solved {
            println!(
                "{} output ({} moves): {:?}",
                solver.name(),
                solution.len(),
                solution.moves
            );
        } else {
            println!("{} found no solution", solver.name());
        }
        println!("{}", solution.statistics.summary());
        println!();
    }
}
