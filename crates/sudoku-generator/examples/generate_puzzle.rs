//! Generates a random puzzle and prints its problem and solution strings.
//!
//! ```sh
//! cargo run -p sudoku-generator --example generate_puzzle
//! ```

use sudoku_generator::PuzzleGenerator;

fn main() {
    let generator = PuzzleGenerator::new();
    let puzzle = generator.generate();
    println!("seed:     {}", puzzle.seed);
    println!("problem:  {}", puzzle.problem);
    println!("solution: {}", puzzle.solution);
}
