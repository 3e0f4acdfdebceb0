//! Example demonstrating each remapping convention on a random renumbering.
//!
//! This example shows how to:
//! - Build a random permutation as a `NewToOld` mapping
//! - Apply it by copying (`apply_forward`) or in place (`apply_in_place`)
//! - Undo it with `apply_reverse` and the mapping's inverse
//! - Compact a space and translate stored literals with `apply_polarized`
//!
//! # Usage
//!
//! ```sh
//! cargo run --example renumber_demo
//! ```
//!
//! Choose the size, seed and application strategy:
//!
//! ```sh
//! cargo run --example renumber_demo -- --size 12 --seed 7 --strategy in-place
//! ```
//!
//! Drop every `k`-th identifier before compacting:
//!
//! ```sh
//! cargo run --example renumber_demo -- --eliminate-every 3
//! ```
//!
//! Set `RUST_LOG=debug` to see operation logs.

use std::process;

use clap::{Parser, ValueEnum};
use rand::{SeedableRng as _, seq::SliceRandom as _};
use rand_pcg::Pcg64;
use renumber::{
    Lit, NewToOld, OldToNew, SeenMarkers, Var, apply_forward, apply_in_place, apply_polarized,
    apply_reverse,
};

#[derive(Debug, Clone, Copy, ValueEnum)]
enum Strategy {
    Copy,
    InPlace,
}

#[derive(Debug, Parser)]
#[command(author, version, about)]
struct Args {
    /// Number of identifiers in the space.
    #[arg(long, value_name = "N", default_value_t = 8)]
    size: usize,

    /// Seed for the random permutation.
    #[arg(long, value_name = "SEED", default_value_t = 0)]
    seed: u64,

    /// How the permutation is applied.
    #[arg(long, value_name = "STRATEGY", default_value = "copy")]
    strategy: Strategy,

    /// Eliminate every K-th identifier before compacting.
    #[arg(long, value_name = "K", default_value_t = 2)]
    eliminate_every: usize,
}

fn main() {
    better_panic::install();
    env_logger::init();

    let args = Args::parse();
    if args.size == 0 || args.size > 1 << 20 {
        eprintln!("--size must be between 1 and {}.", 1 << 20);
        process::exit(1);
    }
    if args.eliminate_every == 0 {
        eprintln!("--eliminate-every must be at least 1.");
        process::exit(1);
    }
    log::info!(
        "renumbering {} identifiers with seed {} ({:?})",
        args.size,
        args.seed,
        args.strategy
    );

    permute(&args);
    println!();
    compact(&args);
}

fn random_mapping(len: usize, seed: u64) -> NewToOld {
    let mut rng = Pcg64::seed_from_u64(seed);
    let mut vars: Vec<Var> = Var::range(len).collect();
    vars.shuffle(&mut rng);
    NewToOld::new(vars)
}

fn permute(args: &Args) {
    let mapper = random_mapping(args.size, args.seed);
    let original: Vec<String> = (0..args.size).map(|i| format!("v{i}")).collect();

    let mut data = original.clone();
    match args.strategy {
        Strategy::Copy => apply_forward(&mut data, &mapper),
        Strategy::InPlace => {
            let mut seen = SeenMarkers::new(args.size);
            let cycles = apply_in_place(&mut data, &mut seen, &mapper);
            println!("Cycles walked: {cycles}");
        }
    }

    println!("Mapping:");
    println!("  {mapper:?}");
    println!("  {:?}", mapper.to_opposite());
    println!("Before:");
    println!("  {}", original.join(" "));
    println!("After:");
    println!("  {}", data.join(" "));

    apply_reverse(&mut data, &mapper.inverse());
    assert_eq!(data, original);
    println!("Restored with the inverse mapping.");
}

fn compact(args: &Args) {
    let (kept, eliminated): (Vec<Var>, Vec<Var>) =
        Var::range(args.size).partition(|var| (var.as_usize() + 1) % args.eliminate_every != 0);
    let order: NewToOld = kept.iter().chain(&eliminated).copied().collect();
    let compaction: OldToNew = order.to_opposite();

    // Literals over kept identifiers, plus two beyond the space that pass through.
    let mut clause: Vec<Lit> = kept
        .iter()
        .chain(&[Var::from_usize(args.size), Var::from_usize(args.size + 1)])
        .map(|&var| Lit::new(var, var.index() % 2 == 1))
        .collect();
    let before = render(&clause);
    apply_polarized(&mut clause, &compaction);

    println!("Kept {} of {} identifiers.", kept.len(), args.size);
    println!("Compaction:");
    println!("  {compaction:?}");
    println!("Literals before:");
    println!("  {before}");
    println!("Literals after:");
    println!("  {}", render(&clause));
}

fn render(lits: &[Lit]) -> String {
    lits.iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(" ")
}
