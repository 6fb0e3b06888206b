//! Headless demo: build a maze, solve it with both strategies, print frames.
//!
//! ```text
//! cargo run -p gridwalk-engine --example headless -- --seed 7
//! ```

use clap::Parser;
use gridwalk_engine::{Session, SessionConfig, TickOutcome};
use gridwalk_solver::{Solver, SolverKind};

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Grid columns.
    #[arg(long, default_value_t = 16)]
    width: u32,

    /// Grid rows.
    #[arg(long, default_value_t = 8)]
    height: u32,

    /// Random walk seed.
    #[arg(long, default_value_t = 0)]
    seed: u64,

    /// Strategy to run first (`random_walk` or `astar`).
    #[arg(long, default_value_t = SolverKind::AStar)]
    algorithm: SolverKind,

    /// Per-run step ceiling.
    #[arg(long, default_value_t = 100_000)]
    budget: u64,

    /// Print a frame every N ticks (0 = only the final frame).
    #[arg(long, default_value_t = 0)]
    every: u64,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt::init();
    let args = Args::parse();

    let mut session = Session::new(SessionConfig {
        width: args.width,
        height: args.height,
        seed: args.seed,
        algorithm: args.algorithm,
        step_budget: Some(args.budget),
    })?;

    let (w, h) = (args.width as i32, args.height as i32);
    // A comb of vertical walls with alternating gaps.
    for x in (2..w - 1).step_by(3) {
        let gap = if (x / 3) % 2 == 0 { h - 1 } else { 0 };
        session.begin_stroke(x, 0);
        for y in 1..h {
            session.continue_stroke(x, y);
        }
        session.end_stroke();
        session.begin_stroke(x, gap);
        session.end_stroke();
    }
    session.place_endpoint(0, 0);
    session.place_endpoint(w - 1, h - 1);

    for _ in 0..2 {
        let kind = session.algorithm();
        if !session.toggle_solving() {
            return Err("grid has no start or end".into());
        }
        let outcome = loop {
            let outcome = session.tick();
            if args.every > 0 && session.run_ticks() % args.every == 0 {
                println!("{kind} tick {}:\n{}", session.run_ticks(), session.render_ascii());
            }
            if outcome != TickOutcome::Advanced {
                break outcome;
            }
        };
        let metrics = session.solver().metrics();
        println!(
            "{kind}: {outcome:?} after {} ticks, path {} cells, visited {}, restarts {}",
            session.run_ticks(),
            session.solver().path().len(),
            session.solver().visited().len(),
            metrics.restarts,
        );
        println!("{}", session.render_ascii());
        session.toggle_algorithm();
    }
    Ok(())
}
