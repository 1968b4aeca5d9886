use gridbattle::{init_logging, simulate};

/// Cap on inputs per game; random play finishes far below this.
const MAX_STEPS: usize = 2_000_000;

fn main() -> anyhow::Result<()> {
    init_logging();
    let args: Vec<String> = std::env::args().collect();
    if args.len() != 3 {
        eprintln!("Usage: {} <seed1> <seed2>", args[0]);
        std::process::exit(1);
    }
    let seed1: u64 = args[1].parse()?;
    let seed2: u64 = args[2].parse()?;

    let report = simulate(seed1, seed2, MAX_STEPS);
    println!("{}", serde_json::to_string(&report)?);
    Ok(())
}
