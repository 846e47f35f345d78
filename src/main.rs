use spheresim::config::SimConfig;
use spheresim::core::{Input, StepStats};

use anyhow::{Context, Result};
use clap::Parser;

use std::fs::File;
use std::io::BufReader;
use std::path::PathBuf;

/// Headless driver: steps the sphere box without a window and prints a summary.
#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    /// YAML run configuration; reference scene when omitted
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Frames to run (overrides the config)
    #[arg(short, long)]
    frames: Option<u64>,

    /// Placement seed (overrides the config)
    #[arg(short, long)]
    seed: Option<u64>,

    /// Start with gravity switched off
    #[arg(long)]
    no_gravity: bool,

    /// Hold the pointer at this world x/y for the whole run
    #[arg(long, num_args = 2, value_names = ["X", "Y"], allow_negative_numbers = true)]
    pointer: Option<Vec<f64>>,
}

fn load_config(args: &Args) -> Result<SimConfig> {
    let mut cfg = match &args.config {
        Some(path) => {
            let file = File::open(path)
                .with_context(|| format!("failed to open config {}", path.display()))?;
            SimConfig::from_reader(BufReader::new(file))
                .with_context(|| format!("failed to parse config {}", path.display()))?
        }
        None => SimConfig::default(),
    };
    if let Some(frames) = args.frames {
        cfg.frames = frames;
    }
    if args.seed.is_some() {
        cfg.seed = args.seed;
    }
    Ok(cfg)
}

fn main() -> Result<()> {
    let args = Args::parse();
    let cfg = load_config(&args)?;
    let mut sim = cfg.build().context("failed to build simulation")?;

    let mut input = Input {
        gravity_enabled: !args.no_gravity,
        ..Input::default()
    };
    if let Some(p) = &args.pointer {
        input.set_pointer(p[0], p[1]);
        input.press_pointer();
    }

    let mut totals = StepStats::default();
    for _ in 0..cfg.frames {
        totals.merge(sim.step(&input));
    }

    let positions = sim.positions();
    let mut lo = [f64::INFINITY; 3];
    let mut hi = [f64::NEG_INFINITY; 3];
    for r in &positions {
        for k in 0..3 {
            lo[k] = lo[k].min(r[k]);
            hi[k] = hi[k].max(r[k]);
        }
    }

    println!("frames:           {}", sim.frame());
    println!("particles:        {}", sim.num_particles());
    println!("kinetic energy:   {:.6}", sim.kinetic_energy());
    println!("wall hits:        {}", totals.wall_hits);
    println!("contacts:         {}", totals.contacts);
    println!("degenerate pairs: {}", totals.degenerate_pairs);
    println!(
        "extent:           x [{:.3}, {:.3}]  y [{:.3}, {:.3}]  z [{:.3}, {:.3}]",
        lo[0], hi[0], lo[1], hi[1], lo[2], hi[2]
    );

    Ok(())
}
