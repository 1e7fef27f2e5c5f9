//! Bouncing Balls
//!
//! Headless driver: reads gravity and air density from the command line,
//! steps the simulation and logs what a renderer would draw.

use anyhow::{Context, Result};
use ball_simulation::{drive, BallSimulation, DiscInstance, Presenter, SimulationParams};
use clap::Parser;
use std::collections::VecDeque;
use std::ops::ControlFlow;
use std::time::{Duration, Instant};

#[derive(Parser, Debug)]
#[command(name = "bouncing-balls", version, about = "Balls bouncing under gravity and air drag")]
struct Args {
    /// Gravity acceleration (default 9.8, 0 for weightless)
    #[arg(long, short)]
    gravity: Option<f64>,

    /// Air density (default 1.225, 0 for vacuum)
    #[arg(long, short)]
    air_density: Option<f64>,

    /// Number of balls
    #[arg(long, short, default_value_t = ball_simulation::DEFAULT_BODY_COUNT)]
    bodies: usize,

    /// Seed for a reproducible population
    #[arg(long, short)]
    seed: Option<u64>,

    /// Ticks to run, 0 runs until interrupted
    #[arg(long, short, default_value_t = 600)]
    ticks: u64,

    /// Pace the loop to this many ticks per second (unpaced when omitted)
    #[arg(long)]
    fps: Option<f64>,

    /// Log a frame summary every N ticks
    #[arg(long, default_value_t = 60)]
    log_every: u64,
}

/// Paces frames and keeps frame timings instead of drawing
struct HeadlessPresenter {
    frame_budget: Option<Duration>,
    last_frame_time: Instant,
    frame_times: VecDeque<f32>,
}

impl HeadlessPresenter {
    fn new(frame_budget: Option<Duration>) -> Self {
        Self {
            frame_budget,
            last_frame_time: Instant::now(),
            frame_times: VecDeque::with_capacity(100),
        }
    }

    fn avg_frame_time(&self) -> f32 {
        if self.frame_times.is_empty() {
            return 0.0;
        }
        self.frame_times.iter().sum::<f32>() / self.frame_times.len() as f32
    }
}

impl Presenter for HeadlessPresenter {
    fn present(&mut self, tick: u64, discs: &[DiscInstance]) -> ControlFlow<()> {
        if let Some(budget) = self.frame_budget {
            let elapsed = self.last_frame_time.elapsed();
            if elapsed < budget {
                std::thread::sleep(budget - elapsed);
            }
        }

        let now = Instant::now();
        let frame_time = (now - self.last_frame_time).as_secs_f32() * 1000.0;
        self.last_frame_time = now;
        self.frame_times.push_back(frame_time);
        if self.frame_times.len() > 100 {
            self.frame_times.pop_front();
        }

        for (i, disc) in discs.iter().enumerate() {
            log::trace!(
                "tick {tick} [{i}] center=({:.1}, {:.1}) r={}",
                disc.center[0],
                disc.center[1],
                disc.radius
            );
        }
        ControlFlow::Continue(())
    }
}

/// Time per frame for `--fps`, `None` when unpaced
fn frame_budget(fps: Option<f64>) -> Result<Option<Duration>> {
    let Some(fps) = fps else {
        return Ok(None);
    };
    if !(fps.is_finite() && fps > 0.0) {
        anyhow::bail!("--fps must be a positive number, got {fps}");
    }
    let budget = Duration::try_from_secs_f64(1.0 / fps)
        .with_context(|| format!("--fps {fps} is too low to pace frames"))?;
    Ok(Some(budget))
}

fn main() -> Result<()> {
    // Initialize logger (RUST_LOG=trace for per-ball output every tick)
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();
    let params = SimulationParams {
        body_count: args.bodies,
        seed: args.seed,
        ..SimulationParams::with_overrides(args.gravity, args.air_density)
    };

    log::info!("Starting bouncing balls simulation...");
    let mut sim = BallSimulation::new(&params).context("failed to set up simulation")?;

    for (id, body) in sim.registry().all() {
        log::info!(
            "  ball {id}: r={} at {} moving {} color {}",
            body.radius(),
            body.position,
            body.velocity,
            body.color()
        );
    }
    if sim.diagnostics().overlapping {
        log::warn!("Initial population has overlapping balls");
    }

    let mut presenter = HeadlessPresenter::new(frame_budget(args.fps)?);

    // Run in chunks so diagnostics can be read between them
    let chunk = args.log_every.max(1);
    let mut ran = 0;
    loop {
        let next = match args.ticks {
            0 => chunk,
            total => chunk.min(total - ran),
        };
        if next == 0 {
            break;
        }
        ran += drive(&mut sim, &mut presenter, Some(next));

        let d = sim.diagnostics();
        log::info!(
            "tick {}: momentum={:.2} energy={:.2} max speed={:.2}{} ({:.3} ms/frame)",
            sim.tick(),
            d.momentum,
            d.kinetic_energy,
            d.max_speed,
            if d.overlapping { " overlapping" } else { "" },
            presenter.avg_frame_time()
        );
        if !d.kinetic_energy.is_finite() {
            log::warn!("Energy is no longer finite, stopping");
            break;
        }
    }

    log::info!("Finished after {ran} ticks");
    Ok(())
}
