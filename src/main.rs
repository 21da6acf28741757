use anyhow::{bail, Context, Result};
use clap::Parser;

use scene_animator::{
    cli::Cli,
    config::AnimatorConfig,
    driver::{self, RealtimeSource, SimulatedSource},
    traits::TickSource,
};

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => AnimatorConfig::load(path)
            .with_context(|| format!("Failed to load reel {}", path.display()))?,
        None => AnimatorConfig::default(),
    };
    cli.apply(&mut config);
    config.validate()?;

    if config.playback.looping && cli.max_ticks.is_none() && !cli.realtime {
        bail!("a looping simulated run never ends, pass --max-ticks or --realtime");
    }

    let mut animator = config.build()?;
    animator.play(config.play_options())?;

    let mut source: Box<dyn TickSource> = if cli.realtime {
        Box::new(RealtimeSource::new(config.tick_period_ms))
    } else {
        Box::new(SimulatedSource::new(config.tick_period_ms))
    };

    let report = driver::run(&mut animator, source.as_mut(), cli.max_ticks)?;

    if !cli.quiet {
        println!("{}", animator.surface().to_ascii());
        println!(
            "{} ticks, {} scenes completed, {} passes{}",
            report.ticks,
            report.scenes_completed,
            report.passes_completed,
            if report.finished { "" } else { " (stopped early)" }
        );
    }

    Ok(())
}
