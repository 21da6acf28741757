// cli.rs - Command-line interface configuration
use std::path::PathBuf;

use clap::Parser;

use crate::config::AnimatorConfig;

#[derive(Parser, Debug, Clone)]
#[command(name = "scene-animator")]
#[command(about = "Tick-driven scene sequencer", long_about = None)]
pub struct Cli {
    /// JSON scene reel (built-in demo reel when omitted)
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Restart the reel after its last scene
    #[arg(long = "loop", default_value = "false")]
    pub looping: bool,

    /// Tick period in milliseconds
    #[arg(long)]
    pub period: Option<u64>,

    /// Stop after this many ticks
    #[arg(long = "max-ticks")]
    pub max_ticks: Option<u64>,

    /// Sleep between ticks instead of simulating time
    #[arg(long, default_value = "false")]
    pub realtime: bool,

    /// Disable canvas and report output
    #[arg(long, default_value = "false")]
    pub quiet: bool,
}

impl Cli {
    /// Fold command-line overrides into a loaded config
    pub fn apply(&self, config: &mut AnimatorConfig) {
        if self.looping {
            config.playback.looping = true;
        }
        if let Some(period) = self.period {
            config.tick_period_ms = period;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flags_override_config() {
        let cli = Cli::parse_from(["scene-animator", "--loop", "--period", "10"]);
        let mut config = AnimatorConfig::default();
        cli.apply(&mut config);

        assert!(config.playback.looping);
        assert_eq!(config.tick_period_ms, 10);
    }

    #[test]
    fn defaults_leave_config_alone() {
        let cli = Cli::parse_from(["scene-animator"]);
        let mut config = AnimatorConfig::default();
        cli.apply(&mut config);

        assert_eq!(config, AnimatorConfig::default());
        assert!(cli.max_ticks.is_none());
        assert!(!cli.realtime);
    }
}
