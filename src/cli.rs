use std::path::PathBuf;

use clap::Parser;

#[derive(Parser, Debug, Clone)]
#[command(name = "scene-viewer")]
#[command(about = "Interactive 3D scene viewer", long_about = None)]
pub struct Cli {
    /// JSON configuration file; built-in defaults when omitted
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Seed for the turbulence generator, overriding the configured one
    #[arg(long)]
    pub seed: Option<u64>,

    /// Hide the parameters panel
    #[arg(long = "no-ui", default_value = "false")]
    pub no_ui: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let cli = Cli::try_parse_from(["scene-viewer"]).unwrap();
        assert!(cli.config.is_none());
        assert!(cli.seed.is_none());
        assert!(!cli.no_ui);
    }

    #[test]
    fn test_all_flags() {
        let cli = Cli::try_parse_from(["scene-viewer", "-c", "scene.json", "--seed", "9", "--no-ui"]).unwrap();
        assert_eq!(cli.config, Some(PathBuf::from("scene.json")));
        assert_eq!(cli.seed, Some(9));
        assert!(cli.no_ui);
    }

    #[test]
    fn test_rejects_bad_seed() {
        assert!(Cli::try_parse_from(["scene-viewer", "--seed", "-1"]).is_err());
    }

    #[test]
    fn test_command_is_well_formed() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }
}
