use clap::Parser;
use std::path::PathBuf;

const HELP_TEMPLATE: &str = "\
{before-help}{name} {version}
{author-with-newline}{about-with-newline}
{usage-heading} {usage}

{all-args}{after-help}
";

#[derive(Parser, Debug)]
#[command(
    version,
    about = "readapdb - Load a PDB file into an atom list and a structure, reporting nothing on success.",
    help_template = HELP_TEMPLATE,
)]
pub struct Cli {
    /// Path to the input PDB file.
    #[arg(required = true, value_name = "PDB_FILE")]
    pub input: PathBuf,

    /// Increase verbosity level (-v for INFO, -vv for DEBUG, -vvv for TRACE)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress all log output, including load failures
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Write logs to a specified file in addition to the console output
    #[arg(long, value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    /// Path to an optional configuration file in TOML format.
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Read this model of a multi-model file (1-based).
    #[arg(long, value_name = "INT")]
    pub model: Option<usize>,

    /// Keep the alternate location with this occupancy rank (1 is the highest).
    #[arg(long, value_name = "INT", conflicts_with = "all_alternates")]
    pub occupancy_rank: Option<usize>,

    /// Keep every alternate location instead of selecting one per atom.
    #[arg(long)]
    pub all_alternates: bool,

    /// Skip HETATM records.
    #[arg(long)]
    pub no_hetatm: bool,

    /// Exit with a non-zero status when the file cannot be loaded.
    #[arg(long)]
    pub strict: bool,

    /// Set a specific configuration value, overriding the config file.
    /// Can be used multiple times. Example: -S reader.model=2
    #[arg(short = 'S', long = "set", value_name = "KEY=VALUE")]
    pub set_values: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;
    use clap::error::ErrorKind;

    #[test]
    fn command_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn positional_input_is_required() {
        let err = Cli::try_parse_from(["readapdb"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::MissingRequiredArgument);
        assert_eq!(err.exit_code(), 2);
    }

    #[test]
    fn bare_invocation_uses_no_overrides() {
        let cli = Cli::try_parse_from(["readapdb", "protein.pdb"]).unwrap();
        assert_eq!(cli.input, PathBuf::from("protein.pdb"));
        assert_eq!(cli.verbose, 0);
        assert!(!cli.quiet);
        assert!(cli.config.is_none());
        assert!(cli.model.is_none());
        assert!(cli.occupancy_rank.is_none());
        assert!(!cli.all_alternates);
        assert!(!cli.no_hetatm);
        assert!(!cli.strict);
        assert!(cli.set_values.is_empty());
    }

    #[test]
    fn reader_flags_are_parsed() {
        let cli = Cli::try_parse_from([
            "readapdb",
            "-vv",
            "--model",
            "2",
            "--occupancy-rank",
            "3",
            "--no-hetatm",
            "--strict",
            "-S",
            "reader.model=4",
            "protein.pdb",
        ])
        .unwrap();
        assert_eq!(cli.verbose, 2);
        assert_eq!(cli.model, Some(2));
        assert_eq!(cli.occupancy_rank, Some(3));
        assert!(cli.no_hetatm);
        assert!(cli.strict);
        assert_eq!(cli.set_values, vec!["reader.model=4".to_string()]);
    }

    #[test]
    fn set_does_not_consume_the_input_path() {
        let cli = Cli::try_parse_from(["readapdb", "-S", "strict=true", "protein.pdb"]).unwrap();
        assert_eq!(cli.input, PathBuf::from("protein.pdb"));
        assert_eq!(cli.set_values, vec!["strict=true".to_string()]);
    }

    #[test]
    fn quiet_conflicts_with_verbose() {
        let err = Cli::try_parse_from(["readapdb", "-q", "-v", "protein.pdb"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::ArgumentConflict);
    }

    #[test]
    fn occupancy_rank_conflicts_with_all_alternates() {
        let err = Cli::try_parse_from([
            "readapdb",
            "--all-alternates",
            "--occupancy-rank",
            "2",
            "protein.pdb",
        ])
        .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::ArgumentConflict);
    }
}
