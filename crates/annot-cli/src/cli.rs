//! CLI argument definitions for the annotation unifier.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "met-annot-unifier",
    version,
    about = "Align GNPS, SIRIUS and ISDB metabolite annotations into one table",
    long_about = "Align metabolite annotations exported by GNPS, SIRIUS and ISDB.\n\n\
                  Rows are joined on feature id and planar InChIKey; every other\n\
                  column is prefixed with its tool and folded per feature."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for info, -vv for debug, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum, global = true)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Align the three tool exports into a unified table.
    Align(AlignArgs),

    /// List the supported annotation tools and their expected columns.
    Sources(SourcesArgs),
}

#[derive(Parser)]
pub struct AlignArgs {
    /// GNPS library match export (TSV).
    #[arg(long = "gnps-file", value_name = "PATH")]
    pub gnps_file: PathBuf,

    /// SIRIUS structure identification export (TSV).
    #[arg(long = "sirius-file", value_name = "PATH")]
    pub sirius_file: PathBuf,

    /// ISDB annotation export (TSV).
    #[arg(long = "isdb-file", value_name = "PATH")]
    pub isdb_file: PathBuf,

    /// Write the unified table to this TSV file.
    #[arg(long = "output", short = 'o', value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Print the first N unified rows.
    #[arg(long = "preview", value_name = "N")]
    pub preview: Option<usize>,
}

#[derive(Parser)]
pub struct SourcesArgs {
    /// Print as JSON instead of a table.
    #[arg(long = "json")]
    pub json: bool,
}

/// CLI log level choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn command_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parses_align_arguments() {
        let cli = Cli::try_parse_from([
            "met-annot-unifier",
            "align",
            "--gnps-file",
            "g.tsv",
            "--sirius-file",
            "s.tsv",
            "--isdb-file",
            "i.tsv",
            "--preview",
            "5",
        ])
        .unwrap();
        let Command::Align(args) = cli.command else {
            panic!("expected align");
        };
        assert_eq!(args.gnps_file, PathBuf::from("g.tsv"));
        assert_eq!(args.preview, Some(5));
        assert!(args.output.is_none());
    }

    #[test]
    fn align_requires_every_export() {
        let result = Cli::try_parse_from([
            "met-annot-unifier",
            "align",
            "--gnps-file",
            "g.tsv",
            "--sirius-file",
            "s.tsv",
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn global_flags_follow_subcommand() {
        let cli = Cli::try_parse_from([
            "met-annot-unifier",
            "sources",
            "--json",
            "--log-format",
            "json",
            "-v",
        ])
        .unwrap();
        assert!(matches!(cli.log_format, LogFormatArg::Json));
        assert!(cli.verbosity.is_present());
        assert!(matches!(cli.command, Command::Sources(SourcesArgs { json: true })));
    }
}
