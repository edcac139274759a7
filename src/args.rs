use clap::{
    Args,
    Parser,
    Subcommand,
    ValueEnum,
};

/// Plane and vector geometry queries, evaluated from JSON, TOML or YAML query files.
#[derive(Debug, Parser)]
#[command(name = "cadgeo")]
pub struct CadGeoCli {
    #[command(subcommand)]
    pub sub_command: Command,

    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    /// Increase log verbosity (-v info, -vv debug, -vvv trace). Logs go to stderr.
    pub verbose: u8,
}

/// Parser for the subcommands of the cadgeo binary using clap.
#[derive(Debug, Subcommand)]
pub enum Command {
    #[command(name = "eval")]
    /// Evaluate every query in a query file and print the results.
    Eval(EvalArgs),

    #[command(name = "example")]
    /// List the available operations, or print an example query file for one.
    Example(ExampleArgs),
}

/// Arguments for the eval command. Compiled with clap.
#[derive(Debug, Args)]
pub struct EvalArgs {
    /// Path to the query file (.json, .toml, .yaml or .yml).
    pub query_path: String,

    #[arg(short, long = "output")]
    /// Write the results to this file instead of stdout.
    pub output_path: Option<String>,

    #[arg(short, long, value_enum)]
    /// Format of the results [default: from the output extension, else yaml].
    pub format: Option<Format>,
}

/// Arguments for the example command. Compiled with clap.
#[derive(Debug, Args)]
pub struct ExampleArgs {
    /// Operation to print an example for. Lists the operations if omitted.
    pub op: Option<String>,

    #[arg(short, long, value_enum, default_value_t = Format::Yaml)]
    /// Format of the example query file.
    pub format: Format,
}

/// Supported document formats.
#[derive(Debug, Clone, Copy, PartialEq, ValueEnum)]
pub enum Format {
    Yaml,
    Json,
    Toml,
}
impl Format {
    /// Pick the format from a file extension.
    pub fn from_path(path: &str) -> Option<Self> {
        match path.rsplit('.').next() {
            Some("json") => Some(Format::Json),
            Some("toml") => Some(Format::Toml),
            Some("yaml") | Some("yml") => Some(Format::Yaml),
            _ => None,
        }
    }
}

/// Parse the command line arguments for the cadgeo binary.
pub fn parse_cli_args() -> CadGeoCli {
    CadGeoCli::parse()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cli_is_well_formed() {
        use clap::CommandFactory;
        CadGeoCli::command().debug_assert();
    }

    #[test]
    fn parse_eval() {
        let cli = CadGeoCli::try_parse_from(["cadgeo", "-vv", "eval", "q.yaml", "-f", "json"]).unwrap();
        assert_eq!(cli.verbose, 2);
        match cli.sub_command {
            Command::Eval(eval_args) => {
                assert_eq!(eval_args.query_path, "q.yaml");
                assert_eq!(eval_args.format, Some(Format::Json));
                assert!(eval_args.output_path.is_none());
            },
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn format_from_extension() {
        assert_eq!(Format::from_path("a/b.yml"), Some(Format::Yaml));
        assert_eq!(Format::from_path("b.toml"), Some(Format::Toml));
        assert_eq!(Format::from_path("b.json"), Some(Format::Json));
        assert_eq!(Format::from_path("b.txt"), None);
    }
}
