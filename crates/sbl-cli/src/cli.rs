use clap::{Args, Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "sbl",
    about = "Shared Bill Ledger — split a restaurant receipt, fairly",
    version,
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[arg(long, global = true, default_value = "text")]
    pub format: OutputFormat,
}

#[derive(Clone, Debug, clap::ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

#[derive(Subcommand)]
pub enum Command {
    /// Split a recognized receipt and print the per-person breakdown
    Split(SplitArgs),
    /// Normalize a recognized receipt and print it with item ids
    Normalize(NormalizeArgs),
    /// Start the SBL session server
    Serve(ServeArgs),
}

#[derive(Args)]
pub struct SplitArgs {
    /// Recognizer-output JSON file
    #[arg(long)]
    pub receipt: String,

    /// Interpreter-output JSON file whose operations apply first
    #[arg(long)]
    pub operations: Option<String>,

    /// Assign an item: --assign item-0=Tom,Sam (repeatable)
    #[arg(long = "assign", value_name = "ITEM=PEOPLE")]
    pub assign: Vec<String>,

    /// Clear an item's assignment (repeatable)
    #[arg(long = "clear", value_name = "ITEM")]
    pub clear: Vec<String>,
}

#[derive(Args)]
pub struct NormalizeArgs {
    /// Recognizer-output JSON file
    #[arg(long)]
    pub receipt: String,
}

#[derive(Args)]
pub struct ServeArgs {
    #[arg(long, default_value = "127.0.0.1:8472")]
    pub bind: String,

    /// Maximum live sessions (0 = unbounded)
    #[arg(long, default_value = "1024")]
    pub max_sessions: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_split() {
        let cli = Cli::try_parse_from(["sbl", "split", "--receipt", "r.json"]).unwrap();
        if let Command::Split(args) = cli.command {
            assert_eq!(args.receipt, "r.json");
            assert!(args.operations.is_none());
            assert!(args.assign.is_empty());
        } else {
            panic!("wrong command");
        }
    }

    #[test]
    fn parse_split_with_assignments() {
        let cli = Cli::try_parse_from([
            "sbl",
            "split",
            "--receipt",
            "r.json",
            "--assign",
            "item-0=Tom,Sam",
            "--assign",
            "item-1=Ana",
            "--clear",
            "item-2",
        ])
        .unwrap();
        if let Command::Split(args) = cli.command {
            assert_eq!(args.assign, vec!["item-0=Tom,Sam", "item-1=Ana"]);
            assert_eq!(args.clear, vec!["item-2"]);
        } else {
            panic!("wrong command");
        }
    }

    #[test]
    fn parse_split_with_operations_file() {
        let cli = Cli::try_parse_from([
            "sbl",
            "split",
            "--receipt",
            "r.json",
            "--operations",
            "ops.json",
        ])
        .unwrap();
        if let Command::Split(args) = cli.command {
            assert_eq!(args.operations, Some("ops.json".into()));
        } else {
            panic!("wrong command");
        }
    }

    #[test]
    fn parse_normalize() {
        let cli = Cli::try_parse_from(["sbl", "normalize", "--receipt", "r.json"]).unwrap();
        assert!(matches!(cli.command, Command::Normalize(_)));
    }

    #[test]
    fn parse_serve() {
        let cli = Cli::try_parse_from(["sbl", "serve", "--bind", "0.0.0.0:8080"]).unwrap();
        if let Command::Serve(args) = cli.command {
            assert_eq!(args.bind, "0.0.0.0:8080");
            assert_eq!(args.max_sessions, 1024);
        } else {
            panic!("wrong command");
        }
    }

    #[test]
    fn parse_json_format() {
        let cli =
            Cli::try_parse_from(["sbl", "--format", "json", "normalize", "--receipt", "r.json"])
                .unwrap();
        assert!(matches!(cli.format, OutputFormat::Json));
    }

    #[test]
    fn parse_verbose() {
        let cli = Cli::try_parse_from(["sbl", "--verbose", "serve"]).unwrap();
        assert!(cli.verbose);
    }

    #[test]
    fn split_requires_a_receipt() {
        assert!(Cli::try_parse_from(["sbl", "split"]).is_err());
    }
}
