use clap::{Args, Parser, Subcommand, ValueEnum};
use clap_complete::Shell;

use parley_core::VERSION;

/// Parley - ask typed, validated questions on the terminal
#[derive(Parser)]
#[command(name = "parley")]
#[command(author, version = VERSION, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Ask one question and print the accepted answer to stdout
    Ask(AskArgs),

    /// Generate shell completion scripts
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

/// Arguments for the `ask` command
#[derive(Args)]
pub struct AskArgs {
    /// Prompt message shown to the user
    #[arg(short, long, default_value = "Value")]
    pub message: String,

    /// Type of value to collect
    #[arg(short = 't', long = "type", value_enum, default_value_t = ValueKind::Text)]
    pub kind: ValueKind,

    /// Accept an empty line as this default value
    #[arg(long, value_name = "VALUE", allow_hyphen_values = true)]
    pub default: Option<String>,

    /// Message shown instead of the prompt after a rejected attempt
    #[arg(long)]
    pub failure_message: Option<String>,

    /// Give up after this many rejected attempts (0 = ask forever)
    #[arg(long, default_value_t = 0)]
    pub max_attempts: u32,

    /// Smallest acceptable value (not valid for text answers)
    #[arg(long, value_name = "VALUE", allow_hyphen_values = true)]
    pub min: Option<String>,

    /// Largest acceptable value (not valid for text answers)
    #[arg(long, value_name = "VALUE", allow_hyphen_values = true)]
    pub max: Option<String>,

    /// Trim surrounding whitespace from text answers
    #[arg(long)]
    pub trim: bool,
}

/// Value types the `ask` command can collect.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ValueKind {
    Int,
    Float,
    Bool,
    Text,
    Date,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ask_defaults() {
        let cli = Cli::try_parse_from(["parley", "ask"]).unwrap();
        let Commands::Ask(args) = cli.command else {
            panic!("expected ask command");
        };
        assert_eq!(args.message, "Value");
        assert_eq!(args.kind, ValueKind::Text);
        assert_eq!(args.max_attempts, 0);
        assert!(args.default.is_none());
        assert!(!args.trim);
    }

    #[test]
    fn test_ask_full_flags() {
        let cli = Cli::try_parse_from([
            "parley",
            "ask",
            "--type",
            "int",
            "--message",
            "Port",
            "--default",
            "8080",
            "--min",
            "1024",
            "--max",
            "65535",
            "--max-attempts",
            "3",
            "--failure-message",
            "Enter a port number",
        ])
        .unwrap();
        let Commands::Ask(args) = cli.command else {
            panic!("expected ask command");
        };
        assert_eq!(args.kind, ValueKind::Int);
        assert_eq!(args.message, "Port");
        assert_eq!(args.default.as_deref(), Some("8080"));
        assert_eq!(args.min.as_deref(), Some("1024"));
        assert_eq!(args.max.as_deref(), Some("65535"));
        assert_eq!(args.max_attempts, 3);
    }

    #[test]
    fn test_negative_bound_values_parse() {
        let cli =
            Cli::try_parse_from(["parley", "ask", "-t", "int", "--min", "-10", "--default", "-1"])
                .unwrap();
        let Commands::Ask(args) = cli.command else {
            panic!("expected ask command");
        };
        assert_eq!(args.min.as_deref(), Some("-10"));
        assert_eq!(args.default.as_deref(), Some("-1"));
    }
}
