//! doxml CLI - Main entry point

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod commands;

use commands::convert::{ConvertArgs, OutputFormat};

#[derive(Parser)]
#[command(name = "doxml")]
#[command(version)]
#[command(about = "Convert XML documents into docutils document trees", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Convert an XML document and print the resulting tree
    Convert {
        /// Input file ('-' for stdin)
        input: String,

        /// Output format
        #[arg(short = 't', long, value_enum, default_value_t = OutputFormat::Pseudoxml)]
        to: OutputFormat,

        /// Write output to FILE (stdout when omitted or '-')
        #[arg(short = 'o', long)]
        output: Option<String>,

        /// TOML configuration file
        #[arg(short = 'c', long)]
        config: Option<String>,

        /// Build displaymath and inline_math nodes for math tags
        #[arg(long)]
        math_ext: bool,

        /// Substitute generic nodes for unknown tags instead of failing
        #[arg(long)]
        lenient: bool,

        /// Store ids, names and dupnames as lists
        #[arg(long)]
        common_lists: bool,

        /// Skip whitespace-only text between elements
        #[arg(long)]
        drop_blank_text: bool,

        /// Rewrite math nodes after conversion
        #[arg(long)]
        math_env: bool,

        /// Source path recorded on the document (defaults to INPUT)
        #[arg(long)]
        source: Option<String>,
    },

    /// List every recognized tag with its category
    Tags,
}

fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "doxml=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Convert {
            input,
            to,
            output,
            config,
            math_ext,
            lenient,
            common_lists,
            drop_blank_text,
            math_env,
            source,
        } => commands::convert::execute(ConvertArgs {
            input,
            to,
            output,
            config,
            math_ext,
            lenient,
            common_lists,
            drop_blank_text,
            math_env,
            source,
        }),
        Commands::Tags => commands::tags::execute(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_convert_flags() {
        let cli = Cli::parse_from([
            "doxml", "convert", "in.xml", "--to", "json", "-o", "out.json", "--lenient",
        ]);
        match cli.command {
            Commands::Convert {
                input,
                to,
                output,
                lenient,
                math_ext,
                ..
            } => {
                assert_eq!(input, "in.xml");
                assert_eq!(to, OutputFormat::Json);
                assert_eq!(output.as_deref(), Some("out.json"));
                assert!(lenient);
                assert!(!math_ext);
            }
            Commands::Tags => panic!("expected convert"),
        }
    }
}
