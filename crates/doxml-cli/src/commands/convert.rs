/*
 * convert.rs
 * Copyright (c) 2025 doxml contributors
 *
 * Convert command implementation
 */

//! Convert command implementation.
//!
//! Reads an XML document from a file or stdin, converts it with the
//! configured parser options, runs the configured transforms and writes the
//! tree as pseudo-XML or JSON.

use std::fs;
use std::io::{Read, Write};

use anyhow::{Context, Result};
use clap::ValueEnum;
use tracing::{debug, info};

use doxml::{
    AttributePolicy, DoxmlConfig, Element, TransformPipeline, UnknownTagPolicy, parse_document,
};

/// Output formats for the convert command
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// docutils pseudo-XML
    Pseudoxml,
    /// The tree as JSON
    Json,
}

/// Arguments for the convert command
#[derive(Debug)]
pub struct ConvertArgs {
    /// Input file, or '-' for stdin
    pub input: String,
    pub to: OutputFormat,
    /// Output file path
    pub output: Option<String>,
    /// Configuration file path
    pub config: Option<String>,
    pub math_ext: bool,
    pub lenient: bool,
    pub common_lists: bool,
    pub drop_blank_text: bool,
    pub math_env: bool,
    /// Source path to record on the document
    pub source: Option<String>,
}

/// Execute the convert command
pub fn execute(args: ConvertArgs) -> Result<()> {
    let config = load_config(&args)?;
    let input = read_input(&args.input)?;
    let source = source_path(&args);

    info!(input = %args.input, "Converting");
    let mut document = parse_document(&input, source.as_deref(), &config.parser)
        .with_context(|| format!("Failed to convert {}", args.input))?;

    let pipeline = TransformPipeline::from_config(&config);
    debug!(transforms = ?pipeline.transform_names(), "Running transforms");
    pipeline
        .execute(&mut document)
        .context("Failed to transform document")?;

    let rendered = render(&document, args.to)?;
    write_output(args.output.as_deref(), &rendered)
}

/// The configuration file, if any, with command-line flags applied on top.
fn load_config(args: &ConvertArgs) -> Result<DoxmlConfig> {
    let mut config = match &args.config {
        Some(path) => {
            let content = fs::read_to_string(path)
                .with_context(|| format!("Failed to read config file {}", path))?;
            DoxmlConfig::from_toml_str(&content)
                .with_context(|| format!("Failed to load config file {}", path))?
        }
        None => DoxmlConfig::default(),
    };
    apply_flags(&mut config, args);
    Ok(config)
}

/// Flags only ever switch options on; they never undo the config file.
fn apply_flags(config: &mut DoxmlConfig, args: &ConvertArgs) {
    if args.math_ext {
        config.parser.math_ext = true;
    }
    if args.lenient {
        config.parser.unknown_tags = UnknownTagPolicy::Substitute;
    }
    if args.common_lists {
        config.parser.attribute_policy = AttributePolicy::CommonLists;
    }
    if args.drop_blank_text {
        config.parser.drop_blank_text = true;
    }
    if args.math_env {
        config.math_env.enabled = true;
    }
}

fn source_path(args: &ConvertArgs) -> Option<String> {
    match &args.source {
        Some(source) => Some(source.clone()),
        None if args.input != "-" => Some(args.input.clone()),
        None => None,
    }
}

fn read_input(input: &str) -> Result<String> {
    if input == "-" {
        let mut content = String::new();
        std::io::stdin()
            .read_to_string(&mut content)
            .context("Failed to read stdin")?;
        Ok(content)
    } else {
        fs::read_to_string(input).with_context(|| format!("Failed to read {}", input))
    }
}

/// Render a document in the requested format.
pub fn render(document: &Element, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Pseudoxml => Ok(document.pformat()),
        OutputFormat::Json => {
            let mut json =
                serde_json::to_string_pretty(document).context("Failed to serialize document")?;
            json.push('\n');
            Ok(json)
        }
    }
}

fn write_output(output: Option<&str>, content: &str) -> Result<()> {
    match output {
        Some(path) if path != "-" => {
            fs::write(path, content).with_context(|| format!("Failed to write {}", path))?;
            info!(output = %path, "Wrote output");
        }
        _ => {
            let mut stdout = std::io::stdout().lock();
            stdout
                .write_all(content.as_bytes())
                .context("Failed to write to stdout")?;
        }
    }
    Ok(())
}
