//! Reserved Switch - CLI
//!
//! Generates, verifies and inspects reserved-word recognizer switches.

use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};
use reserved_switch::{
    commands::{GenerateConfig, VerifyConfig, analyze_tree, run_generate, run_verify},
    emit::Primitives,
    generator::{DecisionTree, Generator, GeneratorConfig},
    output::{print_generate_result, print_stats_result, print_verify_report},
    wordlists::loader::load_source,
};
use tracing::debug;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "reserved_switch",
    about = "Generate minimal-cost switches recognizing a fixed set of reserved words",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Prefix for the primitive names (e.g. JSRW_ gives JSRW_LENGTH, JSRW_CHAR_AT, ...)
    #[arg(long, global = true, default_value = "")]
    prefix: String,

    /// Dispatch with chained ifs instead of a switch up to this many branches
    #[arg(long, global = true, default_value_t = 3)]
    use_if_threshold: usize,

    /// Longest tail compared explicitly; longer tails become GUESS_MATCH
    #[arg(long, global = true, default_value_t = 4)]
    tail_threshold: usize,

    /// Indentation level of the emitted code
    #[arg(long, global = true, default_value_t = 1)]
    indent: usize,

    /// Log every tree-building decision to stderr
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate the recognizer switch
    Generate {
        /// Output file, or '-' for stdout
        output: String,

        /// Word list file, or 'default' for the embedded JavaScript list
        source: String,

        /// Arguments passed through to the word list reader (enabled features)
        #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
        reader_args: Vec<String>,
    },

    /// Check the decision tree against its words and generated non-words
    Verify {
        /// Number of random probes
        #[arg(short = 'n', long, default_value = "10000")]
        probes: usize,

        /// Seed for the random probes
        #[arg(long, default_value = "0")]
        seed: u64,

        /// Word list file, or 'default' for the embedded JavaScript list
        source: String,

        /// Arguments passed through to the word list reader (enabled features)
        #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
        reader_args: Vec<String>,
    },

    /// Show the shape of the decision tree
    Stats {
        /// Word list file, or 'default' for the embedded JavaScript list
        source: String,

        /// Arguments passed through to the word list reader (enabled features)
        #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
        reader_args: Vec<String>,
    },
}

/// Route logs to stderr; `RUST_LOG` overrides the default level
fn init_tracing(verbose: bool) -> Result<()> {
    let directive = if verbose {
        "reserved_switch=debug"
    } else {
        "reserved_switch=warn"
    };

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(EnvFilter::from_default_env().add_directive(directive.parse()?))
        .init();

    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose)?;

    let generator = Generator::new(
        GeneratorConfig::new(cli.use_if_threshold, cli.tail_threshold, cli.indent),
        Primitives::with_prefix(&cli.prefix),
    );
    debug!(config = ?generator.config(), "generator configured");

    match cli.command {
        Commands::Generate {
            output,
            source,
            reader_args,
        } => run_generate_command(&generator, output, source, reader_args),
        Commands::Verify {
            probes,
            seed,
            source,
            reader_args,
        } => run_verify_command(&generator, probes, seed, &source, &reader_args),
        Commands::Stats {
            source,
            reader_args,
        } => run_stats_command(&generator, &source, &reader_args),
    }
}

fn run_generate_command(
    generator: &Generator,
    output: String,
    source: String,
    reader_args: Vec<String>,
) -> Result<()> {
    let config = GenerateConfig {
        output,
        source,
        reader_args,
    };
    let result = run_generate(generator, &config)?;
    print_generate_result(&result);
    Ok(())
}

fn run_verify_command(
    generator: &Generator,
    probes: usize,
    seed: u64,
    source: &str,
    reader_args: &[String],
) -> Result<()> {
    let tree = build_tree(generator, source, reader_args)?;
    let config = VerifyConfig {
        random_probes: probes,
        seed,
        show_progress: true,
    };

    let report = run_verify(&tree, &config);
    print_verify_report(&report);

    if !report.passed() {
        bail!("{} verification failures", report.failures.len());
    }
    Ok(())
}

fn run_stats_command(generator: &Generator, source: &str, reader_args: &[String]) -> Result<()> {
    let tree = build_tree(generator, source, reader_args)?;
    print_stats_result(&analyze_tree(&tree));
    Ok(())
}

fn build_tree(generator: &Generator, source: &str, reader_args: &[String]) -> Result<DecisionTree> {
    let words = load_source(source, reader_args)
        .with_context(|| format!("Failed to load reserved words from '{source}'"))?;
    generator
        .build(&words)
        .context("Failed to build decision tree")
}
