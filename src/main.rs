//! Mastermind Solver - CLI
//!
//! Constraint-propagation codebreaker with interactive and batch modes.

use anyhow::{Context, Result, anyhow};
use clap::{Parser, Subcommand};
use mastermind_solver::{
    commands::{
        SolveConfig, analyze_code, partition_sizes, print_test_all_statistics,
        random_hidden_codes, run_benchmark, run_play, run_test_all, solve_code,
    },
    core::{Code, GameConfig, HiddenCode},
    logging::init_tracing,
    output::{
        formatters::feedback_to_pegs, print_analysis_result, print_benchmark_result,
        print_solve_result,
    },
    solver::{Solver, StrategyType},
    space::CodeSpace,
};
use rand::SeedableRng;
use rand::rngs::StdRng;

#[derive(Parser)]
#[command(
    name = "mastermind_solver",
    about = "Mastermind codebreaker using constraint propagation and Knuth's minimax",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Number of colors (2-26)
    #[arg(short, long, global = true, default_value = "6")]
    colors: usize,

    /// Number of pegs per code
    #[arg(short, long, global = true, default_value = "4")]
    length: usize,

    /// Forbid repeated colors in the secret code
    #[arg(long, global = true)]
    no_duplicates: bool,

    /// Strategy: minimax (default), entropy, hybrid, first, random
    #[arg(short, long, global = true, default_value = "minimax")]
    strategy: String,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive mode: think of a code and score the solver's guesses (default)
    Play,

    /// Solve a hidden code (random if omitted)
    Solve {
        /// The hidden code, as letters (e.g. ABCD)
        code: Option<String>,

        /// Seed for the random hidden code
        #[arg(long)]
        seed: Option<u64>,

        /// Give up after this many guesses
        #[arg(short, long)]
        max_guesses: Option<usize>,

        /// Show candidate counts and guess metrics
        #[arg(short, long)]
        verbose: bool,
    },

    /// Analyze a code as the opening guess
    Analyze {
        /// Code to analyze
        code: String,
    },

    /// Benchmark solver performance on random hidden codes
    Benchmark {
        /// Number of random codes to test
        #[arg(short = 'n', long, default_value = "100")]
        count: usize,

        /// Seed for the random hidden codes
        #[arg(long)]
        seed: Option<u64>,
    },

    /// Test solver on ALL possible codes
    TestAll {
        /// Limit number of codes to test
        #[arg(long)]
        limit: Option<usize>,
    },
}

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();

    let config = GameConfig::new(cli.colors, cli.length, !cli.no_duplicates)?;
    let strategy = StrategyType::from_name(&cli.strategy).ok_or_else(|| {
        anyhow!(
            "unknown strategy '{}' (expected one of: {})",
            cli.strategy,
            StrategyType::NAMES.join(", ")
        )
    })?;
    tracing::debug!(
        strategy = strategy.name(),
        colors = config.alphabet_size(),
        length = config.code_length(),
        duplicates = config.allow_duplicates(),
        "starting"
    );

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play);

    match command {
        Commands::Play => {
            let mut solver = Solver::new(strategy, config);
            run_play(&mut solver)?;
            Ok(())
        }
        Commands::Solve {
            code,
            seed,
            max_guesses,
            verbose,
        } => run_solve_command(
            strategy,
            config,
            code.as_deref(),
            seed,
            max_guesses,
            verbose,
        ),
        Commands::Analyze { code } => run_analyze_command(&code, &config),
        Commands::Benchmark { count, seed } => {
            run_benchmark_command(&strategy, config, count, seed)
        }
        Commands::TestAll { limit } => run_test_all_command(&strategy, config, limit),
    }
}

fn run_solve_command(
    strategy: StrategyType,
    config: GameConfig,
    code: Option<&str>,
    seed: Option<u64>,
    max_guesses: Option<usize>,
    verbose: bool,
) -> Result<()> {
    let mut oracle = match code {
        Some(text) => {
            let code =
                Code::parse(text, &config).with_context(|| format!("bad code '{text}'"))?;
            HiddenCode::new(code, &config)?
        }
        None => {
            let mut rng = seed.map_or_else(StdRng::from_os_rng, StdRng::seed_from_u64);
            HiddenCode::random(&CodeSpace::new(config), &mut rng)
        }
    };

    let mut solver = Solver::new(strategy.with_seed(seed), config);
    let solve_config = SolveConfig {
        max_guesses,
        ..SolveConfig::new()
    };
    let result = solve_code(&mut solver, &mut oracle, solve_config)?;

    print_solve_result(oracle.reveal(), &result, verbose);
    Ok(())
}

fn run_analyze_command(code: &str, config: &GameConfig) -> Result<()> {
    let result =
        analyze_code(code, config).with_context(|| format!("cannot analyze '{code}'"))?;
    print_analysis_result(&result);

    println!("\n   Feedback partitions:");
    for (feedback, size) in partition_sizes(code, config)? {
        println!(
            "     {} {feedback}: {size}",
            feedback_to_pegs(feedback, config.code_length())
        );
    }
    Ok(())
}

fn run_benchmark_command(
    strategy: &StrategyType,
    config: GameConfig,
    count: usize,
    seed: Option<u64>,
) -> Result<()> {
    println!(
        "Running {} benchmark on {count} random codes...",
        strategy.name()
    );

    let codes = random_hidden_codes(&CodeSpace::new(config), count, seed);
    let strategy = strategy.clone().with_seed(seed);
    let result = run_benchmark(&strategy, config, &codes)?;
    print_benchmark_result(&result);
    Ok(())
}

fn run_test_all_command(
    strategy: &StrategyType,
    config: GameConfig,
    limit: Option<usize>,
) -> Result<()> {
    println!("\n{}", "═".repeat(70));
    println!(" Comprehensive Mastermind Solver Test ");
    println!("{}", "═".repeat(70));
    println!(
        "\n{} colors, {} pegs, duplicates {}: {} possible codes",
        config.alphabet_size(),
        config.code_length(),
        if config.allow_duplicates() {
            "allowed"
        } else {
            "forbidden"
        },
        config.domain_size()
    );
    println!("Strategy: {}", strategy.name());
    println!();

    let stats = run_test_all(strategy, config, limit, None)?;
    print_test_all_statistics(&stats);
    Ok(())
}
