//! First Guess - CLI
//!
//! Scores every allowed guess by the expected number of answers left after it and
//! reports the best opening word.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use first_guess::{
    commands::{classify_guess, run_search, score_word},
    core::Word,
    output::{
        SearchProgress, print_classify_result, print_score_result, print_search_header,
        print_search_result, save_score_table,
    },
    solver::{DEFAULT_CHUNK_SIZE, SearchOptions},
    wordlists::load_words,
};
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(
    name = "first_guess",
    about = "Find the Wordle opening guess that leaves the fewest expected answers",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Suppress progress output
    #[arg(short, long, global = true)]
    quiet: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Score every allowed guess against every possible answer
    Search {
        /// File with the allowed guesses, one per line
        #[arg(short, long)]
        guesses: PathBuf,

        /// File with the possible answers, one per line
        #[arg(short, long)]
        solutions: PathBuf,

        /// Write one score per guess to this file, in guess-list order
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Number of best guesses to list
        #[arg(short = 'n', long, default_value = "10")]
        top: usize,

        /// Guesses scored between best-guess updates
        #[arg(long, default_value_t = DEFAULT_CHUNK_SIZE)]
        chunk_size: usize,

        /// Worker threads (default: all cores)
        #[arg(short = 'j', long)]
        threads: Option<usize>,

        /// Score guesses one at a time on the main thread
        #[arg(long)]
        sequential: bool,
    },

    /// Score a single guess
    Score {
        /// The guess to score
        word: String,

        /// File with the possible answers, one per line
        #[arg(short, long)]
        solutions: PathBuf,
    },

    /// Show the feedback a guess earns and the answers consistent with it
    Classify {
        /// The guess
        guess: String,

        /// The true answer
        #[arg(required_unless_present = "feedback")]
        truth: Option<String>,

        /// Observed feedback instead of a true answer, e.g. "GY-G-"
        #[arg(short, long, conflicts_with = "truth", requires = "solutions")]
        feedback: Option<String>,

        /// File with the possible answers, to list compatible ones
        #[arg(short, long)]
        solutions: Option<PathBuf>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Search {
            guesses,
            solutions,
            output,
            top,
            chunk_size,
            threads,
            sequential,
        } => {
            if let Some(threads) = threads {
                rayon::ThreadPoolBuilder::new()
                    .num_threads(threads)
                    .build_global()
                    .context("failed to configure worker threads")?;
            }
            let options = SearchOptions {
                parallel: !sequential,
                chunk_size,
            };
            run_search_command(
                &guesses,
                &solutions,
                output.as_deref(),
                top,
                options,
                cli.quiet,
            )
        }
        Commands::Score { word, solutions } => run_score_command(&word, &solutions),
        Commands::Classify {
            guess,
            truth,
            feedback,
            solutions,
        } => run_classify_command(
            &guess,
            truth.as_deref(),
            feedback.as_deref(),
            solutions.as_deref(),
        ),
    }
}

fn load(path: &Path, what: &str) -> Result<Vec<Word>> {
    load_words(path).with_context(|| format!("failed to load {what} from {}", path.display()))
}

fn run_search_command(
    guesses: &Path,
    solutions: &Path,
    output: Option<&Path>,
    top: usize,
    options: SearchOptions,
    quiet: bool,
) -> Result<()> {
    let vocabulary = load(guesses, "guesses")?;
    let solutions = load(solutions, "solutions")?;

    if !quiet {
        let threads = if options.parallel {
            rayon::current_num_threads()
        } else {
            1
        };
        print_search_header(vocabulary.len(), solutions.len(), threads);
    }

    let progress = SearchProgress::new(vocabulary.len(), quiet);
    let report = run_search(&vocabulary, &solutions, options, &progress)?;
    progress.finish();

    print_search_result(&report, &vocabulary, top);

    if let Some(path) = output {
        save_score_table(path, &report.outcome.scores)
            .with_context(|| format!("failed to write scores to {}", path.display()))?;
        if !quiet {
            println!("\n💾 Scores written to {}", path.display());
        }
    }
    Ok(())
}

fn run_score_command(word: &str, solutions: &Path) -> Result<()> {
    let solutions = load(solutions, "solutions")?;
    let result = score_word(word, &solutions)?;
    print_score_result(&result);
    Ok(())
}

fn run_classify_command(
    guess: &str,
    truth: Option<&str>,
    feedback: Option<&str>,
    solutions: Option<&Path>,
) -> Result<()> {
    let solutions = solutions.map(|path| load(path, "solutions")).transpose()?;
    let result = classify_guess(guess, truth, feedback, solutions.as_deref())?;
    print_classify_result(&result);
    Ok(())
}
