//! Jumble - CLI
//!
//! Word puzzle game with TUI and CLI modes, plus direct access to every dictionary
//! query.

use anyhow::{Result, anyhow};
use clap::{Parser, Subcommand};
use jumble::{
    commands::{
        SearchCriteria, check_exists, palindromes, prefix_matches, run_benchmark, run_simple,
        scramble_word, search, sub_words,
    },
    engine::{DEFAULT_MIN_LENGTH, EngineConfig, GameConfig, JumbleEngine, WordSource},
    output::{
        print_benchmark_result, print_exists_result, print_game_state, print_lookup_result,
        print_scramble_result,
    },
};
use log::LevelFilter;

#[derive(Parser)]
#[command(
    name = "jumble",
    about = "Word puzzle engine: scramble words and find every word hidden in them",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Wordlist: 'bundled' (default) or path to a newline-delimited file
    #[arg(short = 'w', long, global = true, default_value = "bundled")]
    wordlist: String,

    /// Seed the random generator for reproducible scrambles and games
    #[arg(long, global = true)]
    seed: Option<u64>,

    /// Log engine activity to stderr
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI mode (default)
    Play {
        #[command(flatten)]
        game: GameArgs,
    },

    /// Simple CLI mode (interactive game without TUI)
    Simple {
        #[command(flatten)]
        game: GameArgs,
    },

    /// Shuffle the letters of a word
    Scramble {
        /// Word of 3 to 30 letters
        word: String,
    },

    /// Check whether a word is in the dictionary
    Exists {
        word: String,
    },

    /// List words starting with a prefix
    Prefix {
        prefix: String,
    },

    /// List words by first letter, last letter and length
    Search {
        /// First letter
        #[arg(short, long)]
        start: Option<String>,

        /// Last letter
        #[arg(short, long)]
        end: Option<String>,

        /// Exact length
        #[arg(short, long)]
        length: Option<usize>,
    },

    /// List every palindrome
    Palindromes,

    /// List every word spellable from a word's letters
    Subwords {
        /// Word of 3 to 30 letters
        word: String,

        /// Shortest word to list
        #[arg(short, long, default_value_t = DEFAULT_MIN_LENGTH)]
        min_length: usize,
    },

    /// Print a fresh puzzle
    NewGame {
        #[command(flatten)]
        game: GameArgs,
    },

    /// Measure game creation speed and puzzle sizes
    Benchmark {
        /// Number of games to build
        #[arg(short = 'n', long, default_value = "100")]
        count: usize,

        #[command(flatten)]
        game: GameArgs,
    },
}

#[derive(clap::Args, Clone, Copy)]
struct GameArgs {
    /// Length of the scrambled word
    #[arg(short, long, default_value = "6")]
    length: usize,

    /// Shortest hidden word to count
    #[arg(short, long, default_value_t = DEFAULT_MIN_LENGTH)]
    min_length: usize,
}

impl From<GameArgs> for GameConfig {
    fn from(args: GameArgs) -> Self {
        Self::new(args.length).with_min_length(args.min_length)
    }
}

fn init_logging(verbose: bool) {
    let mut builder =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"));
    if verbose {
        builder.filter_level(LevelFilter::Debug);
    }
    builder.init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let config = EngineConfig::new(WordSource::from_arg(&cli.wordlist), cli.seed);
    let engine = JumbleEngine::from_config(&config)?;

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play {
        game: GameArgs {
            length: 6,
            min_length: DEFAULT_MIN_LENGTH,
        },
    });

    match command {
        Commands::Play { game } => run_play_command(engine, game.into()),
        Commands::Simple { game } => run_simple(&engine, &game.into()).map_err(|e| anyhow!(e)),
        Commands::Scramble { word } => {
            let result = scramble_word(&engine, &word).map_err(|e| anyhow!(e))?;
            print_scramble_result(&result);
            Ok(())
        }
        Commands::Exists { word } => {
            let result = check_exists(&engine, &word).map_err(|e| anyhow!(e))?;
            print_exists_result(&result);
            Ok(())
        }
        Commands::Prefix { prefix } => {
            print_lookup_result(&prefix_matches(&engine, &prefix));
            Ok(())
        }
        Commands::Search { start, end, length } => {
            let criteria = SearchCriteria { start, end, length };
            let result = search(&engine, &criteria).map_err(|e| anyhow!(e))?;
            print_lookup_result(&result);
            Ok(())
        }
        Commands::Palindromes => {
            print_lookup_result(&palindromes(&engine));
            Ok(())
        }
        Commands::Subwords { word, min_length } => {
            let result = sub_words(&engine, &word, Some(min_length)).map_err(|e| anyhow!(e))?;
            print_lookup_result(&result);
            Ok(())
        }
        Commands::NewGame { game } => {
            let state = engine.new_game(&game.into())?;
            print_game_state(&state);
            Ok(())
        }
        Commands::Benchmark { count, game } => run_benchmark_command(&engine, count, game.into()),
    }
}

fn run_benchmark_command(engine: &JumbleEngine, count: usize, config: GameConfig) -> Result<()> {
    println!(
        "Running benchmark on {count} games of {} letters...",
        config.length.unwrap_or_default()
    );

    let result = run_benchmark(engine, count, &config, true).map_err(|e| anyhow!(e))?;
    print_benchmark_result(&result);
    Ok(())
}

fn run_play_command(engine: JumbleEngine, config: GameConfig) -> Result<()> {
    use jumble::interactive::{App, run_tui};

    let app = App::new(engine, config)?;
    run_tui(app)
}
