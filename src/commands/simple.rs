//! Simple interactive CLI mode
//!
//! Text-based jumble game without TUI

use crate::engine::{GameConfig, GameState, GuessOutcome, JumbleEngine};
use crate::output::formatters::{letter_tiles, masked_word};
use colored::Colorize;
use rand::Rng;
use std::io::{self, Write};

/// One line of player input
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Guess(String),
    Hint,
    Reveal,
    Shuffle,
    New,
    Quit,
}

impl Command {
    /// Interpret a trimmed input line; anything that is not a keyword is a guess
    #[must_use]
    pub fn parse(input: &str) -> Self {
        match input.trim().to_lowercase().as_str() {
            "quit" | "q" | "exit" => Self::Quit,
            "hint" | "h" | "?" => Self::Hint,
            "reveal" | "give up" => Self::Reveal,
            "shuffle" | "s" => Self::Shuffle,
            "new" | "n" => Self::New,
            _ => Self::Guess(input.trim().to_string()),
        }
    }
}

/// Run the simple interactive CLI mode
///
/// # Errors
///
/// Returns an error if reading input fails or a game cannot be built from
/// `config`.
pub fn run_simple<R: Rng>(engine: &JumbleEngine<R>, config: &GameConfig) -> Result<(), String> {
    println!("\n╔══════════════════════════════════════════════════════════════╗");
    println!("║                 Jumble - Interactive Mode                    ║");
    println!("╚══════════════════════════════════════════════════════════════╝\n");

    println!("Find every word hidden in the scrambled letters.");
    println!("Commands: 'hint', 'shuffle', 'reveal', 'new' for new game, 'quit' to exit\n");

    let (mut game, mut tiles) = start_game(engine, config)?;

    loop {
        if game.is_empty() {
            if !play_again()? {
                println!("\n👋 Thanks for playing!\n");
                return Ok(());
            }
            (game, tiles) = start_game(engine, config)?;
            continue;
        }

        let input = get_user_input("Guess")?;
        if input.is_empty() {
            continue;
        }

        match Command::parse(&input) {
            Command::Quit => {
                println!("\n👋 Thanks for playing!\n");
                return Ok(());
            }
            Command::New => {
                println!("\n🔄 New game started!\n");
                (game, tiles) = start_game(engine, config)?;
            }
            Command::Hint => match game.hint() {
                Some(hint) => println!(
                    "💡 Try a {}-letter word starting with '{}'\n",
                    hint.length,
                    hint.first_letter.to_ascii_uppercase()
                ),
                None => println!("Nothing left to find!\n"),
            },
            Command::Shuffle => {
                tiles = engine.reshuffle(&tiles, game.original());
                println!("\n   {}\n", letter_tiles(&tiles).bright_yellow().bold());
            }
            Command::Reveal => {
                game.reveal_all();
                print_board(&game, &tiles);
                if !play_again()? {
                    return Ok(());
                }
                (game, tiles) = start_game(engine, config)?;
            }
            Command::Guess(word) => {
                let outcome = game.guess(&word);
                match outcome {
                    GuessOutcome::Found => println!(
                        "{} {}/{} found\n",
                        format!("✓ {}", word.to_uppercase()).green().bold(),
                        game.found_count(),
                        game.total_count()
                    ),
                    GuessOutcome::AlreadyFound => {
                        println!("{}\n", "Already found!".yellow());
                    }
                    GuessOutcome::NotASubWord => {
                        let miss = format!("✗ {} is not in this puzzle", word.to_uppercase());
                        println!("{}\n", miss.red());
                    }
                }

                if solved_by(outcome, &game) {
                    println!("\n{}", "═".repeat(60).bright_cyan());
                    println!(
                        "{}",
                        "        🎉 🎊 ✨  P U Z Z L E   S O L V E D !  ✨ 🎊 🎉"
                            .bright_green()
                            .bold()
                    );
                    println!("{}", "═".repeat(60).bright_cyan());
                    print_board(&game, &tiles);

                    if !play_again()? {
                        println!("\n👋 Thanks for playing!\n");
                        return Ok(());
                    }
                    (game, tiles) = start_game(engine, config)?;
                }
            }
        }
    }
}

/// Build a game and show its board; returns the game and its displayed tiles
fn start_game<R: Rng>(
    engine: &JumbleEngine<R>,
    config: &GameConfig,
) -> Result<(GameState, String), String> {
    let game = engine.new_game(config).map_err(|e| e.to_string())?;
    let tiles = game.scrambled().to_string();
    print_board(&game, &tiles);
    Ok((game, tiles))
}

/// Only a guess that finds the last word solves the puzzle
fn solved_by(outcome: GuessOutcome, game: &GameState) -> bool {
    outcome == GuessOutcome::Found && game.is_complete()
}

/// Closing line once the answer may be shown
fn answer_line(game: &GameState) -> Option<String> {
    let answer = game.original().to_uppercase();
    if game.is_empty() {
        Some(format!("No words hide in these letters. The word was {answer}"))
    } else if game.is_complete() {
        Some(format!("The word was {answer}"))
    } else {
        None
    }
}

fn print_board(game: &GameState, tiles: &str) {
    println!("────────────────────────────────────────────────────────────");
    println!(
        "   {}    ({} of {} words found)",
        letter_tiles(tiles).bright_yellow().bold(),
        game.found_count(),
        game.total_count()
    );
    println!("────────────────────────────────────────────────────────────");

    for (word, &found) in game.sub_words() {
        if found {
            println!("  • {}", word.to_uppercase().bright_white());
        } else {
            println!("  • {}", masked_word(word).bright_black());
        }
    }

    if let Some(line) = answer_line(game) {
        println!("\n  {}", line.bright_cyan().bold());
    }
    println!();
}

fn play_again() -> Result<bool, String> {
    let answer = get_user_input("Play again? (yes/no)")?.to_lowercase();
    Ok(matches!(answer.as_str(), "yes" | "y"))
}

/// Get user input with a prompt
fn get_user_input(prompt: &str) -> Result<String, String> {
    print!("{prompt}: ");
    io::stdout().flush().map_err(|e| e.to_string())?;

    let mut input = String::new();
    io::stdin()
        .read_line(&mut input)
        .map_err(|e| e.to_string())?;

    Ok(input.trim().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keywords_are_commands() {
        assert_eq!(Command::parse("quit"), Command::Quit);
        assert_eq!(Command::parse(" Q "), Command::Quit);
        assert_eq!(Command::parse("HINT"), Command::Hint);
        assert_eq!(Command::parse("reveal"), Command::Reveal);
        assert_eq!(Command::parse("s"), Command::Shuffle);
        assert_eq!(Command::parse("new"), Command::New);
    }

    #[test]
    fn empty_puzzle_shows_no_false_win() {
        let mut game = GameState::new("abcdef", "fedcba", []);
        assert_eq!(
            answer_line(&game).as_deref(),
            Some("No words hide in these letters. The word was ABCDEF")
        );

        let outcome = game.guess("fed");
        assert_eq!(outcome, GuessOutcome::NotASubWord);
        assert!(!solved_by(outcome, &game));
    }

    #[test]
    fn answer_appears_only_when_solved() {
        let mut game = GameState::new("yellow", "lowyel", ["low", "owl"].map(String::from));
        assert_eq!(answer_line(&game), None);

        assert!(!solved_by(game.guess("low"), &game));
        assert_eq!(answer_line(&game), None);

        assert!(solved_by(game.guess("OWL"), &game));
        assert_eq!(answer_line(&game).as_deref(), Some("The word was YELLOW"));
        assert!(!solved_by(game.guess("owl"), &game));
    }

    #[test]
    fn everything_else_is_a_guess() {
        assert_eq!(Command::parse(" Owl "), Command::Guess("Owl".to_string()));
        assert_eq!(Command::parse("yell"), Command::Guess("yell".to_string()));
    }
}
