//! Display functions for command results

use super::formatters::{create_progress_bar, guess_row, keyboard_rows};
use crate::commands::ScoreResult;
use crate::game::GameState;
use crate::stats::Stats;
use colored::Colorize;

/// Print the classification of one guess
pub fn print_score_result(result: &ScoreResult) {
    println!("\n{}", "─".repeat(40).cyan());
    println!(
        "Guess {} against {}",
        result.guess.to_uppercase().bright_yellow().bold(),
        result.secret.to_uppercase().bright_cyan().bold()
    );
    println!("{}", "─".repeat(40).cyan());

    let letters: Vec<char> = result.guess.chars().collect();
    println!("\n  {}", guess_row(&letters, &result.states));
    println!(
        "  {}",
        result.states.iter().map(|s| s.emoji()).collect::<String>()
    );

    if result.disabled.is_empty() {
        println!("\nNo keys ruled out");
    } else {
        let keys: Vec<String> = result.disabled.iter().map(String::from).collect();
        println!("\nKeys ruled out: {}", keys.join(" ").bright_black());
    }
}

/// Print the win/loss record
pub fn print_stats(stats: &Stats) {
    println!("\n{}", "═".repeat(40).cyan());
    println!(" {} ", "ESTADÍSTICAS".bright_cyan().bold());
    println!("{}", "═".repeat(40).cyan());

    println!("\n   Total:     {}", stats.total());
    println!("   Ganadas:   {}", stats.wins.to_string().green().bold());
    println!("   Perdidas:  {}", stats.losses.to_string().red().bold());

    if stats.total() > 0 {
        let pct = stats.win_percentage();
        let bar = create_progress_bar(f64::from(pct), 100.0, 30);
        println!("\n   Victorias: [{}] {pct}%", bar.green());
    }
    println!();
}

/// Print the board and keyboard of a game in progress
pub fn print_board(game: &GameState) {
    println!();
    for record in game.guesses() {
        println!(
            "  {}",
            guess_row(record.word.chars(), record.feedback.states())
        );
    }
    println!();
    for row in keyboard_rows(game.disabled()) {
        println!("  {row}");
    }
    println!();
}
