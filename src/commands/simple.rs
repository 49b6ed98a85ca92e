//! Simple interactive CLI mode
//!
//! Line-based game without the TUI. Accents can be typed directly or with an
//! apostrophe after the vowel (`a'rbol` for `árbol`).

use crate::core::{MAX_ATTEMPTS, WORD_LENGTH, to_lower};
use crate::game::{GameState, SubmitError, SubmitOutcome};
use crate::keyboard;
use crate::output::{print_board, print_stats};
use crate::stats::{StatsStore, record_result};
use crate::wordlists::Dictionary;
use anyhow::Result;
use colored::Colorize;
use rand::Rng;
use std::io::{self, Write};

/// Run the simple interactive CLI mode
///
/// # Errors
///
/// Returns an error if reading from stdin or writing to stdout fails.
pub fn run_simple<S, R>(dictionary: &Dictionary, store: &S, rng: &mut R) -> Result<()>
where
    S: StatsStore + ?Sized,
    R: Rng + ?Sized,
{
    println!("\n╔══════════════════════════════════════════╗");
    println!("║        ¡Bienvenido al Palabrle!          ║");
    println!("╚══════════════════════════════════════════╝");
    println!("\nAdivina la palabra de cinco letras en {MAX_ATTEMPTS} intentos.");
    println!("Tildes: escríbelas directamente o con apóstrofo (a'rbol).");
    println!("Comandos: 'salir' para terminar, 'nueva' para otra palabra\n");

    match store.load() {
        Ok(stats) => print_stats(&stats),
        Err(e) => tracing::error!("Failed to load stats: {e}"),
    }

    let mut game = GameState::new(dictionary.random_secret(rng).clone());

    loop {
        let attempt = game.guesses().len() + 1;
        let Some(input) = get_user_input(&format!("Intento {attempt}/{MAX_ATTEMPTS}"))? else {
            println!("\n¡Hasta luego!\n");
            return Ok(());
        };

        match input.to_lowercase().as_str() {
            "salir" | "quit" | "q" => {
                println!("\n¡Hasta luego!\n");
                return Ok(());
            }
            "nueva" | "new" | "n" => {
                game.reset(dictionary.random_secret(rng).clone());
                println!("\nNueva partida\n");
                continue;
            }
            _ => {}
        }

        if let Err(msg) = type_guess(&mut game, &input) {
            println!("{}\n", msg.red());
            continue;
        }

        let outcome = match game.submit(dictionary) {
            Ok(outcome) => outcome,
            Err(e) => {
                println!("{}\n", submit_error_message(&e).red());
                continue;
            }
        };

        print_board(&game);

        let won = match outcome {
            SubmitOutcome::Continue { remaining } => {
                println!("Te quedan {remaining} intentos\n");
                continue;
            }
            SubmitOutcome::Won { attempts } => {
                let secret = game.secret().to_display();
                println!(
                    "{}",
                    format!("¡Ganaste en {attempts}! La palabra era \"{secret}\"")
                        .green()
                        .bold()
                );
                true
            }
            SubmitOutcome::Lost { secret } => {
                println!(
                    "{}",
                    format!("Perdiste :( La palabra era \"{}\"", secret.to_display())
                        .red()
                        .bold()
                );
                false
            }
        };

        match record_result(store, won) {
            Ok(stats) => print_stats(&stats),
            Err(e) => {
                tracing::error!("Failed to save stats: {e}");
                println!("{}", format!("No se pudieron guardar las estadísticas: {e}").red());
            }
        }

        match get_user_input("¿Jugar de nuevo? (s/n)")? {
            Some(answer)
                if matches!(answer.to_lowercase().as_str(), "s" | "si" | "sí" | "y" | "yes") =>
            {
                game.reset(dictionary.random_secret(rng).clone());
                println!("\nNueva partida\n");
            }
            _ => {
                println!("\n¡Hasta luego!\n");
                return Ok(());
            }
        }
    }
}

/// Replace the typed row with `input`
///
/// Returns a message naming the first letter that could not be typed.
fn type_guess(game: &mut GameState, input: &str) -> Result<(), String> {
    while game.pop_letter().is_some() {}

    for c in expand_accents(input).chars() {
        if !game.push_letter(c) {
            if game.input().len() >= WORD_LENGTH {
                return Err("La palabra debe tener 5 letras".to_string());
            }
            if game.disabled().contains(c) {
                return Err(format!("La letra {} ya está descartada", c.to_uppercase()));
            }
            return Err(format!("Carácter no válido: '{c}'"));
        }
    }
    Ok(())
}

/// Turn `vowel + '` into the accented vowel
fn expand_accents(input: &str) -> String {
    let mut out: Vec<char> = Vec::with_capacity(input.len());
    for c in input.trim().chars() {
        if matches!(c, '\'' | '´')
            && let Some(last) = out.last_mut()
            && let Some(&accented) = keyboard::variants(*last).first()
        {
            *last = to_lower(accented);
            continue;
        }
        out.push(c);
    }
    out.into_iter().collect()
}

fn submit_error_message(e: &SubmitError) -> String {
    match e {
        SubmitError::Incomplete { len } => format!("Faltan letras: {len} de 5"),
        SubmitError::NotInDictionary(word) => {
            format!("\"{}\" no está en la lista de palabras", word.to_uppercase())
        }
        SubmitError::GameOver => "La partida ya terminó".to_string(),
    }
}

/// Get user input with a prompt; `None` at end of input
fn get_user_input(prompt: &str) -> io::Result<Option<String>> {
    print!("{prompt}: ");
    io::stdout().flush()?;

    let mut input = String::new();
    if io::stdin().read_line(&mut input)? == 0 {
        return Ok(None);
    }

    Ok(Some(input.trim().to_string()))
}
