//! `eval`: rank a card set given on the command line.

use crate::error::CliError;
use referee_engine::cards::{format_cards, parse_cards, Card};
use referee_engine::hand::evaluate_cards;
use std::io::Write;

/// Evaluates 5 to 7 cards and prints the category with the best five.
///
/// Arguments may hold one card each or several separated by spaces or commas,
/// so `eval "Ah Kh" Qh Jh Th` works as well as five separate arguments.
pub fn handle_eval_command(cards: &[String], out: &mut dyn Write) -> Result<(), CliError> {
    let cards = parse_all(cards)?;
    let best = evaluate_cards(&cards)?;
    writeln!(
        out,
        "{}: {}",
        best.category().name(),
        format_cards(&best.cards)
    )?;
    Ok(())
}

fn parse_all(args: &[String]) -> Result<Vec<Card>, CliError> {
    let cards = parse_cards(&args.join(" ")).map_err(|e| CliError::InvalidInput(e.to_string()))?;
    if !(5..=7).contains(&cards.len()) {
        return Err(CliError::InvalidInput(format!(
            "expected 5 to 7 cards, got {}",
            cards.len()
        )));
    }
    for (i, card) in cards.iter().enumerate() {
        if cards[..i].contains(card) {
            return Err(CliError::InvalidInput(format!("duplicate card {card}")));
        }
    }
    Ok(cards)
}
