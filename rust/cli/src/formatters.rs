//! Card, hand and table-event formatters for terminal display.
//!
//! Suits render as ♥ ♦ ♣ ♠ where the terminal is likely to support them and
//! as h d c s otherwise.
//!
//! ```rust
//! use tricard_engine::cards::{Card, Rank, Suit};
//! use tricard_cli::formatters::format_card;
//!
//! let ace_spades = Card::new(Rank::Ace, Suit::Spades);
//! assert!(format_card(&ace_spades) == "A♠" || format_card(&ace_spades) == "As");
//! ```

use tricard_engine::cards::{Card, Suit};
use tricard_engine::events::TableEvent;
use tricard_engine::hand::{Hand, HandEvaluation};

/// On Windows only modern terminals are trusted with Unicode suits.
pub fn supports_unicode() -> bool {
    if cfg!(windows) {
        std::env::var("WT_SESSION").is_ok()
            || std::env::var("TERM_PROGRAM").is_ok()
            || std::env::var("VSCODE_INJECTION").is_ok()
    } else {
        true
    }
}

pub fn format_suit(suit: &Suit) -> &'static str {
    match (supports_unicode(), suit) {
        (true, Suit::Hearts) => "♥",
        (true, Suit::Diamonds) => "♦",
        (true, Suit::Clubs) => "♣",
        (true, Suit::Spades) => "♠",
        (false, Suit::Hearts) => "h",
        (false, Suit::Diamonds) => "d",
        (false, Suit::Clubs) => "c",
        (false, Suit::Spades) => "s",
    }
}

pub fn format_card(card: &Card) -> String {
    let short = card.to_string();
    let rank = short.trim_end_matches(['c', 'd', 'h', 's']);
    format!("{}{}", rank, format_suit(&card.suit))
}

/// `[A♠ K♥ Q♦]`
pub fn format_hand(hand: &Hand) -> String {
    let cards: Vec<String> = hand.cards().iter().map(format_card).collect();
    format!("[{}]", cards.join(" "))
}

pub fn format_hidden_hand() -> &'static str {
    "[?? ?? ??]"
}

/// Category followed by the tie-break ranks, e.g. `Pair (9, kicker 2)`.
pub fn format_evaluation(eval: &HandEvaluation) -> String {
    let values: Vec<String> = eval.values.iter().map(|v| v.to_string()).collect();
    match eval.values.as_slice() {
        [pair, kicker] => format!("{} ({}, kicker {})", eval.category, pair, kicker),
        _ => format!("{} ({})", eval.category, values.join("-")),
    }
}

/// One line per visible event; sounds and table clears render nothing.
pub fn format_event(event: &TableEvent, player_name: &str) -> Option<String> {
    match event {
        TableEvent::HandsDealt { round_id, player, .. } => Some(format!(
            "Round {}: {} {}  Dealer {}",
            round_id,
            player_name,
            format_hand(player),
            format_hidden_hand()
        )),
        TableEvent::DealerRevealed { dealer, .. } => {
            Some(format!("Dealer reveals {}", format_hand(dealer)))
        }
        TableEvent::PlayerWon { .. } => Some(format!("{} wins the round.", player_name)),
        TableEvent::PlayerLost { .. } => Some("Dealer takes the round.".to_string()),
        TableEvent::TableCleared | TableEvent::Sound { .. } => None,
    }
}
