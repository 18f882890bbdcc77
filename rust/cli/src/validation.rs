//! Input parsing for the interactive `play` session.

/// Commands a player can type at the table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TableInput {
    /// Deal with the current ante (empty line or `deal`)
    Deal,
    /// Change the ante and deal
    Ante(u32),
    Play,
    Fold,
    Hint,
}

#[derive(Debug, PartialEq)]
pub enum ParseResult {
    Input(TableInput),
    Quit,
    Invalid(String),
}

/// Parses a line typed at the table (case-insensitive).
///
/// ```rust
/// # use tricard_cli::validation::{parse_table_input, ParseResult, TableInput};
/// assert_eq!(parse_table_input("p"), ParseResult::Input(TableInput::Play));
/// assert_eq!(parse_table_input("ante 25"), ParseResult::Input(TableInput::Ante(25)));
/// assert_eq!(parse_table_input("quit"), ParseResult::Quit);
/// assert!(matches!(parse_table_input("raise"), ParseResult::Invalid(_)));
/// ```
pub fn parse_table_input(input: &str) -> ParseResult {
    let input = input.trim().to_lowercase();
    let parts: Vec<&str> = input.split_whitespace().collect();

    let Some(first) = parts.first() else {
        return ParseResult::Input(TableInput::Deal);
    };

    match *first {
        "q" | "quit" => ParseResult::Quit,
        "deal" | "d" => ParseResult::Input(TableInput::Deal),
        "play" | "p" => ParseResult::Input(TableInput::Play),
        "fold" | "f" => ParseResult::Input(TableInput::Fold),
        "hint" | "h" => ParseResult::Input(TableInput::Hint),
        "ante" | "a" => match parts.get(1).map(|s| s.parse::<u32>()) {
            None => ParseResult::Invalid("Ante requires an amount (e.g., 'ante 25')".to_string()),
            Some(Ok(amount)) if amount > 0 => ParseResult::Input(TableInput::Ante(amount)),
            Some(Ok(_)) => ParseResult::Invalid("Ante must be positive".to_string()),
            Some(Err(_)) => ParseResult::Invalid("Invalid ante amount".to_string()),
        },
        other => ParseResult::Invalid(format!(
            "Unrecognized input '{}'. Valid inputs: deal, ante <amount>, play, fold, hint, q",
            other
        )),
    }
}
