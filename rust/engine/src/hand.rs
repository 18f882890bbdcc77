use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::cards::{Card, Rank};
use crate::errors::GameError;

/// Three-card hand categories, weakest first.
///
/// Three-card odds put Straight above Flush and Three of a Kind above both,
/// so this ordering differs from five-card poker on purpose.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
pub enum Category {
    HighCard = 0,
    Pair = 1,
    Flush = 2,
    Straight = 3,
    ThreeOfAKind = 4,
    StraightFlush = 5,
}

impl Category {
    pub fn all() -> [Category; 6] {
        [
            Category::HighCard,
            Category::Pair,
            Category::Flush,
            Category::Straight,
            Category::ThreeOfAKind,
            Category::StraightFlush,
        ]
    }

    pub fn name(self) -> &'static str {
        match self {
            Category::HighCard => "High Card",
            Category::Pair => "Pair",
            Category::Flush => "Flush",
            Category::Straight => "Straight",
            Category::ThreeOfAKind => "Three of a Kind",
            Category::StraightFlush => "Straight Flush",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Exactly three distinct cards. Positional order is kept for display.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(try_from = "[Card; 3]", into = "[Card; 3]")]
pub struct Hand {
    cards: [Card; 3],
}

impl Hand {
    pub fn new(cards: [Card; 3]) -> Result<Self, GameError> {
        let [a, b, c] = cards;
        if a == b || a == c {
            return Err(GameError::DuplicateCard(a.to_string()));
        }
        if b == c {
            return Err(GameError::DuplicateCard(b.to_string()));
        }
        Ok(Self { cards })
    }

    pub fn from_slice(cards: &[Card]) -> Result<Self, GameError> {
        let arr: [Card; 3] = cards
            .try_into()
            .map_err(|_| GameError::InvalidHandSize(cards.len()))?;
        Self::new(arr)
    }

    pub fn cards(&self) -> &[Card; 3] {
        &self.cards
    }
}

impl TryFrom<[Card; 3]> for Hand {
    type Error = GameError;

    fn try_from(cards: [Card; 3]) -> Result<Self, Self::Error> {
        Hand::new(cards)
    }
}

impl From<Hand> for [Card; 3] {
    fn from(hand: Hand) -> Self {
        hand.cards
    }
}

impl fmt::Display for Hand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [a, b, c] = self.cards;
        write!(f, "{} {} {}", a, b, c)
    }
}

/// Parses space- or comma-separated cards, e.g. `"Ah 2c 3d"`.
impl FromStr for Hand {
    type Err = GameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let cards = s
            .split(|c: char| c.is_whitespace() || c == ',')
            .filter(|t| !t.is_empty())
            .map(str::parse::<Card>)
            .collect::<Result<Vec<_>, _>>()?;
        Hand::from_slice(&cards)
    }
}

#[derive(Debug, Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub struct HandEvaluation {
    pub category: Category,
    // tie-break values, high -> low; shape depends only on category:
    // [pair, kicker] for Pair, three values otherwise
    pub values: Vec<u8>,
}

impl HandEvaluation {
    pub fn top_value(&self) -> u8 {
        self.values.first().copied().unwrap_or(0)
    }
}

/// Key used for the A-2-3 straight: the Ace counts as 1 so the wheel is the
/// lowest straight in both detection and comparison.
const WHEEL_KEY: [u8; 3] = [3, 2, 1];

pub fn evaluate_hand(hand: &Hand) -> HandEvaluation {
    let cards = *hand.cards();
    let mut desc = cards.map(|c| c.rank.value());
    desc.sort_unstable_by(|a, b| b.cmp(a));

    let is_flush = cards.iter().all(|c| c.suit == cards[0].suit);
    let straight = straight_key(desc);
    let is_trips = desc[0] == desc[1] && desc[1] == desc[2];
    let pair = if desc[0] == desc[1] {
        Some((desc[0], desc[2]))
    } else if desc[1] == desc[2] {
        Some((desc[1], desc[0]))
    } else {
        None
    };

    let (category, values) = match (straight, is_flush) {
        (Some(key), true) => (Category::StraightFlush, key.to_vec()),
        _ if is_trips => (Category::ThreeOfAKind, desc.to_vec()),
        (Some(key), false) => (Category::Straight, key.to_vec()),
        (None, true) => (Category::Flush, desc.to_vec()),
        (None, false) => match pair {
            Some((p, kicker)) => (Category::Pair, vec![p, kicker]),
            None => (Category::HighCard, desc.to_vec()),
        },
    };

    HandEvaluation { category, values }
}

fn straight_key(desc: [u8; 3]) -> Option<[u8; 3]> {
    let ace = Rank::Ace.value();
    if desc == [ace, Rank::Three.value(), Rank::Two.value()] {
        return Some(WHEEL_KEY);
    }
    if desc[0] == desc[1] + 1 && desc[1] == desc[2] + 1 {
        Some(desc)
    } else {
        None
    }
}

/// Category first, then tie-break values element by element.
pub fn compare_hands(a: &HandEvaluation, b: &HandEvaluation) -> Ordering {
    match a.category.cmp(&b.category) {
        Ordering::Equal => a.values.cmp(&b.values),
        ord => ord,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hand(s: &str) -> Hand {
        s.parse().unwrap()
    }

    #[test]
    fn rejects_duplicate_cards() {
        assert!(matches!(
            "Ah Ah 3d".parse::<Hand>(),
            Err(GameError::DuplicateCard(_))
        ));
        assert!(matches!(
            "Ah 2c 2c".parse::<Hand>(),
            Err(GameError::DuplicateCard(_))
        ));
    }

    #[test]
    fn rejects_wrong_size() {
        assert_eq!(
            "Ah 2c".parse::<Hand>(),
            Err(GameError::InvalidHandSize(2))
        );
    }

    #[test]
    fn pair_values_are_pair_then_kicker() {
        let low_pair = evaluate_hand(&hand("Kd 4s 4h"));
        assert_eq!(low_pair.category, Category::Pair);
        assert_eq!(low_pair.values, vec![4, 13]);

        let high_pair = evaluate_hand(&hand("9c 9d 2s"));
        assert_eq!(high_pair.values, vec![9, 2]);
    }

    #[test]
    fn wheel_uses_ace_low_key() {
        let eval = evaluate_hand(&hand("Ah 2c 3d"));
        assert_eq!(eval.category, Category::Straight);
        assert_eq!(eval.values, WHEEL_KEY.to_vec());
    }

    #[test]
    fn queen_king_ace_is_the_top_straight() {
        let eval = evaluate_hand(&hand("Qh Kc Ad"));
        assert_eq!(eval.category, Category::Straight);
        assert_eq!(eval.values, vec![14, 13, 12]);
    }

    #[test]
    fn king_ace_two_is_not_a_straight() {
        let eval = evaluate_hand(&hand("Kh Ac 2d"));
        assert_eq!(eval.category, Category::HighCard);
    }

    #[test]
    fn serde_rejects_duplicate_hand() {
        let json = r#"[
            {"suit":"Hearts","rank":"Ace"},
            {"suit":"Hearts","rank":"Ace"},
            {"suit":"Clubs","rank":"Two"}
        ]"#;
        assert!(serde_json::from_str::<Hand>(json).is_err());
    }
}
