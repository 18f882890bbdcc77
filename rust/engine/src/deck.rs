use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha20Rng;

use crate::cards::{full_deck, Card};
use crate::errors::GameError;

/// A single round's deck. Each round builds its own instance; nothing is
/// shared between rounds.
#[derive(Debug, Clone)]
pub struct Deck {
    cards: Vec<Card>,
    position: usize,
}

impl Deck {
    /// Unshuffled deck in suit-major order.
    pub fn ordered() -> Self {
        Self {
            cards: full_deck(),
            position: 0,
        }
    }

    /// Builds all 52 cards and applies a Fisher–Yates shuffle driven by `rng`.
    pub fn shuffled<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let mut deck = Self::ordered();
        deck.shuffle(rng);
        deck
    }

    pub fn new_with_seed(seed: u64) -> Self {
        let mut rng = ChaCha20Rng::seed_from_u64(seed);
        Self::shuffled(&mut rng)
    }

    fn shuffle<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        // for i from last index down to 1, swap i with a uniform index in [0, i]
        for i in (1..self.cards.len()).rev() {
            let j = rng.random_range(0..=i);
            self.cards.swap(i, j);
        }
        self.position = 0;
    }

    /// Removes and returns the top `n` cards.
    pub fn deal(&mut self, n: usize) -> Result<Vec<Card>, GameError> {
        let remaining = self.remaining();
        if n > remaining {
            return Err(GameError::DeckExhausted {
                requested: n,
                remaining,
            });
        }
        let dealt = self.cards[self.position..self.position + n].to_vec();
        self.position += n;
        Ok(dealt)
    }

    pub fn deal_card(&mut self) -> Option<Card> {
        let c = self.cards.get(self.position).copied()?;
        self.position += 1;
        Some(c)
    }

    pub fn remaining(&self) -> usize {
        self.cards.len().saturating_sub(self.position)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn ordered_deck_holds_every_card_once() {
        let mut deck = Deck::ordered();
        let cards = deck.deal(52).unwrap();
        let unique: HashSet<_> = cards.iter().collect();
        assert_eq!(unique.len(), 52);
        assert_eq!(deck.remaining(), 0);
        assert!(deck.deal_card().is_none());
    }

    #[test]
    fn deal_past_the_end_is_rejected_without_consuming() {
        let mut deck = Deck::new_with_seed(3);
        deck.deal(50).unwrap();
        let err = deck.deal(3).unwrap_err();
        assert_eq!(
            err,
            GameError::DeckExhausted {
                requested: 3,
                remaining: 2
            }
        );
        assert_eq!(deck.remaining(), 2);
    }

    #[test]
    fn shuffle_preserves_the_card_set() {
        let mut deck = Deck::new_with_seed(99);
        let mut cards = deck.deal(52).unwrap();
        cards.sort();
        let mut expected = full_deck();
        expected.sort();
        assert_eq!(cards, expected);
    }
}
