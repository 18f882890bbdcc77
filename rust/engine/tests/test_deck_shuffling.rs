use std::collections::HashSet;

use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;
use tricard_engine::deck::Deck;
use tricard_engine::errors::GameError;

#[test]
fn same_seed_same_order_different_seed_differs() {
    let mut a = Deck::new_with_seed(42);
    let mut b = Deck::new_with_seed(42);
    let mut c = Deck::new_with_seed(43);
    let da = a.deal(52).unwrap();
    assert_eq!(da, b.deal(52).unwrap());
    assert_ne!(da, c.deal(52).unwrap());
}

#[test]
fn shuffled_deck_holds_52_distinct_cards() {
    let mut rng = ChaCha20Rng::seed_from_u64(5);
    for _ in 0..20 {
        let mut deck = Deck::shuffled(&mut rng);
        let cards = deck.deal(52).unwrap();
        let unique: HashSet<_> = cards.iter().copied().collect();
        assert_eq!(unique.len(), 52);
        assert_eq!(deck.remaining(), 0);
    }
}

#[test]
fn overdraw_is_an_error_and_consumes_nothing() {
    let mut deck = Deck::ordered();
    deck.deal(50).unwrap();
    assert_eq!(
        deck.deal(3),
        Err(GameError::DeckExhausted {
            requested: 3,
            remaining: 2
        })
    );
    assert_eq!(deck.remaining(), 2);
    assert!(deck.deal_card().is_some());
    assert!(deck.deal_card().is_some());
    assert!(deck.deal_card().is_none());
}

#[test]
fn consecutive_shuffles_from_one_rng_differ() {
    let mut rng = ChaCha20Rng::seed_from_u64(11);
    let first = Deck::shuffled(&mut rng).deal(52).unwrap();
    let second = Deck::shuffled(&mut rng).deal(52).unwrap();
    assert_ne!(first, second);
}
