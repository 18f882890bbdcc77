//! Winner determination under the dealer-qualification rule.

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

use crate::cards::Rank;
use crate::hand::{compare_hands, evaluate_hand, Category, Hand, HandEvaluation};

#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub enum Winner {
    Player,
    Dealer,
    Push,
}

/// Result of a played round. Both evaluations are kept for messaging and the
/// ante bonus lookup.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct RoundResult {
    pub winner: Winner,
    pub dealer_qualified: bool,
    pub player: HandEvaluation,
    pub dealer: HandEvaluation,
}

/// Dealer needs Queen-high or better. Fixed rule, not configurable.
pub fn dealer_qualifies(dealer: &HandEvaluation) -> bool {
    dealer.category > Category::HighCard || dealer.top_value() >= Rank::Queen.value()
}

pub fn resolve(player: &Hand, dealer: &Hand) -> RoundResult {
    let player = evaluate_hand(player);
    let dealer = evaluate_hand(dealer);

    if !dealer_qualifies(&dealer) {
        return RoundResult {
            winner: Winner::Player,
            dealer_qualified: false,
            player,
            dealer,
        };
    }

    let winner = match compare_hands(&player, &dealer) {
        Ordering::Greater => Winner::Player,
        Ordering::Less => Winner::Dealer,
        Ordering::Equal => Winner::Push,
    };
    RoundResult {
        winner,
        dealer_qualified: true,
        player,
        dealer,
    }
}

impl RoundResult {
    /// Table message for the showdown, addressed to `name`.
    pub fn message(&self, name: &str) -> String {
        match (self.winner, self.dealer_qualified) {
            (Winner::Player, false) => format!("Dealer doesn't qualify. {} wins!", name),
            (Winner::Player, true) => format!("{} wins with {}!", name, self.player.category),
            (Winner::Dealer, _) => format!("Dealer wins with {}.", self.dealer.category),
            (Winner::Push, _) => format!("It's a push! Both have {}.", self.player.category),
        }
    }
}
