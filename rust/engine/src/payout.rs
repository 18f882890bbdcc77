//! Balance credits for a settled round.
//!
//! Both wagers are debited up front, so every amount here is what gets
//! credited back to the balance, never a net result.

use crate::hand::{Category, HandEvaluation};
use crate::outcome::{RoundResult, Winner};

/// Ante bonus pay table, "to 1" on the ante.
pub fn ante_bonus_multiplier(category: Category) -> u32 {
    match category {
        Category::StraightFlush => 5,
        Category::ThreeOfAKind => 4,
        Category::Straight => 1,
        Category::Flush | Category::Pair | Category::HighCard => 0,
    }
}

/// Paid on the player's category alone, whatever the round result.
pub fn ante_bonus(player: &HandEvaluation, ante: u32) -> u32 {
    ante_bonus_multiplier(player.category).saturating_mul(ante)
}

/// Credit after a played round.
///
/// | winner | dealer qualified | credit |
/// |---|---|---|
/// | Dealer | any | bonus |
/// | Push | yes | 2 × ante + bonus |
/// | Player | no | 3 × ante + bonus |
/// | Player | yes | 4 × ante + bonus |
pub fn settlement_amount(ante: u32, result: &RoundResult) -> u32 {
    let bonus = ante_bonus(&result.player, ante);
    let returned = match (result.winner, result.dealer_qualified) {
        (Winner::Dealer, _) => 0,
        (Winner::Push, _) => ante.saturating_mul(2),
        (Winner::Player, false) => ante.saturating_mul(3),
        (Winner::Player, true) => ante.saturating_mul(4),
    };
    returned.saturating_add(bonus)
}

/// Credit after a fold: the ante is forfeited and only the bonus can pay.
/// Never looks at the dealer's hand.
pub fn fold_credit(player: &HandEvaluation, ante: u32) -> u32 {
    ante_bonus(player, ante)
}
