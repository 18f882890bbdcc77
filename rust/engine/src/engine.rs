use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::deck::Deck;
use crate::errors::GameError;
use crate::events::{SoundCue, TableEvent};
use crate::game::{ActionKind, Decision, Round, RoundState};
use crate::hand::{evaluate_hand, Category, Hand};
use crate::outcome::{resolve, RoundResult, Winner};
use crate::payout::{ante_bonus, fold_credit, settlement_amount};
use crate::player::{Player, PlayerAction};
use crate::rules::{ensure_legal, legal_actions, validate_ante, TableConfig};

const WELCOME: &str = "Place your Ante bet to start";
const NEXT_ROUND: &str = "Place your Ante bet for the next round";
const GAME_OVER: &str = "Game Over! Not enough balance.";
const DECIDE: &str = "Play or Fold?";
const REVEALING: &str = "Revealing hands...";

/// Outcome of a settled round, kept until the next round starts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settlement {
    pub round_id: u64,
    pub decision: Decision,
    pub ante: u32,
    pub player_hand: Hand,
    pub dealer_hand: Hand,
    pub player_category: Category,
    /// Showdown result; `None` when the player folded
    pub result: Option<RoundResult>,
    pub bonus: u32,
    pub wagered: u32,
    pub credited: u32,
    pub balance_after: u32,
    pub message: String,
}

impl Settlement {
    pub fn net(&self) -> i64 {
        i64::from(self.credited) - i64::from(self.wagered)
    }
}

/// Round state machine for one player session.
///
/// Every transition is an explicit synchronous call. A call made in a state
/// that does not permit it fails with [`GameError::IllegalAction`] and changes
/// nothing; balance, round and state only move together.
///
/// # Examples
///
/// ```
/// use tricard_engine::engine::Engine;
/// use tricard_engine::game::RoundState;
/// use tricard_engine::rules::TableConfig;
///
/// let mut engine = Engine::new(TableConfig::default(), "Ada", Some(7)).unwrap();
/// engine.place_ante(10).unwrap();
/// assert_eq!(engine.balance(), 990);
/// engine.finish_deal().unwrap();
///
/// // a second ante mid-round is rejected without side effects
/// assert!(engine.place_ante(10).is_err());
/// assert_eq!(engine.balance(), 990);
///
/// engine.fold().unwrap();
/// assert_eq!(engine.state(), RoundState::Settled);
/// ```
#[derive(Debug)]
pub struct Engine {
    table: TableConfig,
    player: Player,
    state: RoundState,
    /// Session RNG; each round draws a fresh deck from it
    rng: ChaCha20Rng,
    seed: u64,
    next_round_id: u64,
    round: Option<Round>,
    settlement: Option<Settlement>,
    message: String,
    events: Vec<TableEvent>,
}

impl Engine {
    pub fn new(
        table: TableConfig,
        player_name: impl Into<String>,
        seed: Option<u64>,
    ) -> Result<Self, GameError> {
        table.validate()?;
        let seed = seed.unwrap_or_else(rand::random);
        let player = Player::new(player_name, table.starting_balance);
        debug!(seed, balance = player.balance(), "session started");
        Ok(Self {
            table,
            player,
            state: RoundState::AwaitingBet,
            rng: ChaCha20Rng::seed_from_u64(seed),
            seed,
            next_round_id: 1,
            round: None,
            settlement: None,
            message: WELCOME.to_string(),
            events: Vec::new(),
        })
    }

    pub fn state(&self) -> RoundState {
        self.state
    }

    pub fn balance(&self) -> u32 {
        self.player.balance()
    }

    pub fn player_name(&self) -> &str {
        self.player.name()
    }

    pub fn table(&self) -> &TableConfig {
        &self.table
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    pub fn legal_actions(&self) -> &'static [ActionKind] {
        legal_actions(self.state)
    }

    pub fn round_id(&self) -> Option<u64> {
        self.round.as_ref().map(|r| r.id)
    }

    pub fn current_ante(&self) -> Option<u32> {
        self.round.as_ref().map(|r| r.ante)
    }

    pub fn player_hand(&self) -> Option<&Hand> {
        self.round.as_ref().map(|r| &r.player)
    }

    /// The dealer hand once it has been turned over at showdown.
    pub fn dealer_hand(&self) -> Option<&Hand> {
        self.round
            .as_ref()
            .filter(|r| self.state == RoundState::Settled && r.decision == Some(Decision::Play))
            .map(|r| &r.dealer)
    }

    pub fn last_message(&self) -> &str {
        &self.message
    }

    pub fn last_settlement(&self) -> Option<&Settlement> {
        self.settlement.as_ref()
    }

    pub fn is_game_over(&self) -> bool {
        self.state == RoundState::GameOver
    }

    /// True while the player still has to decide on round `round_id`.
    /// Advisory responses for any other round are stale.
    pub fn awaits_decision_for(&self, round_id: u64) -> bool {
        self.state == RoundState::AwaitingPlayerDecision && self.round_id() == Some(round_id)
    }

    pub fn drain_events(&mut self) -> Vec<TableEvent> {
        std::mem::take(&mut self.events)
    }

    pub fn apply(&mut self, action: PlayerAction) -> Result<RoundState, GameError> {
        match action {
            PlayerAction::Ante(amount) => self.place_ante(amount).map(|_| ()),
            PlayerAction::FinishDeal => self.finish_deal(),
            PlayerAction::Play => self.play(),
            PlayerAction::Fold => self.fold().map(|_| ()),
            PlayerAction::Reveal => self.reveal().map(|_| ()),
            PlayerAction::NextRound => self.next_round(),
            PlayerAction::Restart => self.restart(),
        }?;
        Ok(self.state)
    }

    /// Debits the ante, shuffles a fresh deck and deals both hands.
    /// Returns the new round id.
    pub fn place_ante(&mut self, amount: u32) -> Result<u64, GameError> {
        self.check(ActionKind::Ante)?;
        self.check_ante(amount)?;
        let mut deck = Deck::shuffled(&mut self.rng);
        let player = Hand::from_slice(&deck.deal(3)?)?;
        let dealer = Hand::from_slice(&deck.deal(3)?)?;
        Ok(self.start_round(amount, player, dealer))
    }

    /// Same as [`Engine::place_ante`] with predetermined hands, for replaying
    /// recorded rounds.
    pub fn place_ante_with_hands(
        &mut self,
        amount: u32,
        player: Hand,
        dealer: Hand,
    ) -> Result<u64, GameError> {
        self.check(ActionKind::Ante)?;
        self.check_ante(amount)?;
        if let Some(card) = player.cards().iter().find(|c| dealer.cards().contains(c)) {
            return Err(GameError::DuplicateCard(card.to_string()));
        }
        Ok(self.start_round(amount, player, dealer))
    }

    pub fn finish_deal(&mut self) -> Result<(), GameError> {
        self.check(ActionKind::FinishDeal)?;
        self.state = RoundState::AwaitingPlayerDecision;
        self.message = DECIDE.to_string();
        debug!(round_id = ?self.round_id(), "awaiting player decision");
        Ok(())
    }

    /// Places the Play wager. The round is then settled by [`Engine::reveal`].
    pub fn play(&mut self) -> Result<(), GameError> {
        self.check(ActionKind::Play)?;
        let available = self.player.balance();
        let round = self.round.as_mut().ok_or(GameError::IllegalAction {
            action: ActionKind::Play,
            state: self.state,
        })?;
        if !self.player.can_cover(round.ante) {
            warn!(
                round_id = round.id,
                required = round.ante,
                available,
                "play wager exceeds balance"
            );
            return Err(GameError::InsufficientBalance {
                required: round.ante,
                available,
            });
        }
        self.player.debit(round.ante);
        round.decision = Some(Decision::Play);
        self.state = RoundState::Resolving;
        self.message = REVEALING.to_string();
        self.sound(SoundCue::Click);
        self.sound(SoundCue::Chip);
        debug!(balance = self.player.balance(), "play wager placed");
        Ok(())
    }

    /// Forfeits the ante. Only the player's own hand is consulted, for the
    /// ante bonus.
    pub fn fold(&mut self) -> Result<Settlement, GameError> {
        self.check(ActionKind::Fold)?;
        let round = self.round.as_mut().ok_or(GameError::IllegalAction {
            action: ActionKind::Fold,
            state: self.state,
        })?;
        round.decision = Some(Decision::Fold);
        let round = round.clone();

        let player_eval = evaluate_hand(&round.player);
        let bonus = fold_credit(&player_eval, round.ante);
        self.player.credit(bonus);

        let name = self.player.name();
        let message = if bonus > 0 {
            format!("{} folded, but won a {} bonus!", name, player_eval.category)
        } else {
            format!("{} folded. Dealer wins.", name)
        };

        self.sound(SoundCue::Click);
        self.sound(if bonus > 0 {
            SoundCue::Win
        } else {
            SoundCue::Lose
        });
        Ok(self.settle(&round, player_eval.category, None, bonus, bonus, message))
    }

    /// Turns the dealer hand over, resolves the showdown and credits the
    /// balance.
    pub fn reveal(&mut self) -> Result<Settlement, GameError> {
        self.check(ActionKind::Reveal)?;
        let round = self.round.clone().ok_or(GameError::IllegalAction {
            action: ActionKind::Reveal,
            state: self.state,
        })?;

        let result = resolve(&round.player, &round.dealer);
        let bonus = ante_bonus(&result.player, round.ante);
        let credited = settlement_amount(round.ante, &result);
        self.player.credit(credited);

        let name = self.player.name();
        let mut message = result.message(name);
        if bonus > 0 && result.winner == Winner::Dealer {
            message.push_str(&format!(
                " {} wins an Ante Bonus for {}!",
                name, result.player.category
            ));
        }

        self.events.push(TableEvent::DealerRevealed {
            round_id: round.id,
            dealer: round.dealer,
        });
        self.sound(SoundCue::Flip);
        match result.winner {
            Winner::Player => self.events.push(TableEvent::PlayerWon { round_id: round.id }),
            Winner::Dealer => self.events.push(TableEvent::PlayerLost { round_id: round.id }),
            Winner::Push => {}
        }
        if result.winner == Winner::Player || bonus > 0 {
            self.sound(SoundCue::Win);
        } else if result.winner == Winner::Dealer {
            self.sound(SoundCue::Lose);
        }

        let category = result.player.category;
        Ok(self.settle(&round, category, Some(result), bonus, credited, message))
    }

    /// Clears the table. Ends the session if the balance no longer covers the
    /// minimum ante.
    pub fn next_round(&mut self) -> Result<(), GameError> {
        self.check(ActionKind::NextRound)?;
        self.round = None;
        self.events.push(TableEvent::TableCleared);
        if self.player.balance() < self.table.min_ante {
            self.state = RoundState::GameOver;
            self.message = GAME_OVER.to_string();
            info!(balance = self.player.balance(), "game over");
        } else {
            self.state = RoundState::AwaitingBet;
            self.message = NEXT_ROUND.to_string();
        }
        Ok(())
    }

    /// Leaves game over with a fresh starting balance.
    pub fn restart(&mut self) -> Result<(), GameError> {
        self.check(ActionKind::Restart)?;
        self.player.reset_balance(self.table.starting_balance);
        self.round = None;
        self.settlement = None;
        self.state = RoundState::AwaitingBet;
        self.message = WELCOME.to_string();
        self.events.push(TableEvent::TableCleared);
        info!(balance = self.player.balance(), "session restarted");
        Ok(())
    }

    fn check(&self, action: ActionKind) -> Result<(), GameError> {
        ensure_legal(self.state, action).inspect_err(|_| {
            warn!(action = %action, state = ?self.state, "illegal action rejected");
        })
    }

    fn check_ante(&self, amount: u32) -> Result<(), GameError> {
        validate_ante(&self.table, amount, self.player.balance()).inspect_err(|e| {
            warn!(ante = amount, balance = self.player.balance(), error = %e, "ante rejected");
        })
    }

    fn start_round(&mut self, ante: u32, player: Hand, dealer: Hand) -> u64 {
        // validated by check_ante
        self.player.debit(ante);
        let id = self.next_round_id;
        self.next_round_id += 1;
        self.round = Some(Round {
            id,
            ante,
            player,
            dealer,
            decision: None,
        });
        self.settlement = None;
        self.state = RoundState::HandsDealt;
        self.message.clear();

        self.sound(SoundCue::Click);
        self.sound(SoundCue::Chip);
        self.events.push(TableEvent::TableCleared);
        self.events.push(TableEvent::HandsDealt {
            round_id: id,
            player,
            dealer,
        });
        self.sound(SoundCue::Deal);
        info!(round_id = id, ante, balance = self.player.balance(), "hands dealt");
        id
    }

    fn settle(
        &mut self,
        round: &Round,
        player_category: Category,
        result: Option<RoundResult>,
        bonus: u32,
        credited: u32,
        message: String,
    ) -> Settlement {
        let settlement = Settlement {
            round_id: round.id,
            decision: round.decision.unwrap_or(Decision::Fold),
            ante: round.ante,
            player_hand: round.player,
            dealer_hand: round.dealer,
            player_category,
            result,
            bonus,
            wagered: round.wagered(),
            credited,
            balance_after: self.player.balance(),
            message: message.clone(),
        };
        if let Some(live) = self.round.as_mut() {
            live.decision = Some(settlement.decision);
        }
        info!(
            round_id = round.id,
            decision = ?settlement.decision,
            credited,
            net = settlement.net(),
            balance = settlement.balance_after,
            "round settled"
        );
        self.state = RoundState::Settled;
        self.message = message;
        self.settlement = Some(settlement.clone());
        settlement
    }

    fn sound(&mut self, cue: SoundCue) {
        self.events.push(TableEvent::Sound { cue });
    }
}
