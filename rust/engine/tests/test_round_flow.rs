use tricard_engine::engine::Engine;
use tricard_engine::errors::GameError;
use tricard_engine::events::{SoundCue, TableEvent};
use tricard_engine::game::{ActionKind, Decision, RoundState};
use tricard_engine::hand::{Category, Hand};
use tricard_engine::outcome::Winner;
use tricard_engine::player::PlayerAction;
use tricard_engine::rules::TableConfig;

fn h(s: &str) -> Hand {
    s.parse().expect("valid hand")
}

fn engine() -> Engine {
    Engine::new(TableConfig::default(), "Ada", Some(1)).expect("engine")
}

fn dealt(eng: &mut Engine, ante: u32, player: &str, dealer: &str) {
    eng.place_ante_with_hands(ante, h(player), h(dealer))
        .expect("ante");
    eng.finish_deal().expect("finish deal");
}

#[test]
fn new_session_awaits_bet_with_starting_balance() {
    let eng = engine();
    assert_eq!(eng.state(), RoundState::AwaitingBet);
    assert_eq!(eng.balance(), 1000);
    assert_eq!(eng.last_message(), "Place your Ante bet to start");
    assert_eq!(eng.legal_actions(), &[ActionKind::Ante]);
    assert!(eng.player_hand().is_none());
}

#[test]
fn fold_with_high_card_loses_the_ante() {
    let mut eng = engine();
    dealt(&mut eng, 10, "Kd 8s 3c", "Qh Jd 2s");
    assert_eq!(eng.balance(), 990);

    let s = eng.fold().expect("fold");
    assert_eq!(s.decision, Decision::Fold);
    assert_eq!(s.credited, 0);
    assert_eq!(s.net(), -10);
    assert!(s.result.is_none());
    assert_eq!(eng.balance(), 990);
    assert_eq!(eng.state(), RoundState::Settled);
    assert_eq!(eng.last_message(), "Ada folded. Dealer wins.");
    // folding never turns the dealer hand over
    assert!(eng.dealer_hand().is_none());
}

#[test]
fn fold_with_straight_still_pays_the_bonus() {
    let mut eng = engine();
    dealt(&mut eng, 20, "4c 5d 6h", "Ks Kd 2s");
    let s = eng.fold().expect("fold");
    assert_eq!(s.bonus, 20);
    assert_eq!(eng.balance(), 1000);
    assert_eq!(eng.last_message(), "Ada folded, but won a Straight bonus!");
}

#[test]
fn play_against_unqualified_dealer_pays_three_times_ante() {
    let mut eng = engine();
    dealt(&mut eng, 10, "9c 5d 2h", "Jd 7s 4c");
    eng.play().expect("play");
    assert_eq!(eng.balance(), 980);
    assert_eq!(eng.state(), RoundState::Resolving);
    assert!(eng.dealer_hand().is_none());

    let s = eng.reveal().expect("reveal");
    let result = s.result.as_ref().expect("showdown");
    assert_eq!(result.winner, Winner::Player);
    assert!(!result.dealer_qualified);
    assert_eq!(s.credited, 30);
    assert_eq!(eng.balance(), 1010);
    assert_eq!(eng.last_message(), "Dealer doesn't qualify. Ada wins!");
    assert_eq!(eng.dealer_hand(), Some(&h("Jd 7s 4c")));
}

#[test]
fn straight_flush_beats_qualified_dealer_with_bonus() {
    let mut eng = engine();
    dealt(&mut eng, 10, "Qh Jh Th", "Ks 9d 2c");
    eng.play().unwrap();
    let s = eng.reveal().unwrap();
    // 4 x ante for the win plus 5 x ante bonus
    assert_eq!(s.credited, 90);
    assert_eq!(s.bonus, 50);
    assert_eq!(eng.balance(), 1070);
    assert_eq!(eng.last_message(), "Ada wins with Straight Flush!");
}

#[test]
fn dealer_win_still_pays_ante_bonus() {
    let mut eng = engine();
    dealt(&mut eng, 10, "5c 6d 7h", "2s 2h 2d");
    eng.play().unwrap();
    let s = eng.reveal().unwrap();
    assert_eq!(s.result.as_ref().unwrap().winner, Winner::Dealer);
    assert_eq!(s.credited, 10);
    assert_eq!(eng.balance(), 990);
    assert_eq!(
        eng.last_message(),
        "Dealer wins with Three of a Kind. Ada wins an Ante Bonus for Straight!"
    );
}

#[test]
fn identical_ranks_push_and_return_both_wagers() {
    let mut eng = engine();
    dealt(&mut eng, 10, "As Kd 9c", "Ah Kc 9d");
    eng.play().unwrap();
    let s = eng.reveal().unwrap();
    assert_eq!(s.result.as_ref().unwrap().winner, Winner::Push);
    assert_eq!(s.credited, 20);
    assert_eq!(eng.balance(), 1000);
    assert_eq!(eng.last_message(), "It's a push! Both have High Card.");
}

#[test]
fn second_ante_while_deciding_is_rejected_without_change() {
    let mut eng = engine();
    dealt(&mut eng, 10, "Kd 8s 3c", "Qh Jd 2s");
    let round = eng.round_id();

    let err = eng.place_ante(10).unwrap_err();
    assert_eq!(
        err,
        GameError::IllegalAction {
            action: ActionKind::Ante,
            state: RoundState::AwaitingPlayerDecision
        }
    );
    assert_eq!(eng.balance(), 990);
    assert_eq!(eng.state(), RoundState::AwaitingPlayerDecision);
    assert_eq!(eng.round_id(), round);
}

#[test]
fn actions_out_of_order_are_illegal() {
    let mut eng = engine();
    assert!(matches!(eng.play(), Err(GameError::IllegalAction { .. })));
    assert!(matches!(eng.fold(), Err(GameError::IllegalAction { .. })));
    assert!(matches!(eng.reveal(), Err(GameError::IllegalAction { .. })));
    assert!(matches!(eng.next_round(), Err(GameError::IllegalAction { .. })));
    assert!(matches!(eng.restart(), Err(GameError::IllegalAction { .. })));

    eng.place_ante(10).unwrap();
    // cards must finish dealing before a decision
    assert!(matches!(eng.play(), Err(GameError::IllegalAction { .. })));
    assert_eq!(eng.balance(), 990);
}

#[test]
fn ante_limits_are_checked_before_balance() {
    let table = TableConfig {
        starting_balance: 50,
        min_ante: 10,
        max_ante: 100,
    };
    let mut eng = Engine::new(table, "Ada", Some(3)).unwrap();
    assert!(matches!(
        eng.place_ante(5),
        Err(GameError::AnteOutOfRange { amount: 5, .. })
    ));
    assert!(matches!(
        eng.place_ante(150),
        Err(GameError::AnteOutOfRange { amount: 150, .. })
    ));
    assert_eq!(
        eng.place_ante(60),
        Err(GameError::InsufficientBalance {
            required: 60,
            available: 50
        })
    );
    assert_eq!(eng.balance(), 50);
    assert_eq!(eng.state(), RoundState::AwaitingBet);
    assert!(eng.round_id().is_none());
}

#[test]
fn oversized_starting_balance_is_rejected() {
    let table = TableConfig {
        starting_balance: u32::MAX,
        ..TableConfig::default()
    };
    assert!(matches!(
        Engine::new(table, "Ada", Some(3)),
        Err(GameError::InvalidConfig(_))
    ));
}

#[test]
fn play_requires_balance_for_the_wager() {
    let table = TableConfig {
        starting_balance: 15,
        min_ante: 10,
        max_ante: 100,
    };
    let mut eng = Engine::new(table, "Ada", Some(3)).unwrap();
    dealt(&mut eng, 10, "Kd 8s 3c", "Qh Jd 2s");
    assert_eq!(
        eng.play(),
        Err(GameError::InsufficientBalance {
            required: 10,
            available: 5
        })
    );
    assert_eq!(eng.state(), RoundState::AwaitingPlayerDecision);
    assert_eq!(eng.balance(), 5);
    eng.fold().expect("fold is still allowed");
}

#[test]
fn busted_session_ends_in_game_over_until_restart() {
    let table = TableConfig {
        starting_balance: 30,
        min_ante: 10,
        max_ante: 100,
    };
    let mut eng = Engine::new(table, "Ada", Some(9)).unwrap();
    dealt(&mut eng, 20, "Kd 8s 3c", "Qh Jd 2s");
    eng.fold().unwrap();
    eng.next_round().unwrap();
    assert_eq!(eng.state(), RoundState::AwaitingBet);
    assert_eq!(eng.last_message(), "Place your Ante bet for the next round");

    dealt(&mut eng, 10, "Kd 8s 3c", "Qh Jd 2s");
    eng.fold().unwrap();
    eng.next_round().unwrap();
    assert_eq!(eng.balance(), 0);
    assert!(eng.is_game_over());
    assert_eq!(eng.last_message(), "Game Over! Not enough balance.");
    assert!(matches!(
        eng.place_ante(10),
        Err(GameError::IllegalAction { .. })
    ));

    eng.restart().unwrap();
    assert_eq!(eng.state(), RoundState::AwaitingBet);
    assert_eq!(eng.balance(), 30);
    assert!(eng.last_settlement().is_none());
}

#[test]
fn round_ids_increase_and_gate_advice() {
    let mut eng = engine();
    let first = eng.place_ante(10).unwrap();
    assert!(!eng.awaits_decision_for(first), "not deciding until dealt");
    eng.finish_deal().unwrap();
    assert!(eng.awaits_decision_for(first));
    eng.fold().unwrap();
    assert!(!eng.awaits_decision_for(first));
    eng.next_round().unwrap();

    let second = eng.place_ante(10).unwrap();
    eng.finish_deal().unwrap();
    assert!(second > first);
    assert!(!eng.awaits_decision_for(first));
    assert!(eng.awaits_decision_for(second));
}

#[test]
fn ante_emits_deal_events_in_order() {
    let mut eng = engine();
    let id = eng.place_ante_with_hands(10, h("Kd 8s 3c"), h("Qh Jd 2s")).unwrap();
    let events = eng.drain_events();
    assert_eq!(
        events,
        vec![
            TableEvent::Sound { cue: SoundCue::Click },
            TableEvent::Sound { cue: SoundCue::Chip },
            TableEvent::TableCleared,
            TableEvent::HandsDealt {
                round_id: id,
                player: h("Kd 8s 3c"),
                dealer: h("Qh Jd 2s"),
            },
            TableEvent::Sound { cue: SoundCue::Deal },
        ]
    );
    assert!(eng.drain_events().is_empty());
}

#[test]
fn reveal_emits_flip_then_result() {
    let mut eng = engine();
    dealt(&mut eng, 10, "2c 2d 9s", "Ah 7c 4d");
    eng.play().unwrap();
    eng.drain_events();
    eng.reveal().unwrap();
    let events = eng.drain_events();
    let id = eng.round_id().unwrap();
    assert_eq!(
        events,
        vec![
            TableEvent::DealerRevealed {
                round_id: id,
                dealer: h("Ah 7c 4d"),
            },
            TableEvent::Sound { cue: SoundCue::Flip },
            TableEvent::PlayerWon { round_id: id },
            TableEvent::Sound { cue: SoundCue::Win },
        ]
    );
}

#[test]
fn replayed_hands_must_not_share_cards() {
    let mut eng = engine();
    let err = eng
        .place_ante_with_hands(10, h("Kd 8s 3c"), h("Kd Jd 2s"))
        .unwrap_err();
    assert_eq!(err, GameError::DuplicateCard("Kd".into()));
    assert_eq!(eng.balance(), 1000);
    assert_eq!(eng.state(), RoundState::AwaitingBet);
}

#[test]
fn apply_dispatches_a_full_round() {
    let mut eng = engine();
    let states: Vec<_> = [
        PlayerAction::Ante(25),
        PlayerAction::FinishDeal,
        PlayerAction::Play,
        PlayerAction::Reveal,
        PlayerAction::NextRound,
    ]
    .into_iter()
    .map(|a| eng.apply(a).expect("legal"))
    .collect();
    assert_eq!(
        states,
        vec![
            RoundState::HandsDealt,
            RoundState::AwaitingPlayerDecision,
            RoundState::Resolving,
            RoundState::Settled,
            RoundState::AwaitingBet,
        ]
    );
    let s = eng.last_settlement().expect("settled");
    assert_eq!(s.wagered, 50);
    assert_eq!(i64::from(eng.balance()), 1000 + s.net());
}

#[test]
fn seeded_sessions_are_reproducible() {
    let mut a = Engine::new(TableConfig::default(), "A", Some(77)).unwrap();
    let mut b = Engine::new(TableConfig::default(), "B", Some(77)).unwrap();
    for _ in 0..5 {
        a.place_ante(10).unwrap();
        b.place_ante(10).unwrap();
        assert_eq!(a.player_hand(), b.player_hand());
        for eng in [&mut a, &mut b] {
            eng.finish_deal().unwrap();
            eng.fold().unwrap();
            eng.next_round().unwrap();
        }
    }
}

#[test]
fn dealt_hands_never_share_a_card() {
    let mut eng = engine();
    for _ in 0..200 {
        eng.place_ante(10).unwrap();
        eng.finish_deal().unwrap();
        let player = *eng.player_hand().unwrap();
        let s = eng.fold().unwrap();
        assert!(player
            .cards()
            .iter()
            .all(|c| !s.dealer_hand.cards().contains(c)));
        eng.next_round().unwrap();
        if eng.is_game_over() {
            eng.restart().unwrap();
        }
    }
}

#[test]
fn settlement_reports_player_category() {
    let mut eng = engine();
    dealt(&mut eng, 10, "Jc Jd 4s", "Qh Td 2s");
    eng.play().unwrap();
    let s = eng.reveal().unwrap();
    assert_eq!(s.player_category, Category::Pair);
    assert_eq!(s.balance_after, eng.balance());
}
