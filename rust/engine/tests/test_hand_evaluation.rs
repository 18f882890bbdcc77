use std::cmp::Ordering;

use tricard_engine::cards::{Card, Rank as R, Suit as S};
use tricard_engine::hand::{compare_hands, evaluate_hand, Category, Hand};
use tricard_engine::outcome::{dealer_qualifies, resolve, Winner};

fn c(r: R, s: S) -> Card {
    Card::new(r, s)
}

fn eval(s: &str) -> tricard_engine::hand::HandEvaluation {
    evaluate_hand(&s.parse::<Hand>().expect("valid hand"))
}

#[test]
fn detects_every_category() {
    let cases = [
        ("Kd 8s 3c", Category::HighCard),
        ("8d 8s 3c", Category::Pair),
        ("Kh 8h 3h", Category::Flush),
        ("9d Ts Jc", Category::Straight),
        ("7d 7s 7c", Category::ThreeOfAKind),
        ("9s Ts Js", Category::StraightFlush),
    ];
    for (hand, expected) in cases {
        assert_eq!(eval(hand).category, expected, "{hand}");
    }
}

#[test]
fn categories_rank_in_three_card_order() {
    let ladder = [
        ("Ac Jd 5s", Category::HighCard),
        ("8c 8h As", Category::Pair),
        ("Kd 9d 3d", Category::Flush),
        ("4c 5d 6h", Category::Straight),
        ("7c 7d 7s", Category::ThreeOfAKind),
        ("Qh Jh Th", Category::StraightFlush),
    ];
    let evals: Vec<_> = ladder
        .iter()
        .map(|(text, category)| {
            let e = eval(text);
            assert_eq!(e.category, *category, "{text}");
            e
        })
        .collect();
    for (i, lower) in evals.iter().enumerate() {
        for higher in &evals[i + 1..] {
            assert_eq!(compare_hands(higher, lower), Ordering::Greater);
            assert_eq!(compare_hands(lower, higher), Ordering::Less);
        }
    }
}

#[test]
fn straight_ranks_above_flush() {
    assert_eq!(
        compare_hands(&eval("4c 5d 6h"), &eval("Ah Kh 9h")),
        Ordering::Greater
    );
}

#[test]
fn ace_plays_low_and_high_but_never_wraps() {
    assert_eq!(eval("Ac 2d 3h").category, Category::Straight);
    assert_eq!(eval("Qc Kd Ah").category, Category::Straight);
    assert_eq!(eval("Kc Ad 2h").category, Category::HighCard);
}

#[test]
fn wheel_is_the_lowest_straight() {
    assert_eq!(
        compare_hands(&eval("Ac 2d 3h"), &eval("2c 3d 4h")),
        Ordering::Less
    );
    assert_eq!(
        compare_hands(&eval("Ac 2c 3c"), &eval("2s 3s 4s")),
        Ordering::Less
    );
}

#[test]
fn pair_compares_pair_rank_before_kicker() {
    assert_eq!(
        compare_hands(&eval("9c 9d 2s"), &eval("8c 8d As")),
        Ordering::Greater
    );
    assert_eq!(
        compare_hands(&eval("9c 9d 5s"), &eval("9h 9s 4s")),
        Ordering::Greater
    );
}

#[test]
fn evaluation_ignores_card_order() {
    let two = c(R::Two, S::Clubs);
    let ace = c(R::Ace, S::Hearts);
    let nine = c(R::Nine, S::Spades);
    let a = evaluate_hand(&Hand::new([two, ace, nine]).unwrap());
    let b = evaluate_hand(&Hand::new([nine, two, ace]).unwrap());
    assert_eq!(a, b);
    assert_eq!(a.values, vec![14, 9, 2]);
}

#[test]
fn queen_high_is_the_weakest_qualifying_hand() {
    assert!(dealer_qualifies(&eval("Qc 3d 2h")));
    assert!(!dealer_qualifies(&eval("Jc 9d 8h")));
    assert!(dealer_qualifies(&eval("2c 2d 3h")));
}

#[test]
fn resolve_compares_only_against_a_qualified_dealer() {
    let r = resolve(&"Ac Kd 9h".parse().unwrap(), &"Qs 3c 2d".parse().unwrap());
    assert!(r.dealer_qualified);
    assert_eq!(r.winner, Winner::Player);

    let r = resolve(&"7c 3d 2h".parse().unwrap(), &"Qs 5c 3s".parse().unwrap());
    assert_eq!(r.winner, Winner::Dealer);
}

#[test]
fn hands_round_trip_through_json_as_card_arrays() {
    let hand: Hand = "Ah 2c 3d".parse().unwrap();
    let json = serde_json::to_string(&hand).unwrap();
    let back: Hand = serde_json::from_str(&json).unwrap();
    assert_eq!(back, hand);

    let dup = json.replace("\"Clubs\"", "\"Hearts\"").replace("\"Two\"", "\"Ace\"");
    assert!(serde_json::from_str::<Hand>(&dup).is_err());
}
