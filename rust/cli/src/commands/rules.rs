use std::io::Write;

use tricard_engine::hand::Category;
use tricard_engine::payout::ante_bonus_multiplier;

use crate::config;
use crate::error::CliError;

fn example(category: Category) -> &'static str {
    match category {
        Category::StraightFlush => "Qh Jh Th",
        Category::ThreeOfAKind => "7c 7d 7s",
        Category::Straight => "4c 5d 6h",
        Category::Flush => "Kd 9d 3d",
        Category::Pair => "8c 8h As",
        Category::HighCard => "Ac Jd 5s",
    }
}

/// `rules`: rankings, dealer qualification and pay tables for the
/// configured table limits.
pub fn handle_rules_command(out: &mut dyn Write) -> Result<(), CliError> {
    let cfg = config::load()?;

    writeln!(out, "Hand rankings (best first):")?;
    for category in Category::all().into_iter().rev() {
        writeln!(out, "  {:<16} e.g. {}", category.name(), example(category))?;
    }
    writeln!(out, "  A-2-3 is the lowest straight; Q-K-A the highest.")?;
    writeln!(out)?;
    writeln!(
        out,
        "Ante {} to {}; starting balance {}.",
        cfg.min_ante, cfg.max_ante, cfg.starting_balance
    )?;
    writeln!(out, "Play matches the ante. Fold forfeits the ante.")?;
    writeln!(out, "Dealer qualifies with Queen high or better.")?;
    writeln!(out)?;
    writeln!(out, "Payouts when you play:")?;
    writeln!(out, "  Dealer does not qualify: ante pays 1 to 1, play pushes")?;
    writeln!(out, "  You beat a qualifying dealer: ante and play pay 1 to 1")?;
    writeln!(out, "  Tie: ante and play push")?;
    writeln!(out, "  Dealer wins: ante and play lose")?;
    writeln!(out)?;
    writeln!(out, "Ante bonus (paid even if you fold or lose):")?;
    for category in Category::all().into_iter().rev() {
        let m = ante_bonus_multiplier(category);
        if m > 0 {
            writeln!(out, "  {:<16} {} to 1", category.name(), m)?;
        }
    }
    Ok(())
}
