use serde::{Deserialize, Serialize};

/// One layer of the pot and the seats that may win it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SidePot {
    pub amount: u32,
    /// Seat indices of live players who covered this layer
    pub eligible: Vec<usize>,
}

/// What one seat put into the hand and whether it still holds cards.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Contribution {
    pub seat: usize,
    pub amount: u32,
    pub live: bool,
}

/// Layers hand commitments into a main pot and side pots, smallest layer first.
///
/// Layer boundaries are the distinct commitments of live players. Every
/// player, folded or not, pays into each layer up to its own commitment, but
/// only live players who reached a layer are eligible for it. Folded money
/// above the highest live commitment joins the top layer. The sum of all pot
/// amounts always equals the sum of commitments.
pub fn build_pots(contributions: &[Contribution]) -> Vec<SidePot> {
    let total: u64 = contributions.iter().map(|c| u64::from(c.amount)).sum();
    if total == 0 {
        return Vec::new();
    }

    let mut levels: Vec<u32> = contributions
        .iter()
        .filter(|c| c.live && c.amount > 0)
        .map(|c| c.amount)
        .collect();
    levels.sort_unstable();
    levels.dedup();

    if levels.is_empty() {
        return vec![SidePot {
            amount: total as u32,
            eligible: contributions.iter().filter(|c| c.live).map(|c| c.seat).collect(),
        }];
    }

    let mut pots: Vec<SidePot> = Vec::with_capacity(levels.len());
    let mut prev = 0u32;
    for &level in &levels {
        let amount = contributions
            .iter()
            .map(|c| c.amount.min(level) - c.amount.min(prev))
            .sum();
        let eligible = contributions
            .iter()
            .filter(|c| c.live && c.amount >= level)
            .map(|c| c.seat)
            .collect();
        pots.push(SidePot { amount, eligible });
        prev = level;
    }

    let layered: u64 = pots.iter().map(|p| u64::from(p.amount)).sum();
    if let Some(top) = pots.last_mut() {
        top.amount += (total - layered) as u32;
    }
    pots
}

/// Splits `amount` evenly across `winners`; odd chips go to the first winner.
/// Returns one share per winner, in the same order.
pub fn split_pot(amount: u32, winners: usize) -> Vec<u32> {
    if winners == 0 {
        return Vec::new();
    }
    let n = winners as u32;
    let share = amount / n;
    let mut shares = vec![share; winners];
    shares[0] += amount % n;
    shares
}
