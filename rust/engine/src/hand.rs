use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

use crate::cards::Card;
use crate::errors::GameError;

/// Hand categories, weakest first. The derived ordering is the poker ordering.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
pub enum Category {
    HighCard = 0,
    OnePair = 1,
    TwoPair = 2,
    ThreeOfAKind = 3,
    Straight = 4,
    Flush = 5,
    FullHouse = 6,
    FourOfAKind = 7,
    StraightFlush = 8,
    RoyalFlush = 9,
}

impl Category {
    pub fn name(self) -> &'static str {
        match self {
            Category::HighCard => "High Card",
            Category::OnePair => "Pair",
            Category::TwoPair => "Two Pair",
            Category::ThreeOfAKind => "Three of a Kind",
            Category::Straight => "Straight",
            Category::Flush => "Flush",
            Category::FullHouse => "Full House",
            Category::FourOfAKind => "Four of a Kind",
            Category::StraightFlush => "Straight Flush",
            Category::RoyalFlush => "Royal Flush",
        }
    }
}

/// Strength of a 5-card hand: category, then tie-break ranks.
///
/// `kickers` lists rank values high -> low, zero padded:
/// - pairs/trips/quads/full house/two pair: each distinct rank once, by
///   (multiplicity desc, rank desc), e.g. `KKK22` -> `[13, 2, 0, 0, 0]`
/// - flush/high card: all five ranks descending
/// - straights: the top card only, with the wheel counted as 5-high
///
/// The derived `Ord` compares category first and then kickers lexicographically,
/// which is exactly [`compare_hands`].
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
pub struct HandStrength {
    pub category: Category,
    pub kickers: [u8; 5],
}

/// Best 5-card hand found among a player's cards.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct HandEvaluation {
    pub strength: HandStrength,
    /// The winning five cards, highest rank first.
    pub cards: [Card; 5],
}

impl HandEvaluation {
    pub fn category(&self) -> Category {
        self.strength.category
    }
}

/// Classifies exactly five cards.
pub fn score_five(cards: &[Card; 5]) -> HandStrength {
    let mut rank_counts = [0u8; 15]; // 2..14 used
    for c in cards {
        rank_counts[c.rank.value() as usize] += 1;
    }
    let flush = cards.iter().all(|c| c.suit == cards[0].suit);

    // (count, rank) per distinct rank, count desc then rank desc
    let mut groups: Vec<(u8, u8)> = (2..=14u8)
        .filter(|&r| rank_counts[r as usize] > 0)
        .map(|r| (rank_counts[r as usize], r))
        .collect();
    groups.sort_unstable_by(|a, b| b.cmp(a));

    let mut kickers = [0u8; 5];
    for (slot, &(_, r)) in kickers.iter_mut().zip(groups.iter()) {
        *slot = r;
    }

    if let Some(high) = straight_high(&groups) {
        let category = match (flush, high) {
            (true, 14) => Category::RoyalFlush,
            (true, _) => Category::StraightFlush,
            (false, _) => Category::Straight,
        };
        return HandStrength {
            category,
            kickers: [high, 0, 0, 0, 0],
        };
    }

    let top = groups[0].0;
    let second = groups.get(1).map_or(0, |g| g.0);
    let category = match (top, second) {
        (4, _) => Category::FourOfAKind,
        (3, 2) => Category::FullHouse,
        _ if flush => Category::Flush,
        (3, _) => Category::ThreeOfAKind,
        (2, 2) => Category::TwoPair,
        (2, _) => Category::OnePair,
        _ => Category::HighCard,
    };
    HandStrength { category, kickers }
}

// groups must be sorted desc; a straight needs five singletons
fn straight_high(groups: &[(u8, u8)]) -> Option<u8> {
    if groups.len() != 5 {
        return None;
    }
    let high = groups[0].1;
    let low = groups[4].1;
    if high - low == 4 {
        Some(high)
    } else if high == 14 && groups[1].1 == 5 {
        // wheel: A-2-3-4-5 plays as 5-high
        Some(5)
    } else {
        None
    }
}

/// Finds the best 5-card hand among `hole` + `community`.
///
/// Every 5-card subset is scored (21 of them for a full 7-card hand) and the
/// strongest kept; on equal strength the first subset found wins.
///
/// # Errors
///
/// [`GameError::InsufficientCards`] when fewer than five cards are supplied.
///
/// # Examples
///
/// ```
/// use referee_engine::cards::parse_cards;
/// use referee_engine::hand::{evaluate, Category};
///
/// let hole = parse_cards("As Ks").unwrap();
/// let board = parse_cards("Qs Js Ts 2h 3d").unwrap();
/// let best = evaluate(&hole, &board).unwrap();
/// assert_eq!(best.category(), Category::RoyalFlush);
/// ```
pub fn evaluate(hole: &[Card], community: &[Card]) -> Result<HandEvaluation, GameError> {
    let mut all = Vec::with_capacity(hole.len() + community.len());
    all.extend_from_slice(hole);
    all.extend_from_slice(community);
    evaluate_cards(&all)
}

/// [`evaluate`] over an already combined card set.
pub fn evaluate_cards(cards: &[Card]) -> Result<HandEvaluation, GameError> {
    let n = cards.len();
    if n < 5 {
        return Err(GameError::InsufficientCards {
            requested: 5,
            available: n,
        });
    }

    let mut best: Option<(HandStrength, [Card; 5])> = None;
    for a in 0..n {
        for b in a + 1..n {
            for c in b + 1..n {
                for d in c + 1..n {
                    for e in d + 1..n {
                        let five = [cards[a], cards[b], cards[c], cards[d], cards[e]];
                        let strength = score_five(&five);
                        if best.as_ref().map_or(true, |(s, _)| strength > *s) {
                            best = Some((strength, five));
                        }
                    }
                }
            }
        }
    }

    let (strength, mut cards) = best.ok_or(GameError::InsufficientCards {
        requested: 5,
        available: n,
    })?;
    cards.sort_unstable_by(|x, y| y.rank.cmp(&x.rank).then(y.suit.cmp(&x.suit)));
    Ok(HandEvaluation { strength, cards })
}

pub fn compare_hands(a: &HandStrength, b: &HandStrength) -> Ordering {
    match a.category.cmp(&b.category) {
        Ordering::Equal => a.kickers.cmp(&b.kickers),
        ord => ord,
    }
}

/// Result of [`rank_many`]: every entry strongest first, plus the tied leaders.
#[derive(Debug, Clone)]
pub struct RankedHands<K> {
    pub ranked: Vec<(K, HandEvaluation)>,
    pub winners: Vec<K>,
}

/// Evaluates each `(key, hole cards)` entry against a shared board and returns
/// them strongest first. `winners` holds every key tied with the best hand, in
/// input order, so chops of any width are reported.
pub fn rank_many<K: Clone>(
    entries: &[(K, Vec<Card>)],
    community: &[Card],
) -> Result<RankedHands<K>, GameError> {
    let mut ranked = entries
        .iter()
        .map(|(k, hole)| evaluate(hole, community).map(|ev| (k.clone(), ev)))
        .collect::<Result<Vec<_>, _>>()?;
    // stable: ties keep input order
    ranked.sort_by(|a, b| compare_hands(&b.1.strength, &a.1.strength));

    let winners = match ranked.first() {
        Some((_, top)) => ranked
            .iter()
            .take_while(|(_, ev)| compare_hands(&ev.strength, &top.strength).is_eq())
            .map(|(k, _)| k.clone())
            .collect(),
        None => Vec::new(),
    };
    Ok(RankedHands { ranked, winners })
}
