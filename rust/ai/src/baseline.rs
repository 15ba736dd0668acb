//! Baseline provider for simulations.
//!
//! A simple rule-based strategy with hand evaluation and pot odds calculation.
//! Deterministic, so matches between baseline seats replay exactly.

use crate::{ActionProvider, ProviderError};
use referee_engine::cards::Card;
use referee_engine::game::Stage;
use referee_engine::hand::{evaluate, Category};
use referee_engine::player::{PlayerAction, PlayerId};
use referee_engine::rules::{ActionKind, LegalActions};
use referee_engine::view::{TableView, HIDDEN_CARD};

/// Simple baseline provider for testing and comparison.
///
/// # Strategy
///
/// **Preflop:**
/// - Strong hands (high pairs 77+, AK, AQ): Raise or call
/// - Medium hands (suited connectors, Ax, small pairs): Call if cheap
/// - Weak hands: Fold to raises, check if free
///
/// **Postflop:**
/// - Strong hands (Two Pair+): Bet or call
/// - Medium hands (One Pair): Check or call small bets
/// - Draws and weak hands: Calculate pot odds, fold if unfavorable
///
/// Every answer is drawn from the legal-action descriptor, so the table never
/// needs to coerce it.
///
/// # Example
///
/// ```rust
/// use referee_ai::baseline::BaselineProvider;
/// use referee_ai::ActionProvider;
/// use referee_engine::engine::{Table, TableConfig};
///
/// let ai = BaselineProvider::new();
/// let mut table = Table::new(TableConfig { seed: Some(42), ..TableConfig::default() }).unwrap();
/// table.add_player("p1", "Ann", 1000).unwrap();
/// table.add_player("p2", "Ben", 1000).unwrap();
/// table.start_hand().unwrap();
///
/// let actor = table.current_player().cloned().unwrap();
/// let legal = table.legal_actions().unwrap();
/// let action = ai.decide(&table.view(Some(&actor)), &actor, &legal).unwrap();
/// assert!(legal.permits(&action));
/// ```
#[derive(Debug, Clone, Default)]
pub struct BaselineProvider;

impl BaselineProvider {
    pub fn new() -> Self {
        Self
    }

    /// Evaluate preflop hand strength on a scale of 0-10.
    ///
    /// - 9-10: Premium hands (AA, KK, QQ, JJ, AKs)
    /// - 7-8: Strong hands (TT-99, AK, AQ, KQ)
    /// - 5-6: Medium hands (88-77, AJ, suited connectors)
    /// - 3-4: Marginal hands (66-22, Ax, suited cards)
    /// - 0-2: Weak hands (offsuit low cards)
    fn evaluate_preflop_strength(hole_cards: [Card; 2]) -> u8 {
        let [c1, c2] = hole_cards;
        let r1 = c1.rank.value();
        let r2 = c2.rank.value();
        let (high, low) = if r1 > r2 { (r1, r2) } else { (r2, r1) };
        let suited = c1.suit == c2.suit;
        let pick = |s: u8, o: u8| if suited { s } else { o };

        if r1 == r2 {
            return match high {
                13..=14 => 10, // AA, KK
                11..=12 => 9,  // JJ, QQ
                10 => 8,
                9 => 7,
                8 => 6,
                7 => 5,
                _ => 4, // 66-22
            };
        }

        match (high, low) {
            (14, 13) => pick(10, 8),
            (14, 12) => pick(8, 7),
            (14, 11) => pick(7, 6),
            (14, 10) => pick(6, 5),
            (14, _) => pick(5, 4),
            (13, 12) => pick(7, 6),
            (13, 11) => pick(6, 5),
            (13, 10) => pick(5, 4),
            (12, 11) => pick(6, 5),
            (12, 10) => pick(5, 4),
            // suited connectors and one-gappers
            _ if suited && high - low <= 2 => {
                if high >= 9 {
                    5
                } else {
                    4
                }
            }
            _ if high >= 11 && low >= 9 => 4,
            _ => 2,
        }
    }

    /// Postflop strength on the same 0-10 scale, or `None` before the flop.
    fn evaluate_postflop_strength(hole_cards: [Card; 2], board: &[Card]) -> Option<u8> {
        if board.len() < 3 {
            return None;
        }
        let best = evaluate(&hole_cards, board).ok()?;
        let base: u8 = match best.category() {
            Category::HighCard => 1,
            Category::OnePair => 3,
            Category::TwoPair => 5,
            Category::ThreeOfAKind => 6,
            Category::Straight => 7,
            Category::Flush => 8,
            Category::FullHouse => 9,
            Category::FourOfAKind | Category::StraightFlush | Category::RoyalFlush => 10,
        };
        let kicker_boost = u8::from(best.strength.kickers[0] >= 12);
        Some((base + kicker_boost).min(10))
    }

    /// Pot odds as pot / (pot + call); 1.0 when the action is free.
    fn calculate_pot_odds(pot_size: u32, call_amount: u32) -> f32 {
        if call_amount == 0 {
            return 1.0;
        }
        pot_size as f32 / (pot_size + call_amount) as f32
    }

    /// A raise of roughly `target`, clamped into the legal range.
    fn sized_raise(legal: &LegalActions, target: u32) -> Option<PlayerAction> {
        if !legal.allows(ActionKind::Raise) {
            return None;
        }
        let action = PlayerAction::Raise(target.max(legal.min_raise).min(legal.max_raise));
        legal.permits(&action).then_some(action)
    }

    fn decide_action(hand_strength: u8, legal: &LegalActions) -> PlayerAction {
        if legal.to_call == 0 {
            return Self::decide_no_bet_action(hand_strength, legal);
        }

        let pot_odds = Self::calculate_pot_odds(legal.pot, legal.to_call);

        // calling would already put us all-in
        if legal.to_call >= legal.stack {
            return if hand_strength >= 7 {
                PlayerAction::AllIn
            } else {
                PlayerAction::Fold
            };
        }

        match hand_strength {
            9..=10 => Self::sized_raise(legal, legal.pot / 2).unwrap_or(PlayerAction::Call),
            7..=8 => PlayerAction::Call,
            5..=6 => {
                if pot_odds >= 0.3 || legal.to_call <= legal.pot / 4 {
                    PlayerAction::Call
                } else {
                    PlayerAction::Fold
                }
            }
            3..=4 => {
                if pot_odds >= 0.4 || legal.to_call <= legal.pot / 6 {
                    PlayerAction::Call
                } else {
                    PlayerAction::Fold
                }
            }
            _ => PlayerAction::Fold,
        }
    }

    fn decide_no_bet_action(hand_strength: u8, legal: &LegalActions) -> PlayerAction {
        let bet = match hand_strength {
            9..=10 => Self::sized_raise(legal, legal.pot * 2 / 3),
            7..=8 => Self::sized_raise(legal, legal.pot / 2),
            _ => None,
        };
        bet.unwrap_or(PlayerAction::Check)
    }
}

/// Parses the seat's own hole cards out of a view. `None` when they are
/// hidden or not dealt.
fn own_hole_cards(view: &TableView, player: &PlayerId) -> Result<Option<[Card; 2]>, ProviderError> {
    let Some(seat) = view.player(player) else {
        return Err(ProviderError::Rejected(format!("{player} is not in the view")));
    };
    match seat.hole_cards.as_slice() {
        [a, b] if a != HIDDEN_CARD && b != HIDDEN_CARD => {
            let parse = |s: &str| Card::parse(s).map_err(|e| ProviderError::Unparseable(e.to_string()));
            Ok(Some([parse(a)?, parse(b)?]))
        }
        _ => Ok(None),
    }
}

impl ActionProvider for BaselineProvider {
    /// 1. Determine the street (preflop vs postflop)
    /// 2. Evaluate hand strength appropriately
    /// 3. Decide from hand strength and pot odds
    fn decide(
        &self,
        view: &TableView,
        player: &PlayerId,
        legal: &LegalActions,
    ) -> Result<PlayerAction, ProviderError> {
        let Some(hole_cards) = own_hole_cards(view, player)? else {
            return Ok(if legal.to_call == 0 {
                PlayerAction::Check
            } else {
                PlayerAction::Fold
            });
        };
        let board = view
            .community_cards
            .iter()
            .map(|s| Card::parse(s).map_err(|e| ProviderError::Unparseable(e.to_string())))
            .collect::<Result<Vec<_>, _>>()?;

        let hand_strength = if view.stage == Stage::Preflop {
            Self::evaluate_preflop_strength(hole_cards)
        } else {
            Self::evaluate_postflop_strength(hole_cards, &board)
                .unwrap_or_else(|| Self::evaluate_preflop_strength(hole_cards))
        };

        Ok(Self::decide_action(hand_strength, legal))
    }

    fn name(&self) -> &str {
        "BaselineProvider"
    }
}
