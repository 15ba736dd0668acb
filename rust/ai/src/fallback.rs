//! Turning failed or illegal provider answers into legal actions.

use referee_engine::player::PlayerAction;
use referee_engine::rules::{ActionKind, LegalActions};
use tracing::warn;

use crate::ProviderError;

/// Driver-side policy for decisions the table would reject.
///
/// - a provider error becomes the default action (check if allowed, else fold)
/// - a raise below the minimum is lifted to the minimum
/// - a raise larger than the stack allows becomes all-in
/// - anything else the table would refuse becomes the default action
#[derive(Debug, Clone, Copy, Default)]
pub struct FallbackPolicy;

impl FallbackPolicy {
    /// Check if available, else fold.
    pub fn default_action(&self, legal: &LegalActions) -> PlayerAction {
        if legal.allows(ActionKind::Check) {
            PlayerAction::Check
        } else {
            PlayerAction::Fold
        }
    }

    /// Returns an action `legal` permits, as close to `decision` as possible.
    ///
    /// # Example
    ///
    /// ```rust
    /// use referee_ai::{FallbackPolicy, ProviderError};
    /// use referee_engine::player::PlayerAction;
    /// use referee_engine::rules::legal_actions;
    ///
    /// let legal = legal_actions(500, 0, 20, 20, 30);
    /// let policy = FallbackPolicy;
    /// assert_eq!(policy.coerce(Ok(PlayerAction::Raise(5)), &legal), PlayerAction::Raise(20));
    /// assert_eq!(policy.coerce(Ok(PlayerAction::Raise(900)), &legal), PlayerAction::AllIn);
    /// let failed = Err(ProviderError::Unavailable("timeout".into()));
    /// assert_eq!(policy.coerce(failed, &legal), PlayerAction::Fold);
    /// ```
    pub fn coerce(
        &self,
        decision: Result<PlayerAction, ProviderError>,
        legal: &LegalActions,
    ) -> PlayerAction {
        let requested = match decision {
            Ok(action) => action,
            Err(err) => {
                let fallback = self.default_action(legal);
                warn!(error = %err, ?fallback, "provider failed, using fallback");
                return fallback;
            }
        };
        if legal.permits(&requested) {
            return requested;
        }

        let adjusted = match requested {
            PlayerAction::Raise(amount) if amount > legal.max_raise => PlayerAction::AllIn,
            PlayerAction::Raise(_) if legal.min_raise <= legal.max_raise => {
                PlayerAction::Raise(legal.min_raise)
            }
            PlayerAction::Raise(_) => PlayerAction::AllIn,
            _ => self.default_action(legal),
        };
        let action = if legal.permits(&adjusted) {
            adjusted
        } else {
            self.default_action(legal)
        };
        warn!(?requested, ?action, "illegal decision coerced");
        action
    }
}
