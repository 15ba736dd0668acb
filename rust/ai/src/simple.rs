//! Providers with fixed, hand-independent behaviour.

use crate::{ActionProvider, ProviderError};
use referee_engine::player::{PlayerAction, PlayerId};
use referee_engine::rules::{ActionKind, LegalActions};
use referee_engine::view::TableView;

/// Never folds, never raises: checks when free, otherwise calls.
#[derive(Debug, Clone, Copy, Default)]
pub struct CallingStation;

impl ActionProvider for CallingStation {
    fn decide(
        &self,
        _view: &TableView,
        _player: &PlayerId,
        legal: &LegalActions,
    ) -> Result<PlayerAction, ProviderError> {
        if legal.allows(ActionKind::Check) {
            Ok(PlayerAction::Check)
        } else if legal.allows(ActionKind::Call) {
            Ok(PlayerAction::Call)
        } else {
            Ok(PlayerAction::Fold)
        }
    }

    fn name(&self) -> &str {
        "CallingStation"
    }
}

/// The most passive legal action: check, or fold when a check is not allowed.
#[derive(Debug, Clone, Copy, Default)]
pub struct CheckOrFold;

impl ActionProvider for CheckOrFold {
    fn decide(
        &self,
        _view: &TableView,
        _player: &PlayerId,
        legal: &LegalActions,
    ) -> Result<PlayerAction, ProviderError> {
        Ok(if legal.allows(ActionKind::Check) {
            PlayerAction::Check
        } else {
            PlayerAction::Fold
        })
    }

    fn name(&self) -> &str {
        "CheckOrFold"
    }
}
