//! # referee-ai: Action Providers
//!
//! Decision-makers that sit outside the rules engine. A driver asks the table
//! for its redacted view and the legal-action descriptor, hands both to an
//! [`ActionProvider`], and feeds the answer back through
//! [`Table::apply_action`](referee_engine::engine::Table::apply_action).
//!
//! The engine never substitutes actions on its own. A provider that fails or
//! answers with something illegal is the driver's problem, and
//! [`FallbackPolicy`] is the explicit way to turn such an answer into a legal one.
//!
//! ## Core Components
//!
//! - [`ActionProvider`] - Trait every decision-maker implements
//! - [`baseline`] - Hand-strength / pot-odds heuristic
//! - [`simple`] - Calling station and check-or-fold providers
//! - [`fallback`] - Coercion of failed or illegal decisions
//! - [`create_provider`] - Factory by provider name
//!
//! ## Quick Start
//!
//! ```rust
//! use referee_ai::{create_provider, FallbackPolicy};
//! use referee_engine::engine::{Table, TableConfig};
//!
//! let provider = create_provider("baseline").unwrap();
//! let mut table = Table::new(TableConfig { seed: Some(42), ..TableConfig::default() }).unwrap();
//! table.add_player("p1", "Ann", 1000).unwrap();
//! table.add_player("p2", "Ben", 1000).unwrap();
//! table.start_hand().unwrap();
//!
//! let actor = table.current_player().cloned().unwrap();
//! let legal = table.legal_actions().unwrap();
//! let decision = provider.decide(&table.view(Some(&actor)), &actor, &legal);
//! let action = FallbackPolicy::default().coerce(decision, &legal);
//! table.apply_action(&actor, action).unwrap();
//! ```
//!
//! ## Provider Names
//!
//! - `"baseline"` - [`BaselineProvider`](baseline::BaselineProvider)
//! - `"calling"` - [`CallingStation`](simple::CallingStation)
//! - `"check_fold"` - [`CheckOrFold`](simple::CheckOrFold)

use referee_engine::player::{PlayerAction, PlayerId};
use referee_engine::rules::LegalActions;
use referee_engine::view::TableView;
use thiserror::Error;

pub mod baseline;
pub mod fallback;
pub mod simple;

pub use fallback::FallbackPolicy;

/// Why a provider could not produce a decision.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ProviderError {
    /// No provider by that name, or it could not answer in time
    #[error("provider unavailable: {0}")]
    Unavailable(String),
    /// The provider's input or output could not be understood
    #[error("unparseable decision: {0}")]
    Unparseable(String),
    /// The provider declined to decide
    #[error("decision rejected: {0}")]
    Rejected(String),
}

/// Capability every decision-maker implements.
///
/// # Example Implementation
///
/// ```rust
/// use referee_ai::{ActionProvider, ProviderError};
/// use referee_engine::player::{PlayerAction, PlayerId};
/// use referee_engine::rules::LegalActions;
/// use referee_engine::view::TableView;
///
/// struct AlwaysFold;
///
/// impl ActionProvider for AlwaysFold {
///     fn decide(
///         &self,
///         _view: &TableView,
///         _player: &PlayerId,
///         _legal: &LegalActions,
///     ) -> Result<PlayerAction, ProviderError> {
///         Ok(PlayerAction::Fold)
///     }
///
///     fn name(&self) -> &str {
///         "AlwaysFold"
///     }
/// }
/// ```
pub trait ActionProvider: Send + Sync {
    /// Chooses an action for `player` from what `view` shows and `legal` allows.
    ///
    /// # Arguments
    ///
    /// * `view` - Table as seen from `player`'s seat (other hands hidden)
    /// * `player` - The seat to act
    /// * `legal` - What the table will accept right now
    fn decide(
        &self,
        view: &TableView,
        player: &PlayerId,
        legal: &LegalActions,
    ) -> Result<PlayerAction, ProviderError>;

    fn name(&self) -> &str;
}

/// Builds a provider by name.
///
/// # Errors
///
/// [`ProviderError::Unavailable`] for an unknown name.
///
/// # Example
///
/// ```rust
/// use referee_ai::create_provider;
///
/// let ai = create_provider("baseline").unwrap();
/// assert_eq!(ai.name(), "BaselineProvider");
/// assert!(create_provider("oracle").is_err());
/// ```
pub fn create_provider(name: &str) -> Result<Box<dyn ActionProvider>, ProviderError> {
    match name {
        "baseline" => Ok(Box::new(baseline::BaselineProvider::new())),
        "calling" => Ok(Box::new(simple::CallingStation)),
        "check_fold" => Ok(Box::new(simple::CheckOrFold)),
        other => Err(ProviderError::Unavailable(other.to_string())),
    }
}

/// Names accepted by [`create_provider`].
pub fn provider_names() -> &'static [&'static str] {
    &["baseline", "calling", "check_fold"]
}
