use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha20Rng;
use referee_ai::{create_provider, provider_names, ActionProvider, FallbackPolicy, ProviderError};
use referee_engine::engine::{Table, TableConfig};
use referee_engine::player::{PlayerAction, PlayerId};
use referee_engine::rules::LegalActions;
use referee_engine::view::TableView;
use std::sync::Mutex;

/// Answers with garbage most of the time.
struct Erratic {
    rng: Mutex<ChaCha20Rng>,
}

impl ActionProvider for Erratic {
    fn decide(
        &self,
        _view: &TableView,
        _player: &PlayerId,
        _legal: &LegalActions,
    ) -> Result<PlayerAction, ProviderError> {
        let mut rng = self.rng.lock().map_err(|_| ProviderError::Unavailable("poisoned".into()))?;
        Ok(match rng.random_range(0..6) {
            0 => return Err(ProviderError::Rejected("no opinion".into())),
            1 => PlayerAction::Check,
            2 => PlayerAction::Call,
            3 => PlayerAction::Raise(rng.random_range(0..5000)),
            4 => PlayerAction::AllIn,
            _ => PlayerAction::Fold,
        })
    }

    fn name(&self) -> &str {
        "Erratic"
    }
}

fn play(providers: Vec<Box<dyn ActionProvider>>, hands: usize) -> Table {
    let mut table = Table::new(TableConfig {
        small_blind: 5,
        big_blind: 10,
        seed: Some(2024),
        ..TableConfig::default()
    })
    .unwrap();
    for (i, p) in providers.iter().enumerate() {
        table.add_player(format!("p{i}").as_str(), p.name(), 500).unwrap();
    }
    let policy = FallbackPolicy;
    for _ in 0..hands {
        if table.start_hand().is_err() {
            break;
        }
        while let Some(actor) = table.current_player().cloned() {
            let seat = table.players().iter().position(|p| p.id() == &actor).unwrap();
            let legal = table.legal_actions().unwrap();
            let view = table.view(Some(&actor));
            let decision = providers[seat].decide(&view, &actor, &legal);
            let action = policy.coerce(decision, &legal);
            table
                .apply_action(&actor, action)
                .unwrap_or_else(|e| panic!("{action:?} rejected: {e}"));
        }
    }
    table
}

#[test]
fn factory_knows_every_listed_name() {
    for name in provider_names() {
        assert!(create_provider(name).is_ok(), "{name}");
    }
    assert_eq!(
        create_provider("nobody").err(),
        Some(ProviderError::Unavailable("nobody".into()))
    );
}

#[test]
fn reference_providers_play_legal_matches() {
    let providers = ["baseline", "baseline", "calling", "check_fold"]
        .iter()
        .map(|n| create_provider(n).unwrap())
        .collect();
    let table = play(providers, 50);
    assert_eq!(table.total_chips(), 2000);
    assert!(table.hand_number() >= 1);
}

#[test]
fn fallback_makes_erratic_providers_legal() {
    let providers: Vec<Box<dyn ActionProvider>> = (0..3)
        .map(|i| {
            Box::new(Erratic {
                rng: Mutex::new(ChaCha20Rng::seed_from_u64(i)),
            }) as Box<dyn ActionProvider>
        })
        .collect();
    let table = play(providers, 100);
    assert_eq!(table.total_chips(), 1500);
}

#[test]
fn baseline_answers_are_already_legal() {
    let ai = create_provider("baseline").unwrap();
    let mut table = Table::new(TableConfig {
        seed: Some(9),
        ..TableConfig::default()
    })
    .unwrap();
    for id in ["a", "b", "c"] {
        table.add_player(id, id, 1000).unwrap();
    }
    for _ in 0..20 {
        if table.start_hand().is_err() {
            break;
        }
        while let Some(actor) = table.current_player().cloned() {
            let legal = table.legal_actions().unwrap();
            let action = ai.decide(&table.view(Some(&actor)), &actor, &legal).unwrap();
            assert!(legal.permits(&action), "{action:?} not permitted");
            table.apply_action(&actor, action).unwrap();
        }
    }
}
