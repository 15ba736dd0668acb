//! Match driver: seats one action provider per configured name and plays
//! hands until the configured count is reached or fewer than two seats
//! still have chips.
//!
//! # Examples
//!
//! ```no_run
//! use referee_cli::commands::sim::handle_sim_command;
//! use std::io;
//!
//! let mut out = io::stdout();
//! let mut err = io::stderr();
//!
//! // 200 hands, seed 42, three providers
//! let players = vec!["baseline".to_string(), "calling".to_string(), "check_fold".to_string()];
//! handle_sim_command(Some(200), Some(42), Some("data/sim.jsonl".to_string()), players, &mut out, &mut err).unwrap();
//! ```

use crate::config::{self, Config};
use crate::error::CliError;
use crate::ui;
use referee_ai::{create_provider, ActionProvider, FallbackPolicy};
use referee_engine::engine::{Table, TableConfig};
use referee_engine::errors::GameError;
use referee_engine::events::TableEvent;
use referee_engine::logger::HandLogger;
use referee_engine::player::PlayerId;
use std::collections::HashMap;
use std::io::Write;
use tracing::{debug, info};

/// Handle the sim command.
///
/// `hands`, `seed` and a non-empty `players` list override the loaded
/// configuration. Without any seed a random one is drawn and reported, so
/// every run can be replayed.
///
/// # Errors
///
/// Configuration problems and unknown provider names are reported before any
/// hand is dealt. Engine errors abort the match.
pub fn handle_sim_command(
    hands: Option<u64>,
    seed: Option<u64>,
    output: Option<String>,
    players: Vec<String>,
    out: &mut dyn Write,
    err: &mut dyn Write,
) -> Result<(), CliError> {
    let mut cfg = config::load_with_sources()?.config;
    if let Some(h) = hands {
        cfg.hands = h;
    }
    if seed.is_some() {
        cfg.seed = seed;
    }
    if !players.is_empty() {
        cfg.players = players;
    }
    config::validate(&cfg)?;

    let seed = cfg.seed.unwrap_or_else(rand::random);
    let mut table = Table::new(TableConfig {
        seed: Some(seed),
        ..cfg.table_config()
    })?;
    let providers = seat_providers(&cfg, &mut table)?;

    let mut logger = output.as_deref().map(HandLogger::create).transpose()?;
    let policy = FallbackPolicy::default();
    let mut played = 0u64;

    info!(seed, hands = cfg.hands, seats = providers.len(), "match started");
    for _ in 0..cfg.hands {
        match table.start_hand() {
            Ok(_) => {}
            Err(GameError::InsufficientPlayers { available }) => {
                ui::display_warning(
                    err,
                    &format!("match ended early: only {available} player(s) with chips"),
                )?;
                break;
            }
            Err(e) => return Err(e.into()),
        }

        while let Some(actor) = table.current_player().cloned() {
            let legal = table.legal_actions()?;
            let provider = providers
                .get(&actor)
                .ok_or_else(|| CliError::InvalidInput(format!("no provider seated for {actor}")))?;
            let decision = provider.decide(&table.view(Some(&actor)), &actor, &legal);
            let action = policy.coerce(decision, &legal);
            table.apply_action(&actor, action)?;
        }

        for event in table.drain_events() {
            match event {
                TableEvent::HandEnded(record) => {
                    if let Some(logger) = logger.as_mut() {
                        logger.write(&record)?;
                    }
                }
                other => debug!(event = ?other, "table event"),
            }
        }
        played += 1;
    }

    writeln!(out, "Simulated: {} hands (seed {})", played, seed)?;
    for p in table.players() {
        writeln!(out, "{} ({}): {}", p.id(), p.name(), p.stack())?;
    }
    if let Some(path) = output {
        writeln!(out, "Hand history: {}", path)?;
    }
    info!(played, "match finished");
    Ok(())
}

/// Seats `p1..pN` named after their providers.
fn seat_providers(
    cfg: &Config,
    table: &mut Table,
) -> Result<HashMap<PlayerId, Box<dyn ActionProvider>>, CliError> {
    let mut providers = HashMap::new();
    for (i, name) in cfg.players.iter().enumerate() {
        let provider = create_provider(name)?;
        let id = PlayerId::new(format!("p{}", i + 1));
        table.add_player(id.clone(), name.as_str(), cfg.starting_stack)?;
        providers.insert(id, provider);
    }
    Ok(providers)
}
