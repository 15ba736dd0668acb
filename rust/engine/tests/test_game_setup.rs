use referee_engine::engine::{Table, TableConfig};
use referee_engine::errors::{ActionViolation, GameError};
use referee_engine::game::Stage;
use referee_engine::player::{PlayerAction, PlayerId};

fn config() -> TableConfig {
    TableConfig {
        small_blind: 5,
        big_blind: 10,
        seed: Some(3),
        ..TableConfig::default()
    }
}

fn seated(stacks: &[(&str, u32)]) -> Table {
    let mut table = Table::new(config()).expect("valid config");
    for (id, stack) in stacks {
        table.add_player(*id, *id, *stack).expect("seat");
    }
    table
}

fn pid(s: &str) -> PlayerId {
    PlayerId::from(s)
}

#[test]
fn heads_up_button_posts_small_blind_and_acts_first() {
    let mut table = seated(&[("a", 500), ("b", 500)]);
    let posting = table.start_hand().unwrap();
    assert_eq!(posting.small_blind, (pid("a"), 5));
    assert_eq!(posting.big_blind, (pid("b"), 10));
    assert_eq!(table.current_player(), Some(&pid("a")));

    table.apply_action(&pid("a"), PlayerAction::Call).unwrap();
    table.apply_action(&pid("b"), PlayerAction::Check).unwrap();
    assert_eq!(table.stage(), Stage::Flop);
    // big blind acts first after the flop
    assert_eq!(table.current_player(), Some(&pid("b")));
}

#[test]
fn start_needs_two_funded_players() {
    let mut table = seated(&[("a", 500)]);
    assert_eq!(
        table.start_hand(),
        Err(GameError::InsufficientPlayers { available: 1 })
    );
    table.add_player("b", "b", 0).unwrap();
    assert_eq!(
        table.start_hand(),
        Err(GameError::InsufficientPlayers { available: 1 })
    );
    assert_eq!(table.stage(), Stage::Idle);
    assert_eq!(table.hand_number(), 0);
}

#[test]
fn busted_players_sit_out() {
    let mut table = seated(&[("a", 500), ("b", 0), ("c", 500)]);
    let posting = table.start_hand().unwrap();
    // two funded seats play heads-up
    assert_eq!(posting.small_blind.0, pid("a"));
    assert_eq!(posting.big_blind.0, pid("c"));
    let b = table.player(&pid("b")).unwrap();
    assert!(!b.is_active());
    assert!(b.hole_cards().is_none());
}

#[test]
fn seating_rules() {
    let mut table = Table::new(TableConfig {
        max_players: 2,
        ..config()
    })
    .unwrap();
    table.add_player("a", "Ann", 100).unwrap();
    assert!(matches!(
        table.add_player("a", "Again", 100),
        Err(GameError::SeatingError(_))
    ));
    table.add_player("b", "Ben", 100).unwrap();
    assert!(matches!(
        table.add_player("c", "Cal", 100),
        Err(GameError::SeatingError(_))
    ));
    assert!(matches!(
        table.remove_player(&pid("zed")),
        Err(GameError::SeatingError(_))
    ));
}

#[test]
fn no_seating_changes_mid_hand() {
    let mut table = seated(&[("a", 500), ("b", 500)]);
    table.start_hand().unwrap();
    assert!(matches!(
        table.add_player("c", "c", 500),
        Err(GameError::SeatingError(_))
    ));
    assert!(matches!(
        table.remove_player(&pid("a")),
        Err(GameError::SeatingError(_))
    ));
    assert_eq!(
        table.start_hand(),
        Err(GameError::IllegalAction(ActionViolation::HandInProgress))
    );
    assert_eq!(table.players().len(), 2);
}

#[test]
fn seating_between_hands() {
    let mut table = seated(&[("a", 500), ("b", 500)]);
    table.start_hand().unwrap();
    table.apply_action(&pid("a"), PlayerAction::Fold).unwrap();
    assert_eq!(table.stage(), Stage::HandComplete);

    table.add_player("c", "c", 500).unwrap();
    let left = table.remove_player(&pid("a")).unwrap();
    assert_eq!(left.stack(), 495);
    assert_eq!(table.players().len(), 2);
    assert!(table.start_hand().is_ok());
}

#[test]
fn antes_are_dead_money() {
    let mut table = Table::new(TableConfig { ante: 2, ..config() }).unwrap();
    for id in ["a", "b", "c"] {
        table.add_player(id, id, 500).unwrap();
    }
    let posting = table.start_hand().unwrap();
    assert_eq!(posting.antes, 6);
    assert_eq!(table.pot(), 21);
    assert_eq!(table.current_bet(), 10);
    let bb = table.player(&pid("c")).unwrap();
    assert_eq!(bb.street_bet(), 10);
    assert_eq!(bb.committed(), 12);
    assert_eq!(bb.stack(), 488);
}

#[test]
fn short_big_blind_sets_the_bet_it_posted() {
    let mut table = seated(&[("a", 500), ("b", 500), ("c", 7)]);
    let posting = table.start_hand().unwrap();
    assert_eq!(posting.big_blind, (pid("c"), 7));
    assert_eq!(table.current_bet(), 7);
    assert!(table.player(&pid("c")).unwrap().is_all_in());
}

#[test]
fn invalid_config_is_rejected() {
    let err = Table::new(TableConfig {
        max_players: 1,
        ..config()
    })
    .unwrap_err();
    assert!(matches!(err, GameError::SeatingError(_)));
    assert!(Table::new(TableConfig {
        big_blind: 0,
        small_blind: 0,
        ..config()
    })
    .is_err());
}

#[test]
fn table_total_must_fit_in_a_pot() {
    let half = u32::MAX / 2 + 10;
    let mut table = seated(&[("a", half)]);
    assert!(matches!(
        table.add_player("b", "b", half),
        Err(GameError::SeatingError(_))
    ));
    assert_eq!(table.players().len(), 1);

    // exactly u32::MAX on the table still plays out
    let mut table = seated(&[("a", u32::MAX - 1000), ("b", 1000)]);
    table.start_hand().unwrap();
    table.apply_action(&pid("a"), PlayerAction::AllIn).unwrap();
    table.apply_action(&pid("b"), PlayerAction::AllIn).unwrap();
    assert_eq!(table.stage(), Stage::HandComplete);
    assert_eq!(table.total_chips(), u64::from(u32::MAX));
}

#[test]
fn removing_the_button_hands_it_to_the_next_seat() {
    let mut table = seated(&[("a", 500), ("b", 500), ("c", 500), ("d", 500)]);
    table.start_hand().unwrap();
    assert_eq!(table.players()[table.button()].id(), &pid("a"));
    for id in ["d", "a", "b"] {
        table.apply_action(&pid(id), PlayerAction::Fold).unwrap();
    }
    assert_eq!(table.stage(), Stage::HandComplete);

    table.remove_player(&pid("a")).unwrap();
    table.start_hand().unwrap();
    assert_eq!(table.players()[table.button()].id(), &pid("b"));
}
