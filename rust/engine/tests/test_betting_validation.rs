use referee_engine::errors::{ActionViolation, GameError};
use referee_engine::player::PlayerAction;
use referee_engine::rules::{legal_actions, validate_action, ActionKind, ValidatedAction};

#[test]
fn check_only_when_nothing_owed() {
    assert_eq!(
        validate_action(500, 0, 20, PlayerAction::Check),
        Ok(ValidatedAction::Check)
    );
    assert_eq!(
        validate_action(500, 20, 20, PlayerAction::Check),
        Err(GameError::IllegalAction(ActionViolation::CannotCheck { to_call: 20 }))
    );
}

#[test]
fn call_is_capped_at_stack() {
    assert_eq!(
        validate_action(500, 20, 20, PlayerAction::Call),
        Ok(ValidatedAction::Call(20))
    );
    assert_eq!(
        validate_action(15, 20, 20, PlayerAction::Call),
        Ok(ValidatedAction::Call(15))
    );
    assert_eq!(
        validate_action(500, 0, 20, PlayerAction::Call),
        Err(GameError::IllegalAction(ActionViolation::NothingToCall))
    );
}

#[test]
fn raise_must_meet_minimum_unless_all_in() {
    assert_eq!(
        validate_action(500, 20, 20, PlayerAction::Raise(20)),
        Ok(ValidatedAction::Raise {
            increment: 20,
            total: 40
        })
    );
    assert_eq!(
        validate_action(500, 20, 20, PlayerAction::Raise(19)),
        Err(GameError::IllegalAction(ActionViolation::RaiseTooSmall {
            amount: 19,
            minimum: 20
        }))
    );
    // 30 behind after calling 20: a 10 raise is short but all-in
    assert_eq!(
        validate_action(30, 20, 20, PlayerAction::Raise(10)),
        Ok(ValidatedAction::Raise {
            increment: 10,
            total: 30
        })
    );
}

#[test]
fn raise_beyond_stack_is_rejected() {
    assert_eq!(
        validate_action(100, 20, 20, PlayerAction::Raise(100)),
        Err(GameError::IllegalAction(ActionViolation::InsufficientChips {
            required: 120,
            stack: 100
        }))
    );
}

#[test]
fn all_in_commits_whole_stack() {
    assert_eq!(
        validate_action(73, 20, 20, PlayerAction::AllIn),
        Ok(ValidatedAction::AllIn(73))
    );
    assert_eq!(
        validate_action(0, 20, 20, PlayerAction::AllIn),
        Err(GameError::IllegalAction(ActionViolation::NothingToCommit))
    );
}

#[test]
fn fold_is_always_legal() {
    assert_eq!(
        validate_action(0, 0, 20, PlayerAction::Fold),
        Ok(ValidatedAction::Fold)
    );
}

#[test]
fn legal_actions_facing_a_bet() {
    let legal = legal_actions(300, 0, 40, 20, 70);
    assert_eq!(
        legal.actions,
        vec![
            ActionKind::Fold,
            ActionKind::Call,
            ActionKind::Raise,
            ActionKind::AllIn
        ]
    );
    assert_eq!(legal.to_call, 40);
    assert_eq!(legal.min_raise_total, 60);
    assert_eq!(legal.max_raise, 260);
    assert!(legal.permits(&PlayerAction::Raise(20)));
    assert!(legal.permits(&PlayerAction::Raise(260)));
    assert!(!legal.permits(&PlayerAction::Raise(19)));
    assert!(!legal.permits(&PlayerAction::Check));
}

#[test]
fn legal_actions_short_stack_cannot_raise() {
    let legal = legal_actions(30, 0, 40, 20, 70);
    assert!(!legal.allows(ActionKind::Raise));
    assert!(legal.allows(ActionKind::Call));
    assert!(legal.allows(ActionKind::AllIn));
    assert_eq!(legal.to_call, 30);
    assert_eq!(legal.max_raise, 0);
}

#[test]
fn legal_actions_unopened_pot() {
    let legal = legal_actions(300, 0, 0, 20, 30);
    assert!(legal.allows(ActionKind::Check));
    assert!(!legal.allows(ActionKind::Call));
    assert_eq!(legal.to_call, 0);
    assert_eq!(legal.min_raise_total, 20);
}
