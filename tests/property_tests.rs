//! Property-based tests for the state machine and its history.
//!
//! These tests use proptest to verify properties hold across
//! many randomly generated operation sequences.

use proptest::prelude::*;
use stepwise::{StateMachine, TransitionError};

const STATES: [&str; 4] = ["idle", "running", "paused", "done"];
const EVENTS: [&str; 5] = ["start", "pause", "resume", "finish", "bogus"];

fn workflow() -> StateMachine {
    StateMachine::builder()
        .initial("idle")
        .state("idle", [("start", "running")])
        .state("running", [("pause", "paused"), ("finish", "done")])
        .state("paused", [("resume", "running"), ("finish", "done")])
        .state("done", [("start", "running")])
        .build()
        .unwrap()
}

#[derive(Clone, Debug)]
enum Forward {
    Jump(&'static str),
    Fire(&'static str),
}

prop_compose! {
    fn arbitrary_state()(index in 0..STATES.len()) -> &'static str {
        STATES[index]
    }
}

prop_compose! {
    fn arbitrary_event()(index in 0..EVENTS.len()) -> &'static str {
        EVENTS[index]
    }
}

fn arbitrary_forward() -> impl Strategy<Value = Forward> {
    prop_oneof![
        arbitrary_state().prop_map(Forward::Jump),
        arbitrary_event().prop_map(Forward::Fire),
    ]
}

// Apply a move, returning whether it succeeded.
fn apply(machine: &mut StateMachine, op: &Forward) -> bool {
    match op {
        Forward::Jump(state) => machine.set_state(state).is_ok(),
        Forward::Fire(event) => machine.fire(event).is_ok(),
    }
}

proptest! {
    #[test]
    fn undo_then_redo_is_inverse(ops in prop::collection::vec(arbitrary_forward(), 0..20)) {
        let mut machine = workflow();
        let succeeded = ops.iter().filter(|op| apply(&mut machine, op)).count();
        let reached = machine.current_state().to_string();

        for _ in 0..succeeded {
            prop_assert!(machine.undo());
        }
        prop_assert_eq!(machine.current_state(), "idle");
        prop_assert!(!machine.undo());

        for _ in 0..succeeded {
            prop_assert!(machine.redo());
        }
        prop_assert_eq!(machine.current_state(), reached.as_str());
        prop_assert!(!machine.redo());
    }

    #[test]
    fn set_state_reaches_any_declared_state(state in arbitrary_state()) {
        let mut machine = workflow();
        prop_assert!(machine.set_state(state).is_ok());
        prop_assert_eq!(machine.current_state(), state);
    }

    #[test]
    fn unknown_state_leaves_machine_untouched(
        ops in prop::collection::vec(arbitrary_forward(), 0..10),
        name in "[a-z]{1,8}",
    ) {
        prop_assume!(!STATES.contains(&name.as_str()));
        let mut machine = workflow();
        for op in &ops {
            apply(&mut machine, op);
        }
        let before = machine.current_state().to_string();
        let history = machine.history().clone();

        let result = machine.set_state(&name);

        prop_assert_eq!(result, Err(TransitionError::UnknownState { state: name.clone() }));
        prop_assert_eq!(machine.current_state(), before.as_str());
        prop_assert_eq!(machine.history(), &history);
    }

    #[test]
    fn fire_follows_table_or_fails_cleanly(
        start in arbitrary_state(),
        event in arbitrary_event(),
    ) {
        let mut machine = workflow();
        machine.set_state(start).unwrap();
        let expected = machine
            .states()
            .get(start)
            .and_then(|definition| definition.target(event))
            .map(str::to_string);
        let history = machine.history().clone();

        match expected {
            Some(target) => {
                prop_assert!(machine.fire(event).is_ok());
                prop_assert_eq!(machine.current_state(), target.as_str());
            }
            None => {
                prop_assert!(machine.fire(event).is_err());
                prop_assert_eq!(machine.current_state(), start);
                prop_assert_eq!(machine.history(), &history);
            }
        }
    }

    #[test]
    fn forward_move_discards_redo(
        ops in prop::collection::vec(arbitrary_forward(), 1..10),
        undos in 1usize..5,
        target in arbitrary_state(),
    ) {
        let mut machine = workflow();
        for op in &ops {
            apply(&mut machine, op);
        }
        for _ in 0..undos {
            machine.undo();
        }

        machine.set_state(target).unwrap();

        prop_assert!(!machine.can_redo());
        prop_assert!(!machine.redo());
        prop_assert_eq!(machine.current_state(), target);
    }

    #[test]
    fn reset_preserves_history(
        ops in prop::collection::vec(arbitrary_forward(), 0..15),
        undos in 0usize..5,
    ) {
        let mut machine = workflow();
        for op in &ops {
            apply(&mut machine, op);
        }
        for _ in 0..undos {
            machine.undo();
        }
        let history = machine.history().clone();

        machine.reset();

        prop_assert_eq!(machine.current_state(), machine.initial_state());
        prop_assert_eq!(machine.history(), &history);
    }

    #[test]
    fn clear_history_disables_undo_and_redo(
        ops in prop::collection::vec(arbitrary_forward(), 0..15),
        undos in 0usize..5,
    ) {
        let mut machine = workflow();
        for op in &ops {
            apply(&mut machine, op);
        }
        for _ in 0..undos {
            machine.undo();
        }
        let current = machine.current_state().to_string();

        machine.clear_history();

        prop_assert!(!machine.undo());
        prop_assert!(!machine.redo());
        prop_assert_eq!(machine.current_state(), current.as_str());
    }

    #[test]
    fn queries_are_side_effect_free(ops in prop::collection::vec(arbitrary_forward(), 0..10)) {
        let mut machine = workflow();
        for op in &ops {
            apply(&mut machine, op);
        }
        let current = machine.current_state().to_string();
        let history = machine.history().clone();

        let all = machine.list_states(None);
        prop_assert_eq!(&all, &machine.list_states(None));
        prop_assert_eq!(all, STATES.to_vec());

        for event in EVENTS {
            let filtered = machine.list_states(Some(event));
            prop_assert_eq!(&filtered, &machine.list_states(Some(event)));
        }

        prop_assert_eq!(machine.current_state(), current.as_str());
        prop_assert_eq!(machine.current_state(), current.as_str());
        prop_assert_eq!(machine.history(), &history);
    }
}
