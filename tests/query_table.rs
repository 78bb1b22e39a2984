//! Table-driven checks of every derived query against every mode.

use actor_fsm::{ActorState, ActorStateMachine};

use ActorState::*;

/// Expected query results for one mode.
struct Row {
    state: ActorState,
    timer_should_run: bool,
    active: bool,
    should_handle_new_input: bool,
    is_firing: bool,
    can_fire: bool,
    show_weapon: bool,
    can_move: bool,
    is_playing: bool,
    name: &'static str,
}

#[rustfmt::skip]
const TABLE: [Row; 10] = [
    Row { state: Idle,            timer_should_run: true,  active: true,  should_handle_new_input: true,  is_firing: false, can_fire: true,  show_weapon: true,  can_move: true,  is_playing: true,  name: "Idle" },
    Row { state: InMotion,        timer_should_run: true,  active: true,  should_handle_new_input: true,  is_firing: false, can_fire: false, show_weapon: false, can_move: false, is_playing: true,  name: "InMotion" },
    Row { state: Firing,          timer_should_run: false, active: true,  should_handle_new_input: false, is_firing: true,  can_fire: false, show_weapon: true,  can_move: false, is_playing: false, name: "Firing" },
    Row { state: MovingLeft,      timer_should_run: true,  active: true,  should_handle_new_input: true,  is_firing: false, can_fire: false, show_weapon: false, can_move: false, is_playing: false, name: "MovingLeft" },
    Row { state: MovingRight,     timer_should_run: true,  active: true,  should_handle_new_input: true,  is_firing: false, can_fire: false, show_weapon: false, can_move: false, is_playing: false, name: "MovingRight" },
    Row { state: AimingUp,        timer_should_run: true,  active: true,  should_handle_new_input: true,  is_firing: false, can_fire: false, show_weapon: true,  can_move: false, is_playing: false, name: "AimingUp" },
    Row { state: AimingDown,      timer_should_run: true,  active: true,  should_handle_new_input: true,  is_firing: false, can_fire: false, show_weapon: true,  can_move: false, is_playing: false, name: "AimingDown" },
    Row { state: Getaway,         timer_should_run: true,  active: true,  should_handle_new_input: true,  is_firing: false, can_fire: false, show_weapon: false, can_move: true,  is_playing: true,  name: "Getaway" },
    Row { state: InactiveWaiting, timer_should_run: false, active: true,  should_handle_new_input: false, is_firing: false, can_fire: false, show_weapon: false, can_move: false, is_playing: true,  name: "InactiveWaiting" },
    Row { state: Inactive,        timer_should_run: false, active: false, should_handle_new_input: true,  is_firing: false, can_fire: false, show_weapon: false, can_move: false, is_playing: false, name: "Inactive" },
];

#[test]
fn table_covers_every_mode() {
    let covered: Vec<ActorState> = TABLE.iter().map(|row| row.state).collect();
    assert_eq!(covered, ActorState::ALL.to_vec());
}

#[test]
fn fresh_machine_answers_match_table() {
    for row in &TABLE {
        let machine = ActorStateMachine::new(row.state);
        assert_row(&machine, row);
        assert_eq!(machine.state_prior_to_motion(), Idle, "{}", row.name);
    }
}

#[test]
fn transitioned_machine_answers_match_table() {
    // Reach each mode from every other mode to show answers depend on
    // the current mode only.
    for from in ActorState::ALL {
        for row in &TABLE {
            let mut machine = ActorStateMachine::new(from);
            machine.transition(row.state);
            assert_row(&machine, row);
        }
    }
}

#[test]
fn prior_to_motion_after_motion_entry() {
    for from in ActorState::ALL {
        for row in &TABLE {
            let mut machine = ActorStateMachine::new(from);
            machine.transition(row.state);

            let expected = if row.state.is_motion() { from } else { Idle };
            assert_eq!(
                machine.state_prior_to_motion(),
                expected,
                "{} -> {}",
                from,
                row.name
            );
        }
    }
}

fn assert_row(machine: &ActorStateMachine, row: &Row) {
    let name = row.name;
    assert_eq!(machine.timer_should_run(), row.timer_should_run, "timer_should_run({name})");
    assert_eq!(machine.is_active(), row.active, "is_active({name})");
    assert_eq!(machine.should_update(), row.active, "should_update({name})");
    assert_eq!(
        machine.should_handle_new_input(),
        row.should_handle_new_input,
        "should_handle_new_input({name})"
    );
    assert_eq!(machine.is_firing(), row.is_firing, "is_firing({name})");
    assert_eq!(machine.can_fire(), row.can_fire, "can_fire({name})");
    assert_eq!(machine.show_weapon(), row.show_weapon, "show_weapon({name})");
    assert_eq!(machine.can_move(), row.can_move, "can_move({name})");
    assert_eq!(machine.is_playing(), row.is_playing, "is_playing({name})");
    assert_eq!(machine.state_name(), row.name);
}
