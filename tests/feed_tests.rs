//! Transition feed behavior as seen by collaborators of the machine.

use actor_fsm::{ActorState, ActorStateMachine, ActorStateMachineBuilder};

#[test]
fn early_subscriber_receives_nothing_before_first_transition() {
    let mut machine = ActorStateMachine::new(ActorState::AimingUp);
    let mut sub = machine.subscribe();

    assert!(sub.try_next().is_none());
    assert!(machine.latest_change().is_none());
}

#[test]
fn every_subscriber_gets_the_same_sequence() {
    let mut machine = ActorStateMachine::new(ActorState::Idle);
    let mut subs: Vec<_> = (0..3).map(|_| machine.subscribe()).collect();

    machine.transition(ActorState::AimingUp);
    machine.transition(ActorState::Firing);
    machine.transition(ActorState::Idle);

    let expected = vec![
        (ActorState::Idle, ActorState::AimingUp),
        (ActorState::AimingUp, ActorState::Firing),
        (ActorState::Firing, ActorState::Idle),
    ];
    for sub in &mut subs {
        let pairs: Vec<_> = sub.drain().iter().map(|c| c.pair()).collect();
        assert_eq!(pairs, expected);
    }
}

#[test]
fn emission_is_visible_before_transition_returns() {
    let mut machine = ActorStateMachine::new(ActorState::Idle);
    let mut sub = machine.subscribe();

    let sequence = machine.transition(ActorState::Getaway).sequence;

    let change = sub.try_next().unwrap();
    assert_eq!(change.sequence, sequence);
    assert_eq!(change.to, machine.current_state());
}

#[test]
fn late_subscriber_is_not_given_older_history() {
    let mut machine = ActorStateMachine::new(ActorState::Idle);
    for state in [
        ActorState::MovingLeft,
        ActorState::MovingRight,
        ActorState::Idle,
        ActorState::Firing,
    ] {
        machine.transition(state);
    }

    let mut late = machine.subscribe();
    let replayed = late.drain();

    assert_eq!(replayed.len(), 1);
    assert_eq!(replayed[0].pair(), (ActorState::Idle, ActorState::Firing));
    assert_eq!(replayed[0].sequence, 4);
}

#[test]
fn dropped_subscriber_does_not_affect_others() {
    let mut machine = ActorStateMachine::new(ActorState::Idle);
    let mut kept = machine.subscribe();
    let dropped = machine.subscribe();
    drop(dropped);

    machine.transition(ActorState::InMotion);

    assert_eq!(kept.drain().len(), 1);
    assert_eq!(machine.subscriber_count(), 1);
}

#[test]
fn disabled_history_does_not_affect_feed() {
    let mut machine = ActorStateMachineBuilder::new()
        .initial(ActorState::Idle)
        .history_limit(0)
        .build()
        .unwrap();
    let mut sub = machine.subscribe();

    machine.transition(ActorState::Firing);

    assert!(machine.history().is_empty());
    assert_eq!(sub.drain().len(), 1);
}

#[tokio::test]
async fn subscriber_task_observes_transitions_in_order() {
    let mut machine = ActorStateMachine::new(ActorState::Idle);
    let mut sub = machine.subscribe();

    let observer = tokio::spawn(async move {
        let mut seen = Vec::new();
        while let Some(change) = sub.next().await {
            seen.push(change.pair());
        }
        seen
    });

    machine.transition(ActorState::AimingDown);
    machine.transition(ActorState::Firing);
    machine.transition(ActorState::InactiveWaiting);
    machine.transition(ActorState::Inactive);
    drop(machine);

    let seen = observer.await.unwrap();
    assert_eq!(
        seen,
        vec![
            (ActorState::Idle, ActorState::AimingDown),
            (ActorState::AimingDown, ActorState::Firing),
            (ActorState::Firing, ActorState::InactiveWaiting),
            (ActorState::InactiveWaiting, ActorState::Inactive),
        ]
    );
}
