use holdem_engine::config::TableConfig;
use holdem_engine::engine::{Engine, RoundPhase};
use holdem_engine::events::{EngineEvent, Resolution};
use holdem_engine::player::PlayerAction as A;

fn drain(rx: &std::sync::mpsc::Receiver<EngineEvent>) -> Vec<EngineEvent> {
    rx.try_iter().collect()
}

#[test]
fn start_hand_announces_phase_then_turn() {
    let mut e = Engine::heads_up(TableConfig::default(), Some(1)).unwrap();
    let rx = e.subscribe();
    e.start_hand().unwrap();
    assert_eq!(
        drain(&rx),
        vec![
            EngineEvent::StateChanged,
            EngineEvent::PhaseChanged {
                phase: RoundPhase::PreFlop
            },
            EngineEvent::TurnChanged {
                seat: 0,
                name: "Player".into()
            },
        ]
    );
}

#[test]
fn street_change_precedes_the_next_turn() {
    let mut e = Engine::heads_up(TableConfig::default(), Some(1)).unwrap();
    let rx = e.subscribe();
    e.start_hand().unwrap();
    e.submit_action(A::Call).unwrap();
    assert_eq!(
        drain(&rx).last(),
        Some(&EngineEvent::TurnChanged {
            seat: 1,
            name: "Bot".into()
        })
    );
    assert!(e.is_current_actor_automated());

    e.submit_action(A::Check).unwrap();
    let events = drain(&rx);
    let phase = events
        .iter()
        .position(|ev| matches!(ev, EngineEvent::PhaseChanged { phase: RoundPhase::Flop }))
        .expect("flop announced");
    let turn = events
        .iter()
        .position(|ev| matches!(ev, EngineEvent::TurnChanged { seat: 0, .. }))
        .expect("seat 0 acts first on the flop");
    assert!(phase < turn);
}

#[test]
fn round_end_carries_the_summary() {
    let mut e = Engine::heads_up(TableConfig::default(), Some(1)).unwrap();
    e.start_hand().unwrap();
    e.take_events();
    e.submit_action(A::Fold).unwrap();

    let events = e.take_events();
    assert_eq!(events.first(), Some(&EngineEvent::StateChanged));
    assert_eq!(events.last(), Some(&EngineEvent::StateChanged));
    let summary = events
        .iter()
        .find_map(|ev| match ev {
            EngineEvent::RoundEnded(summary) => Some(summary),
            _ => None,
        })
        .expect("round ended");
    assert_eq!(summary.resolution, Resolution::FoldOut);
    assert_eq!(summary.awards[0].name, "Bot");
    assert!(!events
        .iter()
        .any(|ev| matches!(ev, EngineEvent::TurnChanged { .. })));
}

#[test]
fn events_serialize_with_a_type_tag() {
    let json = serde_json::to_value(EngineEvent::PhaseChanged {
        phase: RoundPhase::Turn,
    })
    .unwrap();
    assert_eq!(json["type"], "phase_changed");
    assert_eq!(json["phase"], "Turn");
}
