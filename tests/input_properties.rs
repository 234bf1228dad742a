//! End-to-end behavior of the input handler through its public API.

use std::rc::Rc;
use std::sync::Arc;

use remote_input::dispatch::{JsonLinesBus, RecordingBus, EVENT_NAME, NOT_KEYED};
use remote_input::domain::{KeyAction, KeyCode, ViewId};
use remote_input::infrastructure::{FeatureToggle, ManualClock};
use remote_input::keymap::{codes, long_entries, short_action};
use remote_input::{Config, InputHandler, OutboundEvent};

fn handler_with_bus(config: &Config) -> (InputHandler, Arc<RecordingBus>) {
    let bus = Arc::new(RecordingBus::default());
    let mut handler = InputHandler::new(config);
    handler.attach_bus(&bus);
    (handler, bus)
}

fn press(handler: &mut InputHandler, key: KeyCode, down_at: u64, up_at: u64) {
    handler
        .handle_raw_key_event(key, KeyAction::Down, down_at)
        .unwrap();
    handler.handle_raw_key_event(key, KeyAction::Up, up_at).unwrap();
}

fn types(bus: &RecordingBus) -> Vec<&'static str> {
    bus.events().iter().map(|e| e.event_type).collect()
}

#[test]
fn test_unmapped_codes_never_emit() {
    let toggle = FeatureToggle::new(false);
    let bus = Arc::new(RecordingBus::default());
    let mut handler =
        InputHandler::new(&Config::default()).with_key_down_toggle(toggle.clone());
    handler.attach_bus(&bus);

    let mut time = 0;
    for code in (-5..=400).map(KeyCode).filter(|&code| short_action(code).is_none()) {
        for enabled in [false, true] {
            toggle.set(enabled);
            for hold in [0, 500, 5_000] {
                let down = handler
                    .handle_raw_key_event(code, KeyAction::Down, time)
                    .unwrap();
                assert!(!handler.state().press.is_pending(), "{code} armed a press");
                time += hold;
                let up = handler.handle_raw_key_event(code, KeyAction::Up, time).unwrap();
                time += 1;

                assert!(down.is_empty() && up.is_empty(), "{code} emitted {down:?} {up:?}");
            }
        }
    }
    assert!(bus.events().is_empty());
}

#[test]
fn test_quick_dpad_press_is_short() {
    let (mut handler, bus) = handler_with_bus(&Config::default());

    press(&mut handler, codes::DPAD_DOWN, 0, 500);

    assert_eq!(types(&bus), ["down"]);
    assert_eq!(bus.events()[0].event_key_action, KeyAction::Up.raw());
}

#[test]
fn test_held_dpad_press_is_long() {
    let (mut handler, bus) = handler_with_bus(&Config::default());

    press(&mut handler, codes::DPAD_DOWN, 0, 1_500);

    assert_eq!(types(&bus), ["longDown"]);
}

#[test]
fn test_threshold_is_exclusive() {
    let (mut handler, bus) = handler_with_bus(&Config::default());

    press(&mut handler, codes::DPAD_CENTER, 0, 1_000);
    press(&mut handler, codes::DPAD_CENTER, 2_000, 3_001);

    assert_eq!(types(&bus), ["select", "longSelect"]);
}

#[test]
fn test_configured_threshold_applies() {
    let config = Config {
        long_press_threshold_ms: 200,
        ..Default::default()
    };
    let (mut handler, bus) = handler_with_bus(&config);

    press(&mut handler, codes::DPAD_LEFT, 0, 300);

    assert_eq!(types(&bus), ["longLeft"]);
}

#[test]
fn test_non_trackable_key_held_long_stays_short() {
    let (mut handler, bus) = handler_with_bus(&Config::default());

    press(&mut handler, codes::MEDIA_PLAY_PAUSE, 0, 5_000);
    press(&mut handler, codes::SPACE, 6_000, 9_000);

    assert_eq!(types(&bus), ["playPause", "select"]);
}

#[test]
fn test_key_down_suppressed_while_toggle_off() {
    let (mut handler, bus) = handler_with_bus(&Config::default());

    let emitted = handler
        .handle_raw_key_event(codes::DPAD_UP, KeyAction::Down, 0)
        .unwrap();

    assert!(emitted.is_empty());
    assert!(bus.events().is_empty());
}

#[test]
fn test_key_down_forwarded_while_toggle_on() {
    let config = Config {
        enable_key_down_events: true,
        ..Default::default()
    };
    let (mut handler, bus) = handler_with_bus(&config);

    handler
        .handle_raw_key_event(codes::DPAD_UP, KeyAction::Down, 0)
        .unwrap();

    let events = bus.events();
    assert_eq!(events.len(), 1);
    assert_eq!(events[0].event_type, "up");
    assert_eq!(events[0].event_key_action, 0);
}

#[test]
fn test_forwarded_key_down_keeps_long_press_pending() {
    let config = Config {
        enable_key_down_events: true,
        ..Default::default()
    };
    let (mut handler, bus) = handler_with_bus(&config);

    press(&mut handler, codes::DPAD_RIGHT, 0, 1_200);

    assert_eq!(types(&bus), ["right", "longRight"]);
}

#[test]
fn test_toggle_flips_between_events() {
    let toggle = FeatureToggle::new(false);
    let bus = Arc::new(RecordingBus::default());
    let mut handler =
        InputHandler::new(&Config::default()).with_key_down_toggle(toggle.clone());
    handler.attach_bus(&bus);

    handler
        .handle_raw_key_event(codes::MENU, KeyAction::Down, 0)
        .unwrap();
    toggle.set(true);
    handler
        .handle_raw_key_event(codes::MENU, KeyAction::Down, 10)
        .unwrap();

    assert_eq!(types(&bus), ["menu"]);
}

#[test]
fn test_focus_sequence_emits_each_transition_once() {
    let (mut handler, bus) = handler_with_bus(&Config::default());
    let a = ViewId(11);
    let b = ViewId(12);

    handler.on_focus_changed(a).unwrap();
    handler.on_focus_changed(a).unwrap();
    handler.on_focus_changed(b).unwrap();
    handler.on_focus_cleared().unwrap();

    assert_eq!(
        bus.events(),
        [
            OutboundEvent::focus(a),
            OutboundEvent::blur(a),
            OutboundEvent::focus(b),
            OutboundEvent::blur(b),
        ]
    );
    assert!(bus.events().iter().all(|e| e.event_key_action == NOT_KEYED));
}

#[test]
fn test_clear_twice_blurs_once() {
    let (mut handler, bus) = handler_with_bus(&Config::default());

    handler.on_focus_changed(ViewId(3)).unwrap();
    handler.on_focus_cleared().unwrap();
    handler.on_focus_cleared().unwrap();

    assert_eq!(types(&bus), ["focus", "blur"]);
    assert_eq!(handler.focused_view(), ViewId::NO_FOCUS);
}

#[test]
fn test_key_events_target_focused_view() {
    let (mut handler, bus) = handler_with_bus(&Config::default());

    press(&mut handler, codes::INFO, 0, 10);
    handler.on_focus_changed(ViewId(8)).unwrap();
    press(&mut handler, codes::INFO, 20, 30);

    let events = bus.events();
    assert_eq!(events[0].target, ViewId::NO_FOCUS);
    assert_eq!(events.last().map(|e| e.target), Some(ViewId(8)));
}

#[test]
fn test_long_table_keys_have_short_actions() {
    for &(code, _) in long_entries() {
        assert!(short_action(code).is_some(), "{code} has no short action");
    }
}

#[test]
fn test_detached_bus_still_returns_events() {
    let (mut handler, bus) = handler_with_bus(&Config::default());
    handler.detach_bus();

    let emitted = handler.on_focus_changed(ViewId(1)).unwrap();

    assert_eq!(emitted, [OutboundEvent::focus(ViewId(1))]);
    assert!(bus.events().is_empty());
}

#[test]
fn test_clock_stamps_raw_events() {
    let clock = Rc::new(ManualClock::new(0));
    let bus = Arc::new(RecordingBus::default());
    let mut handler = InputHandler::with_clock(&Config::default(), Rc::clone(&clock));
    handler.attach_bus(&bus);

    handler
        .handle_key(codes::DPAD_DOWN, KeyAction::Down.raw())
        .unwrap();
    clock.advance(1_001);
    handler.handle_key(codes::DPAD_DOWN, KeyAction::Up.raw()).unwrap();
    handler.handle_key(codes::DPAD_DOWN, 2).unwrap();

    assert_eq!(types(&bus), ["longDown"]);
}

#[test]
fn test_json_lines_output() {
    let bus = Arc::new(JsonLinesBus::new(Vec::new()));
    let mut handler = InputHandler::new(&Config::default());
    handler.attach_bus(&bus);

    handler.on_focus_changed(ViewId(4)).unwrap();
    press(&mut handler, codes::DPAD_DOWN, 0, 100);
    drop(handler);

    let bus = Arc::try_unwrap(bus).unwrap();
    let output = String::from_utf8(bus.into_inner()).unwrap();
    let lines: Vec<serde_json::Value> = output
        .lines()
        .map(|line| serde_json::from_str(line).unwrap())
        .collect();

    assert_eq!(lines.len(), 2);
    assert_eq!(lines[0]["event"], EVENT_NAME);
    assert_eq!(lines[0]["payload"]["eventType"], "focus");
    assert_eq!(lines[1]["payload"]["eventType"], "down");
    assert_eq!(lines[1]["payload"]["eventKeyAction"], 1);
    assert_eq!(lines[1]["payload"]["tag"], 4);
    assert_eq!(lines[1]["payload"]["target"], 4);
}
