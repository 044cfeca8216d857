//! Integration tests for the AppService → ports pipeline.
//!
//! These run on the host and verify that each console or IR input ends
//! in the right actuator calls and events without any real hardware.

use super::mock_hw::{ActuatorCall, MockHardware, RecordingSink};

use robocode::Error;
use robocode::app::commands::AppCommand;
use robocode::app::events::AppEvent;
use robocode::app::mode::Mode;
use robocode::app::service::AppService;
use robocode::config::SystemConfig;
use robocode::drivers::ir::{BTN_HASH, BTN_STAR, NEC_REPEAT};
use robocode::sorting::{TraceEvent, is_sorted};

fn make_app_with(config: SystemConfig) -> (AppService, MockHardware, RecordingSink) {
    let mut app = AppService::new(config, 7).unwrap();
    let mut hw = MockHardware::new();
    let mut sink = RecordingSink::new();
    app.start(&mut hw, &mut sink);
    hw.calls.clear();
    sink.clear();
    (app, hw, sink)
}

fn make_app() -> (AppService, MockHardware, RecordingSink) {
    make_app_with(SystemConfig::default())
}

fn enter_mode(app: &mut AppService, hw: &mut MockHardware, sink: &mut RecordingSink, key: char) {
    app.handle_command(AppCommand::SerialKey(key), hw, sink).unwrap();
    sink.clear();
}

// ── Start-up ──────────────────────────────────────────────────

#[test]
fn start_runs_boot_steps_and_parks_actuators() {
    let mut app = AppService::new(SystemConfig::default(), 1).unwrap();
    let mut hw = MockHardware::new();
    let mut sink = RecordingSink::new();
    app.start(&mut hw, &mut sink);

    assert_eq!(
        hw.calls,
        vec![ActuatorCall::WriteServo(90), ActuatorCall::SetLed(false)]
    );

    let percents: Vec<u8> = sink
        .events
        .iter()
        .filter_map(|e| match e {
            AppEvent::BootStep { percent, .. } => Some(*percent),
            _ => None,
        })
        .collect();
    assert_eq!(percents, vec![20, 40, 70, 90, 100]);

    let n = sink.events.len();
    assert_eq!(
        sink.events[n - 2],
        AppEvent::Started {
            mode: Mode::Monitor,
            servo_angle: 90
        }
    );
    assert_eq!(
        sink.events[n - 1],
        AppEvent::MenuShown {
            current: Mode::Monitor
        }
    );
}

#[test]
fn invalid_config_is_rejected_before_start() {
    let config = SystemConfig {
        array_size: 0,
        ..SystemConfig::default()
    };
    assert!(matches!(AppService::new(config, 0), Err(Error::Config(_))));
}

// ── Mode selection ────────────────────────────────────────────

#[test]
fn serial_key_switches_mode() {
    let (mut app, mut hw, mut sink) = make_app();
    app.handle_command(AppCommand::SerialKey('2'), &mut hw, &mut sink)
        .unwrap();

    assert_eq!(app.mode(), Mode::Servo);
    assert_eq!(
        sink.events,
        vec![AppEvent::ModeChanged {
            from: Mode::Monitor,
            to: Mode::Servo
        }]
    );
    assert!(hw.calls.is_empty(), "mode change alone touches no actuator");
}

#[test]
fn unknown_key_keeps_mode() {
    let (mut app, mut hw, mut sink) = make_app();
    enter_mode(&mut app, &mut hw, &mut sink, '1');

    app.handle_command(AppCommand::SerialKey('9'), &mut hw, &mut sink)
        .unwrap();

    assert_eq!(app.mode(), Mode::Led);
    assert_eq!(sink.events, vec![AppEvent::UnknownModeKey { key: '9' }]);
}

#[test]
fn service_mode_reports_status_on_entry() {
    let (mut app, mut hw, mut sink) = make_app();
    app.handle_command(AppCommand::SerialKey('3'), &mut hw, &mut sink)
        .unwrap();

    assert_eq!(sink.events.len(), 2);
    match &sink.events[1] {
        AppEvent::ServiceStatus(report) => {
            assert_eq!(report.mode, Mode::Service);
            assert!(!report.led_on);
            assert_eq!(report.servo_angle, 90);
            assert_eq!(report.uptime_secs, 3_725);
        }
        other => panic!("expected status report, got {:?}", other),
    }
}

// ── IR dispatch ───────────────────────────────────────────────

#[test]
fn monitor_mode_only_reports_codes() {
    let (mut app, mut hw, mut sink) = make_app();
    app.handle_command(AppCommand::IrCode(BTN_STAR), &mut hw, &mut sink)
        .unwrap();

    assert!(hw.calls.is_empty());
    assert_eq!(sink.events.len(), 1);
    assert!(matches!(
        sink.events[0],
        AppEvent::IrCodeReceived { code: BTN_STAR, .. }
    ));
}

#[test]
fn led_mode_star_on_hash_off() {
    let (mut app, mut hw, mut sink) = make_app();
    enter_mode(&mut app, &mut hw, &mut sink, '1');

    app.handle_command(AppCommand::IrCode(BTN_STAR), &mut hw, &mut sink)
        .unwrap();
    assert!(app.led_on());
    assert!(hw.led_on());
    assert_eq!(sink.last(), Some(&AppEvent::LedSwitched { on: true }));

    app.handle_command(AppCommand::IrCode(BTN_HASH), &mut hw, &mut sink)
        .unwrap();
    assert!(!app.led_on());
    assert!(!hw.led_on());
    assert_eq!(sink.last(), Some(&AppEvent::LedSwitched { on: false }));
}

#[test]
fn led_mode_ignores_other_buttons() {
    let (mut app, mut hw, mut sink) = make_app();
    enter_mode(&mut app, &mut hw, &mut sink, '1');

    app.handle_command(AppCommand::IrCode(NEC_REPEAT), &mut hw, &mut sink)
        .unwrap();
    app.handle_command(AppCommand::IrCode(0x1234), &mut hw, &mut sink)
        .unwrap();

    assert!(hw.calls.is_empty());
    assert_eq!(sink.events.len(), 2, "only the two code reports");
}

#[test]
fn servo_mode_steps_by_configured_degrees() {
    let (mut app, mut hw, mut sink) = make_app();
    enter_mode(&mut app, &mut hw, &mut sink, '2');

    app.handle_command(AppCommand::IrCode(BTN_HASH), &mut hw, &mut sink)
        .unwrap();
    assert_eq!(app.servo_angle(), 93);
    app.handle_command(AppCommand::IrCode(BTN_STAR), &mut hw, &mut sink)
        .unwrap();
    app.handle_command(AppCommand::IrCode(BTN_STAR), &mut hw, &mut sink)
        .unwrap();
    assert_eq!(app.servo_angle(), 87);
    assert_eq!(
        hw.calls,
        vec![
            ActuatorCall::WriteServo(93),
            ActuatorCall::WriteServo(90),
            ActuatorCall::WriteServo(87),
        ]
    );
}

#[test]
fn servo_mode_clamps_at_limits() {
    let config = SystemConfig {
        servo_initial_angle: 179,
        ..SystemConfig::default()
    };
    let (mut app, mut hw, mut sink) = make_app_with(config);
    enter_mode(&mut app, &mut hw, &mut sink, '2');

    app.handle_command(AppCommand::IrCode(BTN_HASH), &mut hw, &mut sink)
        .unwrap();
    assert_eq!(
        sink.last(),
        Some(&AppEvent::ServoMoved {
            angle: 180,
            requested: 182
        })
    );
    assert_eq!(hw.servo_angle(), Some(180));

    let low = SystemConfig {
        servo_initial_angle: 1,
        ..SystemConfig::default()
    };
    let (mut app, mut hw, mut sink) = make_app_with(low);
    enter_mode(&mut app, &mut hw, &mut sink, '2');
    app.handle_command(AppCommand::IrCode(BTN_STAR), &mut hw, &mut sink)
        .unwrap();
    assert_eq!(app.servo_angle(), 0);
}

#[test]
fn service_mode_answers_every_code_with_status() {
    let (mut app, mut hw, mut sink) = make_app();
    enter_mode(&mut app, &mut hw, &mut sink, '3');

    app.handle_command(AppCommand::IrCode(0xDEAD), &mut hw, &mut sink)
        .unwrap();
    assert_eq!(sink.events.len(), 2);
    assert!(matches!(sink.events[1], AppEvent::ServiceStatus(_)));
    assert!(hw.calls.is_empty());
}

// ── Serial positioner ─────────────────────────────────────────

#[test]
fn set_angle_moves_servo_within_limits() {
    let (mut app, mut hw, mut sink) = make_app();
    app.handle_command(AppCommand::SetAngle(45), &mut hw, &mut sink)
        .unwrap();

    assert_eq!(app.servo_angle(), 45);
    assert_eq!(hw.calls, vec![ActuatorCall::WriteServo(45)]);
    assert_eq!(
        sink.events,
        vec![AppEvent::ServoMoved {
            angle: 45,
            requested: 45
        }]
    );
}

#[test]
fn set_angle_rejects_out_of_range() {
    let (mut app, mut hw, mut sink) = make_app();
    for bad in [-1, 181, 1000] {
        app.handle_command(AppCommand::SetAngle(bad), &mut hw, &mut sink)
            .unwrap();
        assert_eq!(
            sink.last(),
            Some(&AppEvent::AngleRejected {
                angle: bad,
                min: 0,
                max: 180
            })
        );
    }
    assert_eq!(app.servo_angle(), 90, "rejected angles leave the servo alone");
    assert!(hw.calls.is_empty());
}

#[test]
fn set_angle_accepts_both_limits() {
    let (mut app, mut hw, mut sink) = make_app();
    app.handle_command(AppCommand::SetAngle(0), &mut hw, &mut sink)
        .unwrap();
    app.handle_command(AppCommand::SetAngle(180), &mut hw, &mut sink)
        .unwrap();
    assert_eq!(
        hw.calls,
        vec![ActuatorCall::WriteServo(0), ActuatorCall::WriteServo(180)]
    );
}

// ── Array fill and sort ───────────────────────────────────────

#[test]
fn fill_then_sort_streams_trace_and_finishes_sorted() {
    let (mut app, mut hw, mut sink) = make_app();
    app.handle_command(AppCommand::FillArray, &mut hw, &mut sink)
        .unwrap();

    let filled = match sink.last() {
        Some(AppEvent::ArrayFilled { values }) => values.clone(),
        other => panic!("expected ArrayFilled, got {:?}", other),
    };
    assert_eq!(filled.len(), 10);
    assert!(filled.iter().all(|v| (0..=99).contains(v)));
    assert_eq!(app.array(), filled.as_slice());

    sink.clear();
    app.handle_command(AppCommand::SortArray, &mut hw, &mut sink)
        .unwrap();

    let (last, trace) = sink.events.split_last().unwrap();
    let summary = match last {
        AppEvent::SortFinished { summary, values } => {
            assert!(is_sorted(values));
            let mut expected = filled.clone();
            expected.sort_unstable();
            assert_eq!(values, &expected);
            *summary
        }
        other => panic!("expected SortFinished, got {:?}", other),
    };

    let steps: Vec<&TraceEvent> = trace
        .iter()
        .map(|e| match e {
            AppEvent::SortTrace { step } => step,
            other => panic!("unexpected event inside trace: {:?}", other),
        })
        .collect();
    assert_eq!(steps[0], &TraceEvent::PassStarted { pass_index: 0 });
    assert_eq!(
        steps.last().copied(),
        Some(&TraceEvent::SortCompleted {
            total_passes: summary.total_passes
        })
    );
    let swaps = steps
        .iter()
        .filter(|s| matches!(s, TraceEvent::Swapped { .. }))
        .count();
    assert_eq!(swaps, summary.swaps);
    assert!(hw.calls.is_empty(), "sorting never touches actuators");
}

#[test]
fn sorting_twice_exits_after_one_pass() {
    let (mut app, mut hw, mut sink) = make_app();
    app.handle_command(AppCommand::FillArray, &mut hw, &mut sink)
        .unwrap();
    app.handle_command(AppCommand::SortArray, &mut hw, &mut sink)
        .unwrap();
    sink.clear();

    app.handle_command(AppCommand::SortArray, &mut hw, &mut sink)
        .unwrap();
    match sink.last() {
        Some(AppEvent::SortFinished { summary, .. }) => {
            assert_eq!(summary.total_passes, 1);
            assert!(summary.early_exit);
            assert_eq!(summary.swaps, 0);
        }
        other => panic!("expected SortFinished, got {:?}", other),
    }
}

#[test]
fn same_seed_fills_same_array() {
    let (mut a, mut hw_a, mut sink_a) = make_app();
    let (mut b, mut hw_b, mut sink_b) = make_app();
    a.handle_command(AppCommand::FillArray, &mut hw_a, &mut sink_a)
        .unwrap();
    b.handle_command(AppCommand::FillArray, &mut hw_b, &mut sink_b)
        .unwrap();
    assert_eq!(a.array(), b.array());
}

// ── Menu and status ───────────────────────────────────────────

#[test]
fn show_menu_and_status_reflect_current_state() {
    let (mut app, mut hw, mut sink) = make_app();
    enter_mode(&mut app, &mut hw, &mut sink, '1');
    app.handle_command(AppCommand::IrCode(BTN_STAR), &mut hw, &mut sink)
        .unwrap();
    sink.clear();

    app.handle_command(AppCommand::ShowMenu, &mut hw, &mut sink)
        .unwrap();
    app.handle_command(AppCommand::ShowStatus, &mut hw, &mut sink)
        .unwrap();

    assert_eq!(sink.events[0], AppEvent::MenuShown { current: Mode::Led });
    match &sink.events[1] {
        AppEvent::ServiceStatus(report) => {
            assert_eq!(report.mode, Mode::Led);
            assert!(report.led_on);
        }
        other => panic!("expected status report, got {:?}", other),
    }
    assert_eq!(app.commands_handled(), 4);
}
