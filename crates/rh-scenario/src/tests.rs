//! Unit tests for rh-scenario.

use std::io::Cursor;

use rh_core::FleetError;
use rh_fleet::Directory;

use crate::{
    Command, GeneratorParams, Outcome, ScenarioError, generate, load_script_reader, replay,
    run_script,
};

// ── Helpers ───────────────────────────────────────────────────────────────────

const SCRIPT_CSV: &str = "\
command,name,a,b
# two stops, one single-seat taxi, two riders for S2
stop,S1
stop,S2
taxi,T1,S1,1
route,T1,S2
passenger,P1,S1,S2
passenger,P2,S1,S2
pickup,T1
ride,T1
";

fn cmd_names(commands: &[Command]) -> Vec<&'static str> {
    commands.iter().map(Command::as_str).collect()
}

// ── Loader ────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod loader {
    use super::*;

    #[test]
    fn parses_every_command_kind() {
        let csv = "\
command,name,a,b
stop,Central
taxi,T1,Central,2
passenger,ann,Central,Airport
route,T1,Airport  Central
ride,T1
advance,T1
pickup,T1
dropoff,T1
board,T1,ann
";
        let commands = load_script_reader(Cursor::new(csv)).unwrap();
        assert_eq!(
            cmd_names(&commands),
            vec!["stop", "taxi", "passenger", "route", "ride", "advance", "pickup", "dropoff", "board"]
        );
        assert_eq!(
            commands[1],
            Command::AddTaxi { number: "T1".into(), start: "Central".into(), capacity: 2 }
        );
        assert_eq!(
            commands[3],
            Command::AppendRoute { taxi: "T1".into(), stops: vec!["Airport".into(), "Central".into()] }
        );
        assert_eq!(
            commands[8],
            Command::DirectBoard { taxi: "T1".into(), passenger: "ann".into() }
        );
    }

    #[test]
    fn skips_comments_and_trims_whitespace() {
        let commands = load_script_reader(Cursor::new(SCRIPT_CSV)).unwrap();
        assert_eq!(commands.len(), 8);
        let csv = "command,name,a,b\n  stop ,  Central  \n";
        let commands = load_script_reader(Cursor::new(csv)).unwrap();
        assert_eq!(commands, vec![Command::AddStop { name: "Central".into() }]);
    }

    #[test]
    fn command_keyword_is_case_insensitive() {
        let csv = "command,name,a,b\nRIDE,T1\n";
        let commands = load_script_reader(Cursor::new(csv)).unwrap();
        assert_eq!(commands, vec![Command::Ride { taxi: "T1".into() }]);
    }

    #[test]
    fn unknown_command_names_record() {
        let csv = "command,name,a,b\nstop,S1\nfly,T1\n";
        let err = load_script_reader(Cursor::new(csv)).unwrap_err();
        match err {
            ScenarioError::Parse { record, message } => {
                assert_eq!(record, 2);
                assert!(message.contains("fly"), "got {message}");
            }
            other => panic!("expected parse error, got {other}"),
        }
    }

    #[test]
    fn missing_capacity_is_parse_error() {
        let csv = "command,name,a,b\ntaxi,T1,S1\n";
        let err = load_script_reader(Cursor::new(csv)).unwrap_err();
        assert!(err.to_string().contains("missing capacity"), "got {err}");
    }

    #[test]
    fn bad_capacity_is_parse_error() {
        let csv = "command,name,a,b\ntaxi,T1,S1,lots\n";
        let err = load_script_reader(Cursor::new(csv)).unwrap_err();
        assert!(matches!(err, ScenarioError::Parse { record: 1, .. }));
    }

    #[test]
    fn missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = crate::load_script_csv(&dir.path().join("absent.csv")).unwrap_err();
        assert!(matches!(err, ScenarioError::Io(_)));
    }

    #[test]
    fn loads_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("script.csv");
        std::fs::write(&path, SCRIPT_CSV).unwrap();
        let commands = crate::load_script_csv(&path).unwrap();
        assert_eq!(commands.len(), 8);
    }
}

// ── Commands ──────────────────────────────────────────────────────────────────

#[cfg(test)]
mod commands {
    use super::*;

    #[test]
    fn script_end_to_end() {
        let commands = load_script_reader(Cursor::new(SCRIPT_CSV)).unwrap();
        let mut dir = Directory::default();
        let outcomes = replay(&mut dir, &commands).unwrap();

        let p1 = dir.all_passengers().find(|(_, p)| p.name() == "P1").unwrap().0;
        let p2 = dir.passenger_id("P2").unwrap();

        match &outcomes[6] {
            Outcome::PickedUp(b) => assert_eq!(b.boarded, vec![p1]),
            other => panic!("expected pick-up, got {other:?}"),
        }
        match &outcomes[7] {
            Outcome::Rode(report) => {
                assert_eq!(dir.stop_name(report.stop()), "S2");
                assert_eq!(report.dropped, vec![p1]);
            }
            other => panic!("expected ride, got {other:?}"),
        }
        assert_eq!(dir.passenger(p2).current_stop(), Some(dir.stop_id("S1").unwrap()));
        dir.check_invariants(true).unwrap();
    }

    #[test]
    fn run_script_continues_after_errors() {
        let commands = vec![
            Command::AddTaxi { number: "T1".into(), start: "S1".into(), capacity: 1 },
            Command::Ride { taxi: "T1".into() },
            Command::Ride { taxi: "T9".into() },
            Command::AddStop { name: "S2".into() },
        ];
        let mut dir = Directory::default();
        let results = run_script(&mut dir, &commands);
        assert!(results[0].is_ok());
        assert_eq!(results[1], Err(FleetError::RouteExhausted("T1".into())));
        assert_eq!(results[2], Err(FleetError::UnknownTaxi("T9".into())));
        assert!(results[3].is_ok());
        assert_eq!(dir.stops().len(), 2);
    }

    #[test]
    fn replay_stops_at_first_failure() {
        let commands = vec![
            Command::AddStop { name: "S1".into() },
            Command::DropOff { taxi: "T1".into() },
            Command::AddStop { name: "S2".into() },
        ];
        let mut dir = Directory::default();
        let err = replay(&mut dir, &commands).unwrap_err();
        match err {
            ScenarioError::Command { index, command, source } => {
                assert_eq!(index, 1);
                assert_eq!(command, "dropoff");
                assert_eq!(source, FleetError::UnknownTaxi("T1".into()));
            }
            other => panic!("expected command error, got {other}"),
        }
        assert_eq!(dir.stops().len(), 1);
    }

    #[test]
    fn direct_board_by_name() {
        let commands = vec![
            Command::AddTaxi { number: "T1".into(), start: "S1".into(), capacity: 2 },
            Command::AddPassenger { name: "a".into(), origin: "S1".into(), destination: "S2".into() },
            Command::AddPassenger { name: "b".into(), origin: "S1".into(), destination: "S2".into() },
            Command::DirectBoard { taxi: "T1".into(), passenger: "b".into() },
            Command::DirectBoard { taxi: "T1".into(), passenger: "zed".into() },
        ];
        let mut dir = Directory::default();
        let results = run_script(&mut dir, &commands);
        let b = dir.passenger_id("b").unwrap();
        assert!(matches!(&results[3], Ok(Outcome::Boarded { passenger, .. }) if *passenger == b));
        assert_eq!(results[4], Err(FleetError::UnknownPassenger("zed".into())));
    }

    #[test]
    fn advance_then_drop_off_matches_ride() {
        let setup = vec![
            Command::AddTaxi { number: "T1".into(), start: "S1".into(), capacity: 2 },
            Command::AddPassenger { name: "a".into(), origin: "S1".into(), destination: "S2".into() },
            Command::PickUp { taxi: "T1".into() },
            Command::AppendRoute { taxi: "T1".into(), stops: vec!["S2".into()] },
        ];

        let mut split = Directory::default();
        replay(&mut split, &setup).unwrap();
        replay(
            &mut split,
            &[Command::Advance { taxi: "T1".into() }, Command::DropOff { taxi: "T1".into() }],
        )
        .unwrap();

        let mut combined = Directory::default();
        replay(&mut combined, &setup).unwrap();
        replay(&mut combined, &[Command::Ride { taxi: "T1".into() }]).unwrap();

        assert_eq!(split.delivered_count(), 1);
        assert_eq!(combined.delivered_count(), 1);
        let t = split.taxi_id("T1").unwrap();
        assert_eq!(split.taxi(t), combined.taxi(t));
    }
}

// ── Generator ─────────────────────────────────────────────────────────────────

#[cfg(test)]
mod generator {
    use super::*;

    #[test]
    fn same_seed_same_commands() {
        let params = GeneratorParams::default();
        assert_eq!(generate(7, &params), generate(7, &params));
    }

    #[test]
    fn params_compare_by_value() {
        let params = GeneratorParams::default();
        assert_eq!(params.clone(), params);
        assert_ne!(GeneratorParams { arrival_rate: 0.9, ..params.clone() }, params);
    }

    #[test]
    fn zero_arrival_rate_adds_no_passengers_after_setup() {
        let params = GeneratorParams { passengers: 0, arrival_rate: 0.0, ..Default::default() };
        let commands = generate(9, &params);
        assert!(!commands.iter().any(|c| matches!(c, Command::AddPassenger { .. })));
    }

    #[test]
    fn different_seeds_differ() {
        let params = GeneratorParams { steps: 40, ..Default::default() };
        assert_ne!(generate(1, &params), generate(2, &params));
    }

    #[test]
    fn setup_is_valid() {
        let params = GeneratorParams { steps: 0, ..Default::default() };
        let commands = generate(11, &params);
        let mut dir = Directory::default();
        replay(&mut dir, &commands).unwrap();
        assert_eq!(dir.stops().len(), params.stops);
        assert_eq!(dir.taxis().len(), params.taxis);
        assert_eq!(dir.passengers().count(), params.passengers);
        for (_, taxi) in dir.taxis() {
            assert_eq!(taxi.route().len(), params.route_len);
            assert!(taxi.capacity() >= 1 && taxi.capacity() <= params.max_capacity);
        }
    }

    #[test]
    fn generated_trips_are_never_degenerate() {
        let params = GeneratorParams { passengers: 200, steps: 0, ..Default::default() };
        for cmd in generate(5, &params) {
            if let Command::AddPassenger { origin, destination, .. } = cmd {
                assert_ne!(origin, destination);
            }
        }
    }

    #[test]
    fn single_stop_has_no_passengers() {
        let params = GeneratorParams { stops: 1, ..Default::default() };
        let commands = generate(3, &params);
        assert!(!commands.iter().any(|c| matches!(c, Command::AddPassenger { .. })));
    }

    #[test]
    fn no_stops_means_empty_network() {
        let params = GeneratorParams { stops: 0, ..Default::default() };
        assert!(generate(3, &params).is_empty());
    }

    /// Capacity and exclusivity hold after every command of many random runs.
    #[test]
    fn invariants_hold_across_random_runs() {
        let params = GeneratorParams {
            stops:        4,
            taxis:        3,
            passengers:   12,
            route_len:    10,
            max_capacity: 3,
            steps:        60,
            arrival_rate: 0.5,
        };
        for seed in 0..25 {
            let mut dir = Directory::default();
            for cmd in generate(seed, &params) {
                let _ = cmd.apply(&mut dir);
                if let Err(v) = dir.check_invariants(true) {
                    panic!("seed {seed}, after {cmd:?}: {v}");
                }
                for (_, taxi) in dir.taxis() {
                    assert!(taxi.boarded().len() <= taxi.capacity() as usize);
                }
            }
            let active = dir.passengers().count();
            assert_eq!(active + dir.delivered_count(), dir.all_passengers().len());
        }
    }
}
