//! flightdeck: run the flight engine headless.
//!
//! Usage:
//!   flightdeck --seconds 10 --fixed --autopilot
//!   flightdeck --config flight.json
//!   flightdeck --detail medium --aircraft boeing      (reads inputs from stdin)

use std::io::{self, BufRead};
use std::path::PathBuf;
use std::process;

use serde::Serialize;

use flightdeck_app::config::{AppConfig, ClockMode};
use flightdeck_app::console::{self, ConsoleLine};
use flightdeck_app::frame_loop::spawn_frame_loop;
use flightdeck_app::state::FrameLoopHandle;
use flightdeck_core::aircraft::AircraftKind;
use flightdeck_core::commands::ControlInput;
use flightdeck_core::enums::DetailLevel;
use flightdeck_core::state::{FlightSnapshot, HudReadout};

#[derive(Serialize)]
struct Report<'a> {
    frames: u64,
    failed_frames: u64,
    fps: f64,
    hud: HudReadout,
    snapshot: &'a FlightSnapshot,
}

fn main() {
    env_logger::init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    if args.iter().any(|a| a == "--help" || a == "-h") {
        print_usage();
        return;
    }

    let config = match parse_args(&args) {
        Ok(config) => config,
        Err(msg) => {
            eprintln!("{msg}");
            print_usage();
            process::exit(1);
        }
    };
    let open_ended = config.duration_secs == 0.0;

    let handle = match spawn_frame_loop(config) {
        Ok(handle) => handle,
        Err(e) => {
            eprintln!("Failed to start: {e}");
            process::exit(1);
        }
    };

    if open_ended {
        read_console(&handle);
    }
    let latest = handle.latest_snapshot.clone();
    let stats = if open_ended {
        handle.shutdown()
    } else {
        handle.thread.join()
    };
    let stats = match stats {
        Ok(stats) => stats,
        Err(_) => {
            eprintln!("Frame loop thread panicked");
            process::exit(1);
        }
    };

    let snapshot = latest.lock().ok().and_then(|lock| lock.clone());
    let Some(snapshot) = snapshot else {
        eprintln!("No frame completed");
        process::exit(1);
    };
    let report = Report {
        frames: stats.frames,
        failed_frames: stats.failed,
        fps: stats.fps,
        hud: snapshot.hud(),
        snapshot: &snapshot,
    };
    match serde_json::to_string_pretty(&report) {
        Ok(json) => println!("{json}"),
        Err(e) => {
            eprintln!("Failed to encode report: {e}");
            process::exit(1);
        }
    }
}

/// Forward stdin lines to the loop until EOF or `quit`.
fn read_console(handle: &FrameLoopHandle) {
    let stdin = io::stdin();
    for line in stdin.lock().lines() {
        let Ok(line) = line else { break };
        match console::parse_line(&line) {
            Ok(ConsoleLine::Input(input)) => {
                if handle.send(input).is_err() {
                    break;
                }
            }
            Ok(ConsoleLine::Blank) => {}
            Ok(ConsoleLine::Quit) => break,
            Err(msg) => eprintln!("{msg}"),
        }
    }
}

fn print_usage() {
    eprintln!(
        "flightdeck: headless flight simulation\n\
         \n\
         Options:\n\
         \n\
           --config <path>     JSON configuration file\n\
           --detail <level>    low | medium | high\n\
           --aircraft <type>   cessna | boeing | helicopter | fighter\n\
           --seconds <N>       Simulated seconds to run (0: until stdin closes)\n\
           --rate <N>          Frames per second (default: 60)\n\
           --fixed             Fixed time steps, no pacing\n\
           --engine            Start with the engine running\n\
           --throttle <pct>    Initial throttle\n\
           --autopilot         Engage the autopilot at start\n\
         \n\
         With no run length, control inputs are read from stdin, one per line:\n\
         \n\
           +KeyW / -KeyW       Press / release a key (KeyW KeyS KeyA KeyD Space KeyR)\n\
           {{\"type\":\"SetThrottle\",\"value\":70}}\n\
           quit\n\
         \n\
         The final snapshot and HUD readout are printed as JSON.\n"
    );
}

fn parse_args(args: &[String]) -> Result<AppConfig, String> {
    let mut config = match flag_value(args, "--config")? {
        Some(path) => AppConfig::load(&PathBuf::from(path)).map_err(|e| e.to_string())?,
        None => AppConfig::default(),
    };

    if let Some(value) = flag_value(args, "--detail")? {
        config.sim.detail = parse_detail(value)?;
    }
    if let Some(value) = flag_value(args, "--aircraft")? {
        config.sim.aircraft = parse_aircraft(value)?;
    }
    if let Some(value) = flag_value(args, "--seconds")? {
        config.duration_secs = value
            .parse()
            .map_err(|_| format!("Invalid --seconds: {value}"))?;
    }
    if let Some(value) = flag_value(args, "--rate")? {
        config.frame_rate = value
            .parse()
            .map_err(|_| format!("Invalid --rate: {value}"))?;
    }
    if args.iter().any(|a| a == "--fixed") {
        config.clock = ClockMode::Fixed;
    }
    if args.iter().any(|a| a == "--engine") {
        config.schedule(0.0, ControlInput::ToggleEngine);
    }
    if let Some(value) = flag_value(args, "--throttle")? {
        let throttle = value
            .parse()
            .map_err(|_| format!("Invalid --throttle: {value}"))?;
        config.schedule(0.0, ControlInput::SetThrottle { value: throttle });
    }
    if args.iter().any(|a| a == "--autopilot") {
        config.schedule(0.0, ControlInput::ToggleAutopilot);
    }

    if config.clock == ClockMode::Fixed && config.duration_secs == 0.0 {
        return Err("--fixed needs a run length (--seconds)".into());
    }
    config.validate().map_err(|e| e.to_string())?;
    Ok(config)
}

fn flag_value<'a>(args: &'a [String], flag: &str) -> Result<Option<&'a str>, String> {
    match args.iter().position(|a| a == flag) {
        Some(i) => args
            .get(i + 1)
            .map(|v| Some(v.as_str()))
            .ok_or_else(|| format!("{flag} needs a value")),
        None => Ok(None),
    }
}

fn parse_detail(value: &str) -> Result<DetailLevel, String> {
    match value.to_ascii_lowercase().as_str() {
        "low" => Ok(DetailLevel::Low),
        "medium" => Ok(DetailLevel::Medium),
        "high" => Ok(DetailLevel::High),
        _ => Err(format!("Unknown detail level: {value}")),
    }
}

fn parse_aircraft(value: &str) -> Result<AircraftKind, String> {
    match value.to_ascii_lowercase().as_str() {
        "cessna" => Ok(AircraftKind::Cessna),
        "boeing" => Ok(AircraftKind::Boeing),
        "helicopter" => Ok(AircraftKind::Helicopter),
        "fighter" => Ok(AircraftKind::Fighter),
        _ => Err(format!("Unknown aircraft: {value}")),
    }
}
