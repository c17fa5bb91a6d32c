use std::env;

use motion_control::config::load_config;
use motion_control::pid::PidController;
use motion_control::trace::{CycleRecord, TraceRecorder};

fn main() {
    println!("===========================================");
    println!("Mobile Robot PID Velocity Controller");
    println!("===========================================");

    let config_path = env::args()
        .nth(1)
        .unwrap_or_else(|| "configs/controller_default.toml".to_string());

    let config = load_config(&config_path).expect("Failed to load controller config");

    println!(
        "Configuration: {} (Kp={}, Ki={}, Kd={}, dt={}s)",
        config.controller_name, config.kp, config.ki, config.kd, config.dt_secs
    );
    println!(
        "Driving {} cycle(s) toward {} m/s from measured {} m/s",
        config.cycles, config.target_vel, config.current_vel
    );

    let mut pid = PidController::new(config.kp, config.ki, config.kd, config.dt_secs);
    let mut recorder = TraceRecorder::new();

    for cycle in 0..config.cycles {
        let output = pid.compute_vel(config.target_vel, config.current_vel);

        // The printed command stands in for the actuation layer.
        println!("cycle {}: velocity command = {}", cycle, output);

        recorder.record(CycleRecord {
            cycle,
            target_vel: config.target_vel,
            current_vel: config.current_vel,
            error: config.target_vel - config.current_vel,
            output,
        });
    }

    if let Some(path) = &config.trace_csv {
        recorder.save_to_csv(path).expect("Failed to save trace CSV");
    }
}
