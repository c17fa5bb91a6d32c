use serde::Deserialize;
use std::error::Error;
use std::fs;

/// Controller gains and drive parameters, loaded from a TOML file.
#[derive(Debug, Deserialize, Clone)]
pub struct ControllerConfig {
    pub controller_name: String,
    pub kp: f64,
    pub ki: f64,
    pub kd: f64,
    pub dt_secs: f64,
    pub target_vel: f64,
    pub current_vel: f64,
    pub cycles: u64,
    pub trace_csv: Option<String>,
}

pub fn load_config(path: &str) -> Result<ControllerConfig, Box<dyn Error>> {
    let contents = fs::read_to_string(path)?;
    let config: ControllerConfig = toml::from_str(&contents)?;

    // A non-positive time step makes the derivative term divide by zero.
    if config.dt_secs <= 0.0 {
        return Err(format!("dt_secs must be strictly positive, got {}", config.dt_secs).into());
    }

    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    const FULL_CONFIG: &str = r#"
        controller_name = "velocity-baseline"
        kp = 1.0
        ki = 0.1
        kd = 0.05
        dt_secs = 0.01
        target_vel = 0.1
        current_vel = 0.2
        cycles = 1
    "#;

    fn write_temp(name: &str, contents: &str) -> PathBuf {
        let path = std::env::temp_dir().join(name);
        fs::write(&path, contents).unwrap();
        path
    }

    #[test]
    fn parses_full_config() {
        let config: ControllerConfig = toml::from_str(FULL_CONFIG).unwrap();
        assert_eq!(config.controller_name, "velocity-baseline");
        assert_eq!(config.kp, 1.0);
        assert_eq!(config.ki, 0.1);
        assert_eq!(config.kd, 0.05);
        assert_eq!(config.dt_secs, 0.01);
        assert_eq!(config.cycles, 1);
        assert!(config.trace_csv.is_none());
    }

    #[test]
    fn loads_config_from_file() {
        let path = write_temp("motion_control_config_ok.toml", FULL_CONFIG);
        let config = load_config(path.to_str().unwrap()).unwrap();
        assert_eq!(config.target_vel, 0.1);
        assert_eq!(config.current_vel, 0.2);
    }

    #[test]
    fn rejects_non_positive_time_step() {
        let contents = FULL_CONFIG.replace("dt_secs = 0.01", "dt_secs = 0.0");
        let path = write_temp("motion_control_config_bad_dt.toml", &contents);
        assert!(load_config(path.to_str().unwrap()).is_err());
    }

    #[test]
    fn missing_file_is_an_error() {
        assert!(load_config("configs/does_not_exist.toml").is_err());
    }
}
