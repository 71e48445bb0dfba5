/***************************************/
/*        3rd party libraries          */
/***************************************/
use serde::Deserialize;
use std::fs;
use std::path::Path;

/***************************************/
/*           Local modules             */
/***************************************/
use crate::shared::{SimError, SimResult};

/***************************************/
/*       Public data structures        */
/***************************************/
#[derive(Deserialize, Clone, Debug)]
pub struct Config {
    pub building: BuildingConfig,
    pub elevator: ElevatorConfig,
    pub interaction: InteractionConfig,
}

#[derive(Deserialize, Clone, Debug)]
pub struct BuildingConfig {
    pub n_floors: i32,
    pub n_elevators: i32,
    pub max_capacity: i32,
}

#[derive(Deserialize, Clone, Debug)]
pub struct ElevatorConfig {
    // Milliseconds spent travelling one floor
    pub floor_travel_time: u64,
}

#[derive(Deserialize, Clone, Debug)]
pub struct InteractionConfig {
    pub status_interval: u64,
    pub pause_poll: u64,
    pub max_in_flight: usize,
}

/***************************************/
/*             Public API              */
/***************************************/
pub fn load_config<P: AsRef<Path>>(path: P) -> SimResult<Config> {
    let path = path.as_ref();
    let config_str = fs::read_to_string(path).map_err(|e| {
        SimError::ConfigurationInvalid(format!("failed to read {}: {}", path.display(), e))
    })?;
    parse_config(&config_str)
}

pub fn parse_config(config_str: &str) -> SimResult<Config> {
    let config: Config = toml::from_str(config_str)
        .map_err(|e| SimError::ConfigurationInvalid(format!("failed to parse: {}", e)))?;
    config.validate()?;
    Ok(config)
}

impl Config {
    fn validate(&self) -> SimResult<()> {
        let building = &self.building;
        if building.n_floors < 0 || building.n_elevators < 0 || building.max_capacity < 0 {
            return Err(SimError::ConfigurationInvalid(
                "building counts must not be negative".into(),
            ));
        }
        if self.interaction.max_in_flight == 0 {
            return Err(SimError::ConfigurationInvalid(
                "max_in_flight must be at least 1".into(),
            ));
        }
        Ok(())
    }
}

/***************************************/
/*             Unit tests              */
/***************************************/
