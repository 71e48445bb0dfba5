/* 3rd party libraries */
use clap::{value_parser, Arg, Command};
use log::info;
use std::io;
use std::sync::Arc;

/* Custom libraries */
use building::BuildingDispatcher;
use elevator::ElevatorMover;
use interaction::UserInteraction;
use shared::{Building, ConsolePrinter, Printer};

/* Modules */
mod building;
mod config;
mod elevator;
mod interaction;
mod shared;

/* Main */
fn main() -> std::io::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let matches = Command::new("elevation")
        .about("Simulates elevator dispatch in a building from requests typed on stdin")
        .arg(
            Arg::new("config")
                .short('c')
                .long("config")
                .value_name("FILE")
                .help("Building configuration file")
                .takes_value(true)
                .value_parser(value_parser!(String))
                .default_value("config.toml"),
        )
        .arg(
            Arg::new("floor-time")
                .long("floor-time")
                .value_name("MS")
                .help("Overrides the travel time per floor")
                .takes_value(true)
                .value_parser(value_parser!(u64)),
        )
        .get_matches();

    // Load the configuration
    let config_path = matches
        .get_one::<String>("config")
        .map(String::as_str)
        .unwrap_or("config.toml");
    let mut config = crate::unwrap_or_exit!(
        config::load_config(config_path),
        format!("Cannot start with configuration {}", config_path)
    );
    if let Some(floor_time) = matches.get_one::<u64>("floor-time") {
        config.elevator.floor_travel_time = *floor_time;
    }

    // Wire up the services
    let printer: Arc<dyn Printer> = Arc::new(ConsolePrinter::new());
    let building = Building::new(
        config.building.n_floors,
        config.building.n_elevators,
        config.building.max_capacity,
    );
    info!(
        "Building with {} floors, {} elevators of capacity {}",
        building.n_floors, building.n_elevators, building.max_capacity
    );
    let mover = ElevatorMover::new(&config.elevator);
    let dispatcher = Arc::new(BuildingDispatcher::new(building, mover, printer.clone()));

    // Run until stdin closes
    let interaction = UserInteraction::new(&config.interaction, dispatcher, printer);
    interaction.run(io::stdin().lock())
}
