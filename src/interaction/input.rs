/***************************************/
/*        3rd party libraries          */
/***************************************/
use log::warn;
use std::io::BufRead;

/***************************************/
/*           Local modules             */
/***************************************/
use crate::shared::{Building, Color, ElevatorRequest, InputError, Printer};

/***************************************/
/*               Enums                 */
/***************************************/
#[derive(Debug, Clone, PartialEq)]
pub enum UserCommand {
    Request(ElevatorRequest),
    Cancel,
}

#[derive(Debug, Clone, PartialEq)]
pub enum ReadOutcome {
    Command(UserCommand),
    Invalid(InputError),
    EndOfInput,
}

/***************************************/
/*             Public API              */
/***************************************/

/// Validates one line against the building: three integers, both floors inside
/// `0..=n_floors`, passengers inside `1..=max_capacity` and distinct floors.
/// `q` in any case cancels.
pub fn parse_line(line: &str, building: &Building) -> Result<UserCommand, InputError> {
    let line = line.trim_end_matches(['\r', '\n']);
    if line.eq_ignore_ascii_case("q") {
        return Ok(UserCommand::Cancel);
    }

    let fields = line
        .split_whitespace()
        .map(|field| field.parse::<i32>())
        .collect::<Result<Vec<i32>, _>>()
        .map_err(|_| InputError::Malformed)?;

    let (current_floor, destination_floor, passengers) = match fields[..] {
        [current_floor, destination_floor, passengers] => {
            (current_floor, destination_floor, passengers)
        }
        _ => return Err(InputError::Malformed),
    };

    let valid_floor = |floor: i32| (0..=building.n_floors).contains(&floor);
    if !valid_floor(current_floor) || !valid_floor(destination_floor) {
        return Err(InputError::FloorOutOfRange);
    }

    if passengers <= 0 || passengers > building.max_capacity {
        return Err(InputError::PassengerCount {
            max_capacity: building.max_capacity,
        });
    }

    if current_floor == destination_floor {
        return Err(InputError::SameFloor);
    }

    Ok(UserCommand::Request(ElevatorRequest::new(
        current_floor,
        destination_floor,
        passengers,
    )))
}

pub fn print_welcome_message(printer: &dyn Printer, building: &Building) {
    printer.colored("Welcome to Elevation", Color::Green);
    printer.colored(
        "Enter current floor, destination floor and number of persons (separated by spaces)",
        Color::Green,
    );
    printer.colored(
        &format!(
            "e.g 4 10 5 and press enter or q to cancel. Floor range (0 - {})",
            building.n_floors
        ),
        Color::Green,
    );
}

/// Prints the banner, reads one line and validates it, reporting any problem to the user.
pub fn read_user_input<R: BufRead>(
    reader: &mut R,
    printer: &dyn Printer,
    building: &Building,
) -> ReadOutcome {
    print_welcome_message(printer, building);

    let mut line = String::new();
    match reader.read_line(&mut line) {
        Ok(0) => return ReadOutcome::EndOfInput,
        Ok(_) => (),
        Err(e) => {
            warn!("Failed to read user input: {}", e);
            return ReadOutcome::EndOfInput;
        }
    }

    match parse_line(&line, building) {
        Ok(UserCommand::Cancel) => {
            printer.colored("Elevator request has been cancelled!", Color::Red);
            ReadOutcome::Command(UserCommand::Cancel)
        }
        Ok(command) => ReadOutcome::Command(command),
        Err(e) => {
            printer.colored(&e.to_string(), Color::Red);
            ReadOutcome::Invalid(e)
        }
    }
}

/***************************************/
/*             Unit tests              */
/***************************************/
#[cfg(test)]
mod input_tests {
    use super::{parse_line, read_user_input, ReadOutcome, UserCommand};
    use crate::shared::output::RecordingPrinter;
    use crate::shared::{Building, ElevatorRequest, InputError};
    use std::io::Cursor;

    fn setup_building() -> Building {
        Building::new(10, 3, 10)
    }

    #[test]
    fn test_parse_valid_request() {
        let building = setup_building();

        assert_eq!(
            parse_line("2 5 3", &building),
            Ok(UserCommand::Request(ElevatorRequest::new(2, 5, 3)))
        );
        assert_eq!(
            parse_line("  10\t0  10\n", &building),
            Ok(UserCommand::Request(ElevatorRequest::new(10, 0, 10)))
        );
    }

    #[test]
    fn test_parse_cancel() {
        let building = setup_building();

        assert_eq!(parse_line("q", &building), Ok(UserCommand::Cancel));
        assert_eq!(parse_line("Q\n", &building), Ok(UserCommand::Cancel));
    }

    #[test]
    fn test_parse_floor_out_of_range() {
        let building = setup_building();

        assert_eq!(parse_line("-1 5 3", &building), Err(InputError::FloorOutOfRange));
        assert_eq!(parse_line("11 5 3", &building), Err(InputError::FloorOutOfRange));
        assert_eq!(parse_line("1 11 3", &building), Err(InputError::FloorOutOfRange));
    }

    #[test]
    fn test_parse_passenger_count_out_of_range() {
        let building = setup_building();
        let expected = Err(InputError::PassengerCount { max_capacity: 10 });

        assert_eq!(parse_line("1 5 0", &building), expected);
        assert_eq!(parse_line("1 5 11", &building), expected);
        assert_eq!(parse_line("1 5 -2", &building), expected);
    }

    #[test]
    fn test_parse_same_floor() {
        assert_eq!(
            parse_line("4 4 1", &setup_building()),
            Err(InputError::SameFloor)
        );
    }

    #[test]
    fn test_parse_malformed() {
        let building = setup_building();

        for line in ["", "1 2", "1 2 3 4", "a b c", "1 2 x", "1.5 2 3", "quit"] {
            assert_eq!(parse_line(line, &building), Err(InputError::Malformed), "{:?}", line);
        }
    }

    #[test]
    fn test_read_user_input_reports_errors() {
        // Arrange
        let building = setup_building();
        let printer = RecordingPrinter::default();
        let mut reader = Cursor::new("1 5 11\n");

        // Act
        let outcome = read_user_input(&mut reader, &printer, &building);

        // Assert
        assert_eq!(
            outcome,
            ReadOutcome::Invalid(InputError::PassengerCount { max_capacity: 10 })
        );
        assert!(printer.contains("Welcome to Elevation"));
        assert!(printer.contains("Floor range (0 - 10)"));
        assert!(printer.contains("Invalid passenger count. Max Capacity is 10"));
    }

    #[test]
    fn test_read_user_input_cancel_and_eof() {
        // Arrange
        let building = setup_building();
        let printer = RecordingPrinter::default();
        let mut reader = Cursor::new("q\n");

        // Act
        let first = read_user_input(&mut reader, &printer, &building);
        let second = read_user_input(&mut reader, &printer, &building);

        // Assert
        assert_eq!(first, ReadOutcome::Command(UserCommand::Cancel));
        assert_eq!(second, ReadOutcome::EndOfInput);
        assert!(printer.contains("Elevator request has been cancelled!"));
    }
}
