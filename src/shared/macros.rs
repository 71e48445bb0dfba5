/***************************************/
/*               Macros                */
/***************************************/

/// Unwraps a startup `Result`, or logs `context` with the error and exits with status 1.
///
/// Only for failures the process cannot run without, such as an unreadable configuration.
#[macro_export]
macro_rules! unwrap_or_exit {
    ($expr:expr, $context:expr) => {
        match $expr {
            Ok(val) => val,
            Err(e) => {
                log::error!("{}: {}", $context, e);
                eprintln!("{}: {}", $context, e);
                std::process::exit(1);
            }
        }
    };
}

/***************************************/
/*             Unit tests              */
/***************************************/
