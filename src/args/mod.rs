pub mod types;
pub mod validation;

pub use types::{Args, CleanArgs};

use clap::Parser;

/// Parse and post-process command-line arguments.
///
/// # Errors
///
/// Returns an error if a startup script listed on the command line
/// cannot be read.
pub fn args_checks() -> Result<CleanArgs, std::io::Error> {
    CleanArgs::new(Args::parse())
}
