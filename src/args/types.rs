use clap::Parser;
use serde_json::Value;
use std::fs;

#[derive(Parser, Clone, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Sqlite database file; created (with schema) if missing.
    #[arg(
        short = 'n',
        long,
        value_name = "DATABASE_NAME",
        default_value = "golf_scorecard.db"
    )]
    pub db_name: String,

    /// If specified, this sql is run on program startup. Multiple files
    /// can be separated with semicolons. Be careful with the SQL you
    /// run here, don't mess up your own database.
    #[arg(
        long,
        value_name = "DATABASE_STARTUP_SCRIPT",
        value_parser = crate::args::validation::check_readable_file
    )]
    pub db_startup_script: Option<String>,

    /// Json file with courses and players to seed if they are missing.
    #[arg(
        long,
        value_name = "DATABASE_POPULATE_JSON",
        value_parser = crate::args::validation::check_readable_file_and_json
    )]
    pub db_populate_json: Option<Value>,
}

#[derive(Debug, Clone)]
pub struct CleanArgs {
    pub db_name: String,
    pub db_startup_script: Option<String>,
    pub db_populate_json: Option<Value>,
    pub combined_sql_script: String,
}

impl CleanArgs {
    /// Read the startup script file(s) into one combined script.
    ///
    /// # Errors
    ///
    /// Returns an error if any listed file cannot be read.
    pub fn new(args: Args) -> Result<Self, std::io::Error> {
        let mut combined_sql_script = String::new();
        if let Some(scripts) = &args.db_startup_script {
            for script in scripts.split(';') {
                combined_sql_script.push_str(&fs::read_to_string(script)?);
                combined_sql_script.push('\n');
            }
        }
        Ok(Self {
            db_name: args.db_name,
            db_startup_script: args.db_startup_script,
            db_populate_json: args.db_populate_json,
            combined_sql_script,
        })
    }
}
