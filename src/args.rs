use clap::Parser;

use crate::props::{DEFAULT_PROPERTIES_PATH, OPEN_AI_APIKEY};

/// Print an environment value loaded from a local properties file
#[derive(Parser, Debug, Clone)]
#[command(version, about, long_about = None)]
pub struct Args {
    /// Properties file, relative to the working directory
    #[arg(short, long, default_value = DEFAULT_PROPERTIES_PATH)]
    pub(crate) file: String,

    /// Name of the entry to print
    #[arg(short, long, default_value = OPEN_AI_APIKEY)]
    pub(crate) key: String,
}
