use clap::Parser;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "actionq")]
#[command(about = "A small command-queue console loop")]
pub struct CliConfig {
    #[arg(long, help = "Log every action name as it is queued and executed")]
    pub debug: bool,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}
