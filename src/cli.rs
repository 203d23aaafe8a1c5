use std::path::PathBuf;

use clap::Parser;
use stdeploy::ui::ColorWhen;

/// stdeploy - push a Streamlit app to GitHub and walk through Streamlit Cloud setup
#[derive(Parser, Debug)]
#[command(name = "stdeploy")]
#[command(author, version, about, long_about = None)]
#[command(after_help = "Run 'stdeploy' from the directory containing app.py and requirements.txt.")]
pub struct Cli {
    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Color output: auto, always, never
    #[arg(long, value_enum)]
    pub color: Option<ColorWhen>,

    /// Run as if started in this directory
    #[arg(short = 'C', long = "dir", value_name = "PATH")]
    pub dir: Option<PathBuf>,
}
