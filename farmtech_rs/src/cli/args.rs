//! Command-line arguments.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "farmtech")]
#[command(about = "Farm Tech Connect landing page - inspect the tab catalog and render static pages")]
#[command(version)]
pub struct Args {
    /// Config file (default: .farmtech/config.toml in the current directory)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, default_value = "warn", global = true)]
    pub log_level: String,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// List tab categories in display order
    Tabs,

    /// Print the content of one category
    Show {
        /// Category key
        key: String,
        /// Emit JSON instead of text
        #[arg(long)]
        json: bool,
    },

    /// Render one page state as HTML
    Render {
        /// Tab to select (default: the first category)
        #[arg(long)]
        tab: Option<String>,
        /// Output file (default: stdout)
        #[arg(long, short)]
        out: Option<PathBuf>,
    },

    /// Render index.html plus one page per tab
    Site {
        /// Directory to write the pages into
        #[arg(long)]
        out_dir: PathBuf,
    },

    /// List trigger points on the page
    Triggers {
        /// Tab to select (default: the first category)
        #[arg(long)]
        tab: Option<String>,
    },

    /// Fire a trigger through the logging host
    Fire {
        /// Trigger id, as listed by `triggers`
        trigger: String,
        /// Tab to select (default: the first category)
        #[arg(long)]
        tab: Option<String>,
    },
}
