use crate::pages::ContactSubject;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "storefront",
    version,
    about = "Themeable terminal storefront"
)]
pub struct Cli {
    #[arg(
        long,
        global = true,
        help = "Configuration file (defaults to ./config.toml when present)"
    )]
    pub config: Option<PathBuf>,
    #[arg(long, global = true, help = "Keep preferences in memory for this run only")]
    pub ephemeral: bool,
    #[arg(long, global = true, help = "Disable colored output")]
    pub no_color: bool,
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Featured products from the catalog
    Home,
    /// About the store
    About,
    /// Contact details, or send a message when the form fields are given
    Contact {
        #[arg(long, requires_all = ["email", "subject", "message"])]
        name: Option<String>,
        #[arg(long, requires = "name")]
        email: Option<String>,
        #[arg(long, requires = "name")]
        phone: Option<String>,
        #[arg(long, value_enum, requires = "name")]
        subject: Option<ContactSubject>,
        #[arg(long, requires = "name")]
        message: Option<String>,
    },
    /// Show, list or change the theme
    Theme {
        #[command(subcommand)]
        command: ThemeCommands,
    },
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum ThemeCommands {
    Show,
    List,
    Set { theme: String },
}
