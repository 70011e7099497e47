pub mod completions;
pub mod frame;
pub mod marketing;

use clap::{Parser, Subcommand};

/// shotkit - App screenshot compositing pipeline
#[derive(Parser, Debug)]
#[command(name = "shotkit")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Render screenshots inside a device chassis
    Frame(frame::FrameArgs),

    /// Render marketing slides from the shot deck
    Marketing(marketing::MarketingArgs),

    /// Generate shell completions
    Completions(completions::CompletionsArgs),
}
