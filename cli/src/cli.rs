use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "changelog-pro")]
#[command(
    author,
    version,
    about = "Turn a markdown changelog into a polished HTML release page"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Generate the HTML changelog page
    Generate {
        /// Markdown changelog to read (defaults to CHANGELOG.md)
        #[clap(short, long)]
        input: Option<PathBuf>,

        /// HTML file to write (defaults to changelog.html)
        #[clap(short, long)]
        output: Option<PathBuf>,

        /// Built-in template to render with (default, professional)
        #[clap(short, long)]
        template: Option<String>,

        /// Configuration file path
        #[clap(short, long, default_value = "changelog-pro.toml")]
        config: String,

        /// Install command shown in version badge tooltips
        #[clap(long)]
        install_command: Option<String>,

        /// Page title (defaults to package metadata)
        #[clap(long)]
        title: Option<String>,

        /// Page author (defaults to package metadata)
        #[clap(long)]
        author: Option<String>,

        /// Page description (defaults to package metadata)
        #[clap(long)]
        description: Option<String>,

        /// Enable verbose output with additional information
        #[clap(short, long, default_value_t = false)]
        verbose: bool,
    },

    /// Show release statistics for the changelog
    Stats {
        /// Markdown changelog to read (defaults to CHANGELOG.md)
        #[clap(short, long)]
        input: Option<PathBuf>,

        /// Configuration file path
        #[clap(short, long, default_value = "changelog-pro.toml")]
        config: String,

        /// Print statistics as JSON instead of a table
        #[clap(long, default_value_t = false)]
        json: bool,
    },

    /// Serve a live preview that reloads when the changelog changes
    Preview {
        /// Markdown changelog to read (defaults to CHANGELOG.md)
        #[clap(short, long)]
        input: Option<PathBuf>,

        /// Built-in template to render with (default, professional)
        #[clap(short, long)]
        template: Option<String>,

        /// Configuration file path
        #[clap(short, long, default_value = "changelog-pro.toml")]
        config: String,

        /// Port to listen on
        #[clap(short, long, default_value_t = 3000)]
        port: u16,

        /// Host address to bind to
        #[clap(long, default_value = "127.0.0.1")]
        host: String,

        /// Enable verbose output with additional information
        #[clap(short, long, default_value_t = false)]
        verbose: bool,
    },

    /// Write a starter CHANGELOG.md and changelog-pro.toml
    Init {
        /// Overwrite existing files
        #[clap(long, default_value_t = false)]
        force: bool,
    },
}
