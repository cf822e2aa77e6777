use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(author, version, about = "page-based pagination demo server")]
pub struct Cli {
    /// Command
    #[clap(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone, PartialEq)]
#[clap(rename_all = "lower_case")]
pub enum Command {
    /// Start the HTTP server
    Serve {
        /// Port number (optional, defaults to 3000)
        #[arg(short, long, default_value_t = 3000)]
        port: u16,
    },
    /// Reset the database and insert demo articles
    Seed {
        /// Number of articles to insert
        #[arg(short, long, default_value_t = 250)]
        count: usize,
    },
}
