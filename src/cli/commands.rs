//! CLI subcommand definitions

use std::path::PathBuf;

use clap::Subcommand;

#[derive(Debug, Subcommand)]
pub(crate) enum Commands {
    /// List assistants: recent submissions and the rest, or search results
    Assistants {
        /// JSON array of assistant items, newest first
        #[arg(short, long, value_name = "PATH")]
        items: Option<PathBuf>,

        /// Search keyword (switches to search results)
        #[arg(short, long, value_name = "KEYWORD")]
        search: Option<String>,

        /// Only list assistants of this category
        #[arg(long, value_name = "NAME")]
        category: Option<String>,

        /// Print every row instead of the initial window
        #[arg(short, long)]
        all: bool,
    },
    /// Show context, output and pricing of a model at one provider
    Provider {
        /// Provider id (exact)
        provider: String,
        /// Model id or part of it (first match wins)
        model: String,
    },
    /// Compare a model across every provider that offers it
    Model {
        /// Model id or part of it (first match wins)
        model: String,
    },
    /// List providers in the loaded catalog
    Providers,
}
