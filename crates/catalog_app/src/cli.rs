use std::path::PathBuf;

use catalog_core::SiteForm;
use clap::{Parser, Subcommand};

use crate::app::Action;

#[derive(Debug, Parser)]
#[command(
    name = "site_catalog",
    version,
    about = "Personal catalog of useful sites with free-text search"
)]
pub struct Cli {
    /// RON configuration file [default: ./site_catalog.ron when present]
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Catalog document, overriding the configured data_file
    #[arg(long, global = true)]
    pub data: Option<PathBuf>,

    /// Log at debug level
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Print the activity log after the command
    #[arg(long, global = true)]
    pub show_log: bool,

    /// Without a subcommand the interactive shell starts
    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Find sites whose text contains QUERY, ignoring case
    Search {
        #[arg(default_value = "")]
        query: String,
    },
    /// Add a site; list options take comma-separated text
    Add {
        url: String,
        #[arg(long, default_value = "")]
        key_points: String,
        #[arg(long, default_value = "")]
        description: String,
        #[arg(long, default_value = "")]
        field: String,
        #[arg(long, default_value = "")]
        magic_tags: String,
    },
    /// Remove every site with exactly this URL
    Delete { url: String },
    /// Show all URLs in insertion order
    List,
    /// Ask the configured assistant a question
    Ask {
        #[arg(required = true)]
        question: Vec<String>,
    },
    /// Start the interactive shell
    Shell,
}

impl Command {
    /// The one-shot action for this command, or `None` for the shell.
    pub fn into_action(self) -> Option<Action> {
        let action = match self {
            Command::Search { query } => Action::Search(query),
            Command::Add {
                url,
                key_points,
                description,
                field,
                magic_tags,
            } => Action::Add(SiteForm {
                url,
                key_points,
                description,
                field,
                magic_tags,
            }),
            Command::Delete { url } => Action::Delete(url),
            Command::List => Action::List,
            Command::Ask { question } => Action::Ask(question.join(" ")),
            Command::Shell => return None,
        };
        Some(action)
    }
}
