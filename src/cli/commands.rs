use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "pkgnews")]
#[command(about = "News items from a package metadata repository")]
#[command(version)]
pub struct Cli {
    /// Print machine-readable JSON lines instead of formatted text
    #[arg(long, global = true)]
    pub porcelain: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Sync the metadata repository and report unread news
    Update,

    /// List and read news items
    News {
        #[command(subcommand)]
        command: NewsCommands,
    },
}

#[derive(Subcommand)]
pub enum NewsCommands {
    /// List news items
    List {
        /// Only list news items that have not been read
        #[arg(long)]
        new: bool,
    },

    /// Read news items and mark them as read
    Read {
        /// Mark items as read without printing them
        #[arg(short, long)]
        quiet: bool,

        /// Ordinals or ids of the items to read (all unread items if omitted)
        items: Vec<String>,
    },
}
