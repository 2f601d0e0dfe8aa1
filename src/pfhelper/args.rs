use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "pfhelper")]
#[command(about = "Comment-preserving editor for Postfix lookup tables", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Use this config file instead of the default
    #[arg(long, global = true)]
    pub config_file: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Manipulate or list aliases in the virtual-alias and
    /// sender-login-maps tables
    Alias {
        #[command(subcommand)]
        command: AliasCommands,
    },
}

#[derive(Subcommand, Debug)]
pub enum AliasCommands {
    /// Add a new email alias
    Add {
        /// The alias to be added
        alias: String,

        /// An already existing email user
        user: String,

        /// A comment to be added to the file(s)
        #[arg(long, default_value = "")]
        comment: String,

        /// Save the files instead of printing to stdout
        #[arg(long)]
        save: bool,
    },

    /// Delete an existing email alias
    Del {
        /// Alias to be deleted
        alias: String,

        /// Mark the entry as a comment instead of removing it
        #[arg(long)]
        comment_out: bool,

        /// Save the files instead of printing to stdout
        #[arg(long)]
        save: bool,
    },

    /// Delete all existing aliases of a user
    Deluser {
        /// User whose aliases get deleted
        user: String,

        /// Mark the entries as comments instead of removing them
        #[arg(long)]
        comment_out: bool,

        /// Save the files instead of printing to stdout
        #[arg(long)]
        save: bool,
    },

    /// List existing email aliases
    #[command(alias = "ls")]
    List {
        /// Print the files as they would be written
        #[arg(long)]
        as_saved: bool,
    },
}
