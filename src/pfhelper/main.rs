use clap::Parser;
use colored::*;
use directories::ProjectDirs;
use pfhelper::api::{CmdMessage, MessageLevel, PfApi};
use pfhelper::commands::CmdResult;
use pfhelper::config::{Config, FileConfig};
use pfhelper::error::Result;
use pfhelper::table::store::TableStore;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

mod args;
use args::{AliasCommands, Cli, Commands};

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_target(false)
        .init();

    if let Err(e) = run() {
        eprintln!("{} {}", "Error:".red(), e);
        std::process::exit(1);
    }
}

struct AppContext {
    api: PfApi,
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    let mut ctx = init_context(&cli)?;

    match cli.command {
        Commands::Alias { command } => match command {
            AliasCommands::Add {
                alias,
                user,
                comment,
                save,
            } => handle_add(&mut ctx, &alias, &user, &comment, save),
            AliasCommands::Del {
                alias,
                comment_out,
                save,
            } => handle_del(&mut ctx, &alias, comment_out, save),
            AliasCommands::Deluser {
                user,
                comment_out,
                save,
            } => handle_deluser(&mut ctx, &user, comment_out, save),
            AliasCommands::List { as_saved } => handle_list(&mut ctx, as_saved),
        },
    }
}

fn default_config_path() -> PathBuf {
    if let Some(dirs) = ProjectDirs::from("com", "pfhelper", "pfhelper") {
        let path = dirs.config_dir().join("config.yaml");
        if path.exists() {
            return path;
        }
    }
    PathBuf::from("config.yaml")
}

fn init_context(cli: &Cli) -> Result<AppContext> {
    let config_path = cli
        .config_file
        .clone()
        .unwrap_or_else(default_config_path);
    let config = Config::load(&config_path)?;
    let files = FileConfig::new(&config)?;
    let store = TableStore::new(files);
    let api = PfApi::new(store, config.postmap().to_string());
    Ok(AppContext { api })
}

fn handle_add(
    ctx: &mut AppContext,
    alias: &str,
    user: &str,
    comment: &str,
    save: bool,
) -> Result<()> {
    let result = ctx.api.add_alias(alias, user, comment)?;
    print_result(&result);
    finish(ctx, save)
}

fn handle_del(ctx: &mut AppContext, alias: &str, comment_out: bool, save: bool) -> Result<()> {
    let result = ctx.api.delete_alias(alias, comment_out)?;
    print_result(&result);
    finish(ctx, save)
}

fn handle_deluser(ctx: &mut AppContext, user: &str, comment_out: bool, save: bool) -> Result<()> {
    let result = ctx.api.delete_user_aliases(user, comment_out)?;
    print_result(&result);
    finish(ctx, save)
}

fn handle_list(ctx: &mut AppContext, as_saved: bool) -> Result<()> {
    let result = ctx.api.list_aliases(as_saved)?;
    print_result(&result);
    Ok(())
}

/// After a mutation: write and recompile with `--save`, otherwise show
/// the would-be listing and keep the files untouched.
fn finish(ctx: &mut AppContext, save: bool) -> Result<()> {
    let result = if save {
        ctx.api.save()?
    } else {
        ctx.api.list_aliases(false)?
    };
    print_result(&result);
    Ok(())
}

fn print_result(result: &CmdResult) {
    if let Some(listing) = &result.listing {
        println!("{}", listing);
    }
    print_messages(&result.messages);
}

fn print_messages(messages: &[CmdMessage]) {
    for message in messages {
        match message.level {
            MessageLevel::Info => println!("{}", message.content.dimmed()),
            MessageLevel::Success => println!("{}", message.content.green()),
            MessageLevel::Warning => println!("{}", message.content.yellow()),
            MessageLevel::Error => println!("{}", message.content.red()),
        }
    }
}
