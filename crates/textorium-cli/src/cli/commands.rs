use anyhow::{Context, Result};
use clap::Parser;
use std::io::{self, Read};
use std::path::{Path, PathBuf};
use textorium::commands::config::ConfigAction;
use textorium::commands::update::SnippetUpdate;
use textorium::commands::{CmdResult, MessageLevel};
use textorium::init::{initialize, TextoriumContext};
use textorium::merge::{MergeStrategy, Overlay};
use textorium::ViewState;
use tracing::debug;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use super::render;
use super::setup::{Cli, Commands};

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let mut ctx = initialize(cli.data_dir.clone())?;
    debug!(data_dir = %ctx.data_dir.display(), "context ready");

    match cli.command {
        None => handle_list(&ctx, None, false, None, None, false, false),
        Some(command) => dispatch(&mut ctx, command),
    }
}

fn init_tracing(verbose: bool) {
    let default = if verbose {
        "textorium=debug"
    } else {
        "textorium=warn"
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    // A second init (e.g. from tests) is harmless.
    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(io::stderr).with_target(false))
        .try_init();
}

fn dispatch(ctx: &mut TextoriumContext, command: Commands) -> Result<()> {
    match command {
        Commands::Add {
            title,
            content,
            tags,
        } => {
            let result = ctx.api.create_snippet(&title, &content, &tags)?;
            print_messages(&result);
            Ok(())
        }
        Commands::List {
            search,
            favorites,
            tag,
            sort,
            asc,
            desc,
        } => handle_list(ctx, search, favorites, tag, sort.map(Into::into), asc, desc),
        Commands::View { ids } => {
            let result = ctx.api.view_snippets(&ids)?;
            print!("{}", render::render_full_many(&result.listed));
            Ok(())
        }
        Commands::Edit {
            id,
            title,
            content,
            tags,
        } => {
            let update = SnippetUpdate {
                title,
                content,
                tags: (!tags.is_empty()).then_some(tags),
            };
            let result = ctx.api.update_snippet(&id, update)?;
            print_messages(&result);
            Ok(())
        }
        Commands::Fav { ids, toggle } => {
            let result = if toggle {
                ctx.api.toggle_favorite(&ids)?
            } else {
                ctx.api.favorite_snippets(&ids)?
            };
            print_messages(&result);
            Ok(())
        }
        Commands::Unfav { ids } => {
            let result = ctx.api.unfavorite_snippets(&ids)?;
            print_messages(&result);
            Ok(())
        }
        Commands::Delete { ids } => {
            let result = ctx.api.delete_snippets(&ids)?;
            print_messages(&result);
            Ok(())
        }
        Commands::Tags => {
            let result = ctx.api.tags()?;
            print!("{}", render::render_tags(&result.tags));
            print_messages(&result);
            Ok(())
        }
        Commands::Export { path, stdout } => handle_export(ctx, path, stdout),
        Commands::Import { path, overwrite } => handle_import(ctx, &path, overwrite),
        Commands::Config { key, template } => handle_config(ctx, key, template),
    }
}

fn handle_list(
    ctx: &TextoriumContext,
    search: Option<String>,
    favorites_only: bool,
    tag: Option<String>,
    sort: Option<textorium::SortKey>,
    asc: bool,
    desc: bool,
) -> Result<()> {
    let defaults = ctx.api.default_view();
    let view = ViewState {
        search_term: search.unwrap_or_default(),
        favorites_only,
        selected_tag: tag.unwrap_or_default(),
        sort_by: sort.unwrap_or(defaults.sort_by),
        descending: if asc {
            false
        } else if desc {
            true
        } else {
            defaults.descending
        },
    };

    let result = ctx.api.list_snippets(&view)?;
    print!("{}", render::render_list(&result.listed));
    print_messages(&result);
    Ok(())
}

fn handle_export(ctx: &TextoriumContext, path: Option<PathBuf>, to_stdout: bool) -> Result<()> {
    if to_stdout {
        let result = ctx.api.export_snippets(None)?;
        if let Some(document) = result.export {
            println!("{}", document);
        }
        return Ok(());
    }

    let target = path.unwrap_or_else(|| PathBuf::from(&ctx.api.config().export_file));
    let result = ctx.api.export_snippets(Some(&target))?;
    print_messages(&result);
    Ok(())
}

fn handle_import(ctx: &mut TextoriumContext, path: &Path, overwrite: bool) -> Result<()> {
    let text = if path == Path::new("-") {
        let mut buffer = String::new();
        io::stdin()
            .read_to_string(&mut buffer)
            .context("Failed to read stdin")?;
        buffer
    } else {
        std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?
    };

    let strategy: Option<&dyn MergeStrategy> = if overwrite { Some(&Overlay) } else { None };
    let result = ctx.api.import_snippets(&text, strategy)?;
    print_messages(&result);
    Ok(())
}

fn handle_config(ctx: &TextoriumContext, key: Option<String>, template: bool) -> Result<()> {
    let action = match (key, template) {
        (_, true) => ConfigAction::Template,
        (Some(key), false) => ConfigAction::ShowKey(key),
        (None, false) => ConfigAction::ShowAll,
    };
    let result = ctx.api.show_config(action)?;

    if let Some(config) = &result.config {
        print!("{}", render::render_config(config));
    }
    print_messages(&result);

    if result
        .messages
        .iter()
        .any(|m| matches!(m.level, MessageLevel::Error))
    {
        anyhow::bail!("config lookup failed");
    }
    Ok(())
}

/// Errors and warnings go to stderr, everything else to stdout.
fn print_messages(result: &CmdResult) {
    let (problems, notes): (Vec<_>, Vec<_>) = result
        .messages
        .iter()
        .cloned()
        .partition(|m| matches!(m.level, MessageLevel::Warning | MessageLevel::Error));
    print!("{}", render::render_messages(&notes));
    eprint!("{}", render::render_messages(&problems));
}
