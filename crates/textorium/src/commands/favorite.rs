use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::store::SnippetStore;

use super::helpers::resolve_positions;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum FavoriteChange {
    Set(bool),
    Toggle,
}

pub fn favorite<S: SnippetStore, I: AsRef<str>>(store: &mut S, ids: &[I]) -> Result<CmdResult> {
    change_favorite(store, ids, FavoriteChange::Set(true))
}

pub fn unfavorite<S: SnippetStore, I: AsRef<str>>(store: &mut S, ids: &[I]) -> Result<CmdResult> {
    change_favorite(store, ids, FavoriteChange::Set(false))
}

pub fn toggle<S: SnippetStore, I: AsRef<str>>(store: &mut S, ids: &[I]) -> Result<CmdResult> {
    change_favorite(store, ids, FavoriteChange::Toggle)
}

fn change_favorite<S: SnippetStore, I: AsRef<str>>(
    store: &mut S,
    ids: &[I],
    change: FavoriteChange,
) -> Result<CmdResult> {
    let mut snippets = store.load_snippets()?;
    let positions = resolve_positions(&snippets, ids)?;
    let mut result = CmdResult::default();

    for pos in positions {
        let snippet = &mut snippets[pos];
        let favorite = match change {
            FavoriteChange::Set(value) => value,
            FavoriteChange::Toggle => !snippet.favorite,
        };

        if snippet.favorite == favorite {
            let state = if favorite { "already" } else { "not" };
            result.add_message(CmdMessage::info(format!(
                "Snippet {} a favorite: {}",
                state, snippet.title
            )));
            continue;
        }

        snippet.favorite = favorite;
        snippet.touch();

        let verb = if favorite { "favorited" } else { "unfavorited" };
        result.add_message(CmdMessage::success(format!(
            "Snippet {}: {}",
            verb, snippet.title
        )));
        result.affected.push(snippet.clone());
    }

    if !result.affected.is_empty() {
        store.save_snippets(&snippets)?;
    }
    Ok(result)
}
