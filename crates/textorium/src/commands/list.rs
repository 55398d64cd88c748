use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::state::ViewState;
use crate::store::SnippetStore;

/// Lists the snippets visible under `view`.
pub fn run<S: SnippetStore>(store: &S, view: &ViewState) -> Result<CmdResult> {
    let snippets = store.load_snippets()?;
    let listed: Vec<_> = view.apply(&snippets).into_iter().cloned().collect();

    let mut result = CmdResult::default();
    if listed.is_empty() {
        let message = if snippets.is_empty() {
            "No snippets yet."
        } else {
            "No snippets match the current filters."
        };
        result.add_message(CmdMessage::info(message));
    }
    Ok(result.with_listed(listed))
}
