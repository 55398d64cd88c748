use crate::commands::{CmdMessage, CmdResult};
use crate::error::{Result, TextoriumError};
use crate::store::SnippetStore;
use std::fs;
use std::path::Path;

/// Serializes the whole collection as a pretty-printed JSON array.
///
/// With a `target` the document is also written there; otherwise the caller
/// takes it from `CmdResult::export`.
pub fn run<S: SnippetStore>(store: &S, target: Option<&Path>) -> Result<CmdResult> {
    let snippets = store.load_snippets()?;
    let document = serde_json::to_string_pretty(&snippets)?;

    let mut result = CmdResult::default();
    if let Some(path) = target {
        fs::write(path, &document).map_err(TextoriumError::Io)?;
        result.add_message(CmdMessage::success(format!(
            "Exported {} snippets to {}",
            snippets.len(),
            path.display()
        )));
    }
    result.export = Some(document);
    Ok(result)
}
