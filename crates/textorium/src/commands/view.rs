use crate::commands::CmdResult;
use crate::error::Result;
use crate::store::SnippetStore;

use super::helpers::resolve_positions;

pub fn run<S: SnippetStore, I: AsRef<str>>(store: &S, ids: &[I]) -> Result<CmdResult> {
    let snippets = store.load_snippets()?;
    let listed = resolve_positions(&snippets, ids)?
        .into_iter()
        .map(|pos| snippets[pos].clone())
        .collect();
    Ok(CmdResult::default().with_listed(listed))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::TextoriumError;
    use crate::store::memory::fixtures::StoreFixture;

    #[test]
    fn views_in_requested_order() {
        let fixture = StoreFixture::new().with_snippets(3);
        let result = run(&fixture.store, &["id-3", "id-1"]).unwrap();
        let ids: Vec<_> = result.listed.iter().map(|s| s.id.as_str()).collect();
        assert_eq!(ids, vec!["id-3", "id-1"]);
    }

    #[test]
    fn unknown_id_fails() {
        let fixture = StoreFixture::new().with_snippets(1);
        assert!(matches!(
            run(&fixture.store, &["id-9"]),
            Err(TextoriumError::SnippetNotFound(_))
        ));
    }
}
