use crate::commands::{CmdMessage, CmdResult};
use crate::config::TextoriumConfig;
use crate::error::Result;
use serde_json::Value;

#[derive(Debug, Clone)]
pub enum ConfigAction {
    ShowAll,
    /// A top-level key, or a dotted one such as `limits.max_title_chars`.
    ShowKey(String),
    /// A commented sample `textorium.toml`.
    Template,
}

pub fn run(config: &TextoriumConfig, action: ConfigAction) -> Result<CmdResult> {
    let mut result = CmdResult::default();
    match action {
        ConfigAction::ShowAll => {
            result.config = Some(config.clone());
        }
        ConfigAction::ShowKey(key) => match lookup(config, &key)? {
            Some(value) => result.add_message(CmdMessage::info(value)),
            None => {
                result.add_message(CmdMessage::error(format!("Unknown config key: {}", key)))
            }
        },
        ConfigAction::Template => {
            result.add_message(CmdMessage::info(TextoriumConfig::template()));
        }
    }
    Ok(result)
}

fn lookup(config: &TextoriumConfig, key: &str) -> Result<Option<String>> {
    let root = serde_json::to_value(config)?;
    let value = key
        .split('.')
        .try_fold(&root, |node, part| node.get(part))
        .filter(|value| !value.is_object());

    Ok(value.map(|value| match value {
        Value::String(s) => s.clone(),
        Value::Null => "(unset)".to_string(),
        other => other.to_string(),
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::MessageLevel;

    #[test]
    fn show_all_returns_config() {
        let config = TextoriumConfig::default();
        let result = run(&config, ConfigAction::ShowAll).unwrap();
        assert_eq!(result.config, Some(config));
    }

    #[test]
    fn show_key_reads_nested_values() {
        let config = TextoriumConfig::default();
        let result = run(&config, ConfigAction::ShowKey("limits.max_tag_chars".into())).unwrap();
        assert_eq!(result.messages[0].content, "50");

        let result = run(&config, ConfigAction::ShowKey("default_sort".into())).unwrap();
        assert_eq!(result.messages[0].content, "createdAt");

        let result = run(&config, ConfigAction::ShowKey("data_dir".into())).unwrap();
        assert_eq!(result.messages[0].content, "(unset)");
    }

    #[test]
    fn unknown_key_is_an_error_message() {
        let config = TextoriumConfig::default();
        for key in ["nope", "limits", "limits.nope"] {
            let result = run(&config, ConfigAction::ShowKey(key.into())).unwrap();
            assert!(matches!(result.messages[0].level, MessageLevel::Error));
        }
    }

    #[test]
    fn template_is_returned_as_message() {
        let result = run(&TextoriumConfig::default(), ConfigAction::Template).unwrap();
        assert!(result.messages[0].content.contains("export_file"));
    }
}
