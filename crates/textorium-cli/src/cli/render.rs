//! Plain-text rendering of command results.
//!
//! Every function returns a `String`; printing is left to `commands.rs`.

use chrono::{DateTime, Utc};
use serde_json::Value;
use std::time::Duration;
use textorium::commands::{CmdMessage, MessageLevel};
use textorium::config::TextoriumConfig;
use textorium::model::DEFAULT_CATEGORY;
use textorium::tags::normalize_category;
use textorium::{Snippet, Tag, TagOption};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use super::styles::{Theme, FAVORITE_ICON, PLAIN_ICON};

const TITLE_WIDTH: usize = 40;
const ELLIPSIS: &str = "…";

/// One line per snippet: favorite mark, id, title, tags and age.
pub fn render_list(snippets: &[Snippet]) -> String {
    let theme = Theme::default();
    let mut out = String::new();
    for snippet in snippets {
        let icon = if snippet.favorite {
            theme.favorite.apply_to(FAVORITE_ICON).to_string()
        } else {
            PLAIN_ICON.to_string()
        };
        let title = pad_to_width(&truncate_to_width(&snippet.title, TITLE_WIDTH), TITLE_WIDTH);
        let tags = format_tags(&snippet.tags);

        out.push_str(&format!(
            "{} {}  {}  {}",
            icon,
            theme.id.apply_to(&snippet.id),
            theme.title.apply_to(title),
            theme.time.apply_to(format_time_ago(snippet.created_at)),
        ));
        if !tags.is_empty() {
            out.push_str(&format!("  {}", theme.tag.apply_to(tags)));
        }
        out.push('\n');
    }
    out
}

/// A snippet with its metadata header and full content.
pub fn render_full(snippet: &Snippet) -> String {
    let theme = Theme::default();
    let mut out = String::new();

    let mark = if snippet.favorite {
        format!(" {}", theme.favorite.apply_to(FAVORITE_ICON))
    } else {
        String::new()
    };
    out.push_str(&format!("{}{}\n", theme.title.apply_to(&snippet.title), mark));
    out.push_str(&format!("{}\n", theme.id.apply_to(&snippet.id)));
    out.push_str(&format!(
        "{}\n",
        theme.time.apply_to(format!(
            "created {} ({}), updated {} ({})",
            format_timestamp(snippet.created_at),
            format_time_ago(snippet.created_at),
            format_timestamp(snippet.updated_at),
            format_time_ago(snippet.updated_at),
        ))
    ));
    let tags = format_tags(&snippet.tags);
    if !tags.is_empty() {
        out.push_str(&format!("{}\n", theme.tag.apply_to(tags)));
    }
    out.push('\n');
    out.push_str(&snippet.content);
    out.push('\n');
    out
}

pub fn render_full_many(snippets: &[Snippet]) -> String {
    snippets
        .iter()
        .map(render_full)
        .collect::<Vec<_>>()
        .join("\n---\n\n")
}

/// Catalog entries as `label  value`, aligned on the label column.
pub fn render_tags(tags: &[TagOption]) -> String {
    let theme = Theme::default();
    let width = tags.iter().map(|t| t.label.width()).max().unwrap_or(0);
    tags.iter()
        .map(|t| {
            format!(
                "{}  {}\n",
                theme.tag.apply_to(pad_to_width(&t.label, width)),
                theme.muted.apply_to(&t.value)
            )
        })
        .collect()
}

pub fn render_messages(messages: &[CmdMessage]) -> String {
    let theme = Theme::default();
    messages
        .iter()
        .map(|m| {
            let line = match m.level {
                MessageLevel::Info => theme.muted.apply_to(m.content.as_str()).to_string(),
                MessageLevel::Success => theme.success.apply_to(m.content.as_str()).to_string(),
                MessageLevel::Warning => theme.warning.apply_to(m.content.as_str()).to_string(),
                MessageLevel::Error => theme.error.apply_to(m.content.as_str()).to_string(),
            };
            format!("{}\n", line)
        })
        .collect()
}

/// `key = value` lines, nested tables flattened to dotted keys.
pub fn render_config(config: &TextoriumConfig) -> String {
    let mut lines = Vec::new();
    if let Ok(value) = serde_json::to_value(config) {
        flatten_config("", &value, &mut lines);
    }
    lines.iter().map(|l| format!("{}\n", l)).collect()
}

fn flatten_config(prefix: &str, value: &Value, lines: &mut Vec<String>) {
    match value {
        Value::Object(map) => {
            for (key, child) in map {
                let path = if prefix.is_empty() {
                    key.clone()
                } else {
                    format!("{}.{}", prefix, key)
                };
                flatten_config(&path, child, lines);
            }
        }
        Value::Null => lines.push(format!("{} = (unset)", prefix)),
        Value::String(s) => lines.push(format!("{} = {:?}", prefix, s)),
        other => lines.push(format!("{} = {}", prefix, other)),
    }
}

fn format_tags(tags: &[Tag]) -> String {
    tags.iter()
        .filter_map(|t| {
            let name = t.name.trim();
            if name.is_empty() {
                return None;
            }
            let category = normalize_category(&t.category);
            if category.eq_ignore_ascii_case(DEFAULT_CATEGORY) {
                Some(format!("#{}", name))
            } else {
                Some(format!("#{}:{}", name, category))
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

fn format_timestamp(millis: i64) -> String {
    DateTime::<Utc>::from_timestamp_millis(millis)
        .map(|dt| dt.format("%Y-%m-%d %H:%M").to_string())
        .unwrap_or_else(|| "unknown".to_string())
}

fn format_time_ago(millis: i64) -> String {
    let elapsed = Utc::now().timestamp_millis().saturating_sub(millis).max(0);
    timeago::Formatter::new().convert(Duration::from_millis(elapsed as u64))
}

/// Cuts `text` to at most `width` terminal columns, marking the cut with an
/// ellipsis. Newlines are flattened to spaces.
pub fn truncate_to_width(text: &str, width: usize) -> String {
    let flat: String = text
        .chars()
        .map(|c| if c == '\n' || c == '\r' { ' ' } else { c })
        .collect();
    if flat.width() <= width {
        return flat;
    }

    let budget = width.saturating_sub(ELLIPSIS.width());
    let mut out = String::new();
    let mut used = 0;
    for c in flat.chars() {
        let w = c.width().unwrap_or(0);
        if used + w > budget {
            break;
        }
        used += w;
        out.push(c);
    }
    out.push_str(ELLIPSIS);
    out
}

fn pad_to_width(text: &str, width: usize) -> String {
    let pad = width.saturating_sub(text.width());
    format!("{}{}", text, " ".repeat(pad))
}
