//! Namespace manifests
//!
//! A manifest describes a namespace store as plain text, one declaration
//! per line. Blank lines and lines starting with `#` are ignored.
//!
//! ## Format
//!
//! ```text
//! project <path> <physical>
//! file <path> <physical>
//! action <physical> <timestamp> <kind> <version> <author> [key=value ...] [| comment]
//! corrupt <physical> <reason>
//! ```
//!
//! The root project `$` is implicit. Timestamps are RFC 3339. Fields are
//! separated by whitespace; a field containing spaces is wrapped in double
//! quotes, either whole (`"$/My Project"`) or after the key of an action
//! attribute (`label="release 1"`). A `|` outside quotes starts the comment.
//! Action keys:
//!
//! - `target=<physical>:<name>`: destination item (required by named kinds)
//! - `label=<text>`: label text (required by `label`)
//! - `from=<name>`: original name (required by `rename`)
//! - `project=<path>`: other project of a share or move
//! - `source=<physical>`: branch source
//! - `revision=<n>`: pinned revision (required by `pin` and `unpin`)

use crate::areas::store::{Store, StoreBuilder};
use crate::artifacts::items::ACTION_KEYWORDS;
use crate::artifacts::items::action::{Action, ActionKind, ActionType, ItemName};
use crate::artifacts::items::physical_id::PhysicalId;
use anyhow::Context;
use chrono::{DateTime, Utc};
use std::collections::HashMap;
use std::path::Path;

const COMMENT_PREFIX: char = '#';
const ACTION_COMMENT_DELIMITER: char = '|';
const QUOTE: char = '"';

pub fn load(path: &Path) -> anyhow::Result<Store> {
    let content = std::fs::read_to_string(path)
        .context(format!("Unable to read manifest {}", path.display()))?;

    parse(&content).context(format!("Invalid manifest {}", path.display()))
}

pub fn parse(content: &str) -> anyhow::Result<Store> {
    let mut builder = StoreBuilder::new();

    for (index, line) in content.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() || line.starts_with(COMMENT_PREFIX) {
            continue;
        }

        parse_line(&mut builder, line).context(format!("line {}: {}", index + 1, line))?;
    }

    Ok(builder.build())
}

fn parse_line(builder: &mut StoreBuilder, line: &str) -> anyhow::Result<()> {
    let (keyword, rest) = line.split_once(char::is_whitespace).unwrap_or((line, ""));
    let rest = rest.trim();

    match keyword {
        "project" => {
            let [path, physical] = fields(rest)?;
            builder.project(&path, &physical)?;
        }
        "file" => {
            let [path, physical] = fields(rest)?;
            builder.file(&path, &physical)?;
        }
        "corrupt" => {
            let (physical, reason) = rest
                .split_once(char::is_whitespace)
                .ok_or_else(|| anyhow::anyhow!("expected a physical id and a reason"))?;
            builder.corrupt(physical, reason.trim())?;
        }
        "action" => {
            let (physical, action) = parse_action(rest)?;
            builder.action(&physical, action)?;
        }
        _ => anyhow::bail!("unknown declaration `{}`", keyword),
    }

    Ok(())
}

fn fields<const N: usize>(rest: &str) -> anyhow::Result<[String; N]> {
    let (parts, comment) = tokenize(rest)?;
    if comment.is_some() {
        anyhow::bail!("unexpected `{}` outside quotes", ACTION_COMMENT_DELIMITER);
    }

    parts
        .try_into()
        .map_err(|parts: Vec<String>| anyhow::anyhow!("expected {} fields, found {}", N, parts.len()))
}

/// Split on whitespace, honoring double quotes, up to the first unquoted `|`
///
/// Returns the fields and the text after the `|`, if any.
fn tokenize(text: &str) -> anyhow::Result<(Vec<String>, Option<&str>)> {
    let mut fields = Vec::new();
    let mut current = String::new();
    let mut in_field = false;
    let mut quoted = false;

    for (index, c) in text.char_indices() {
        match c {
            QUOTE => {
                quoted = !quoted;
                in_field = true;
            }
            ACTION_COMMENT_DELIMITER if !quoted => {
                if in_field {
                    fields.push(std::mem::take(&mut current));
                }
                return Ok((fields, Some(&text[index + c.len_utf8()..])));
            }
            c if c.is_whitespace() && !quoted => {
                if in_field {
                    fields.push(std::mem::take(&mut current));
                    in_field = false;
                }
            }
            c => {
                current.push(c);
                in_field = true;
            }
        }
    }

    if quoted {
        anyhow::bail!("unterminated quote");
    }
    if in_field {
        fields.push(current);
    }

    Ok((fields, None))
}

fn parse_action(rest: &str) -> anyhow::Result<(String, Action)> {
    let (parts, comment) = tokenize(rest)?;
    let comment = comment
        .map(str::trim)
        .filter(|comment| !comment.is_empty())
        .map(str::to_string);

    let mut parts = parts.into_iter();
    let mut next = |what: &str| {
        parts
            .next()
            .ok_or_else(|| anyhow::anyhow!("missing {}", what))
    };

    let physical = next("physical id")?;
    let timestamp = next("timestamp")?;
    let timestamp = DateTime::parse_from_rfc3339(&timestamp)
        .context(format!("invalid timestamp {timestamp}"))?
        .with_timezone(&Utc);
    let kind = next("action kind")?;
    let action_type = ACTION_KEYWORDS
        .get(kind.as_str())
        .copied()
        .ok_or_else(|| anyhow::anyhow!("unknown action kind `{}`", kind))?;
    let version = next("version")?;
    let version = version
        .parse::<u32>()
        .context(format!("invalid version {version}"))?;
    let author = next("author")?;

    let mut attributes = HashMap::new();
    for attribute in parts {
        let (key, value) = attribute
            .split_once('=')
            .ok_or_else(|| anyhow::anyhow!("expected key=value, found `{}`", attribute))?;
        attributes.insert(key.to_string(), value.to_string());
    }

    let kind = parse_kind(action_type, &attributes)?;

    Ok((physical, Action::new(timestamp, author, version, comment, kind)))
}

fn parse_kind(
    action_type: ActionType,
    attributes: &HashMap<String, String>,
) -> anyhow::Result<ActionKind> {
    let required = |key: &str| {
        attributes
            .get(key)
            .map(|value| value.to_string())
            .ok_or_else(|| anyhow::anyhow!("{} requires `{}=`", action_type, key))
    };
    let optional = |key: &str| attributes.get(key).map(|value| value.to_string());
    let target = || -> anyhow::Result<ItemName> {
        let value = required("target")?;
        let (physical, logical) = value
            .split_once(':')
            .ok_or_else(|| anyhow::anyhow!("target must be <physical>:<name>, found `{}`", value))?;
        Ok(ItemName::new(PhysicalId::try_parse(physical)?, logical.to_string()))
    };
    let revision = || -> anyhow::Result<u32> {
        let value = required("revision")?;
        value
            .parse::<u32>()
            .context(format!("invalid revision {value}"))
    };

    let kind = match action_type {
        ActionType::Create => ActionKind::Create,
        ActionType::Edit => ActionKind::Edit,
        ActionType::Label => ActionKind::Label {
            label: required("label")?,
        },
        ActionType::Add => ActionKind::Add { name: target()? },
        ActionType::Delete => ActionKind::Delete { name: target()? },
        ActionType::Recover => ActionKind::Recover { name: target()? },
        ActionType::Destroy => ActionKind::Destroy { name: target()? },
        ActionType::Rename => ActionKind::Rename {
            name: target()?,
            original_name: required("from")?,
        },
        ActionType::Share => ActionKind::Share {
            name: target()?,
            original_project: optional("project"),
        },
        ActionType::Branch => ActionKind::Branch {
            name: target()?,
            source: optional("source")
                .map(|source| PhysicalId::try_parse(&source))
                .transpose()?,
        },
        ActionType::Pin => ActionKind::Pin {
            name: target()?,
            revision: revision()?,
        },
        ActionType::Unpin => ActionKind::Unpin {
            name: target()?,
            revision: revision()?,
        },
        ActionType::MoveFrom => ActionKind::MoveFrom {
            name: target()?,
            original_project: required("project")?,
        },
        ActionType::MoveTo => ActionKind::MoveTo {
            name: target()?,
            new_project: required("project")?,
        },
    };

    Ok(kind)
}
