//! Embed builders for seed messages and command feedback.

use crate::model::{
    platform::{Embed, EmbedField},
    template::MessageTemplate,
};

/// Green used for successful command feedback.
const SUCCESS_COLOR: u32 = 0x2ecc71;
/// Red used for failed command feedback.
const FAILURE_COLOR: u32 = 0xe74c3c;
/// Blue used for informational answers such as help.
const INFO_COLOR: u32 = 0x3498db;

/// Builds the embed of a seed message from its template entry.
pub fn seed_message(message: &MessageTemplate) -> Embed {
    Embed {
        title: message.title.clone(),
        description: message.description.clone(),
        color: message.color,
        icon: message.icon.clone(),
        footer: message.footer.clone(),
        fields: message
            .fields
            .iter()
            .map(|f| EmbedField {
                title: f.title.clone(),
                value: f.value.clone(),
                inline: f.inline,
            })
            .collect(),
    }
}

pub fn success(title: impl Into<String>, description: impl Into<String>) -> Embed {
    Embed {
        title: title.into(),
        description: description.into(),
        color: SUCCESS_COLOR,
        ..Default::default()
    }
}

pub fn failure(title: impl Into<String>, description: impl Into<String>) -> Embed {
    Embed {
        title: title.into(),
        description: description.into(),
        color: FAILURE_COLOR,
        ..Default::default()
    }
}

/// Lists every command as `<prefix><command>` with its description.
///
/// # Arguments
/// - `prefix` - Configured command prefix, e.g. `!kod-`
/// - `commands` - `(trigger, description)` pairs in registry order
pub fn help<'a>(prefix: &str, commands: impl Iterator<Item = (&'a str, &'a str)>) -> Embed {
    Embed {
        title: "Commands".to_string(),
        description: "Everything the game understands:".to_string(),
        color: INFO_COLOR,
        fields: commands
            .map(|(trigger, description)| EmbedField {
                title: format!("{}{}", prefix, trigger),
                value: description.to_string(),
                inline: false,
            })
            .collect(),
        ..Default::default()
    }
}

pub fn unknown_command(prefix: &str, name: &str) -> Embed {
    failure(
        "Unknown command",
        format!(
            "`{}{}` is not a command. Try `{}help`.",
            prefix, name, prefix
        ),
    )
}
