//! Routing of text commands and reaction triggers.
//!
//! Commands and reaction actions are tagged variants, each carrying its trigger
//! and description. Dispatch scans the registry in order and runs the first entry
//! whose trigger matches.

use dioxus_logger::tracing;
use sea_orm::DatabaseConnection;

use crate::{
    data::game_server::GameServerRepository,
    error::AppError,
    model::{platform::Embed, template::Template},
    platform::{discord::configured_emoji_key, Platform},
    service::{
        embed,
        game::{roster::JoinOutcome, GameService},
    },
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    CloseGame,
    Help,
    LeaveGame,
}

impl Command {
    /// Registered commands in dispatch order.
    pub const ALL: [Command; 3] = [Command::CloseGame, Command::Help, Command::LeaveGame];

    pub fn trigger(&self) -> &'static str {
        match self {
            Self::CloseGame => "closeGame",
            Self::Help => "help",
            Self::LeaveGame => "leaveGame",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Self::CloseGame => "Removes the game from this server (server owner only)",
            Self::Help => "Lists every command",
            Self::LeaveGame => "Leaves the game and gives up your rank",
        }
    }

    pub fn find(name: &str) -> Option<Command> {
        Self::ALL.into_iter().find(|c| c.trigger() == name)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReactionAction {
    Join,
}

impl ReactionAction {
    /// Registered reaction actions in dispatch order.
    pub const ALL: [ReactionAction; 1] = [ReactionAction::Join];

    /// Emoji key the action reacts to.
    pub fn trigger(&self, template: &Template) -> String {
        match self {
            Self::Join => configured_emoji_key(&template.join_emoji),
        }
    }
}

/// A guild text message that may carry a command.
#[derive(Debug, Clone)]
pub struct CommandEvent {
    pub guild_id: u64,
    pub channel_id: u64,
    pub author_id: u64,
    /// Owner of the guild the message was posted in.
    pub owner_id: u64,
    pub content: String,
}

/// A reaction added to a message in a guild.
#[derive(Debug, Clone)]
pub struct ReactionEvent {
    pub guild_id: u64,
    pub channel_id: u64,
    pub message_id: u64,
    pub user_id: u64,
    /// Normalized emoji key, see `emoji_key`.
    pub emoji: String,
}

/// Extracts the command name from a message, if it starts with the prefix.
pub fn parse_command<'c>(prefix: &str, content: &'c str) -> Option<&'c str> {
    content
        .trim_start()
        .strip_prefix(prefix)?
        .split_whitespace()
        .next()
}

pub struct Dispatcher<'a> {
    db: &'a DatabaseConnection,
    platform: &'a dyn Platform,
    template: &'a Template,
    prefix: &'a str,
}

impl<'a> Dispatcher<'a> {
    /// Creates a new Dispatcher instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    /// - `platform` - Discord gateway implementation
    /// - `template` - Game template loaded at startup
    /// - `prefix` - Prefix every command starts with
    pub fn new(
        db: &'a DatabaseConnection,
        platform: &'a dyn Platform,
        template: &'a Template,
        prefix: &'a str,
    ) -> Self {
        Self {
            db,
            platform,
            template,
            prefix,
        }
    }

    fn game(&self) -> GameService<'a> {
        GameService::new(self.db, self.platform, self.template)
    }

    /// Runs the command carried by a message.
    ///
    /// Messages without the prefix, messages from the bot and messages in guilds
    /// without a game are ignored. Unknown commands are answered with a hint to
    /// use help.
    pub async fn handle_message(&self, event: &CommandEvent) -> Result<(), AppError> {
        if event.author_id == self.platform.current_user_id() {
            return Ok(());
        }
        let Some(name) = parse_command(self.prefix, &event.content) else {
            return Ok(());
        };

        let repo = GameServerRepository::new(self.db);
        if repo.find_by_guild_id(event.guild_id).await?.is_none() {
            tracing::debug!(
                "Ignoring command {} in guild {} without a game",
                name,
                event.guild_id
            );
            return Ok(());
        }

        let Some(command) = Command::find(name) else {
            return self
                .reply(event, embed::unknown_command(self.prefix, name))
                .await;
        };

        tracing::debug!(
            "Running command {} for user {} in guild {}",
            command.trigger(),
            event.author_id,
            event.guild_id
        );

        match command {
            Command::CloseGame => self.close_game(event).await,
            Command::Help => {
                let listing = embed::help(
                    self.prefix,
                    Command::ALL.iter().map(|c| (c.trigger(), c.description())),
                );
                self.reply(event, listing).await
            }
            Command::LeaveGame => {
                let left = self.game().leave(event.guild_id, event.author_id).await?;
                let feedback = if left {
                    embed::success(
                        "Left the game",
                        format!("<@{}> has left the game.", event.author_id),
                    )
                } else {
                    embed::failure(
                        "Not playing",
                        format!("<@{}> is not in the game.", event.author_id),
                    )
                };
                self.reply(event, feedback).await
            }
        }
    }

    /// Tears the game down and leaves the guild. Only the guild owner may do this;
    /// anyone else is ignored without a reply.
    async fn close_game(&self, event: &CommandEvent) -> Result<(), AppError> {
        if event.author_id != event.owner_id {
            tracing::debug!(
                "Ignoring closeGame from non-owner {} in guild {}",
                event.author_id,
                event.guild_id
            );
            return Ok(());
        }

        tracing::info!("Owner closed the game on guild {}", event.guild_id);

        let feedback = embed::success(
            "Closing game",
            "Removing the game and leaving the server.",
        );
        if let Err(e) = self.reply(event, feedback).await {
            tracing::warn!(
                "Failed to confirm closeGame on guild {}: {:?}",
                event.guild_id,
                e
            );
        }

        if let Err(e) = self.game().destroy_server(event.guild_id).await {
            tracing::error!("Failed to close game on guild {}: {:?}", event.guild_id, e);
            let feedback = embed::failure("Closing failed", "The game could not be removed.");
            return self.reply(event, feedback).await;
        }

        self.platform.leave_guild(event.guild_id).await?;
        Ok(())
    }

    /// Runs the first reaction action whose trigger matches the emoji.
    ///
    /// Joining only fires on the recorded rules message.
    pub async fn handle_reaction(&self, event: &ReactionEvent) -> Result<(), AppError> {
        if event.user_id == self.platform.current_user_id() {
            return Ok(());
        }
        let Some(action) = ReactionAction::ALL
            .into_iter()
            .find(|a| a.trigger(self.template) == event.emoji)
        else {
            return Ok(());
        };

        match action {
            ReactionAction::Join => {
                let repo = GameServerRepository::new(self.db);
                let on_rules = repo
                    .find_by_guild_id(event.guild_id)
                    .await?
                    .and_then(|mirror| mirror.rules_message().copied())
                    .is_some_and(|rules| rules.message_id == event.message_id);
                if !on_rules {
                    return Ok(());
                }

                match self.game().join(event.guild_id, event.user_id).await? {
                    JoinOutcome::Joined => {}
                    outcome => tracing::debug!(
                        "Join by {} in guild {} ignored: {:?}",
                        event.user_id,
                        event.guild_id,
                        outcome
                    ),
                }
                Ok(())
            }
        }
    }

    async fn reply(&self, event: &CommandEvent, feedback: Embed) -> Result<(), AppError> {
        self.platform.send_embed(event.channel_id, &feedback).await?;
        Ok(())
    }
}
