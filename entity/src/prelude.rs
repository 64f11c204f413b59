pub use super::game_channel::Entity as GameChannel;
pub use super::game_channel_overwrite::Entity as GameChannelOverwrite;
pub use super::game_message::Entity as GameMessage;
pub use super::game_role::Entity as GameRole;
pub use super::game_server::Entity as GameServer;
pub use super::game_user::Entity as GameUser;
