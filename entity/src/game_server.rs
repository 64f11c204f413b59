use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "game_server")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(unique)]
    pub guild_id: String,
    pub playing: bool,
    pub needs_check: bool,
    pub everyone_role_id: String,
    pub category_id: Option<String>,
    pub category_name: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::game_role::Entity")]
    GameRole,
    #[sea_orm(has_many = "super::game_channel::Entity")]
    GameChannel,
    #[sea_orm(has_many = "super::game_channel_overwrite::Entity")]
    GameChannelOverwrite,
    #[sea_orm(has_many = "super::game_message::Entity")]
    GameMessage,
    #[sea_orm(has_many = "super::game_user::Entity")]
    GameUser,
}

impl Related<super::game_role::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::GameRole.def()
    }
}

impl Related<super::game_channel::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::GameChannel.def()
    }
}

impl Related<super::game_channel_overwrite::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::GameChannelOverwrite.def()
    }
}

impl Related<super::game_message::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::GameMessage.def()
    }
}

impl Related<super::game_user::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::GameUser.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
