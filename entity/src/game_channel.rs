use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "game_channel")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub guild_id: String,
    pub name: String,
    pub channel_id: String,
    pub tier: i32,
    pub kind: String,
    pub position: i32,
    pub allow: i64,
    pub deny: i64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::game_server::Entity",
        from = "Column::GuildId",
        to = "super::game_server::Column::GuildId",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    GameServer,
}

impl Related<super::game_server::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::GameServer.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
