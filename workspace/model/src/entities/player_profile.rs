use sea_orm::entity::prelude::*;

/// A player's public profile.
/// The owning player holds the foreign key, so a profile has no back reference column.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "player_profiles")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub twitter_handle: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    /// The player owning this profile, if any.
    #[sea_orm(has_one = "super::player::Entity")]
    Player,
}

impl Related<super::player::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Player.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
