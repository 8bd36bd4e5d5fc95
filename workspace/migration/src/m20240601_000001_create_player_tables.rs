use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Create player_profiles table
        manager
            .create_table(
                Table::create()
                    .table(PlayerProfiles::Table)
                    .if_not_exists()
                    .col(pk_auto(PlayerProfiles::Id))
                    .col(string_null(PlayerProfiles::TwitterHandle))
                    .to_owned(),
            )
            .await?;

        // Create players table, the owning side of the one-to-one link.
        // Deleting a referenced profile is rejected; cascades are done by the player store.
        manager
            .create_table(
                Table::create()
                    .table(Players::Table)
                    .if_not_exists()
                    .col(pk_auto(Players::Id))
                    .col(string(Players::Name))
                    .col(integer_null(Players::ProfileId).unique_key())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_player_profile")
                            .from(Players::Table, Players::ProfileId)
                            .to(PlayerProfiles::Table, PlayerProfiles::Id)
                            .on_delete(ForeignKeyAction::NoAction)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Players::Table).to_owned())
            .await?;

        manager
            .drop_table(Table::drop().table(PlayerProfiles::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
enum PlayerProfiles {
    Table,
    Id,
    TwitterHandle,
}

#[derive(DeriveIden)]
enum Players {
    Table,
    Id,
    Name,
    ProfileId,
}
