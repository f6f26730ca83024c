use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        if !manager.has_table("ea_player_mappings").await? {
            manager
                .create_table(
                    Table::create()
                        .table(EaPlayerMappings::Table)
                        .if_not_exists()
                        .col(
                            ColumnDef::new(EaPlayerMappings::Id)
                                .big_integer()
                                .not_null()
                                .auto_increment()
                                .primary_key(),
                        )
                        .col(
                            ColumnDef::new(EaPlayerMappings::EaName)
                                .string()
                                .not_null()
                                .unique_key(),
                        )
                        .col(
                            ColumnDef::new(EaPlayerMappings::PlayerId)
                                .big_integer()
                                .not_null(),
                        )
                        .col(
                            ColumnDef::new(EaPlayerMappings::CreatedAt)
                                .timestamp()
                                .not_null()
                                .default(Expr::current_timestamp()),
                        )
                        .to_owned(),
                )
                .await?;

            manager
                .create_index(
                    Index::create()
                        .name("ea_player_mappings_player_id")
                        .table(EaPlayerMappings::Table)
                        .col(EaPlayerMappings::PlayerId)
                        .if_not_exists()
                        .to_owned(),
                )
                .await?;
        }

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(EaPlayerMappings::Table).to_owned())
            .await?;

        Ok(())
    }
}

// EA player mappings table
#[derive(Iden)]
enum EaPlayerMappings {
    Table,
    Id,
    EaName,
    PlayerId,
    CreatedAt,
}
