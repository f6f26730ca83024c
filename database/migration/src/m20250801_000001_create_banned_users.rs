use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        if !manager.has_table("banned_users").await? {
            manager
                .create_table(
                    Table::create()
                        .table(BannedUsers::Table)
                        .if_not_exists()
                        .col(
                            ColumnDef::new(BannedUsers::UserId)
                                .uuid()
                                .not_null()
                                .primary_key(),
                        )
                        .col(ColumnDef::new(BannedUsers::Reason).string())
                        .col(ColumnDef::new(BannedUsers::BannedBy).uuid())
                        .col(
                            ColumnDef::new(BannedUsers::CreatedAt)
                                .timestamp()
                                .not_null()
                                .default(Expr::current_timestamp()),
                        )
                        .to_owned(),
                )
                .await?;
        }

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(BannedUsers::Table).to_owned())
            .await?;

        Ok(())
    }
}

// Banned users table
#[derive(Iden)]
enum BannedUsers {
    Table,
    UserId,
    Reason,
    BannedBy,
    CreatedAt,
}
