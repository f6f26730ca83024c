use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Settlement drives an explicit lifecycle column; rows that
        // predate it are all still open.
        if manager.has_table("offers").await? {
            if !manager.has_column("offers", "status").await? {
                manager
                    .alter_table(
                        Table::alter()
                            .table(Offers::Table)
                            .add_column(
                                ColumnDef::new(Offers::Status)
                                    .string()
                                    .not_null()
                                    .default("open"),
                            )
                            .to_owned(),
                    )
                    .await?;
            }

            if !manager.has_column("offers", "settled_at").await? {
                manager
                    .alter_table(
                        Table::alter()
                            .table(Offers::Table)
                            .add_column(ColumnDef::new(Offers::SettledAt).timestamp())
                            .to_owned(),
                    )
                    .await?;
            }

            // The sweep scans open offers by expiry
            manager
                .create_index(
                    Index::create()
                        .name("offers_status_expires_at")
                        .table(Offers::Table)
                        .col(Offers::Status)
                        .col(Offers::ExpiresAt)
                        .if_not_exists()
                        .to_owned(),
                )
                .await?;
        }

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        if manager.has_table("offers").await? {
            manager
                .drop_index(
                    Index::drop()
                        .name("offers_status_expires_at")
                        .table(Offers::Table)
                        .to_owned(),
                )
                .await?;

            if manager.has_column("offers", "settled_at").await? {
                manager
                    .alter_table(
                        Table::alter()
                            .table(Offers::Table)
                            .drop_column(Offers::SettledAt)
                            .to_owned(),
                    )
                    .await?;
            }

            if manager.has_column("offers", "status").await? {
                manager
                    .alter_table(
                        Table::alter()
                            .table(Offers::Table)
                            .drop_column(Offers::Status)
                            .to_owned(),
                    )
                    .await?;
            }
        }

        Ok(())
    }
}

// Offers table
#[derive(Iden)]
enum Offers {
    Table,
    Status,
    SettledAt,
    ExpiresAt,
}
