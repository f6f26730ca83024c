use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        if !manager.has_table("clubs").await? {
            // Create clubs table
            manager
                .create_table(
                    Table::create()
                        .table(Clubs::Table)
                        .if_not_exists()
                        .col(
                            ColumnDef::new(Clubs::Id)
                                .big_integer()
                                .not_null()
                                .auto_increment()
                                .primary_key(),
                        )
                        .col(ColumnDef::new(Clubs::Name).string().not_null().unique_key())
                        .col(ColumnDef::new(Clubs::SalaryCap).big_integer().not_null())
                        .col(
                            ColumnDef::new(Clubs::Available)
                                .boolean()
                                .not_null()
                                .default(true),
                        )
                        .col(
                            ColumnDef::new(Clubs::CreatedAt)
                                .timestamp()
                                .not_null()
                                .default(Expr::current_timestamp()),
                        )
                        .to_owned(),
                )
                .await?;
        }

        if !manager.has_table("users").await? {
            // Create users table; ids come from the external auth platform
            manager
                .create_table(
                    Table::create()
                        .table(Users::Table)
                        .if_not_exists()
                        .col(ColumnDef::new(Users::Id).uuid().not_null().primary_key())
                        .col(
                            ColumnDef::new(Users::Username)
                                .string()
                                .not_null()
                                .unique_key(),
                        )
                        .col(
                            ColumnDef::new(Users::Role)
                                .string()
                                .not_null()
                                .default("manager"),
                        )
                        .col(ColumnDef::new(Users::ClubId).big_integer())
                        .col(
                            ColumnDef::new(Users::CreatedAt)
                                .timestamp()
                                .not_null()
                                .default(Expr::current_timestamp()),
                        )
                        .to_owned(),
                )
                .await?;
        }

        if !manager.has_table("players").await? {
            // Create players table
            manager
                .create_table(
                    Table::create()
                        .table(Players::Table)
                        .if_not_exists()
                        .col(
                            ColumnDef::new(Players::Id)
                                .big_integer()
                                .not_null()
                                .auto_increment()
                                .primary_key(),
                        )
                        .col(ColumnDef::new(Players::Name).string().not_null())
                        .col(ColumnDef::new(Players::Position).string().not_null())
                        .col(ColumnDef::new(Players::ClubId).big_integer())
                        .col(
                            ColumnDef::new(Players::Salary)
                                .big_integer()
                                .not_null()
                                .default(0),
                        )
                        .col(ColumnDef::new(Players::UserId).uuid())
                        .col(
                            ColumnDef::new(Players::CreatedAt)
                                .timestamp()
                                .not_null()
                                .default(Expr::current_timestamp()),
                        )
                        .col(
                            ColumnDef::new(Players::UpdatedAt)
                                .timestamp()
                                .not_null()
                                .default(Expr::current_timestamp()),
                        )
                        .to_owned(),
                )
                .await?;

            // Roster lookups filter by club
            manager
                .create_index(
                    Index::create()
                        .name("players_club_id")
                        .table(Players::Table)
                        .col(Players::ClubId)
                        .if_not_exists()
                        .to_owned(),
                )
                .await?;
        }

        if !manager.has_table("offers").await? {
            // Create offers table
            manager
                .create_table(
                    Table::create()
                        .table(Offers::Table)
                        .if_not_exists()
                        .col(
                            ColumnDef::new(Offers::Id)
                                .big_integer()
                                .not_null()
                                .auto_increment()
                                .primary_key(),
                        )
                        .col(ColumnDef::new(Offers::PlayerId).big_integer().not_null())
                        .col(ColumnDef::new(Offers::ClubId).big_integer().not_null())
                        .col(ColumnDef::new(Offers::Amount).big_integer().not_null())
                        .col(
                            ColumnDef::new(Offers::CreatedAt)
                                .timestamp()
                                .not_null()
                                .default(Expr::current_timestamp()),
                        )
                        .col(ColumnDef::new(Offers::ExpiresAt).timestamp().not_null())
                        .to_owned(),
                )
                .await?;

            manager
                .create_index(
                    Index::create()
                        .name("offers_player_id")
                        .table(Offers::Table)
                        .col(Offers::PlayerId)
                        .if_not_exists()
                        .to_owned(),
                )
                .await?;

            manager
                .create_index(
                    Index::create()
                        .name("offers_club_id")
                        .table(Offers::Table)
                        .col(Offers::ClubId)
                        .if_not_exists()
                        .to_owned(),
                )
                .await?;
        }

        if !manager.has_table("notifications").await? {
            // Create notifications table
            manager
                .create_table(
                    Table::create()
                        .table(Notifications::Table)
                        .if_not_exists()
                        .col(
                            ColumnDef::new(Notifications::Id)
                                .big_integer()
                                .not_null()
                                .auto_increment()
                                .primary_key(),
                        )
                        .col(ColumnDef::new(Notifications::UserId).uuid().not_null())
                        .col(ColumnDef::new(Notifications::Kind).string().not_null())
                        .col(ColumnDef::new(Notifications::Message).string().not_null())
                        .col(
                            ColumnDef::new(Notifications::Read)
                                .boolean()
                                .not_null()
                                .default(false),
                        )
                        .col(
                            ColumnDef::new(Notifications::CreatedAt)
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
                        .name("notifications_user_id")
                        .table(Notifications::Table)
                        .col(Notifications::UserId)
                        .if_not_exists()
                        .to_owned(),
                )
                .await?;
        }

        if !manager.has_table("system_settings").await? {
            // Create system_settings key/value table
            manager
                .create_table(
                    Table::create()
                        .table(SystemSettings::Table)
                        .if_not_exists()
                        .col(
                            ColumnDef::new(SystemSettings::Key)
                                .string()
                                .not_null()
                                .primary_key(),
                        )
                        .col(ColumnDef::new(SystemSettings::Value).string().not_null())
                        .col(
                            ColumnDef::new(SystemSettings::UpdatedAt)
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
        // Drop tables in reverse order
        manager
            .drop_table(Table::drop().table(SystemSettings::Table).to_owned())
            .await?;

        manager
            .drop_table(Table::drop().table(Notifications::Table).to_owned())
            .await?;

        manager
            .drop_table(Table::drop().table(Offers::Table).to_owned())
            .await?;

        manager
            .drop_table(Table::drop().table(Players::Table).to_owned())
            .await?;

        manager
            .drop_table(Table::drop().table(Users::Table).to_owned())
            .await?;

        manager
            .drop_table(Table::drop().table(Clubs::Table).to_owned())
            .await?;

        Ok(())
    }
}

// Clubs table
#[derive(Iden)]
enum Clubs {
    Table,
    Id,
    Name,
    SalaryCap,
    Available,
    CreatedAt,
}

// Users table
#[derive(Iden)]
enum Users {
    Table,
    Id,
    Username,
    Role,
    ClubId,
    CreatedAt,
}

// Players table
#[derive(Iden)]
enum Players {
    Table,
    Id,
    Name,
    Position,
    ClubId,
    Salary,
    UserId,
    CreatedAt,
    UpdatedAt,
}

// Offers table
#[derive(Iden)]
enum Offers {
    Table,
    Id,
    PlayerId,
    ClubId,
    Amount,
    CreatedAt,
    ExpiresAt,
}

// Notifications table
#[derive(Iden)]
enum Notifications {
    Table,
    Id,
    UserId,
    Kind,
    Message,
    Read,
    CreatedAt,
}

// System settings table
#[derive(Iden)]
enum SystemSettings {
    Table,
    Key,
    Value,
    UpdatedAt,
}
