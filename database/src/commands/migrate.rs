use migration::{Migrator, MigratorTrait};
use sea_orm::Database;
use std::error::Error;
use tracing::{error, info};

use crate::config::DatabaseConfig;

/// Execute the migrate command
pub async fn execute(steps: Option<u32>) -> Result<(), Box<dyn Error>> {
    let connection = connect().await?;

    info!("Running migrations...");

    // Log migration files to be applied
    let all_migrations = Migrator::get_migration_files();
    info!("Found {} migration files", all_migrations.len());
    for m in &all_migrations {
        info!("Migration file: {}", m.name());
    }

    // Run migrations
    match steps {
        Some(n) => {
            info!("Running {} migrations", n);
            match Migrator::up(&connection, Some(n)).await {
                Ok(_) => {
                    info!("Successfully ran {} migrations", n);
                    Ok(())
                }
                Err(e) => {
                    error!("Failed to run migrations: {}", e);
                    Err(Box::new(e))
                }
            }
        }
        None => {
            info!("Running all pending migrations");
            match Migrator::up(&connection, None).await {
                Ok(_) => {
                    info!("Successfully ran all migrations");
                    Ok(())
                }
                Err(e) => {
                    error!("Failed to run migrations: {}", e);
                    Err(Box::new(e))
                }
            }
        }
    }
}

/// Drop every table and re-run all migrations
pub async fn reset() -> Result<(), Box<dyn Error>> {
    let connection = connect().await?;

    info!("Resetting database...");
    match Migrator::fresh(&connection).await {
        Ok(_) => {
            info!("Database reset complete");
            Ok(())
        }
        Err(e) => {
            error!("Failed to reset database: {}", e);
            Err(Box::new(e))
        }
    }
}

/// Show applied and pending migrations
pub async fn status() -> Result<(), Box<dyn Error>> {
    let connection = connect().await?;

    match Migrator::status(&connection).await {
        Ok(_) => Ok(()),
        Err(e) => {
            error!("Failed to read migration status: {}", e);
            Err(Box::new(e))
        }
    }
}

async fn connect() -> Result<sea_orm::DatabaseConnection, Box<dyn Error>> {
    // Load configuration
    let config = DatabaseConfig::from_env()?;

    info!("Connecting to database: {}", config.url);

    match Database::connect(&config.url).await {
        Ok(conn) => Ok(conn),
        Err(e) => {
            error!("Failed to connect to database: {}", e);
            Err(Box::new(e))
        }
    }
}
