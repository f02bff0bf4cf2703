//! Migrate command handler
//!
//! Applies, lists or reverts the embedded SQLite migrations.

use crate::config::settings::Settings;
use crate::db::{applied_migrations, pending_migrations, revert_migrations, run_pending_migrations};
use crate::error::AppResult;

pub struct MigrateCommandHandler {
    config: Settings,
}

impl MigrateCommandHandler {
    pub fn new(config: Settings) -> Self {
        Self { config }
    }

    /// Runs the migrate command.
    ///
    /// Returns the migrations that were listed, applied or reverted.
    pub async fn execute(&self, dry_run: bool, rollback: Option<u32>) -> AppResult<Vec<String>> {
        self.config.database.validate()?;

        if dry_run {
            return self.show_pending_migrations().await;
        }

        match rollback {
            Some(steps) => self.rollback_migrations(steps).await,
            None => self.run_migrations().await,
        }
    }

    async fn show_pending_migrations(&self) -> AppResult<Vec<String>> {
        println!("Checking for pending migrations...");

        let applied = applied_migrations(&self.config.database).await?;
        println!("{} migration(s) already applied", applied.len());

        let pending = pending_migrations(&self.config.database).await?;
        if pending.is_empty() {
            println!("✓ No pending migrations found - database is up to date");
        } else {
            println!("Found {} pending migration(s):", pending.len());
            for migration in &pending {
                println!("  - {}", migration);
            }
            println!("\nRun without --dry-run to apply these migrations");
        }

        Ok(pending)
    }

    async fn run_migrations(&self) -> AppResult<Vec<String>> {
        println!("Running database migrations...");

        let applied = run_pending_migrations(&self.config.database).await?;
        if applied.is_empty() {
            println!("✓ No migrations to apply - database is already up to date");
        } else {
            println!("✓ Applied {} migration(s):", applied.len());
            for migration in &applied {
                println!("  - {}", migration);
            }
        }
        tracing::info!(count = applied.len(), "Database migrations applied");

        Ok(applied)
    }

    async fn rollback_migrations(&self, steps: u32) -> AppResult<Vec<String>> {
        println!("Rolling back {} migration(s)...", steps);

        let reverted = revert_migrations(&self.config.database, steps).await?;
        println!("✓ Rolled back {} migration(s):", reverted.len());
        for migration in &reverted {
            println!("  - {}", migration);
        }
        tracing::warn!(count = reverted.len(), "Database migrations reverted");

        Ok(reverted)
    }
}
