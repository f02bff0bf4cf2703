//! Serve command handler
//!
//! Either validates the configuration and exits, or runs the HTTP server
//! until shutdown.

use crate::config::settings::Settings;
use crate::error::{AppError, AppResult};
use crate::server::Server;

pub struct ServeCommandHandler {
    config: Settings,
}

impl ServeCommandHandler {
    pub fn new(config: Settings) -> Self {
        Self { config }
    }

    pub async fn execute(&self, dry_run: bool) -> AppResult<()> {
        if dry_run {
            return self.validate_only();
        }

        Server::new(self.config.clone())
            .run()
            .await
            .map_err(|source| AppError::Internal { source })
    }

    /// Validates configuration without binding or touching the database.
    pub fn validate_only(&self) -> AppResult<()> {
        self.config.validate()?;

        println!("✓ Configuration is valid");
        println!("✓ Server would bind to: {}", self.config.server.address());
        println!("✓ Database file: {}", self.config.database.sqlite_path());
        println!(
            "✓ Migrations on startup: {}",
            if self.config.database.auto_migrate { "enabled" } else { "disabled" }
        );
        println!("Dry run completed successfully - configuration is ready for deployment");

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_serve_handler_dry_run() {
        let handler = ServeCommandHandler::new(Settings::default());

        assert!(handler.execute(true).await.is_ok());
    }

    #[tokio::test]
    async fn test_serve_handler_dry_run_invalid_config() {
        let mut config = Settings::default();
        config.server.port = 0;
        let handler = ServeCommandHandler::new(config);

        assert!(matches!(
            handler.execute(true).await,
            Err(AppError::Configuration { .. })
        ));
    }
}
