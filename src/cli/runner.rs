//! CLI runner - executes commands

use crate::cli::commands::{Cli, Commands};
use crate::config::AppConfig;
use crate::database::{count_by_country, init_table, list_partitions, with_database};
use crate::engine::BreedLoader;
use crate::error::{Result, ResultExt};
use crate::output::export_json;
use tracing::info;

/// CLI runner
pub struct Runner {
    cli: Cli,
}

impl Runner {
    /// Create a new runner
    pub fn new(cli: Cli) -> Self {
        Self { cli }
    }

    /// Run the CLI command
    pub async fn run(&self) -> Result<()> {
        let config = self.load_config()?;

        match self.cli.subcommand() {
            Commands::Run => self.run_all(&config).await,
            Commands::Init => self.init(&config).await,
            Commands::Load => self.load(&config).await,
            Commands::Count { country } => {
                let country = country.unwrap_or_else(|| config.run.country.clone());
                self.count(&config, country).await
            }
            Commands::Export { prefix } => {
                let prefix = prefix.unwrap_or_else(|| config.run.output_prefix.clone());
                self.export(&config, prefix).await
            }
            Commands::Partitions => self.partitions(&config).await,
        }
    }

    /// Load configuration and apply CLI overrides
    pub fn load_config(&self) -> Result<AppConfig> {
        let mut config = AppConfig::load(self.cli.config.as_deref())
            .context("Failed to load configuration")?;

        if let Some(raw) = &self.cli.fetch_limit {
            config.run.set_fetch_limit(raw);
        }
        if let Some(raw) = &self.cli.export_count {
            config.run.set_export_count(raw);
        }

        config.validate()?;
        Ok(config)
    }

    /// Create the table, load, count and export on one connection
    async fn run_all(&self, config: &AppConfig) -> Result<()> {
        let loader = BreedLoader::from_config(config)?;
        let run = config.run.clone();

        with_database(&config.database, move |db| {
            Box::pin(async move {
                init_table(db).await?;
                loader.load_breed(db).await?;

                let count = count_by_country(db, &run.country).await?;
                println!("{count}");

                export_json(db, run.export_count, &run.output_prefix).await?;
                Ok(())
            })
        })
        .await?;

        info!("Run complete");
        Ok(())
    }

    /// Create the breed table
    async fn init(&self, config: &AppConfig) -> Result<()> {
        with_database(&config.database, |db| {
            Box::pin(async move { init_table(db).await })
        })
        .await
    }

    /// Fetch and insert breeds
    async fn load(&self, config: &AppConfig) -> Result<()> {
        let loader = BreedLoader::from_config(config)?;

        let summary = with_database(&config.database, move |db| {
            Box::pin(async move { loader.load_breed(db).await })
        })
        .await?;

        println!(
            "fetched={} inserted={} skipped={} new_partitions={}",
            summary.fetched,
            summary.inserted,
            summary.skipped,
            summary.new_partitions.join(",")
        );
        Ok(())
    }

    /// Count rows by country substring
    async fn count(&self, config: &AppConfig, country: String) -> Result<()> {
        let count = with_database(&config.database, move |db| {
            Box::pin(async move { count_by_country(db, &country).await })
        })
        .await?;

        println!("{count}");
        Ok(())
    }

    /// Export rows to today's JSON file
    async fn export(&self, config: &AppConfig, prefix: String) -> Result<()> {
        let limit = config.run.export_count;

        let summary = with_database(&config.database, move |db| {
            Box::pin(async move { export_json(db, limit, &prefix).await })
        })
        .await?;

        println!("{}", summary.path.display());
        Ok(())
    }

    /// List partitioned countries
    async fn partitions(&self, config: &AppConfig) -> Result<()> {
        let countries = with_database(&config.database, |db| {
            Box::pin(async move { list_partitions(db).await })
        })
        .await?;

        for country in countries {
            println!("{country}");
        }
        Ok(())
    }
}
