use std::process::exit;
use std::sync::Arc;
use clap::Parser;
use log::{error, info};
use multicache::cache::errors::CacheError;
use multicache::cache::traits::cache_backend::CacheBackend;
use multicache::common::common::{parse_cli_value, setup_logging};
use multicache::config::structs::configuration::Configuration;
use multicache::service::structs::cache_service::CacheService;
use multicache::structs::{Cli, Commands};
use tokio::runtime::Builder;

async fn run(service: &CacheService, profile: Option<&str>, command: Commands) -> Result<(), CacheError>
{
    if command == Commands::Profiles {
        for (name, is_default) in service.profiles()? {
            let profile = service.registry().profile(&name)?;
            println!(
                "{}{} ({}{})",
                if is_default { "* " } else { "  " },
                name,
                profile.driver,
                profile.namespace.map(|ns| format!(", namespace {}", ns)).unwrap_or_default()
            );
        }
        return Ok(());
    }

    let cache: Arc<dyn CacheBackend> = match profile {
        Some(name) => service.select(name).await?,
        None => service.registry().get_default().await?,
    };

    match command {
        Commands::Profiles => {}
        Commands::Fetch { key } => match cache.fetch(&key).await? {
            Some(value) => println!("{}", value),
            None => {
                info!("[CLI] {} not found", key);
                exit(1);
            }
        },
        Commands::Contains { key } => {
            let found = cache.contains(&key).await?;
            println!("{}", found);
            if !found {
                exit(1);
            }
        }
        Commands::Save { key, value, ttl } => {
            let stored = cache.save(&key, &parse_cli_value(&value), ttl).await?;
            println!("{}", stored);
        }
        Commands::Delete { key } => println!("{}", cache.delete(&key).await?),
        Commands::Flush => println!("{}", cache.flush_all().await?),
    }
    Ok(())
}

#[tracing::instrument(level = "debug")]
fn main() -> std::io::Result<()>
{
    let args = Cli::parse();

    let config = match Configuration::load_from_file(&args.config, args.create_config) {
        Ok(config) => config,
        Err(_) => exit(101)
    };

    setup_logging(&config);

    info!("{} - Version: {}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"));

    let service = CacheService::from_config(&config);

    Builder::new_multi_thread()
        .enable_all()
        .build()?
        .block_on(async {
            if let Err(e) = run(&service, args.profile.as_deref(), args.command).await {
                error!("[CLI] {}", e);
                exit(1);
            }
        });

    Ok(())
}
