use std::path::PathBuf;
use std::sync::Arc;

use clap::Parser;
use tokio_util::sync::CancellationToken;
use tracing_subscriber::EnvFilter;

use topigo_broker::config::Config;
use topigo_broker::delivery::DeliveryEngine;
use topigo_broker::error::Error;
use topigo_broker::registry::SubscriptionRegistry;
use topigo_broker::server::BrokerService;
use topigo_broker::store::Store;
use topigo_broker::sweeper::RetentionSweeper;
use topigo_proto::topigo::topigo_server::TopigoServer;

/// Capacity of the global publish queue feeding the delivery engine.
const PUBLISH_QUEUE_CAPACITY: usize = 1024;

#[derive(Debug, Parser)]
#[command(name = "topigo", about = "Topic message broker with durable at-least-once delivery")]
struct Args {
    /// Path to the YAML configuration file.
    #[arg(short = 'c', long = "config", default_value = "config.yml")]
    config: PathBuf,

    /// Prefix for configuration environment variables.
    #[arg(short = 'p', long = "env-prefix", default_value = "")]
    env_prefix: String,

    /// Verbose logging.
    #[arg(short = 'v', long = "verbose")]
    verbose: bool,
}

#[tokio::main]
async fn main() {
    let args = Args::parse();
    init_tracing(args.verbose);

    if let Err(err) = run(args).await {
        tracing::error!(error = %err, "broker terminated");
        std::process::exit(1);
    }
}

async fn run(args: Args) -> Result<(), Error> {
    let config = Config::load(&args.config, &args.env_prefix)?;

    let message_store = Store::open(config.storage.directory.join("messages")).await?;
    let subscription_store = Store::open(config.storage.directory.join("subscriptions")).await?;

    let registry = Arc::new(
        SubscriptionRegistry::load(subscription_store, config.storage.inbox_capacity).await?,
    );
    let engine = Arc::new(DeliveryEngine::new(
        Arc::clone(&registry),
        message_store.clone(),
        PUBLISH_QUEUE_CAPACITY,
    ));
    let publisher = engine.publish_handle();
    let sweeper = Arc::new(RetentionSweeper::new(message_store, &config.storage));

    let shutdown = CancellationToken::new();
    let engine_task = {
        let engine = Arc::clone(&engine);
        let shutdown = shutdown.clone();
        tokio::spawn(async move { engine.run(shutdown).await })
    };
    let sweeper_task = tokio::spawn(Arc::clone(&sweeper).run(shutdown.clone()));

    let addr = format!("{}:{}", config.server.host, config.server.port)
        .parse()
        .map_err(|err| Error::Config(format!("invalid listen address: {err}")))?;
    tracing::info!(%addr, "starting server");

    let service = BrokerService::new(registry, engine, publisher);
    tonic::transport::Server::builder()
        .add_service(TopigoServer::new(service))
        .serve_with_shutdown(addr, async {
            let _ = tokio::signal::ctrl_c().await;
            tracing::info!("shutting down");
        })
        .await?;

    shutdown.cancel();
    let _ = engine_task.await;
    let _ = sweeper_task.await;
    Ok(())
}

fn init_tracing(verbose: bool) {
    let default_filter = if verbose {
        "topigo_broker=debug"
    } else {
        "topigo_broker=info"
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}
