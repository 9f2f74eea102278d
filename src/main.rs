use anyhow::Result;
use clap::Parser;
use haikool::models::Config;
use haikool::pipeline::HaikuPipeline;
use std::net::{IpAddr, SocketAddr};
use std::sync::Arc;
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Debug, Parser)]
#[command(name = "haikool")]
#[command(about = "Serve a web UI that writes a haiku and illustrates it")]
struct CliArgs {
    /// Address to bind.
    #[arg(long, default_value = "127.0.0.1")]
    host: IpAddr,

    /// Port to listen on.
    #[arg(long, default_value_t = 7860)]
    port: u16,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "haikool=info,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let args = CliArgs::parse();

    info!("Starting haikool");

    let pipeline = match Config::from_env().and_then(|config| HaikuPipeline::from_config(&config))
    {
        Ok(pipeline) => Arc::new(pipeline),
        Err(e) => {
            error!("Failed to initialize application: {}", e);
            std::process::exit(1);
        }
    };

    let addr = SocketAddr::new(args.host, args.port);
    if let Err(e) = haikool::web::serve(addr, pipeline).await {
        error!("Server failed: {}", e);
        std::process::exit(1);
    }

    Ok(())
}
