use anyhow::Context;
use clap::Parser;
use generator::profile::{build_frames, GeneratorConfig};
use log::{info, warn};
use net::{listener, replay};
use serde_json::json;
use status_bridge::bridge::StatusBridge;
use std::net::{IpAddr, SocketAddr};
use std::path::{Path, PathBuf};
use tokio::runtime::Builder as TokioBuilder;
use tokio::signal;
use workflow::config::{ReceiverConfig, DEFAULT_PORT};
use workflow::runner::Runner;

mod generator;
mod net;
mod status_bridge;
mod workflow;

#[derive(Parser)]
#[command(author, version, about = "ULTRA LTAS frame receiver and replay tool")]
struct Args {
    /// Load the receiver config from YAML
    #[arg(long)]
    config: Option<PathBuf>,
    #[arg(long, default_value = "0.0.0.0")]
    bind: IpAddr,
    #[arg(long, default_value_t = DEFAULT_PORT)]
    port: u16,
    /// Expose GET /latest and GET /stats on this port
    #[arg(long)]
    http_port: Option<u16>,
    /// Decode a hex dump offline, one frame per line, and print JSON
    #[arg(long)]
    decode: Option<PathBuf>,
    /// Send every frame of a hex dump to --target
    #[arg(long)]
    replay: Option<PathBuf>,
    /// Send this many generated frames to --target
    #[arg(long)]
    synthetic: Option<usize>,
    #[arg(long, default_value_t = 0)]
    seed: u64,
    #[arg(long, default_value = "127.0.0.1:41234")]
    target: SocketAddr,
    /// Listen for frames until Ctrl+C
    #[arg(long, default_value_t = false)]
    serve: bool,
}

fn decode_offline(runner: &Runner, path: &Path) -> anyhow::Result<()> {
    for frame in replay::load_hex_dump(path)? {
        let line = match runner.process(&frame) {
            Ok(summary) => serde_json::to_string(&summary)?,
            Err(err) => json!({ "error": err.to_string(), "length": frame.len() }).to_string(),
        };
        println!("{}", line);
    }
    let metrics = runner.metrics();
    info!(
        "offline decode -> decoded {}, rejected {}, anomalies {}",
        metrics.decoded, metrics.rejected, metrics.anomalies
    );
    Ok(())
}

async fn serve(config: ReceiverConfig, runner: Runner) -> anyhow::Result<()> {
    let socket = listener::bind(&config).await?;

    let bridge = config.http_port.map(|port| {
        let bridge = StatusBridge::new();
        tokio::spawn(
            bridge
                .clone()
                .serve(SocketAddr::new(config.bind_addr, port)),
        );
        bridge
    });

    info!("receiver running (Ctrl+C to stop)...");
    listener::serve_until(socket, runner, bridge, async {
        if let Err(err) = signal::ctrl_c().await {
            warn!("awaiting Ctrl+C failed: {}", err);
        }
    })
    .await
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let args = Args::parse();

    let config = if let Some(path) = &args.config {
        ReceiverConfig::load(path)?
    } else {
        ReceiverConfig::from_args(args.bind, args.port, args.http_port)
    };
    let runner = Runner::new(config.clone());

    if let Some(path) = &args.decode {
        decode_offline(&runner, path)?;
    }

    let outgoing = if let Some(path) = &args.replay {
        Some(replay::load_hex_dump(path)?)
    } else {
        args.synthetic.map(|count| {
            let generator = GeneratorConfig {
                seed: args.seed,
                ..Default::default()
            };
            build_frames(&generator, count)
        })
    };

    if outgoing.is_none() && !args.serve {
        return Ok(());
    }

    let runtime = TokioBuilder::new_multi_thread()
        .enable_all()
        .build()
        .context("creating tokio runtime")?;

    runtime.block_on(async {
        if let Some(frames) = outgoing {
            replay::send_frames(args.target, &frames).await?;
        }
        if args.serve {
            serve(config, runner).await?;
        }
        Ok::<(), anyhow::Error>(())
    })
}
