use crate::status_bridge::bridge::StatusBridge;
use crate::workflow::config::ReceiverConfig;
use crate::workflow::runner::Runner;
use anyhow::Context;
use log::{debug, info, warn};
use std::future::Future;
use std::net::SocketAddr;
use tokio::net::UdpSocket;

/// Receive buffer size; larger than any frame so oversized datagrams are
/// still trimmed by the decoder rather than truncated by the socket.
pub const RECV_BUFFER: usize = 2048;

pub async fn bind(config: &ReceiverConfig) -> anyhow::Result<UdpSocket> {
    let addr = SocketAddr::new(config.bind_addr, config.port);
    let socket = UdpSocket::bind(addr)
        .await
        .with_context(|| format!("binding UDP listener on {}", addr))?;
    info!("listening for frames on udp://{}", socket.local_addr()?);
    Ok(socket)
}

/// Processes datagrams one at a time until `shutdown` resolves.
pub async fn serve_until<F>(
    socket: UdpSocket,
    runner: Runner,
    bridge: Option<StatusBridge>,
    shutdown: F,
) -> anyhow::Result<()>
where
    F: Future<Output = ()>,
{
    let mut buf = [0u8; RECV_BUFFER];
    tokio::pin!(shutdown);

    loop {
        tokio::select! {
            _ = &mut shutdown => {
                info!("listener stopping: {:?}", runner.metrics());
                return Ok(());
            }
            received = socket.recv_from(&mut buf) => {
                let (len, peer) = match received {
                    Ok(received) => received,
                    Err(err) => {
                        warn!("receive failed: {}", err);
                        continue;
                    }
                };
                debug!("{} bytes from {}", len, peer);
                let outcome = runner.process(&buf[..len]);
                if let Some(bridge) = &bridge {
                    match outcome {
                        Ok(summary) => bridge.publish(summary, runner.metrics()),
                        Err(_) => bridge.publish_metrics(runner.metrics()),
                    }
                }
            }
        }
    }
}
