//! Hex-dump loading and datagram replay.

use anyhow::Context;
use log::info;
use std::fs;
use std::net::{IpAddr, Ipv4Addr, Ipv6Addr, SocketAddr};
use std::path::Path;
use tokio::net::UdpSocket;

/// Parses one datagram per line. Blank lines and `#` comments are skipped,
/// whitespace inside a line is ignored.
pub fn parse_hex_dump(text: &str) -> anyhow::Result<Vec<Vec<u8>>> {
    let mut frames = Vec::new();
    for (index, line) in text.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        let compact: String = line.split_whitespace().collect();
        let bytes = hex::decode(&compact)
            .with_context(|| format!("line {}: invalid hex", index + 1))?;
        frames.push(bytes);
    }
    Ok(frames)
}

pub fn load_hex_dump<P: AsRef<Path>>(path: P) -> anyhow::Result<Vec<Vec<u8>>> {
    let path_ref = path.as_ref();
    let contents = fs::read_to_string(path_ref)
        .with_context(|| format!("reading hex dump {}", path_ref.display()))?;
    parse_hex_dump(&contents).with_context(|| format!("parsing hex dump {}", path_ref.display()))
}

/// Sends each frame as its own datagram and returns how many were sent.
pub async fn send_frames(target: SocketAddr, frames: &[Vec<u8>]) -> anyhow::Result<usize> {
    let local = match target.ip() {
        IpAddr::V4(_) => SocketAddr::new(IpAddr::V4(Ipv4Addr::UNSPECIFIED), 0),
        IpAddr::V6(_) => SocketAddr::new(IpAddr::V6(Ipv6Addr::UNSPECIFIED), 0),
    };
    let socket = UdpSocket::bind(local)
        .await
        .context("binding replay socket")?;

    for (index, frame) in frames.iter().enumerate() {
        socket
            .send_to(frame, target)
            .await
            .with_context(|| format!("sending frame {} to {}", index, target))?;
    }
    info!("replayed {} frames to {}", frames.len(), target);
    Ok(frames.len())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn hex_dump_skips_comments_and_blank_lines() {
        let text = "# capture 1\n\n5858\n  aa bb\tcc  \n# trailing\n";
        let frames = parse_hex_dump(text).unwrap();
        assert_eq!(frames, vec![vec![0x58, 0x58], vec![0xAA, 0xBB, 0xCC]]);
    }

    #[test]
    fn hex_dump_reports_offending_line() {
        let err = parse_hex_dump("5858\nzz\n").unwrap_err();
        assert!(err.to_string().contains("line 2"));
    }

    #[test]
    fn load_hex_dump_reads_file() {
        let mut temp = NamedTempFile::new().unwrap();
        writeln!(temp, "# one frame").unwrap();
        writeln!(temp, "{}", hex::encode(ultracore::FrameBuilder::new().build())).unwrap();
        let frames = load_hex_dump(temp.path()).unwrap();
        assert_eq!(frames.len(), 1);
        assert_eq!(frames[0].len(), 302);
        assert!(ultracore::decode(&frames[0]).is_ok());
    }

    #[test]
    fn missing_dump_names_the_path() {
        let err = load_hex_dump("/nonexistent/frames.hex").unwrap_err();
        assert!(format!("{:#}", err).contains("/nonexistent/frames.hex"));
    }

    #[tokio::test]
    async fn send_frames_emits_one_datagram_per_frame() {
        let receiver = UdpSocket::bind("127.0.0.1:0").await.unwrap();
        let target = receiver.local_addr().unwrap();
        let frames = vec![vec![1u8; 302], vec![2u8; 10]];

        let sent = send_frames(target, &frames).await.unwrap();
        assert_eq!(sent, 2);

        let mut buf = [0u8; 2048];
        let (len, _) = receiver.recv_from(&mut buf).await.unwrap();
        assert_eq!(len, 302);
        let (len, _) = receiver.recv_from(&mut buf).await.unwrap();
        assert_eq!(&buf[..len], &[2u8; 10]);
    }
}
