use anyhow::Context;
use serde::{Deserialize, Serialize};
use std::fs;
use std::net::{IpAddr, Ipv4Addr};
use std::path::Path;

pub const DEFAULT_PORT: u16 = 41234;

/// Ground location used to annotate frames with range and bearing to the tracker.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct ReferenceSite {
    pub latitude: f64,
    pub longitude: f64,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReceiverConfig {
    pub bind_addr: IpAddr,
    pub port: u16,
    pub http_port: Option<u16>,
    pub reference_site: Option<ReferenceSite>,
}

impl Default for ReceiverConfig {
    fn default() -> Self {
        Self {
            bind_addr: IpAddr::V4(Ipv4Addr::UNSPECIFIED),
            port: DEFAULT_PORT,
            http_port: None,
            reference_site: None,
        }
    }
}

impl ReceiverConfig {
    pub fn load<P: AsRef<Path>>(path: P) -> anyhow::Result<Self> {
        let path_ref = path.as_ref();
        let contents = fs::read_to_string(path_ref)
            .with_context(|| format!("reading receiver config {}", path_ref.display()))?;
        let config: ReceiverConfig = serde_yaml::from_str(&contents)
            .with_context(|| format!("parsing receiver config {}", path_ref.display()))?;
        Ok(config)
    }

    pub fn from_args(bind_addr: IpAddr, port: u16, http_port: Option<u16>) -> Self {
        Self {
            bind_addr,
            port,
            http_port,
            reference_site: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn config_from_args_keeps_defaults_for_the_rest() {
        let cfg = ReceiverConfig::from_args(IpAddr::V4(Ipv4Addr::LOCALHOST), 5000, Some(9000));
        assert_eq!(cfg.port, 5000);
        assert_eq!(cfg.http_port, Some(9000));
        assert!(cfg.reference_site.is_none());
    }

    #[test]
    fn config_load_reads_yaml() {
        let mut temp = NamedTempFile::new().unwrap();
        temp.write_all(
            b"bind_addr: 127.0.0.1\nport: 5151\nreference_site:\n  latitude: 65.1264\n  longitude: -147.4656\n",
        )
        .unwrap();
        let path = temp.into_temp_path();
        let cfg = ReceiverConfig::load(&path).unwrap();
        assert_eq!(cfg.bind_addr, IpAddr::V4(Ipv4Addr::LOCALHOST));
        assert_eq!(cfg.port, 5151);
        assert_eq!(cfg.http_port, None);
        assert_eq!(
            cfg.reference_site,
            Some(ReferenceSite {
                latitude: 65.1264,
                longitude: -147.4656,
            })
        );
    }

    #[test]
    fn empty_yaml_falls_back_to_defaults() {
        let mut temp = NamedTempFile::new().unwrap();
        temp.write_all(b"{}\n").unwrap();
        let path = temp.into_temp_path();
        assert_eq!(ReceiverConfig::load(&path).unwrap(), ReceiverConfig::default());
    }

    #[test]
    fn missing_file_reports_path() {
        let err = ReceiverConfig::load("/nonexistent/receiver.yaml").unwrap_err();
        assert!(err.to_string().contains("/nonexistent/receiver.yaml"));
    }
}
