use rand::{rngs::StdRng, Rng, SeedableRng};
use serde::{Deserialize, Serialize};
use ultracore::decoding::ltas::layout::{self, LAYOUT};
use ultracore::frame::Timestamp;
use ultracore::FrameBuilder;

/// Configuration for generating synthetic LTAS traffic.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneratorConfig {
    pub seed: u64,
    pub sync: u16,
    pub site_id: String,
    pub system_name: String,
    pub tracker_lat: f64,
    pub tracker_lon: f64,
    pub tracker_height: f64,
    /// Maximum tracker offset in degrees applied per frame.
    pub jitter: f64,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            seed: 0,
            sync: 0x5858,
            site_id: "PFRR".into(),
            system_name: "SYNTH".into(),
            tracker_lat: 65.1167,
            tracker_lon: -147.4333,
            tracker_height: 200.0,
            jitter: 0.01,
        }
    }
}

impl GeneratorConfig {
    fn normalized_jitter(&self) -> f64 {
        self.jitter.abs().max(f64::EPSILON)
    }
}

fn random_timestamp(rng: &mut StdRng) -> Timestamp {
    Timestamp {
        year: 2024,
        day_of_year: rng.gen_range(1..=366),
        seconds_gmt: rng.gen_range(0..86_400),
        microseconds: rng.gen_range(0..1_000_000),
    }
}

/// Builds one well-formed frame with random LTAS content.
///
/// Every enumerated field is drawn from its valid codes, so the frame
/// decodes without anomalies.
pub fn build_frame(rng: &mut StdRng, config: &GeneratorConfig) -> Vec<u8> {
    let jitter = config.normalized_jitter();
    let mut builder = FrameBuilder::new()
        .sync(config.sync)
        .extended_header_type(3)
        .body_size(286, 1)
        .address(&config.site_id, &config.system_name, "LTAS")
        .box_id("synthetic", rng.gen_range(0..16))
        .range_available(1)
        .target_timestamp(random_timestamp(rng))
        .tracker(
            config.tracker_lat + rng.gen_range(-jitter..jitter),
            config.tracker_lon + rng.gen_range(-jitter..jitter),
            config.tracker_height,
        )
        .pointing(
            rng.gen_range(0.0..360.0),
            rng.gen_range(0.0..90.0),
            rng.gen_range(1_000.0..2_000_000.0),
        )
        .target_site(rng.gen_range(1..512), b'G')
        .group("SYNTH")
        .message_codes(1, 2, 1)
        .message_ident(1, rng.gen_range(0..i32::MAX), 1)
        .ethernet_timestamp(random_timestamp(rng));

    for field in LAYOUT.iter().filter(|field| field.name != layout::SYNC.name) {
        builder = builder.ltas(*field, rng.gen());
    }

    builder
        .ltas(layout::DAY_OF_YEAR, rng.gen_range(1..=366))
        .ltas(layout::TIME_OF_DAY_TENTHS, rng.gen_range(0..10))
        .ltas(layout::TIME_OF_DAY_SECONDS, rng.gen_range(0..86_400))
        .ltas(layout::VELOCITY_SCALE, rng.gen_range(0..2))
        .ltas(layout::MODE, rng.gen_range(0..7))
        .build()
}

pub fn build_frames(config: &GeneratorConfig, count: usize) -> Vec<Vec<u8>> {
    let mut rng = StdRng::seed_from_u64(config.seed);
    (0..count).map(|_| build_frame(&mut rng, config)).collect()
}
