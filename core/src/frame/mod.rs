pub mod builder;
pub mod record;

pub use builder::FrameBuilder;
pub use record::*;
