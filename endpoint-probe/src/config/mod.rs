pub mod builder;
pub mod loader;
pub mod types;

pub use builder::ProbeConfigBuilder;
pub use loader::{ConfigLoader, DefaultConfigLoader};
pub use types::{InputSource, ProbeConfig};
