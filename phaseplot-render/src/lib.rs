pub mod color_space;
pub mod config;
pub mod encoder;
pub mod frame;
pub mod lightness;
pub mod sampler;

pub use color_space::{hsl_to_rgb, lab_to_rgb};
pub use config::{ConfigError, RenderConfig};
pub use encoder::{chroma_components, encode, ColorSpace, CHROMA_RADIUS, WHEEL_SATURATION};
pub use frame::Frame;
pub use lightness::LightnessMode;
pub use sampler::{render_frame, sample_at, PointSample};
