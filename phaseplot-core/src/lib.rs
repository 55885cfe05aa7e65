pub mod complex;
pub mod function;
pub mod params;
pub mod pixel_grid;
pub mod transforms;
pub mod window;

pub use complex::Complex;
pub use function::{ComplexFunction, PowerFunction};
pub use params::RenderParameters;
pub use pixel_grid::PixelGrid;
pub use transforms::pixel_to_plane;
pub use window::PlaneWindow;
