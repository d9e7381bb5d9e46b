pub mod gray;
pub mod io;
pub mod rgba;

pub use self::gray::GrayBuffer;
pub use self::io::RgbaBuffer;
pub use self::rgba::RasterRgba;
