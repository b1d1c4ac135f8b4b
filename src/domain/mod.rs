pub mod conversion_request;
pub mod paths;
pub mod png_file;
pub mod webp_image;

// --- public re-exports ---
pub use conversion_request::ConversionRequest;
pub use paths::{PngOutputPath, WebpFilePath};
pub use png_file::PngFile;
pub use webp_image::WebpImage;
