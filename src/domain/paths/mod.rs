pub mod png_output_path;
pub mod webp_file_path;

pub use png_output_path::PngOutputPath;
pub use webp_file_path::WebpFilePath;
