pub mod emulation_service;
pub mod image_io;
pub mod output;

pub use emulation_service::{ApplyJob, ApplyReport, EmulationService};
pub use image_io::{load_image, save_jpeg};
pub use output::{claim_path, output_path};
