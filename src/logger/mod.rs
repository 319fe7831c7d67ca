pub mod analysis_logger;
pub mod progress_spinner;
