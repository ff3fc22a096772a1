pub mod csv_loader;
pub mod logging;
pub mod progress;
pub mod state;
pub mod storage;
pub mod utils;
pub mod views;
