pub mod config;
pub mod error;
pub mod logging;
pub mod result;
pub mod traits;

pub use config::AppConfig;
pub use error::LedgerdeskError;
pub use logging::init_tracing;
pub use result::LedgerdeskResult;
pub use traits::Identify;
