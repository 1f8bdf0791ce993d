pub mod ahr999;
pub mod error;

pub use ahr999::*;
pub use error::IndicatorError;
