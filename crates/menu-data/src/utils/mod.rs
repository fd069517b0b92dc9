pub mod error;
pub mod logger;

pub use error::{SheetError, SheetResult};
pub use logger::init_logger;
