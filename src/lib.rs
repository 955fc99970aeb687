pub mod api;
pub mod counties;
pub mod error;
pub mod models;
pub mod muni_names;
pub mod output;

pub use error::{DirectoryError, Result};
pub use models::MunicipalityRecord;
pub use muni_names::lookup;
