//! Open-data API tools.

mod get;
mod get_data;

pub use get::{GetCatalogueParams, GetCatalogueTool};
pub use get_data::{GetCatalogueDataParams, GetCatalogueDataTool};
