//! Metadata repository tools.

mod get_metadata;
mod list_ids;
mod search;

pub use get_metadata::{GetCatalogueMetadataParams, GetCatalogueMetadataTool};
pub use list_ids::{ListCatalogueIdsParams, ListCatalogueIdsTool};
pub use search::{SearchCataloguesParams, SearchCataloguesTool, SearchMatch};
