//! Tool definitions module.
//!
//! This module exports all available tool definitions.
//! Each tool is defined in its own file for better maintainability.

pub mod catalogue;
pub mod common;
pub mod meta;

pub use catalogue::{
    GetCatalogueDataParams, GetCatalogueDataTool, GetCatalogueParams, GetCatalogueTool,
};
pub use common::CatalogueSummary;
pub use meta::{
    GetCatalogueMetadataParams, GetCatalogueMetadataTool, ListCatalogueIdsParams,
    ListCatalogueIdsTool, SearchCataloguesParams, SearchCataloguesTool, SearchMatch,
};
