mod builtin;
mod db;
mod loader;
pub(crate) mod types;

pub(crate) use db::Catalog;
pub(crate) use loader::load_catalog;
pub(crate) use types::ChatModelRecord;
