//! Catalog presentation logic
//!
//! Pure projections over data already in memory: splitting a listing into
//! its displayed sections, and deriving provider stats for a model.

mod assistant;
mod partition;
mod stats;

pub(crate) use assistant::{AssistantItem, filter_items, load_items};
pub(crate) use partition::{Layout, Partition, Section, partition};
pub(crate) use stats::{ProviderBadge, ProviderRow, model_rows, provider_row};

