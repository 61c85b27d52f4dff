//! Provider/model table compiled into the binary.
//!
//! Used when no `--catalog` path is configured. The content is a sample of
//! the upstream provider list and is replaced wholesale by a user catalog.

pub(super) const BUILTIN_CATALOG: &str = include_str!("providers.json");
