//! The payload contract: typed schema, validation, declared regions and display formatting.

pub(crate) mod contract;
pub(crate) mod format;
pub(crate) mod regions;
