//! Balance records module - raw input shapes, normalized models, and the
//! normalizer that converts between them.

mod records_model;
mod records_normalizer;

pub use records_model::{BalanceRecord, CompositeKey, RawBalance, SourceKind};
pub use records_normalizer::normalize;
