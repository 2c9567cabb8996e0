//! Configuration section definitions.

mod export;
mod generate;
mod policy;
mod provider;

pub use export::ExportSectionConfig;
pub use generate::GenerateConfig;
pub use policy::{PolicyConfig, QuotaFailurePolicy};
pub use provider::ProviderConfig;
