//! SVG processing for generated logos.
//!
//! # Modules
//!
//! - [`sanitize`]: extraction + hardening of raw provider text into safe markup
//! - [`recolor`]: deterministic palette substitution over fill attributes
//! - [`compose`]: transform/filter wrapper composition with named presets
//!
//! # Architecture
//!
//! ```text
//! provider text
//!       │
//!       ▼
//!  ┌──────────┐
//!  │ sanitize │ ──► span extraction, 100% sizing, script stripping
//!  └────┬─────┘
//!       │ (retained as the resettable original)
//!       ▼
//!  ┌─────────┐    ┌─────────┐
//!  │ recolor │ ──►│ compose │ ──► display markup
//!  └─────────┘    └─────────┘
//! ```

pub mod compose;
pub mod recolor;
pub mod sanitize;
