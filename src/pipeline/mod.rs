//! Logo generation pipeline.
//!
//! # Modules
//!
//! - [`variant`]: LogoVariant records, batch container, aggregation
//! - [`enhance`]: prompt enhancement from customization options
//! - [`error`]: slot-level error taxonomy
//! - [`orchestrator`]: concurrent multi-variant dispatch
//!
//! # Data flow
//!
//! ```text
//! prompt + options
//!       │
//!       ▼
//!  quota gate ──denied──► QuotaExceeded (zero provider calls)
//!       │
//!       ▼
//!   enhance ──► N concurrent provider slots ──► sanitize per slot
//!       │                                            │
//!       └────────────── join barrier ◄───────────────┘
//!                            │
//!                            ▼
//!                    Batch of terminal variants
//! ```

pub mod enhance;
pub mod error;
pub mod orchestrator;
pub mod variant;
