//! Index image catalog built from index-build notifications
//!
//! This module turns the paginated datagrepper history of "index built"
//! messages into one entry per OCP version, operator and operator version,
//! pointing at the index image that carries that bundle.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐     ┌─────────────┐     ┌─────────────┐
//! │    Feed     │────▶│ Aggregator  │────▶│    Cache    │
//! │  (fetch)    │     │  (dedupe)   │     │ (snapshot)  │
//! └─────────────┘     └─────────────┘     └─────────────┘
//!        │                   │
//!        ▼                   ▼
//! ┌─────────────┐     ┌─────────────┐
//! │ Datagrepper │     │ NVR parser  │
//! │  (reqwest)  │     │  Ordering   │
//! └─────────────┘     └─────────────┘
//! ```
//!
//! # Modules
//!
//! - [`feed`]: Feed trait and the sequential page walk
//! - [`datagrepper`]: HTTP implementation of the feed
//! - [`nvr`]: Build name and index image parsing
//! - [`ordering`]: Sort order for catalog entries
//! - [`aggregator`]: Deduplication into catalog entries
//! - [`cache`]: Single-slot catalog cache
//! - [`error`]: Error types for feed retrieval
//! - [`types`]: Feed envelope and catalog entry types

pub mod aggregator;
pub mod cache;
pub mod datagrepper;
pub mod error;
pub mod feed;
pub mod nvr;
pub mod ordering;
pub mod types;
