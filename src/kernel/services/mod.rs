//! Services layer (ports + adapters).
//!
//! - `ports`: pure contracts/types used across the app (kernel-facing).
//! - `adapters`: concrete implementations (files, logging, in-memory API).

pub mod adapters;
pub mod ports;
