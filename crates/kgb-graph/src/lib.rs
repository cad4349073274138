//! # KGB Graph
//!
//! Neo4j implementation of the KGB graph store.

pub mod client;

pub use client::{GraphClient, GraphCounts};
