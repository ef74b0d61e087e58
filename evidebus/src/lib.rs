//! Kerala bus timings directory core.
//!
//! Stop search, fare estimates and timing normalization for the
//! evidebus.com pages, and the sitemap listing every public URL.

pub mod config;
pub mod depots;
pub mod domain;
pub mod gazetteer;
pub mod search;
pub mod sitemap;
pub mod web;
