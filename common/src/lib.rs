//! Shared model layer for the catalog resolver frontend.
//!
//! Everything in this crate is target-independent: dataset payload
//! normalization, navigation link accumulation, and resolver token
//! handling all run (and are tested) natively, while the `frontend`
//! crate wires them to the browser.

pub mod model;
pub mod nav;
pub mod resolver;
