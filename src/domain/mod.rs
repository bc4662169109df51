//! Domain modules organized as vertical slices.
//!
//! Each sub-module contains:
//! - `mod.rs`: Domain types as callers see them
//! - `wire.rs`: Request payloads and the positional field table of the entity
//! - `convert.rs`: `FromRow` decoding of venue rows into domain types
//! - `client.rs`: Sub-client with the authenticated HTTP calls

pub mod credit;
pub mod funding;
pub mod loan;
pub mod notification;
pub mod offer;
pub mod trade;
