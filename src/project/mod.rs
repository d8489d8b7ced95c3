//! Project module: Serialization to and from stored project records.
//!
//! The record list itself (newest-first, capped at 10) lives in the
//! host's key-value store; this module only defines the record shape
//! and the encode/decode path between records and buffers.

mod codec;

pub use codec::{decode, decode_thumbnail, encode, from_json, to_json, ProjectRecord};
