//! Typed schemas for the CurseForge mod hosting REST API, with a codec that checks every payload against them.
//!
//! ```no_run
//! use cfschema::api::SearchModsResponse;
//! use cfschema::Codec;
//!
//! # fn main() -> Result<(), cfschema::DecodeError> {
//! let body = r#"{"data": [], "pagination": {"index": 0, "pageSize": 50, "resultCount": 0, "totalCount": 0}}"#;
//! let page: SearchModsResponse = Codec::default().decode_str(body)?;
//! assert!(page.data.is_empty());
//! # Ok(())
//! # }
//! ```

#[macro_use]
mod macros;

pub mod api;
pub mod codec;
pub mod config;
pub mod logger;
pub mod schema;


pub use api::{Entity, EntityKind};
pub use codec::{decode, decode_kind, encode, Codec, CodecOptions, DecodeError, Nullable, Policy, Timestamp};
pub use schema::Registry;
