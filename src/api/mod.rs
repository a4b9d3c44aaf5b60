//! The entity catalogue of the mod hosting REST API: enums, records, response envelopes and request bodies.

mod enums;
mod file;
mod fingerprint;
mod game;
mod kind;
mod minecraft;
mod mods;
mod request;
mod response;

pub use enums::*;
pub use file::*;
pub use fingerprint::*;
pub use game::*;
pub use kind::*;
pub use minecraft::*;
pub use mods::*;
pub use request::*;
pub use response::*;
