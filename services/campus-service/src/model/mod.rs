//! Resource data model.
//!
//! # Purpose
//! Re-exports the building and campus documents plus the value objects they
//! embed. These types are both the JSON wire format and the stored document
//! shape.
mod address;
mod building;
mod campus;
mod metadata;

pub use address::Address;
pub use building::Building;
pub use campus::Campus;
pub use metadata::ResourceMetadata;
