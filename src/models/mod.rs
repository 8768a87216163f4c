//! Entity data model shared by typed and schema-unknown records

pub mod entity;

pub use entity::{BaseEntity, Entity, EntityMeta, EntityType, RawEntity, UnorderedStrings};
