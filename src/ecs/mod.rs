//! Entity registry and typed component storage

pub mod entity;
pub mod store;
pub mod world;

pub use entity::EntityAllocator;
pub use store::ComponentStore;
pub use world::World;
