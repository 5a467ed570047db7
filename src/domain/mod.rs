//! Domain types shared by the GUI runtime store.

pub mod error;
pub mod material;

pub use error::DispatchError;
pub use material::Material;
