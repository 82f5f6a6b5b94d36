//! # Types
//!
//! Values produced by manifest resolution.

pub mod class_name;
pub mod lookup;

pub use class_name::MainClass;
pub use lookup::{Absence, MainClassLookup, MalformedManifest};
