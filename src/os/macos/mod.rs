//! SystemConfiguration dynamic store backend for Apple platforms.

mod store;
mod value;

pub use self::store::SystemStore;
