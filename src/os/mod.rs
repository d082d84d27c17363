#[cfg(target_vendor = "apple")]
pub mod macos;
