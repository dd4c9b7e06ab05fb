#[cfg(feature = "generator")]
mod properties;
