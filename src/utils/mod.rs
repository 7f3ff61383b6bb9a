// Utils compartidos

pub mod constants;
pub mod mapbox_ffi;

pub use constants::*;
