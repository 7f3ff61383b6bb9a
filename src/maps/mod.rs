// Módulo de mapas: seam común + implementación por plataforma

#[cfg(target_arch = "wasm32")]
pub mod web;

pub mod traits;

pub use traits::*;

#[cfg(test)]
pub mod testing;
