// ============================================================================
// COURT MAP - Mapa de canchas de básquet (Yew + Mapbox GL JS, Rust/WASM)
// ============================================================================
// - Models: canchas, popup, eventos del mapa
// - Services: dataset GeoJSON embebido
// - Maps: seam MapBackend/MapWidget + implementación Mapbox (wasm32)
// - ViewModels: ciclo de vida del mapa, overlay, interacción
// - Hooks/Views: integración con Yew (solo wasm32)
// ============================================================================

pub mod config;
pub mod maps;
pub mod models;
pub mod services;
pub mod utils;
pub mod viewmodels;

#[cfg(target_arch = "wasm32")]
mod dom;
#[cfg(target_arch = "wasm32")]
pub mod hooks;
#[cfg(target_arch = "wasm32")]
pub mod views;

/// Panic hook + logger. Llamar una sola vez al arrancar.
#[cfg(target_arch = "wasm32")]
pub fn init_runtime(config: &config::AppConfig) {
    console_error_panic_hook::set_once();

    if config.is_logging_enabled() {
        wasm_logger::init(wasm_logger::Config::new(config.log_level()));
    }
}

/// Montar la app en el <body>
#[cfg(target_arch = "wasm32")]
pub fn run() {
    init_runtime(&config::CONFIG);
    log::info!("🏀 Court Map - Rust + Yew + Mapbox");

    yew::Renderer::<views::App>::new().render();
}
