// ============================================================================
// CONFIG - Configuración cargada en tiempo de compilación (build.rs + .env)
// ============================================================================

use serde::{Deserialize, Serialize};

pub const DEFAULT_MAP_STYLE: &str = "mapbox://styles/mapbox/streets-v12";
pub const DEFAULT_CENTER_LNG: f64 = 139.7016;
pub const DEFAULT_CENTER_LAT: f64 = 35.6590;
pub const DEFAULT_ZOOM: f64 = 13.0;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    /// Vacío = token ausente
    pub mapbox_access_token: String,
    pub enable_logging: bool,
    pub log_level: String,
    pub map_config: MapConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            mapbox_access_token: String::new(),
            enable_logging: true,
            log_level: "info".to_string(),
            map_config: MapConfig::default(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MapConfig {
    pub container_id: String,
    pub style: String,
    pub default_center_lng: f64,
    pub default_center_lat: f64,
    pub default_zoom: f64,
}

impl Default for MapConfig {
    fn default() -> Self {
        Self {
            container_id: "map".to_string(),
            style: DEFAULT_MAP_STYLE.to_string(),
            default_center_lng: DEFAULT_CENTER_LNG,
            default_center_lat: DEFAULT_CENTER_LAT,
            default_zoom: DEFAULT_ZOOM,
        }
    }
}

impl MapConfig {
    /// Centro en el orden que espera Mapbox: [lng, lat]
    pub fn center(&self) -> [f64; 2] {
        [self.default_center_lng, self.default_center_lat]
    }
}

impl AppConfig {
    /// Carga la configuración desde variables de entorno en tiempo de compilación
    pub fn from_env() -> Self {
        Self::from_values(|key| match key {
            "MAPBOX_ACCESS_TOKEN" => option_env!("MAPBOX_ACCESS_TOKEN"),
            "MAP_STYLE" => option_env!("MAP_STYLE"),
            "DEFAULT_MAP_CENTER_LNG" => option_env!("DEFAULT_MAP_CENTER_LNG"),
            "DEFAULT_MAP_CENTER_LAT" => option_env!("DEFAULT_MAP_CENTER_LAT"),
            "DEFAULT_MAP_ZOOM" => option_env!("DEFAULT_MAP_ZOOM"),
            "ENABLE_LOGGING" => option_env!("ENABLE_LOGGING"),
            "LOG_LEVEL" => option_env!("LOG_LEVEL"),
            _ => None,
        })
    }

    /// Construye la configuración a partir de un lookup clave -> valor.
    /// Valores no parseables caen a los defaults.
    pub fn from_values<'a, F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<&'a str>,
    {
        let defaults = MapConfig::default();
        let parse_f64 = |key: &str, default: f64| {
            lookup(key)
                .and_then(|v| v.trim().parse::<f64>().ok())
                .filter(|v| v.is_finite())
                .unwrap_or(default)
        };

        Self {
            mapbox_access_token: lookup("MAPBOX_ACCESS_TOKEN")
                .unwrap_or("")
                .trim()
                .to_string(),
            enable_logging: lookup("ENABLE_LOGGING")
                .and_then(|v| v.trim().parse().ok())
                .unwrap_or(true),
            log_level: lookup("LOG_LEVEL").unwrap_or("info").trim().to_string(),
            map_config: MapConfig {
                container_id: defaults.container_id.clone(),
                style: lookup("MAP_STYLE")
                    .map(str::trim)
                    .filter(|s| !s.is_empty())
                    .unwrap_or(DEFAULT_MAP_STYLE)
                    .to_string(),
                default_center_lng: parse_f64("DEFAULT_MAP_CENTER_LNG", defaults.default_center_lng),
                default_center_lat: parse_f64("DEFAULT_MAP_CENTER_LAT", defaults.default_center_lat),
                default_zoom: parse_f64("DEFAULT_MAP_ZOOM", defaults.default_zoom),
            },
        }
    }

    /// Obtiene el token de Mapbox (None si falta)
    pub fn mapbox_token(&self) -> Option<&str> {
        if self.mapbox_access_token.is_empty() {
            None
        } else {
            Some(&self.mapbox_access_token)
        }
    }

    /// Nivel de log para wasm_logger
    pub fn log_level(&self) -> log::Level {
        self.log_level.parse().unwrap_or(log::Level::Info)
    }

    /// Verifica si el modo de logging está habilitado
    pub fn is_logging_enabled(&self) -> bool {
        self.enable_logging
    }
}

// Configuración global estática
lazy_static::lazy_static! {
    pub static ref CONFIG: AppConfig = AppConfig::from_env();
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(pairs: &[(&'static str, &'static str)]) -> AppConfig {
        let values: HashMap<&str, &str> = pairs.iter().copied().collect();
        AppConfig::from_values(|key| values.get(key).copied())
    }

    #[test]
    fn test_missing_token_is_none() {
        let config = config_from(&[]);
        assert_eq!(config.mapbox_token(), None);
        assert_eq!(config.map_config, MapConfig::default());
    }

    #[test]
    fn test_blank_token_counts_as_missing() {
        let config = config_from(&[("MAPBOX_ACCESS_TOKEN", "   ")]);
        assert_eq!(config.mapbox_token(), None);
    }

    #[test]
    fn test_overrides_and_bad_numbers() {
        let config = config_from(&[
            ("MAPBOX_ACCESS_TOKEN", "pk.test"),
            ("DEFAULT_MAP_ZOOM", "15"),
            ("DEFAULT_MAP_CENTER_LAT", "not-a-number"),
            ("LOG_LEVEL", "debug"),
            ("ENABLE_LOGGING", "false"),
        ]);
        assert_eq!(config.mapbox_token(), Some("pk.test"));
        assert_eq!(config.map_config.default_zoom, 15.0);
        assert_eq!(config.map_config.default_center_lat, DEFAULT_CENTER_LAT);
        assert_eq!(config.log_level(), log::Level::Debug);
        assert!(!config.is_logging_enabled());
    }

    #[test]
    fn test_default_view() {
        let map = MapConfig::default();
        assert_eq!(map.center(), [DEFAULT_CENTER_LNG, DEFAULT_CENTER_LAT]);
        // Shibuya
        assert_eq!(map.center(), [139.7016, 35.6590]);
        assert_eq!(map.default_zoom, 13.0);
        assert_eq!(map.style, DEFAULT_MAP_STYLE);
    }
}
