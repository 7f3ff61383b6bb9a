use std::rc::Rc;
use geojson::FeatureCollection;
use crate::config::MapConfig;
use crate::models::{MapEvent, PopupContent};
use crate::utils::constants::{MAP_LOAD_ERROR_MESSAGE, MISSING_TOKEN_MESSAGE};

/// Receptor de eventos del widget (load, error, click, hover)
pub type MapEventSink = Rc<dyn Fn(MapEvent)>;

/// Capa de Mapbox: JSON del estilo (`id`, `type`, `source`, `paint`, `layout`)
pub type LayerSpec = serde_json::Value;

/// Crea instancias de widget. Una implementación por plataforma.
pub trait MapBackend {
    type Widget: MapWidget;

    /// Crear el widget montado en `container_id`, con sus controles.
    /// Los eventos `load` y `error` se entregan a `events`.
    fn create(
        &mut self,
        access_token: &str,
        config: &MapConfig,
        events: MapEventSink,
    ) -> Result<Self::Widget, MapError>;
}

/// Operaciones sobre un widget vivo
pub trait MapWidget {
    /// Registrar una fuente GeoJSON
    fn add_geojson_source(&mut self, id: &str, data: &FeatureCollection) -> Result<(), MapError>;

    /// Agregar una capa ligada a una fuente ya registrada
    fn add_layer(&mut self, layer: &LayerSpec) -> Result<(), MapError>;

    /// Suscribir click/mouseenter/mouseleave de una capa al sink de eventos
    fn subscribe_layer_events(&mut self, layer_id: &str) -> Result<(), MapError>;

    /// Mostrar un popup (reemplaza el anterior si existe)
    fn show_popup(&mut self, popup: &PopupContent) -> Result<(), MapError>;

    /// Estilo de cursor del canvas del mapa
    fn set_cursor(&mut self, cursor: &str);

    /// Liberar el widget. Se llama exactamente una vez.
    fn release(&mut self);
}

/// Error del mapa
#[derive(Debug, Clone, PartialEq)]
pub enum MapError {
    MissingCredential,
    Initialization(String),
    Runtime(String),
    OverlayRegistration(String),
    NotReady,
}

impl MapError {
    /// Texto para el banner. El detalle técnico solo va al log.
    pub fn user_message(&self) -> &'static str {
        match self {
            MapError::MissingCredential => MISSING_TOKEN_MESSAGE,
            _ => MAP_LOAD_ERROR_MESSAGE,
        }
    }
}

impl std::fmt::Display for MapError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MapError::MissingCredential => write!(f, "Mapbox access token is missing"),
            MapError::Initialization(msg) => write!(f, "Map initialization failed: {}", msg),
            MapError::Runtime(msg) => write!(f, "Map runtime error: {}", msg),
            MapError::OverlayRegistration(msg) => write!(f, "Court overlay registration failed: {}", msg),
            MapError::NotReady => write!(f, "Map is not ready"),
        }
    }
}

impl std::error::Error for MapError {}
