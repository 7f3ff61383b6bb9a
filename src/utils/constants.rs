/// Id de la fuente GeoJSON con las canchas
pub const COURTS_SOURCE_ID: &str = "basketball-courts";

/// Capa de círculos (única capa interactiva)
pub const COURTS_CIRCLE_LAYER_ID: &str = "basketball-courts-circles";

/// Capa de etiquetas con el nombre de cada cancha
pub const COURTS_LABEL_LAYER_ID: &str = "basketball-courts-labels";

// Estilo de los marcadores
pub const MARKER_RADIUS: f64 = 8.0;
pub const MARKER_COLOR: &str = "#FF5733";
pub const MARKER_STROKE_WIDTH: f64 = 2.0;
pub const MARKER_STROKE_COLOR: &str = "#FFFFFF";

// Estilo de las etiquetas
pub const LABEL_FONT: &[&str] = &["Open Sans Semibold", "Arial Unicode MS Bold"];
pub const LABEL_SIZE: f64 = 12.0;
pub const LABEL_OFFSET: [f64; 2] = [0.0, 1.25];
pub const LABEL_ANCHOR: &str = "top";
pub const LABEL_COLOR: &str = "#333333";
pub const LABEL_HALO_COLOR: &str = "#FFFFFF";
pub const LABEL_HALO_WIDTH: f64 = 1.0;

// Cursor sobre la capa de canchas
pub const CURSOR_POINTER: &str = "pointer";
pub const CURSOR_DEFAULT: &str = "";

// Mensajes para el banner de error
pub const MISSING_TOKEN_MESSAGE: &str =
    "Mapbox access token is missing. Please check your environment variables.";
pub const MAP_LOAD_ERROR_MESSAGE: &str = "Failed to load the map. Please try again later.";
