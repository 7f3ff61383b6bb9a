// ============================================================================
// OVERLAY VIEWMODEL - Fuente GeoJSON + capa de círculos + capa de etiquetas
// ============================================================================

use serde_json::json;
use crate::maps::{LayerSpec, MapError, MapWidget};
use crate::models::Court;
use crate::services::CourtService;
use crate::utils::constants::*;

pub struct OverlayViewModel;

impl OverlayViewModel {
    /// Capa de círculos: marcador de cada cancha
    pub fn circle_layer() -> LayerSpec {
        json!({
            "id": COURTS_CIRCLE_LAYER_ID,
            "type": "circle",
            "source": COURTS_SOURCE_ID,
            "paint": {
                "circle-radius": MARKER_RADIUS,
                "circle-color": MARKER_COLOR,
                "circle-stroke-width": MARKER_STROKE_WIDTH,
                "circle-stroke-color": MARKER_STROKE_COLOR,
            }
        })
    }

    /// Capa de símbolos: el texto sale de la propiedad `name`
    pub fn label_layer() -> LayerSpec {
        json!({
            "id": COURTS_LABEL_LAYER_ID,
            "type": "symbol",
            "source": COURTS_SOURCE_ID,
            "layout": {
                "text-field": ["get", "name"],
                "text-font": LABEL_FONT,
                "text-size": LABEL_SIZE,
                "text-offset": LABEL_OFFSET,
                "text-anchor": LABEL_ANCHOR,
            },
            "paint": {
                "text-color": LABEL_COLOR,
                "text-halo-color": LABEL_HALO_COLOR,
                "text-halo-width": LABEL_HALO_WIDTH,
            }
        })
    }

    /// Registrar fuente y capas. Orden: fuente, círculos, etiquetas.
    pub fn register<W: MapWidget>(widget: &mut W, courts: &[Court]) -> Result<(), MapError> {
        let collection = CourtService::to_feature_collection(courts);
        widget.add_geojson_source(COURTS_SOURCE_ID, &collection)?;
        widget.add_layer(&Self::circle_layer())?;
        widget.add_layer(&Self::label_layer())?;

        log::info!("📍 Overlay registrado: {} canchas", courts.len());
        Ok(())
    }
}
