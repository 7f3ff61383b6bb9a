// ============================================================================
// INTERACTION VIEWMODEL - Click -> popup, hover -> cursor (solo capa de círculos)
// ============================================================================
// Cada handler depende solo de (payload del evento, handle actual)
// ============================================================================

use crate::maps::{MapError, MapWidget};
use crate::models::{ClickedFeature, PopupContent};
use crate::utils::constants::{COURTS_CIRCLE_LAYER_ID, CURSOR_DEFAULT, CURSOR_POINTER};

pub struct InteractionViewModel;

impl InteractionViewModel {
    /// Suscribir click/mouseenter/mouseleave de la capa de círculos
    pub fn attach<W: MapWidget>(widget: &mut W) -> Result<(), MapError> {
        widget.subscribe_layer_events(COURTS_CIRCLE_LAYER_ID)?;
        log::info!("🖱️ Eventos de interacción conectados a {}", COURTS_CIRCLE_LAYER_ID);
        Ok(())
    }

    /// Popup del primer feature clickeado
    pub fn popup_for(features: &[ClickedFeature]) -> Option<PopupContent> {
        features
            .first()
            .map(|feature| PopupContent::for_court(&feature.properties, feature.coordinates))
    }

    /// Retorna true si se mostró un popup. Sin feature o sin widget: no-op.
    pub fn on_click<W: MapWidget>(
        widget: Option<&mut W>,
        features: &[ClickedFeature],
    ) -> Result<bool, MapError> {
        let (Some(widget), Some(popup)) = (widget, Self::popup_for(features)) else {
            return Ok(false);
        };
        widget.show_popup(&popup)?;
        log::debug!("💬 Popup abierto: {}", popup.title);
        Ok(true)
    }

    pub fn on_hover_enter<W: MapWidget>(widget: Option<&mut W>) {
        if let Some(widget) = widget {
            widget.set_cursor(CURSOR_POINTER);
        }
    }

    pub fn on_hover_leave<W: MapWidget>(widget: Option<&mut W>) {
        if let Some(widget) = widget {
            widget.set_cursor(CURSOR_DEFAULT);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::maps::testing::{FakeBackend, FakeWidget};
    use crate::models::{Coordinates, CourtProperties};

    fn court_a(lng: f64, lat: f64) -> ClickedFeature {
        ClickedFeature {
            coordinates: Coordinates::new(lng, lat),
            properties: CourtProperties {
                name: "Court A".to_string(),
                description: "Nice court".to_string(),
                court_type: "outdoor".to_string(),
                hoops: 2,
                surface: "asphalt".to_string(),
            },
        }
    }

    fn widget() -> (FakeBackend, FakeWidget) {
        let mut backend = FakeBackend::new();
        let widget = backend.create_widget();
        (backend, widget)
    }

    #[test]
    fn test_click_opens_popup_at_feature() {
        let (backend, mut widget) = widget();
        let shown = InteractionViewModel::on_click(Some(&mut widget), &[court_a(139.7005, 35.6617)]).unwrap();
        assert!(shown);

        let popups = backend.log().popups.clone();
        assert_eq!(popups.len(), 1);
        assert_eq!(popups[0].anchor, Coordinates::new(139.7005, 35.6617));
        let body = popups[0].body_text();
        for expected in ["Court A", "Nice court", "outdoor", "2", "asphalt"] {
            assert!(body.contains(expected), "popup body missing {:?}: {}", expected, body);
        }
    }

    #[test]
    fn test_click_uses_first_feature() {
        let (backend, mut widget) = widget();
        let mut second = court_a(1.0, 1.0);
        second.properties.name = "Court B".to_string();
        InteractionViewModel::on_click(Some(&mut widget), &[court_a(0.0, 0.0), second]).unwrap();
        assert_eq!(backend.log().popups[0].title, "Court A");
    }

    #[test]
    fn test_empty_click_is_noop() {
        let (backend, mut widget) = widget();
        let shown = InteractionViewModel::on_click(Some(&mut widget), &[]).unwrap();
        assert!(!shown);
        assert!(backend.log().popups.is_empty());
    }

    #[test]
    fn test_click_without_widget_is_noop() {
        let shown = InteractionViewModel::on_click::<FakeWidget>(None, &[court_a(0.0, 0.0)]).unwrap();
        assert!(!shown);
    }

    #[test]
    fn test_hover_sets_and_resets_cursor() {
        let (backend, mut widget) = widget();
        InteractionViewModel::on_hover_enter(Some(&mut widget));
        assert_eq!(backend.log().cursor.as_deref(), Some("pointer"));
        InteractionViewModel::on_hover_leave(Some(&mut widget));
        assert_eq!(backend.log().cursor.as_deref(), Some(""));
    }

    #[test]
    fn test_attach_targets_circle_layer_only() {
        let (backend, mut widget) = widget();
        InteractionViewModel::attach(&mut widget).unwrap();
        assert_eq!(backend.log().subscriptions, vec![COURTS_CIRCLE_LAYER_ID.to_string()]);
    }
}
