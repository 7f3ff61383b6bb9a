// ============================================================================
// MAP VIEWMODEL - Ciclo de vida del mapa (una sola instancia por montaje)
// ============================================================================
// Uninitialized -> Initializing -> Ready -> Unmounted
// Cualquier fallo -> ErrorDisplayed (el widget sigue vivo hasta unmount)
// ============================================================================

use std::rc::Rc;
use crate::config::AppConfig;
use crate::maps::{MapBackend, MapError, MapEventSink, MapWidget};
use crate::models::{ClickedFeature, Court, CourtDataError, MapEvent};
use super::{InteractionViewModel, OverlayViewModel};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MapPhase {
    Uninitialized,
    Initializing,
    Ready,
    ErrorDisplayed,
    Unmounted,
}

/// Dueño exclusivo del handle del mapa.
/// Overlay e interacción solo lo toman prestado.
pub struct MapViewModel<B: MapBackend> {
    backend: B,
    config: AppConfig,
    courts: Result<Rc<[Court]>, CourtDataError>,
    widget: Option<B::Widget>,
    phase: MapPhase,
    error: Option<String>,
    /// Overlay ya intentado: independiente del banner de error
    overlay_attempted: bool,
}

impl<B: MapBackend> MapViewModel<B> {
    pub fn new(backend: B, config: AppConfig, courts: Result<Rc<[Court]>, CourtDataError>) -> Self {
        Self {
            backend,
            config,
            courts,
            widget: None,
            phase: MapPhase::Uninitialized,
            error: None,
            overlay_attempted: false,
        }
    }

    pub fn phase(&self) -> MapPhase {
        self.phase
    }

    /// Mensaje para el banner (a lo sumo uno)
    pub fn error_message(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn has_widget(&self) -> bool {
        self.widget.is_some()
    }

    /// Crear el widget si no existe. Montar de nuevo sin desmontar no crea otro.
    pub fn mount(&mut self, events: MapEventSink) {
        if self.phase != MapPhase::Uninitialized || self.widget.is_some() {
            log::warn!("⚠️ Mapa ya inicializado (fase {:?}), se ignora mount", self.phase);
            return;
        }

        let Some(token) = self.config.mapbox_token().map(str::to_string) else {
            self.fail(MapError::MissingCredential);
            return;
        };

        match self.backend.create(&token, &self.config.map_config, events) {
            Ok(widget) => {
                self.widget = Some(widget);
                self.phase = MapPhase::Initializing;
                log::info!("🗺️ Mapa creado, esperando evento load...");
            }
            Err(e) => self.fail(e),
        }
    }

    /// Punto de entrada único para eventos del widget
    pub fn handle_event(&mut self, event: MapEvent) {
        match event {
            MapEvent::Ready => self.on_ready(),
            MapEvent::Error(message) => self.on_widget_error(message),
            MapEvent::FeatureClick(features) => self.on_feature_click(&features),
            MapEvent::HoverEnter => InteractionViewModel::on_hover_enter(self.widget.as_mut()),
            MapEvent::HoverLeave => InteractionViewModel::on_hover_leave(self.widget.as_mut()),
        }
    }

    /// Registra overlay e interacción una sola vez por widget vivo.
    /// Un error previo (p.ej. sprite 404 antes de load) no lo impide.
    fn on_ready(&mut self) {
        if self.widget.is_none() || self.overlay_attempted {
            log::debug!("load ignorado en fase {:?}", self.phase);
            return;
        }
        self.overlay_attempted = true;

        // Mismo límite de error que la inicialización
        match self.register_overlay() {
            Ok(()) if self.phase == MapPhase::ErrorDisplayed => {
                log::info!("✅ Overlay registrado (banner de error sigue visible)");
            }
            Ok(()) => {
                self.phase = MapPhase::Ready;
                log::info!("✅ Mapa listo");
            }
            Err(e) => self.fail(e),
        }
    }

    fn register_overlay(&mut self) -> Result<(), MapError> {
        let courts = self
            .courts
            .as_ref()
            .map_err(|e| MapError::OverlayRegistration(e.to_string()))?;
        let widget = self.widget.as_mut().ok_or(MapError::NotReady)?;

        OverlayViewModel::register(widget, courts)?;
        InteractionViewModel::attach(widget)
    }

    /// Error en tiempo de ejecución: solo banner, el mapa no se destruye
    fn on_widget_error(&mut self, message: String) {
        match self.phase {
            MapPhase::Initializing | MapPhase::Ready => self.fail(MapError::Runtime(message)),
            MapPhase::ErrorDisplayed => log::error!("❌ Error de mapa (banner ya visible): {}", message),
            MapPhase::Uninitialized | MapPhase::Unmounted => {
                log::debug!("error de mapa ignorado en fase {:?}: {}", self.phase, message)
            }
        }
    }

    fn on_feature_click(&mut self, features: &[ClickedFeature]) {
        if let Err(e) = InteractionViewModel::on_click(self.widget.as_mut(), features) {
            log::warn!("⚠️ No se pudo abrir el popup: {}", e);
        }
    }

    fn fail(&mut self, error: MapError) {
        log::error!("❌ {}", error);
        self.error = Some(error.user_message().to_string());
        self.phase = MapPhase::ErrorDisplayed;
    }

    /// Liberar el widget exactamente una vez. Idempotente.
    pub fn unmount(&mut self) {
        if let Some(mut widget) = self.widget.take() {
            widget.release();
            log::info!("👋 Mapa desmontado");
        }
        self.phase = MapPhase::Unmounted;
    }
}

impl<B: MapBackend> Drop for MapViewModel<B> {
    fn drop(&mut self) {
        self.unmount();
    }
}
