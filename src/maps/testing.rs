// Backend en memoria para tests: registra todo lo que se le pide al widget

use std::cell::{Ref, RefCell};
use std::rc::Rc;
use geojson::FeatureCollection;
use crate::config::MapConfig;
use crate::models::PopupContent;
use super::{LayerSpec, MapBackend, MapError, MapEventSink, MapWidget};

#[derive(Default)]
pub struct FakeLog {
    pub creations: usize,
    pub created_with: Vec<(String, MapConfig)>,
    pub sources: Vec<(String, FeatureCollection)>,
    pub layers: Vec<LayerSpec>,
    pub subscriptions: Vec<String>,
    pub popups: Vec<PopupContent>,
    pub cursor: Option<String>,
    pub releases: usize,
}

#[derive(Default)]
pub struct FakeBackend {
    log: Rc<RefCell<FakeLog>>,
    pub fail_create: Option<MapError>,
    /// Id de capa cuyo add_layer falla
    pub fail_layer: Option<String>,
}

impl FakeBackend {
    pub fn new() -> Self {
        Self::default()
    }

    /// Handle compartido al log (sobrevive al move del backend)
    pub fn shared_log(&self) -> Rc<RefCell<FakeLog>> {
        self.log.clone()
    }

    pub fn log(&self) -> Ref<'_, FakeLog> {
        self.log.borrow()
    }

    pub fn create_widget(&mut self) -> FakeWidget {
        self.log.borrow_mut().creations += 1;
        FakeWidget {
            log: self.log.clone(),
            fail_layer: self.fail_layer.clone(),
        }
    }
}

impl MapBackend for FakeBackend {
    type Widget = FakeWidget;

    fn create(
        &mut self,
        access_token: &str,
        config: &MapConfig,
        _events: MapEventSink,
    ) -> Result<FakeWidget, MapError> {
        if let Some(error) = self.fail_create.clone() {
            return Err(error);
        }
        self.log
            .borrow_mut()
            .created_with
            .push((access_token.to_string(), config.clone()));
        Ok(self.create_widget())
    }
}

pub struct FakeWidget {
    log: Rc<RefCell<FakeLog>>,
    fail_layer: Option<String>,
}

impl MapWidget for FakeWidget {
    fn add_geojson_source(&mut self, id: &str, data: &FeatureCollection) -> Result<(), MapError> {
        self.log.borrow_mut().sources.push((id.to_string(), data.clone()));
        Ok(())
    }

    fn add_layer(&mut self, layer: &LayerSpec) -> Result<(), MapError> {
        if self.fail_layer.as_deref() == layer["id"].as_str() {
            return Err(MapError::OverlayRegistration(format!("layer {} rejected", layer["id"])));
        }
        self.log.borrow_mut().layers.push(layer.clone());
        Ok(())
    }

    fn subscribe_layer_events(&mut self, layer_id: &str) -> Result<(), MapError> {
        self.log.borrow_mut().subscriptions.push(layer_id.to_string());
        Ok(())
    }

    fn show_popup(&mut self, popup: &PopupContent) -> Result<(), MapError> {
        self.log.borrow_mut().popups.push(popup.clone());
        Ok(())
    }

    fn set_cursor(&mut self, cursor: &str) {
        self.log.borrow_mut().cursor = Some(cursor.to_string());
    }

    fn release(&mut self) {
        self.log.borrow_mut().releases += 1;
    }
}
