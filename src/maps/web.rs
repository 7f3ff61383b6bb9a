// ============================================================================
// WEB MAP - Implementación del seam con Mapbox GL JS
// ============================================================================
// Las closures de eventos viven en el widget y se sueltan en release()
// ============================================================================

use geojson::FeatureCollection;
use serde::Serialize;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::Element;
use crate::config::MapConfig;
use crate::dom::{append_child, ElementBuilder};
use crate::models::{ClickedFeature, Coordinates, CourtProperties, MapEvent, PopupContent};
use crate::utils::mapbox_ffi::{MapboxMap, NavigationControl, Popup};
use super::{LayerSpec, MapBackend, MapError, MapEventSink, MapWidget};

type JsListener = Closure<dyn FnMut(JsValue)>;

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct MapOptions<'a> {
    container: &'a str,
    access_token: &'a str,
    style: &'a str,
    center: [f64; 2],
    zoom: f64,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct PopupOptions {
    offset: f64,
    close_button: bool,
    max_width: &'static str,
}

#[derive(Serialize)]
struct GeoJsonSource<'a> {
    #[serde(rename = "type")]
    kind: &'static str,
    data: &'a FeatureCollection,
}

/// Backend Mapbox GL JS
#[derive(Default)]
pub struct MapboxBackend;

impl MapBackend for MapboxBackend {
    type Widget = MapboxWidget;

    fn create(
        &mut self,
        access_token: &str,
        config: &MapConfig,
        events: MapEventSink,
    ) -> Result<MapboxWidget, MapError> {
        log::info!("🗺️ Creando mapa Mapbox en #{}", config.container_id);

        let options = to_js(&MapOptions {
            container: &config.container_id,
            access_token,
            style: &config.style,
            center: config.center(),
            zoom: config.default_zoom,
        })
        .map_err(|e| MapError::Initialization(js_error_message(&e)))?;

        let map = MapboxMap::new(&options)
            .map_err(|e| MapError::Initialization(js_error_message(&e)))?;

        let mut widget = MapboxWidget {
            map,
            events,
            listeners: Vec::new(),
            popup: None,
        };

        // Los controles son parte de la inicialización: si fallan, se libera el mapa
        let controls = NavigationControl::new().and_then(|control| widget.map.add_control(&control));
        if let Err(e) = controls {
            widget.release();
            return Err(MapError::Initialization(js_error_message(&e)));
        }

        let on_load = widget.forward(|_| Some(MapEvent::Ready));
        widget.map.on("load", on_load.as_ref().unchecked_ref());
        widget.listeners.push(on_load);

        let on_error = widget.forward(|event| Some(MapEvent::Error(error_event_message(&event))));
        widget.map.on("error", on_error.as_ref().unchecked_ref());
        widget.listeners.push(on_error);

        Ok(widget)
    }
}

/// Widget Mapbox vivo
pub struct MapboxWidget {
    map: MapboxMap,
    events: MapEventSink,
    listeners: Vec<JsListener>,
    popup: Option<Popup>,
}

impl MapboxWidget {
    /// Closure JS que traduce el evento y lo entrega al sink
    fn forward<F>(&self, translate: F) -> JsListener
    where
        F: Fn(JsValue) -> Option<MapEvent> + 'static,
    {
        let sink = self.events.clone();
        Closure::wrap(Box::new(move |event: JsValue| {
            if let Some(map_event) = translate(event) {
                sink(map_event);
            }
        }) as Box<dyn FnMut(JsValue)>)
    }

    fn on_layer(&mut self, event: &str, layer_id: &str, listener: JsListener) -> Result<(), MapError> {
        self.map
            .on_layer(event, layer_id, listener.as_ref().unchecked_ref())
            .map_err(|e| MapError::OverlayRegistration(js_error_message(&e)))?;
        self.listeners.push(listener);
        Ok(())
    }
}

impl MapWidget for MapboxWidget {
    fn add_geojson_source(&mut self, id: &str, data: &FeatureCollection) -> Result<(), MapError> {
        let source = to_js(&GeoJsonSource { kind: "geojson", data })
            .map_err(|e| MapError::OverlayRegistration(js_error_message(&e)))?;
        self.map
            .add_source(id, &source)
            .map(|_| ())
            .map_err(|e| MapError::OverlayRegistration(js_error_message(&e)))
    }

    fn add_layer(&mut self, layer: &LayerSpec) -> Result<(), MapError> {
        let layer = to_js(layer).map_err(|e| MapError::OverlayRegistration(js_error_message(&e)))?;
        self.map
            .add_layer(&layer)
            .map(|_| ())
            .map_err(|e| MapError::OverlayRegistration(js_error_message(&e)))
    }

    fn subscribe_layer_events(&mut self, layer_id: &str) -> Result<(), MapError> {
        let on_click = self.forward(|event| Some(MapEvent::FeatureClick(clicked_features(&event))));
        self.on_layer("click", layer_id, on_click)?;

        let on_enter = self.forward(|_| Some(MapEvent::HoverEnter));
        self.on_layer("mouseenter", layer_id, on_enter)?;

        let on_leave = self.forward(|_| Some(MapEvent::HoverLeave));
        self.on_layer("mouseleave", layer_id, on_leave)
    }

    fn show_popup(&mut self, content: &PopupContent) -> Result<(), MapError> {
        let to_runtime = |e: JsValue| MapError::Runtime(js_error_message(&e));

        let body = render_popup_body(content).map_err(to_runtime)?;
        let options = to_js(&PopupOptions {
            offset: 15.0,
            close_button: true,
            max_width: "280px",
        })
        .map_err(to_runtime)?;
        let anchor = to_js(&[content.anchor.longitude, content.anchor.latitude]).map_err(to_runtime)?;

        if let Some(previous) = self.popup.take() {
            previous.remove();
        }

        let popup = Popup::new(&options).map_err(to_runtime)?;
        popup.set_lng_lat(&anchor).set_dom_content(&body).add_to(&self.map);
        self.popup = Some(popup);
        Ok(())
    }

    fn set_cursor(&mut self, cursor: &str) {
        if let Err(e) = self.map.get_canvas().style().set_property("cursor", cursor) {
            log::warn!("⚠️ No se pudo cambiar el cursor: {}", js_error_message(&e));
        }
    }

    fn release(&mut self) {
        if let Some(popup) = self.popup.take() {
            popup.remove();
        }
        self.map.remove();
        self.listeners.clear();
        log::info!("🧹 Mapa Mapbox liberado");
    }
}

/// Cuerpo del popup como nodos DOM (texto, sin innerHTML)
fn render_popup_body(content: &PopupContent) -> Result<Element, JsValue> {
    let body = ElementBuilder::new("div")?.class("court-popup").build();

    let title = ElementBuilder::new("h3")?.class("court-popup__title").text(&content.title).build();
    append_child(&body, &title)?;

    if !content.description.is_empty() {
        let description = ElementBuilder::new("p")?
            .class("court-popup__description")
            .text(&content.description)
            .build();
        append_child(&body, &description)?;
    }

    for row in &content.rows {
        let label = ElementBuilder::new("strong")?.text(&format!("{}: ", row.label)).build();
        let value = ElementBuilder::new("span")?.text(&row.value).build();
        let line = ElementBuilder::new("p")?
            .class("court-popup__row")
            .child(label)?
            .child(value)?
            .build();
        append_child(&body, &line)?;
    }

    Ok(body)
}

/// Features del hit-test de Mapbox: geometry.coordinates + properties
fn clicked_features(event: &JsValue) -> Vec<ClickedFeature> {
    let features = match js_sys::Reflect::get(event, &JsValue::from_str("features")) {
        Ok(value) if js_sys::Array::is_array(&value) => js_sys::Array::from(&value),
        _ => return Vec::new(),
    };

    features
        .iter()
        .filter_map(|feature| match parse_feature(&feature) {
            Ok(clicked) => Some(clicked),
            Err(e) => {
                log::warn!("⚠️ Feature ignorado en click: {}", e);
                None
            }
        })
        .collect()
}

fn parse_feature(feature: &JsValue) -> Result<ClickedFeature, String> {
    let geometry = js_sys::Reflect::get(feature, &JsValue::from_str("geometry"))
        .map_err(|e| js_error_message(&e))?;
    let coordinates = js_sys::Reflect::get(&geometry, &JsValue::from_str("coordinates"))
        .map_err(|e| js_error_message(&e))?;
    let coordinates = js_sys::Array::from(&coordinates);
    let coordinates = match (coordinates.get(0).as_f64(), coordinates.get(1).as_f64()) {
        (Some(lng), Some(lat)) => Coordinates::new(lng, lat),
        _ => return Err("feature geometry is not a Point".to_string()),
    };

    let properties = js_sys::Reflect::get(feature, &JsValue::from_str("properties"))
        .map_err(|e| js_error_message(&e))?;
    let properties: CourtProperties =
        serde_wasm_bindgen::from_value(properties).map_err(|e| e.to_string())?;

    Ok(ClickedFeature { coordinates, properties })
}

/// Mensaje del evento `error` de Mapbox (`{ error: Error }`)
fn error_event_message(event: &JsValue) -> String {
    match js_sys::Reflect::get(event, &JsValue::from_str("error")) {
        Ok(error) if !error.is_undefined() => js_error_message(&error),
        _ => js_error_message(event),
    }
}

fn js_error_message(value: &JsValue) -> String {
    if let Some(error) = value.dyn_ref::<js_sys::Error>() {
        return String::from(error.message());
    }
    value.as_string().unwrap_or_else(|| format!("{:?}", value))
}

/// Serializar con objetos planos (no `Map`) como espera Mapbox
fn to_js<T: Serialize + ?Sized>(value: &T) -> Result<JsValue, JsValue> {
    value
        .serialize(&serde_wasm_bindgen::Serializer::json_compatible())
        .map_err(JsValue::from)
}
