// ============================================================================
// MAPBOX FFI - Bindings de Mapbox GL JS (cargado por <script> en index.html)
// ============================================================================
// Solo declaraciones - Sin estado, sin lógica
// ============================================================================

use wasm_bindgen::prelude::*;

#[wasm_bindgen]
extern "C" {
    /// `mapboxgl.Map`
    #[wasm_bindgen(js_namespace = mapboxgl, js_name = Map)]
    pub type MapboxMap;

    #[wasm_bindgen(constructor, js_namespace = mapboxgl, js_class = "Map", catch)]
    pub fn new(options: &JsValue) -> Result<MapboxMap, JsValue>;

    #[wasm_bindgen(method, catch, js_name = addControl)]
    pub fn add_control(this: &MapboxMap, control: &NavigationControl) -> Result<MapboxMap, JsValue>;

    #[wasm_bindgen(method, catch, js_name = addSource)]
    pub fn add_source(this: &MapboxMap, id: &str, source: &JsValue) -> Result<MapboxMap, JsValue>;

    #[wasm_bindgen(method, catch, js_name = addLayer)]
    pub fn add_layer(this: &MapboxMap, layer: &JsValue) -> Result<MapboxMap, JsValue>;

    /// `map.on(type, listener)`
    #[wasm_bindgen(method, js_name = on)]
    pub fn on(this: &MapboxMap, event: &str, listener: &js_sys::Function);

    /// `map.on(type, layerId, listener)`
    #[wasm_bindgen(method, catch, js_name = on)]
    pub fn on_layer(
        this: &MapboxMap,
        event: &str,
        layer_id: &str,
        listener: &js_sys::Function,
    ) -> Result<(), JsValue>;

    #[wasm_bindgen(method, js_name = getCanvas)]
    pub fn get_canvas(this: &MapboxMap) -> web_sys::HtmlElement;

    #[wasm_bindgen(method)]
    pub fn remove(this: &MapboxMap);

    /// `mapboxgl.NavigationControl`
    #[wasm_bindgen(js_namespace = mapboxgl, js_name = NavigationControl)]
    pub type NavigationControl;

    #[wasm_bindgen(constructor, js_namespace = mapboxgl, js_class = "NavigationControl", catch)]
    pub fn new() -> Result<NavigationControl, JsValue>;

    /// `mapboxgl.Popup`
    #[wasm_bindgen(js_namespace = mapboxgl, js_name = Popup)]
    pub type Popup;

    #[wasm_bindgen(constructor, js_namespace = mapboxgl, js_class = "Popup", catch)]
    pub fn new(options: &JsValue) -> Result<Popup, JsValue>;

    #[wasm_bindgen(method, js_name = setLngLat)]
    pub fn set_lng_lat(this: &Popup, lng_lat: &JsValue) -> Popup;

    #[wasm_bindgen(method, js_name = setDOMContent)]
    pub fn set_dom_content(this: &Popup, node: &web_sys::Node) -> Popup;

    #[wasm_bindgen(method, js_name = addTo)]
    pub fn add_to(this: &Popup, map: &MapboxMap) -> Popup;

    #[wasm_bindgen(method)]
    pub fn remove(this: &Popup) -> Popup;
}
