use super::court::{Coordinates, CourtProperties};

/// Feature devuelto por el hit-test de la capa al hacer click
#[derive(Clone, PartialEq, Debug)]
pub struct ClickedFeature {
    pub coordinates: Coordinates,
    pub properties: CourtProperties,
}

/// Eventos que el widget entrega al ViewModel
#[derive(Clone, PartialEq, Debug)]
pub enum MapEvent {
    Ready,
    Error(String),
    FeatureClick(Vec<ClickedFeature>),
    HoverEnter,
    HoverLeave,
}

impl MapEvent {
    pub fn name(&self) -> &'static str {
        match self {
            MapEvent::Ready => "load",
            MapEvent::Error(_) => "error",
            MapEvent::FeatureClick(_) => "click",
            MapEvent::HoverEnter => "mouseenter",
            MapEvent::HoverLeave => "mouseleave",
        }
    }
}
