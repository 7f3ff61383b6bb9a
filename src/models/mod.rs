pub mod court;
pub mod popup;
pub mod map_event;

pub use court::{Coordinates, Court, CourtDataError, CourtProperties};
pub use popup::{PopupContent, PopupRow};
pub use map_event::{ClickedFeature, MapEvent};
