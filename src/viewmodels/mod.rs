pub mod map_viewmodel;
pub mod overlay_viewmodel;
pub mod interaction_viewmodel;

pub use map_viewmodel::{MapPhase, MapViewModel};
pub use overlay_viewmodel::OverlayViewModel;
pub use interaction_viewmodel::InteractionViewModel;
