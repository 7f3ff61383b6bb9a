pub mod app;
pub mod map_view;
pub mod error_banner;

pub use app::App;
pub use map_view::MapView;
pub use error_banner::ErrorBanner;
