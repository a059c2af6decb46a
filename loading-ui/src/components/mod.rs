mod error_display;
mod loading_indicator;

pub use error_display::ErrorDisplay;
pub use loading_indicator::LoadingIndicator;
