use crate::domain::Palette;
use crate::infrastructure::theme::palette_from_env;
use loading_errors::AppError;

#[derive(Clone, Debug, Default)]
pub struct AppContext {
    pub palette: Palette,
}

impl AppContext {
    pub fn new(palette: Palette) -> Self {
        Self { palette }
    }

    pub fn from_env() -> Result<Self, AppError> {
        let palette = palette_from_env()?;
        tracing::info!("Background token ui_950 = {}", palette.ui_950);
        Ok(Self::new(palette))
    }
}
