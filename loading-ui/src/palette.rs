use leptos::prelude::*;
use loading_app::domain::Palette;
use loading_errors::AppError;

/// `<meta name=...>` the server writes its palette into, so the client
/// draws with the same colors after hydration.
pub const PALETTE_META_NAME: &str = "loading-palette";

pub fn encode_palette(palette: &Palette) -> Result<String, AppError> {
    serde_json::to_string(palette).map_err(|e| AppError::Internal(format!("palette encoding: {e}")))
}

pub fn decode_palette(raw: &str) -> Result<Palette, AppError> {
    serde_json::from_str(raw).map_err(|e| AppError::Config(format!("palette payload: {e}")))
}

/// Head element carrying the `Palette` from context. Rendered by the shell.
#[component]
pub fn PaletteMeta() -> impl IntoView {
    let palette = use_context::<Palette>().unwrap_or_default();
    let content = encode_palette(&palette).unwrap_or_else(|e| {
        tracing::error!("Failed to embed palette: {}", e);
        String::new()
    });

    view! { <meta name=PALETTE_META_NAME content=content/> }
}

/// Reads the palette [`PaletteMeta`] left in the document. Missing or
/// unreadable payloads fall back to the default palette.
#[cfg(feature = "hydrate")]
pub fn palette_from_document() -> Palette {
    let content = document()
        .query_selector(&format!("meta[name=\"{PALETTE_META_NAME}\"]"))
        .ok()
        .flatten()
        .and_then(|meta| meta.get_attribute("content"))
        .filter(|raw| !raw.is_empty());

    match content.as_deref().map(decode_palette) {
        Some(Ok(palette)) => palette,
        Some(Err(e)) => {
            tracing::warn!("Ignoring embedded palette: {}", e);
            Palette::default()
        }
        None => Palette::default(),
    }
}
