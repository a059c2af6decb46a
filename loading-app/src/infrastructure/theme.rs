use crate::domain::{ColorToken, HexColor, Palette};
use loading_errors::AppError;

/// Builds the palette from the process environment, one variable per
/// token (`UI_950=#0A0A0A`). Unset or blank variables keep the default.
pub fn palette_from_env() -> Result<Palette, AppError> {
    palette_from_lookup(|key| std::env::var(key).ok())
}

pub fn palette_from_lookup<F>(lookup: F) -> Result<Palette, AppError>
where
    F: Fn(&str) -> Option<String>,
{
    let mut palette = Palette::default();

    for token in ColorToken::ALL {
        let key = token.env_key();
        let Some(raw) = lookup(key).filter(|v| !v.trim().is_empty()) else {
            tracing::debug!("{} not set, using default {}", key, palette.token(token));
            continue;
        };

        let color: HexColor = raw
            .parse()
            .map_err(|e: AppError| AppError::Config(format!("{key}: {e}")))?;

        tracing::info!("Design token {} overridden: {}", token.name(), color);
        palette.set_token(token, color);
    }

    Ok(palette)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_when_unset() {
        let palette = palette_from_lookup(|_| None).unwrap();
        assert_eq!(palette, Palette::default());
    }

    #[test]
    fn test_blank_value_is_ignored() {
        let palette = palette_from_lookup(|_| Some("  ".to_string())).unwrap();
        assert_eq!(palette, Palette::default());
    }

    #[test]
    fn test_override() {
        let palette = palette_from_lookup(|key| (key == "UI_950").then(|| "#111827".to_string()))
            .unwrap();
        assert_eq!(palette.ui_950, HexColor::new(0x11, 0x18, 0x27));
    }

    #[test]
    fn test_invalid_override_is_config_error() {
        let err = palette_from_lookup(|_| Some("black".to_string())).unwrap_err();
        match err {
            AppError::Config(msg) => assert!(msg.starts_with("UI_950")),
            other => panic!("unexpected error: {other:?}"),
        }
    }
}
