//! Environment-driven settings.
//!
//! There is no config file. Color is chosen by `LEXA_COLOR`
//! (`auto`, `always`, `never`), overridden by a non-empty `NO_COLOR`.
//! Log filtering is `RUST_LOG`, read by [`crate::init_tracing`].

use lexa_diagnostic::emitter::ColorMode;

/// Variable selecting the diagnostic color mode.
pub const COLOR_VAR: &str = "LEXA_COLOR";

/// Resolve the color mode from the process environment.
pub fn color_mode_from_env() -> ColorMode {
    resolve_color_mode(
        std::env::var(COLOR_VAR).ok().as_deref(),
        std::env::var("NO_COLOR").ok().as_deref(),
    )
}

/// Resolve the color mode from raw variable values.
///
/// Unknown `LEXA_COLOR` values fall back to [`ColorMode::Auto`].
pub fn resolve_color_mode(lexa_color: Option<&str>, no_color: Option<&str>) -> ColorMode {
    if no_color.is_some_and(|v| !v.is_empty()) {
        return ColorMode::Never;
    }
    match lexa_color {
        None => ColorMode::Auto,
        Some(value) => ColorMode::parse(value).unwrap_or_else(|| {
            tracing::warn!(value, "unknown {COLOR_VAR} value, using auto");
            ColorMode::Auto
        }),
    }
}
