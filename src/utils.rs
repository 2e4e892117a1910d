use std::path::Path;
use std::sync::LazyLock;

use anyhow::{Context, Result};
use regex::Regex;
use serde::Serialize;
use serde_json::Value;
use tracing::debug;

/// Regex for hex color: #RGB or #RRGGBB.
static HEX_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^#([0-9a-fA-F]{3}|[0-9a-fA-F]{6})$").unwrap());

/// Regex for rgb() color.
static RGB_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)^rgb\((\d+),\s*(\d+),\s*(\d+)\)$").unwrap());

/// Regex for rgba() color with int or float alpha.
static RGBA_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^rgba\((\d+),\s*(\d+),\s*(\d+),\s*(\d*\.?\d+)\)$").unwrap()
});

/// Checks if the value is a finite number.
pub fn is_number(value: &Value) -> bool {
    value.as_f64().is_some_and(f64::is_finite)
}

/// Finds the color in a palette for the given index.
/// When the index is greater than the palette length, it loops back to the
/// beginning. Falls back to `default_color` when no usable palette is given.
pub fn get_color_from_palette<'a>(
    palette: Option<&'a [String]>,
    index: usize,
    default_color: &'a str,
) -> &'a str {
    match palette {
        Some(colors) if !colors.is_empty() => colors[index % colors.len()].as_str(),
        _ => default_color,
    }
}

/// Extracts the color value without its alpha layer.
/// Accepts colors in hex, rgb() and rgba() formats; 3-digit hex is expanded
/// to 6 digits. Unrecognized formats are returned unchanged.
pub fn extract_color(color: &str) -> String {
    if let Some(caps) = HEX_RE.captures(color) {
        let hex = &caps[1];
        if hex.len() == 3 {
            let doubled: String = hex.chars().flat_map(|c| [c, c]).collect();
            return format!("#{doubled}");
        }
        return format!("#{hex}");
    }

    if let Some(caps) = RGB_RE.captures(color) {
        return format!("rgb({}, {}, {})", &caps[1], &caps[2], &caps[3]);
    }

    if let Some(caps) = RGBA_RE.captures(color) {
        return format!("rgb({}, {}, {})", &caps[1], &caps[2], &caps[3]);
    }

    color.to_string()
}

/// Guesses the step size a time slider should use for the given value range,
/// in milliseconds. Returns `None` when the range is too small to need one.
///
/// Checks run in ascending threshold order and each overwrites the previous
/// suggestion, so the largest matching threshold wins.
pub fn guess_estimated_step(min_value: f64, max_value: f64) -> Option<f64> {
    const DAY_1: f64 = 86_400_000.0; // 24h x 60m x 60s x 1000ms
    const MONTH_1: f64 = DAY_1 * 30.0;
    const MONTHS_2: f64 = MONTH_1 * 2.0;
    const YEAR_1: f64 = DAY_1 * 365.0;
    const YEARS_2: f64 = YEAR_1 * 2.0;
    const YEARS_10: f64 = YEAR_1 * 10.0;
    let interval_diff = max_value - min_value;

    let mut step = None;
    if interval_diff > MONTHS_2 {
        step = Some(DAY_1); // Daily stepping
    }
    if interval_diff > YEARS_2 {
        step = Some(MONTH_1); // Monthly stepping
    }
    if interval_diff > YEARS_10 {
        step = Some(YEAR_1); // Yearly stepping
    }
    step
}

/// Saves the data object as a pretty-printed JSON file at the given path.
pub fn download_json<T: Serialize>(data: &T, filename: impl AsRef<Path>) -> Result<()> {
    let filename = filename.as_ref();
    let json = serde_json::to_string_pretty(data).context("Failed to serialize data to JSON")?;
    std::fs::write(filename, json)
        .with_context(|| format!("Failed to write JSON file {}", filename.display()))?;
    debug!("Saved JSON download to {}", filename.display());
    Ok(())
}
