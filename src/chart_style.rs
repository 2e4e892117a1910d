use serde::{Deserialize, Serialize};
use serde_json::{Value, json};

// ============================================================================
// Theme Types
// ============================================================================

/// Typography settings for one named text style.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FontStyle {
    pub font_family: Option<String>,
    pub font_weight: Option<String>,
    pub font_size: Option<String>,
}

/// The typography section of the host theme.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Typography {
    pub body1: FontStyle,
    pub h5: FontStyle,
    pub font_weight_bold: Option<String>,
}

/// A named color group with its main shade.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ColorGroup {
    pub main: String,
}

/// GeoView-specific custom colors carried by the host theme palette.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct GeoViewColor {
    pub primary: ColorGroup,
}

/// GeoView-specific font sizes carried by the host theme palette.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct GeoViewFontSize {
    #[serde(rename = "default")]
    pub default_size: Option<String>,
}

/// The palette section of the host theme. The GeoView groups are optional;
/// styles referencing them degrade to null entries when absent.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Palette {
    pub geo_view_color: Option<GeoViewColor>,
    pub geo_view_font_size: Option<GeoViewFontSize>,
}

/// The theme object supplied by the host application.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ChartTheme {
    pub typography: Typography,
    pub palette: Palette,
}

// ============================================================================
// Style Table
// ============================================================================

/// Builds the sx style classes for the chart widget from the host theme.
///
/// The table is declarative data handed to the renderer; nothing here touches
/// the DOM or performs layout.
pub fn get_sx_classes(theme: &ChartTheme) -> Value {
    let primary_main = theme
        .palette
        .geo_view_color
        .as_ref()
        .map(|c| c.primary.main.clone());
    let font_size_default = theme
        .palette
        .geo_view_font_size
        .as_ref()
        .and_then(|f| f.default_size.clone());

    json!({
        "mainContainer": {
            "fontFamily": theme.typography.body1.font_family,
        },
        "mainGeoChartContainer": {
            "position": "relative",
            "padding": "20px",
            "display": "flex",
            "borderColor": primary_main,
            "borderWidth": "2px",
            "borderStyle": "solid",
        },
        "header": {
            "display": "flex",
            "flexDirection": "row",
        },
        "datasourceSelector": {
            "minWidth": "150px",
            "marginRight": "10px",
            "& .MuiSelect-select": {
                "padding": "8px 12px !important",
            },
        },
        "uiOptionsStepsSelector": {
            "minWidth": "100px",
            "& .MuiSelect-select": {
                "padding": "8px 12px !important",
            },
            "marginRight": "10px",
        },
        "uiOptionsScaleSelector": {
            "minWidth": "130px",
            "& .MuiSelect-select": {
                "padding": "8px 12px !important",
            },
            "marginRight": "10px",
        },
        "downloadButton": {
            "marginLeft": "auto",
            "& button": {
                "height": "40px",
                "textTransform": "capitalize",
            },
        },
        "dataset": {
            "alignItems": "center",
            "justifyContent": "center",
            "textAlign": "center",
        },
        "title": {
            "fontFamily": theme.typography.h5.font_family,
            "fontWeight": theme.typography.h5.font_weight,
            "fontSize": theme.typography.h5.font_size,
            "textAlign": "center",
            "margin": "10px 0px",
        },
        "xAxisLabel": {
            "fontFamily": theme.typography.body1.font_family,
            "fontWeight": theme.typography.font_weight_bold,
            "fontSize": font_size_default,
            "textAlign": "center",
            "margin": "10px 0px",
        },
        "yAxisLabel": {
            "fontFamily": theme.typography.body1.font_family,
            "fontWeight": theme.typography.font_weight_bold,
            "fontSize": font_size_default,
            "position": "absolute",
            "top": "45%",
            "margin": "0 auto",
            "marginLeft": "20px",
            "writingMode": "vertical-rl",
            "transform": "rotate(-180deg)",
            "transformOrigin": "center",
        },
        "uiOptionsResetStates": {
            "display": "inline-flex",
            "width": "40px",
            "textTransform": "capitalize",
            "margin": "10px",
        },
        "checkDatasetWrapperLabel": {
            "display": "inline-block",
            "padding": "10px",
        },
        "checkDatasetWrapper": {
            "display": "inline-block",
            "& .Mui-checked": {
                "color": primary_main.as_ref().map(|c| format!("{c} !important")),
            },
        },
        "checkDatasetLabel": {
            "fontFamily": theme.typography.body1.font_family,
            "display": "inline-flex",
            "verticalAlign": "middle",
        },
        "chartContent": {
            "position": "relative",
        },
        "xSliderWrapper": {
            "& .MuiSlider-root": {
                "color": primary_main,
            },
        },
        "ySliderWrapper": {
            "height": "70%",
            "textAlign": "center",
            "marginLeft": "20px",
            "& .MuiSlider-root": {
                "color": primary_main,
            },
        },
        "loadingDatasource": {
            "backgroundColor": "transparent",
            "zIndex": 0,
        },
        "chartError": {
            "fontStyle": "italic",
            "color": "red",
        },
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn sample_theme() -> ChartTheme {
        serde_json::from_value(json!({
            "typography": {
                "body1": { "fontFamily": "Roboto" },
                "h5": {
                    "fontFamily": "Roboto Slab",
                    "fontWeight": "500",
                    "fontSize": "1.5rem"
                },
                "fontWeightBold": "700"
            },
            "palette": {
                "geoViewColor": { "primary": { "main": "#515BA5" } },
                "geoViewFontSize": { "default": "1rem" }
            }
        }))
        .expect("sample theme must deserialize")
    }

    #[test]
    fn theme_binds_from_camel_case_json() {
        let theme = sample_theme();
        assert_eq!(theme.typography.h5.font_size.as_deref(), Some("1.5rem"));
        assert_eq!(
            theme.palette.geo_view_color.unwrap().primary.main,
            "#515BA5"
        );
    }

    #[test]
    fn sx_classes_carry_theme_typography() {
        let classes = get_sx_classes(&sample_theme());
        assert_eq!(classes["mainContainer"]["fontFamily"], json!("Roboto"));
        assert_eq!(classes["title"]["fontFamily"], json!("Roboto Slab"));
        assert_eq!(classes["title"]["fontWeight"], json!("500"));
        assert_eq!(classes["xAxisLabel"]["fontWeight"], json!("700"));
        assert_eq!(classes["xAxisLabel"]["fontSize"], json!("1rem"));
    }

    #[test]
    fn sx_classes_carry_palette_color() {
        let classes = get_sx_classes(&sample_theme());
        assert_eq!(
            classes["mainGeoChartContainer"]["borderColor"],
            json!("#515BA5")
        );
        assert_eq!(
            classes["checkDatasetWrapper"]["& .Mui-checked"]["color"],
            json!("#515BA5 !important")
        );
        assert_eq!(
            classes["xSliderWrapper"]["& .MuiSlider-root"]["color"],
            json!("#515BA5")
        );
    }

    #[test]
    fn missing_palette_groups_degrade_to_null() {
        let classes = get_sx_classes(&ChartTheme::default());
        assert_eq!(classes["mainGeoChartContainer"]["borderColor"], json!(null));
        assert_eq!(classes["xAxisLabel"]["fontSize"], json!(null));
    }

    #[test]
    fn static_entries_are_stable() {
        let classes = get_sx_classes(&ChartTheme::default());
        assert_eq!(classes["chartError"]["color"], json!("red"));
        assert_eq!(classes["loadingDatasource"]["zIndex"], json!(0));
        assert_eq!(classes["header"]["flexDirection"], json!("row"));
    }
}
