//! Date picker look and locale, handed to the presentation layer as-is

use serde::{Deserialize, Serialize};

pub const LOCALE: &str = "ko";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CalendarTheme {
    pub width: String,
    pub height: String,
    pub max_width: String,
    pub legend_height: String,
    pub shadow: String,
    pub text_primary: String,
    pub text_highlight: String,
    pub background_primary: String,
    pub background_highlight: String,
    pub background_hover: String,
    pub border: String,
    pub font_regular: String,
    pub font_large: String,
    pub disabled_opacity: String,
    pub outsider_opacity: String,
}

impl Default for CalendarTheme {
    fn default() -> Self {
        Self {
            width: "300px".to_string(),
            height: "330px".to_string(),
            max_width: "300px".to_string(),
            legend_height: "45px".to_string(),
            shadow: "0px 10px 26px rgba(0, 0, 0, 0.25)".to_string(),
            text_primary: "#333".to_string(),
            text_highlight: "#fff".to_string(),
            background_primary: "#fff".to_string(),
            background_highlight: "#eb7400".to_string(),
            background_hover: "#eee".to_string(),
            border: "#eee".to_string(),
            font_regular: "1.5em".to_string(),
            font_large: "20em".to_string(),
            disabled_opacity: ".35".to_string(),
            outsider_opacity: ".6".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serializes_with_picker_keys() {
        let theme = serde_json::to_value(CalendarTheme::default()).unwrap();
        assert_eq!(theme["backgroundHighlight"], "#eb7400");
        assert_eq!(theme["legendHeight"], "45px");
    }
}
