//! `tinge contrast` — readable text color for a hex color.

use anyhow::Result;
use tinge_core::{Rgb, BLACK};

use crate::output;

pub fn handle(color: &str) -> Result<()> {
    let rgb = Rgb::from_hex(color)?;
    let text = rgb.contrast();
    let text_name = if text == BLACK { "black" } else { "white" };

    if output::is_json() {
        output::data(
            "contrast",
            &serde_json::json!({
                "color": rgb.to_hex(),
                "luminance": rgb.luminance(),
                "text": text.to_hex(),
            }),
        );
    } else {
        output::kv("Color", &rgb.to_hex());
        output::kv("Luminance", &format!("{:.3}", rgb.luminance()));
        output::kv("Text color", &format!("{} ({})", text.to_hex(), text_name));
    }
    Ok(())
}
