//! `tinge catalog` — the default theme and the canned catalog at a glance.

use anyhow::Result;
use tinge_core::Theme;
use tinge_generators::catalog;

use crate::output;

pub fn handle() -> Result<()> {
    let default = Theme::dark_fintech();
    let canned = catalog();

    if output::is_json() {
        output::data(
            "catalog",
            &serde_json::json!({
                "default": default,
                "catalog": canned,
            }),
        );
        return Ok(());
    }

    output::header("Themes");
    let mut table = output::table();
    output::table_header(
        &mut table,
        &["Theme", "Bg", "Fg", "Primary", "Accent", "Fonts"],
    );
    for theme in std::iter::once(&default).chain(canned.iter()) {
        let c = &theme.colors;
        output::table_row(
            &mut table,
            &[
                &theme.name,
                &c.background.to_hex(),
                &c.foreground.to_hex(),
                &c.primary.to_hex(),
                &c.accent.to_hex(),
                &format!(
                    "{} · {}",
                    theme.typography.heading_font, theme.typography.body_font
                ),
            ],
        );
    }
    println!("{table}");
    output::dim("Dark Fintech is active at startup; the rest come from the canned generator.");
    Ok(())
}
