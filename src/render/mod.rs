//! HTML rendering and file output for finished quirk tables.
//!
//! Purely presentational: the core matrix is plain strings; bolding the
//! SHARED label and the HARDPOINTS name happens here.

use crate::core::error::Result;
use crate::matrix::SHARED_LABEL;
use crate::mech::hardpoints::HARDPOINTS_QUIRK;
use crate::mech::QuirkTable;
use std::fs;
use std::path::Path;

const PAGE_TEMPLATE: &str = r#"<!DOCTYPE html>
<html>
<head>
    <title>{title} Mech QuirkTable</title>
    <link rel="stylesheet" type="text/css" href="style.css">
</head>
<body>
    {table}
</body>
</html>
"#;

fn cell_html(text: &str) -> String {
    if text == SHARED_LABEL {
        return format!("<b>{}</b>", SHARED_LABEL);
    }
    text.replace(
        &format!("{}:", HARDPOINTS_QUIRK),
        &format!("<b>{}</b>:", HARDPOINTS_QUIRK),
    )
    .replace('\n', "<br/>")
}

/// Render a string matrix as the table element.
pub fn table_html(matrix: &[Vec<String>]) -> String {
    let mut html = String::from("<table class=\"csstable\">");
    for row in matrix {
        html.push_str("<tr>");
        for cell in row {
            html.push_str("<td>");
            html.push_str(&cell_html(cell));
            html.push_str("</td>");
        }
        html.push_str("</tr>");
    }
    html.push_str("</table>");
    html
}

/// Render the full page for one chassis.
pub fn render_page(mech: &impl QuirkTable) -> String {
    PAGE_TEMPLATE
        .replace("{title}", mech.name())
        .replace("{table}", &table_html(mech.matrix()))
}

/// Write one `{name}.html` per mech into `dir`, creating it if needed.
pub fn write_tables<T: QuirkTable>(dir: &Path, mechs: &[T]) -> Result<usize> {
    fs::create_dir_all(dir)?;
    for mech in mechs {
        let path = dir.join(format!("{}.html", mech.name().to_lowercase()));
        fs::write(&path, render_page(mech))?;
        tracing::info!(mech = mech.name(), path = %path.display(), "wrote table");
    }
    Ok(mechs.len())
}
