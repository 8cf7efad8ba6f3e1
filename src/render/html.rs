use std::io::Write;

use crate::config::RenderConfig;
use crate::error::{Result, TraceGraphError};
use crate::viz::{VisData, VisOptions};

fn escape_html(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// JSON embedded in a `<script>` must not contain `</`.
fn script_json<T: serde::Serialize>(value: &T) -> Result<String> {
    let raw = serde_json::to_string(value).map_err(|e| TraceGraphError::Write(e.into()))?;
    Ok(raw.replace("</", "<\\/"))
}

/// Standalone page: the container div, the vis-network script and the
/// embedded data/options.
pub fn write_html<W: Write>(
    data: &VisData,
    options: &VisOptions,
    config: &RenderConfig,
    out: &mut W,
) -> Result<()> {
    let container = escape_html(&config.container_id);
    let background = escape_html(&config.background_color);
    let nodes = script_json(&data.nodes)?;
    let edges = script_json(&data.edges)?;
    let options = script_json(options)?;
    let container_js = script_json(&config.container_id)?;

    writeln!(out, "<!DOCTYPE html>")?;
    writeln!(out, "<html>")?;
    writeln!(out, "<head>")?;
    writeln!(out, "<meta charset=\"utf-8\">")?;
    writeln!(out, "<title>{}</title>", escape_html(&config.title))?;
    writeln!(out, "<script src=\"{}\"></script>", escape_html(&config.vis_js_url))?;
    writeln!(out, "<style>")?;
    writeln!(out, "  html, body {{ margin: 0; height: 100%; background: {background}; }}")?;
    writeln!(out, "</style>")?;
    writeln!(out, "</head>")?;
    writeln!(out, "<body>")?;
    writeln!(out, "<div id=\"{container}\" style=\"width: 100%; height: 100%;\"></div>")?;
    writeln!(out, "<script>")?;
    writeln!(out, "  const nodes = new vis.DataSet({nodes});")?;
    writeln!(out, "  const edges = new vis.DataSet({edges});")?;
    writeln!(out, "  const options = {options};")?;
    writeln!(
        out,
        "  new vis.Network(document.getElementById({container_js}), {{ nodes, edges }}, options);"
    )?;
    writeln!(out, "</script>")?;
    writeln!(out, "</body>")?;
    writeln!(out, "</html>")?;
    Ok(())
}
