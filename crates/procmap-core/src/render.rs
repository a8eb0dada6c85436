//! # Render Module
//!
//! Turns a [`SupportMatrix`] into a single self-contained HTML document.
//!
//! The document carries its own stylesheet and a short hover script; it loads
//! nothing from the network. Unit rows are laid out bottom-to-top in source
//! order, the way a heatmap y axis reads.

use crate::heatmap::SupportMatrix;
use crate::primitives::{
    DEFAULT_HEIGHT, DEFAULT_TITLE, DEFAULT_WIDTH, LEGEND_TITLE, X_AXIS_TITLE, Y_AXIS_TITLE,
};
use crate::{ProcmapError, Status};
use serde::{Deserialize, Serialize};
use std::fmt::Write as _;
use std::path::{Path, PathBuf};

/// Layout knobs for the rendered document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderOptions {
    pub title: String,
    /// Figure width in pixels.
    pub width: u32,
    /// Figure height in pixels.
    pub height: u32,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            title: DEFAULT_TITLE.to_string(),
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
        }
    }
}

const STYLE: &str = r#"
body { margin: 0; padding: 24px; background: #ffffff; color: #2a3f5f;
       font-family: "Open Sans", Verdana, Arial, sans-serif; font-size: 12px; }
.figure { box-sizing: border-box; display: flex; flex-direction: column; background: #ffffff; }
.title { font-size: 17px; font-weight: normal; margin: 0 0 12px 0; }
.plot { flex: 1; display: flex; min-height: 0; }
.y-title { writing-mode: vertical-rl; transform: rotate(180deg); text-align: center; font-size: 14px; }
.heatmap { flex: 1; border-collapse: collapse; table-layout: fixed; height: 100%; }
.heatmap td.cell { border: 1px solid #ebf0f8; text-align: center; vertical-align: middle;
                   overflow: hidden; text-overflow: ellipsis; padding: 2px; }
.heatmap td.cell.filled:hover { outline: 2px solid #2a3f5f; outline-offset: -2px; }
.heatmap th { font-weight: normal; padding: 4px; }
.heatmap th.y-label { text-align: right; white-space: nowrap; }
.heatmap th.x-label { vertical-align: top; }
.x-title { text-align: center; font-size: 14px; margin-top: 6px; }
.legend { margin-left: 16px; display: flex; flex-direction: column; justify-content: center; gap: 6px; }
.legend .legend-title { font-size: 13px; margin-bottom: 4px; }
.legend .swatch { display: inline-block; width: 18px; height: 18px; margin-right: 6px; vertical-align: middle; }
.tooltip { position: fixed; pointer-events: none; background: #ffffff; border: 1px solid #2a3f5f;
           padding: 6px 8px; white-space: pre-line; max-width: 360px; box-shadow: 0 2px 6px rgba(0,0,0,0.2); }
"#;

const SCRIPT: &str = r#"
(function () {
  var tip = document.getElementById("tooltip");
  var cells = document.querySelectorAll("td.cell[data-hover]");
  for (var i = 0; i < cells.length; i++) {
    cells[i].removeAttribute("title");
    cells[i].addEventListener("mousemove", function (ev) {
      tip.textContent = this.getAttribute("data-hover");
      tip.style.left = (ev.clientX + 12) + "px";
      tip.style.top = (ev.clientY + 12) + "px";
      tip.hidden = false;
    });
    cells[i].addEventListener("mouseleave", function () { tip.hidden = true; });
  }
})();
"#;

/// Escape text for use in element content and double-quoted attributes.
pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}

/// Render the full HTML document.
#[must_use]
pub fn render_html(matrix: &SupportMatrix, options: &RenderOptions) -> String {
    let title = escape_html(&options.title);
    let mut html = String::new();

    // `write!` into a String cannot fail.
    let _ = write!(
        html,
        "<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\">\n\
         <title>{title}</title>\n<style>{STYLE}</style>\n</head>\n<body>\n\
         <div class=\"figure\" style=\"width:{w}px;height:{h}px\">\n\
         <h1 class=\"title\">{title}</h1>\n<div class=\"plot\">\n\
         <div class=\"y-title\">{y_title}</div>\n",
        w = options.width,
        h = options.height,
        y_title = escape_html(Y_AXIS_TITLE),
    );

    render_grid(&mut html, matrix);
    render_legend(&mut html);

    let _ = write!(
        html,
        "</div>\n<div class=\"x-title\">{x_title}</div>\n</div>\n\
         <div id=\"tooltip\" class=\"tooltip\" hidden></div>\n\
         <script>{SCRIPT}</script>\n</body>\n</html>\n",
        x_title = escape_html(X_AXIS_TITLE),
    );

    html
}

fn render_grid(html: &mut String, matrix: &SupportMatrix) {
    let (_, cols) = matrix.shape();
    html.push_str("<table class=\"heatmap\">\n");

    for (row, unit) in matrix.units.iter().enumerate().rev() {
        let _ = write!(html, "<tr><th class=\"y-label\">{}</th>", escape_html(unit));
        for col in 0..cols {
            render_cell(html, matrix, row, col);
        }
        html.push_str("</tr>\n");
    }

    html.push_str("<tr><th></th>");
    for process in &matrix.processes {
        let _ = write!(html, "<th class=\"x-label\">{}</th>", escape_html(process));
    }
    html.push_str("</tr>\n</table>\n");
}

fn render_cell(html: &mut String, matrix: &SupportMatrix, row: usize, col: usize) {
    if !matrix.is_filled(row, col) {
        let _ = write!(html, "<td class=\"cell\" data-row=\"{row}\" data-col=\"{col}\"></td>");
        return;
    }

    let name = &matrix.text[row][col];
    let hover = escape_html(&format!("{}\n{}", name, matrix.hover[row][col]));
    let background = matrix
        .status_at(row, col)
        .map(|s| format!(" style=\"background:{}\"", s.color()))
        .unwrap_or_default();

    let _ = write!(
        html,
        "<td class=\"cell filled\" data-row=\"{row}\" data-col=\"{col}\"{background} \
         title=\"{hover}\" data-hover=\"{hover}\">{}</td>",
        escape_html(name),
    );
}

fn render_legend(html: &mut String) {
    let _ = write!(
        html,
        "<div class=\"legend\">\n<div class=\"legend-title\">{}</div>\n",
        escape_html(LEGEND_TITLE)
    );
    for status in Status::ALL {
        let _ = writeln!(
            html,
            "<div class=\"legend-item\"><span class=\"swatch\" style=\"background:{}\"></span>{}</div>",
            status.color(),
            status.name()
        );
    }
    html.push_str("</div>\n");
}

/// Render and write the document, creating parent directories as needed.
///
/// Returns the path written.
pub fn write_html(
    matrix: &SupportMatrix,
    options: &RenderOptions,
    path: &Path,
) -> Result<PathBuf, ProcmapError> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(path, render_html(matrix, options))?;
    Ok(path.to_path_buf())
}

// =============================================================================
// TESTS
// =============================================================================
