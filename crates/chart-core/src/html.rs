// File: crates/chart-core/src/html.rs
// Summary: Standalone interactive HTML export (inline SVG, data tables, hover tooltips).

use std::path::Path;

use handlebars::Handlebars;
use serde::Serialize;
use serde_json::json;

use crate::error::{ChartError, Result};
use crate::figure::{write_file, Figure, Panel, RenderOptions};
use crate::format::plain;
use crate::hit::HitRegion;
use crate::series::SeriesKind;

const PAGE_TEMPLATE: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<meta name="viewport" content="width=device-width, initial-scale=1">
<title>{{title}}</title>
<style>
  body { font-family: "DejaVu Sans", Arial, Helvetica, sans-serif; margin: 24px; background: {{background}}; color: #262626; }
  h1 { font-size: 20px; }
  #figure { position: relative; max-width: {{width}}px; }
  #figure svg { width: 100%; height: auto; display: block; }
  #tooltip { position: fixed; pointer-events: none; display: none; background: rgba(255,255,255,0.95);
             border: 1px solid #888; border-radius: 4px; padding: 6px 8px; font-size: 13px; box-shadow: 0 2px 6px rgba(0,0,0,.2); }
  details { margin-top: 16px; }
  table { border-collapse: collapse; margin: 8px 0 16px; font-size: 13px; }
  th, td { border: 1px solid #ccc; padding: 4px 8px; text-align: left; }
  th { background: {{accent}}; color: #fff; }
</style>
</head>
<body>
<h1>{{title}}</h1>
<div id="figure">{{{svg}}}</div>
<div id="tooltip"></div>
{{#each panels}}
<details>
  <summary>{{#if this.title}}{{this.title}}{{else}}Panel {{@index}}{{/if}}: data</summary>
  <table>
    <thead><tr>{{#each this.columns}}<th>{{this}}</th>{{/each}}</tr></thead>
    <tbody>
    {{#each this.rows}}<tr>{{#each this}}<td>{{this}}</td>{{/each}}</tr>
    {{/each}}
    </tbody>
  </table>
</details>
{{/each}}
<script>
const FIG = {{{data_json}}};
(function () {
  const host = document.getElementById("figure");
  const tip = document.getElementById("tooltip");
  function inside(r, x, y) {
    if (r.shape === "rect") return x >= r.x && x <= r.x + r.w && y >= r.y && y <= r.y + r.h;
    const dx = x - r.cx, dy = y - r.cy, d = Math.sqrt(dx * dx + dy * dy);
    if (r.shape === "circle") return d <= r.r;
    if (d < r.r0 || d > r.r1) return false;
    const a = Math.atan2(dy, dx) * 180 / Math.PI;
    const lo = r.sweep < 0 ? r.start + r.sweep : r.start;
    const span = Math.abs(r.sweep);
    return (((a - lo) % 360) + 360) % 360 <= span;
  }
  function show(text, e) {
    tip.textContent = "";
    text.split("<br>").forEach(function (line, i) {
      if (i > 0) tip.appendChild(document.createElement("br"));
      tip.appendChild(document.createTextNode(line.replace(/<\/?b>/g, "")));
    });
    tip.style.left = (e.clientX + 12) + "px";
    tip.style.top = (e.clientY + 12) + "px";
    tip.style.display = "block";
  }
  host.addEventListener("mousemove", function (e) {
    const svg = host.querySelector("svg");
    if (!svg) return;
    const box = svg.getBoundingClientRect();
    const s = FIG.width / box.width;
    const x = (e.clientX - box.left) * s, y = (e.clientY - box.top) * s;
    let found = null;
    for (let i = FIG.regions.length - 1; i >= 0; i--) {
      if (inside(FIG.regions[i], x, y)) { found = FIG.regions[i]; break; }
    }
    if (found) show(found.text, e); else tip.style.display = "none";
  });
  host.addEventListener("mouseleave", function () { tip.style.display = "none"; });
})();
</script>
</body>
</html>
"#;

/// Tabular view of one panel's data.
#[derive(Clone, Debug, Serialize, PartialEq)]
pub struct PanelData {
    pub title: Option<String>,
    pub columns: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl PanelData {
    pub fn from_panel(panel: &Panel) -> Self {
        let title = panel.title().map(str::to_string);
        match panel {
            Panel::Chart(chart) => {
                let scatter: Vec<_> = chart.series.iter().filter(|s| s.kind == SeriesKind::Scatter).collect();
                let categorical: Vec<_> = chart.series.iter().filter(|s| s.kind.is_categorical()).collect();
                if let Some((_, labels)) = chart.categories() {
                    let mut columns = vec![String::from("Category")];
                    columns.extend(categorical.iter().enumerate().map(|(i, s)| {
                        if s.name.is_empty() { format!("Series {}", i + 1) } else { s.name.clone() }
                    }));
                    let rows = labels
                        .iter()
                        .enumerate()
                        .map(|(i, l)| {
                            let mut row = vec![l.replace('\n', " ")];
                            row.extend(categorical.iter().map(|s| s.data.values().get(i).map(|v| plain(*v)).unwrap_or_default()));
                            row
                        })
                        .collect();
                    Self { title, columns, rows }
                } else {
                    let columns = ["Series", "Name", chart.x_axis.label.as_str(), chart.y_axis.label.as_str(), "Size"]
                        .iter()
                        .map(|s| s.to_string())
                        .collect();
                    let rows = scatter
                        .iter()
                        .flat_map(|s| {
                            s.data_xy.iter().enumerate().map(move |(i, &(x, y))| {
                                vec![
                                    s.name.clone(),
                                    s.point_labels.get(i).cloned().unwrap_or_default(),
                                    chart.x_axis.format.format_at(i, x),
                                    plain(y),
                                    s.sizes.get(i).map(|v| plain(*v)).unwrap_or_default(),
                                ]
                            })
                        })
                        .collect();
                    Self { title, columns, rows }
                }
            }
            Panel::Pie(pie) => {
                let rows = pie
                    .wedges()
                    .iter()
                    .enumerate()
                    .map(|(i, w)| vec![pie.labels[i].replace('\n', " "), plain(pie.values[i]), format!("{:.1}%", w.fraction * 100.0)])
                    .collect();
                Self { title, columns: vec!["Label".into(), "Value".into(), "Share".into()], rows }
            }
            Panel::Sunburst(sb) => {
                let rows = sb.nodes.iter().map(|n| vec![n.label.clone(), n.parent.clone(), plain(n.value)]).collect();
                Self { title, columns: vec!["Label".into(), "Parent".into(), "Value".into()], rows }
            }
            Panel::Table(t) => Self { title, columns: t.header.clone(), rows: t.rows.clone() },
        }
    }
}

/// JSON safe to embed inside a `<script>` element.
pub fn script_json<T: Serialize>(value: &T) -> Result<String> {
    let s = serde_json::to_string(value).map_err(|e| ChartError::Template(e.to_string()))?;
    Ok(s.replace("</", "<\\/"))
}

/// Inline-ready SVG: XML prolog removed and a viewBox added so it scales.
fn inline_svg(svg: &str, width: f32, height: f32) -> String {
    let body = match svg.find("<svg") {
        Some(i) => &svg[i..],
        None => svg,
    };
    if body.contains("viewBox") {
        body.to_string()
    } else {
        body.replacen("<svg", &format!("<svg viewBox=\"0 0 {} {}\"", width, height), 1)
    }
}

impl Figure {
    /// Title used for the HTML document.
    pub fn document_title(&self) -> String {
        self.suptitle
            .clone()
            .or_else(|| self.panels().find_map(|p| p.title().map(str::to_string)))
            .unwrap_or_else(|| "Chart".to_string())
            .replace('\n', " ")
    }

    pub fn render_to_html_string(&self, opts: &RenderOptions) -> Result<String> {
        let (svg, regions) = self.render_svg(opts)?;
        let svg = String::from_utf8_lossy(&svg);
        let (w, h) = self.size_points();
        let panels: Vec<PanelData> = self.panels().map(PanelData::from_panel).collect();

        #[derive(Serialize)]
        struct FigData<'a> {
            width: f32,
            height: f32,
            regions: &'a [HitRegion],
        }
        let data_json = script_json(&FigData { width: w, height: h, regions: &regions })?;

        let mut hb = Handlebars::new();
        hb.set_strict_mode(false);
        hb.register_template_string("page", PAGE_TEMPLATE)
            .map_err(|e| ChartError::Template(e.to_string()))?;
        let ctx = json!({
            "title": self.document_title(),
            "background": crate::theme::to_hex(opts.theme.background),
            "accent": crate::theme::to_hex(opts.theme.palette.primary),
            "width": (w * 96.0 / 72.0).round(),
            "svg": inline_svg(&svg, w, h),
            "panels": panels,
            "data_json": data_json,
        });
        let html = hb.render("page", &ctx).map_err(|e| ChartError::Template(e.to_string()))?;
        tracing::debug!(regions = regions.len(), bytes = html.len(), "rendered html document");
        Ok(html)
    }

    /// Write a standalone interactive HTML document, creating missing parent directories.
    pub fn render_to_html(&self, opts: &RenderOptions, path: impl AsRef<Path>) -> Result<()> {
        let html = self.render_to_html_string(opts)?;
        write_file(path.as_ref(), html.as_bytes())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn script_json_escapes_closing_tags() {
        let s = script_json(&json!({ "text": "</script><b>" })).unwrap();
        assert!(!s.contains("</"));
        assert!(s.contains("<\\/script>"));
    }

    #[test]
    fn inline_svg_strips_prolog_and_adds_viewbox() {
        let out = inline_svg("<?xml version=\"1.0\"?><svg width=\"10\" height=\"5\"></svg>", 10.0, 5.0);
        assert!(out.starts_with("<svg viewBox=\"0 0 10 5\""));
    }

    #[test]
    fn table_panel_data_is_copied() {
        let t = crate::table::Table::new(["Year", "Layoffs"]).with_row(["2025", "122,549"]);
        let d = PanelData::from_panel(&Panel::Table(t));
        assert_eq!(d.columns, vec!["Year", "Layoffs"]);
        assert_eq!(d.rows, vec![vec!["2025".to_string(), "122,549".to_string()]]);
    }
}
