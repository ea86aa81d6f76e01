// File: crates/engagement-core/src/page.rs
// Summary: HTML page with one mount element per chart holding its inline SVG.

/// Build an HTML document; each `(mount, svg)` becomes `<div id="mount">svg</div>`.
pub fn render_page(title: &str, charts: &[(&str, &str)]) -> String {
    let mut body = String::new();
    for (mount, svg) in charts {
        body.push_str(&format!("  <div id=\"{}\">\n{}\n  </div>\n", escape(mount), strip_prolog(svg).trim()));
    }
    format!(
        "<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n  <meta charset=\"utf-8\">\n  <title>{}</title>\n</head>\n<body>\n{}</body>\n</html>\n",
        escape(title),
        body
    )
}

/// Drop a leading `<?xml …?>` declaration, which is invalid inside HTML.
pub fn strip_prolog(svg: &str) -> &str {
    let s = svg.trim_start();
    if s.starts_with("<?xml") {
        if let Some(end) = s.find("?>") {
            return &s[end + 2..];
        }
    }
    s
}

fn escape(s: &str) -> String {
    s.replace('&', "&amp;").replace('<', "&lt;").replace('>', "&gt;").replace('"', "&quot;")
}
