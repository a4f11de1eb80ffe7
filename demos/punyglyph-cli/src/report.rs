//! Static HTML page listing every variation as a clickable link, with
//! its punycode form underneath.
use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use tracing::debug;

use punyglyph::permutate::Variant;

const HEAD: &str = r#"<!DOCTYPE html>
<html>
<head>
    <meta charset="UTF-8">
    <title>Punycode Demo (Educational)</title>
    <style>
        body { font-family: Arial, sans-serif; padding: 20px; }
        .warning { color: red; font-weight: bold; }
        a { margin: 10px 0; display: block; }
        .punycode { color: #666; font-size: 0.8em; }
    </style>
</head>
<body>
    <div class="warning">WARNING: For educational purposes only. Do not use maliciously.</div>
"#;

const TAIL: &str = "</body>\n</html>\n";

/// Render the variations as an HTML document.
pub fn render(variants: &[Variant]) -> String {
    let mut html = String::from(HEAD);

    html.push_str(&format!(
        "    <h3>Visually similar links ({} variations):</h3>\n",
        variants.len()
    ));

    for variant in variants {
        let display = escape(&variant.display);
        let encoded = escape(&variant.encoded);

        html.push_str(&format!(
            "    <a href=\"http://{encoded}\" title=\"Punycode: {encoded}\">{display}<br><span class=\"punycode\">{encoded}</span></a>\n"
        ));
    }

    html.push_str(TAIL);
    html
}

/// Render the variations and write them to `path`.
pub fn write(path: &Path, variants: &[Variant]) -> Result<()> {
    fs::write(path, render(variants))
        .with_context(|| format!("unable to write report to {}", path.display()))?;

    debug!(path = %path.display(), variants = variants.len(), "wrote report");

    Ok(())
}

fn escape(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());

    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }

    escaped
}
