//! HTML export: the Markdown report wrapped in a minimal styled document.
//!
//! The output is print-friendly and suitable for print-to-PDF by an
//! external renderer; this crate never renders PDF itself.

use super::markdown;
use crate::core::Report;
use crate::error::Result;
use pulldown_cmark::{html as md_html, Options, Parser};
use std::fs;
use std::path::Path;
use tracing::info;

const STYLE: &str = "body{font-family:sans-serif;margin:2em;line-height:1.6;max-width:800px}\n\
    table{border-collapse:collapse;width:100%;margin:1em 0} td,th{border:1px solid #ccc;padding:8px}\n\
    h2{margin-top:1.5em} code{background:#f4f4f4;padding:2px 6px}\n\
    @media print { body { margin:1em } }";

/// Render a report as a standalone HTML document.
pub fn render(report: &Report) -> String {
    let md = markdown::render(report);
    let mut options = Options::empty();
    options.insert(Options::ENABLE_TABLES);
    let parser = Parser::new_ext(&md, options);
    let mut body = String::new();
    md_html::push_html(&mut body, parser);

    format!(
        "<!DOCTYPE html><html><head><meta charset=\"utf-8\">\n\
         <title>Incident Report</title>\n\
         <style>{}</style></head><body>{}</body></html>",
        STYLE, body
    )
}

/// Write the Markdown rendering to `path`, creating parent directories.
pub fn export_markdown<P: AsRef<Path>>(report: &Report, path: P) -> Result<()> {
    let path = path.as_ref();
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, markdown::render(report))?;
    info!(path = %path.display(), "Exported Markdown report");
    Ok(())
}

/// Write the HTML rendering to `path`, creating parent directories.
pub fn export_html<P: AsRef<Path>>(report: &Report, path: P) -> Result<()> {
    let path = path.as_ref();
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, render(report))?;
    info!(path = %path.display(), "Exported HTML report");
    Ok(())
}
