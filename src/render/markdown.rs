//! Markdown reference renderer.
//!
//! Emits a linked contents list followed by one two-column table per record.
//! Lines end with CRLF.

use crate::model::*;
use crate::parser::builder::LINE_BREAK;
use crate::render::Renderer;
use crate::slug;

const EOL: &str = "\r\n";

pub struct MarkdownRenderer;

impl Renderer for MarkdownRenderer {
    fn render(&self, docs: &[DocRecord]) -> String {
        let mut output = String::new();

        output.push_str("## Contents");
        output.push_str(EOL);
        for doc in docs {
            output.push_str(&slug::render_toc_item(&doc.name));
            output.push_str(EOL);
        }

        for doc in docs {
            output.push_str(&render_record(doc));
        }

        output
    }

    fn file_name(&self) -> &str {
        "doc-export.md"
    }
}

/// Render one record: separator, anchor and its table.
fn render_record(doc: &DocRecord) -> String {
    let mut lines: Vec<String> = vec![
        String::new(),
        "---".to_string(),
        String::new(),
        slug::render_anchor(&doc.name),
        String::new(),
        format!("| | {} |", doc.name),
        "| :--- | :--- |".to_string(),
        row("Description", &doc.desc),
    ];

    let syntax: String = doc
        .syntax
        .iter()
        .map(|s| format!("`{}`{}", s, LINE_BREAK))
        .collect();
    lines.push(row("Syntax", &syntax));

    if !doc.params.is_empty() {
        let params: String = doc.params.iter().map(render_param).collect();
        lines.push(row("Parameters", &params));
    }

    lines.push(row("Returns", &doc.returns));

    if !doc.references.is_empty() {
        let refs: String = doc
            .references
            .iter()
            .map(|r| format!("{}{}", r, LINE_BREAK))
            .collect();
        lines.push(row("References", &refs));
    }

    let mut out = lines.join(EOL);
    out.push_str(EOL);
    out
}

fn row(label: &str, cell: &str) -> String {
    format!("| {} | {} |", label, cell)
}

/// `float r` + `red channel` → `**r** - float: red channel<br>`
fn render_param(param: &Param) -> String {
    format!(
        "**{}** - {}: {}{}",
        param.name(),
        param.type_name(),
        param.description,
        LINE_BREAK
    )
}
