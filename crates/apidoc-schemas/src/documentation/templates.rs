//! Markup templates for documentation generation
//!
//! Copyright (c) 2025 Apidoc Team
//! Licensed under the Apache-2.0 license

use pulldown_cmark::{html, Event, Options, Parser};

/// Building blocks the generator assembles a document from
///
/// Every method returns a finished fragment; text arguments are raw and each
/// implementation escapes them for its own markup. Descriptions passed to
/// `header` and `paragraph` are GitHub-flavored Markdown.
pub trait Template {
    fn document_start(&self, title: &str) -> String;

    fn document_end(&self) -> String;

    fn header(&self, title: &str, version: &str, description: &str) -> String;

    fn heading(&self, level: usize, text: &str, anchor: &str) -> String;

    fn paragraph(&self, text: &str) -> String;

    /// Labelled facts, rendered as a short list
    fn facts(&self, entries: &[(&str, String)]) -> String;

    /// Nested links to `(title, anchor, level)` sections
    fn table_of_contents(&self, sections: &[(String, String, usize)]) -> String;

    fn table(&self, headers: &[&str], rows: &[Vec<String>]) -> String;

    fn code_block(&self, language: &str, code: &str) -> String;

    fn badge(&self, text: &str) -> String;

    fn footer(&self, generated_at: Option<&str>) -> String;
}

/// Markdown output
#[derive(Debug, Clone, Copy, Default)]
pub struct MarkdownTemplate;

/// Standalone HTML page output
#[derive(Debug, Clone, Copy, Default)]
pub struct HtmlTemplate;

const STYLE: &str = "body{font-family:Helvetica,Arial,sans-serif;margin:2em;color:#222}\
table{border-collapse:collapse;margin:1em 0;width:100%}\
th,td{border:1px solid #ccc;padding:4px 8px;text-align:left;vertical-align:top}\
th{background:#f4f4f4}\
pre{background:#f6f8fa;padding:1em;overflow:auto}\
.badge{background:#c0392b;color:#fff;border-radius:3px;padding:1px 6px;font-size:0.8em}\
.footer{margin-top:3em;color:#888;font-size:0.8em}";

impl Template for MarkdownTemplate {
    fn document_start(&self, _title: &str) -> String {
        String::new()
    }

    fn document_end(&self) -> String {
        String::new()
    }

    fn header(&self, title: &str, version: &str, description: &str) -> String {
        let mut result = format!("# {}\n\n", title);
        if !version.is_empty() {
            result.push_str(&format!("**Version:** `{}`\n\n", version));
        }
        if !description.is_empty() {
            result.push_str(&format!("{}\n\n", description));
        }
        result.push_str("---\n\n");
        result
    }

    fn heading(&self, level: usize, text: &str, anchor: &str) -> String {
        format!(
            "{} <a id=\"{}\"></a>{}\n\n",
            "#".repeat(level.clamp(1, 6)),
            anchor,
            text
        )
    }

    fn paragraph(&self, text: &str) -> String {
        format!("{}\n\n", text)
    }

    fn facts(&self, entries: &[(&str, String)]) -> String {
        let mut result = String::new();
        for (label, value) in entries {
            result.push_str(&format!("- **{}:** {}\n", label, value));
        }
        result.push('\n');
        result
    }

    fn table_of_contents(&self, sections: &[(String, String, usize)]) -> String {
        let mut result = String::from("## Table of Contents\n\n");
        for (title, anchor, level) in sections {
            let indent = "  ".repeat(level.saturating_sub(1));
            result.push_str(&format!("{}- [{}](#{})\n", indent, title, anchor));
        }
        result.push('\n');
        result
    }

    fn table(&self, headers: &[&str], rows: &[Vec<String>]) -> String {
        let mut result = format!("| {} |\n", headers.join(" | "));
        result.push_str(&format!("|{}\n", " --- |".repeat(headers.len())));
        for row in rows {
            let cells: Vec<String> = row.iter().map(|cell| markdown_cell(cell)).collect();
            result.push_str(&format!("| {} |\n", cells.join(" | ")));
        }
        result.push('\n');
        result
    }

    fn code_block(&self, language: &str, code: &str) -> String {
        format!("```{}\n{}\n```\n\n", language, code)
    }

    fn badge(&self, text: &str) -> String {
        format!("**[{}]**\n\n", text)
    }

    fn footer(&self, generated_at: Option<&str>) -> String {
        match generated_at {
            Some(at) => format!("---\n\n*Generated by apidoc at {}*\n", at),
            None => "---\n\n*Generated by apidoc*\n".to_string(),
        }
    }
}

impl Template for HtmlTemplate {
    fn document_start(&self, title: &str) -> String {
        format!(
            "<!DOCTYPE html>\n<html>\n<head>\n<meta charset=\"utf-8\">\n<title>{}</title>\n<style>{}</style>\n</head>\n<body>\n",
            escape_html(title),
            STYLE
        )
    }

    fn document_end(&self) -> String {
        "</body>\n</html>\n".to_string()
    }

    fn header(&self, title: &str, version: &str, description: &str) -> String {
        let mut result = format!("<h1>{}</h1>\n", escape_html(title));
        if !version.is_empty() {
            result.push_str(&format!(
                "<p><strong>Version:</strong> <code>{}</code></p>\n",
                escape_html(version)
            ));
        }
        if !description.is_empty() {
            result.push_str(&self.paragraph(description));
        }
        result.push_str("<hr>\n");
        result
    }

    fn heading(&self, level: usize, text: &str, anchor: &str) -> String {
        let level = level.clamp(1, 6);
        format!(
            "<h{level} id=\"{}\">{}</h{level}>\n",
            escape_html(anchor),
            escape_html(text)
        )
    }

    fn paragraph(&self, text: &str) -> String {
        markdown_to_html(text)
    }

    fn facts(&self, entries: &[(&str, String)]) -> String {
        let mut result = String::from("<ul>\n");
        for (label, value) in entries {
            result.push_str(&format!(
                "<li><strong>{}:</strong> {}</li>\n",
                escape_html(label),
                escape_html(value)
            ));
        }
        result.push_str("</ul>\n");
        result
    }

    fn table_of_contents(&self, sections: &[(String, String, usize)]) -> String {
        let mut result = String::from("<h2>Table of Contents</h2>\n<ul>\n");
        for (title, anchor, level) in sections {
            result.push_str(&format!(
                "<li class=\"toc-{}\"><a href=\"#{}\">{}</a></li>\n",
                level,
                escape_html(anchor),
                escape_html(title)
            ));
        }
        result.push_str("</ul>\n");
        result
    }

    fn table(&self, headers: &[&str], rows: &[Vec<String>]) -> String {
        let mut result = String::from("<table>\n<tr>");
        for header in headers {
            result.push_str(&format!("<th>{}</th>", escape_html(header)));
        }
        result.push_str("</tr>\n");
        for row in rows {
            result.push_str("<tr>");
            for cell in row {
                result.push_str(&format!("<td>{}</td>", escape_html(cell)));
            }
            result.push_str("</tr>\n");
        }
        result.push_str("</table>\n");
        result
    }

    fn code_block(&self, language: &str, code: &str) -> String {
        format!(
            "<pre><code class=\"language-{}\">{}</code></pre>\n",
            language,
            escape_html(code)
        )
    }

    fn badge(&self, text: &str) -> String {
        format!("<p><span class=\"badge\">{}</span></p>\n", escape_html(text))
    }

    fn footer(&self, generated_at: Option<&str>) -> String {
        let text = match generated_at {
            Some(at) => format!("Generated by apidoc at {}", at),
            None => "Generated by apidoc".to_string(),
        };
        format!("<div class=\"footer\">{}</div>\n", escape_html(&text))
    }
}

/// Render a Markdown description as HTML
///
/// Raw HTML inside the text is escaped and shown literally.
pub fn markdown_to_html(text: &str) -> String {
    let options =
        Options::ENABLE_TABLES | Options::ENABLE_STRIKETHROUGH | Options::ENABLE_TASKLISTS;
    let events = Parser::new_ext(text, options).map(|event| match event {
        Event::Html(raw) | Event::InlineHtml(raw) => Event::Text(raw),
        other => other,
    });
    let mut rendered = String::with_capacity(text.len() * 3 / 2);
    html::push_html(&mut rendered, events);
    rendered
}

/// Escape text for HTML element content and attribute values
pub fn escape_html(text: &str) -> String {
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

/// Link target for a heading, e.g. `POST /pets/{id}` becomes `post-pets-id`
pub fn anchor(text: &str) -> String {
    let mut slug = String::with_capacity(text.len());
    for c in text.chars().flat_map(char::to_lowercase) {
        if c.is_alphanumeric() {
            slug.push(c);
        } else if !slug.is_empty() && !slug.ends_with('-') {
            slug.push('-');
        }
    }
    while slug.ends_with('-') {
        slug.pop();
    }
    slug
}

fn markdown_cell(text: &str) -> String {
    text.replace('|', "\\|").replace('\n', "<br>")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_html() {
        assert_eq!(
            escape_html("<a href=\"x\">Tom & Jerry's</a>"),
            "&lt;a href=&quot;x&quot;&gt;Tom &amp; Jerry&#39;s&lt;/a&gt;"
        );
        assert_eq!(escape_html("plain"), "plain");
    }

    #[test]
    fn test_anchor() {
        assert_eq!(anchor("POST /pets/{id}"), "post-pets-id");
        assert_eq!(anchor("Other"), "other");
        assert_eq!(anchor("  --Pet Store--  "), "pet-store");
    }

    #[test]
    fn test_markdown_table() {
        let table = MarkdownTemplate.table(
            &["Name", "Type"],
            &[vec!["a|b".to_string(), "string".to_string()]],
        );
        assert_eq!(
            table,
            "| Name | Type |\n| --- | --- |\n| a\\|b | string |\n\n"
        );
    }

    #[test]
    fn test_markdown_table_of_contents() {
        let toc = MarkdownTemplate.table_of_contents(&[
            ("pets".to_string(), "pets".to_string(), 1),
            ("GET /pets".to_string(), "get-pets".to_string(), 2),
        ]);
        assert!(toc.contains("- [pets](#pets)\n"));
        assert!(toc.contains("  - [GET /pets](#get-pets)\n"));
    }

    #[test]
    fn test_html_fragments_escape_text() {
        let html = HtmlTemplate;
        assert_eq!(
            html.heading(2, "<pets>", "pets"),
            "<h2 id=\"pets\">&lt;pets&gt;</h2>\n"
        );
        assert_eq!(
            html.code_block("json", "{\"a\": \"<b>\"}"),
            "<pre><code class=\"language-json\">{&quot;a&quot;: &quot;&lt;b&gt;&quot;}</code></pre>\n"
        );
        assert!(html.document_start("A & B").contains("<title>A &amp; B</title>"));
        assert_eq!(html.heading(9, "x", "x"), "<h6 id=\"x\">x</h6>\n");
    }

    #[test]
    fn test_html_paragraph_renders_markdown() {
        let html = HtmlTemplate;
        assert_eq!(
            html.paragraph("Use **bearer** tokens.\n\n- one\n- two"),
            "<p>Use <strong>bearer</strong> tokens.</p>\n<ul>\n<li>one</li>\n<li>two</li>\n</ul>\n"
        );
        assert_eq!(
            html.paragraph("Returns <b>all</b> pets"),
            "<p>Returns &lt;b&gt;all&lt;/b&gt; pets</p>\n"
        );
        assert_eq!(
            html.table(&["Description"], &[vec!["**kept**".to_string()]]),
            "<table>\n<tr><th>Description</th></tr>\n<tr><td>**kept**</td></tr>\n</table>\n"
        );
    }

    #[test]
    fn test_footer() {
        assert_eq!(MarkdownTemplate.footer(None), "---\n\n*Generated by apidoc*\n");
        assert!(HtmlTemplate
            .footer(Some("2025-01-01"))
            .contains("Generated by apidoc at 2025-01-01"));
    }
}
