//! HTML pages for the web front-end
//!
//! Small standalone pages with embedded styles. Anything that came from the
//! user is escaped before it is written into the markup.

use crate::classifier::Classification;
use crate::model::LanguageLabel;

/// Landing page: trained-language count and the query form.
pub fn render_index(language_count: usize) -> String {
    let mut html = String::new();
    html.push_str(&render_head("Language identification"));
    html.push_str("<body>\n<div class=\"container\">\n");
    html.push_str(&format!(
        r#"<h1>Which language is this?</h1>
<p class="info">Trained on <strong>{}</strong> language{}.</p>
"#,
        language_count,
        if language_count == 1 { "" } else { "s" }
    ));
    html.push_str(&render_form(""));
    html.push_str("</div>\n</body>\n</html>");
    html
}

/// Result page for one query.
pub fn render_result(query: &str, result: &Classification) -> String {
    let mut html = String::new();
    html.push_str(&render_head("Classification result"));
    html.push_str("<body>\n<div class=\"container\">\n");

    match result {
        Classification::Language { label } => {
            html.push_str(&format!(
                r#"<h1>Result</h1>
<p class="result">This text is written in <strong>{}</strong>.</p>
"#,
                html_escape(label.as_str())
            ));
        }
        Classification::Tie { candidates } => {
            html.push_str(
                r#"<h1>There is a tie</h1>
<p class="result">The possible languages are:</p>
<ul class="candidates">
"#,
            );
            for label in candidates {
                html.push_str(&format!("    <li>{}</li>\n", html_escape(label.as_str())));
            }
            html.push_str("</ul>\n<p class=\"hint\">For a more accurate result, please input more text.</p>\n");
        }
    }

    html.push_str(&render_form(query));
    html.push_str("<p><a href=\"/\">Back</a></p>\n");
    html.push_str("</div>\n</body>\n</html>");
    html
}

/// Error page with a short message.
pub fn render_error(title: &str, message: &str) -> String {
    let mut html = String::new();
    html.push_str(&render_head(title));
    html.push_str(&format!(
        r#"<body>
<div class="container">
<h1>{}</h1>
<p class="error">{}</p>
<p><a href="/">Back</a></p>
</div>
</body>
</html>"#,
        html_escape(title),
        html_escape(message)
    ));
    html
}

/// Plain-text tie notice, shared with the CLI.
pub fn tie_notice(candidates: &[LanguageLabel]) -> String {
    let names: Vec<&str> = candidates.iter().map(LanguageLabel::as_str).collect();
    format!(
        "There is a tie. The possible languages are: {}\nFor a more accurate result, please input more text",
        names.join(", ")
    )
}

fn render_head(title: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>{}</title>
    <style>
{CSS}
    </style>
</head>
"#,
        html_escape(title)
    )
}

fn render_form(query: &str) -> String {
    format!(
        r#"<form action="/classify" method="get">
    <textarea name="q" rows="6" placeholder="Type or paste some text">{}</textarea>
    <button type="submit">Identify language</button>
</form>
"#,
        html_escape(query)
    )
}

fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

const CSS: &str = r#"
body {
    font-family: -apple-system, BlinkMacSystemFont, "Segoe UI", Roboto, sans-serif;
    background: #f8fafc;
    color: #1e293b;
    margin: 0;
}
.container {
    max-width: 720px;
    margin: 3rem auto;
    padding: 2rem;
    background: #fff;
    border-radius: 8px;
    box-shadow: 0 1px 3px rgba(0, 0, 0, 0.1);
}
textarea {
    width: 100%;
    box-sizing: border-box;
    font-size: 1rem;
    padding: 0.5rem;
}
button {
    margin-top: 0.75rem;
    padding: 0.5rem 1.25rem;
    background: #6366f1;
    color: #fff;
    border: none;
    border-radius: 4px;
    cursor: pointer;
}
.result strong { color: #6366f1; }
.hint { color: #64748b; }
.error { color: #dc2626; }
"#;
