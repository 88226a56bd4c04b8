//! Markdown → HTML for assistant replies.
//!
//! Supports a fixed subset via sequential substitutions over escaped text:
//! headers, bold-italic, bold, italic, links, inline code, `- ` list items,
//! paragraph and line breaks. Escaping runs first, so the only tags in the
//! output are the ones produced here. Links only render for http(s),
//! mailto and relative targets; any other link stays as literal text.
//!
//! Emphasis is matched per line and non-greedily; nested or overlapping
//! markers come out however the fixed rule order leaves them.

use once_cell::sync::Lazy;
use regex::{Captures, Regex};

enum Replacement {
    Template(&'static str),
    Link,
}

struct Rule {
    pattern: Regex,
    replacement: Replacement,
}

impl Rule {
    fn new(pattern: &str, template: &'static str) -> Self {
        Self::with(pattern, Replacement::Template(template))
    }

    fn with(pattern: &str, replacement: Replacement) -> Self {
        Self {
            pattern: Regex::new(pattern).expect("markdown rule pattern"),
            replacement,
        }
    }

    fn apply(&self, html: &str) -> String {
        match self.replacement {
            Replacement::Template(template) => self.pattern.replace_all(html, template),
            Replacement::Link => self.pattern.replace_all(html, link_html),
        }
        .into_owned()
    }
}

/// Order matters: `***` before `**` before `*`.
static INLINE_RULES: Lazy<Vec<Rule>> = Lazy::new(|| {
    vec![
        Rule::new(r"(?m)^### (.+)$", "<h5>${1}</h5>"),
        Rule::new(r"(?m)^## (.+)$", "<h4>${1}</h4>"),
        Rule::new(r"(?m)^# (.+)$", "<h3>${1}</h3>"),
        Rule::new(r"\*\*\*(.+?)\*\*\*", "<strong><em>${1}</em></strong>"),
        Rule::new(r"\*\*(.+?)\*\*", "<strong>${1}</strong>"),
        Rule::new(r"\*(.+?)\*", "<em>${1}</em>"),
        Rule::with(r#"\[([^\]]+)\]\(([^)\s"]+)\)"#, Replacement::Link),
        Rule::new(r"`([^`]+)`", "<code>${1}</code>"),
        Rule::new(r"(?m)^- (.+)$", "<li>${1}</li>"),
    ]
});

static PARAGRAPH_BREAK: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\n{2,}").expect("paragraph pattern"));

static LIST_TOKEN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"<li>.*?</li>|<br>").expect("list token pattern"));

/// Schemes a rendered link may use. Scheme-less (relative) targets are allowed too.
const LINK_SCHEMES: [&str; 3] = ["http://", "https://", "mailto:"];

const BR: &str = "<br>";

/// Render assistant markdown to an HTML fragment wrapped in `<p>`.
/// Empty or absent input renders to the empty string.
pub fn render_markdown<'a, T: Into<Option<&'a str>>>(text: T) -> String {
    let text = match text.into() {
        Some(t) if !t.is_empty() => t,
        _ => return String::new(),
    };

    let mut html = escape_html(&text.replace("\r\n", "\n"));
    for rule in INLINE_RULES.iter() {
        html = rule.apply(&html);
    }

    html = PARAGRAPH_BREAK.replace_all(&html, "</p><p>").into_owned();
    html = html.replace('\n', BR);

    format!("<p>{}</p>", group_list_items(&html))
}

fn link_html(caps: &Captures) -> String {
    let (text, href) = (&caps[1], &caps[2]);
    if !is_allowed_href(href) {
        return caps[0].to_string();
    }
    format!(
        r#"<a href="{}" target="_blank" rel="noopener noreferrer">{}</a>"#,
        href, text
    )
}

/// http(s), mailto, or a target without any scheme.
fn is_allowed_href(href: &str) -> bool {
    let lower = href.to_ascii_lowercase();
    if LINK_SCHEMES.iter().any(|scheme| lower.starts_with(scheme)) {
        return true;
    }
    // A `:` before any path, query or fragment delimiter names a scheme.
    let head = href.split(['/', '?', '#']).next().unwrap_or_default();
    !head.contains(':')
}

/// Render a user's own message: escaped, newlines kept as `<br>`.
pub fn render_plain(text: &str) -> String {
    escape_html(&text.replace("\r\n", "\n")).replace('\n', BR)
}

/// Escape `&`, `<` and `>`.
pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            _ => out.push(c),
        }
    }
    out
}

/// Wrap each run of `<li>` items in one `<ul>`.
///
/// Scans `<li>…</li>` and `<br>` tokens left to right. Breaks inside a run are
/// dropped; whitespace-only text does not end a run; any other text does.
fn group_list_items(html: &str) -> String {
    let mut out = String::with_capacity(html.len() + 16);
    let mut in_list = false;
    let mut last = 0;

    for token in LIST_TOKEN.find_iter(html) {
        push_text(&mut out, &mut in_list, &html[last..token.start()]);
        last = token.end();

        if token.as_str() == BR {
            if !in_list {
                out.push_str(BR);
            }
            continue;
        }

        if !in_list {
            // The list is a block; the break that led into it is redundant.
            if out.ends_with(BR) {
                out.truncate(out.len() - BR.len());
            }
            out.push_str("<ul>");
            in_list = true;
        }
        out.push_str(token.as_str());
    }

    push_text(&mut out, &mut in_list, &html[last..]);
    if in_list {
        out.push_str("</ul>");
    }
    out
}

fn push_text(out: &mut String, in_list: &mut bool, text: &str) {
    if text.trim().is_empty() {
        if !*in_list {
            out.push_str(text);
        }
        return;
    }
    if *in_list {
        out.push_str("</ul>");
        *in_list = false;
    }
    out.push_str(text);
}
