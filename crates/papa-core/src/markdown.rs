//! The markdown subset used by day content: `**bold**` spans and blank-line
//! paragraph breaks. Nothing else is interpreted — single `*`, headings,
//! links, and stray HTML all pass through literally.

/// Render to HTML: each paragraph wrapped in `<p>`, bold pairs as
/// `<strong>`. Already-rendered input (starting with `<p>`) is returned
/// unchanged, so the transform is idempotent.
pub fn to_html(src: &str) -> String {
    if src.trim_start().starts_with("<p>") {
        return src.to_string();
    }
    paragraphs(src)
        .into_iter()
        .map(|p| format!("<p>{}</p>", bold_spans(&p)))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Render to plain text for terminal output: paragraphs separated by a blank
/// line, bold markers stripped.
pub fn to_plain(src: &str) -> String {
    paragraphs(src)
        .into_iter()
        .map(|p| strip_bold(&p))
        .collect::<Vec<_>>()
        .join("\n\n")
}

/// Split into paragraphs on blank lines; lines within a paragraph are joined
/// with a single space.
fn paragraphs(src: &str) -> Vec<String> {
    let mut out = Vec::new();
    let mut current: Vec<&str> = Vec::new();
    for line in src.lines() {
        let line = line.trim();
        if line.is_empty() {
            if !current.is_empty() {
                out.push(current.join(" "));
                current.clear();
            }
        } else {
            current.push(line);
        }
    }
    if !current.is_empty() {
        out.push(current.join(" "));
    }
    out
}

/// Replace `**...**` pairs with `<strong>` spans, consuming pairs left to
/// right. An unmatched `**` stays literal.
fn bold_spans(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut rest = text;
    while let Some(open) = rest.find("**") {
        let after = &rest[open + 2..];
        let Some(close) = after.find("**") else {
            break;
        };
        out.push_str(&rest[..open]);
        out.push_str("<strong>");
        out.push_str(&after[..close]);
        out.push_str("</strong>");
        rest = &after[close + 2..];
    }
    out.push_str(rest);
    out
}

/// Drop `**` pair markers, keeping the text; unmatched markers stay.
fn strip_bold(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut rest = text;
    while let Some(open) = rest.find("**") {
        let after = &rest[open + 2..];
        let Some(close) = after.find("**") else {
            break;
        };
        out.push_str(&rest[..open]);
        out.push_str(&after[..close]);
        rest = &after[close + 2..];
    }
    out.push_str(rest);
    out
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
