//! Minimal HTML scanning helpers for the documentation page.
//!
//! Deliberately not a full HTML parser. Tag detection is case-insensitive,
//! scanning stays local to known `<table>…</table>` blocks, and extraction
//! tolerates attribute noise and irregular whitespace. Everything here is a
//! pure function over `&str`, testable offline against captured fixtures.

/// Extract the inner content of the `index`-th `<table>` element in
/// document order (zero-based).
///
/// Returns `None` when the page has fewer tables than that. Nested tables
/// are not handled; the pages this targets do not nest them.
#[must_use]
pub fn extract_table(html: &str, index: usize) -> Option<&str> {
    let lower = html.to_ascii_lowercase();
    let mut cursor = 0;
    for i in 0..=index {
        let (_, content_start) = find_open(&lower, "table", cursor)?;
        let content_end = find_close(&lower, "table", content_start)?;
        if i == index {
            return Some(&html[content_start..content_end]);
        }
        cursor = content_end;
    }
    None
}

/// Split table content into the inner content of each `<tr>` element.
#[must_use]
pub fn table_rows(table: &str) -> Vec<&str> {
    tag_blocks(table, "tr")
}

/// Extract the trimmed text of each `<td>` cell in a row.
///
/// Header rows built from `<th>` cells yield an empty vector, which callers
/// use to skip them. Nested markup inside a cell is stripped and basic
/// entities are decoded.
#[must_use]
pub fn row_cells(row: &str) -> Vec<String> {
    tag_blocks(row, "td")
        .into_iter()
        .map(|cell| decode_entities(&strip_tags(cell)).trim().to_string())
        .collect()
}

/// Inner content of every non-overlapping `<tag>…</tag>` block, in order.
fn tag_blocks<'a>(html: &'a str, tag: &str) -> Vec<&'a str> {
    let lower = html.to_ascii_lowercase();
    let mut blocks = Vec::new();
    let mut cursor = 0;
    while let Some((_, content_start)) = find_open(&lower, tag, cursor) {
        let Some(content_end) = find_close(&lower, tag, content_start) else {
            break;
        };
        blocks.push(&html[content_start..content_end]);
        cursor = content_end;
    }
    blocks
}

/// Find an opening `<{tag}` at or after `from` in the lowercased document.
///
/// Returns (tag start, index just past the opening tag's `>`). Requires a
/// real tag boundary so `<td` does not match `<tdata`.
fn find_open(lower: &str, tag: &str, from: usize) -> Option<(usize, usize)> {
    let needle = format!("<{tag}");
    let mut pos = from;
    while let Some(rel) = lower.get(pos..)?.find(&needle) {
        let start = pos + rel;
        let after = start + needle.len();
        match lower.as_bytes().get(after) {
            Some(b'>' | b' ' | b'\t' | b'\n' | b'\r' | b'/') => {
                let close = lower.get(after..)?.find('>')? + after;
                return Some((start, close + 1));
            }
            _ => pos = start + 1,
        }
    }
    None
}

/// Find the start of the matching `</{tag}` at or after `from`.
fn find_close(lower: &str, tag: &str, from: usize) -> Option<usize> {
    let needle = format!("</{tag}");
    lower.get(from..)?.find(&needle).map(|rel| from + rel)
}

/// Remove every `<…>` tag, keeping the text between them.
fn strip_tags(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut in_tag = false;
    for c in s.chars() {
        match c {
            '<' => in_tag = true,
            '>' if in_tag => in_tag = false,
            c if !in_tag => out.push(c),
            _ => {}
        }
    }
    out
}

/// Decode the handful of entities that show up in the guide's table cells.
fn decode_entities(s: &str) -> String {
    s.replace("&nbsp;", " ")
        .replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&quot;", "\"")
        .replace("&#39;", "'")
        .replace("&apos;", "'")
        .replace("&amp;", "&")
}
