//! Case-insensitive tag scanning for the observation page.
//!
//! Only flat, non-nested elements are handled; that is all the page layout needs.

/// Lowercases ASCII only, so byte offsets stay aligned with the input.
pub(crate) fn to_lower(s: &str) -> String {
    s.chars().map(|c| c.to_ascii_lowercase()).collect()
}

/// Byte range of the next `<tag ...>...</tag>` block starting at or after `from`.
///
/// `lc` must be `to_lower(s)`.
pub(crate) fn next_element(s: &str, lc: &str, tag: &str, from: usize) -> Option<(usize, usize)> {
    let open = format!("<{tag}");
    let close = format!("</{tag}>");
    let mut at = from;
    loop {
        let start = lc.get(at..)?.find(&open)? + at;
        let name_end = start + open.len();
        match lc[name_end..].chars().next() {
            Some(c) if c == '>' || c.is_ascii_whitespace() => {
                let open_end = s[start..].find('>')? + start + 1;
                let end = lc[open_end..].find(&close)? + open_end + close.len();
                return Some((start, end));
            }
            // `<track` when looking for `<tr`, etc.
            Some(_) => at = name_end,
            None => return None,
        }
    }
}

/// Every `<tag>` block in `s`, in document order.
pub(crate) fn elements<'a>(s: &'a str, tag: &str) -> Vec<&'a str> {
    let lc = to_lower(s);
    let mut out = Vec::new();
    let mut from = 0;
    while let Some((start, end)) = next_element(s, &lc, tag, from) {
        out.push(&s[start..end]);
        from = end;
    }
    out
}

/// First `<tag>` block in `s`.
pub(crate) fn first_element<'a>(s: &'a str, tag: &str) -> Option<&'a str> {
    let lc = to_lower(s);
    next_element(s, &lc, tag, 0).map(|(start, end)| &s[start..end])
}

/// The opening tag of a block, `<` through `>`.
pub(crate) fn open_tag(block: &str) -> &str {
    match block.find('>') {
        Some(end) => &block[..=end],
        None => block,
    }
}

/// Markup between the opening tag and the closing tag of a block.
pub(crate) fn inner(block: &str) -> &str {
    if let (Some(oe), Some(cs)) = (block.find('>'), block.rfind('<')) {
        if cs > oe {
            return &block[oe + 1..cs];
        }
    }
    ""
}

/// Value of attribute `name` in an opening tag. Quoted or bare values.
pub(crate) fn attr<'a>(open_tag: &'a str, name: &str) -> Option<&'a str> {
    let lc = to_lower(open_tag);
    let needle = format!("{}=", name.to_ascii_lowercase());
    let mut from = 0;
    while let Some(rel) = lc[from..].find(&needle) {
        let pos = from + rel;
        from = pos + needle.len();
        if !open_tag[..pos].ends_with(|c: char| c.is_ascii_whitespace()) {
            continue;
        }
        let rest = &open_tag[from..];
        return match rest.chars().next() {
            Some(q @ ('"' | '\'')) => {
                let body = &rest[1..];
                body.find(q).map(|end| &body[..end])
            }
            _ => {
                let end = rest
                    .find(|c: char| c.is_ascii_whitespace() || c == '>')
                    .unwrap_or(rest.len());
                Some(&rest[..end])
            }
        };
    }
    None
}

pub(crate) fn has_class(open_tag: &str, class: &str) -> bool {
    attr(open_tag, "class")
        .is_some_and(|v| v.split_ascii_whitespace().any(|c| c.eq_ignore_ascii_case(class)))
}

/// Visible text of a fragment: tags dropped, common entities decoded, whitespace collapsed.
pub(crate) fn text(fragment: &str) -> String {
    let mut out = String::with_capacity(fragment.len());
    let mut in_tag = false;
    for ch in fragment.chars() {
        match ch {
            '<' => in_tag = true,
            '>' => in_tag = false,
            _ if !in_tag => out.push(ch),
            _ => {}
        }
    }
    let decoded = out
        .replace("&nbsp;", " ")
        .replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&quot;", "\"")
        .replace("&#39;", "'")
        .replace("&amp;", "&");
    decoded.split_whitespace().collect::<Vec<_>>().join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn elements_are_found_case_insensitively_and_in_order() {
        let html = "<TR class=a><td>1</td></TR><track></track><tr><TD>2</TD></tr>";
        let rows = elements(html, "tr");
        assert_eq!(rows.len(), 2);
        assert_eq!(elements(rows[1], "td"), vec!["<TD>2</TD>"]);
    }

    #[test]
    fn attr_reads_quoted_and_bare_values() {
        assert_eq!(attr(r#"<tr class="rowleftcolumn odd">"#, "class"), Some("rowleftcolumn odd"));
        assert_eq!(attr("<tr CLASS=rowleftcolumn>", "class"), Some("rowleftcolumn"));
        assert_eq!(attr(r#"<tr data-class="x">"#, "class"), None);
        assert!(has_class(r#"<tr class="odd rowleftcolumn">"#, "rowleftcolumn"));
        assert!(!has_class("<tr>", "rowleftcolumn"));
    }

    #[test]
    fn text_strips_markup_and_entities() {
        assert_eq!(text("<a href=\"x\">  Sydney&nbsp;-\n Observatory Hill </a>"), "Sydney - Observatory Hill");
        assert_eq!(text("Fort Denison &amp; Co"), "Fort Denison & Co");
    }

    #[test]
    fn inner_and_open_tag_split_a_block() {
        let block = "<td headers=\"t\">22.5</td>";
        assert_eq!(open_tag(block), "<td headers=\"t\">");
        assert_eq!(inner(block), "22.5");
        assert_eq!(inner("<td></td>"), "");
    }
}
