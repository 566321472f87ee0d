use scraper::{ElementRef, Node};

use super::normalize::{normalize, Line};

/// One piece of rendered page text, or a point where a new line must start.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RawFragment {
    Break,
    /// Text of a bold span; always a line of its own.
    Header(String),
    Text(String),
}

/// How a site's markup maps onto lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flattening {
    /// `<br>` and block elements break lines, `<strong>`/`<b>` become their own
    /// line, and text in between is joined with spaces.
    TagAware,
    /// Every text node is a line of its own.
    TextFlow,
}

/// Never rendered as page text.
const SKIPPED: &[&str] = &["head", "script", "style", "noscript", "template"];
const HEADERS: &[&str] = &["strong", "b"];
const BLOCKS: &[&str] = &[
    "p", "div", "li", "ul", "ol", "dl", "dt", "dd", "table", "tr", "td", "th", "h1", "h2", "h3",
    "h4", "h5", "h6", "section", "article", "header", "footer", "nav", "aside", "main",
    "blockquote",
];

/// Flattens everything under `element` into fragments, in document order.
pub fn flatten(element: ElementRef<'_>, style: Flattening) -> Vec<RawFragment> {
    let mut out = Vec::new();
    walk(element, style, &mut out);
    out
}

fn walk(element: ElementRef<'_>, style: Flattening, out: &mut Vec<RawFragment>) {
    for child in element.children() {
        match child.value() {
            Node::Text(text) => {
                let text = text.trim();
                if text.is_empty() {
                    continue;
                }
                out.push(RawFragment::Text(text.to_string()));
                if style == Flattening::TextFlow {
                    out.push(RawFragment::Break);
                }
            }
            Node::Element(el) => {
                let Some(child) = ElementRef::wrap(child) else {
                    continue;
                };
                let name = el.name();
                if SKIPPED.contains(&name) {
                    continue;
                }
                match style {
                    Flattening::TextFlow => walk(child, style, out),
                    Flattening::TagAware if name == "br" => out.push(RawFragment::Break),
                    Flattening::TagAware if HEADERS.contains(&name) => {
                        let text = child.text().collect::<Vec<_>>().join(" ");
                        out.push(RawFragment::Header(text));
                    }
                    Flattening::TagAware if BLOCKS.contains(&name) => {
                        out.push(RawFragment::Break);
                        walk(child, style, out);
                        out.push(RawFragment::Break);
                    }
                    Flattening::TagAware => walk(child, style, out),
                }
            }
            _ => {}
        }
    }
}

/// Joins text fragments into lines at every break and header, normalizing each.
pub fn into_lines(fragments: impl IntoIterator<Item = RawFragment>) -> Vec<Line> {
    let mut lines = Vec::new();
    let mut current = String::new();
    for fragment in fragments {
        match fragment {
            RawFragment::Text(text) => {
                if !current.is_empty() {
                    current.push(' ');
                }
                current.push_str(&text);
            }
            RawFragment::Break => flush(&mut current, &mut lines),
            RawFragment::Header(text) => {
                flush(&mut current, &mut lines);
                lines.extend(normalize(&text));
            }
        }
    }
    flush(&mut current, &mut lines);
    lines
}

fn flush(current: &mut String, lines: &mut Vec<Line>) {
    lines.extend(normalize(current));
    current.clear();
}

#[cfg(test)]
mod tests {
    use super::*;
    use scraper::Html;

    fn lines_of(html: &str, style: Flattening) -> Vec<String> {
        let doc = Html::parse_document(html);
        into_lines(flatten(doc.root_element(), style))
            .into_iter()
            .map(Line::into_string)
            .collect()
    }

    #[test]
    fn test_tag_aware_fragments() {
        let doc = Html::parse_fragment("<strong>MÅNDAG</strong><br>Pytt <i>i</i> panna<br>");
        let fragments = flatten(doc.root_element(), Flattening::TagAware);
        assert_eq!(
            fragments,
            vec![
                RawFragment::Header("MÅNDAG".to_string()),
                RawFragment::Break,
                RawFragment::Text("Pytt".to_string()),
                RawFragment::Text("i".to_string()),
                RawFragment::Text("panna".to_string()),
                RawFragment::Break,
            ]
        );
    }

    #[test]
    fn test_tag_aware_lines() {
        let html = r#"<div class="meny">Lunch v.42<strong>TISDAG</strong><br>
            Kåldolmar med&nbsp;gräddsås <br>. Vegetarisk lasagne 115:-<p>Fruktsallad</p></div>"#;
        assert_eq!(
            lines_of(html, Flattening::TagAware),
            vec![
                "Lunch v.42",
                "TISDAG",
                "Kåldolmar med gräddsås",
                "Vegetarisk lasagne",
                "Fruktsallad",
            ]
        );
    }

    #[test]
    fn test_text_flow_lines() {
        let html = "<html><head><title>Meny</title><style>p { color: red }</style></head>\
            <body><p>Måndag</p><p>Pannbiff <em>med</em> lök</p>\
            <script>var day = 'Tisdag';</script></body></html>";
        assert_eq!(
            lines_of(html, Flattening::TextFlow),
            vec!["Måndag", "Pannbiff", "med", "lök"]
        );
    }

    #[test]
    fn test_header_text_is_not_repeated() {
        let html = "<p><b>ONSDAG</b></p><p>Laxpaj</p>";
        assert_eq!(
            lines_of(html, Flattening::TagAware),
            vec!["ONSDAG", "Laxpaj"]
        );
    }
}
