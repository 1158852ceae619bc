use pulldown_cmark::html;
use pulldown_cmark::Event;
use pulldown_cmark::Options;
use pulldown_cmark::Parser;
use pulldown_cmark::Tag;

const IMAGE_WIDTH: u32 = 800;
const IMAGE_HEIGHT: u32 = 600;

/// Renders a markdown document to HTML, substituting every embedded image
/// with a fixed-dimension framed rendering. Source reference and alt text are
/// carried over verbatim; everything else renders as plain markdown.
pub fn render_doc(markdown: &str) -> String {
    let parser = Parser::new_ext(markdown, Options::empty());
    let mut events = Vec::new();
    let mut parser = parser.into_iter();
    while let Some(event) = parser.next() {
        match event {
            Event::Start(Tag::Image(_, src, _)) => {
                let alt = collect_alt_text(&mut parser);
                events.push(Event::Html(framed_image(&src, &alt).into()));
            }
            event => events.push(event),
        }
    }
    let mut out = String::new();
    html::push_html(&mut out, events.into_iter());
    out
}

/// The inline events between an image start and end tag are its alt text.
fn collect_alt_text<'a>(parser: &mut impl Iterator<Item = Event<'a>>) -> String {
    let mut alt = String::new();
    for event in parser {
        match event {
            Event::End(Tag::Image(..)) => break,
            Event::Text(text) | Event::Code(text) => alt.push_str(&text),
            Event::SoftBreak | Event::HardBreak => alt.push(' '),
            _ => {}
        }
    }
    alt
}

fn framed_image(src: &str, alt: &str) -> String {
    format!(
        r#"<img src="{}" alt="{}" width="{}" height="{}" class="w-full rounded-lg border border-gray-300 shadow" />"#,
        escape_attribute(src),
        escape_attribute(alt),
        IMAGE_WIDTH,
        IMAGE_HEIGHT
    )
}

fn escape_attribute(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            c => escaped.push(c),
        }
    }
    escaped
}

/// Tests

#[test]
fn image_gets_fixed_dimensions_and_frame() {
    let html = render_doc("![architecture overview](/docs/arch.png)");
    assert!(html.contains(r#"src="/docs/arch.png""#));
    assert!(html.contains(r#"alt="architecture overview""#));
    assert!(html.contains(r#"width="800""#));
    assert!(html.contains(r#"height="600""#));
    assert!(html.contains("border"));
}

#[test]
fn surrounding_markdown_is_untouched() {
    let html = render_doc("# Title\n\nSome *text* and ![logo](/logo.webp) inline.");
    assert!(html.contains("<h1>Title</h1>"));
    assert!(html.contains("<em>text</em>"));
    assert!(html.contains(r#"src="/logo.webp""#));
}

#[test]
fn document_without_images_passes_through() {
    let html = render_doc("plain paragraph");
    assert_eq!(html.trim(), "<p>plain paragraph</p>");
}

#[test]
fn alt_text_with_markup_is_flattened() {
    let html = render_doc("![a `code` alt](/x.png)");
    assert!(html.contains(r#"alt="a code alt""#));
}

#[test]
fn attribute_values_are_escaped() {
    let html = render_doc(r#"![ab"cd](/x.png?a=1&b=2)"#);
    assert!(html.contains(r#"alt="ab&quot;cd""#));
    assert!(html.contains("a=1&amp;b=2"));
}
