//! Title and leading-text extraction from parsed HTML
//!
//! The extraction is a single pre-order walk over the node tree produced by
//! `scraper`. Text is collected only while the walk is inside a `<body>`
//! subtree and never from `<script>` or `<style>` elements, and collection
//! stops globally once the word cap is reached.

use ego_tree::NodeRef;
use scraper::{Html, Node};

/// Default cap on the number of words extracted from a page body
pub const DEFAULT_MAX_WORDS: usize = 100;

/// Accumulator threaded through the document walk
struct Extraction {
    title: Option<String>,
    words: Vec<String>,
    max_words: usize,
}

impl Extraction {
    /// Append whitespace-separated words until the cap is reached.
    ///
    /// The cap spans node boundaries: once it is hit, text from every
    /// subsequent node is ignored.
    fn push_words(&mut self, text: &str) {
        for word in text.split_whitespace() {
            if self.words.len() == self.max_words {
                return;
            }
            self.words.push(word.to_owned());
        }
    }
}

/// Extract the title and the leading body text of a parsed document
///
/// The title comes from the first `<title>` element whose first child is a
/// text node; it is returned raw and untrimmed. A document without such an
/// element yields an empty title. The content is the first `max_words`
/// whitespace-separated words of text that sit inside a `<body>` subtree
/// and whose immediate parent is neither `<script>` nor `<style>`, joined
/// by single spaces.
///
/// This is a pure function of the tree: running it twice on the same
/// document produces identical output.
pub fn extract(document: &Html, max_words: usize) -> (String, String) {
    let mut state = Extraction {
        title: None,
        words: Vec::new(),
        max_words,
    };

    walk(document.tree.root(), false, &mut state);

    (state.title.unwrap_or_default(), state.words.join(" "))
}

/// Pre-order walk, children left-to-right.
///
/// `in_body` is a plain parameter so body visibility is scoped to exactly
/// one `<body>` subtree; it reverts on return rather than sticking for the
/// rest of the document.
fn walk(node: NodeRef<'_, Node>, in_body: bool, state: &mut Extraction) {
    let mut in_body = in_body;
    let mut exclude_text = false;

    if let Node::Element(element) = node.value() {
        match element.name() {
            "title" => {
                if state.title.is_none() {
                    if let Some(Node::Text(text)) = node.first_child().map(|child| child.value()) {
                        state.title = Some(text.to_string());
                    }
                }
            }
            "body" => in_body = true,
            "script" | "style" => exclude_text = true,
            _ => {}
        }
    }

    for child in node.children() {
        match child.value() {
            Node::Text(text) if in_body && !exclude_text => state.push_words(&text),
            Node::Element(_) => walk(child, in_body, state),
            _ => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(html: &str) -> Html {
        Html::parse_document(html)
    }

    #[test]
    fn test_extracts_title_and_body_text() {
        let doc = parse(
            "<html><head><title>Test Page</title></head>\
             <body><p>Hello, this is a test page with some content.</p></body></html>",
        );

        let (title, content) = extract(&doc, DEFAULT_MAX_WORDS);
        assert_eq!(title, "Test Page");
        assert_eq!(content, "Hello, this is a test page with some content.");
    }

    #[test]
    fn test_missing_title_yields_empty_string() {
        let doc = parse("<html><body><p>some text</p></body></html>");

        let (title, content) = extract(&doc, DEFAULT_MAX_WORDS);
        assert_eq!(title, "");
        assert_eq!(content, "some text");
    }

    #[test]
    fn test_empty_body_yields_empty_content() {
        let doc = parse("<html><head><title>Empty Page</title></head><body></body></html>");

        let (title, content) = extract(&doc, DEFAULT_MAX_WORDS);
        assert_eq!(title, "Empty Page");
        assert_eq!(content, "");
    }

    #[test]
    fn test_first_title_wins() {
        let doc = parse(
            "<html><head><title>First</title><title>Second</title></head>\
             <body>text</body></html>",
        );

        let (title, _) = extract(&doc, DEFAULT_MAX_WORDS);
        assert_eq!(title, "First");
    }

    #[test]
    fn test_head_text_is_not_content() {
        let doc = parse(
            "<html><head><title>Secret Words</title></head>\
             <body><p>visible</p></body></html>",
        );

        let (_, content) = extract(&doc, DEFAULT_MAX_WORDS);
        assert_eq!(content, "visible");
    }

    #[test]
    fn test_script_and_style_text_is_excluded() {
        let doc = parse(
            "<html><body><p>before</p>\
             <script>var x = 1;</script>\
             <style>p { color: red; }</style>\
             <p>after</p></body></html>",
        );

        let (_, content) = extract(&doc, DEFAULT_MAX_WORDS);
        assert_eq!(content, "before after");
    }

    #[test]
    fn test_nested_elements_in_document_order() {
        let doc = parse("<html><body><div>one <b>two</b> three</div><p>four</p></body></html>");

        let (_, content) = extract(&doc, DEFAULT_MAX_WORDS);
        assert_eq!(content, "one two three four");
    }

    #[test]
    fn test_whitespace_runs_become_single_spaces() {
        let doc = parse("<html><body><p>Hello,\n\t  this\tis   spaced\n out</p></body></html>");

        let (_, content) = extract(&doc, DEFAULT_MAX_WORDS);
        assert_eq!(content, "Hello, this is spaced out");
    }

    #[test]
    fn test_word_cap_is_exact() {
        let body: String = (0..150).map(|i| format!("w{i} ")).collect();
        let doc = parse(&format!("<html><body><p>{body}</p></body></html>"));

        let (_, content) = extract(&doc, DEFAULT_MAX_WORDS);
        let words: Vec<&str> = content.split_whitespace().collect();
        assert_eq!(words.len(), 100);
        assert_eq!(words[0], "w0");
        assert_eq!(words[99], "w99");
    }

    #[test]
    fn test_word_cap_spans_node_boundaries() {
        let first: String = (0..60).map(|i| format!("a{i} ")).collect();
        let second: String = (0..60).map(|i| format!("b{i} ")).collect();
        let doc = parse(&format!(
            "<html><body><p>{first}</p><p>{second}</p></body></html>"
        ));

        let (_, content) = extract(&doc, DEFAULT_MAX_WORDS);
        let words: Vec<&str> = content.split_whitespace().collect();
        assert_eq!(words.len(), 100);
        assert_eq!(words[59], "a59");
        assert_eq!(words[60], "b0");
        assert_eq!(words[99], "b39");
    }

    #[test]
    fn test_extraction_is_deterministic() {
        let doc = parse(
            "<html><head><title>Stable</title></head>\
             <body><div>alpha <span>beta</span> gamma</div></body></html>",
        );

        let first = extract(&doc, DEFAULT_MAX_WORDS);
        let second = extract(&doc, DEFAULT_MAX_WORDS);
        assert_eq!(first, second);
    }
}
