//! End-to-end conversion of real HTML fragments through scraper.

#![cfg(feature = "html")]

use msgdown::{MessageConverter, MsgdownError, Options};
use pretty_assertions::assert_eq;

fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

fn convert(html: &str) -> String {
    init_logging();
    MessageConverter::new()
        .convert(html)
        .expect("fragment converts")
}

#[test]
fn paragraph_with_bold() {
    assert_eq!(convert("<p>Hello <b>world</b></p>"), "Hello **world**\n\n");
}

#[test]
fn basic_formatting() {
    assert_eq!(
        convert("<p>This is <strong>bold</strong> and <em>italic</em> text.</p>"),
        "This is **bold** and *italic* text.\n\n"
    );
}

#[test]
fn attributes_are_stripped() {
    let html = r#"<p style="color: blue;" class="important">Content with attributes</p><a href="https://example.com" class="link-style">Link</a>"#;
    assert_eq!(
        convert(html),
        "Content with attributes\n\n[Link](https://example.com)"
    );
}

#[test]
fn scripts_and_styles_removed() {
    let html = "<p>Visible text</p><script>alert('invisible');</script><style>.hide {display:none;}</style>";
    assert_eq!(convert(html), "Visible text\n\n");
}

#[test]
fn wrappers_unwrapped() {
    let html = "<p>Text <span>inside span</span> and <b><span><span>nested</span></span></b></p>";
    assert_eq!(convert(html), "Text inside span and **nested**\n\n");
}

#[test]
fn headings() {
    assert_eq!(
        convert("<h1>Title 1</h1><h2>Title 2</h2>"),
        "# Title 1\n\n## Title 2\n\n"
    );
}

#[test]
fn image_keeps_src_and_alt() {
    assert_eq!(
        convert(r#"<img src="image.jpg" alt="Sample Image" style="width:100px;">"#),
        "![Sample Image](image.jpg)"
    );
}

#[test]
fn inline_code_in_paragraph() {
    assert_eq!(
        convert("<p>Use <code>myVar</code> variable.</p>"),
        "Use `myVar` variable.\n\n"
    );
}

#[test]
fn code_block_with_language() {
    assert_eq!(
        convert(r#"<pre><code class="language-python">def f():
    return 1</code></pre>"#),
        "```python\ndef f():\n    return 1\n```\n\n"
    );
}

#[test]
fn empty_tags() {
    assert_eq!(convert("<p></p><ul><li></li></ul>"), "\n\n* \n\n");
}

#[test]
fn nested_unordered_lists() {
    let html = "
        <ul>
            <li>Item 1</li>
            <li>Item 2
                <ul>
                    <li>Item 2.1</li>
                    <li>Item 2.2
                        <ul>
                            <li>Item 2.2.1</li>
                        </ul>
                    </li>
                </ul>
            </li>
            <li>Item 3</li>
        </ul>
    ";
    assert_eq!(
        convert(html),
        "* Item 1\n* Item 2\n    * Item 2.1\n    * Item 2.2\n        * Item 2.2.1\n* Item 3\n\n"
    );
}

#[test]
fn mixed_nested_lists() {
    let html = "
        <ul>
            <li>Point A</li>
            <li>Point B
                <ol>
                    <li>Numbered B1</li>
                    <li>Numbered B2
                        <ul><li>Sub-point B2a</li></ul>
                    </li>
                </ol>
            </li>
        </ul>
    ";
    assert_eq!(
        convert(html),
        "* Point A\n* Point B\n    1. Numbered B1\n    2. Numbered B2\n        * Sub-point B2a\n\n"
    );
}

#[test]
fn list_item_with_paragraphs_and_quote() {
    let html = "
        <ul>
            <li>
                <p>This is a paragraph in a list item.</p>
                <blockquote>This is a quote inside a list item.</blockquote>
                <p>Another paragraph.</p>
            </li>
            <li>Simple item</li>
        </ul>
    ";
    assert_eq!(
        convert(html),
        "* This is a paragraph in a list item.\n\
         \n    > This is a quote inside a list item.\n\
         \n    Another paragraph.\n\
         * Simple item\n\n"
    );
}

#[test]
fn list_item_holding_only_a_quote() {
    let html = "<ul><li>Item 1</li><li> <blockquote>Quote in LI</blockquote> </li><li>Item 3</li></ul>";
    assert_eq!(convert(html), "* Item 1\n*\n    > Quote in LI\n* Item 3\n\n");
}

#[test]
fn code_block_in_list() {
    let html = r#"<ul><li>Item with code:
        <pre><code class="language-python">def foo():
  return "bar"</code></pre>
    </li></ul>"#;
    assert_eq!(
        convert(html),
        "* Item with code:\n    ```python\n    def foo():\n      return \"bar\"\n    ```\n\n"
    );
}

#[test]
fn simple_table() {
    let html = "
        <table>
            <thead><tr><th>Header 1</th><th>Header 2</th></tr></thead>
            <tbody>
                <tr><td>Cell 1.1</td><td>Cell 1.2</td></tr>
                <tr><td>Cell 2.1</td><td>Cell 2.2</td></tr>
            </tbody>
        </table>
    ";
    assert_eq!(
        convert(html),
        "| Header 1 | Header 2 |\n| --- | --- |\n| Cell 1.1 | Cell 1.2 |\n| Cell 2.1 | Cell 2.2 |\n\n"
    );
}

#[test]
fn table_without_thead() {
    assert_eq!(
        convert("<table><tr><th>H</th></tr><tr><td>V</td></tr></table>"),
        "| H |\n| --- |\n| V |\n\n"
    );
}

#[test]
fn table_with_code_in_cells() {
    let html = r#"
        <table>
            <tr><th>Description</th><th>Code</th></tr>
            <tr>
                <td>Python Hello</td>
                <td><pre><code class="language-python">print("Hello")</code></pre></td>
            </tr>
            <tr>
                <td>Inline</td>
                <td><code>my_var</code></td>
            </tr>
        </table>
    "#;
    assert_eq!(
        convert(html),
        "| Description | Code |\n\
         | --- | --- |\n\
         | Python Hello | ```python<br>print(\"Hello\")<br>``` |\n\
         | Inline | `my_var` |\n\n"
    );
}

#[test]
fn table_empty_cells() {
    let html = "<table><thead><tr><th></th><th>H2</th></tr></thead><tbody><tr><td>C1</td><td></td></tr></tbody></table>";
    assert_eq!(convert(html), "|   | H2 |\n| --- | --- |\n| C1 |   |\n\n");
}

#[test]
fn blockquote_paragraphs() {
    assert_eq!(
        convert("<blockquote><p>Q1</p><p>Q2</p></blockquote>"),
        "> Q1\n> \n> Q2\n\n"
    );
}

#[test]
fn blockquote_with_paragraph_and_list() {
    let html = "
        <blockquote>
            <p>This is a paragraph in a blockquote.</p>
            <ul>
                <li>List item in quote</li>
                <li>Another item
                    <ol><li>Nested ordered</li></ol>
                </li>
            </ul>
            <p>Final para in quote.</p>
        </blockquote>
    ";
    assert_eq!(
        convert(html),
        "> This is a paragraph in a blockquote.\n\
         > \n\
         > * List item in quote\n\
         > * Another item\n\
         >     1. Nested ordered\n\
         > \n\
         > Final para in quote.\n\n"
    );
}

#[test]
fn code_in_wrapper_inside_blockquote_keeps_indentation() {
    let html = r#"<blockquote><section><pre><code class="language-python">def f():
    return 1</code></pre></section></blockquote>"#;
    assert_eq!(
        convert(html),
        "> ```python\n> def f():\n>     return 1\n> ```\n\n"
    );
}

#[test]
fn list_in_wrapper_inside_list_item_nests() {
    let html = "<ul><li>A<section><ul><li>B<ul><li>C</li></ul></li></ul></section></li></ul>";
    assert_eq!(convert(html), "* A\n    * B\n        * C\n\n");
}

#[test]
fn code_in_wrapper_inside_list_item_starts_own_line() {
    let html = "<ul><li>Item<figure><pre><code>if x:\n    y()</code></pre></figure></li></ul>";
    assert_eq!(
        convert(html),
        "* Item\n    ```\n    if x:\n        y()\n    ```\n\n"
    );
}

#[test]
fn empty_heading_keeps_separator() {
    assert_eq!(convert("<h2> </h2><p>after</p>"), "\n\nafter\n\n");
}

#[test]
fn output_is_deterministic() {
    let html = "<h3>Notes</h3><ol><li>one<ul><li>two</li></ul></li></ol><pre>x</pre>";
    assert_eq!(convert(html), convert(html));
}

#[test]
fn full_documents_are_rejected() {
    let err = MessageConverter::new()
        .convert("<!DOCTYPE html><html><body><p>page</p></body></html>")
        .unwrap_err();
    assert!(matches!(err, MsgdownError::InvalidInput(_)));
}

#[test]
fn custom_options_apply() {
    init_logging();
    let options = Options {
        bullet_list_marker: '-',
        fence: "~~~".to_string(),
        ..Options::default()
    };
    let converter = MessageConverter::with_options(options);
    let markdown = converter
        .convert("<ul><li>item</li></ul><pre><code>code</code></pre>")
        .unwrap();
    assert_eq!(markdown, "- item\n\n~~~\ncode\n~~~\n\n");
}
