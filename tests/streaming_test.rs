//! Integration tests for streaming renderer.

use mdhtml::model::{CellAlign, Node};
use mdhtml::render::streaming::{collect_html, RenderEvent, StreamingRenderer};
use mdhtml::render::{to_html, RenderOptions};
use mdhtml::Error;

fn create_sample_document() -> Node {
    Node::document(vec![
        Node::heading(1, vec![Node::text("Introduction")]),
        Node::paragraph(vec![
            Node::text("Plain, "),
            Node::strong(vec![Node::text("bold")]),
            Node::text(" & "),
            Node::link("/more?a=1&b=2", vec![Node::emphasis(vec![Node::text("more")])]),
        ]),
        Node::ordered_list(
            3,
            vec![
                Node::list_item(vec![Node::text("three")]),
                Node::list_item(vec![Node::inline_code(vec![Node::text("<four>")])]),
            ],
        ),
        Node::table(
            true,
            vec![
                Node::table_row(vec![
                    Node::table_cell(None, vec![Node::text("Key")]),
                    Node::table_cell(Some(CellAlign::Right), vec![Node::text("Value")]),
                ]),
                Node::table_row(vec![
                    Node::table_cell(None, vec![Node::text("a")]),
                    Node::table_cell(Some(CellAlign::Right), vec![Node::text("1")]),
                ]),
            ],
        ),
        Node::separator(),
        Node::quote(vec![Node::paragraph(vec![Node::strikethrough(vec![
            Node::text("gone"),
        ])])]),
        Node::block_code(Some("sh"), vec![Node::text("echo 'hi'")]),
        Node::paragraph(vec![Node::image("/i.png", "an \"image\"", "")]),
    ])
}

fn nested_quotes(depth: usize) -> Node {
    let mut node = Node::text("core");
    for _ in 0..depth {
        node = Node::quote(vec![node]);
    }
    node
}

#[test]
fn test_streaming_matches_recursive_renderer() {
    let doc = create_sample_document();
    for options in [
        RenderOptions::default(),
        RenderOptions::default().verbatim_attributes(),
    ] {
        let streamed = collect_html(StreamingRenderer::new(&doc, options.clone())).unwrap();
        assert_eq!(streamed, to_html(&doc, &options).unwrap());
    }
}

#[test]
fn test_streaming_renderer_document_boundaries() {
    let doc = create_sample_document();
    let events: Vec<_> = StreamingRenderer::new(&doc, RenderOptions::default())
        .collect::<Result<_, _>>()
        .unwrap();

    assert_eq!(events.first(), Some(&RenderEvent::Open("<html>".to_string())));
    assert_eq!(events[1], RenderEvent::Open("<body>".to_string()));
    assert_eq!(events.last(), Some(&RenderEvent::Close("</html>".to_string())));
}

#[test]
fn test_streaming_renderer_balanced_tags() {
    let doc = create_sample_document();
    let events: Vec<_> = StreamingRenderer::new(&doc, RenderOptions::default())
        .collect::<Result<_, _>>()
        .unwrap();

    let opens = events
        .iter()
        .filter(|e| matches!(e, RenderEvent::Open(_)))
        .count();
    let closes = events
        .iter()
        .filter(|e| matches!(e, RenderEvent::Close(_)))
        .count();
    let voids: Vec<_> = events
        .iter()
        .filter(|e| matches!(e, RenderEvent::Void(_)))
        .map(RenderEvent::as_str)
        .collect();

    assert_eq!(opens, closes);
    assert_eq!(voids.len(), 2);
    assert_eq!(voids[0], "<hr>");
    assert!(voids[1].starts_with("<img "));
}

#[test]
fn test_streaming_renderer_text_is_escaped() {
    let doc = create_sample_document();
    let texts: Vec<String> = StreamingRenderer::new(&doc, RenderOptions::default())
        .filter_map(|event| match event {
            Ok(RenderEvent::Text(text)) => Some(text),
            _ => None,
        })
        .collect();

    assert!(texts.contains(&" &amp; ".to_string()));
    assert!(texts.contains(&"&lt;four&gt;".to_string()));
    assert!(texts.contains(&"echo &#x27;hi&#x27;".to_string()));
}

#[test]
fn test_streaming_renderer_header_cells() {
    let doc = create_sample_document();
    let html = collect_html(StreamingRenderer::new(&doc, RenderOptions::default())).unwrap();
    assert!(html.contains(
        "<thead><tr><th>Key</th><th align=\"right\">Value</th></tr></thead>"
    ));
    assert!(html.contains("<tbody><tr><td>a</td><td align=\"right\">1</td></tr></tbody>"));
}

#[test]
fn test_streaming_renderer_is_done() {
    let doc = create_sample_document();
    let mut renderer = StreamingRenderer::new(&doc, RenderOptions::default());

    assert!(!renderer.is_done());

    let mut count = 0;
    while renderer.next().is_some() {
        count += 1;
    }

    assert!(renderer.is_done());
    assert_eq!(renderer.emitted(), count);
}

#[test]
fn test_streaming_renderer_depth_limit() {
    let node = nested_quotes(8);
    let options = RenderOptions::new().with_max_depth(4);

    let result = collect_html(StreamingRenderer::new(&node, options.clone()));
    assert!(matches!(result, Err(Error::DepthLimitExceeded { limit: 4 })));

    // Both renderers agree on the failure.
    assert!(to_html(&node, &options).is_err());
}

#[test]
fn test_streaming_renderer_strict_error() {
    let doc = Node::document(vec![Node::heading(0, vec![Node::text("x")])]);
    let options = RenderOptions::new().with_strict(true);

    let results: Vec<_> = StreamingRenderer::new(&doc, options).collect();
    let errors = results.iter().filter(|r| r.is_err()).count();
    assert_eq!(errors, 1);
    assert!(results.last().is_some_and(|r| r.is_err()));
}

#[test]
fn test_streaming_renderer_deep_tree() {
    let depth = 100_000;
    let node = nested_quotes(depth);
    let html = mdhtml::render_streaming(&node, &RenderOptions::default()).unwrap();

    assert!(html.starts_with("<blockquote>"));
    assert!(html.contains("<blockquote>core</blockquote>"));
    assert!(html.ends_with("</blockquote>"));

    drop(node);
}

#[test]
fn test_streaming_renderer_single_leaf() {
    let node = Node::text("'quoted'");
    let events: Vec<_> = StreamingRenderer::new(&node, RenderOptions::default())
        .collect::<Result<_, _>>()
        .unwrap();
    assert_eq!(
        events,
        vec![RenderEvent::Text("&#x27;quoted&#x27;".to_string())]
    );
}
