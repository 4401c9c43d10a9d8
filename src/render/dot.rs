use crate::graph::IntentGraph;

/// Convert the intent graph to DOT source.
pub fn to_dot(graph: &IntentGraph, comment: &str) -> String {
    let mut lines = Vec::new();
    for comment_line in comment.lines() {
        lines.push(format!("// {}", comment_line));
    }
    lines.push("digraph {".to_string());

    for node in graph.nodes() {
        lines.push(format!(
            "\t{} [label={}]",
            quote(&node.id),
            quote(&node.label)
        ));
    }

    for (source, target) in graph.edges() {
        lines.push(format!("\t{} -> {}", quote(source), quote(target)));
    }

    lines.push("}".to_string());
    let mut dot = lines.join("\n");
    dot.push('\n');
    dot
}

/// Double-quoted DOT identifier.
fn quote(value: &str) -> String {
    let mut out = String::with_capacity(value.len() + 2);
    out.push('"');
    for ch in value.chars() {
        match ch {
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\r' => {}
            _ => out.push(ch),
        }
    }
    out.push('"');
    out
}
