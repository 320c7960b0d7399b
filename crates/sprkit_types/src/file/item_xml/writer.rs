//! Re-serialises a parsed item document with tab indentation.
//!
//! Indentation follows the usual "pretty print" rule: whitespace-only text
//! between structural nodes (elements, comments, processing instructions) is
//! replaced by a newline plus one tab per nesting level, while any text with
//! visible characters is written back untouched.
//!
//! Top-level nodes are separated by a single newline and the document does
//! not end with one, so the output matches what ElementTree's `indent` and
//! `write` produce for the same tree.

use std::collections::HashSet;

use roxmltree::{Document, ExpandedName, Node, NodeId, NodeType};

/// XML declaration written at the top of every rewritten document.
pub const XML_DECLARATION: &str = "<?xml version='1.0' encoding='utf-8'?>";

/// Serialises `doc`, leaving out every node whose id is in `skip`.
pub(super) fn write_document(doc: &Document<'_>, skip: &HashSet<NodeId>) -> String {
	let mut out = String::new();
	out.push_str(XML_DECLARATION);

	for node in doc.root().children() {
		if skip.contains(&node.id()) || !is_structural(&node) {
			continue;
		}
		out.push('\n');
		match node.node_type() {
			NodeType::Element => write_element(&mut out, node, 0, skip),
			_ => write_leaf(&mut out, node),
		}
	}
	out
}

fn is_structural(node: &Node<'_, '_>) -> bool {
	matches!(node.node_type(), NodeType::Element | NodeType::Comment | NodeType::PI)
}

fn indent(out: &mut String, level: usize) {
	out.push('\n');
	out.extend(std::iter::repeat_n('\t', level));
}

/// Writes collected inter-node text, or an indent when it is only whitespace.
fn write_gap(out: &mut String, text: &str, level: usize) {
	if text.trim().is_empty() {
		indent(out, level);
	} else {
		escape_text(out, text);
	}
}

fn write_element(out: &mut String, node: Node<'_, '_>, level: usize, skip: &HashSet<NodeId>) {
	let name = qualified_name(&node, node.tag_name());
	out.push('<');
	out.push_str(&name);
	write_namespace_declarations(out, &node);
	for attr in node.attributes() {
		out.push(' ');
		match attr.namespace().and_then(|ns| node.lookup_prefix(ns)) {
			Some(prefix) if !prefix.is_empty() => {
				out.push_str(prefix);
				out.push(':');
			}
			_ => {}
		}
		out.push_str(attr.name());
		out.push_str("=\"");
		escape_attribute(out, attr.value());
		out.push('"');
	}

	let children: Vec<Node<'_, '_>> =
		node.children().filter(|child| !skip.contains(&child.id())).collect();

	if children.is_empty() {
		out.push_str(" />");
		return;
	}
	out.push('>');

	if !children.iter().any(is_structural) {
		for child in &children {
			escape_text(out, child.text().unwrap_or_default());
		}
	} else {
		// Text runs between structural children; run 0 leads, run i trails child i-1.
		let mut gap = String::new();
		for child in &children {
			if child.is_text() {
				gap.push_str(child.text().unwrap_or_default());
				continue;
			}
			write_gap(out, &gap, level + 1);
			gap.clear();
			match child.node_type() {
				NodeType::Element => write_element(out, *child, level + 1, skip),
				_ => write_leaf(out, *child),
			}
		}
		write_gap(out, &gap, level);
	}

	out.push_str("</");
	out.push_str(&name);
	out.push('>');
}

fn write_leaf(out: &mut String, node: Node<'_, '_>) {
	match node.node_type() {
		NodeType::Comment => {
			out.push_str("<!--");
			out.push_str(node.text().unwrap_or_default());
			out.push_str("-->");
		}
		NodeType::PI => {
			if let Some(pi) = node.pi() {
				out.push_str("<?");
				out.push_str(pi.target);
				if let Some(value) = pi.value {
					out.push(' ');
					out.push_str(value);
				}
				out.push_str("?>");
			}
		}
		_ => {}
	}
}

fn qualified_name(node: &Node<'_, '_>, name: ExpandedName<'_, '_>) -> String {
	match name.namespace().and_then(|ns| node.lookup_prefix(ns)) {
		Some(prefix) if !prefix.is_empty() => format!("{prefix}:{}", name.name()),
		_ => name.name().to_string(),
	}
}

/// Emits `xmlns` attributes for namespaces first declared on `node`.
fn write_namespace_declarations(out: &mut String, node: &Node<'_, '_>) {
	let parent = node.parent_element();
	for ns in node.namespaces() {
		if ns.name() == Some("xml") {
			continue;
		}
		let inherited = parent.is_some_and(|p| {
			p.namespaces().any(|pns| pns.name() == ns.name() && pns.uri() == ns.uri())
		});
		if inherited {
			continue;
		}
		match ns.name() {
			Some(prefix) => {
				out.push_str(" xmlns:");
				out.push_str(prefix);
			}
			None => out.push_str(" xmlns"),
		}
		out.push_str("=\"");
		escape_attribute(out, ns.uri());
		out.push('"');
	}
}

fn escape_text(out: &mut String, text: &str) {
	for ch in text.chars() {
		match ch {
			'&' => out.push_str("&amp;"),
			'<' => out.push_str("&lt;"),
			'>' => out.push_str("&gt;"),
			_ => out.push(ch),
		}
	}
}

fn escape_attribute(out: &mut String, text: &str) {
	for ch in text.chars() {
		match ch {
			'&' => out.push_str("&amp;"),
			'<' => out.push_str("&lt;"),
			'>' => out.push_str("&gt;"),
			'"' => out.push_str("&quot;"),
			'\r' => out.push_str("&#13;"),
			'\n' => out.push_str("&#10;"),
			'\t' => out.push_str("&#09;"),
			_ => out.push(ch),
		}
	}
}
