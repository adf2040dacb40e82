//! Example: Basic usage of fos-once

use fos_dom::Document;
use fos_once::{Once, Selection};

fn main() -> anyhow::Result<()> {
    // Initialize logging
    tracing_subscriber::fmt::init();

    let mut doc = Document::default();
    let body = doc.body();
    for _ in 0..3 {
        doc.tree_mut().append_element(body, "button")?;
    }

    let once = Once::default();
    println!("fos-once v{} using {:?}", fos_once::VERSION, once.attribute());

    // Behaviors attached twice only touch each element once
    let first = once.mark(doc.tree_mut(), "tooltip", Selection::from("button"), None)?;
    let second = once.mark(doc.tree_mut(), "tooltip", Selection::from("button"), None)?;
    println!("First pass: {} elements, second pass: {}", first.len(), second.len());

    let marked = once.find_marked(doc.tree(), "tooltip", None)?;
    println!("{}", doc.tree().inner_html(body));

    let removed = once.unmark(doc.tree_mut(), "tooltip", Selection::from(marked), None)?;
    println!("Unmarked {} elements", removed.len());
    Ok(())
}
