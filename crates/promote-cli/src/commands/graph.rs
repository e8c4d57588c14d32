use std::io::Write;

use promote_importgraph::BuildOutput;

/// Prints one line per package: the package, then its sorted successors.
pub fn handle_graph(output: &BuildOutput, reverse: bool, w: &mut impl Write) -> std::io::Result<()> {
    let graph = super::select(output, reverse);
    let mut nodes: Vec<&str> = graph.nodes().collect();
    nodes.sort_unstable();
    for node in nodes {
        writeln!(w, "{}: {}", node, graph.sorted_successors(node).join(" "))?;
    }
    Ok(())
}
