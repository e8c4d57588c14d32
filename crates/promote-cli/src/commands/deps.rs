use std::io::Write;

use promote_importgraph::BuildOutput;

/// Prints every package reachable from `roots`, roots included, one per line.
pub fn handle_deps(output: &BuildOutput, roots: &[String], reverse: bool, w: &mut impl Write) -> std::io::Result<()> {
    let graph = super::select(output, reverse);
    for root in roots {
        if !output.forward.contains(root) && !output.reverse.contains(root) {
            log::warn!("package {} does not appear in the import graph", root);
        }
    }
    let mut reached: Vec<String> = graph.search(roots).into_iter().collect();
    reached.sort_unstable();
    for pkg in reached {
        writeln!(w, "{}", pkg)?;
    }
    Ok(())
}
