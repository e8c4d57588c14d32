mod deps;
mod graph;

pub use deps::handle_deps;
pub use graph::handle_graph;

use std::io::Write;

use promote_importgraph::{BuildOutput, Graph};

fn select(output: &BuildOutput, reverse: bool) -> &Graph {
    if reverse {
        &output.reverse
    } else {
        &output.forward
    }
}

/// Prints the packages that failed to load, sorted by path.
pub fn report_errors(output: &BuildOutput, w: &mut impl Write) -> std::io::Result<()> {
    if output.errors.is_empty() {
        return Ok(());
    }
    let mut failed: Vec<_> = output.errors.iter().collect();
    failed.sort_unstable_by(|a, b| a.0.cmp(b.0));
    writeln!(w, "{} package(s) could not be loaded:", failed.len())?;
    for (path, error) in failed {
        writeln!(w, "  {}: {}", path, error)?;
    }
    Ok(())
}
