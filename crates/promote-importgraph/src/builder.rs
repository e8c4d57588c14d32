// src/builder.rs
//! Concurrent construction of the forward and reverse import graphs.

use crossbeam::channel::{self, Sender};
use rustc_hash::FxHashMap;

use crate::config::BuildConfig;
use crate::error::LoadError;
use crate::graph::Graph;
use crate::workspace::Workspace;

/// The cgo pseudo-package. Never a real package.
const CGO_PSEUDO_IMPORT: &str = "C";

/// Result of [`build`].
#[derive(Debug, Default)]
pub struct BuildOutput {
    pub forward: Graph,
    pub reverse: Graph,
    /// Packages that could not be loaded. Empty when everything loaded.
    pub errors: FxHashMap<String, LoadError>,
}

/// Everything producers report to the consumer.
enum Event {
    Edge { from: String, to: String },
    Failed { path: String, error: LoadError },
}

/// Scans `workspace` and builds the forward and reverse import graphs of
/// all its packages.
///
/// One thread enumerates packages and queues a load job per package; a pool
/// of `config.workers` threads runs the jobs. Edges and failures travel over
/// a single channel to the calling thread, which alone owns the graphs and
/// the error map. The channel closes once every producer has finished.
pub fn build<W>(workspace: &W, config: &BuildConfig) -> BuildOutput
where
    W: Workspace + ?Sized,
{
    let workers = config.effective_workers();
    log::info!("building import graph with {} worker(s)", workers);

    let scoped = crossbeam::thread::scope(|s| {
        let (job_tx, job_rx) = channel::unbounded::<String>();
        let (event_tx, event_rx) = channel::unbounded::<Event>();

        for _ in 0..workers {
            let jobs = job_rx.clone();
            let events = event_tx.clone();
            s.spawn(move |_| {
                for path in jobs {
                    load_package(workspace, &path, &events);
                }
            });
        }
        drop(job_rx);

        let events = event_tx.clone();
        s.spawn(move |_| {
            workspace.for_each_package(&mut |path: String, error: Option<LoadError>| match error {
                Some(error) => {
                    let _ = events.send(Event::Failed { path, error });
                }
                None => {
                    let _ = job_tx.send(path);
                }
            });
            // `job_tx` drops here, letting the workers drain and exit.
        });
        drop(event_tx);

        consume(event_rx.iter())
    });

    match scoped {
        Ok(output) => {
            log::info!(
                "import graph: {} package(s) with imports, {} edge(s), {} error(s)",
                output.forward.len(),
                output.forward.edge_count(),
                output.errors.len()
            );
            output
        }
        Err(panic) => std::panic::resume_unwind(panic),
    }
}

fn load_package<W>(workspace: &W, path: &str, events: &Sender<Event>)
where
    W: Workspace + ?Sized,
{
    let imports = match workspace.import(path) {
        Ok(imports) => imports,
        // An empty directory is not an error.
        Err(error) if error.is_no_buildable_source() => {
            log::trace!("skipping {}: {}", path, error);
            return;
        }
        Err(error) => {
            let _ = events.send(Event::Failed { path: path.to_string(), error });
            return;
        }
    };
    log::debug!("loaded {} ({} import(s))", path, imports.all().count());
    for imp in imports.all() {
        let _ = events.send(Event::Edge { from: path.to_string(), to: imp.to_string() });
    }
}

/// Folds producer events into the graphs. Runs on exactly one thread.
fn consume(events: impl Iterator<Item = Event>) -> BuildOutput {
    let mut output = BuildOutput::default();
    for event in events {
        match event {
            Event::Failed { path, error } => {
                log::warn!("cannot load {}: {}", path, error);
                output.errors.insert(path, error);
            }
            Event::Edge { to, .. } if to == CGO_PSEUDO_IMPORT => {}
            Event::Edge { from, to } => {
                output.forward.add_edge(&from, &to);
                output.reverse.add_edge(&to, &from);
            }
        }
    }
    output
}
