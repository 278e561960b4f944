//! File discovery for directory analysis
//!
//! The walk honours `.gitignore` files and skips hidden entries unless asked
//! otherwise. Vendored paths are matched with linguist's vendor patterns,
//! relative to the analyzed root.

use std::path::{Path, PathBuf};
use std::sync::mpsc;

use ignore::{WalkBuilder, WalkState};
use tracing::debug;

use crate::analysis::AnalyzeOptions;

fn is_vendored(root: &Path, path: &Path) -> bool {
    let relative = path.strip_prefix(root).unwrap_or(path);
    linguist::is_vendored(relative).unwrap_or(false)
}

/// Collect every regular file under `root` with its size in bytes
pub fn collect_files(root: &Path, options: &AnalyzeOptions) -> Vec<(PathBuf, u64)> {
    let (tx, rx) = mpsc::channel();
    let include_vendored = options.include_vendored;

    let walker = WalkBuilder::new(root)
        .hidden(!options.include_hidden)
        .git_ignore(true)
        .follow_links(options.follow_links)
        .threads(num_cpus::get())
        .build_parallel();

    walker.run(|| {
        let tx = tx.clone();
        Box::new(move |result| {
            let entry = match result {
                Ok(entry) => entry,
                Err(err) => {
                    debug!("skipping unreadable entry: {}", err);
                    return WalkState::Continue;
                }
            };
            if !entry.file_type().is_some_and(|ft| ft.is_file()) {
                return WalkState::Continue;
            }
            if !include_vendored && is_vendored(root, entry.path()) {
                return WalkState::Continue;
            }
            if let Ok(metadata) = entry.metadata() {
                let _ = tx.send((entry.path().to_path_buf(), metadata.len()));
            }
            WalkState::Continue
        })
    });

    drop(tx);
    rx.into_iter().collect()
}
