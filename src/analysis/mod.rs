//! Directory analysis: per-language file counts and byte totals
//!
//! This is the operation the benchmark compares. The native implementation
//! lives here; the reference implementation is an external program wrapped by
//! [`candidates::ExternalCommand`].

pub mod candidates;
pub mod language;
pub mod walker;

use std::collections::HashMap;
use std::io;
use std::path::Path;

use rayon::prelude::*;
use serde::Serialize;

pub use candidates::{ExternalCommand, NativeAnalysis};
pub use language::{detect_language, should_include_language, Language, LanguageType};

/// Aggregate for one language
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LanguageStat {
    pub lang: String,
    pub count: u32,
    pub bytes: u64,
    /// Share of the bytes of every file walked, not only detected ones
    pub ratio: f64,
}

pub type AnalysisResult = Vec<LanguageStat>;

/// Options for a directory walk
#[derive(Debug, Clone, Default)]
pub struct AnalyzeOptions {
    pub include_hidden: bool,
    pub include_vendored: bool,
    pub follow_links: bool,
}

/// Analyze `root` and return language statistics sorted by bytes, largest first
pub fn analyze_directory(root: &Path, options: &AnalyzeOptions) -> io::Result<AnalysisResult> {
    if !root.is_dir() {
        return Err(io::Error::new(
            io::ErrorKind::NotFound,
            format!("{} is not a directory", root.display()),
        ));
    }

    let files = walker::collect_files(root, options);
    let total_bytes: u64 = files.iter().map(|(_, size)| size).sum();
    if total_bytes == 0 {
        return Ok(Vec::new());
    }

    let per_language = files
        .par_iter()
        .fold(HashMap::new, |mut acc: HashMap<String, (u32, u64)>, (path, size)| {
            if let Some(lang) = detect_language(path) {
                if should_include_language(&lang) {
                    let entry = acc.entry(lang.name).or_insert((0, 0));
                    entry.0 += 1;
                    entry.1 += size;
                }
            }
            acc
        })
        .reduce(HashMap::new, |mut acc, other| {
            for (lang, (count, bytes)) in other {
                let entry = acc.entry(lang).or_insert((0, 0));
                entry.0 += count;
                entry.1 += bytes;
            }
            acc
        });

    let mut result: AnalysisResult = per_language
        .into_iter()
        .map(|(lang, (count, bytes))| LanguageStat {
            lang,
            count,
            bytes,
            ratio: bytes as f64 / total_bytes as f64,
        })
        .collect();

    // Bytes descending, name as tie-breaker for a stable order
    result.sort_by(|a, b| b.bytes.cmp(&a.bytes).then_with(|| a.lang.cmp(&b.lang)));
    Ok(result)
}
