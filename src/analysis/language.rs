//! Language detection backed by the linguist language database
//!
//! Detection tries exact file names first, then extensions. When several
//! languages share a name or extension, linguist's heuristics pick one from
//! the first bytes of the file.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use linguist::{detect_language_by_extension, detect_language_by_filename};
pub use linguist_types::LanguageType;

/// How many bytes of a file are read to disambiguate its language
const READ_LIMIT: usize = 32 * 1024;

/// A detected language
#[derive(Debug, Clone)]
pub struct Language {
    pub name: String,
    pub kind: LanguageType,
}

/// Read up to `READ_LIMIT` bytes of a file as UTF-8
fn read_file_header(path: &Path) -> Option<String> {
    let mut file = File::open(path).ok()?;
    let mut buffer = vec![0; READ_LIMIT];
    let n = file.read(&mut buffer).ok()?;
    buffer.truncate(n);
    String::from_utf8(buffer).ok()
}

/// Detect the language of a file, by exact file name first and extension second
pub fn detect_language(path: &Path) -> Option<Language> {
    let file_path = path.to_str()?;

    let mut candidates = detect_language_by_filename(file_path).unwrap_or_default();
    if candidates.is_empty() && path.extension().is_some() {
        candidates = detect_language_by_extension(file_path).unwrap_or_default();
    }

    let first = candidates.first()?.clone();
    let lang = if candidates.len() > 1 {
        read_file_header(path)
            .and_then(|header| linguist::disambiguate(file_path, &header).ok())
            .and_then(|found| found.first().cloned())
            .unwrap_or(first)
    } else {
        first
    };

    // TSX is reported as TypeScript
    let name = if lang.name.eq_ignore_ascii_case("tsx") {
        "TypeScript".to_string()
    } else {
        lang.name.to_string()
    };
    Some(Language {
        name,
        kind: lang.definition.language_type.clone(),
    })
}

/// Whether a language counts toward the statistics: every programming
/// language, and HTML and CSS among markup languages
pub fn should_include_language(lang: &Language) -> bool {
    match lang.kind {
        LanguageType::Programming => true,
        LanguageType::Markup => lang.name.eq_ignore_ascii_case("html") || lang.name.eq_ignore_ascii_case("css"),
        _ => false,
    }
}
