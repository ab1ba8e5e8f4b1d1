use std::collections::HashSet;
use std::fs;
use std::io;
use std::path::Path;

use crate::normalize::is_significant;
use crate::types::{ScanOptions, ScanStats};

mod read;
mod walker;

#[cfg(test)]
mod tests;

pub(crate) use read::read_source_lines;
pub(crate) use walker::collect_candidate_paths;

#[derive(Debug)]
pub(crate) struct SourceFile {
    pub(crate) path: String,
    pub(crate) lines: Vec<String>,
    pub(crate) significant: Vec<bool>,
}

pub(crate) fn validate_root(root: &Path) -> io::Result<()> {
    let meta = fs::metadata(root)
        .map_err(|err| io::Error::new(err.kind(), format!("root {}: {err}", root.display())))?;
    if !meta.is_dir() {
        return Err(io::Error::new(
            io::ErrorKind::InvalidInput,
            format!("root {} is not a directory", root.display()),
        ));
    }
    Ok(())
}

pub(crate) fn make_rel_path(root: &Path, abs_path: &Path) -> String {
    match abs_path.strip_prefix(root) {
        Ok(rel) => rel.to_string_lossy().replace('\\', "/"),
        Err(_) => abs_path.to_string_lossy().replace('\\', "/"),
    }
}

pub(crate) fn ignore_dirs_contains(ignore_dirs: &HashSet<String>, name: &str) -> bool {
    if ignore_dirs.contains(name) {
        return true;
    }
    #[cfg(windows)]
    {
        ignore_dirs.iter().any(|d| d.eq_ignore_ascii_case(name))
    }
    #[cfg(not(windows))]
    {
        false
    }
}

pub(crate) fn load_corpus(
    root: &Path,
    options: &ScanOptions,
    stats: &mut ScanStats,
) -> io::Result<Vec<SourceFile>> {
    let mut paths = collect_candidate_paths(root, options, stats);
    // The sorted position is the file index for the rest of the run.
    paths.sort();

    let mut corpus = Vec::with_capacity(paths.len());
    for abs_path in paths {
        stats.candidate_files = stats.candidate_files.saturating_add(1);
        let Some(lines) = read_source_lines(&abs_path, options, stats) else {
            continue;
        };
        let significant = lines.iter().map(|line| is_significant(line)).collect();
        corpus.push(SourceFile {
            path: make_rel_path(root, &abs_path),
            lines,
            significant,
        });
    }
    Ok(corpus)
}
