use std::collections::HashSet;

#[derive(Debug, Clone)]
pub struct ScanOptions {
    pub extensions: HashSet<String>,
    pub ignore_dirs: HashSet<String>,
    pub min_lines: usize,
    pub min_significant: usize,
    pub max_pairs_per_hash: usize,
    pub include_same_file: bool,
    pub max_file_size: Option<u64>,
    pub respect_gitignore: bool,
    pub follow_symlinks: bool,
}

pub const DEFAULT_MAX_FILE_SIZE_BYTES: u64 = 10 * 1024 * 1024;

impl Default for ScanOptions {
    fn default() -> Self {
        Self {
            extensions: default_extensions(),
            ignore_dirs: default_ignore_dirs(),
            min_lines: 12,
            min_significant: 8,
            max_pairs_per_hash: 20,
            include_same_file: true,
            max_file_size: Some(DEFAULT_MAX_FILE_SIZE_BYTES),
            respect_gitignore: false,
            follow_symlinks: false,
        }
    }
}

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ScanStats {
    pub candidate_files: u64,
    pub scanned_files: u64,
    pub scanned_bytes: u64,
    pub skipped_not_found: u64,
    pub skipped_permission_denied: u64,
    pub skipped_too_large: u64,
    pub skipped_binary: u64,
    pub skipped_walk_errors: u64,
    pub skipped_bucket_truncated: u64,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScanOutcome<T> {
    pub result: T,
    pub stats: ScanStats,
}

pub fn default_extensions() -> HashSet<String> {
    ["rs"].into_iter().map(str::to_string).collect()
}

pub fn default_ignore_dirs() -> HashSet<String> {
    [
        ".git",
        ".hg",
        ".svn",
        "node_modules",
        "target",
        "dist",
        "build",
        "out",
        ".next",
        ".turbo",
        ".cache",
    ]
    .into_iter()
    .map(str::to_string)
    .collect()
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BlockLocation {
    pub file: usize,
    pub path: String,
    pub start_line: u32,
    pub end_line: u32,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DuplicateBlock {
    pub len: usize,
    pub a: BlockLocation,
    pub b: BlockLocation,
}
