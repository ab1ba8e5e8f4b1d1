use std::io;

use dup_block_scan_core::{DuplicateBlock, ScanStats};
use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct JsonScanStats {
    pub(crate) candidate_files: u64,
    pub(crate) scanned_files: u64,
    pub(crate) scanned_bytes: u64,
    pub(crate) skipped_not_found: u64,
    pub(crate) skipped_permission_denied: u64,
    pub(crate) skipped_too_large: u64,
    pub(crate) skipped_binary: u64,
    pub(crate) skipped_walk_errors: u64,
    pub(crate) skipped_bucket_truncated: u64,
}

impl From<ScanStats> for JsonScanStats {
    fn from(stats: ScanStats) -> Self {
        Self {
            candidate_files: stats.candidate_files,
            scanned_files: stats.scanned_files,
            scanned_bytes: stats.scanned_bytes,
            skipped_not_found: stats.skipped_not_found,
            skipped_permission_denied: stats.skipped_permission_denied,
            skipped_too_large: stats.skipped_too_large,
            skipped_binary: stats.skipped_binary,
            skipped_walk_errors: stats.skipped_walk_errors,
            skipped_bucket_truncated: stats.skipped_bucket_truncated,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct JsonBlockLocation {
    pub(crate) file: usize,
    pub(crate) path: String,
    pub(crate) start_line: u32,
    pub(crate) end_line: u32,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct JsonDuplicateBlock {
    pub(crate) len: usize,
    pub(crate) a: JsonBlockLocation,
    pub(crate) b: JsonBlockLocation,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct JsonSummary {
    pub(crate) files_scanned: u64,
    pub(crate) blocks_found: usize,
    pub(crate) min_lines: usize,
}

pub(crate) fn map_blocks(blocks: Vec<DuplicateBlock>) -> Vec<JsonDuplicateBlock> {
    blocks
        .into_iter()
        .map(|block| JsonDuplicateBlock {
            len: block.len,
            a: JsonBlockLocation {
                file: block.a.file,
                path: block.a.path,
                start_line: block.a.start_line,
                end_line: block.a.end_line,
            },
            b: JsonBlockLocation {
                file: block.b.file,
                path: block.b.path,
                start_line: block.b.start_line,
                end_line: block.b.end_line,
            },
        })
        .collect()
}

pub(crate) fn write_json<T: Serialize>(value: &T) -> io::Result<()> {
    let json = serde_json::to_string_pretty(value)
        .map_err(|e| io::Error::other(format!("json encode: {e}")))?;
    println!("{json}");
    Ok(())
}
