use std::fs;
use std::io;
use std::path::Path;

use crate::normalize::normalize_line;
use crate::types::{ScanOptions, ScanStats};

pub(crate) fn read_source_lines(
    path: &Path,
    options: &ScanOptions,
    stats: &mut ScanStats,
) -> Option<Vec<String>> {
    if let Some(max_file_size) = options.max_file_size {
        let metadata = match fs::metadata(path) {
            Ok(m) => m,
            Err(err) if err.kind() == io::ErrorKind::NotFound => {
                stats.skipped_not_found = stats.skipped_not_found.saturating_add(1);
                return None;
            }
            Err(err) if err.kind() == io::ErrorKind::PermissionDenied => {
                stats.skipped_permission_denied =
                    stats.skipped_permission_denied.saturating_add(1);
                return None;
            }
            Err(_) => {
                stats.skipped_walk_errors = stats.skipped_walk_errors.saturating_add(1);
                return None;
            }
        };
        if metadata.len() > max_file_size {
            stats.skipped_too_large = stats.skipped_too_large.saturating_add(1);
            return None;
        }
    }

    let bytes = match fs::read(path) {
        Ok(b) => b,
        Err(err) if err.kind() == io::ErrorKind::NotFound => {
            stats.skipped_not_found = stats.skipped_not_found.saturating_add(1);
            return None;
        }
        Err(err) if err.kind() == io::ErrorKind::PermissionDenied => {
            stats.skipped_permission_denied = stats.skipped_permission_denied.saturating_add(1);
            return None;
        }
        Err(_) => {
            stats.skipped_walk_errors = stats.skipped_walk_errors.saturating_add(1);
            return None;
        }
    };
    if bytes.contains(&0) {
        stats.skipped_binary = stats.skipped_binary.saturating_add(1);
        return None;
    }

    stats.scanned_files = stats.scanned_files.saturating_add(1);
    stats.scanned_bytes = stats.scanned_bytes.saturating_add(bytes.len() as u64);

    // Decoding is lossy on purpose: undecodable bytes are replaced, never fatal.
    let text = String::from_utf8_lossy(&bytes);
    Some(text.lines().map(normalize_line).collect())
}
