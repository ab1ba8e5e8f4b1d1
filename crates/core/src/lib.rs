mod blocks;
mod detect;
mod normalize;
mod scan;
mod types;

pub use blocks::{find_duplicate_blocks, find_duplicate_blocks_with_stats};

pub use types::{
    BlockLocation, DEFAULT_MAX_FILE_SIZE_BYTES, DuplicateBlock, ScanOptions, ScanOutcome,
    ScanStats, default_extensions, default_ignore_dirs,
};
