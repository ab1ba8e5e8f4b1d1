use std::collections::HashMap;

use crate::scan::SourceFile;

#[derive(Debug, Clone, Copy)]
pub(crate) struct WindowOcc {
    pub(crate) file: usize,
    pub(crate) start: usize,
}

pub(crate) type DigestBuckets = HashMap<[u8; 32], Vec<WindowOcc>>;

pub(crate) fn build_digest_buckets(
    corpus: &[SourceFile],
    min_lines: usize,
    min_significant: usize,
) -> DigestBuckets {
    let mut buckets: DigestBuckets = HashMap::new();

    for (file, source) in corpus.iter().enumerate() {
        let total = source.lines.len();
        if total < min_lines {
            continue;
        }

        // prefix[i] = number of significant lines among the first i lines.
        let mut prefix = Vec::with_capacity(total + 1);
        let mut acc = 0usize;
        prefix.push(acc);
        for &flag in &source.significant {
            acc += usize::from(flag);
            prefix.push(acc);
        }

        for start in 0..=total - min_lines {
            let significant = prefix[start + min_lines] - prefix[start];
            if significant < min_significant {
                continue;
            }
            let digest = window_digest(&source.lines[start..start + min_lines]);
            buckets
                .entry(digest)
                .or_default()
                .push(WindowOcc { file, start });
        }
    }

    buckets
}

// Digest of the newline-joined window text, without materializing the join.
fn window_digest(lines: &[String]) -> [u8; 32] {
    let mut hasher = blake3::Hasher::new();
    for (idx, line) in lines.iter().enumerate() {
        if idx > 0 {
            hasher.update(b"\n");
        }
        hasher.update(line.as_bytes());
    }
    *hasher.finalize().as_bytes()
}
