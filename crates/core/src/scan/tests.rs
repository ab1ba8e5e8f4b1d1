use super::*;

use std::fs;
use std::io;
use std::path::PathBuf;
use std::time::{SystemTime, UNIX_EPOCH};

use crate::types::ScanOptions;

fn load(root: &std::path::Path, options: &ScanOptions) -> io::Result<(Vec<SourceFile>, ScanStats)> {
    let mut stats = ScanStats::default();
    let corpus = load_corpus(root, options, &mut stats)?;
    Ok((corpus, stats))
}

fn paths(corpus: &[SourceFile]) -> Vec<&str> {
    corpus.iter().map(|f| f.path.as_str()).collect()
}

#[test]
fn loads_files_in_sorted_path_order() -> io::Result<()> {
    let root = temp_dir("sorted");
    fs::create_dir_all(root.join("sub"))?;
    fs::write(root.join("c.rs"), "c")?;
    fs::write(root.join("a.rs"), "a")?;
    fs::write(root.join("sub").join("b.rs"), "b")?;

    let (corpus, stats) = load(&root, &ScanOptions::default())?;
    assert_eq!(paths(&corpus), vec!["a.rs", "c.rs", "sub/b.rs"]);
    assert_eq!(stats.candidate_files, 3);
    assert_eq!(stats.scanned_files, 3);
    Ok(())
}

#[test]
fn includes_only_listed_extensions() -> io::Result<()> {
    let root = temp_dir("extensions");
    fs::create_dir_all(&root)?;
    fs::write(root.join("a.rs"), "a")?;
    fs::write(root.join("b.txt"), "b")?;
    fs::write(root.join("Makefile"), "m")?;

    let (corpus, _) = load(&root, &ScanOptions::default())?;
    assert_eq!(paths(&corpus), vec!["a.rs"]);

    let options = ScanOptions {
        extensions: ["txt"].into_iter().map(str::to_string).collect(),
        ..ScanOptions::default()
    };
    let (corpus, _) = load(&root, &options)?;
    assert_eq!(paths(&corpus), vec!["b.txt"]);
    Ok(())
}

#[test]
fn excluded_dir_name_prunes_the_subtree() -> io::Result<()> {
    let root = temp_dir("prune");
    fs::create_dir_all(root.join("vendor").join("deep"))?;
    fs::write(root.join("a.rs"), "a")?;
    fs::write(root.join("vendor").join("deep").join("b.rs"), "b")?;

    let mut options = ScanOptions::default();
    let (corpus, _) = load(&root, &options)?;
    assert_eq!(paths(&corpus), vec!["a.rs", "vendor/deep/b.rs"]);

    options.ignore_dirs.insert("vendor".to_string());
    let (corpus, _) = load(&root, &options)?;
    assert_eq!(paths(&corpus), vec!["a.rs"]);
    Ok(())
}

#[test]
fn excluded_name_applies_to_the_filename_too() -> io::Result<()> {
    let root = temp_dir("file_name");
    fs::create_dir_all(&root)?;
    fs::write(root.join("a.rs"), "a")?;
    fs::write(root.join("gen.rs"), "g")?;

    let mut options = ScanOptions::default();
    options.ignore_dirs.insert("gen.rs".to_string());
    let (corpus, _) = load(&root, &options)?;
    assert_eq!(paths(&corpus), vec!["a.rs"]);
    Ok(())
}

#[test]
fn normalizes_and_flags_lines_on_load() -> io::Result<()> {
    let root = temp_dir("normalize");
    fs::create_dir_all(&root)?;
    fs::write(root.join("a.rs"), "  fn   main( ) {  \n}\n")?;

    let (corpus, _) = load(&root, &ScanOptions::default())?;
    assert_eq!(corpus.len(), 1);
    assert_eq!(corpus[0].lines, vec!["fn main( ) {", "}"]);
    assert_eq!(corpus[0].significant, vec![true, false]);
    Ok(())
}

#[test]
fn lossy_decoding_keeps_files_with_invalid_utf8() -> io::Result<()> {
    let root = temp_dir("lossy");
    fs::create_dir_all(&root)?;
    fs::write(root.join("a.rs"), b"let x = 1;\xFF\xFE\nlet y = 2;")?;

    let (corpus, stats) = load(&root, &ScanOptions::default())?;
    assert_eq!(corpus.len(), 1);
    assert_eq!(corpus[0].lines.len(), 2);
    assert_eq!(stats.scanned_files, 1);
    Ok(())
}

#[test]
fn nul_bytes_mark_a_file_as_binary() -> io::Result<()> {
    let root = temp_dir("binary");
    fs::create_dir_all(&root)?;
    fs::write(root.join("a.rs"), "let x = 1;")?;
    fs::write(root.join("b.rs"), b"let x = 1;\x00junk")?;

    let (corpus, stats) = load(&root, &ScanOptions::default())?;
    assert_eq!(paths(&corpus), vec!["a.rs"]);
    assert_eq!(stats.candidate_files, 2);
    assert_eq!(stats.skipped_binary, 1);
    Ok(())
}

#[test]
fn oversized_files_are_skipped() -> io::Result<()> {
    let root = temp_dir("oversized");
    fs::create_dir_all(&root)?;
    fs::write(root.join("a.rs"), "let x = 1;")?;
    fs::write(root.join("b.rs"), "x".repeat(64))?;

    let options = ScanOptions {
        max_file_size: Some(32),
        ..ScanOptions::default()
    };
    let (corpus, stats) = load(&root, &options)?;
    assert_eq!(paths(&corpus), vec!["a.rs"]);
    assert_eq!(stats.skipped_too_large, 1);
    Ok(())
}

#[test]
fn gitignore_applies_only_when_enabled() -> io::Result<()> {
    let root = temp_dir("gitignore");
    fs::create_dir_all(&root)?;
    fs::write(root.join(".gitignore"), "ignored.rs\n")?;
    fs::write(root.join("a.rs"), "a")?;
    fs::write(root.join("ignored.rs"), "i")?;

    let (corpus, _) = load(&root, &ScanOptions::default())?;
    assert_eq!(paths(&corpus), vec!["a.rs", "ignored.rs"]);

    let options = ScanOptions {
        respect_gitignore: true,
        ..ScanOptions::default()
    };
    let (corpus, _) = load(&root, &options)?;
    assert_eq!(paths(&corpus), vec!["a.rs"]);
    Ok(())
}

#[test]
fn symlinked_files_are_skipped_by_default() -> io::Result<()> {
    #[cfg(unix)]
    {
        let root = temp_dir("symlinks");
        fs::create_dir_all(&root)?;
        fs::write(root.join("a.rs"), "a")?;
        std::os::unix::fs::symlink(root.join("a.rs"), root.join("b.rs"))?;

        let (corpus, _) = load(&root, &ScanOptions::default())?;
        assert_eq!(paths(&corpus), vec!["a.rs"]);

        let options = ScanOptions {
            follow_symlinks: true,
            ..ScanOptions::default()
        };
        let (corpus, _) = load(&root, &options)?;
        assert_eq!(paths(&corpus), vec!["a.rs", "b.rs"]);
    }
    Ok(())
}

#[test]
fn validate_root_rejects_missing_and_non_directory_roots() -> io::Result<()> {
    let root = temp_dir("validate");
    fs::create_dir_all(&root)?;

    let missing = root.join("missing");
    let err = validate_root(&missing).expect_err("missing root should fail");
    assert_eq!(err.kind(), io::ErrorKind::NotFound);

    let file = root.join("file.rs");
    fs::write(&file, "x")?;
    let err = validate_root(&file).expect_err("file root should fail");
    assert_eq!(err.kind(), io::ErrorKind::InvalidInput);

    assert!(validate_root(&root).is_ok());
    Ok(())
}

fn temp_dir(suffix: &str) -> PathBuf {
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .expect("clock should be monotonic")
        .as_nanos();
    std::env::temp_dir().join(format!("dup-block-scan-core-scan-{suffix}-{nanos}"))
}
