use std::path::PathBuf;

use dup_block_scan_core::ScanOptions;

const HELP_TEXT: &str = concat!(
    "dup-block-scan (longest duplicated line blocks across a source tree)\n",
    "\n",
    "Usage:\n",
    "  dup-block-scan [options] [root]\n",
    "\n",
    "Options:\n",
    "  --ext <name>             File extension to include, without the dot (repeatable; default: rs)\n",
    "  --exclude-dir <name>     Add an excluded directory name (repeatable)\n",
    "  --min-lines <n>          Minimum lines in a duplicate block (default: 12)\n",
    "  --min-significant <n>    Minimum significant lines per window (default: 8)\n",
    "  --max-pairs-per-hash <n> Max pair comparisons per hash bucket (default: 20)\n",
    "  --top <n>                Number of results to show (default: 30)\n",
    "  --exclude-same-file      Exclude duplicates within the same file\n",
    "  --max-file-size <n>      Skip files larger than n bytes (default: 10485760)\n",
    "  --gitignore              Respect .gitignore rules (default: off)\n",
    "  --follow-symlinks        Follow symlinks under the root (default: off)\n",
    "  --json                   Output JSON\n",
    "  --stats                  Include scan stats (JSON) or print to stderr\n",
    "  --strict                 Exit non-zero if scan was incomplete\n",
    "  -V, --version            Show version\n",
    "  -h, --help               Show help\n",
    "\n",
    "Examples:\n",
    "  dup-block-scan .\n",
    "  dup-block-scan --ext rs --ext toml --min-lines 8 crates\n",
    "  dup-block-scan --exclude-dir vendor --exclude-dir .venv .\n",
    "\n"
);

pub(crate) fn print_help() {
    print!("{HELP_TEXT}");
}

#[derive(Debug, Clone)]
pub(crate) struct ParsedArgs {
    pub(crate) json: bool,
    pub(crate) stats: bool,
    pub(crate) strict: bool,
    pub(crate) top: usize,
    pub(crate) root: PathBuf,
    pub(crate) options: ScanOptions,
}

fn parse_u64(name: &str, raw: &str) -> Result<u64, String> {
    raw.parse::<u64>()
        .map_err(|_| format!("{name} must be an integer"))
}

fn parse_u32_in_range(name: &str, raw: &str, min: u32, max: u32) -> Result<u32, String> {
    let value = raw
        .parse::<u32>()
        .map_err(|_| format!("{name} must be an integer"))?;
    if !(min..=max).contains(&value) {
        return Err(format!("{name} must be {min}..{max}"));
    }
    Ok(value)
}

pub(crate) fn parse_args(argv: &[String]) -> Result<Option<ParsedArgs>, String> {
    let mut roots: Vec<PathBuf> = Vec::new();
    let mut extensions: Vec<String> = Vec::new();
    let mut exclude_dirs: Vec<String> = Vec::new();
    let mut json = false;
    let mut stats = false;
    let mut strict = false;
    let mut include_same_file = true;
    let mut respect_gitignore = false;
    let mut follow_symlinks = false;
    let mut min_lines: Option<usize> = None;
    let mut min_significant: Option<usize> = None;
    let mut max_pairs_per_hash: Option<usize> = None;
    let mut top: Option<usize> = None;
    let mut max_file_size: Option<u64> = None;

    let mut i = 0;
    while i < argv.len() {
        let arg = &argv[i];
        if arg == "--" {
            roots.extend(argv[(i + 1)..].iter().map(PathBuf::from));
            break;
        }
        if arg == "--json" {
            json = true;
            i += 1;
            continue;
        }
        if arg == "--stats" {
            stats = true;
            i += 1;
            continue;
        }
        if arg == "--strict" {
            strict = true;
            i += 1;
            continue;
        }
        if arg == "--exclude-same-file" {
            include_same_file = false;
            i += 1;
            continue;
        }
        if arg == "--gitignore" {
            respect_gitignore = true;
            i += 1;
            continue;
        }
        if arg == "--follow-symlinks" {
            follow_symlinks = true;
            i += 1;
            continue;
        }
        if arg == "--ext" {
            let value = argv.get(i + 1).ok_or("--ext requires a value")?;
            extensions.push(value.trim_start_matches('.').to_string());
            i += 2;
            continue;
        }
        if arg == "--exclude-dir" {
            let value = argv.get(i + 1).ok_or("--exclude-dir requires a value")?;
            exclude_dirs.push(value.to_string());
            i += 2;
            continue;
        }
        if arg == "--min-lines" {
            let raw = argv.get(i + 1).ok_or("--min-lines requires a value")?;
            let value = parse_u32_in_range("--min-lines", raw, 1, u32::MAX)?;
            min_lines = Some(value as usize);
            i += 2;
            continue;
        }
        if arg == "--min-significant" {
            let raw = argv.get(i + 1).ok_or("--min-significant requires a value")?;
            let value = parse_u32_in_range("--min-significant", raw, 0, u32::MAX)?;
            min_significant = Some(value as usize);
            i += 2;
            continue;
        }
        if arg == "--max-pairs-per-hash" {
            let raw = argv
                .get(i + 1)
                .ok_or("--max-pairs-per-hash requires a value")?;
            let value = parse_u32_in_range("--max-pairs-per-hash", raw, 1, u32::MAX)?;
            max_pairs_per_hash = Some(value as usize);
            i += 2;
            continue;
        }
        if arg == "--top" {
            let raw = argv.get(i + 1).ok_or("--top requires a value")?;
            let value = parse_u32_in_range("--top", raw, 0, u32::MAX)?;
            top = Some(value as usize);
            i += 2;
            continue;
        }
        if arg == "--max-file-size" {
            let raw = argv.get(i + 1).ok_or("--max-file-size requires a value")?;
            let value = parse_u64("--max-file-size", raw)?;
            max_file_size = Some(value);
            i += 2;
            continue;
        }
        if arg == "-V" || arg == "--version" {
            println!("dup-block-scan {}", env!("CARGO_PKG_VERSION"));
            return Ok(None);
        }
        if arg == "-h" || arg == "--help" {
            print_help();
            return Ok(None);
        }
        if arg.starts_with('-') {
            return Err(format!("Unknown option: {arg}"));
        }
        roots.push(PathBuf::from(arg));
        i += 1;
    }

    if roots.len() > 1 {
        return Err(format!(
            "expected at most one root, got {}",
            roots.len()
        ));
    }
    let root = roots.pop().unwrap_or_else(|| PathBuf::from("."));

    let mut options = ScanOptions::default();
    if !extensions.is_empty() {
        options.extensions = extensions.into_iter().collect();
    }
    options.ignore_dirs.extend(exclude_dirs);
    options.include_same_file = include_same_file;
    options.respect_gitignore = respect_gitignore;
    options.follow_symlinks = follow_symlinks;
    if let Some(min_lines) = min_lines {
        options.min_lines = min_lines;
    }
    if let Some(min_significant) = min_significant {
        options.min_significant = min_significant;
    }
    if let Some(max_pairs_per_hash) = max_pairs_per_hash {
        options.max_pairs_per_hash = max_pairs_per_hash;
    }
    if let Some(max_file_size) = max_file_size {
        options.max_file_size = Some(max_file_size);
    }

    Ok(Some(ParsedArgs {
        json,
        stats,
        strict,
        top: top.unwrap_or(30),
        root,
        options,
    }))
}
