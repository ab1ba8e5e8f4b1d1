use std::env;
use std::io;
use std::path::Path;

mod args;
mod json;
mod path;
mod text;

use args::ParsedArgs;

fn main() {
    let argv: Vec<String> = env::args().skip(1).collect();
    let parsed = match args::parse_args(&argv) {
        Ok(Some(parsed)) => parsed,
        Ok(None) => return,
        Err(message) => {
            eprintln!("Error: {message}\n");
            args::print_help();
            std::process::exit(2);
        }
    };

    let root = match path::resolve_path(&parsed.root) {
        Ok(p) => p,
        Err(err) => {
            eprintln!("Error: {err}");
            std::process::exit(1);
        }
    };

    match run(&parsed, &root) {
        Ok(exit_code) => std::process::exit(exit_code),
        Err(err) => {
            eprintln!("Error: {err}");
            std::process::exit(1);
        }
    }
}

fn run(parsed: &ParsedArgs, root: &Path) -> io::Result<i32> {
    let outcome = dup_block_scan_core::find_duplicate_blocks_with_stats(root, &parsed.options)?;
    let stats = outcome.stats;

    let summary = json::JsonSummary {
        files_scanned: stats.candidate_files,
        blocks_found: outcome.result.len(),
        min_lines: parsed.options.min_lines,
    };
    let blocks = json::map_blocks(outcome.result);

    if parsed.json {
        let shown: Vec<_> = blocks.into_iter().take(parsed.top).collect();
        if parsed.stats {
            json::write_json(&serde_json::json!({
                "summary": summary,
                "blocks": shown,
                "scanStats": json::JsonScanStats::from(stats.clone()),
            }))?;
        } else {
            json::write_json(&serde_json::json!({
                "summary": summary,
                "blocks": shown,
            }))?;
        }
    } else {
        print!("{}", text::format_summary(&summary));
        print!("{}", text::format_text_blocks(&blocks, parsed.top));
        if parsed.stats {
            eprint!("{}", text::format_scan_stats(&stats));
        }
    }

    if parsed.strict && text::has_fatal_skips(&stats) {
        if !parsed.stats {
            eprint!("{}", text::format_scan_stats(&stats));
        }
        return Ok(1);
    }

    Ok(0)
}
