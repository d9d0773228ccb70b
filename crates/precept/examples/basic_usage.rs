//! Basic guard usage: validate arguments at function entry and get the
//! values back for inline use.
//!
//! Run with: `cargo run --example basic_usage`

use precept::prelude::*;

#[derive(Debug)]
struct Upload {
    name: String,
    chunk_size: usize,
    parts: Vec<Vec<u8>>,
}

fn start_upload(name: Option<String>, chunk_size: usize, parts: Vec<Vec<u8>>) -> GuardResult<Upload> {
    let name = not_null_or_white_space(name, Some("name"))?;
    let chunk_size = in_range(chunk_size, 1024, 8 * 1024 * 1024, Some("chunk_size"))?;
    let parts = not_empty(parts, Some("parts"))?;
    required_that(
        parts.iter().all(|p| p.len() <= chunk_size),
        Some("Every part must fit in one chunk."),
    )?;

    Ok(Upload { name, chunk_size, parts })
}

fn main() {
    let ok = start_upload(Some("report.pdf".into()), 64 * 1024, vec![vec![0_u8; 512]]);
    println!("accepted: {:?}", ok.map(|u| (u.name, u.chunk_size, u.parts.len())));

    for (label, result) in [
        ("absent name", start_upload(None, 64 * 1024, vec![vec![0]])),
        ("whitespace name", start_upload(Some("  ".into()), 64 * 1024, vec![vec![0]])),
        ("tiny chunk_size", start_upload(Some("a".into()), 16, vec![vec![0]])),
        ("no parts", start_upload(Some("a".into()), 64 * 1024, vec![])),
    ] {
        println!("{label}: {}", result.unwrap_err());
    }
}
