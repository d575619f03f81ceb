//! Build script for the web crate.
//!
//! Copies `static/css/main.css` to `static/css/derived/main.<hash>.css` so the
//! stylesheet URL changes whenever its content does, and exposes the hash as
//! `CSS_HASH` for the `css_hash` template filter.

use std::env;
use std::error::Error;
use std::fs;
use std::path::PathBuf;

use sha2::{Digest, Sha256};

const HASH_LEN: usize = 8;

fn main() -> Result<(), Box<dyn Error>> {
    let css_dir = PathBuf::from(env::var("CARGO_MANIFEST_DIR")?).join("static/css");
    let source = css_dir.join("main.css");
    println!("cargo:rerun-if-changed={}", source.display());

    let Ok(content) = fs::read(&source) else {
        println!("cargo:warning=main.css not found; stylesheet link will be unhashed");
        println!("cargo:rustc-env=CSS_HASH=");
        return Ok(());
    };

    let digest = format!("{:x}", Sha256::digest(&content));
    let hash = digest.get(..HASH_LEN).unwrap_or(&digest);
    println!("cargo:rustc-env=CSS_HASH={hash}");

    let derived = css_dir.join("derived");
    fs::create_dir_all(&derived)?;
    fs::write(derived.join(format!("main.{hash}.css")), &content)?;

    Ok(())
}
