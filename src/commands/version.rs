//! Version command implementation

use giturl::Result;

/// Run version command
pub fn run() -> Result<()> {
    println!("giturl {}", env!("CARGO_PKG_VERSION"));
    println!();
    println!("Build info:");
    println!("  Minimum Rust version: {}", msrv());
    println!("  Profile: {}", build_profile());

    Ok(())
}

/// `rust-version` from Cargo.toml, not the compiler that built the binary
fn msrv() -> &'static str {
    env!("CARGO_PKG_RUST_VERSION")
}

fn build_profile() -> &'static str {
    if cfg!(debug_assertions) {
        "debug"
    } else {
        "release"
    }
}
