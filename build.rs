//! Puts `memory.x` on the linker search path for the RP2350 firmware.
//!
//! The linker scripts themselves (`link.x`, `defmt.x`) are passed from
//! `.cargo/config.toml` for ARM targets only, so host test builds are unaffected.

use std::env;
use std::fs;
use std::path::PathBuf;

fn main() {
    let out = PathBuf::from(env::var_os("OUT_DIR").unwrap());
    fs::write(out.join("memory.x"), include_bytes!("memory.x")).unwrap();
    println!("cargo:rustc-link-search={}", out.display());

    println!("cargo:rerun-if-changed=memory.x");
    println!("cargo:rerun-if-changed=build.rs");
}
