// Build script for discord-social-ffi
//
// With the `reference-native` feature (used by this crate's tests) the
// Discord_* symbols are defined by this crate and nothing is linked.
// Otherwise the vendor library is linked from DISCORD_SOCIAL_SDK_DIR (or the
// default linker search path).
//
// cbindgen does not pick up functions marked #[unsafe(no_mangle)], so only the
// boundary types are emitted. To regenerate them:
//   DISCORD_SOCIAL_GEN_HEADER=1 cargo build
// which writes include/discord_social_types.h.

use std::env;
use std::path::PathBuf;

fn main() {
    println!("cargo:rerun-if-changed=src/sys.rs");
    println!("cargo:rerun-if-env-changed=DISCORD_SOCIAL_SDK_DIR");
    println!("cargo:rerun-if-env-changed=DISCORD_SOCIAL_GEN_HEADER");

    if env::var_os("CARGO_FEATURE_REFERENCE_NATIVE").is_none() {
        if let Some(dir) = env::var_os("DISCORD_SOCIAL_SDK_DIR") {
            println!("cargo:rustc-link-search=native={}", PathBuf::from(dir).display());
        }
        println!("cargo:rustc-link-lib=dylib=discord_partner_sdk");
    }

    if env::var_os("DISCORD_SOCIAL_GEN_HEADER").is_some() {
        generate_types_header();
    }
}

fn generate_types_header() {
    let crate_dir = match env::var("CARGO_MANIFEST_DIR") {
        Ok(dir) => PathBuf::from(dir),
        Err(_) => return,
    };
    let out = crate_dir.join("include").join("discord_social_types.h");

    match cbindgen::Builder::new()
        .with_crate(&crate_dir)
        .with_language(cbindgen::Language::C)
        .with_include_guard("DISCORD_SOCIAL_TYPES_H")
        .generate()
    {
        Ok(bindings) => {
            if let Some(parent) = out.parent() {
                let _ = std::fs::create_dir_all(parent);
            }
            bindings.write_to_file(&out);
        }
        Err(e) => println!("cargo:warning=cbindgen header generation failed: {e}"),
    }
}
