use std::env;

fn main() {
    println!("cargo:rerun-if-env-changed=ZBAR_LIB_DIR");

    // Only the `native` engine talks to libzbar; the rest of the crate
    // builds without it.
    if env::var_os("CARGO_FEATURE_NATIVE").is_none() {
        return;
    }

    if let Some(dir) = env::var_os("ZBAR_LIB_DIR") {
        println!("cargo:rustc-link-search=native={}", dir.to_string_lossy());
    }
    println!("cargo:rustc-link-lib=zbar");
}
