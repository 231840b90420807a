// File: crates/seagrid-render-skia/build.rs
// Summary: Links the Windows registry API that the prebuilt Skia binaries expect.

fn main() {
    println!("cargo:rerun-if-changed=build.rs");
    if std::env::var("CARGO_CFG_TARGET_OS").as_deref() == Ok("windows") {
        println!("cargo:rustc-link-lib=advapi32");
    }
}
