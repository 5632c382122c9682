// Chunk: docs/chunks/appkit_shell - NSTextView window, menu bar, native dialogs

fn main() {
    // Link macOS frameworks required by the AppKit shell
    if std::env::var("CARGO_CFG_TARGET_OS").as_deref() == Ok("macos") {
        println!("cargo:rustc-link-lib=framework=AppKit");
        println!("cargo:rustc-link-lib=framework=Foundation");
    }

    // Ensure we rebuild if build.rs changes
    println!("cargo:rerun-if-changed=build.rs");
}
