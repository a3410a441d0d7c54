// File: crates/xyplot-core/build.rs
// Summary: Build script linking the Windows system libraries Skia text layout (ICU) needs.

fn main() {
    #[cfg(target_os = "windows")]
    {
        // Needed for RegOpenKeyExW, RegQueryInfoKeyW, etc.
        println!("cargo:rustc-link-lib=advapi32");
    }
}
