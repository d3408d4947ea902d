// File: crates/scatter-core/build.rs
// Summary: Links the Windows system libraries Skia/ICU expect when rendering.

fn main() {
    #[cfg(target_os = "windows")]
    {
        // Skia's font manager reads the registry (RegOpenKeyExW, RegQueryInfoKeyW, ...).
        println!("cargo:rustc-link-lib=advapi32");
    }
}
