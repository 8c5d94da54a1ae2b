// When building with desktop on Linux, check for libxdo and give a clear
// error instead of a linker failure.

fn main() {
    let is_desktop = std::env::var("CARGO_FEATURE_DESKTOP").is_ok();
    let is_linux = std::env::var("CARGO_CFG_TARGET_OS").as_deref() == Ok("linux");
    if is_desktop && is_linux && !libxdo_present() {
        eprintln!();
        eprintln!("  error: the desktop feature on Linux requires libxdo.");
        eprintln!();
        eprintln!("  Install the development package, then run again:");
        eprintln!("    Debian/Ubuntu: sudo apt install libxdo-dev");
        eprintln!("    Fedora/RHEL:   sudo dnf install libxdo-devel");
        eprintln!();
        eprintln!("  Then: cargo run --features desktop");
        eprintln!();
        std::process::exit(1);
    }
}

fn libxdo_present() -> bool {
    // pkg-config is the cleanest check; libxdo may ship without a .pc
    // file, so fall back to the loader cache.
    std::process::Command::new("pkg-config")
        .args(["--exists", "libxdo"])
        .status()
        .map(|s| s.success())
        .unwrap_or_else(|_| {
            std::process::Command::new("ldconfig")
                .args(["-p"])
                .output()
                .map(|o| String::from_utf8_lossy(&o.stdout).contains("libxdo"))
                .unwrap_or(false)
        })
}
