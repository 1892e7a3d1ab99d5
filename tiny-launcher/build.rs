const VARIANT_ENV: &str = "TINY_LAUNCHER_VARIANT";

fn main() {
    println!("cargo:rerun-if-env-changed={VARIANT_ENV}");

    if let Ok(variant) = std::env::var(VARIANT_ENV) {
        assert!(
            matches!(variant.as_str(), "new-instance" | "current-session"),
            "{VARIANT_ENV} must be either 'new-instance' or 'current-session', got '{variant}'"
        );
    }
}
