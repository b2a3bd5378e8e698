fn main() {
    // Capture the current timestamp as the build time
    let build_time = chrono::Utc::now().to_rfc3339();
    println!("cargo:rustc-env=BUILD_TIME={}", build_time);

    // Content variant served at `/`; unknown values are reported at runtime
    let variant = std::env::var("PORTFOLIO_VARIANT").unwrap_or_else(|_| "strategy".to_string());
    println!("cargo:rustc-env=PORTFOLIO_VARIANT={}", variant);

    println!("cargo:rerun-if-env-changed=PORTFOLIO_VARIANT");
    println!("cargo:rerun-if-changed=build.rs");
    println!("cargo:rerun-if-changed=content");
}
