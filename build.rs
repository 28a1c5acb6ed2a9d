use std::fs;

const FALLBACK_HOST: &str = "0.0.0.0";
const FALLBACK_PORT: i64 = 8080;

fn main() {
    println!("cargo:rerun-if-changed=Cargo.toml");

    let cargo_toml = fs::read_to_string("Cargo.toml").expect("Failed to read Cargo.toml");
    let cargo: toml::Value = cargo_toml.parse().expect("Failed to parse Cargo.toml");

    let metadata = cargo
        .get("package")
        .and_then(|pkg| pkg.get("metadata"))
        .and_then(|meta| meta.get("greetkv"));

    let host = metadata
        .and_then(|m| m.get("default_host"))
        .and_then(|v| v.as_str())
        .unwrap_or(FALLBACK_HOST);
    println!("cargo:rustc-env=GREETKV_DEFAULT_HOST={}", host);

    let port = metadata
        .and_then(|m| m.get("default_port"))
        .and_then(|v| v.as_integer())
        .filter(|p| (1..=65535).contains(p))
        .unwrap_or(FALLBACK_PORT);
    println!("cargo:rustc-env=GREETKV_DEFAULT_PORT={}", port);
}
