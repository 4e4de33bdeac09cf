use std::env;

fn main() {
    let version =
        env::var("CLEANER_VERSION").unwrap_or_else(|_| env::var("CARGO_PKG_VERSION").unwrap());
    println!("cargo:rerun-if-env-changed=CLEANER_VERSION");
    println!("cargo:rustc-env=CLEANER_VERSION={version}");
}
