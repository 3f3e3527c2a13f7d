//! Binary entrypoint for the browser-hosted component showcase.

#[cfg(all(target_arch = "wasm32", feature = "csr"))]
fn main() {
    showcase::mount();
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    eprintln!(
        "This binary is intended for the browser/WASM workflow. Build `showcase_app` for wasm32 with the `csr` feature (e.g. via trunk)."
    );
}
