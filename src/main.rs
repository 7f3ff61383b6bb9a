#[cfg(target_arch = "wasm32")]
fn main() {
    court_map::run();
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    eprintln!("court-map runs in the browser: build it with `trunk serve` (wasm32-unknown-unknown).");
}
