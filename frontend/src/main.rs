//! Entry point for the WASM application

pub fn main() {
    clipload_web::mount();
}
