// src/main.rs
fn main() {
    if let Err(e) = car_report::app::run() {
        eprintln!("[error] {e:#}");
        std::process::exit(1);
    }
}
