fn main() {
    if let Err(err) = mindlayout::run() {
        eprintln!("error: {err:#}");
        std::process::exit(1);
    }
}
