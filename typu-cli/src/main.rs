//! Binary entrypoint for typu-cli (made by FontLab https://www.fontlab.com/)

fn main() {
    if let Err(err) = typu_cli::run() {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}
