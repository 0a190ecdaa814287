use std::process;

fn main() {
    if let Err(err) = nerstat::run() {
        eprintln!("Error: {err}");
        process::exit(1);
    }
}
