mod cli;

fn main() {
    // Failures are reported as a single line and do not change the exit
    // status; the console output is the contract, not the status code.
    if let Err(e) = cli::run() {
        eprintln!("Conversion failed: {}", e);
    }
}
