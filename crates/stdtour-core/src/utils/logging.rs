pub fn print_verbose(verbose: bool, msg: &str) {
    if verbose {
        println!("Verbose: {}", msg);
    }
}

/// Like [`print_verbose`] but on stderr, for commands whose stdout is data
pub fn eprint_verbose(verbose: bool, msg: &str) {
    if verbose {
        eprintln!("Verbose: {}", msg);
    }
}

/// Diagnostic line on stderr
pub fn log_error(msg: &str) {
    eprintln!("Error: {}", msg);
}
