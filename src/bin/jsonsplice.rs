fn main() {
    match jsonsplice::cli::run() {
        Ok(outcome) if outcome.is_applied() => {}
        Ok(_) => std::process::exit(1),
        Err(e) => {
            eprintln!("jsonsplice: {}", e);
            std::process::exit(2);
        }
    }
}
