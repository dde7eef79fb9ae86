use create_dib_app::{
    cli::{get_args, get_log_level_from_verbose, run},
    constants::exit_codes,
    error::default_error_handler,
    interrupt,
};

fn main() {
    let args = get_args();
    env_logger::Builder::new()
        .filter_level(get_log_level_from_verbose(args.verbose))
        .init();
    interrupt::install_handler();

    // Cancellation and success both end with a zero exit code.
    if let Err(err) = run(args) {
        default_error_handler(err);
    }
    std::process::exit(exit_codes::SUCCESS);
}
