// tonecode - note table + sheet music -> buzzer tone line

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"))
        .target(env_logger::Target::Stderr)
        .init();

    let stdout = std::io::stdout();
    let stderr = std::io::stderr();
    let code = tonecode_lib::cli::run(
        std::env::args_os(),
        &mut stdout.lock(),
        &mut stderr.lock(),
    );

    std::process::exit(code);
}
