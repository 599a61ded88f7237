use std::{env, io::Write, process::ExitCode};

use fraction::{
    calc,
    config::{self, DEFAULT_CONFIG_PATH},
};

fn main() -> ExitCode {
    // load environment variables from `.env` if present
    let _ = dotenv::dotenv();
    // use WARN log level by default
    // use RUST_LOG env variable to override log level
    let log_env = env_logger::Env::default().default_filter_or("warn");
    env_logger::Builder::from_env(log_env)
        .format(|buf, record| {
            let ts = buf.timestamp_seconds();
            writeln!(buf, "[{}] {}: {}", record.level(), ts, record.args())
        })
        .init();

    let config_path = match env::var("FRACTION_CONFIG").unwrap_or_default().as_str() {
        "" => DEFAULT_CONFIG_PATH.to_string(),
        path_str => path_str.to_string(),
    };
    let config = match config::load_config(&config_path) {
        Ok(config) => config,
        Err(err) => {
            log::error!("Failed to parse {config_path}: {:?}", err);
            eprintln!("Failed to parse {config_path}: {err}");
            return ExitCode::FAILURE;
        }
    };

    let args: Vec<String> = env::args().skip(1).collect();
    match calc::run(&args, &config) {
        Ok(output) => {
            println!("{output}");
            ExitCode::SUCCESS
        }
        Err(err) => {
            log::error!("Failed to evaluate {:?}: {:?}", args, err);
            eprintln!("{err}");
            ExitCode::FAILURE
        }
    }
}
