use salesperf_cli::{Command, config::USAGE};

fn main() {
    let command = match Command::parse(std::env::args().skip(1), |key| std::env::var(key).ok()) {
        Ok(command) => command,
        Err(err) => {
            eprintln!("{err:#}");
            std::process::exit(2);
        }
    };

    let config = match command {
        Command::Help => {
            println!("{USAGE}");
            return;
        }
        Command::Run(config) => config,
    };

    salesperf_observability::init(config.log_format);

    match salesperf_cli::run(&config) {
        Ok(rendered) => println!("{rendered}"),
        Err(err) => {
            tracing::error!(error = %format!("{err:#}"), "report failed");
            eprintln!("error: {err:#}");
            std::process::exit(1);
        }
    }
}
