use std::process::ExitCode;

use stockroom_store::StoreConfig;

fn main() -> ExitCode {
    stockroom_observability::init();

    let result = stockroom_cli::parse_actions(std::env::args().skip(1))
        .and_then(|actions| stockroom_cli::run(StoreConfig::from_env(), &actions))
        .and_then(|report| Ok(serde_json::to_string_pretty(&report)?));

    match result {
        Ok(json) => {
            println!("{json}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Error: {e:#}");
            eprintln!("{}", stockroom_cli::USAGE);
            ExitCode::FAILURE
        }
    }
}
