use clap::Parser;
use fieldroute::app::RouteCliArguments;

fn main() {
    env_logger::init();
    log::info!("starting fieldroute at {}", chrono::Local::now().to_rfc3339());
    let args = RouteCliArguments::parse();
    match args.op.run() {
        Ok(_) => log::info!("finished."),
        Err(e) => {
            log::error!("failed running fieldroute: {e}");
            std::process::exit(1);
        }
    }
}
