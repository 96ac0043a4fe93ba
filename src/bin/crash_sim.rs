use clap::Parser;
use crash_sim::simulation::config::{CommandLineArgs, Config};
use crash_sim::simulation::controller::LocalControllerBuilder;
use crash_sim::simulation::logging::init_std_out_logging_thread_local;
use crash_sim::simulation::scenario::Scenario;
use tracing::info;

fn main() {
    let _guard = init_std_out_logging_thread_local();

    let args = CommandLineArgs::parse();
    info!("Started with args: {:?}", args);

    let config = Config::from_args(&args).unwrap_or_else(|e| panic!("{e}"));
    let scenario = Scenario::load(&config).unwrap_or_else(|e| panic!("{e}"));

    let controller = LocalControllerBuilder::default()
        .scenario(scenario)
        .build()
        .unwrap();

    controller.run();
}
