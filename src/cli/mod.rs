mod handlers;
pub mod parse;

use clap::Parser;
pub use parse::Cli;

use crate::{core::error::GraphError, telemetry::init_tracing};

pub fn run() -> Result<(), GraphError> {
    let cli = parse::Cli::parse();
    init_tracing(cli.debug);
    match cli.cmd {
        parse::Command::Bars(a) => handlers::bars(&a),
        parse::Command::Hist(a) => handlers::hist(&a),
        parse::Command::DemoTimeseries(a) => handlers::demo_timeseries(&a),
        parse::Command::DemoHist(a) => handlers::demo_hist(&a),
    }
}
