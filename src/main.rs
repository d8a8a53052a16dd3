use clap::Parser;
use snafu::ErrorCompat;

mod args;
mod rcv;

use args::Args;

fn main() {
    let args = Args::parse();

    if args.verbose {
        env_logger::Builder::from_default_env()
            .filter_level(log::LevelFilter::Debug)
            .init();
    } else {
        env_logger::init();
    }

    let res = rcv::run_election(
        args.config,
        args.reference,
        args.input,
        args.out,
        false,
        args.input_type,
        args.choices,
        args.excel_worksheet_name,
    );

    if let Err(e) = res {
        eprintln!("An error occurred: {:?}", e);
        if let Some(bt) = ErrorCompat::backtrace(&e) {
            eprintln!("trace: {}", bt);
        }
        std::process::exit(1);
    }
}
