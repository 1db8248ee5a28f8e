mod cli;
mod dir;
mod logging;
mod tests;

use std::path::PathBuf;

use libgm::{
    gamemaker::{data::GMData, deserialize::read_data_file},
    prelude::*,
};

use crate::tests::Test;

fn run(mut args: cli::Args) -> Result<()> {
    // If no file was specified, try to load `data.win`.
    // This is very useful for standard IDEs which run the binary with no arguments.
    if args.files.is_empty() {
        args.files = vec![PathBuf::from("data.win")];
    }

    let tests: Vec<Test> = tests::deduplicate(args.tests);
    let files: Vec<PathBuf> = dir::get_data_files(&args.files)?;

    for data_file in files {
        log::info!("Parsing data file {}", data_file.display());
        let data: GMData = read_data_file(data_file)?;

        tests::perform(&data, &tests)?;

        for code_name in &args.codes {
            let code = data.codes.by_name(code_name)?;
            println!("===== {code_name} =====");
            for instruction in &code.instructions {
                println!("{instruction:?}");
            }
            println!();
        }
    }

    Ok(())
}

fn main() {
    logging::init();
    let args = cli::parse();

    if let Err(error) = run(args) {
        let chain_fn = if cfg!(target_os = "windows") {
            // Windows usually can't display these arrows correctly
            Error::chain
        } else {
            Error::chain_pretty
        };
        log::error!("{}", chain_fn(&error));
        std::process::exit(1);
    }

    log::info!("Done");
}
