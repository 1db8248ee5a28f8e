use clap::ValueEnum;
use libgm::{gamemaker::data::GMData, prelude::*};

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Test {
    All,
    NameValidation,
}

const ALL_TESTS: &[Test] = &[Test::NameValidation];

pub fn deduplicate(mut tests: Vec<Test>) -> Vec<Test> {
    if tests.contains(&Test::All) {
        return ALL_TESTS.to_vec();
    }
    tests.dedup();
    tests
}

pub fn perform(data: &GMData, tests: &[Test]) -> Result<()> {
    if tests.is_empty() {
        return Ok(());
    }

    println!();

    for test in tests {
        match test {
            Test::All => perform(data, ALL_TESTS)?,
            Test::NameValidation => {
                log::info!("Performing Name Validation Test");
                data.validate_names()?;
            },
        }
    }
    Ok(())
}
