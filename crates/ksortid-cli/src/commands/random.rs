//! `ksortid random`: print purely random IDs.

use std::io::Write;

use ksortid_core::{GeneratorConfig, IdGenerator};

pub fn run(config: &GeneratorConfig, count: usize) {
    let mut generator = IdGenerator::from_config(config);

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    for _ in 0..count {
        if writeln!(out, "{}", generator.randomid(config.random_length)).is_err() {
            break; // Broken pipe
        }
    }

    log::debug!("pool stats: {:?}", generator.stats());
}
