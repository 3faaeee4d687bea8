//! `ksortid sort`: print time-sortable IDs.

use std::io::Write;

use ksortid_core::{GeneratorConfig, IdGenerator};

pub fn run(config: &GeneratorConfig, count: usize) {
    let mut generator = IdGenerator::from_config(config);
    let id_config = config.id_config();

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    for _ in 0..count {
        let id = generator
            .sortid(&id_config)
            .unwrap_or_else(|e| super::exit_with(e));
        if writeln!(out, "{id}").is_err() {
            break; // Broken pipe
        }
    }

    log::debug!("pool stats: {:?}", generator.stats());
}
