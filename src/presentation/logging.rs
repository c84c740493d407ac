//! Diagnostic logging setup

use crate::config::Verbosity;

/// Install the stderr `fmt` subscriber. Repeated calls are ignored.
pub fn init(verbosity: Verbosity, verbose_flags: u8) {
    let effective = verbosity.bumped(verbose_flags);
    let debug = effective == Verbosity::Debug;

    let _ = tracing_subscriber::fmt()
        .with_max_level(effective.max_level(verbose_flags))
        .with_target(debug)
        .with_file(debug)
        .with_line_number(debug)
        .with_writer(std::io::stderr)
        .try_init();
}
