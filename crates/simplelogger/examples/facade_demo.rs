//! Walk through the facade's calls
//!
//! Run with:
//! ```bash
//! cargo run -p simplelogger --example facade_demo -- warn /tmp/facade_demo.log
//! ```

use simplelogger::{
    debugf, errorf, infof, log_error, parse_level, set_level, set_output, trace_error, warnf, LogConfig,
};

fn main() {
    let mut args = std::env::args().skip(1);
    let level = args.next().unwrap_or_else(|| "debug".to_string());
    let output = args.next();

    if let Err(err) = simplelogger::init(LogConfig::default()) {
        eprintln!("Error: {}", err);
        std::process::exit(1);
    }

    debugf!("starting with default configuration");
    set_level(parse_level(&level));
    infof!("level set to {}", level);

    if let Some(path) = output {
        if let Err(err) = set_output(["stderr".to_string(), path]) {
            errorf!("cannot switch outputs: {}", err);
            std::process::exit(1);
        }
    }

    warnf!("queue depth {} over limit {}", 120, 100);
    log_error!("request ", 42, " failed");
    trace_error!("unexpected state: {:?}", Some("half-open"));

    if let Err(err) = simplelogger::global().sync() {
        eprintln!("Error: {}", err);
    }
}
