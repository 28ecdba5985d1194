//! qthloc-cli
//! ==========
//!
//! Command-line interface for the `qthloc-core` locator toolkit.
//!
//! The binary (`qthloc`) is the primary deliverable; this library target
//! holds the logging setup shared by it.
//!
//! Basic usage:
//!
//! ```text
//! qthloc decode JO62qm
//! qthloc distance JO62 JN88
//! qthloc --cities worldcities.csv query --my JO62 JN88
//! qthloc --cities worldcities.csv nearest JN88 --min-pop 1000000
//! ```
#![cfg_attr(docsrs, feature(doc_cfg))]

use tracing_subscriber::EnvFilter;

/// Install a stderr subscriber. `RUST_LOG` wins over `verbosity`.
pub fn init_logging(verbosity: u8) {
    let default = match verbosity {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    // Ignore a second initialisation (e.g. from tests).
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
