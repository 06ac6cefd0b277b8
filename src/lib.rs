//! Build/link smoke test library.
//!
//! Two placeholder sub-modules (`sub1`, `sub2`) each expose a public and a
//! crate-internal display entry point that print one fixed line. The crate
//! exists to verify that consumers can link against the public surface and
//! that the in-crate tests can reach the internal one; it carries no logic
//! beyond the prints themselves.

pub mod sub1;
pub mod sub2;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Installs a compact logger so the debug events emitted by the display
/// entry points are visible when `RUST_LOG` asks for them.
pub fn init_logger(verbose: bool) {
    let filter = if verbose {
        EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new("link_smoke=debug,info"))
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("link_smoke=info"))
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .compact(),
        )
        .init();
}

#[cfg(test)]
mod tests {
    use crate::{sub1, sub2};

    const TEST_LINE: &str = "Test display";

    fn display() {
        println!("{TEST_LINE}");
    }

    // Straight-line smoke test: every display entry point, public and
    // internal, must be reachable and print without panicking.
    #[test]
    fn test_shared_display_sequence() {
        sub1::public_display();
        sub2::public_display();

        sub1::private_display();
        sub2::private_display();

        display();

        assert!(true);
    }

    #[test]
    fn test_display_lines_are_single_lines() {
        for line in [
            sub1::PUBLIC_LINE,
            sub1::PRIVATE_LINE,
            sub2::PUBLIC_LINE,
            sub2::PRIVATE_LINE,
            TEST_LINE,
        ] {
            assert!(!line.is_empty());
            assert!(!line.contains('\n'));
        }
    }
}
