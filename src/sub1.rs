//! First placeholder sub-library.

/// Line printed by [`public_display`].
pub const PUBLIC_LINE: &str = "Sub1 public display";

/// Line printed by [`private_display`].
pub(crate) const PRIVATE_LINE: &str = "Sub1 private display";

/// Prints one fixed line to stdout. Takes nothing, returns nothing,
/// cannot fail.
pub fn public_display() {
    tracing::debug!("sub1::public_display");
    println!("{PUBLIC_LINE}");
}

/// Internal counterpart of [`public_display`]: same behavior, crate-only
/// visibility. Reachable from the crate's own tests.
pub(crate) fn private_display() {
    tracing::debug!("sub1::private_display");
    println!("{PRIVATE_LINE}");
}
