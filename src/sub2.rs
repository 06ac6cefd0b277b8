//! Second placeholder sub-library.

/// Line printed by [`public_display`].
pub const PUBLIC_LINE: &str = "Sub2 public display";

pub(crate) const PRIVATE_LINE: &str = "Sub2 private display";

/// Prints one fixed line to stdout. Takes nothing, returns nothing,
/// cannot fail.
pub fn public_display() {
    tracing::debug!("sub2::public_display");
    println!("{PUBLIC_LINE}");
}

pub(crate) fn private_display() {
    tracing::debug!("sub2::private_display");
    println!("{PRIVATE_LINE}");
}
