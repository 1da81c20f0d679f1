//! Padding for composite renderings like `(3.000000 + 4.000000i)` or `3 / 4`.
//!
//! The components get their own format flags, while width and alignment of the formatter
//! apply to the whole expression.

use core::fmt;

/// Fractional digits used for float components, when the formatter doesn't specify a precision.
/// Matches the output of C's `%f`.
pub const DEFAULT_PRECISION: usize = 6;

#[cfg(feature = "std")]
#[inline(always)]
// Currently, we can only apply width using an intermediate `String` (and thus `std`)
pub(crate) fn pad_expr(f: &mut fmt::Formatter<'_>, expr: fmt::Arguments<'_>) -> fmt::Result {
    use std::string::ToString;
    if let Some(width) = f.width() {
        let s = expr.to_string();
        match f.align() {
            None | Some(fmt::Alignment::Right) => write!(f, "{s:>0$}", width),
            Some(fmt::Alignment::Center) => write!(f, "{s:^0$}", width),
            Some(fmt::Alignment::Left) => write!(f, "{s:<0$}", width),
        }
    } else {
        write!(f, "{}", expr)
    }
}

#[cfg(not(feature = "std"))]
#[inline(always)]
pub(crate) fn pad_expr(f: &mut fmt::Formatter<'_>, expr: fmt::Arguments<'_>) -> fmt::Result {
    write!(f, "{}", expr)
}
