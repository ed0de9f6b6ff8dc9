//! Console encoding configuration.
//!
//! Windows consoles default to a legacy code page that garbles non-ASCII
//! text (package names and pip output are not always ASCII). Switching
//! both the input and output code pages to UTF-8 once at startup, before
//! anything is printed, fixes the rendering. Everywhere else the terminal
//! is already UTF-8 and this is a no-op.

/// Switch the console to UTF-8. Call once before producing any output.
#[cfg(windows)]
pub fn configure_utf8() {
    use winapi::um::wincon::{SetConsoleCP, SetConsoleOutputCP};
    use winapi::um::winnls::CP_UTF8;

    // SAFETY: both calls only change the console code page for this
    // process and take no pointers.
    unsafe {
        SetConsoleOutputCP(CP_UTF8);
        SetConsoleCP(CP_UTF8);
    }
}

/// Switch the console to UTF-8. Call once before producing any output.
#[cfg(not(windows))]
pub fn configure_utf8() {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn configure_utf8_does_not_panic() {
        configure_utf8();
    }
}
