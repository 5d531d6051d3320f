//! Light/dark theme flag owned by the root component.
//!
//! DESIGN
//! ======
//! The flag lives in `App` as a signal and is handed to the nav bar as a
//! read-only value plus a toggle callback. Nothing persists it; every load
//! starts light.

#[cfg(test)]
#[path = "theme_test.rs"]
mod theme_test;

/// Presentation mode for the whole page.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ThemeState {
    pub dark: bool,
}

impl ThemeState {
    /// Invert the flag and return the new value.
    pub fn toggle(&mut self) -> bool {
        self.dark = !self.dark;
        self.dark
    }

    /// Class applied to the document root while dark, if any.
    pub fn root_class(self) -> Option<&'static str> {
        self.dark.then_some(crate::util::dark_mode::DARK_CLASS)
    }
}
