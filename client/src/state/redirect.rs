//! Post-login return location.
//!
//! When the dashboard gate bounces an anonymous visitor to `/login` it
//! records where they were headed; the login page takes it once after a
//! successful sign-in.

#[cfg(test)]
#[path = "redirect_test.rs"]
mod redirect_test;

pub const DEFAULT_AFTER_LOGIN: &str = "/dashboard";

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ReturnTo {
    pending: Option<String>,
}

impl ReturnTo {
    pub fn record(&mut self, location: String) {
        self.pending = Some(location);
    }

    /// Consume the recorded location, falling back to the dashboard when
    /// nothing usable was recorded.
    pub fn take_or_default(&mut self) -> String {
        self.pending
            .take()
            .filter(|loc| is_local_path(loc))
            .unwrap_or_else(|| DEFAULT_AFTER_LOGIN.to_owned())
    }
}

/// Same-origin absolute path: `/x`, but not `//host` or `/\host`.
pub fn is_local_path(location: &str) -> bool {
    location.starts_with('/') && !location.starts_with("//") && !location.starts_with("/\\")
}

/// Join a router pathname and search string into a single location.
pub fn join_location(pathname: &str, search: &str) -> String {
    let search = search.trim_start_matches('?');
    if search.is_empty() { pathname.to_owned() } else { format!("{pathname}?{search}") }
}
