//! Confirmation Capability
//!
//! The yes/no prompt consulted before clearing the list. Injected so the
//! clear path can run without any real dialog.

pub trait Confirm {
    /// Ask the user `message`; `true` means go ahead
    fn confirm(&self, message: &str) -> bool;
}

impl<F> Confirm for F
where
    F: Fn(&str) -> bool,
{
    fn confirm(&self, message: &str) -> bool {
        self(message)
    }
}
