//! Confirmation tokens for destructive operations.
//!
//! The engine never prompts. Callers ask the user (or read a `--yes` flag)
//! and hand the answer in as a [`Confirmation`].

/// The caller's answer to "are you sure?".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Confirmation {
    /// Go ahead.
    Granted,
    /// Leave everything as it is.
    #[default]
    Denied,
}

impl Confirmation {
    /// Whether the operation may proceed.
    pub fn is_granted(self) -> bool {
        matches!(self, Self::Granted)
    }
}

impl From<bool> for Confirmation {
    fn from(granted: bool) -> Self {
        if granted {
            Self::Granted
        } else {
            Self::Denied
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_denied() {
        assert_eq!(Confirmation::default(), Confirmation::Denied);
        assert!(!Confirmation::default().is_granted());
    }

    #[test]
    fn from_bool() {
        assert_eq!(Confirmation::from(true), Confirmation::Granted);
        assert_eq!(Confirmation::from(false), Confirmation::Denied);
    }
}
