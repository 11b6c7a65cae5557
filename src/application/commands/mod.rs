pub mod articles;
pub mod providers;

/// Whether an update replaces the whole record (`PUT`) or only the supplied
/// fields (`PATCH`).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UpdateMode {
    Full,
    Partial,
}

impl UpdateMode {
    pub fn is_full(self) -> bool {
        matches!(self, Self::Full)
    }
}
