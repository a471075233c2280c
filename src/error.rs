#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RomanizeError {
    /// The name is missing or consists of whitespace only
    #[error("name is required")]
    NameRequired,
}
