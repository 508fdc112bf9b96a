/// Crate-wide result type. Adapters raise [`crate::shared::error::SbomError`]
/// and convert it into `anyhow::Error` so `main` can walk the cause chain.
pub type Result<T> = std::result::Result<T, anyhow::Error>;
