/// Pipeline orchestration and the finished token
pub mod executor;
/// Feature accumulation and the published feature set
pub mod features;
/// Star count, placement and classification
pub mod field;
/// Star ordering and the closed draw path
pub mod path;
/// Deterministic sample source and seed hashes
pub mod sampler;
/// Sky palette and background gradient
pub mod sky;
