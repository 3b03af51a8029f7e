pub mod annotation;
pub mod convention;
pub mod target;

// Re-export commonly used types
pub use annotation::AnnotationKind;
pub use convention::ParameterConvention;
pub use target::PreviewTarget;
