// Application layer - Use case orchestration

pub mod container;
pub mod time_range;
pub mod transform_interactor;

pub use container::DefaultAppContainer;
pub use time_range::TimeRangeResolver;
pub use transform_interactor::{PreparedTransform, TransformInteractor, TransformReport, TransformRequest};
