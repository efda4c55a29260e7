pub mod ext;
pub mod guard;
pub mod html;
pub mod hyperlink;
pub mod normalize;
pub mod pipeline;
pub mod truncate;
pub mod wildcard;

pub use crate::domain::model::{CleanStep, LineReport};
pub use crate::domain::ports::Transform;
pub use crate::utils::error::Result;
