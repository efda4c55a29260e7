pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

pub use config::ProfileConfig;
pub use crate::core::ext::TextExt;
pub use crate::core::guard::{is_blank, is_present, not_contains, with_default, with_na_default};
pub use crate::core::html::{first_image_src, strip_html};
pub use crate::core::hyperlink::to_hyperlink_html;
pub use crate::core::normalize::remove_extra_spaces;
pub use crate::core::pipeline::CleanPipeline;
pub use crate::core::truncate::{truncate, truncate_with};
pub use crate::core::wildcard::{is_like, WildcardPattern};
pub use utils::error::{Result, TextError};
