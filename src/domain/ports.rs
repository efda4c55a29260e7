use crate::utils::error::Result;

pub trait Transform: Send + Sync {
    fn name(&self) -> &'static str;
    fn apply(&self, input: &str) -> Result<String>;
}
