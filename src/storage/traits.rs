use crate::domain::ReadStatus;
use crate::errors::NewsResult;

#[cfg_attr(test, mockall::automock)]
pub trait ReadStatusRepository: Send + Sync {
    fn load(&self) -> NewsResult<ReadStatus>;
    fn mark_read(&self, ids: &[String]) -> NewsResult<()>;
}
