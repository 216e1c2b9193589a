use crate::error::LedgerdeskError;

pub type LedgerdeskResult<T> = Result<T, LedgerdeskError>;
