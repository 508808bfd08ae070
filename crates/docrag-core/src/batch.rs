use crate::error::{Error, Result};

/// Split `items` into consecutive groups of at most `batch_size`, keeping order.
pub fn partition<T>(items: &[T], batch_size: usize) -> Result<Vec<&[T]>> {
    if batch_size == 0 {
        return Err(Error::InvalidConfig("batch size must be positive".to_string()));
    }
    Ok(items.chunks(batch_size).collect())
}
