use crate::error::{OperationError, Result};

use super::UvArea;

/// Summed texel density: `sum(ratio) * texture_size`.
///
/// This is a sum over the samples, not a mean; see [`average_density`].
///
/// # Errors
///
/// Returns an error if any sample has zero UV area.
pub fn density(areas: &[UvArea], texture_size: u32) -> Result<f64> {
    Ok(ratio_sum(areas)? * f64::from(texture_size))
}

/// Mean texel density: `sum(ratio) / count * texture_size`.
///
/// # Errors
///
/// Returns `OperationError::EmptySelection` for no samples, or an error if
/// any sample has zero UV area.
pub fn average_density(areas: &[UvArea], texture_size: u32) -> Result<f64> {
    if areas.is_empty() {
        return Err(OperationError::EmptySelection.into());
    }
    #[allow(clippy::cast_precision_loss)]
    let count = areas.len() as f64;
    Ok(ratio_sum(areas)? / count * f64::from(texture_size))
}

fn ratio_sum(areas: &[UvArea]) -> Result<f64> {
    areas.iter().map(UvArea::ratio).sum()
}
