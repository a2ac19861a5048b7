/// Arithmetic mean of a sample slice. Returns `None` when empty.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn mean(samples: &[f64]) -> Option<f64> {
    if samples.is_empty() {
        return None;
    }
    Some(samples.iter().sum::<f64>() / samples.len() as f64)
}

/// Median of a sample slice. Returns `None` when empty.
///
/// Even-length inputs average the two middle values.
#[must_use]
pub fn median(samples: &[f64]) -> Option<f64> {
    if samples.is_empty() {
        return None;
    }
    let mut sorted = samples.to_vec();
    sorted.sort_by(f64::total_cmp);
    let n = sorted.len();
    if n % 2 == 1 {
        Some(sorted[n / 2])
    } else {
        Some((sorted[n / 2 - 1] + sorted[n / 2]) * 0.5)
    }
}

/// Population standard deviation (ddof = 0). Returns `None` when empty;
/// a single sample has zero deviation.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn std_dev(samples: &[f64]) -> Option<f64> {
    let m = mean(samples)?;
    let var = samples.iter().map(|s| (s - m) * (s - m)).sum::<f64>() / samples.len() as f64;
    Some(var.sqrt())
}
