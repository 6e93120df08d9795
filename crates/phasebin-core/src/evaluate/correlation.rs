use crate::consts::VARIANCE_EPSILON;
use crate::error::InvalidScore;

/// Pearson correlation coefficient of two equal-length sequences.
///
/// Two-pass: means first, then centered sums. The result is clamped to
/// [-1, 1]; a constant sequence yields `InvalidScore::ZeroVariance`.
pub fn pearson<'a, A, B>(a: A, b: B) -> Result<f64, InvalidScore>
where
    A: ExactSizeIterator<Item = &'a f64> + Clone,
    B: ExactSizeIterator<Item = &'a f64> + Clone,
{
    let (na, nb) = (a.len(), b.len());
    if na != nb {
        return Err(InvalidScore::LengthMismatch {
            left: na,
            right: nb,
        });
    }
    if na == 0 {
        return Err(InvalidScore::ZeroVariance);
    }

    let n = na as f64;
    let mean_a = a.clone().sum::<f64>() / n;
    let mean_b = b.clone().sum::<f64>() / n;

    let mut sxx = 0.0f64;
    let mut syy = 0.0f64;
    let mut sxy = 0.0f64;
    for (&x, &y) in a.zip(b) {
        let dx = x - mean_a;
        let dy = y - mean_b;
        sxx += dx * dx;
        syy += dy * dy;
        sxy += dx * dy;
    }

    if sxx / n <= VARIANCE_EPSILON || syy / n <= VARIANCE_EPSILON {
        return Err(InvalidScore::ZeroVariance);
    }

    let r = sxy / (sxx * syy).sqrt();
    if !r.is_finite() {
        return Err(InvalidScore::NonFinite);
    }
    Ok(r.clamp(-1.0, 1.0))
}

/// Pearson correlation of two slices.
pub fn pearson_slices(a: &[f64], b: &[f64]) -> Result<f64, InvalidScore> {
    pearson(a.iter(), b.iter())
}
