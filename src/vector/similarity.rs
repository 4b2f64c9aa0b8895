//! Vector Similarity Functions
//!
//! Dot product, magnitude and L2 normalization over `f64` slices.

/// Basic vector operations
pub trait VectorOps {
    fn dot(&self, other: &Self) -> f64;
    fn magnitude(&self) -> f64;
    fn normalize(&mut self);
}

impl VectorOps for [f64] {
    #[inline]
    fn dot(&self, other: &Self) -> f64 {
        dot_product(self, other)
    }

    #[inline]
    fn magnitude(&self) -> f64 {
        dot_product(self, self).sqrt()
    }

    fn normalize(&mut self) {
        normalize_vector(self);
    }
}

/// Compute dot product of two vectors
///
/// Uses unrolled loop for better CPU performance.
#[inline]
pub fn dot_product(a: &[f64], b: &[f64]) -> f64 {
    debug_assert_eq!(a.len(), b.len(), "Vector dimensions must match");

    let len = a.len().min(b.len());
    let mut sum = 0.0f64;

    let chunks = len / 4;
    for i in 0..chunks {
        let idx = i * 4;
        sum += a[idx] * b[idx];
        sum += a[idx + 1] * b[idx + 1];
        sum += a[idx + 2] * b[idx + 2];
        sum += a[idx + 3] * b[idx + 3];
    }

    for i in (chunks * 4)..len {
        sum += a[i] * b[i];
    }

    sum
}

/// Compute cosine similarity between two vectors
///
/// Returns value in range [-1, 1] where 1 means identical direction.
/// Zero-length operands yield 0.
#[inline]
pub fn cosine_similarity(a: &[f64], b: &[f64]) -> f64 {
    let denom = a.magnitude() * b.magnitude();
    if denom > 0.0 {
        dot_product(a, b) / denom
    } else {
        0.0
    }
}

/// Normalize a vector in place, leaving a zero vector untouched
pub fn normalize_vector(v: &mut [f64]) {
    let mag = v.magnitude();
    if mag > 0.0 {
        for x in v.iter_mut() {
            *x /= mag;
        }
    }
}

/// Normalize and return a new vector
pub fn normalized(v: &[f64]) -> Vec<f64> {
    let mut result = v.to_vec();
    normalize_vector(&mut result);
    result
}
