//! Similarity computation for embeddings.

use tracing::warn;

/// Compute the cosine similarity between two embeddings.
///
/// Returns a value between -1.0 and 1.0, where:
/// - 1.0 means identical direction
/// - 0.0 means orthogonal vectors
/// - -1.0 means opposite vectors
///
/// Inputs the formula cannot score score 0.0: a zero-magnitude vector, a
/// non-finite result, or vectors of different lengths.
pub fn cosine_similarity(a: &[f32], b: &[f32]) -> f32 {
    if a.len() != b.len() {
        warn!(
            "Cosine similarity over mismatched dimensions: {} vs {}",
            a.len(),
            b.len()
        );
        return 0.0;
    }

    let dot_product: f32 = a.iter().zip(b.iter()).map(|(x, y)| x * y).sum();
    let magnitude_a = magnitude(a);
    let magnitude_b = magnitude(b);

    if magnitude_a == 0.0 || magnitude_b == 0.0 {
        warn!("Cosine similarity over a zero-magnitude vector");
        return 0.0;
    }

    let similarity = dot_product / (magnitude_a * magnitude_b);
    if similarity.is_finite() {
        similarity
    } else {
        0.0
    }
}

fn magnitude(v: &[f32]) -> f32 {
    v.iter().map(|x| x * x).sum::<f32>().sqrt()
}
