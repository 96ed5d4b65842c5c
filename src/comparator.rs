use crate::geometry;
use crate::gesture::Gesture;

#[derive(Clone, Debug, thiserror::Error, PartialEq, Eq)]
pub enum CompareError {
    /// The two records hold different numbers of points and cannot be
    /// compared index by index.
    #[error("point count mismatch: candidate has {candidate} points, template has {template}")]
    PointCountMismatch { candidate: usize, template: usize },
}

/// Mean point-to-point distance between two records of the same size.
pub fn average_distance(candidate: &Gesture, template: &Gesture) -> Result<f32, CompareError> {
    let distances = paired_distances(candidate, template)?;
    Ok(mean(&distances))
}

/// Like [`average_distance`], but reweights outlier indices.
///
/// Indices whose distance deviates from the average by more than
/// `dev_tightness` times the average contribute `anomalies_factor` times
/// their distance instead. The threshold is proportional to the average of
/// the raw distances, not to a variance-based deviation, so uniform jitter
/// across the whole stroke never trips it while a large localized divergence
/// does.
pub fn anomaly_weighted_distance(
    candidate: &Gesture,
    template: &Gesture,
    dev_tightness: f32,
    anomalies_factor: f32,
) -> Result<f32, CompareError> {
    let distances = paired_distances(candidate, template)?;
    if distances.is_empty() {
        return Ok(0.0);
    }
    let average = mean(&distances);
    let threshold = dev_tightness * average;
    let mut total = 0.0;
    for &d in &distances {
        if (d - average).abs() > threshold {
            total += anomalies_factor * d;
        } else {
            total += d;
        }
    }
    Ok(total / distances.len() as f32)
}

fn paired_distances(candidate: &Gesture, template: &Gesture) -> Result<Vec<f32>, CompareError> {
    if candidate.points.len() != template.points.len() {
        return Err(CompareError::PointCountMismatch {
            candidate: candidate.points.len(),
            template: template.points.len(),
        });
    }
    Ok(candidate
        .points
        .iter()
        .zip(&template.points)
        .map(|(a, b)| geometry::euclidean_distance(a, b))
        .collect())
}

fn mean(values: &[f32]) -> f32 {
    if values.is_empty() {
        return 0.0;
    }
    values.iter().sum::<f32>() / values.len() as f32
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::capture::BoundingExtremes;
    use crate::point::Point;

    fn gesture(points: &[(f32, f32)]) -> Gesture {
        Gesture {
            name: String::new(),
            points: points.iter().map(|&(x, y)| Point::new(x, y)).collect(),
            extremes: BoundingExtremes::default(),
        }
    }

    #[test]
    fn identical_records_are_at_distance_zero() {
        let a = gesture(&[(0.0, 0.0), (3.0, 4.0), (6.0, 8.0)]);
        assert_eq!(average_distance(&a, &a), Ok(0.0));
        assert_eq!(anomaly_weighted_distance(&a, &a, 1.0, 2.0), Ok(0.0));
    }

    #[test]
    fn average_distance_is_the_mean_of_paired_distances() {
        let a = gesture(&[(0.0, 0.0), (0.0, 0.0)]);
        // distances 5 and 13
        let b = gesture(&[(3.0, 4.0), (5.0, 12.0)]);
        assert_eq!(average_distance(&a, &b), Ok(9.0));
    }

    #[test]
    fn the_metric_is_non_negative() {
        let a = gesture(&[(1.0, -2.0), (0.5, 3.0)]);
        let b = gesture(&[(-4.0, 0.0), (2.0, 2.0)]);
        assert!(average_distance(&a, &b).unwrap() > 0.0);
    }

    #[test]
    fn mismatched_point_counts_are_an_error() {
        let a = gesture(&[(0.0, 0.0), (1.0, 0.0)]);
        let b = gesture(&[(0.0, 0.0)]);
        assert_eq!(
            average_distance(&a, &b),
            Err(CompareError::PointCountMismatch {
                candidate: 2,
                template: 1,
            })
        );
        assert!(anomaly_weighted_distance(&a, &b, 1.0, 2.0).is_err());
    }

    #[test]
    fn uniform_distances_leave_the_weighted_metric_unchanged() {
        let a = gesture(&[(0.0, 0.0), (10.0, 0.0), (20.0, 0.0)]);
        // every point offset by (0, 2): all paired distances equal
        let b = gesture(&[(0.0, 2.0), (10.0, 2.0), (20.0, 2.0)]);
        let plain = average_distance(&a, &b).unwrap();
        let weighted = anomaly_weighted_distance(&a, &b, 1.0, 2.0).unwrap();
        assert_eq!(plain, 2.0);
        assert_eq!(weighted, plain);
    }

    #[test]
    fn a_localized_outlier_is_amplified() {
        let a = gesture(&[(0.0, 0.0), (1.0, 0.0), (2.0, 0.0), (3.0, 0.0)]);
        // distances 0, 0, 0, 5: average 1.25, threshold 1.25;
        // only the last index deviates by more than the threshold
        let b = gesture(&[(0.0, 0.0), (1.0, 0.0), (2.0, 0.0), (3.0, 5.0)]);
        let weighted = anomaly_weighted_distance(&a, &b, 1.0, 2.0).unwrap();
        assert!((weighted - 2.5).abs() < 1e-6);

        let plain = average_distance(&a, &b).unwrap();
        assert!((plain - 1.25).abs() < 1e-6);
    }

    #[test]
    fn the_weighted_metric_is_symmetric() {
        let a = gesture(&[(0.0, 0.0), (1.0, 0.0), (2.0, 0.0), (3.0, 0.0)]);
        let b = gesture(&[(0.0, 1.0), (1.0, 0.0), (2.0, 0.0), (3.0, 5.0)]);
        assert_eq!(
            anomaly_weighted_distance(&a, &b, 1.0, 2.0),
            anomaly_weighted_distance(&b, &a, 1.0, 2.0)
        );
    }
}
