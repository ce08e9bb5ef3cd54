use ndarray::{aview1, Array1};
use serde::{Deserialize, Serialize};

/// Fitted linear regression model
///
/// Holds the coefficient vector, intercept, and the input feature names
/// recorded at training time. The feature names are the concatenated
/// encoder-then-scaler output names; the pipeline validates that layout
/// before any prediction is served.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LinearModel {
    pub feature_names: Vec<String>,
    pub coefficients: Vec<f64>,
    pub intercept: f64,
}

impl LinearModel {
    /// Number of input features the model was trained on
    pub fn n_features(&self) -> usize {
        self.coefficients.len()
    }

    /// Predict one scalar from a feature vector.
    /// The vector length must equal `n_features()`.
    pub fn predict(&self, features: &Array1<f64>) -> f64 {
        aview1(&self.coefficients).dot(features) + self.intercept
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;

    #[test]
    fn test_predict_is_dot_plus_intercept() {
        let model = LinearModel {
            feature_names: vec!["a".to_string(), "b".to_string(), "c".to_string()],
            coefficients: vec![2.0, -1.0, 0.5],
            intercept: 10.0,
        };

        let prediction = model.predict(&array![1.0, 2.0, 4.0]);
        assert_eq!(prediction, 12.0);
    }

    #[test]
    fn test_n_features_tracks_coefficients() {
        let model = LinearModel {
            feature_names: vec!["a".to_string()],
            coefficients: vec![3.0],
            intercept: 0.0,
        };

        assert_eq!(model.n_features(), 1);
    }
}
