//! JSON serialization for fairness analysis results.

use crate::result::VlambdaResult;

/// Serialize a result to a compact JSON string.
///
/// # Errors
///
/// Returns an error if serialization fails.
pub fn to_json(result: &VlambdaResult) -> Result<String, serde_json::Error> {
    serde_json::to_string(result)
}

/// Serialize a result to a pretty-printed JSON string.
///
/// # Errors
///
/// Returns an error if serialization fails.
pub fn to_json_pretty(result: &VlambdaResult) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::Tolerance;
    use crate::types::{DistanceMatrix, Exposure, Proportions};

    fn make_result(lambda_values: Option<Vec<f64>>) -> VlambdaResult {
        VlambdaResult {
            lambda_values,
            distance: DistanceMatrix::from_row_slice(1, 2, &[0.5, -0.5]),
            delta_max: Tolerance::from(vec![0.25, 0.25]),
            p_hat: Proportions::from_vec(vec![0.5, 0.5]),
            exposure: Exposure::from_row_slice(1, 2, &[1.0, 0.0]),
        }
    }

    #[test]
    fn test_json_contains_fields() {
        let json = to_json(&make_result(Some(vec![0.02]))).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(value["lambda_values"][0], 0.02);
        assert!(value.get("distance").is_some());
        assert!(value["delta_max"].get("PerClass").is_some());
        assert!(value.get("p_hat").is_some());
    }

    #[test]
    fn test_json_omits_absent_lambdas() {
        let json = to_json(&make_result(None)).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert!(value.get("lambda_values").is_none());
    }

    #[test]
    fn test_pretty_json_is_multiline() {
        let json = to_json_pretty(&make_result(None)).unwrap();
        assert!(json.contains('\n'));
    }
}
