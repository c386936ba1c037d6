use core_types::{CalcError, RawNumber};

/// Classifies an input sequence before any arithmetic runs.
///
/// Type errors take precedence: every element is checked for being numeric
/// first, and only a fully numeric sequence is inspected for negatives. The
/// negative failure carries exactly the `< 0` elements, in original order.
pub fn validate(numeros: &[RawNumber]) -> Result<Vec<f64>, CalcError> {
    let mut errors = Vec::new();
    let mut parsed = Vec::with_capacity(numeros.len());
    for (idx, value) in numeros.iter().enumerate() {
        match value {
            RawNumber::Number(n) => parsed.push(*n),
            RawNumber::Invalid(raw) => errors.push(format!(
                "numeros.{idx}: se esperaba un número, se recibió {raw}"
            )),
        }
    }
    if !errors.is_empty() {
        return Err(CalcError::TypeMismatch { errors });
    }

    let negativos: Vec<f64> = parsed.iter().copied().filter(|n| *n < 0.0).collect();
    if !negativos.is_empty() {
        return Err(CalcError::NegativeNumbers(negativos));
    }

    Ok(parsed)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn nums(values: &[f64]) -> Vec<RawNumber> {
        values.iter().map(|n| RawNumber::from(*n)).collect()
    }

    #[test]
    fn well_formed_sequence_parses() {
        assert_eq!(validate(&nums(&[5.0, 10.0])), Ok(vec![5.0, 10.0]));
        assert_eq!(validate(&nums(&[0.0])), Ok(vec![0.0]));
        assert_eq!(validate(&[]), Ok(vec![]));
    }

    #[test]
    fn negative_subset_keeps_original_order() {
        assert_eq!(
            validate(&nums(&[5.0, -10.0])),
            Err(CalcError::NegativeNumbers(vec![-10.0]))
        );
        assert_eq!(
            validate(&nums(&[-2.0, 10.0, 5.0, -9.0, -7.0])),
            Err(CalcError::NegativeNumbers(vec![-2.0, -9.0, -7.0]))
        );
    }

    #[test]
    fn type_error_names_the_offending_element() {
        let input = vec![RawNumber::from(10.0), RawNumber::Invalid(json!("0d"))];
        match validate(&input) {
            Err(CalcError::TypeMismatch { errors }) => {
                assert_eq!(errors, vec!["numeros.1: se esperaba un número, se recibió \"0d\""]);
            }
            other => panic!("expected TypeMismatch, got {other:?}"),
        }
    }

    #[test]
    fn type_error_wins_over_negative_numbers() {
        let input = vec![RawNumber::from(-5.0), RawNumber::Invalid(json!(true))];
        assert!(matches!(
            validate(&input),
            Err(CalcError::TypeMismatch { .. })
        ));
    }
}
