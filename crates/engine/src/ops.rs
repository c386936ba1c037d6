use core_types::{CalcError, Operation};

/// Reduces a validated, non-negative sequence to a scalar result.
///
/// All four kinds fold left-to-right with `f64` semantics; division yields
/// fractional results for integer inputs. A single element is returned
/// unchanged by every kind, and an empty sequence is rejected outright.
pub fn apply(operacion: Operation, numeros: &[f64]) -> Result<f64, CalcError> {
    let (first, rest) = numeros.split_first().ok_or(CalcError::EmptyInput)?;

    let resultado = match operacion {
        Operation::Sum => numeros.iter().sum(),
        Operation::Multiply => numeros.iter().product(),
        Operation::Subtract => rest.iter().fold(*first, |acc, n| acc - n),
        Operation::Divide => {
            // Only divisors are checked; a leading zero divides fine.
            if rest.contains(&0.0) {
                return Err(CalcError::DivisionByZero);
            }
            rest.iter().fold(*first, |acc, n| acc / n)
        }
    };

    Ok(resultado)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sum_folds_in_order() {
        assert_eq!(apply(Operation::Sum, &[5.0, 10.0]), Ok(15.0));
        assert_eq!(apply(Operation::Sum, &[1.5, 2.0, 3.0]), Ok(6.5));
    }

    #[test]
    fn subtract_chains_from_the_first_element() {
        assert_eq!(apply(Operation::Subtract, &[10.0, 1.0, 2.0]), Ok(7.0));
    }

    #[test]
    fn multiply_folds_from_one() {
        assert_eq!(apply(Operation::Multiply, &[2.0, 3.0, 4.0]), Ok(24.0));
    }

    #[test]
    fn divide_is_left_to_right_and_fractional() {
        assert_eq!(apply(Operation::Divide, &[100.0, 5.0, 2.0]), Ok(10.0));
        assert_eq!(apply(Operation::Divide, &[10.0, 4.0]), Ok(2.5));
    }

    #[test]
    fn zero_divisor_is_rejected_but_zero_dividend_is_fine() {
        assert_eq!(
            apply(Operation::Divide, &[10.0, 0.0]),
            Err(CalcError::DivisionByZero)
        );
        assert_eq!(apply(Operation::Divide, &[0.0, 5.0]), Ok(0.0));
    }

    #[test]
    fn single_element_is_the_identity_for_every_kind() {
        for operacion in Operation::ALL {
            assert_eq!(apply(operacion, &[7.5]), Ok(7.5));
        }
    }

    #[test]
    fn empty_input_is_rejected_for_every_kind() {
        for operacion in Operation::ALL {
            assert_eq!(apply(operacion, &[]), Err(CalcError::EmptyInput));
        }
    }
}
