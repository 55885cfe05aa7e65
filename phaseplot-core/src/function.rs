use crate::{Complex, RenderParameters};

/// The function being visualized.
///
/// Implementations range from the built-in power map to host-compiled
/// expressions or plugins, so evaluation is fallible by contract. The
/// sampler substitutes [`Complex::ZERO`] for any sample whose evaluation
/// returns an error or a NaN component and keeps going; a bad function
/// can never abort a frame.
pub trait ComplexFunction: dyn_clone::DynClone + Send + Sync {
    /// Evaluate the function at `z`.
    fn eval(&self, z: Complex, params: &RenderParameters) -> Result<Complex, String>;
}

dyn_clone::clone_trait_object!(ComplexFunction);

/// Any suitable closure is a function, which keeps one-off maps in hosts
/// and tests free of wrapper types.
impl<F> ComplexFunction for F
where
    F: Fn(Complex, &RenderParameters) -> Result<Complex, String> + Clone + Send + Sync,
{
    fn eval(&self, z: Complex, params: &RenderParameters) -> Result<Complex, String> {
        self(z, params)
    }
}

/// The built-in map z^(param1 + param2·i) + (param3 + param4·i).
///
/// Never returns an error. At the origin the principal-branch power
/// yields NaN components, which the render layer substitutes like any
/// other failed sample.
#[derive(Clone, Copy, Debug, Default)]
pub struct PowerFunction;

impl ComplexFunction for PowerFunction {
    fn eval(&self, z: Complex, params: &RenderParameters) -> Result<Complex, String> {
        Ok(z.pow(&params.exponent()).add(&params.offset()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f64 = 1e-9;

    fn approx_eq(a: &Complex, b: &Complex) -> bool {
        (a.re - b.re).abs() < EPSILON && (a.im - b.im).abs() < EPSILON
    }

    #[test]
    fn test_power_function_squares_with_exponent_two() {
        // (3+4i)² = -7+24i
        let params = RenderParameters::new(2.0, 0.0, 0.0, 0.0);
        let value = PowerFunction
            .eval(Complex::new(3.0, 4.0), &params)
            .unwrap();
        assert!(approx_eq(&value, &Complex::new(-7.0, 24.0)), "got {value}");
    }

    #[test]
    fn test_power_function_applies_the_offset() {
        let params = RenderParameters::new(2.0, 0.0, 1.0, -1.0);
        let value = PowerFunction
            .eval(Complex::new(3.0, 4.0), &params)
            .unwrap();
        assert!(approx_eq(&value, &Complex::new(-6.0, 23.0)), "got {value}");
    }

    #[test]
    fn test_power_function_with_default_params_is_identity() {
        let params = RenderParameters::default();
        let z = Complex::new(0.5, -2.5);
        let value = PowerFunction.eval(z, &params).unwrap();
        assert!(approx_eq(&value, &z), "got {value}");
    }

    #[test]
    fn test_power_function_returns_ok_nan_at_the_origin() {
        let params = RenderParameters::new(2.0, 0.0, 0.0, 0.0);
        let value = PowerFunction.eval(Complex::ZERO, &params).unwrap();
        assert!(value.is_nan());
    }

    #[test]
    fn test_closures_are_functions() {
        let square = |z: Complex, _: &RenderParameters| -> Result<Complex, String> {
            Ok(z.mul(&z))
        };
        let value = square
            .eval(Complex::new(3.0, 4.0), &RenderParameters::default())
            .unwrap();
        assert_eq!(value, Complex::new(-7.0, 24.0));
    }

    #[test]
    fn test_boxed_functions_clone() {
        let function: Box<dyn ComplexFunction> = Box::new(PowerFunction);
        let cloned = function.clone();
        let params = RenderParameters::new(2.0, 0.0, 0.0, 0.0);
        let z = Complex::new(1.0, 1.0);
        assert_eq!(
            function.eval(z, &params).unwrap(),
            cloned.eval(z, &params).unwrap()
        );
    }
}
