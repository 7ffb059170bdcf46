use crate::schema::{ParamSpec, ParamType, ToolSchema, ValidatedInput};
use crate::tool::Tool;
use deckcore::ToolError;

pub fn calculate_sum(a: f64, b: f64) -> f64 {
    a + b
}

pub fn calculate_product(a: f64, b: f64) -> f64 {
    a * b
}

/// `base` raised to `exponent`; NaN and infinities pass through
pub fn calculate_power(base: f64, exponent: f64) -> f64 {
    base.powf(exponent)
}

/// Render a number the way the agent runtime prints numbers
///
/// Integral values drop the fraction and non-finite values use the
/// `Infinity`/`NaN` spelling. Magnitudes from 1e21 up and below 1e-6 switch
/// to exponent form (`1e+21`, `1.5e-7`).
pub fn format_number(n: f64) -> String {
    if n.is_nan() {
        "NaN".to_string()
    } else if n == f64::INFINITY {
        "Infinity".to_string()
    } else if n == f64::NEG_INFINITY {
        "-Infinity".to_string()
    } else if n == 0.0 {
        "0".to_string()
    } else if n.abs() >= 1e21 || n.abs() < 1e-6 {
        let formatted = format!("{:e}", n);
        match formatted.split_once('e') {
            Some((mantissa, exponent)) if !exponent.starts_with('-') => {
                format!("{}e+{}", mantissa, exponent)
            }
            _ => formatted,
        }
    } else {
        n.to_string()
    }
}

fn two_numbers(first: &'static str, second: &'static str) -> ToolSchema {
    ToolSchema::new()
        .param(ParamSpec::required(first, ParamType::Number))
        .param(ParamSpec::required(second, ParamType::Number))
}

pub struct SumTool;

impl Tool for SumTool {
    fn name(&self) -> &str {
        "sum"
    }

    fn description(&self) -> &str {
        "Calculate the sum of two numbers"
    }

    fn schema(&self) -> ToolSchema {
        ToolSchema::new()
            .param(ParamSpec::required("a", ParamType::Number).describe("First number"))
            .param(ParamSpec::required("b", ParamType::Number).describe("Second number"))
    }

    fn call(&self, input: &ValidatedInput) -> Result<String, ToolError> {
        let a = input.number("a")?;
        let b = input.number("b")?;
        let result = calculate_sum(a, b);
        tracing::info!(
            "Sum calculation: {} + {} = {}",
            format_number(a),
            format_number(b),
            format_number(result)
        );
        Ok(format_number(result))
    }
}

pub struct MultiplyTool;

impl Tool for MultiplyTool {
    fn name(&self) -> &str {
        "multiply"
    }

    fn description(&self) -> &str {
        "Multiply two numbers"
    }

    fn schema(&self) -> ToolSchema {
        two_numbers("a", "b")
    }

    fn call(&self, input: &ValidatedInput) -> Result<String, ToolError> {
        let a = input.number("a")?;
        let b = input.number("b")?;
        let result = calculate_product(a, b);
        tracing::info!(
            "Multiply calculation: {} × {} = {}",
            format_number(a),
            format_number(b),
            format_number(result)
        );
        Ok(format_number(result))
    }
}

pub struct PowerTool;

impl Tool for PowerTool {
    fn name(&self) -> &str {
        "power"
    }

    fn description(&self) -> &str {
        "Raise base to an exponent"
    }

    fn schema(&self) -> ToolSchema {
        two_numbers("base", "exponent")
    }

    fn call(&self, input: &ValidatedInput) -> Result<String, ToolError> {
        let base = input.number("base")?;
        let exponent = input.number("exponent")?;
        let result = calculate_power(base, exponent);
        tracing::info!(
            "Power calculation: {}^{} = {}",
            format_number(base),
            format_number(exponent),
            format_number(result)
        );
        Ok(format_number(result))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_arithmetic() {
        assert_eq!(calculate_sum(2.0, 3.0), 5.0);
        assert_eq!(calculate_product(4.0, 5.0), 20.0);
        assert_eq!(calculate_power(2.0, 10.0), 1024.0);
        assert_eq!(calculate_power(2.0, -1.0), 0.5);
    }

    #[test]
    fn test_power_non_finite() {
        assert!(calculate_power(-8.0, 1.0 / 3.0).is_nan());
        assert_eq!(calculate_power(0.0, -1.0), f64::INFINITY);
    }

    #[test]
    fn test_format_number() {
        assert_eq!(format_number(1024.0), "1024");
        assert_eq!(format_number(0.5), "0.5");
        assert_eq!(format_number(-3.25), "-3.25");
        assert_eq!(format_number(-0.0), "0");
        assert_eq!(format_number(f64::INFINITY), "Infinity");
        assert_eq!(format_number(f64::NEG_INFINITY), "-Infinity");
        assert_eq!(format_number(f64::NAN), "NaN");
    }

    #[test]
    fn test_format_number_exponent_range() {
        assert_eq!(format_number(1e20), "100000000000000000000");
        assert_eq!(format_number(1e21), "1e+21");
        assert_eq!(format_number(-1.5e22), "-1.5e+22");
        assert_eq!(format_number(1e300), "1e+300");
        assert_eq!(format_number(0.000001), "0.000001");
        assert_eq!(format_number(1.5e-7), "1.5e-7");
        assert_eq!(format_number(2f64.powi(-30)), "9.313225746154785e-10");
    }
}
