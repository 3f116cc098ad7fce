use std::fmt;

use crate::error::OptionError;

use super::{color::Rgb, value::OptionValue};

/// The closed set of option kinds a filter can declare
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OptionKind {
    Percentage,
    Number,
    Integer,
    Color,
    Boolean,
}

impl fmt::Display for OptionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            OptionKind::Percentage => "percentage",
            OptionKind::Number => "number",
            OptionKind::Integer => "integer",
            OptionKind::Color => "color",
            OptionKind::Boolean => "boolean",
        };
        f.write_str(name)
    }
}

/// Kind-specific payload of a declaration: the default and, for the numeric
/// kinds, optional inclusive bounds.
#[derive(Debug, Clone, PartialEq)]
pub enum OptionSpec {
    /// Value in [0, 100]; consumers divide by 100.
    Percentage { default: f64 },
    Number {
        default: f64,
        min: Option<f64>,
        max: Option<f64>,
    },
    Integer {
        default: i64,
        min: Option<i64>,
        max: Option<i64>,
    },
    /// `#RRGGBB`
    Color { default: String },
    Boolean { default: bool },
}

/// One configurable parameter of a filter.
///
/// Declarations can only be built through the constructor functions below,
/// each of which rejects a default that violates its own constraints. A
/// declaration that exists is therefore always self-consistent.
#[derive(Debug, Clone, PartialEq)]
pub struct OptionDeclaration {
    name: String,
    spec: OptionSpec,
}

/// Declare a percentage option. The default must lie in [0, 100].
pub fn percentage_option<S: Into<String>>(name: S, default: f64) -> Result<OptionDeclaration, OptionError> {
    let name = checked_name(name)?;
    check_default_bounds(&name, default, Some(0.0), Some(100.0))?;
    Ok(OptionDeclaration {
        name,
        spec: OptionSpec::Percentage { default },
    })
}

/// Declare a real-valued option with optional inclusive bounds.
pub fn number_option<S: Into<String>>(
    name: S,
    default: f64,
    min: Option<f64>,
    max: Option<f64>,
) -> Result<OptionDeclaration, OptionError> {
    let name = checked_name(name)?;
    if !default.is_finite() {
        return Err(OptionError::InvalidDefault {
            name,
            kind: OptionKind::Number,
            details: format!("{} is not finite", default),
        });
    }
    check_default_bounds(&name, default, min, max)?;
    Ok(OptionDeclaration {
        name,
        spec: OptionSpec::Number { default, min, max },
    })
}

/// Declare a whole-number option with optional inclusive bounds.
pub fn integer_option<S: Into<String>>(
    name: S,
    default: i64,
    min: Option<i64>,
    max: Option<i64>,
) -> Result<OptionDeclaration, OptionError> {
    let name = checked_name(name)?;
    check_default_bounds(&name, default, min, max)?;
    Ok(OptionDeclaration {
        name,
        spec: OptionSpec::Integer { default, min, max },
    })
}

/// Declare a color option. The default must be a `#RRGGBB` string.
pub fn color_option<S: Into<String>, D: Into<String>>(name: S, default: D) -> Result<OptionDeclaration, OptionError> {
    let name = checked_name(name)?;
    let default = default.into();
    if let Err(e) = default.parse::<Rgb>() {
        return Err(OptionError::InvalidDefault {
            name,
            kind: OptionKind::Color,
            details: e.to_string(),
        });
    }
    Ok(OptionDeclaration {
        name,
        spec: OptionSpec::Color { default },
    })
}

/// Declare a boolean flag.
pub fn boolean_option<S: Into<String>>(name: S, default: bool) -> Result<OptionDeclaration, OptionError> {
    Ok(OptionDeclaration {
        name: checked_name(name)?,
        spec: OptionSpec::Boolean { default },
    })
}

fn checked_name<S: Into<String>>(name: S) -> Result<String, OptionError> {
    let name = name.into();
    if name.trim().is_empty() {
        return Err(OptionError::EmptyName);
    }
    Ok(name)
}

fn bound_string<T: fmt::Display>(bound: Option<T>) -> String {
    bound.map_or_else(|| "unbounded".to_string(), |b| b.to_string())
}

fn within<T: PartialOrd>(value: T, min: Option<T>, max: Option<T>) -> bool {
    // NaN is not comparable and so is never within bounds
    let comparable = value.partial_cmp(&value).is_some();
    comparable && min.map_or(true, |m| value >= m) && max.map_or(true, |m| value <= m)
}

fn check_default_bounds<T>(name: &str, default: T, min: Option<T>, max: Option<T>) -> Result<(), OptionError>
where
    T: PartialOrd + Copy + fmt::Display,
{
    if let (Some(lo), Some(hi)) = (min, max) {
        if lo > hi {
            return Err(OptionError::InvalidBounds {
                name: name.to_string(),
                min: lo.to_string(),
                max: hi.to_string(),
            });
        }
    }

    if !within(default, min, max) {
        return Err(OptionError::DefaultOutOfBounds {
            name: name.to_string(),
            default: default.to_string(),
            min: bound_string(min),
            max: bound_string(max),
        });
    }

    Ok(())
}

impl OptionDeclaration {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn kind(&self) -> OptionKind {
        match self.spec {
            OptionSpec::Percentage { .. } => OptionKind::Percentage,
            OptionSpec::Number { .. } => OptionKind::Number,
            OptionSpec::Integer { .. } => OptionKind::Integer,
            OptionSpec::Color { .. } => OptionKind::Color,
            OptionSpec::Boolean { .. } => OptionKind::Boolean,
        }
    }

    pub fn spec(&self) -> &OptionSpec {
        &self.spec
    }

    /// The declared default as a runtime value
    pub fn default_value(&self) -> OptionValue {
        match &self.spec {
            OptionSpec::Percentage { default } => OptionValue::Float(*default),
            OptionSpec::Number { default, .. } => OptionValue::Float(*default),
            OptionSpec::Integer { default, .. } => OptionValue::Integer(*default),
            OptionSpec::Color { default } => OptionValue::String(default.clone()),
            OptionSpec::Boolean { default } => OptionValue::Bool(*default),
        }
    }

    /// Check that `value` is legal for this declaration: kind-matching type,
    /// within bounds, and for colors a well-formed `#RRGGBB` string.
    pub fn check(&self, value: &OptionValue) -> Result<(), OptionError> {
        let mismatch = || OptionError::TypeMismatch {
            name: self.name.clone(),
            expected: self.kind(),
            found: value.type_name(),
        };

        match &self.spec {
            OptionSpec::Percentage { .. } => {
                let v = value.as_f64().ok_or_else(mismatch)?;
                self.check_range(v, Some(0.0), Some(100.0))
            }
            OptionSpec::Number { min, max, .. } => {
                let v = value.as_f64().ok_or_else(mismatch)?;
                if !v.is_finite() {
                    return Err(OptionError::OutOfRange {
                        name: self.name.clone(),
                        value: v.to_string(),
                        min: bound_string(*min),
                        max: bound_string(*max),
                    });
                }
                self.check_range(v, *min, *max)
            }
            OptionSpec::Integer { min, max, .. } => {
                let v = value.as_i64().ok_or_else(mismatch)?;
                self.check_range(v, *min, *max)
            }
            OptionSpec::Color { .. } => {
                let s = value.as_str().ok_or_else(mismatch)?;
                s.parse::<Rgb>()
                    .map(|_| ())
                    .map_err(|source| OptionError::InvalidColor {
                        name: self.name.clone(),
                        source,
                    })
            }
            OptionSpec::Boolean { .. } => value.as_bool().map(|_| ()).ok_or_else(mismatch),
        }
    }

    fn check_range<T>(&self, value: T, min: Option<T>, max: Option<T>) -> Result<(), OptionError>
    where
        T: PartialOrd + Copy + fmt::Display,
    {
        if within(value, min, max) {
            Ok(())
        } else {
            Err(OptionError::OutOfRange {
                name: self.name.clone(),
                value: value.to_string(),
                min: bound_string(min),
                max: bound_string(max),
            })
        }
    }

    /// Parse textual input (e.g. from a command line) according to this
    /// declaration's kind, then check it.
    pub fn parse_value(&self, raw: &str) -> Result<OptionValue, OptionError> {
        let raw = raw.trim();
        let unparseable = || OptionError::Unparseable {
            name: self.name.clone(),
            kind: self.kind(),
            raw: raw.to_string(),
        };

        let value = match self.kind() {
            OptionKind::Percentage | OptionKind::Number => {
                OptionValue::Float(raw.parse::<f64>().map_err(|_| unparseable())?)
            }
            OptionKind::Integer => OptionValue::Integer(raw.parse::<i64>().map_err(|_| unparseable())?),
            OptionKind::Boolean => OptionValue::Bool(raw.parse::<bool>().map_err(|_| unparseable())?),
            OptionKind::Color => OptionValue::String(raw.to_string()),
        };

        self.check(&value)?;
        Ok(value)
    }
}

impl fmt::Display for OptionDeclaration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.spec {
            OptionSpec::Percentage { default } => write!(f, "{} (percentage, default {}%)", self.name, default),
            OptionSpec::Number { default, min, max } => write!(
                f,
                "{} (number, default {}, range {}..{})",
                self.name,
                default,
                bound_string(*min),
                bound_string(*max)
            ),
            OptionSpec::Integer { default, min, max } => write!(
                f,
                "{} (integer, default {}, range {}..{})",
                self.name,
                default,
                bound_string(*min),
                bound_string(*max)
            ),
            OptionSpec::Color { default } => write!(f, "{} (color, default {})", self.name, default),
            OptionSpec::Boolean { default } => write!(f, "{} (boolean, default {})", self.name, default),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_integer_default_below_min_fails() {
        let err = integer_option("stripes", 5, Some(10), Some(20)).unwrap_err();
        assert!(matches!(err, OptionError::DefaultOutOfBounds { .. }));
    }

    #[test]
    fn test_integer_default_above_max_fails() {
        assert!(integer_option("stripes", 25, Some(10), Some(20)).is_err());
    }

    #[test]
    fn test_integer_with_only_min() {
        let decl = integer_option("stripes", 10, Some(2), None).unwrap();
        assert_eq!(decl.kind(), OptionKind::Integer);
        assert_eq!(decl.default_value(), OptionValue::Integer(10));
        assert!(decl.check(&OptionValue::Integer(1_000_000)).is_ok());
        assert!(matches!(
            decl.check(&OptionValue::Integer(1)),
            Err(OptionError::OutOfRange { .. })
        ));
    }

    #[test]
    fn test_inverted_bounds_fail() {
        let err = number_option("gamma", 1.0, Some(2.0), Some(0.5)).unwrap_err();
        assert!(matches!(err, OptionError::InvalidBounds { .. }));
    }

    #[test]
    fn test_number_rejects_nan_default() {
        let err = number_option("gamma", f64::NAN, None, None).unwrap_err();
        assert!(matches!(err, OptionError::InvalidDefault { .. }));
    }

    #[test]
    fn test_percentage_default_bounds() {
        assert!(percentage_option("strength", 15.0).is_ok());
        assert!(percentage_option("strength", 0.0).is_ok());
        assert!(percentage_option("strength", 100.0).is_ok());
        assert!(percentage_option("strength", 101.0).is_err());
        assert!(percentage_option("strength", -1.0).is_err());
    }

    #[test]
    fn test_color_default_must_be_hex() {
        assert!(color_option("rowColor", "#ff0000").is_ok());
        let err = color_option("rowColor", "red").unwrap_err();
        assert!(matches!(
            err,
            OptionError::InvalidDefault { kind: OptionKind::Color, .. }
        ));
    }

    #[test]
    fn test_empty_name_rejected() {
        assert_eq!(boolean_option("  ", true).unwrap_err(), OptionError::EmptyName);
    }

    #[test]
    fn test_no_coercion_between_kinds() {
        let flag = boolean_option("invert", false).unwrap();
        assert!(matches!(
            flag.check(&OptionValue::Integer(1)),
            Err(OptionError::TypeMismatch { expected: OptionKind::Boolean, found: "integer", .. })
        ));

        let count = integer_option("stripes", 10, Some(2), None).unwrap();
        assert!(count.check(&OptionValue::Float(4.0)).is_err());

        let color = color_option("rowColor", "#ff0000").unwrap();
        assert!(color.check(&OptionValue::Bool(true)).is_err());
        assert!(matches!(
            color.check(&OptionValue::from("#ff00")),
            Err(OptionError::InvalidColor { .. })
        ));
    }

    #[test]
    fn test_percentage_accepts_integer_literal() {
        let strength = percentage_option("strength", 15.0).unwrap();
        assert!(strength.check(&OptionValue::Integer(50)).is_ok());
        assert!(strength.check(&OptionValue::Float(100.5)).is_err());
        assert!(strength.check(&OptionValue::Float(f64::NAN)).is_err());
    }

    #[test]
    fn test_parse_value_by_kind() {
        let count = integer_option("stripes", 10, Some(2), None).unwrap();
        assert_eq!(count.parse_value(" 4 ").unwrap(), OptionValue::Integer(4));
        assert!(matches!(
            count.parse_value("4.5"),
            Err(OptionError::Unparseable { .. })
        ));
        assert!(matches!(count.parse_value("1"), Err(OptionError::OutOfRange { .. })));

        let flag = boolean_option("invert", false).unwrap();
        assert_eq!(flag.parse_value("true").unwrap(), OptionValue::Bool(true));

        let strength = percentage_option("strength", 15.0).unwrap();
        assert_eq!(strength.parse_value("40").unwrap(), OptionValue::Float(40.0));

        let color = color_option("colColor", "#0000ff").unwrap();
        assert_eq!(color.parse_value("#00ff00").unwrap(), OptionValue::from("#00ff00"));
    }

    #[test]
    fn test_display_lists_bounds() {
        let decl = integer_option("stripes", 10, Some(2), None).unwrap();
        assert_eq!(decl.to_string(), "stripes (integer, default 10, range 2..unbounded)");
    }
}
