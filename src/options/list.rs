use std::collections::{HashMap, HashSet};

use crate::error::OptionError;

use super::{declaration::OptionDeclaration, resolved::ResolvedOptions, value::OptionValue};

/// The ordered option declarations of one filter.
///
/// Order is presentation order for a host UI and has no effect on execution.
/// Names are unique; construction fails on a duplicate.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct OptionList {
    declarations: Vec<OptionDeclaration>,
}

impl OptionList {
    pub fn new(declarations: Vec<OptionDeclaration>) -> Result<Self, OptionError> {
        let mut seen = HashSet::new();
        for decl in &declarations {
            if !seen.insert(decl.name()) {
                return Err(OptionError::DuplicateName { name: decl.name().to_string() });
            }
        }
        Ok(Self { declarations })
    }

    pub fn get(&self, name: &str) -> Option<&OptionDeclaration> {
        self.declarations.iter().find(|d| d.name() == name)
    }

    pub fn iter(&self) -> impl Iterator<Item = &OptionDeclaration> {
        self.declarations.iter()
    }

    pub fn len(&self) -> usize {
        self.declarations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.declarations.is_empty()
    }

    /// Every option bound to its declared default
    pub fn defaults(&self) -> ResolvedOptions {
        self.declarations
            .iter()
            .map(|d| (d.name().to_string(), d.default_value()))
            .collect()
    }

    /// Build a complete option set: declared defaults, replaced by any
    /// `overrides`. Every override must name a declared option and carry a
    /// legal value for it.
    pub fn resolve(&self, overrides: &HashMap<String, OptionValue>) -> Result<ResolvedOptions, OptionError> {
        let mut resolved = self.defaults();
        for (name, value) in overrides {
            let decl = self
                .get(name)
                .ok_or_else(|| OptionError::Unknown { name: name.clone() })?;
            decl.check(value)?;
            resolved.insert(name.clone(), value.clone());
        }
        Ok(resolved)
    }

    /// Parse `name=value` pairs against the declarations.
    pub fn parse_assignments<'a, I>(&self, assignments: I) -> Result<HashMap<String, OptionValue>, OptionError>
    where
        I: IntoIterator<Item = &'a str>,
    {
        let mut values = HashMap::new();
        for assignment in assignments {
            let (name, raw) = assignment.split_once('=').ok_or_else(|| OptionError::MalformedAssignment {
                input: assignment.to_string(),
            })?;
            let name = name.trim();
            let decl = self
                .get(name)
                .ok_or_else(|| OptionError::Unknown { name: name.to_string() })?;
            values.insert(name.to_string(), decl.parse_value(raw)?);
        }
        Ok(values)
    }

    /// Check that `options` is exactly a legal binding for these
    /// declarations: no unknown names, nothing missing, every value legal.
    pub fn validate(&self, options: &ResolvedOptions) -> Result<(), OptionError> {
        for (name, _) in options.iter() {
            if self.get(name).is_none() {
                return Err(OptionError::Unknown { name: name.to_string() });
            }
        }

        for decl in &self.declarations {
            let value = options
                .get(decl.name())
                .ok_or_else(|| OptionError::Missing { name: decl.name().to_string() })?;
            decl.check(value)?;
        }

        Ok(())
    }
}

impl<'a> IntoIterator for &'a OptionList {
    type Item = &'a OptionDeclaration;
    type IntoIter = std::slice::Iter<'a, OptionDeclaration>;

    fn into_iter(self) -> Self::IntoIter {
        self.declarations.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::options::{boolean_option, color_option, integer_option, percentage_option};

    fn sample() -> OptionList {
        OptionList::new(vec![
            integer_option("stripes", 10, Some(2), None).unwrap(),
            color_option("rowColor", "#ff0000").unwrap(),
            percentage_option("strength", 15.0).unwrap(),
        ])
        .unwrap()
    }

    #[test]
    fn test_duplicate_names_rejected() {
        let err = OptionList::new(vec![
            boolean_option("invert", false).unwrap(),
            boolean_option("invert", true).unwrap(),
        ])
        .unwrap_err();
        assert_eq!(err, OptionError::DuplicateName { name: "invert".to_string() });
    }

    #[test]
    fn test_presentation_order_kept() {
        let list = sample();
        let names: Vec<&str> = list.iter().map(|d| d.name()).collect();
        assert_eq!(names, vec!["stripes", "rowColor", "strength"]);
    }

    #[test]
    fn test_defaults_cover_every_declaration() {
        let list = sample();
        let defaults = list.defaults();
        assert_eq!(defaults.len(), 3);
        assert_eq!(defaults.get_i64("stripes"), Some(10));
        assert_eq!(defaults.get_str("rowColor"), Some("#ff0000"));
        assert_eq!(defaults.get_f64("strength"), Some(15.0));
        assert!(list.validate(&defaults).is_ok());
    }

    #[test]
    fn test_resolve_applies_overrides() {
        let mut overrides = HashMap::new();
        overrides.insert("stripes".to_string(), OptionValue::Integer(4));

        let resolved = sample().resolve(&overrides).unwrap();
        assert_eq!(resolved.get_i64("stripes"), Some(4));
        assert_eq!(resolved.get_f64("strength"), Some(15.0));
    }

    #[test]
    fn test_resolve_rejects_unknown_and_illegal() {
        let mut overrides = HashMap::new();
        overrides.insert("stripez".to_string(), OptionValue::Integer(4));
        assert!(matches!(
            sample().resolve(&overrides),
            Err(OptionError::Unknown { .. })
        ));

        let mut overrides = HashMap::new();
        overrides.insert("stripes".to_string(), OptionValue::from("four"));
        assert!(matches!(
            sample().resolve(&overrides),
            Err(OptionError::TypeMismatch { .. })
        ));
    }

    #[test]
    fn test_validate_detects_missing() {
        let list = sample();
        let mut options = list.defaults();
        options.remove("rowColor");
        assert_eq!(
            list.validate(&options).unwrap_err(),
            OptionError::Missing { name: "rowColor".to_string() }
        );
    }

    #[test]
    fn test_parse_assignments() {
        let values = sample()
            .parse_assignments(["stripes=4", "rowColor = #00ff00"])
            .unwrap();
        assert_eq!(values.get("stripes"), Some(&OptionValue::Integer(4)));
        assert_eq!(values.get("rowColor"), Some(&OptionValue::from("#00ff00")));

        assert!(matches!(
            sample().parse_assignments(["stripes"]),
            Err(OptionError::MalformedAssignment { .. })
        ));
        assert!(sample().parse_assignments(["unknown=1"]).is_err());
    }
}
