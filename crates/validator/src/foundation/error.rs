//! Error types for validation failures
//!
//! A [`ValidationError`] is the failure description every validator returns.
//! Leaf validators fill in a code, a message and a few parameters; combinators
//! attach their children's errors as `nested`, in evaluation order.
//!
//! All string fields use `Cow<'static, str>` so static codes and messages
//! never allocate.

use smallvec::SmallVec;
use std::borrow::Cow;
use std::fmt;

// ============================================================================
// VALIDATION ERROR
// ============================================================================

/// Parameters attached to an error, in insertion order.
///
/// Leaf validators attach at most three (`actual`, `expected`, `type`).
pub type ErrorParams = SmallVec<[(Cow<'static, str>, Cow<'static, str>); 3]>;

/// A structured validation failure.
///
/// # Examples
///
/// ```rust
/// use sentinel_validator::foundation::ValidationError;
///
/// let error = ValidationError::new("less", "6 is not less than 5")
///     .with_param("actual", "6")
///     .with_param("bound", "5");
///
/// assert_eq!(error.param("bound"), Some("5"));
/// ```
///
/// Composite failures carry their children:
///
/// ```rust
/// use sentinel_validator::foundation::ValidationError;
///
/// let error = ValidationError::new("and", "conjunction failed: 1 of 2 validators rejected")
///     .with_nested_error(ValidationError::new("less", "15 is not less than 10"));
///
/// assert_eq!(error.total_error_count(), 2);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct ValidationError {
    /// Machine-readable code, e.g. `"equal"`, `"and"`, `"not"`.
    pub code: Cow<'static, str>,

    /// Human-readable message.
    pub message: Cow<'static, str>,

    /// Ordered key-value parameters describing the compared values.
    #[cfg_attr(feature = "serde", serde(serialize_with = "serialize_params"))]
    pub params: ErrorParams,

    /// Child failures of a composite error, in evaluation order.
    pub nested: Vec<ValidationError>,
}

impl ValidationError {
    /// Creates a new validation error with a code and message.
    pub fn new(code: impl Into<Cow<'static, str>>, message: impl Into<Cow<'static, str>>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            params: SmallVec::new(),
            nested: Vec::new(),
        }
    }

    /// Adds a parameter to the error.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_param(
        mut self,
        key: impl Into<Cow<'static, str>>,
        value: impl Into<Cow<'static, str>>,
    ) -> Self {
        self.params.push((key.into(), value.into()));
        self
    }

    /// Replaces the nested errors.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_nested(mut self, errors: Vec<ValidationError>) -> Self {
        self.nested = errors;
        self
    }

    /// Appends a single nested error.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_nested_error(mut self, error: ValidationError) -> Self {
        self.nested.push(error);
        self
    }

    /// Looks up a parameter value by key.
    #[must_use]
    pub fn param(&self, key: &str) -> Option<&str> {
        self.params
            .iter()
            .find(|(k, _)| k.as_ref() == key)
            .map(|(_, v)| v.as_ref())
    }

    /// Returns true if this error has nested errors.
    #[must_use]
    pub fn has_nested(&self) -> bool {
        !self.nested.is_empty()
    }

    /// Returns the number of errors, this one included.
    #[must_use]
    pub fn total_error_count(&self) -> usize {
        1 + self
            .nested
            .iter()
            .map(ValidationError::total_error_count)
            .sum::<usize>()
    }

    /// Flattens the error tree depth-first, parents before children.
    #[must_use]
    pub fn flatten(&self) -> Vec<&ValidationError> {
        let mut result = vec![self];
        for nested in &self.nested {
            result.extend(nested.flatten());
        }
        result
    }

    /// Converts the error tree to a JSON value.
    #[cfg(feature = "serde")]
    pub fn to_json_value(&self) -> serde_json::Value {
        use serde_json::json;

        let params: serde_json::Map<String, serde_json::Value> = self
            .params
            .iter()
            .map(|(k, v)| (k.to_string(), serde_json::Value::String(v.to_string())))
            .collect();

        json!({
            "code": self.code,
            "message": self.message,
            "params": params,
            "nested": self.nested.iter().map(ValidationError::to_json_value).collect::<Vec<_>>(),
        })
    }
}

#[cfg(feature = "serde")]
fn serialize_params<S>(params: &ErrorParams, serializer: S) -> Result<S::Ok, S::Error>
where
    S: serde::Serializer,
{
    use serde::ser::SerializeMap;

    let mut map = serializer.serialize_map(Some(params.len()))?;
    for (k, v) in params {
        map.serialize_entry(k.as_ref(), v.as_ref())?;
    }
    map.end()
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.fmt_indented(f, 0)
    }
}

impl ValidationError {
    fn fmt_indented(&self, f: &mut fmt::Formatter<'_>, depth: usize) -> fmt::Result {
        write!(f, "{}: {}", self.code, self.message)?;

        for (i, error) in self.nested.iter().enumerate() {
            write!(f, "\n{:indent$}{}. ", "", i + 1, indent = (depth + 1) * 2)?;
            error.fmt_indented(f, depth + 1)?;
        }

        Ok(())
    }
}

impl std::error::Error for ValidationError {}

// ============================================================================
// ERROR COLLECTION
// ============================================================================

/// An ordered collection of validation errors.
///
/// The N-ary combinators accumulate child failures here before folding them
/// into a single composite [`ValidationError`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationErrors {
    errors: Vec<ValidationError>,
}

impl ValidationErrors {
    /// Creates a new empty error collection.
    #[must_use]
    pub fn new() -> Self {
        Self { errors: Vec::new() }
    }

    /// Creates an empty collection with room for `capacity` errors.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            errors: Vec::with_capacity(capacity),
        }
    }

    /// Adds an error to the collection.
    pub fn add(&mut self, error: ValidationError) {
        self.errors.push(error);
    }

    /// Records the error of a failed result, if any.
    pub fn record(&mut self, result: Result<(), ValidationError>) {
        if let Err(error) = result {
            self.errors.push(error);
        }
    }

    /// Returns true if there are any errors.
    #[must_use]
    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    /// Returns the number of errors.
    #[must_use]
    pub fn len(&self) -> usize {
        self.errors.len()
    }

    /// Returns true if empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    /// Returns all errors.
    #[must_use]
    pub fn errors(&self) -> &[ValidationError] {
        &self.errors
    }

    /// Consumes the collection, returning the errors in insertion order.
    #[must_use]
    pub fn into_vec(self) -> Vec<ValidationError> {
        self.errors
    }
}

impl FromIterator<ValidationError> for ValidationErrors {
    fn from_iter<I: IntoIterator<Item = ValidationError>>(iter: I) -> Self {
        Self {
            errors: iter.into_iter().collect(),
        }
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Validation failed with {} error(s):", self.errors.len())?;
        for (i, error) in self.errors.iter().enumerate() {
            writeln!(f, "  {}. {}", i + 1, error)?;
        }
        Ok(())
    }
}

impl std::error::Error for ValidationErrors {}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_simple_error() {
        let error = ValidationError::new("test", "Test error");
        assert_eq!(error.code, "test");
        assert_eq!(error.message, "Test error");
        assert!(!error.has_nested());
    }

    #[test]
    fn test_error_with_params() {
        let error = ValidationError::new("less", "Too big")
            .with_param("actual", "6")
            .with_param("bound", "5");

        assert_eq!(error.param("actual"), Some("6"));
        assert_eq!(error.param("bound"), Some("5"));
        assert_eq!(error.param("missing"), None);
    }

    #[test]
    fn test_nested_errors() {
        let error = ValidationError::new("and", "conjunction failed").with_nested(vec![
            ValidationError::new("less", "first"),
            ValidationError::new("greater", "second"),
        ]);

        assert_eq!(error.nested.len(), 2);
        assert_eq!(error.total_error_count(), 3);
    }

    #[test]
    fn test_flatten() {
        let error = ValidationError::new("root", "Root error").with_nested(vec![
            ValidationError::new("child1", "Child 1")
                .with_nested(vec![ValidationError::new("grandchild", "Grandchild")]),
            ValidationError::new("child2", "Child 2"),
        ]);

        let codes: Vec<_> = error.flatten().iter().map(|e| e.code.as_ref()).collect();
        assert_eq!(codes, ["root", "child1", "grandchild", "child2"]);
    }

    #[test]
    fn test_display_lists_nested_in_order() {
        let error = ValidationError::new("or", "disjunction failed").with_nested(vec![
            ValidationError::new("less", "a"),
            ValidationError::new("equal", "b"),
        ]);

        assert_eq!(
            error.to_string(),
            "or: disjunction failed\n  1. less: a\n  2. equal: b"
        );
    }

    #[test]
    fn test_display_indents_deeper_levels() {
        let error = ValidationError::new("and", "outer").with_nested_error(
            ValidationError::new("or", "inner").with_nested_error(ValidationError::new("x", "y")),
        );

        assert_eq!(
            error.to_string(),
            "and: outer\n  1. or: inner\n    1. x: y"
        );
    }

    #[test]
    fn test_error_collection() {
        let mut errors = ValidationErrors::with_capacity(3);
        errors.add(ValidationError::new("error1", "First error"));
        errors.record(Ok(()));
        errors.record(Err(ValidationError::new("error2", "Second error")));

        assert_eq!(errors.len(), 2);
        assert!(errors.has_errors());
        let codes: Vec<_> = errors.errors().iter().map(|e| e.code.as_ref()).collect();
        assert_eq!(codes, ["error1", "error2"]);
    }

    #[test]
    fn test_zero_alloc_static_strings() {
        let error = ValidationError::new("not", "negated validator passed");
        assert!(matches!(error.code, Cow::Borrowed(_)));
        assert!(matches!(error.message, Cow::Borrowed(_)));
    }

    #[test]
    fn test_dynamic_strings() {
        let code = format!("error_{}", 42);
        let error = ValidationError::new(code, "Dynamic error");
        assert!(matches!(error.code, Cow::Owned(_)));
        assert!(matches!(error.message, Cow::Borrowed(_)));
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_to_json_value_keeps_nesting() {
        use serde_json::json;

        let error = ValidationError::new("and", "conjunction failed")
            .with_nested_error(ValidationError::new("less", "too big").with_param("bound", "10"));

        assert_eq!(
            error.to_json_value(),
            json!({
                "code": "and",
                "message": "conjunction failed",
                "params": {},
                "nested": [{
                    "code": "less",
                    "message": "too big",
                    "params": { "bound": "10" },
                    "nested": [],
                }],
            })
        );
    }
}
