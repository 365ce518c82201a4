//! Type specifications.
//!
//! A [`TypeSpec`] is an ordered list of alternatives; a value satisfies it
//! when it satisfies any entry. Entries name a canonical tag, an extended
//! category, or a class to test with `instanceof`. Names that are neither
//! are kept verbatim so they can be reported, but never match.

use core_types::{CheckError, CheckResult, FunctionObject, TypeTag, Value};
use std::fmt;
use std::sync::Arc;

use crate::category::{is_class, ExtendedCategory};
use crate::classify::classify;

/// One alternative of a [`TypeSpec`].
#[derive(Debug, Clone)]
pub enum TypeSpecEntry {
    /// Canonical tag, compared with [`classify`]
    Tag(TypeTag),
    /// Extended category predicate
    Category(ExtendedCategory),
    /// Constructor for an `instanceof` test
    Class(Arc<FunctionObject>),
    /// Unrecognised name; never matches
    Unknown(String),
}

impl TypeSpecEntry {
    /// Resolve a name to a tag, then a category, else keep it as unknown
    pub fn named(name: &str) -> Self {
        if let Some(tag) = TypeTag::from_name(name) {
            return TypeSpecEntry::Tag(tag);
        }
        match ExtendedCategory::from_name(name) {
            Some(category) => TypeSpecEntry::Category(category),
            None => TypeSpecEntry::Unknown(name.to_string()),
        }
    }

    /// How the entry is spelled in messages; classes by declared name
    pub fn label(&self) -> &str {
        match self {
            TypeSpecEntry::Tag(tag) => tag.as_str(),
            TypeSpecEntry::Category(category) => category.as_str(),
            TypeSpecEntry::Class(ctor) => ctor.name(),
            TypeSpecEntry::Unknown(name) => name,
        }
    }
}

impl From<&str> for TypeSpecEntry {
    fn from(name: &str) -> Self {
        TypeSpecEntry::named(name)
    }
}

impl From<TypeTag> for TypeSpecEntry {
    fn from(tag: TypeTag) -> Self {
        TypeSpecEntry::Tag(tag)
    }
}

impl From<ExtendedCategory> for TypeSpecEntry {
    fn from(category: ExtendedCategory) -> Self {
        TypeSpecEntry::Category(category)
    }
}

impl From<Arc<FunctionObject>> for TypeSpecEntry {
    fn from(ctor: Arc<FunctionObject>) -> Self {
        TypeSpecEntry::Class(ctor)
    }
}

/// Caller-declared expectation: any of its entries.
///
/// # Examples
///
/// ```
/// use core_types::TypeTag;
/// use type_classifier::{ExtendedCategory, TypeSpec};
///
/// let spec = TypeSpec::from([TypeTag::String]).with(ExtendedCategory::Nil);
/// assert_eq!(spec.to_string(), "String|Nil");
///
/// let parsed = TypeSpec::parse("Number | LikeNumber");
/// assert_eq!(parsed.entries().len(), 2);
/// ```
#[derive(Debug, Clone, Default)]
pub struct TypeSpec {
    entries: Vec<TypeSpecEntry>,
}

impl TypeSpec {
    /// Create a spec from entries
    pub fn new(entries: Vec<TypeSpecEntry>) -> Self {
        TypeSpec { entries }
    }

    /// Parse `A|B|C`; blank segments are skipped
    pub fn parse(names: &str) -> Self {
        names
            .split('|')
            .map(str::trim)
            .filter(|name| !name.is_empty())
            .map(TypeSpecEntry::named)
            .collect()
    }

    /// Add one more alternative
    pub fn with(mut self, entry: impl Into<TypeSpecEntry>) -> Self {
        self.entries.push(entry.into());
        self
    }

    /// The alternatives, in declaration order
    pub fn entries(&self) -> &[TypeSpecEntry] {
        &self.entries
    }

    /// Whether the spec has no alternatives
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Build a spec from a host value.
    ///
    /// Accepts a string (`A|B` names, as [`TypeSpec::parse`]), a class, or an
    /// array of strings and functions; each array string is one name. Anything else is an [`ErrorKind::InvalidSpec`] error.
    ///
    /// [`ErrorKind::InvalidSpec`]: core_types::ErrorKind::InvalidSpec
    pub fn from_value(value: &Value) -> CheckResult<Self> {
        match value {
            Value::Undefined => Err(CheckError::invalid_spec(
                "Missing required parameter: \"typeSpec\".",
            )),
            Value::String(names) => {
                let spec = TypeSpec::parse(names);
                if spec.is_empty() {
                    return Err(CheckError::invalid_spec(
                        "Parameter \"typeSpec\" must name at least one type.",
                    ));
                }
                Ok(spec)
            }
            Value::Function(ctor) if is_class(value) => {
                Ok(TypeSpec::new(vec![TypeSpecEntry::Class(Arc::clone(ctor))]))
            }
            Value::Array(items) => {
                if items.is_empty() {
                    return Err(CheckError::invalid_spec(
                        "Parameter \"typeSpec\" must name at least one type.",
                    ));
                }
                items
                    .iter()
                    .enumerate()
                    .map(|(index, item)| match item {
                        Value::String(name) => Ok(TypeSpecEntry::named(name)),
                        Value::Function(ctor) => Ok(TypeSpecEntry::Class(Arc::clone(ctor))),
                        other => Err(CheckError::invalid_spec(format!(
                            "Expected parameter \"typeSpec[{}]\" to be String|Function, got {}.",
                            index,
                            classify(other)
                        ))),
                    })
                    .collect()
            }
            other => Err(CheckError::invalid_spec(format!(
                "Expected parameter \"typeSpec\" to be String|Class|Array, got {}.",
                classify(other)
            ))),
        }
    }
}

impl fmt::Display for TypeSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, entry) in self.entries.iter().enumerate() {
            if i > 0 {
                f.write_str("|")?;
            }
            f.write_str(entry.label())?;
        }
        Ok(())
    }
}

impl FromIterator<TypeSpecEntry> for TypeSpec {
    fn from_iter<I: IntoIterator<Item = TypeSpecEntry>>(iter: I) -> Self {
        TypeSpec::new(iter.into_iter().collect())
    }
}

impl From<&str> for TypeSpec {
    fn from(names: &str) -> Self {
        TypeSpec::parse(names)
    }
}

impl From<TypeTag> for TypeSpec {
    fn from(tag: TypeTag) -> Self {
        TypeSpec::new(vec![TypeSpecEntry::Tag(tag)])
    }
}

impl From<ExtendedCategory> for TypeSpec {
    fn from(category: ExtendedCategory) -> Self {
        TypeSpec::new(vec![TypeSpecEntry::Category(category)])
    }
}

impl From<Arc<FunctionObject>> for TypeSpec {
    fn from(ctor: Arc<FunctionObject>) -> Self {
        TypeSpec::new(vec![TypeSpecEntry::Class(ctor)])
    }
}

impl From<TypeSpecEntry> for TypeSpec {
    fn from(entry: TypeSpecEntry) -> Self {
        TypeSpec::new(vec![entry])
    }
}

impl<T: Into<TypeSpecEntry>> From<Vec<T>> for TypeSpec {
    fn from(entries: Vec<T>) -> Self {
        entries.into_iter().map(Into::into).collect()
    }
}

impl<T: Into<TypeSpecEntry>, const N: usize> From<[T; N]> for TypeSpec {
    fn from(entries: [T; N]) -> Self {
        entries.into_iter().map(Into::into).collect()
    }
}
