use std::fmt;

use serde::Serialize;

use crate::model::{FieldRef, MethodRef, TypeRef};

/// The value a selector is evaluated against.
///
/// `Null` is a legal subject everywhere: it is what converters produce when
/// there is nothing to navigate to (e.g. the superclass of
/// `java.lang.Object`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Subject<'m> {
    #[default]
    Null,
    Type(TypeRef<'m>),
    Method(MethodRef<'m>),
    Field(FieldRef<'m>),
}

/// Discriminant of a [`Subject`], used in diagnostics and function tables.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SubjectKind {
    Null,
    Type,
    Method,
    Field,
}

impl<'m> Subject<'m> {
    pub fn kind(&self) -> SubjectKind {
        match self {
            Subject::Null => SubjectKind::Null,
            Subject::Type(_) => SubjectKind::Type,
            Subject::Method(_) => SubjectKind::Method,
            Subject::Field(_) => SubjectKind::Field,
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Subject::Null)
    }

    /// The type a member is "about": the return type of a method, the
    /// declared type of a field, or the type itself.
    pub fn value_type(&self) -> Option<TypeRef<'m>> {
        match self {
            Subject::Null => None,
            Subject::Type(ty) => Some(*ty),
            Subject::Method(method) => Some(method.return_type()),
            Subject::Field(field) => Some(field.field_type()),
        }
    }

    /// Annotations attached to the declaration.
    pub fn annotations(&self) -> &'m [String] {
        match self {
            Subject::Null => &[],
            Subject::Type(ty) => ty.annotations(),
            Subject::Method(method) => method.annotations(),
            Subject::Field(field) => field.annotations(),
        }
    }

    /// Stable identifier: `pkg.Type`, `pkg.Type#field` or `pkg.Type#method(P1,P2)`.
    pub fn qualified_name(&self) -> String {
        match self {
            Subject::Null => "null".to_string(),
            Subject::Type(ty) => ty.name().to_string(),
            Subject::Field(field) => format!("{}#{}", field.declaring().name(), field.name()),
            Subject::Method(method) => {
                let parameters: Vec<&str> = method.parameters().map(|p| p.name()).collect();
                format!(
                    "{}#{}({})",
                    method.declaring().name(),
                    method.name(),
                    parameters.join(",")
                )
            }
        }
    }
}

impl<'m> From<TypeRef<'m>> for Subject<'m> {
    fn from(ty: TypeRef<'m>) -> Self {
        Subject::Type(ty)
    }
}

impl<'m> From<MethodRef<'m>> for Subject<'m> {
    fn from(method: MethodRef<'m>) -> Self {
        Subject::Method(method)
    }
}

impl<'m> From<FieldRef<'m>> for Subject<'m> {
    fn from(field: FieldRef<'m>) -> Self {
        Subject::Field(field)
    }
}

impl<'m, T: Into<Subject<'m>>> From<Option<T>> for Subject<'m> {
    fn from(value: Option<T>) -> Self {
        value.map_or(Subject::Null, Into::into)
    }
}

impl fmt::Display for SubjectKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            SubjectKind::Null => "null",
            SubjectKind::Type => "type",
            SubjectKind::Method => "method",
            SubjectKind::Field => "field",
        };
        f.write_str(name)
    }
}
