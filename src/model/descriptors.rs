use serde::{Deserialize, Serialize};

use crate::model::Modifiers;

/// Index of a type inside a [`Model`](crate::model::Model).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TypeId(pub(crate) usize);

/// Index of a method inside a [`Model`](crate::model::Model).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct MethodId(pub(crate) usize);

/// Index of a field inside a [`Model`](crate::model::Model).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct FieldId(pub(crate) usize);

/// What sort of type a [`TypeDescriptor`] describes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TypeKind {
    #[default]
    Class,
    Interface,
    Annotation,
    Enum,
    /// The eight primitive types and `void`
    Primitive,
    /// `T[]`, see [`TypeDescriptor::component`]
    Array,
}

/// A declared, built-in or array type.
#[derive(Debug, Clone)]
pub struct TypeDescriptor {
    /// Canonical name, e.g. `java.util.Map.Entry`, `int`, `java.lang.String[]`
    pub name: String,
    pub kind: TypeKind,
    pub modifiers: Modifiers,
    pub synthetic: bool,
    pub superclass: Option<TypeId>,
    pub interfaces: Vec<TypeId>,
    /// Lexically enclosing type for nested types
    pub enclosing: Option<TypeId>,
    /// Element type when `kind` is [`TypeKind::Array`]
    pub component: Option<TypeId>,
    /// Canonical names of the annotation types present on the declaration
    pub annotations: Vec<String>,
    pub fields: Vec<FieldId>,
    pub methods: Vec<MethodId>,
    /// False for built-in and on-demand array types
    pub declared: bool,
}

impl TypeDescriptor {
    pub(crate) fn new(name: impl Into<String>, kind: TypeKind, modifiers: Modifiers) -> Self {
        TypeDescriptor {
            name: name.into(),
            kind,
            modifiers,
            synthetic: false,
            superclass: None,
            interfaces: Vec::new(),
            enclosing: None,
            component: None,
            annotations: Vec::new(),
            fields: Vec::new(),
            methods: Vec::new(),
            declared: false,
        }
    }
}

/// A method declared in some type.
#[derive(Debug, Clone)]
pub struct MethodDescriptor {
    pub name: String,
    pub declaring: TypeId,
    pub modifiers: Modifiers,
    pub return_type: TypeId,
    pub parameters: Vec<TypeId>,
    pub exceptions: Vec<TypeId>,
    pub annotations: Vec<String>,
    /// Last parameter is declared `T...`
    pub varargs: bool,
    pub bridge: bool,
    pub synthetic: bool,
}

/// A field declared in some type.
#[derive(Debug, Clone)]
pub struct FieldDescriptor {
    pub name: String,
    pub declaring: TypeId,
    pub modifiers: Modifiers,
    pub field_type: TypeId,
    pub annotations: Vec<String>,
    pub synthetic: bool,
}
