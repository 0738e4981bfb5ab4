//! # Type Model
//!
//! The static type/member graph that selectors are evaluated against.
//!
//! A [`Model`] is an immutable arena of type, method and field descriptors.
//! Descriptors refer to each other through [`TypeId`], [`MethodId`] and
//! [`FieldId`] indices, and are navigated through the `Copy` handles
//! [`TypeRef`], [`MethodRef`] and [`FieldRef`]. A [`Subject`] wraps one of
//! those handles (or the null state) and is what a compiled selector tests.
//!
//! ## Built-in types
//!
//! Every model contains `java.lang.Object` (the universal base type), the
//! eight primitive types and `void`. Array types such as `int[]` are created
//! on demand whenever a declaration references them.
//!
//! ## Loading
//!
//! Models are usually loaded from JSON through [`Model::from_json`]:
//!
//! ```
//! use member_selector::model::Model;
//!
//! let model = Model::from_json(r#"{
//!     "types": [{
//!         "name": "com.example.Point",
//!         "modifiers": ["public", "final"],
//!         "fields": [{ "name": "x", "type": "int", "modifiers": ["private", "final"] }]
//!     }]
//! }"#).unwrap();
//!
//! let point = model.type_named("com.example.Point").unwrap();
//! assert_eq!(point.simple_name(), "Point");
//! assert_eq!(point.fields().count(), 1);
//! ```

mod descriptors;
mod handles;
mod modifiers;
mod spec;
mod subject;

pub use descriptors::{
    FieldDescriptor, FieldId, MethodDescriptor, MethodId, TypeDescriptor, TypeId, TypeKind,
};
pub use handles::{FieldRef, MethodRef, TypeRef};
pub use modifiers::Modifiers;
pub use spec::{FieldSpec, MethodSpec, ModelSpec, TypeSpec};
pub use subject::{Subject, SubjectKind};

use std::collections::HashMap;

use thiserror::Error;

/// Canonical name of the universal base type.
pub const OBJECT: &str = "java.lang.Object";

/// Name of the return type of methods that return nothing.
pub const VOID: &str = "void";

const PRIMITIVES: [&str; 9] = [
    "boolean", "byte", "char", "short", "int", "long", "float", "double", VOID,
];

/// Errors raised while building a [`Model`].
#[derive(Debug, Error)]
pub enum ModelError {
    #[error("invalid model JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("type '{0}' is declared more than once")]
    DuplicateType(String),

    #[error("'{referenced_by}' refers to unknown type '{name}'")]
    UnknownType { name: String, referenced_by: String },

    #[error("'{declaration}' has unknown modifier '{modifier}'")]
    UnknownModifier {
        modifier: String,
        declaration: String,
    },

    #[error("'{declaration}' lists '{name}' as an interface, but it is a {kind:?}")]
    NotAnInterface {
        name: String,
        declaration: String,
        kind: TypeKind,
    },

    #[error("method '{0}' is declared varargs but its last parameter is not an array")]
    VarargsNotArray(String),

    #[error("type '{name}' is part of a {relation} cycle")]
    Cycle { name: String, relation: &'static str },
}

/// Immutable arena of types, methods and fields.
#[derive(Debug, Clone)]
pub struct Model {
    pub(crate) types: Vec<TypeDescriptor>,
    pub(crate) methods: Vec<MethodDescriptor>,
    pub(crate) fields: Vec<FieldDescriptor>,
    pub(crate) index: HashMap<String, TypeId>,
}

impl Default for Model {
    fn default() -> Self {
        Self::with_builtins()
    }
}

impl Model {
    /// A model holding only `java.lang.Object`, the primitives and `void`.
    pub fn with_builtins() -> Self {
        let mut model = Model {
            types: Vec::new(),
            methods: Vec::new(),
            fields: Vec::new(),
            index: HashMap::new(),
        };
        model.insert_type(TypeDescriptor::new(OBJECT, TypeKind::Class, Modifiers::PUBLIC));
        for name in PRIMITIVES {
            model.insert_type(TypeDescriptor::new(
                name,
                TypeKind::Primitive,
                Modifiers::PUBLIC | Modifiers::ABSTRACT | Modifiers::FINAL,
            ));
        }
        model
    }

    /// Parse a JSON document shaped like [`ModelSpec`] and resolve it.
    pub fn from_json(json: &str) -> Result<Self, ModelError> {
        let spec: ModelSpec = serde_json::from_str(json)?;
        Model::from_spec(&spec)
    }

    /// Same as [`Model::from_json`] for an already parsed JSON value.
    pub fn from_value(value: serde_json::Value) -> Result<Self, ModelError> {
        let spec: ModelSpec = serde_json::from_value(value)?;
        Model::from_spec(&spec)
    }

    /// Look up a type by canonical name.
    pub fn type_named(&self, name: &str) -> Option<TypeRef<'_>> {
        self.index.get(name).map(|id| TypeRef::new(self, *id))
    }

    /// The universal base type.
    pub fn object(&self) -> TypeRef<'_> {
        TypeRef::new(self, TypeId(0))
    }

    /// First method called `name` declared directly in `type_name`.
    pub fn method(&self, type_name: &str, name: &str) -> Option<MethodRef<'_>> {
        self.type_named(type_name)?
            .methods()
            .find(|method| method.name() == name)
    }

    /// Field called `name` declared directly in `type_name`.
    pub fn field(&self, type_name: &str, name: &str) -> Option<FieldRef<'_>> {
        self.type_named(type_name)?
            .fields()
            .find(|field| field.name() == name)
    }

    /// All types, including built-in and array types, in insertion order.
    pub fn types(&self) -> impl Iterator<Item = TypeRef<'_>> {
        (0..self.types.len()).map(|i| TypeRef::new(self, TypeId(i)))
    }

    /// Every declared type followed by its fields and methods, in
    /// declaration order. Built-in and on-demand array types are skipped
    /// unless they were declared explicitly.
    pub fn subjects(&self) -> impl Iterator<Item = Subject<'_>> {
        self.types()
            .filter(|ty| ty.descriptor().declared)
            .flat_map(|ty| {
                std::iter::once(Subject::Type(ty))
                    .chain(ty.fields().map(Subject::Field))
                    .chain(ty.methods().map(Subject::Method))
            })
    }

    pub(crate) fn insert_type(&mut self, descriptor: TypeDescriptor) -> TypeId {
        let id = TypeId(self.types.len());
        self.index.insert(descriptor.name.clone(), id);
        self.types.push(descriptor);
        id
    }

    /// Resolve `name`, creating array types for a known element type.
    pub(crate) fn resolve(&mut self, name: &str) -> Option<TypeId> {
        if let Some(id) = self.index.get(name) {
            return Some(*id);
        }
        let element = name.strip_suffix("[]")?;
        let component = self.resolve(element)?;
        let object = self.object().id();
        let mut array = TypeDescriptor::new(
            name,
            TypeKind::Array,
            Modifiers::PUBLIC | Modifiers::ABSTRACT | Modifiers::FINAL,
        );
        array.superclass = Some(object);
        array.component = Some(component);
        Some(self.insert_type(array))
    }
}
