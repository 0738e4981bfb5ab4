use std::fmt;

use crate::model::{
    FieldDescriptor, FieldId, MethodDescriptor, MethodId, Model, Modifiers, OBJECT, TypeDescriptor,
    TypeId, TypeKind, VOID,
};

/// Navigable handle to a type of a [`Model`].
#[derive(Clone, Copy)]
pub struct TypeRef<'m> {
    model: &'m Model,
    id: TypeId,
}

/// Navigable handle to a method of a [`Model`].
#[derive(Clone, Copy)]
pub struct MethodRef<'m> {
    model: &'m Model,
    id: MethodId,
}

/// Navigable handle to a field of a [`Model`].
#[derive(Clone, Copy)]
pub struct FieldRef<'m> {
    model: &'m Model,
    id: FieldId,
}

impl<'m> TypeRef<'m> {
    pub(crate) fn new(model: &'m Model, id: TypeId) -> Self {
        TypeRef { model, id }
    }

    pub fn id(&self) -> TypeId {
        self.id
    }

    pub fn descriptor(&self) -> &'m TypeDescriptor {
        &self.model.types[self.id.0]
    }

    /// Canonical name.
    pub fn name(&self) -> &'m str {
        &self.descriptor().name
    }

    /// Name without package or enclosing types; arrays keep their `[]`.
    pub fn simple_name(&self) -> String {
        match self.component() {
            Some(component) => format!("{}[]", component.simple_name()),
            None => {
                let name = self.name();
                name.rsplit('.').next().unwrap_or(name).to_string()
            }
        }
    }

    pub fn kind(&self) -> TypeKind {
        self.descriptor().kind
    }

    pub fn modifiers(&self) -> Modifiers {
        self.descriptor().modifiers
    }

    pub fn annotations(&self) -> &'m [String] {
        &self.descriptor().annotations
    }

    pub fn is_object(&self) -> bool {
        self.name() == OBJECT
    }

    pub fn is_void(&self) -> bool {
        self.name() == VOID
    }

    pub fn is_primitive(&self) -> bool {
        self.kind() == TypeKind::Primitive
    }

    pub fn is_array(&self) -> bool {
        self.kind() == TypeKind::Array
    }

    pub fn is_interface(&self) -> bool {
        self.kind() == TypeKind::Interface
    }

    pub fn superclass(&self) -> Option<TypeRef<'m>> {
        self.descriptor().superclass.map(|id| self.with(id))
    }

    /// Directly implemented (or, for interfaces, extended) interfaces.
    pub fn interfaces(&self) -> impl Iterator<Item = TypeRef<'m>> + use<'m> {
        let model = self.model;
        self.descriptor()
            .interfaces
            .iter()
            .map(move |id| TypeRef::new(model, *id))
    }

    /// Every interface reachable through superclasses and super-interfaces,
    /// each listed once.
    pub fn all_interfaces(&self) -> Vec<TypeRef<'m>> {
        let mut found: Vec<TypeRef<'m>> = Vec::new();
        let mut pending: Vec<TypeRef<'m>> = self.superclasses_inclusive().collect();
        while let Some(ty) = pending.pop() {
            for interface in ty.interfaces() {
                if !found.contains(&interface) {
                    found.push(interface);
                    pending.push(interface);
                }
            }
        }
        found
    }

    /// This type followed by its superclass chain.
    pub fn superclasses_inclusive(&self) -> impl Iterator<Item = TypeRef<'m>> + use<'m> {
        std::iter::successors(Some(*self), |ty| ty.superclass())
    }

    pub fn enclosing(&self) -> Option<TypeRef<'m>> {
        self.descriptor().enclosing.map(|id| self.with(id))
    }

    /// Outermost enclosing type; a top-level type is its own nest host.
    pub fn nest_host(&self) -> TypeRef<'m> {
        let mut host = *self;
        while let Some(outer) = host.enclosing() {
            host = outer;
        }
        host
    }

    pub fn component(&self) -> Option<TypeRef<'m>> {
        self.descriptor().component.map(|id| self.with(id))
    }

    /// Package of the nest host, empty for the default package.
    pub fn package(&self) -> &'m str {
        let host = self.nest_host();
        match host.name().rsplit_once('.') {
            Some((package, _)) => package,
            None => "",
        }
    }

    pub fn fields(&self) -> impl Iterator<Item = FieldRef<'m>> + use<'m> {
        let model = self.model;
        self.descriptor()
            .fields
            .iter()
            .map(move |id| FieldRef::new(model, *id))
    }

    pub fn methods(&self) -> impl Iterator<Item = MethodRef<'m>> + use<'m> {
        let model = self.model;
        self.descriptor()
            .methods
            .iter()
            .map(move |id| MethodRef::new(model, *id))
    }

    fn with(&self, id: TypeId) -> TypeRef<'m> {
        TypeRef::new(self.model, id)
    }
}

impl<'m> MethodRef<'m> {
    pub(crate) fn new(model: &'m Model, id: MethodId) -> Self {
        MethodRef { model, id }
    }

    pub fn id(&self) -> MethodId {
        self.id
    }

    pub fn descriptor(&self) -> &'m MethodDescriptor {
        &self.model.methods[self.id.0]
    }

    pub fn name(&self) -> &'m str {
        &self.descriptor().name
    }

    pub fn modifiers(&self) -> Modifiers {
        self.descriptor().modifiers
    }

    pub fn annotations(&self) -> &'m [String] {
        &self.descriptor().annotations
    }

    pub fn declaring(&self) -> TypeRef<'m> {
        TypeRef::new(self.model, self.descriptor().declaring)
    }

    pub fn return_type(&self) -> TypeRef<'m> {
        TypeRef::new(self.model, self.descriptor().return_type)
    }

    pub fn parameters(&self) -> impl ExactSizeIterator<Item = TypeRef<'m>> + use<'m> {
        let model = self.model;
        self.descriptor()
            .parameters
            .iter()
            .map(move |id| TypeRef::new(model, *id))
    }

    pub fn exceptions(&self) -> impl ExactSizeIterator<Item = TypeRef<'m>> + use<'m> {
        let model = self.model;
        self.descriptor()
            .exceptions
            .iter()
            .map(move |id| TypeRef::new(model, *id))
    }

    /// True if this method overrides a method declared in a superclass.
    ///
    /// Private and static methods never override. A package-private method
    /// in the superclass is only overridden from within the same package.
    pub fn overrides(&self) -> bool {
        if !self.can_override() {
            return false;
        }
        let declaring = self.declaring();
        declaring
            .superclasses_inclusive()
            .skip(1)
            .flat_map(|ty| ty.methods())
            .any(|inherited| self.same_shape(&inherited) && inherited.visible_from(declaring))
    }

    /// True if this method implements a method of some interface reachable
    /// from its declaring type.
    pub fn implements(&self) -> bool {
        if !self.can_override() {
            return false;
        }
        self.declaring()
            .all_interfaces()
            .into_iter()
            .flat_map(|ty| ty.methods())
            .any(|abstract_method| {
                self.same_shape(&abstract_method)
                    && !abstract_method.modifiers().contains(Modifiers::STATIC)
            })
    }

    fn can_override(&self) -> bool {
        !self
            .modifiers()
            .intersects(Modifiers::PRIVATE | Modifiers::STATIC)
    }

    fn same_shape(&self, other: &MethodRef<'_>) -> bool {
        self.name() == other.name() && self.descriptor().parameters == other.descriptor().parameters
    }

    fn visible_from(&self, subclass: TypeRef<'_>) -> bool {
        let modifiers = self.modifiers();
        if modifiers.intersects(Modifiers::PRIVATE | Modifiers::STATIC) {
            return false;
        }
        !modifiers.is_package() || self.declaring().package() == subclass.package()
    }
}

impl<'m> FieldRef<'m> {
    pub(crate) fn new(model: &'m Model, id: FieldId) -> Self {
        FieldRef { model, id }
    }

    pub fn id(&self) -> FieldId {
        self.id
    }

    pub fn descriptor(&self) -> &'m FieldDescriptor {
        &self.model.fields[self.id.0]
    }

    pub fn name(&self) -> &'m str {
        &self.descriptor().name
    }

    pub fn modifiers(&self) -> Modifiers {
        self.descriptor().modifiers
    }

    pub fn annotations(&self) -> &'m [String] {
        &self.descriptor().annotations
    }

    pub fn declaring(&self) -> TypeRef<'m> {
        TypeRef::new(self.model, self.descriptor().declaring)
    }

    pub fn field_type(&self) -> TypeRef<'m> {
        TypeRef::new(self.model, self.descriptor().field_type)
    }
}

macro_rules! handle_identity {
    ($handle:ident) => {
        impl PartialEq for $handle<'_> {
            fn eq(&self, other: &Self) -> bool {
                std::ptr::eq(self.model, other.model) && self.id == other.id
            }
        }

        impl Eq for $handle<'_> {}
    };
}

handle_identity!(TypeRef);
handle_identity!(MethodRef);
handle_identity!(FieldRef);

impl fmt::Debug for TypeRef<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "TypeRef({})", self.name())
    }
}

impl fmt::Debug for MethodRef<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "MethodRef({}#{})", self.declaring().name(), self.name())
    }
}

impl fmt::Debug for FieldRef<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "FieldRef({}#{})", self.declaring().name(), self.name())
    }
}
