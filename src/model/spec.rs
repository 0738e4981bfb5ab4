use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::model::{
    FieldDescriptor, FieldId, MethodDescriptor, MethodId, Model, ModelError, Modifiers, OBJECT,
    TypeDescriptor, TypeId, TypeKind, VOID,
};

/// Serialisable description of a model. Types refer to each other by
/// canonical name; names are resolved by [`Model::from_spec`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ModelSpec {
    #[serde(default)]
    pub types: Vec<TypeSpec>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TypeSpec {
    pub name: String,
    pub kind: TypeKind,
    pub modifiers: Vec<String>,
    /// Defaults to `java.lang.Object` for classes and enums
    pub superclass: Option<String>,
    pub interfaces: Vec<String>,
    pub enclosing: Option<String>,
    pub annotations: Vec<String>,
    pub synthetic: bool,
    pub fields: Vec<FieldSpec>,
    pub methods: Vec<MethodSpec>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FieldSpec {
    pub name: String,
    #[serde(rename = "type")]
    pub field_type: String,
    pub modifiers: Vec<String>,
    pub annotations: Vec<String>,
    pub synthetic: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MethodSpec {
    pub name: String,
    pub returns: String,
    pub parameters: Vec<String>,
    pub throws: Vec<String>,
    pub modifiers: Vec<String>,
    pub annotations: Vec<String>,
    pub varargs: bool,
    pub bridge: bool,
    pub synthetic: bool,
}

impl Default for MethodSpec {
    fn default() -> Self {
        MethodSpec {
            name: String::new(),
            returns: VOID.to_string(),
            parameters: Vec::new(),
            throws: Vec::new(),
            modifiers: Vec::new(),
            annotations: Vec::new(),
            varargs: false,
            bridge: false,
            synthetic: false,
        }
    }
}

impl Model {
    /// Resolve a [`ModelSpec`] into a model.
    ///
    /// Declaring `java.lang.Object` replaces the built-in placeholder so that
    /// its methods (`equals`, `hashCode`, ...) can take part in override
    /// checks. Every other name may be declared only once.
    pub fn from_spec(spec: &ModelSpec) -> Result<Self, ModelError> {
        let mut model = Model::with_builtins();

        // First pass: make every declared name resolvable.
        let mut declared = HashSet::new();
        let mut ids = Vec::with_capacity(spec.types.len());
        for ty in &spec.types {
            if !declared.insert(ty.name.as_str()) {
                return Err(ModelError::DuplicateType(ty.name.clone()));
            }
            let modifiers = parse_modifiers(&ty.modifiers, &ty.name)?;
            let id = match model.index.get(&ty.name).copied() {
                Some(id) if ty.name == OBJECT => id,
                Some(_) => return Err(ModelError::DuplicateType(ty.name.clone())),
                None => model.insert_type(TypeDescriptor::new(&ty.name, ty.kind, modifiers)),
            };
            let descriptor = &mut model.types[id.0];
            descriptor.kind = ty.kind;
            descriptor.modifiers = modifiers;
            descriptor.synthetic = ty.synthetic;
            descriptor.annotations = ty.annotations.clone();
            descriptor.declared = true;
            ids.push(id);
        }

        // Second pass: relationships and members.
        for (ty, id) in spec.types.iter().zip(&ids) {
            model.link_type(ty, *id)?;
            for field in &ty.fields {
                model.add_field(field, *id, &ty.name)?;
            }
            for method in &ty.methods {
                model.add_method(method, *id, &ty.name)?;
            }
        }

        for id in ids {
            model.check_acyclic(id, "superclass", |ty| ty.superclass)?;
            model.check_acyclic(id, "enclosing", |ty| ty.enclosing)?;
        }

        Ok(model)
    }

    /// Follow `next` from `start` and fail if the chain revisits a type.
    fn check_acyclic(
        &self,
        start: TypeId,
        relation: &'static str,
        next: impl Fn(&TypeDescriptor) -> Option<TypeId>,
    ) -> Result<(), ModelError> {
        let mut seen = HashSet::new();
        let mut current = Some(start);
        while let Some(id) = current {
            if !seen.insert(id) {
                return Err(ModelError::Cycle {
                    name: self.types[id.0].name.clone(),
                    relation,
                });
            }
            current = next(&self.types[id.0]);
        }
        Ok(())
    }

    fn link_type(&mut self, spec: &TypeSpec, id: TypeId) -> Result<(), ModelError> {
        let superclass = match (&spec.superclass, spec.kind) {
            (Some(name), _) => Some(self.require(name, &spec.name)?),
            (None, TypeKind::Class | TypeKind::Enum) if spec.name != OBJECT => {
                Some(self.require(OBJECT, &spec.name)?)
            }
            (None, _) => None,
        };

        let mut interfaces = Vec::with_capacity(spec.interfaces.len());
        for name in &spec.interfaces {
            let interface = self.require(name, &spec.name)?;
            let kind = self.types[interface.0].kind;
            if !matches!(kind, TypeKind::Interface | TypeKind::Annotation) {
                return Err(ModelError::NotAnInterface {
                    name: name.clone(),
                    declaration: spec.name.clone(),
                    kind,
                });
            }
            interfaces.push(interface);
        }

        let enclosing = spec
            .enclosing
            .as_deref()
            .map(|name| self.require(name, &spec.name))
            .transpose()?;

        let descriptor = &mut self.types[id.0];
        descriptor.superclass = superclass;
        descriptor.interfaces = interfaces;
        descriptor.enclosing = enclosing;
        Ok(())
    }

    fn add_field(
        &mut self,
        spec: &FieldSpec,
        declaring: TypeId,
        declaring_name: &str,
    ) -> Result<(), ModelError> {
        let qualified = format!("{declaring_name}#{}", spec.name);
        let field = FieldDescriptor {
            name: spec.name.clone(),
            declaring,
            modifiers: parse_modifiers(&spec.modifiers, &qualified)?,
            field_type: self.require(&spec.field_type, &qualified)?,
            annotations: spec.annotations.clone(),
            synthetic: spec.synthetic,
        };
        let id = FieldId(self.fields.len());
        self.fields.push(field);
        self.types[declaring.0].fields.push(id);
        Ok(())
    }

    fn add_method(
        &mut self,
        spec: &MethodSpec,
        declaring: TypeId,
        declaring_name: &str,
    ) -> Result<(), ModelError> {
        let qualified = format!("{declaring_name}#{}", spec.name);
        let return_type = self.require(&spec.returns, &qualified)?;
        let parameters = self.require_all(&spec.parameters, &qualified)?;
        let exceptions = self.require_all(&spec.throws, &qualified)?;

        if spec.varargs {
            let last_is_array = parameters
                .last()
                .is_some_and(|id| self.types[id.0].kind == TypeKind::Array);
            if !last_is_array {
                return Err(ModelError::VarargsNotArray(qualified));
            }
        }

        let method = MethodDescriptor {
            name: spec.name.clone(),
            declaring,
            modifiers: parse_modifiers(&spec.modifiers, &qualified)?,
            return_type,
            parameters,
            exceptions,
            annotations: spec.annotations.clone(),
            varargs: spec.varargs,
            bridge: spec.bridge,
            synthetic: spec.synthetic,
        };
        let id = MethodId(self.methods.len());
        self.methods.push(method);
        self.types[declaring.0].methods.push(id);
        Ok(())
    }

    fn require(&mut self, name: &str, referenced_by: &str) -> Result<TypeId, ModelError> {
        self.resolve(name).ok_or_else(|| ModelError::UnknownType {
            name: name.to_string(),
            referenced_by: referenced_by.to_string(),
        })
    }

    fn require_all(&mut self, names: &[String], referenced_by: &str) -> Result<Vec<TypeId>, ModelError> {
        names
            .iter()
            .map(|name| self.require(name, referenced_by))
            .collect()
    }
}

fn parse_modifiers(words: &[String], declaration: &str) -> Result<Modifiers, ModelError> {
    words.iter().try_fold(Modifiers::empty(), |acc, word| {
        Modifiers::from_keyword(word)
            .map(|flag| acc | flag)
            .ok_or_else(|| ModelError::UnknownModifier {
                modifier: word.clone(),
                declaration: declaration.to_string(),
            })
    })
}
