// tests/common/mod.rs
//
// Shared fixture: a small model of a class hierarchy with one member for
// every predicate the vocabulary knows about.

#![allow(dead_code)]

use member_selector::model::{FieldRef, MethodRef, Model, TypeRef};
use serde_json::json;

pub const SUT: &str = "javax0.refi.selector.SutTargetClass";
pub const X: &str = "javax0.refi.selector.SutTargetClass.X";
pub const Y: &str = "javax0.refi.selector.SutTargetClass.Y";
pub const Z: &str = "javax0.refi.selector.SutTargetClass.Z";
pub const TEST: &str = "javax0.refi.selector.SelectorTest";

pub fn model() -> Model {
    Model::from_value(json!({
        "types": [
            {
                "name": "java.lang.Object",
                "modifiers": ["public"],
                "methods": [
                    {
                        "name": "equals",
                        "returns": "boolean",
                        "parameters": ["java.lang.Object"],
                        "modifiers": ["public"]
                    },
                    { "name": "hashCode", "returns": "int", "modifiers": ["public", "native"] },
                    { "name": "toString", "returns": "java.lang.String", "modifiers": ["public"] }
                ]
            },
            { "name": "java.lang.String", "modifiers": ["public", "final"] },
            { "name": "java.lang.Number", "modifiers": ["public", "abstract"] },
            {
                "name": "java.lang.Integer",
                "modifiers": ["public", "final"],
                "superclass": "java.lang.Number"
            },
            { "name": "java.lang.IllegalArgumentException", "modifiers": ["public"] },
            { "name": "java.lang.Deprecated", "kind": "annotation", "modifiers": ["public", "abstract"] },
            { "name": "java.lang.SuppressWarnings", "kind": "annotation", "modifiers": ["public", "abstract"] },
            { "name": "org.junit.jupiter.api.Test", "kind": "annotation", "modifiers": ["public", "abstract"] },
            {
                "name": "java.lang.System",
                "modifiers": ["public", "final"],
                "methods": [
                    { "name": "registerNatives", "modifiers": ["private", "static", "native"] }
                ]
            },
            {
                "name": "java.util.function.Function",
                "kind": "interface",
                "modifiers": ["public", "abstract"],
                "methods": [
                    {
                        "name": "apply",
                        "returns": "java.lang.Object",
                        "parameters": ["java.lang.Object"],
                        "modifiers": ["public", "abstract"]
                    }
                ]
            },
            { "name": "java.util.Map", "kind": "interface", "modifiers": ["public", "abstract"] },
            {
                "name": "java.util.Map.Entry",
                "kind": "interface",
                "modifiers": ["public", "static", "abstract"],
                "enclosing": "java.util.Map"
            },
            {
                "name": SUT,
                "modifiers": ["public"],
                "annotations": ["java.lang.SuppressWarnings"],
                "fields": [
                    { "name": "var_static", "type": "int", "modifiers": ["static"] },
                    { "name": "var_final", "type": "int", "modifiers": ["final"] },
                    { "name": "i", "type": "int", "modifiers": ["private", "final"] },
                    { "name": "var_public", "type": "int", "modifiers": ["public"] },
                    { "name": "var_protected", "type": "int", "modifiers": ["protected"] },
                    { "name": "var_package", "type": "int" },
                    { "name": "var_transient", "type": "int", "modifiers": ["transient"] },
                    { "name": "var_volatile", "type": "int", "modifiers": ["volatile"] },
                    {
                        "name": "j",
                        "type": "int",
                        "modifiers": ["private"],
                        "annotations": ["java.lang.Deprecated"]
                    },
                    { "name": "var_private", "type": "int", "modifiers": ["private"] },
                    { "name": "names", "type": "java.lang.String[]", "modifiers": ["private"] }
                ],
                "methods": [
                    {
                        "name": "equals",
                        "returns": "boolean",
                        "parameters": ["java.lang.Object"],
                        "modifiers": ["public"]
                    },
                    {
                        "name": "z",
                        "returns": "int",
                        "modifiers": ["private"],
                        "annotations": ["java.lang.SuppressWarnings"]
                    },
                    { "name": "method_static", "modifiers": ["static"] },
                    { "name": "method_synchronized", "modifiers": ["synchronized"] },
                    { "name": "method_strict", "modifiers": ["strictfp"] },
                    {
                        "name": "method_vararg",
                        "parameters": ["java.lang.Object[]"],
                        "varargs": true
                    },
                    { "name": "method_notVararg", "parameters": ["java.lang.Object[]"] },
                    { "name": "method_void" },
                    { "name": "method_public", "modifiers": ["public"] },
                    { "name": "method_final", "modifiers": ["final"] },
                    { "name": "method_int", "returns": "int" },
                    { "name": "method_private", "modifiers": ["private"] },
                    { "name": "method_protected", "modifiers": ["protected"] },
                    {
                        "name": "method_throws",
                        "modifiers": ["private"],
                        "throws": ["java.lang.IllegalArgumentException"]
                    },
                    { "name": "method_notThrows", "modifiers": ["private"] }
                ]
            },
            {
                "name": Z,
                "kind": "annotation",
                "modifiers": ["static", "abstract"],
                "enclosing": SUT
            },
            {
                "name": "javax0.refi.selector.SutTargetClass.A",
                "kind": "interface",
                "modifiers": ["static", "abstract"],
                "enclosing": SUT,
                "methods": [{ "name": "q", "modifiers": ["public", "abstract"] }]
            },
            {
                "name": "javax0.refi.selector.SutTargetClass.B",
                "kind": "interface",
                "modifiers": ["static", "abstract"],
                "enclosing": SUT,
                "interfaces": ["javax0.refi.selector.SutTargetClass.A"]
            },
            {
                "name": "javax0.refi.selector.SutTargetClass.C",
                "kind": "interface",
                "modifiers": ["static", "abstract"],
                "enclosing": SUT,
                "interfaces": [
                    "javax0.refi.selector.SutTargetClass.A",
                    "javax0.refi.selector.SutTargetClass.B"
                ]
            },
            {
                "name": Y,
                "modifiers": ["static"],
                "enclosing": SUT,
                "interfaces": ["javax0.refi.selector.SutTargetClass.C"],
                "methods": [{ "name": "q", "modifiers": ["public"] }]
            },
            {
                "name": X,
                "modifiers": ["static", "abstract"],
                "enclosing": SUT,
                "superclass": SUT,
                "interfaces": ["java.util.function.Function"],
                "methods": [
                    { "name": "method_abstract", "returns": "int", "modifiers": ["abstract"] },
                    {
                        "name": "apply",
                        "returns": "java.lang.Object",
                        "parameters": ["java.lang.Object"],
                        "modifiers": ["public"]
                    },
                    { "name": "hashCode", "returns": "int", "modifiers": ["public"] }
                ]
            },
            {
                "name": TEST,
                "methods": [
                    {
                        "name": "testMethodHasAnnotation",
                        "annotations": ["org.junit.jupiter.api.Test"]
                    }
                ]
            }
        ]
    }))
    .expect("fixture model is valid")
}

pub fn ty<'m>(model: &'m Model, name: &str) -> TypeRef<'m> {
    model
        .type_named(name)
        .unwrap_or_else(|| panic!("no type {name}"))
}

pub fn field<'m>(model: &'m Model, name: &str) -> FieldRef<'m> {
    model
        .field(SUT, name)
        .unwrap_or_else(|| panic!("no field {name}"))
}

pub fn method<'m>(model: &'m Model, type_name: &str, name: &str) -> MethodRef<'m> {
    model
        .method(type_name, name)
        .unwrap_or_else(|| panic!("no method {type_name}#{name}"))
}
