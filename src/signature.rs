//! Deterministic textual rendering of types, methods and fields.
//!
//! The output feeds the `returns`, `throws` and `signature` extractors and is
//! stable across runs: it depends only on the model, never on hash order.
//!
//! ```text
//! public boolean equals(Object arg1)
//! private void method_throws() throws IllegalArgumentException
//! void method_vararg(Object... arg1)
//! private final int i
//! ```

use crate::model::{FieldRef, MethodRef, Modifiers, TypeRef};

const JAVA_LANG: &str = "java.lang.";

/// Render a type name, dropping the `java.lang.` prefix of top-level
/// `java.lang` types.
pub fn type_name(ty: TypeRef<'_>) -> String {
    if let Some(component) = ty.component() {
        return format!("{}[]", type_name(component));
    }
    let name = ty.name();
    match name.strip_prefix(JAVA_LANG) {
        Some(rest) if !rest.contains('.') => rest.to_string(),
        _ => name.to_string(),
    }
}

/// Modifier keywords followed by a single space, or empty.
pub fn modifiers(modifiers: Modifiers) -> String {
    modifiers.keywords().map(|word| format!("{word} ")).collect()
}

/// Comma separated exception list, empty when nothing is declared.
pub fn throws_clause(method: MethodRef<'_>) -> String {
    method
        .exceptions()
        .map(type_name)
        .collect::<Vec<_>>()
        .join(",")
}

/// Full signature with numbered argument names.
pub fn method_signature(method: MethodRef<'_>) -> String {
    let count = method.parameters().len();
    let varargs = method.descriptor().varargs;
    let arguments = method
        .parameters()
        .enumerate()
        .map(|(i, parameter)| {
            let rendered = type_name(parameter);
            let rendered = match rendered.strip_suffix("[]") {
                Some(element) if varargs && i + 1 == count => format!("{element}..."),
                _ => rendered,
            };
            format!("{rendered} arg{}", i + 1)
        })
        .collect::<Vec<_>>()
        .join(", ");

    let throws = throws_clause(method);
    let throws = if throws.is_empty() {
        String::new()
    } else {
        format!(" throws {throws}")
    };

    format!(
        "{}{} {}({arguments}){throws}",
        modifiers(method.modifiers()),
        type_name(method.return_type()),
        method.name(),
    )
}

/// Field declaration without initializer.
pub fn field_signature(field: FieldRef<'_>) -> String {
    format!(
        "{}{} {}",
        modifiers(field.modifiers()),
        type_name(field.field_type()),
        field.name()
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Model;
    use serde_json::json;

    fn model() -> Model {
        Model::from_value(json!({
            "types": [
                { "name": "java.lang.String", "modifiers": ["public", "final"] },
                { "name": "java.lang.IllegalArgumentException" },
                { "name": "java.util.Map", "kind": "interface" },
                { "name": "java.util.Map.Entry", "kind": "interface", "enclosing": "java.util.Map" },
                {
                    "name": "a.Sut",
                    "fields": [
                        { "name": "i", "type": "int", "modifiers": ["final", "private"] },
                        { "name": "e", "type": "java.util.Map.Entry[]" }
                    ],
                    "methods": [
                        {
                            "name": "run",
                            "returns": "java.lang.String",
                            "parameters": ["int", "java.lang.Object[]"],
                            "throws": ["java.lang.IllegalArgumentException"],
                            "modifiers": ["synchronized", "public", "static"],
                            "varargs": true
                        },
                        { "name": "plain", "parameters": ["java.lang.Object[]"] }
                    ]
                }
            ]
        }))
        .unwrap()
    }

    #[test]
    fn renders_method_signature() {
        let model = model();
        let run = model.method("a.Sut", "run").unwrap();
        assert_eq!(
            method_signature(run),
            "public static synchronized String run(int arg1, Object... arg2) throws IllegalArgumentException"
        );
        let plain = model.method("a.Sut", "plain").unwrap();
        assert_eq!(method_signature(plain), "void plain(Object[] arg1)");
    }

    #[test]
    fn renders_field_signature() {
        let model = model();
        assert_eq!(field_signature(model.field("a.Sut", "i").unwrap()), "private final int i");
        assert_eq!(
            field_signature(model.field("a.Sut", "e").unwrap()),
            "java.util.Map.Entry[] e"
        );
    }
}
