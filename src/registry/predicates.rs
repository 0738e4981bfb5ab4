use crate::{
    model::{Modifiers, Subject, TypeKind},
    registry::{ANY, FIELD, METHOD, Predicate, TYPE, TYPE_OR_METHOD},
};

pub static PREDICATES: &[Predicate] = &[
    Predicate::new("true", ANY, "always true, also for null", literal_true),
    Predicate::new("false", ANY, "always false, also for null", literal_false),
    Predicate::new("null", ANY, "true only for the null subject", literal_null),
    Predicate::new("public", ANY, "declared public", is_public),
    Predicate::new("protected", ANY, "declared protected", is_protected),
    Predicate::new("private", ANY, "declared private", is_private),
    Predicate::new("package", ANY, "package private: no access modifier", is_package),
    Predicate::new("final", ANY, "declared final", is_final),
    Predicate::new("static", ANY, "declared static", is_static),
    Predicate::new("abstract", TYPE_OR_METHOD, "declared abstract", is_abstract),
    Predicate::new("synchronized", METHOD, "declared synchronized", is_synchronized),
    Predicate::new("native", METHOD, "declared native", is_native),
    Predicate::new("strict", METHOD, "declared strictfp", is_strict),
    Predicate::new("transient", FIELD, "declared transient", is_transient),
    Predicate::new("volatile", FIELD, "declared volatile", is_volatile),
    Predicate::new("vararg", METHOD, "last parameter is variable arity", is_vararg),
    Predicate::new("bridge", METHOD, "compiler generated bridge method", is_bridge),
    Predicate::new("synthetic", ANY, "compiler generated declaration", is_synthetic),
    Predicate::new(
        "array",
        ANY,
        "the type, return type or field type is an array",
        is_array,
    ),
    Predicate::new(
        "primitive",
        ANY,
        "the type, return type or field type is primitive",
        is_primitive,
    ),
    Predicate::new("interface", TYPE, "the type is an interface", is_interface),
    Predicate::new("class", TYPE, "the type is a class or an enum", is_class),
    Predicate::new("annotation", TYPE, "the type is an annotation type", is_annotation),
    Predicate::new("enum", TYPE, "the type is an enum", is_enum),
    Predicate::new("annotated", ANY, "has at least one annotation", is_annotated),
    Predicate::new(
        "overrides",
        METHOD,
        "overrides a method inherited from a superclass",
        overrides,
    ),
    Predicate::new(
        "implements",
        TYPE_OR_METHOD,
        "type: implements an interface; method: implements an interface method",
        implements,
    ),
    Predicate::new(
        "extends",
        TYPE,
        "has a superclass other than java.lang.Object",
        extends,
    ),
    Predicate::new("throws", METHOD, "declares at least one exception", throws),
    Predicate::new("void", METHOD, "returns void", is_void),
];

fn literal_true(_: Subject<'_>) -> bool {
    true
}

fn literal_false(_: Subject<'_>) -> bool {
    false
}

fn literal_null(subject: Subject<'_>) -> bool {
    subject.is_null()
}

fn modifiers(subject: Subject<'_>) -> Modifiers {
    match subject {
        Subject::Null => Modifiers::empty(),
        Subject::Type(ty) => ty.modifiers(),
        Subject::Method(method) => method.modifiers(),
        Subject::Field(field) => field.modifiers(),
    }
}

fn has(subject: Subject<'_>, flag: Modifiers) -> bool {
    modifiers(subject).contains(flag)
}

fn is_public(subject: Subject<'_>) -> bool {
    has(subject, Modifiers::PUBLIC)
}

fn is_protected(subject: Subject<'_>) -> bool {
    has(subject, Modifiers::PROTECTED)
}

fn is_private(subject: Subject<'_>) -> bool {
    has(subject, Modifiers::PRIVATE)
}

fn is_package(subject: Subject<'_>) -> bool {
    !subject.is_null() && modifiers(subject).is_package()
}

fn is_final(subject: Subject<'_>) -> bool {
    has(subject, Modifiers::FINAL)
}

fn is_static(subject: Subject<'_>) -> bool {
    has(subject, Modifiers::STATIC)
}

fn is_abstract(subject: Subject<'_>) -> bool {
    has(subject, Modifiers::ABSTRACT)
}

fn is_synchronized(subject: Subject<'_>) -> bool {
    has(subject, Modifiers::SYNCHRONIZED)
}

fn is_native(subject: Subject<'_>) -> bool {
    has(subject, Modifiers::NATIVE)
}

fn is_strict(subject: Subject<'_>) -> bool {
    has(subject, Modifiers::STRICT)
}

fn is_transient(subject: Subject<'_>) -> bool {
    has(subject, Modifiers::TRANSIENT)
}

fn is_volatile(subject: Subject<'_>) -> bool {
    has(subject, Modifiers::VOLATILE)
}

fn is_vararg(subject: Subject<'_>) -> bool {
    matches!(subject, Subject::Method(method) if method.descriptor().varargs)
}

fn is_bridge(subject: Subject<'_>) -> bool {
    matches!(subject, Subject::Method(method) if method.descriptor().bridge)
}

fn is_synthetic(subject: Subject<'_>) -> bool {
    match subject {
        Subject::Null => false,
        Subject::Type(ty) => ty.descriptor().synthetic,
        Subject::Method(method) => method.descriptor().synthetic,
        Subject::Field(field) => field.descriptor().synthetic,
    }
}

fn is_array(subject: Subject<'_>) -> bool {
    subject.value_type().is_some_and(|ty| ty.is_array())
}

fn is_primitive(subject: Subject<'_>) -> bool {
    subject.value_type().is_some_and(|ty| ty.is_primitive())
}

fn type_kind(subject: Subject<'_>) -> Option<TypeKind> {
    match subject {
        Subject::Type(ty) => Some(ty.kind()),
        _ => None,
    }
}

fn is_interface(subject: Subject<'_>) -> bool {
    type_kind(subject) == Some(TypeKind::Interface)
}

fn is_class(subject: Subject<'_>) -> bool {
    matches!(type_kind(subject), Some(TypeKind::Class | TypeKind::Enum))
}

fn is_annotation(subject: Subject<'_>) -> bool {
    type_kind(subject) == Some(TypeKind::Annotation)
}

fn is_enum(subject: Subject<'_>) -> bool {
    type_kind(subject) == Some(TypeKind::Enum)
}

fn is_annotated(subject: Subject<'_>) -> bool {
    !subject.annotations().is_empty()
}

fn overrides(subject: Subject<'_>) -> bool {
    matches!(subject, Subject::Method(method) if method.overrides())
}

fn implements(subject: Subject<'_>) -> bool {
    match subject {
        Subject::Type(ty) => ty.interfaces().next().is_some(),
        Subject::Method(method) => method.implements(),
        _ => false,
    }
}

fn extends(subject: Subject<'_>) -> bool {
    match subject {
        Subject::Type(ty) => ty.superclass().is_some_and(|parent| !parent.is_object()),
        _ => false,
    }
}

fn throws(subject: Subject<'_>) -> bool {
    matches!(subject, Subject::Method(method) if method.exceptions().next().is_some())
}

fn is_void(subject: Subject<'_>) -> bool {
    matches!(subject, Subject::Method(method) if method.return_type().is_void())
}
