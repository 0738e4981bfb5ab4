use crate::{
    model::Subject,
    registry::{ANY, Converter, MEMBER, TYPE},
};

pub static CONVERTERS: &[Converter] = &[
    Converter::new(
        "declaringClass",
        ANY,
        "member: the declaring type; type: the enclosing type, or null for top-level types",
        declaring_class,
    ),
    Converter::new(
        "returnType",
        MEMBER,
        "method: the return type; field: the field type",
        return_type,
    ),
    Converter::new(
        "superClass",
        TYPE,
        "the direct superclass, or null for Object, interfaces and primitives",
        super_class,
    ),
    Converter::each(
        "interfaces",
        TYPE,
        "each directly implemented (or extended) interface; null if there are none",
        interfaces,
    ),
    Converter::new(
        "nestHost",
        TYPE,
        "the outermost enclosing type; a top-level type is its own nest host",
        nest_host,
    ),
    Converter::new(
        "componentType",
        TYPE,
        "the element type of an array type, or null",
        component_type,
    ),
    Converter::new("null", ANY, "always the null subject", to_null),
];

fn declaring_class(subject: Subject<'_>) -> Subject<'_> {
    match subject {
        Subject::Null => Subject::Null,
        Subject::Type(ty) => ty.enclosing().into(),
        Subject::Method(method) => method.declaring().into(),
        Subject::Field(field) => field.declaring().into(),
    }
}

fn return_type(subject: Subject<'_>) -> Subject<'_> {
    match subject {
        Subject::Method(method) => method.return_type().into(),
        Subject::Field(field) => field.field_type().into(),
        _ => Subject::Null,
    }
}

fn super_class(subject: Subject<'_>) -> Subject<'_> {
    match subject {
        Subject::Type(ty) => ty.superclass().into(),
        _ => Subject::Null,
    }
}

fn interfaces(subject: Subject<'_>) -> Vec<Subject<'_>> {
    match subject {
        Subject::Type(ty) => ty.interfaces().map(Subject::Type).collect(),
        _ => Vec::new(),
    }
}

fn nest_host(subject: Subject<'_>) -> Subject<'_> {
    match subject {
        Subject::Type(ty) => ty.nest_host().into(),
        _ => Subject::Null,
    }
}

fn component_type(subject: Subject<'_>) -> Subject<'_> {
    match subject {
        Subject::Type(ty) => ty.component().into(),
        _ => Subject::Null,
    }
}

fn to_null(_: Subject<'_>) -> Subject<'_> {
    Subject::Null
}
