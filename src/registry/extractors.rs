use crate::{
    model::Subject,
    registry::{ANY, Extractor, MEMBER, METHOD, TYPE},
    signature,
};

pub static EXTRACTORS: &[Extractor] = &[
    Extractor::new(
        "simpleName",
        ANY,
        "simple name of the type, return type or field type",
        simple_name,
    ),
    Extractor::new(
        "canonicalName",
        ANY,
        "canonical name of the type, return type or field type",
        canonical_name,
    ),
    Extractor::new(
        "name",
        ANY,
        "type: simple name; method or field: the declared member name",
        name,
    ),
    Extractor::new("returns", METHOD, "rendered return type", returns),
    Extractor::new(
        "throws",
        METHOD,
        "comma separated declared exceptions, empty if none",
        throws,
    ),
    Extractor::new(
        "implements",
        TYPE,
        "comma separated canonical names of directly implemented interfaces",
        implements,
    ),
    Extractor::new(
        "extends",
        TYPE,
        "canonical name of the superclass, empty if none",
        extends,
    ),
    Extractor::new(
        "annotation",
        ANY,
        "comma separated canonical names of the annotations",
        annotation,
    ),
    Extractor::new(
        "signature",
        MEMBER,
        "rendered method or field declaration",
        render_signature,
    ),
];

fn simple_name(subject: Subject<'_>) -> String {
    subject
        .value_type()
        .map(|ty| ty.simple_name())
        .unwrap_or_default()
}

fn canonical_name(subject: Subject<'_>) -> String {
    subject
        .value_type()
        .map(|ty| ty.name().to_string())
        .unwrap_or_default()
}

fn name(subject: Subject<'_>) -> String {
    match subject {
        Subject::Null => String::new(),
        Subject::Type(ty) => ty.simple_name(),
        Subject::Method(method) => method.name().to_string(),
        Subject::Field(field) => field.name().to_string(),
    }
}

fn returns(subject: Subject<'_>) -> String {
    match subject {
        Subject::Method(method) => signature::type_name(method.return_type()),
        _ => String::new(),
    }
}

fn throws(subject: Subject<'_>) -> String {
    match subject {
        Subject::Method(method) => signature::throws_clause(method),
        _ => String::new(),
    }
}

fn implements(subject: Subject<'_>) -> String {
    match subject {
        Subject::Type(ty) => ty
            .interfaces()
            .map(|interface| interface.name())
            .collect::<Vec<_>>()
            .join(","),
        _ => String::new(),
    }
}

fn extends(subject: Subject<'_>) -> String {
    match subject {
        Subject::Type(ty) => ty
            .superclass()
            .map(|parent| parent.name().to_string())
            .unwrap_or_default(),
        _ => String::new(),
    }
}

fn annotation(subject: Subject<'_>) -> String {
    subject.annotations().join(",")
}

fn render_signature(subject: Subject<'_>) -> String {
    match subject {
        Subject::Method(method) => signature::method_signature(method),
        Subject::Field(field) => signature::field_signature(field),
        _ => String::new(),
    }
}
