//! Documentation for the selector vocabulary, generated from the registry

use super::CliError;
use crate::{
    model::SubjectKind,
    registry::{self, CONVERTERS, EXTRACTORS, PREDICATES},
};

const OPERATORS: &str = r#"OPERATORS (tightest first)

  !x                Negation
  x & y             Conjunction
  x | y             Disjunction
  name -> x         Evaluate x against the subject produced by converter 'name'
                    (against each one for 'interfaces', true if any matches)
  name ~ /regex/    Search the text produced by extractor 'name'; \/ is a literal slash
  ( x )             Grouping
"#;

fn kinds(applies_to: &[SubjectKind]) -> String {
    applies_to
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

fn section<'a>(
    out: &mut String,
    title: &str,
    entries: impl Iterator<Item = (&'a str, &'a str)>,
) {
    out.push_str(&format!("{title}\n\n"));
    for (name, description) in entries {
        out.push_str(&format!("  {name:<18}{description}\n"));
    }
    out.push('\n');
}

/// Get the docs overview (full vocabulary listing)
pub fn get_docs_overview() -> String {
    let mut out = String::from(
        "SELECTOR DOCUMENTATION\n\n\
         A selector is a boolean expression over types, methods and fields.\n\
         Example: private & !final & declaringClass -> !(simpleName ~ /Test/)\n\n",
    );
    out.push_str(OPERATORS);
    out.push('\n');
    section(
        &mut out,
        "PREDICATES",
        PREDICATES.iter().map(|p| (p.name, p.description)),
    );
    section(
        &mut out,
        "CONVERTERS (name -> ...)",
        CONVERTERS.iter().map(|c| (c.name, c.description)),
    );
    section(
        &mut out,
        "EXTRACTORS (name ~ /regex/)",
        EXTRACTORS.iter().map(|e| (e.name, e.description)),
    );
    out.push_str("Run 'selector doc <name>' for the subject kinds a name accepts.\n");
    out
}

/// Describe `name` in every table that defines it
pub fn get_doc_entry(name: &str) -> Result<String, CliError> {
    let mut out = String::new();
    let entries = [
        registry::predicate(name).map(|p| ("predicate", p.applies_to, p.description)),
        registry::converter(name).map(|c| ("converter", c.applies_to, c.description)),
        registry::extractor(name).map(|e| ("extractor", e.applies_to, e.description)),
    ];
    for (table, applies_to, description) in entries.into_iter().flatten() {
        out.push_str(&format!("{name} ({table})\n"));
        out.push_str(&format!("  applies to: {}\n", kinds(applies_to)));
        out.push_str(&format!("  {description}\n\n"));
    }
    if out.is_empty() {
        return Err(CliError::UnknownName(name.to_string()));
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn overview_lists_every_name() {
        let overview = get_docs_overview();
        for name in PREDICATES.iter().map(|p| p.name) {
            assert!(overview.contains(name), "{name}");
        }
        for name in CONVERTERS.iter().map(|c| c.name) {
            assert!(overview.contains(name), "{name}");
        }
        for name in EXTRACTORS.iter().map(|e| e.name) {
            assert!(overview.contains(name), "{name}");
        }
    }

    #[test]
    fn shared_names_list_every_table() {
        let doc = get_doc_entry("implements").unwrap();
        assert!(doc.contains("implements (predicate)"));
        assert!(doc.contains("implements (extractor)"));
        assert!(!doc.contains("converter"));
    }

    #[test]
    fn entry_layout() {
        let doc = get_doc_entry("interfaces").unwrap();
        assert!(doc.starts_with("interfaces (converter)\n  applies to: type\n  each "));
        assert!(doc.ends_with("\n\n"));

        let overview = get_docs_overview();
        assert!(overview.contains("PREDICATES\n\n  true "));
        assert!(overview.contains(&format!("\n  {:<18}each directly", "interfaces")));
    }

    #[test]
    fn unknown_name() {
        assert!(matches!(get_doc_entry("blabla"), Err(CliError::UnknownName(_))));
    }
}
