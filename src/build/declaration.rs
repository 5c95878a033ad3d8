// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The shape filter.
//!
//! A declaration is accepted when its interface is a valid qualified name with a
//! package, its member is a single zero-argument accessor returning `String`, and
//! its path is non-empty. Rejected declarations never reach the codec.
//!
//! The package is required because the generated type takes the interface's
//! simple name: inside the container, an unqualified `implements License` would
//! name the nested class itself.
//!
//! Member signatures are accepted in either JVM spelling:
//!
//! ```text
//! String text()                 fun text(): String
//! java.lang.String text();      fun text(): kotlin.String
//! public abstract String text()
//! ```

use std::collections::HashSet;

use crate::error::ShapeError;
use crate::types::Declaration;

use super::manifest::DeclarationEntry;

const JAVA_TEXT_TYPES: &[&str] = &["String", "java.lang.String"];
const KOTLIN_TEXT_TYPES: &[&str] = &["String", "kotlin.String"];
const JAVA_MODIFIERS: &[&str] = &["public", "abstract"];

/// Reserved words of Java plus the hard keywords of Kotlin.
const RESERVED: &[&str] = &[
    "_", "abstract", "as", "assert", "boolean", "break", "byte", "case", "catch", "char",
    "class", "const", "continue", "default", "do", "double", "else", "enum", "extends",
    "false", "final", "finally", "float", "for", "fun", "goto", "if", "implements", "import",
    "in", "instanceof", "int", "interface", "is", "long", "native", "new", "null", "object",
    "package", "private", "protected", "public", "return", "short", "static", "strictfp",
    "super", "switch", "synchronized", "this", "throw", "throws", "transient", "true", "try",
    "typealias", "typeof", "val", "var", "void", "volatile", "when", "while",
];

/// True for a name both Java and Kotlin accept as a plain identifier.
pub fn is_identifier(name: &str) -> bool {
    let mut chars = name.chars();
    let Some(first) = chars.next() else {
        return false;
    };
    // No `$`: Java allows it, Kotlin does not.
    (first.is_alphabetic() || first == '_')
        && chars.all(|c| c.is_alphanumeric() || c == '_')
        && !RESERVED.contains(&name)
}

/// True for a dotted name whose every segment is an identifier.
pub fn is_qualified_name(name: &str) -> bool {
    !name.is_empty() && name.split('.').all(is_identifier)
}

/// Extract the accessor name from a member signature.
pub fn parse_member(signature: &str) -> Result<String, ShapeError> {
    let trimmed = signature.trim().trim_end_matches(';').trim_end();
    let malformed = || ShapeError::MalformedMember(signature.to_string());

    let open = trimmed.find('(').ok_or_else(malformed)?;
    let close = trimmed.rfind(')').ok_or_else(malformed)?;
    if close < open {
        return Err(malformed());
    }
    let head = trimmed[..open].trim();
    let params = trimmed[open + 1..close].trim();
    let tail = trimmed[close + 1..].trim();

    if let Some(name) = head.strip_prefix("fun ") {
        let name = name.trim();
        check_params(name, params)?;
        let returns = match tail.strip_prefix(':') {
            Some(returns) => returns.trim(),
            None if tail.is_empty() => "Unit",
            None => return Err(malformed()),
        };
        check_returns(name, returns, KOTLIN_TEXT_TYPES)?;
        return checked_identifier(name);
    }

    if !tail.is_empty() {
        return Err(malformed());
    }
    let mut words: Vec<&str> = head.split_whitespace().collect();
    let name = words.pop().ok_or_else(malformed)?;
    while words.first().is_some_and(|w| JAVA_MODIFIERS.contains(w)) {
        words.remove(0);
    }
    if words.is_empty() {
        return Err(malformed());
    }
    let returns = words.join(" ");

    check_params(name, params)?;
    check_returns(name, &returns, JAVA_TEXT_TYPES)?;
    checked_identifier(name)
}

fn check_params(name: &str, params: &str) -> Result<(), ShapeError> {
    if params.is_empty() {
        Ok(())
    } else {
        Err(ShapeError::HasParameters {
            member: name.to_string(),
        })
    }
}

fn check_returns(name: &str, returns: &str, accepted: &[&str]) -> Result<(), ShapeError> {
    if accepted.contains(&returns) {
        Ok(())
    } else {
        Err(ShapeError::NonTextReturn {
            member: name.to_string(),
            returns: returns.to_string(),
        })
    }
}

fn checked_identifier(name: &str) -> Result<String, ShapeError> {
    if is_identifier(name) {
        Ok(name.to_string())
    } else {
        Err(ShapeError::InvalidIdentifier(name.to_string()))
    }
}

/// Validate one manifest entry on its own.
pub fn check_declaration(entry: &DeclarationEntry) -> Result<Declaration, ShapeError> {
    let interface = entry.interface.trim();
    if !is_qualified_name(interface) {
        return Err(ShapeError::InvalidInterface(entry.interface.clone()));
    }
    let Some((_, simple)) = interface.rsplit_once('.') else {
        return Err(ShapeError::UnpackagedInterface(interface.to_string()));
    };
    let type_name = simple.to_string();

    let accessor = parse_member(&entry.member)?;

    if entry.path.as_os_str().is_empty() {
        return Err(ShapeError::EmptyPath);
    }

    Ok(Declaration {
        type_name,
        interface: interface.to_string(),
        accessor,
        path: entry.path.clone(),
    })
}

/// A rejected entry: the interface as written, and why.
pub type Rejection = (String, ShapeError);

/// Run the shape filter over every entry, one result per entry in manifest order.
///
/// Each generated type is nested in the container under the interface's simple
/// name, so the first entry to claim a name wins and later ones are rejected.
pub fn check_declarations(
    entries: &[DeclarationEntry],
    container: &str,
) -> Vec<Result<Declaration, Rejection>> {
    let mut seen = HashSet::new();

    entries
        .iter()
        .map(|entry| {
            check_declaration(entry)
                .and_then(|declaration| {
                    if declaration.type_name == container {
                        Err(ShapeError::ShadowsContainer(declaration.type_name))
                    } else if !seen.insert(declaration.type_name.clone()) {
                        Err(ShapeError::DuplicateType(declaration.type_name))
                    } else {
                        Ok(declaration)
                    }
                })
                .map_err(|error| (entry.interface.clone(), error))
        })
        .collect()
}

/// `check_declarations`, split into accepted and rejected.
pub fn filter_declarations(
    entries: &[DeclarationEntry],
    container: &str,
) -> (Vec<Declaration>, Vec<Rejection>) {
    let mut accepted = Vec::with_capacity(entries.len());
    let mut rejected = Vec::new();
    for result in check_declarations(entries, container) {
        match result {
            Ok(declaration) => accepted.push(declaration),
            Err(rejection) => rejected.push(rejection),
        }
    }
    (accepted, rejected)
}
