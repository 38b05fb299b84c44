//! Fragment combination.
//!
//! Merges the independently parsed top-level fragments into a single root
//! construct. The fold keeps pending holders for at most one package
//! declaration, the accumulated imports, at most one javadoc, and the
//! accumulated annotations, plus found slots for a root field, method, or
//! class; each ordering rule raises its own distinct error.

use log::debug;

use crate::model::{
    Annotation, Class, CodeKind, CodeType, Field, ImportStatement, Javadoc, Method,
    PackageDeclaration, Violation,
};

use super::error::ParseError;

pub(crate) fn combine(fragments: Vec<CodeType>) -> Result<CodeType, ParseError> {
    let mut fragments = fragments;
    if fragments.len() == 1 {
        return Ok(fragments.remove(0));
    }

    let mut package: Option<PackageDeclaration> = None;
    let mut imports: Vec<ImportStatement> = Vec::new();
    let mut javadoc: Option<Javadoc> = None;
    let mut annotations: Vec<Annotation> = Vec::new();
    let mut field: Option<Field> = None;
    let mut method: Option<Method> = None;
    let mut class: Option<Class> = None;

    for fragment in fragments {
        let found_construct = field.is_some() || method.is_some() || class.is_some();
        match fragment {
            CodeType::Package(parsed) => {
                if package.is_some() {
                    return Err(ordering("two package declarations"));
                }
                if found_construct {
                    return Err(ordering("a package declaration after a field, method, or class"));
                }
                package = Some(parsed);
            }
            CodeType::Import(parsed) => {
                if found_construct {
                    return Err(ordering("an import statement after a field, method, or class"));
                }
                imports.push(parsed);
            }
            CodeType::Javadoc(parsed) => {
                if javadoc.is_some() {
                    return Err(ordering("two javadocs"));
                }
                if found_construct {
                    return Err(ordering("a javadoc after a field, method, or class"));
                }
                javadoc = Some(parsed);
            }
            CodeType::Annotation(parsed) => {
                if found_construct {
                    return Err(ordering("an annotation after a field, method, or class"));
                }
                annotations.push(parsed);
            }
            CodeType::LineComment(_) | CodeType::BlockComment(_) => {
                // comments have no slot in any root construct
                debug!("skipping stray comment between top-level fragments");
            }
            CodeType::Field(parsed) => {
                if field.is_some() {
                    return Err(ordering("a second field"));
                }
                if method.is_some() {
                    return Err(ordering("a field alongside a method"));
                }
                if class.is_some() {
                    return Err(ordering("a field outside a class"));
                }
                if package.is_some() {
                    return Err(ordering("a package declaration alongside a field"));
                }
                if !imports.is_empty() {
                    return Err(ordering("an import statement alongside a field"));
                }
                let mut parsed = parsed;
                if let Some(doc) = javadoc.take() {
                    parsed = parsed.with_javadoc(doc);
                }
                if !annotations.is_empty() {
                    parsed = parsed.with_annotations(std::mem::take(&mut annotations));
                }
                field = Some(parsed);
            }
            CodeType::Method(parsed) => {
                if method.is_some() {
                    return Err(ordering("a second method"));
                }
                if field.is_some() {
                    return Err(ordering("a method alongside a field"));
                }
                if class.is_some() {
                    return Err(ordering("a method outside a class"));
                }
                if package.is_some() {
                    return Err(ordering("a package declaration alongside a method"));
                }
                if !imports.is_empty() {
                    return Err(ordering("an import statement alongside a method"));
                }
                let mut parsed = parsed;
                if let Some(doc) = javadoc.take() {
                    parsed = parsed.with_javadoc(doc);
                }
                if !annotations.is_empty() {
                    parsed = parsed.with_annotations(std::mem::take(&mut annotations));
                }
                method = Some(parsed);
            }
            CodeType::Class(parsed) => {
                if class.is_some() {
                    return Err(ordering("two outer classes"));
                }
                if field.is_some() || method.is_some() {
                    return Err(ordering("a class alongside a field or method"));
                }
                let mut parsed = parsed;
                if let Some(doc) = javadoc.take() {
                    parsed = parsed.with_javadoc(doc);
                }
                if !annotations.is_empty() {
                    parsed = parsed.with_annotations(std::mem::take(&mut annotations));
                }
                if let Some(declaration) = package.take() {
                    parsed = parsed.with_package(declaration.name());
                }
                if !imports.is_empty() {
                    parsed = parsed.with_imports(std::mem::take(&mut imports));
                }
                class = Some(parsed);
            }
        }
    }

    // return priority: field, then method, then class
    if let Some(found) = field {
        return Ok(CodeType::Field(found));
    }
    if let Some(found) = method {
        return Ok(CodeType::Method(found));
    }
    if let Some(found) = class {
        return Ok(CodeType::Class(found));
    }
    if javadoc.is_some() {
        return Err(ordering("a javadoc with nothing to attach it to"));
    }
    if !annotations.is_empty() {
        return Err(ordering("annotations with nothing to attach them to"));
    }
    if let Some(declaration) = package {
        if imports.is_empty() {
            return Ok(CodeType::Package(declaration));
        }
        return Err(ordering("import statements with no class to attach them to"));
    }
    if imports.len() == 1 {
        return Ok(CodeType::Import(imports.remove(0)));
    }
    if !imports.is_empty() {
        return Err(ordering("multiple import statements with no class to attach them to"));
    }
    Err(ParseError::single(
        CodeKind::Unknown,
        Violation::MissingToken("any construct".to_string()),
    ))
}

fn ordering(message: &str) -> ParseError {
    ParseError::single(CodeKind::Unknown, Violation::IllegalOrder(message.to_string()))
}
