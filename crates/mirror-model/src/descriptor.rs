//! JVM type descriptor parsing and rendering.
//!
//! Descriptors use the classfile spelling (`I`, `Ljava/lang/String;`,
//! `(ILjava/lang/String;)V`); parsed reference types are exposed under their
//! binary names (`java.lang.String`).

use crate::error::DescriptorError;
use crate::types::{PrimitiveType, Type};

type Result<T> = std::result::Result<T, DescriptorError>;

/// Parse a single field descriptor such as `I` or `[[Ljava/lang/String;`.
pub fn parse_field_descriptor(desc: &str) -> Result<Type> {
    let (ty, rest) = parse_type(desc)?;
    if !rest.is_empty() {
        return Err(DescriptorError::Trailing(desc.to_string()));
    }
    Ok(ty)
}

/// Parse a method descriptor such as `(ILjava/lang/String;)V` into its
/// parameter types and return type.
pub fn parse_method_descriptor(desc: &str) -> Result<(Vec<Type>, Type)> {
    let rest = desc
        .strip_prefix('(')
        .ok_or_else(|| DescriptorError::Invalid(desc.to_string()))?;

    let mut params = Vec::new();
    let mut rest = rest;
    loop {
        if let Some(after) = rest.strip_prefix(')') {
            rest = after;
            break;
        }
        if rest.is_empty() {
            return Err(DescriptorError::Invalid(desc.to_string()));
        }
        let (param, remaining) = parse_type(rest)?;
        params.push(param);
        rest = remaining;
    }

    let (return_type, rest) = if let Some(after) = rest.strip_prefix('V') {
        (Type::Void, after)
    } else {
        parse_type(rest)?
    };
    if !rest.is_empty() {
        return Err(DescriptorError::Trailing(desc.to_string()));
    }

    Ok((params, return_type))
}

/// Render a type as a field descriptor. `Type::Void` renders as `V`, which is
/// only meaningful in return position.
pub fn field_descriptor(ty: &Type) -> String {
    let mut out = String::new();
    push_descriptor(ty, &mut out);
    out
}

/// Render a parameter list and return type as a method descriptor.
pub fn method_descriptor(params: &[Type], return_type: &Type) -> String {
    let mut out = String::from("(");
    for param in params {
        push_descriptor(param, &mut out);
    }
    out.push(')');
    push_descriptor(return_type, &mut out);
    out
}

fn push_descriptor(ty: &Type, out: &mut String) {
    match ty {
        Type::Void => out.push('V'),
        Type::Primitive(prim) => out.push(prim.descriptor_char()),
        Type::Reference(name) => {
            out.push('L');
            out.push_str(&name.replace('.', "/"));
            out.push(';');
        }
        Type::Array(component) => {
            out.push('[');
            push_descriptor(component, out);
        }
    }
}

fn parse_type(input: &str) -> Result<(Type, &str)> {
    let mut chars = input.chars();
    let tag = chars
        .next()
        .ok_or_else(|| DescriptorError::Invalid(input.to_string()))?;
    let rest = chars.as_str();
    let prim = |p: PrimitiveType| Ok((Type::Primitive(p), rest));
    match tag {
        'Z' => prim(PrimitiveType::Boolean),
        'B' => prim(PrimitiveType::Byte),
        'C' => prim(PrimitiveType::Char),
        'S' => prim(PrimitiveType::Short),
        'I' => prim(PrimitiveType::Int),
        'J' => prim(PrimitiveType::Long),
        'F' => prim(PrimitiveType::Float),
        'D' => prim(PrimitiveType::Double),
        'L' => match rest.find(';') {
            Some(end) => {
                let name = rest[..end].replace('/', ".");
                if name.is_empty() {
                    return Err(DescriptorError::Invalid(input.to_string()));
                }
                Ok((Type::Reference(name), &rest[end + 1..]))
            }
            None => Err(DescriptorError::Invalid(input.to_string())),
        },
        '[' => {
            let (component, remaining) = parse_type(rest)?;
            Ok((Type::array(component), remaining))
        }
        _ => Err(DescriptorError::Invalid(input.to_string())),
    }
}
