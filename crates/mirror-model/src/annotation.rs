use serde::{Deserialize, Serialize};

use crate::types::Type;

/// A declared annotation instance: the annotation type's binary name plus its
/// named element values.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Annotation {
    pub type_name: String,
    pub elements: Vec<(String, AnnotationValue)>,
}

impl Annotation {
    pub fn new(type_name: impl Into<String>) -> Self {
        Annotation {
            type_name: type_name.into(),
            elements: Vec::new(),
        }
    }

    pub fn with_element(mut self, name: impl Into<String>, value: AnnotationValue) -> Self {
        self.elements.push((name.into(), value));
        self
    }

    /// Value of the named element, or `None` if the annotation does not carry
    /// one.
    pub fn element(&self, name: &str) -> Option<&AnnotationValue> {
        self.elements
            .iter()
            .find(|(element, _)| element == name)
            .map(|(_, value)| value)
    }
}

/// An annotation element value, mirroring the classfile `element_value`
/// forms at the source level.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum AnnotationValue {
    Boolean(bool),
    Int(i32),
    Long(i64),
    Double(f64),
    Str(String),
    Class(Type),
    EnumConst {
        type_name: String,
        const_name: String,
    },
    Annotation(Box<Annotation>),
    Array(Vec<AnnotationValue>),
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn element_lookup_finds_named_values() {
        let annotation = Annotation::new("com.example.Entity")
            .with_element("name", AnnotationValue::Str("point".to_string()))
            .with_element("cacheable", AnnotationValue::Boolean(false));

        assert_eq!(
            annotation.element("name"),
            Some(&AnnotationValue::Str("point".to_string()))
        );
        assert_eq!(annotation.element("missing"), None);
    }

    #[test]
    fn serializes_to_a_stable_shape() {
        let annotation =
            Annotation::new("com.example.Id").with_element("value", AnnotationValue::Int(7));
        let json = serde_json::to_value(&annotation).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "type_name": "com.example.Id",
                "elements": [["value", {"Int": 7}]],
            })
        );
    }
}
