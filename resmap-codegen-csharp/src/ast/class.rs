//! C# class and method builders.

use resmap_codegen::{CodeFragment, Renderable};

use super::summary;

/// A method parameter.
#[derive(Debug, Clone)]
pub struct Param {
    pub name: String,
    pub ty: String,
}

impl Param {
    pub fn new(name: impl Into<String>, ty: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ty: ty.into(),
        }
    }
}

/// Builder for expression-bodied methods (`... => expr;`).
///
/// The expression head goes on the signature line, and an optional
/// continuation node (e.g. a [`Switch`](super::Switch)) follows on the next
/// lines. Without a continuation the line is terminated with `;`.
#[derive(Debug, Clone)]
pub struct Method {
    name: String,
    modifiers: String,
    return_type: String,
    doc: Option<String>,
    params: Vec<Param>,
    expression: String,
    continuation: Vec<CodeFragment>,
}

impl Method {
    pub fn new(name: impl Into<String>, return_type: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            modifiers: "public".to_string(),
            return_type: return_type.into(),
            doc: None,
            params: Vec::new(),
            expression: String::new(),
            continuation: Vec::new(),
        }
    }

    pub fn modifiers(mut self, modifiers: impl Into<String>) -> Self {
        self.modifiers = modifiers.into();
        self
    }

    pub fn doc(mut self, doc: impl Into<String>) -> Self {
        self.doc = Some(doc.into());
        self
    }

    pub fn param(mut self, param: Param) -> Self {
        self.params.push(param);
        self
    }

    pub fn expression(mut self, expression: impl Into<String>) -> Self {
        self.expression = expression.into();
        self
    }

    pub fn continuation(mut self, node: impl Renderable) -> Self {
        self.continuation = node.to_fragments();
        self
    }
}

impl Renderable for Method {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        let params = self
            .params
            .iter()
            .map(|p| format!("{} {}", p.ty, p.name))
            .collect::<Vec<_>>()
            .join(", ");
        let terminator = if self.continuation.is_empty() { ";" } else { "" };

        let mut fragments = Vec::new();
        if let Some(doc) = &self.doc {
            fragments.push(summary(doc));
        }
        fragments.push(CodeFragment::Line(format!(
            "{} {} {}({}) => {}{}",
            self.modifiers, self.return_type, self.name, params, self.expression, terminator
        )));
        fragments.extend(self.continuation.iter().cloned());
        fragments
    }
}

/// Builder for C# classes.
#[derive(Debug, Clone)]
pub struct Class {
    name: String,
    modifiers: String,
    doc: Option<String>,
    methods: Vec<Method>,
}

impl Class {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            modifiers: "public".to_string(),
            doc: None,
            methods: Vec::new(),
        }
    }

    pub fn modifiers(mut self, modifiers: impl Into<String>) -> Self {
        self.modifiers = modifiers.into();
        self
    }

    pub fn doc(mut self, doc: impl Into<String>) -> Self {
        self.doc = Some(doc.into());
        self
    }

    pub fn method(mut self, method: Method) -> Self {
        self.methods.push(method);
        self
    }
}

impl Renderable for Class {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        let mut fragments = Vec::new();
        if let Some(doc) = &self.doc {
            fragments.push(summary(doc));
        }
        fragments.push(CodeFragment::Line(format!(
            "{} class {}",
            self.modifiers, self.name
        )));

        let mut body = Vec::new();
        for (i, method) in self.methods.iter().enumerate() {
            if i > 0 {
                body.push(CodeFragment::Blank);
            }
            body.extend(method.to_fragments());
        }
        fragments.push(CodeFragment::block("{", body, "}"));

        fragments
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ast::{Build, Switch, SwitchArm};

    #[test]
    fn test_simple_expression_method() {
        let class = Class::new("Counter")
            .modifiers("public static")
            .method(
                Method::new("Zero", "int")
                    .modifiers("public static")
                    .expression("0"),
            )
            .build();
        assert_eq!(
            class,
            "public static class Counter\n{\n    public static int Zero() => 0;\n}\n"
        );
    }

    #[test]
    fn test_method_with_switch() {
        let class = Class::new("MapScenesToPaths")
            .modifiers("public static")
            .method(
                Method::new("GetPath", "string")
                    .modifiers("public static")
                    .doc("Resource path of a scene.")
                    .param(Param::new("scene", "Scene"))
                    .expression("scene switch")
                    .continuation(
                        Switch::new()
                            .arms([SwitchArm::new("Scene.Main", "\"res://Scenes/main.tscn\"")]),
                    ),
            )
            .build();
        assert_eq!(
            class,
            "public static class MapScenesToPaths\n\
             {\n    \
                 /// <summary>Resource path of a scene.</summary>\n    \
                 public static string GetPath(Scene scene) => scene switch\n    \
                 {\n        \
                     Scene.Main => \"res://Scenes/main.tscn\",\n    \
                 };\n\
             }\n"
        );
    }
}
