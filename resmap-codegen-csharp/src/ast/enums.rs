//! C# enum builder.

use resmap_codegen::{CodeFragment, Renderable};

use super::summary;

/// A member of a C# enum.
#[derive(Debug, Clone)]
pub struct Member {
    pub name: String,
    pub doc: Option<String>,
}

impl Member {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            doc: None,
        }
    }

    pub fn doc(mut self, doc: impl Into<String>) -> Self {
        self.doc = Some(doc.into());
        self
    }
}

/// Builder for C# enums.
#[derive(Debug, Clone)]
pub struct Enum {
    name: String,
    doc: Option<String>,
    members: Vec<Member>,
}

impl Enum {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            doc: None,
            members: Vec::new(),
        }
    }

    pub fn doc(mut self, doc: impl Into<String>) -> Self {
        self.doc = Some(doc.into());
        self
    }

    pub fn members(mut self, members: impl IntoIterator<Item = Member>) -> Self {
        self.members.extend(members);
        self
    }
}

impl Renderable for Enum {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        let mut fragments = Vec::new();

        if let Some(doc) = &self.doc {
            fragments.push(summary(doc));
        }
        fragments.push(CodeFragment::Line(format!("public enum {}", self.name)));

        let body = self
            .members
            .iter()
            .flat_map(|member| {
                let mut lines = Vec::new();
                if let Some(doc) = &member.doc {
                    lines.push(summary(doc));
                }
                lines.push(CodeFragment::Line(format!("{},", member.name)));
                lines
            })
            .collect();
        fragments.push(CodeFragment::block("{", body, "}"));

        fragments
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ast::Build;

    #[test]
    fn test_empty_enum() {
        assert_eq!(Enum::new("Prefab").build(), "public enum Prefab\n{\n}\n");
    }

    #[test]
    fn test_enum_members() {
        let e = Enum::new("Scene")
            .doc("All scenes")
            .members([
                Member::new("MainMenu").doc("res://Scenes/a&b.tscn"),
                Member::new("Credits"),
            ])
            .build();
        assert_eq!(
            e,
            "/// <summary>All scenes</summary>\n\
             public enum Scene\n\
             {\n    \
                 /// <summary>res://Scenes/a&amp;b.tscn</summary>\n    \
                 MainMenu,\n    \
                 Credits,\n\
             }\n"
        );
    }
}
