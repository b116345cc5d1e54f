//! C# switch expression builder.

use resmap_codegen::{CodeFragment, Renderable};

/// An arm of a switch expression: `pattern => expr,`.
#[derive(Debug, Clone)]
pub struct SwitchArm {
    pub pattern: String,
    pub expr: String,
}

impl SwitchArm {
    pub fn new(pattern: impl Into<String>, expr: impl Into<String>) -> Self {
        Self {
            pattern: pattern.into(),
            expr: expr.into(),
        }
    }
}

/// The braced arm list of a `switch` expression, closed with `};`.
///
/// The scrutinee is written by the caller on the preceding line
/// (e.g. `=> prefab switch`), since C# puts it before the keyword.
#[derive(Debug, Clone, Default)]
pub struct Switch {
    arms: Vec<SwitchArm>,
    discard: Option<String>,
}

impl Switch {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn arms(mut self, arms: impl IntoIterator<Item = SwitchArm>) -> Self {
        self.arms.extend(arms);
        self
    }

    /// Final `_ => expr` arm.
    pub fn discard(mut self, expr: impl Into<String>) -> Self {
        self.discard = Some(expr.into());
        self
    }
}

impl Renderable for Switch {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        let mut arms: Vec<CodeFragment> = self
            .arms
            .iter()
            .map(|arm| CodeFragment::Line(format!("{} => {},", arm.pattern, arm.expr)))
            .collect();
        if let Some(expr) = &self.discard {
            arms.push(CodeFragment::Line(format!("_ => {},", expr)));
        }

        vec![CodeFragment::block("{", arms, "};")]
    }
}
