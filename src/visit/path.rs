use crate::error::Error;
use std::fmt;

/// The path by which a visited node hangs off the document root: a sequence of struct keys
/// and list indices.
///
/// A validation error's `path` field reuses these segments; during traversal the current path
/// is available on [`VisitInfo`](super::VisitInfo).
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Path {
    pub segments: Vec<PathSegment>,
}

impl Path {
    pub fn push(&mut self, segment: PathSegment) {
        self.segments.push(segment)
    }

    pub fn pop(&mut self) -> Option<PathSegment> {
        self.segments.pop()
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }
}

impl TryFrom<&str> for Path {
    type Error = Error;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let segments = value
            .split('.')
            .map(PathSegment::try_from)
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self { segments })
    }
}

impl fmt::Display for Path {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for segment in self.segments.iter() {
            if first {
                first = false;
            } else {
                f.write_str(".")?;
            }
            write!(f, "{}", segment)?;
        }
        Ok(())
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum PathSegment {
    Index(usize),

    Arguments,
    Directives,
    Name,
    SelectionSet,
    Type,
    Value,
    Variable,
    VariableDefinitions,
}

impl TryFrom<&str> for PathSegment {
    type Error = Error;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value.parse::<usize>() {
            Ok(index) => Ok(Self::Index(index)),
            Err(_) => match value {
                "arguments" => Ok(PathSegment::Arguments),
                "directives" => Ok(PathSegment::Directives),
                "name" => Ok(PathSegment::Name),
                "selectionSet" => Ok(PathSegment::SelectionSet),
                "type" => Ok(PathSegment::Type),
                "value" => Ok(PathSegment::Value),
                "variable" => Ok(PathSegment::Variable),
                "variableDefinitions" => Ok(PathSegment::VariableDefinitions),
                _ => Err(Error::new(format!("Invalid path segment {value}"), None)),
            },
        }
    }
}

impl fmt::Display for PathSegment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PathSegment::Index(index) => write!(f, "{}", index),
            PathSegment::Arguments => f.write_str("arguments"),
            PathSegment::Directives => f.write_str("directives"),
            PathSegment::Name => f.write_str("name"),
            PathSegment::SelectionSet => f.write_str("selectionSet"),
            PathSegment::Type => f.write_str("type"),
            PathSegment::Value => f.write_str("value"),
            PathSegment::Variable => f.write_str("variable"),
            PathSegment::VariableDefinitions => f.write_str("variableDefinitions"),
        }
    }
}
