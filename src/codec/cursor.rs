use super::CodecOptions;
use std::fmt;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PathSegment {
    Field(&'static str),
    Index(usize),
    Key(String),
}

/// Location of a value inside a wire payload, from the root down.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FieldPath(Vec<PathSegment>);

impl FieldPath {
    pub fn segments(&self) -> &[PathSegment] {
        &self.0
    }

    pub fn is_root(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for FieldPath {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if self.0.is_empty() {
            return f.write_str("<root>");
        }
        for (i, segment) in self.0.iter().enumerate() {
            match segment {
                PathSegment::Field(name) => {
                    if i > 0 {
                        f.write_str(".")?;
                    }
                    f.write_str(name)?;
                }
                PathSegment::Index(index) => write!(f, "[{}]", index)?,
                PathSegment::Key(key) => write!(f, "[{:?}]", key)?,
            }
        }
        Ok(())
    }
}

#[derive(Clone, Copy)]
enum Step<'a> {
    Root,
    Field(&'static str),
    Index(usize),
    Key(&'a str),
}

/* Tracks where the decoder currently is. Each cursor borrows its parent, so descending costs nothing and the path is
 * only collected when an error needs it. */
#[derive(Clone, Copy)]
pub struct Cursor<'a> {
    /// Innermost record (or enum, at the root) being decoded.
    pub entity: &'static str,
    /// Declared field of `entity` that holds the current value. Empty at the root.
    pub field: &'static str,
    options: &'a CodecOptions,
    parent: Option<&'a Cursor<'a>>,
    step: Step<'a>,
}

impl<'a> Cursor<'a> {
    pub fn root(entity: &'static str, options: &'a CodecOptions) -> Self {
        Self {
            entity,
            field: "",
            options,
            parent: None,
            step: Step::Root,
        }
    }

    pub fn options(&self) -> &'a CodecOptions {
        self.options
    }

    pub fn field<'b>(&'b self, entity: &'static str, field: &'static str) -> Cursor<'b> {
        Cursor {
            entity,
            field,
            options: self.options,
            parent: Some(self),
            step: Step::Field(field),
        }
    }

    pub fn index(&self, index: usize) -> Cursor<'_> {
        Cursor {
            entity: self.entity,
            field: self.field,
            options: self.options,
            parent: Some(self),
            step: Step::Index(index),
        }
    }

    pub fn key<'b>(&'b self, key: &'b str) -> Cursor<'b> {
        Cursor {
            entity: self.entity,
            field: self.field,
            options: self.options,
            parent: Some(self),
            step: Step::Key(key),
        }
    }

    pub fn path(&self) -> FieldPath {
        let mut segments = Vec::new();
        let mut current = Some(self);
        while let Some(cursor) = current {
            match cursor.step {
                Step::Root => {}
                Step::Field(name) => segments.push(PathSegment::Field(name)),
                Step::Index(index) => segments.push(PathSegment::Index(index)),
                Step::Key(key) => segments.push(PathSegment::Key(key.to_string())),
            }
            current = cursor.parent;
        }
        segments.reverse();
        FieldPath(segments)
    }
}
