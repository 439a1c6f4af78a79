// Copyright (c) Microsoft. All rights reserved.

//! Rendering support for API model objects.
//!
//! Models render as `{Key: value,Key2: value2}`: fields appear in declaration
//! order, unset fields are omitted entirely, and a comma separates rendered
//! fields with no trailing separator. The output is a log and diff aid, not a
//! wire format.

use std::fmt;

/// Writes `Key: value` pairs between braces, skipping unset fields.
///
/// Call [`FieldWriter::finish`] exactly once after the last field; it closes
/// the brace and renders `{}` when nothing was written.
pub struct FieldWriter<'a, 'b> {
    f: &'a mut fmt::Formatter<'b>,
    wrote_any: bool,
}

impl<'a, 'b> FieldWriter<'a, 'b> {
    pub fn new(f: &'a mut fmt::Formatter<'b>) -> Self {
        FieldWriter {
            f,
            wrote_any: false,
        }
    }

    /// Renders one scalar or nested-model field if it is set.
    pub fn field<T>(&mut self, name: &str, value: Option<&T>) -> fmt::Result
    where
        T: fmt::Display + ?Sized,
    {
        if let Some(value) = value {
            self.begin(name)?;
            write!(self.f, "{}", value)?;
        }
        Ok(())
    }

    /// Renders one collection field as `[a, b]` if it is set. An empty
    /// collection still renders, as `[]`.
    pub fn list<T>(&mut self, name: &str, items: Option<&[T]>) -> fmt::Result
    where
        T: fmt::Display,
    {
        if let Some(items) = items {
            self.begin(name)?;
            write!(self.f, "[")?;
            for (index, item) in items.iter().enumerate() {
                if index > 0 {
                    write!(self.f, ", ")?;
                }
                write!(self.f, "{}", item)?;
            }
            write!(self.f, "]")?;
        }
        Ok(())
    }

    /// Closes the rendering, emitting `{}` when every field was unset.
    pub fn finish(self) -> fmt::Result {
        if self.wrote_any {
            write!(self.f, "}}")
        } else {
            write!(self.f, "{{}}")
        }
    }

    fn begin(&mut self, name: &str) -> fmt::Result {
        if self.wrote_any {
            write!(self.f, ",")?;
        } else {
            write!(self.f, "{{")?;
            self.wrote_any = true;
        }
        write!(self.f, "{}: ", name)
    }
}

#[cfg(test)]
mod tests {
    use std::fmt;

    use super::FieldWriter;

    #[derive(Default)]
    struct Shape {
        alpha: Option<String>,
        bravo: Option<String>,
        charlie: Option<String>,
        delta: Option<i32>,
        items: Option<Vec<String>>,
    }

    impl fmt::Display for Shape {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            let mut w = FieldWriter::new(f);
            w.field("Alpha", self.alpha.as_deref())?;
            w.field("Bravo", self.bravo.as_deref())?;
            w.field("Charlie", self.charlie.as_deref())?;
            w.field("Delta", self.delta.as_ref())?;
            w.list("Items", self.items.as_deref())?;
            w.finish()
        }
    }

    #[test]
    fn unset_fields_are_omitted() {
        let shape = Shape {
            bravo: Some("x".to_owned()),
            delta: Some(5),
            ..Shape::default()
        };
        assert_eq!("{Bravo: x,Delta: 5}", shape.to_string());
    }

    #[test]
    fn no_trailing_comma_when_last_field_is_unset() {
        let shape = Shape {
            alpha: Some("first".to_owned()),
            ..Shape::default()
        };
        assert_eq!("{Alpha: first}", shape.to_string());
    }

    #[test]
    fn all_unset_renders_empty_braces() {
        assert_eq!("{}", Shape::default().to_string());
    }

    #[test]
    fn lists_render_bracketed_and_comma_spaced() {
        let shape = Shape {
            items: Some(vec!["a".to_owned(), "b".to_owned()]),
            ..Shape::default()
        };
        assert_eq!("{Items: [a, b]}", shape.to_string());

        let empty = Shape {
            items: Some(Vec::new()),
            ..Shape::default()
        };
        assert_eq!("{Items: []}", empty.to_string());
    }

    #[test]
    fn set_fields_chain_with_bare_commas() {
        let shape = Shape {
            alpha: Some("1".to_owned()),
            bravo: Some("2".to_owned()),
            charlie: Some("3".to_owned()),
            ..Shape::default()
        };
        assert_eq!("{Alpha: 1,Bravo: 2,Charlie: 3}", shape.to_string());
    }
}
