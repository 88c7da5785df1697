//! Comments and annotations attached to declarations
//!
//! Declarations pick up comments written on the lines before them, comments trailing on
//! their last line, and an annotation block:
//!
//! ```text
//! // The account owner        <- comment
//! struct User {
//!   1: string name  // login  <- end-of-line comment of the field
//! } (go.type = "User")        <- annotations
//! ```
//!
//! The grammar engine usually learns about these after the declaration itself is built, so
//! they are attached with the builders of [`Decorated`], which also widen the declaration's
//! location to cover what was attached.

use super::super::location::Location;
use super::super::traits::Children;
use super::annotation::Annotations;
use super::tokens::Comment;

#[derive(Debug, Clone, PartialEq, Default)]
pub struct Trivia {
    pub comments: Vec<Comment>,
    pub end_line_comments: Vec<Comment>,
    pub annotations: Option<Annotations>,
}

impl Trivia {
    pub fn is_empty(&self) -> bool {
        self.comments.is_empty() && self.end_line_comments.is_empty() && self.annotations.is_none()
    }

    pub(crate) fn collect<'a>(&'a self, children: Children<'a>) -> Children<'a> {
        children
            .all(&self.comments)
            .all(&self.end_line_comments)
            .opt(self.annotations.as_ref())
    }
}

/// Declarations that carry [`Trivia`]
pub trait Decorated: Sized {
    fn trivia(&self) -> &Trivia;
    fn trivia_mut(&mut self) -> &mut Trivia;
    fn location_mut(&mut self) -> &mut Location;

    /// Attach leading and end-of-line comments.
    fn with_comments(mut self, comments: Vec<Comment>, end_line_comments: Vec<Comment>) -> Self {
        let attached = comments.iter().chain(end_line_comments.iter());
        if let Some(span) = Location::bounding_box(attached.map(|c| &c.location)) {
            let location = self.location_mut();
            *location = location.cover(&span);
        }
        let trivia = self.trivia_mut();
        trivia.comments = comments;
        trivia.end_line_comments = end_line_comments;
        self
    }

    fn with_annotations(mut self, annotations: Annotations) -> Self {
        let location = self.location_mut();
        *location = location.cover(&annotations.location);
        self.trivia_mut().annotations = Some(annotations);
        self
    }

    fn comments(&self) -> &[Comment] {
        &self.trivia().comments
    }

    fn end_line_comments(&self) -> &[Comment] {
        &self.trivia().end_line_comments
    }

    fn annotations(&self) -> Option<&Annotations> {
        self.trivia().annotations.as_ref()
    }
}

/// Implements [`Decorated`] for a struct with `trivia` and `location` fields.
macro_rules! impl_decorated {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl $crate::thrift::ast::elements::trivia::Decorated for $ty {
                fn trivia(&self) -> &$crate::thrift::ast::elements::trivia::Trivia {
                    &self.trivia
                }
                fn trivia_mut(&mut self) -> &mut $crate::thrift::ast::elements::trivia::Trivia {
                    &mut self.trivia
                }
                fn location_mut(&mut self) -> &mut $crate::thrift::ast::location::Location {
                    &mut self.location
                }
            }
        )+
    };
}

pub(crate) use impl_decorated;
