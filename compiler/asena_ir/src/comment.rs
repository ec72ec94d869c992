//! Comment trivia.
//!
//! Comments never reach the parser's token stream. The lexer collects them
//! here so formatters and highlighters can still see them, and the parser
//! reads doc comments back out when it builds a declaration.

use std::fmt;

use crate::{Name, Span, Spanned};

/// A `//` or `//!` comment.
#[derive(Clone, Copy, Eq, PartialEq, Hash)]
pub struct Comment {
    /// Text after the marker, with surrounding whitespace trimmed.
    pub content: Name,
    /// The whole comment, marker included, up to but excluding the newline.
    pub span: Span,
    pub kind: CommentKind,
}

impl Comment {
    #[inline]
    pub fn new(content: Name, span: Span, kind: CommentKind) -> Self {
        Comment {
            content,
            span,
            kind,
        }
    }

    #[inline]
    pub fn is_doc(&self) -> bool {
        self.kind == CommentKind::Doc
    }
}

impl fmt::Debug for Comment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?} {:?} @ {}", self.kind, self.content, self.span)
    }
}

impl Spanned for Comment {
    fn span(&self) -> Span {
        self.span
    }
}

#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum CommentKind {
    /// `// text`
    Line,
    /// `//! text`
    Doc,
}

/// All comments of one file, in source order.
#[derive(Clone, Default, Eq, PartialEq, Hash, Debug)]
pub struct CommentList {
    comments: Vec<Comment>,
}

impl CommentList {
    pub fn new() -> Self {
        CommentList::default()
    }

    pub fn push(&mut self, comment: Comment) {
        debug_assert!(
            self.comments.last().map_or(0, |last| last.span.end) <= comment.span.start,
            "comments must be pushed in source order"
        );
        self.comments.push(comment);
    }

    pub fn len(&self) -> usize {
        self.comments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.comments.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Comment> {
        self.comments.iter()
    }

    pub fn as_slice(&self) -> &[Comment] {
        &self.comments
    }

    /// Comments lying entirely inside `start..end`, found by binary search.
    pub fn in_range(&self, start: u32, end: u32) -> &[Comment] {
        let lo = self.comments.partition_point(|c| c.span.start < start);
        let hi = self.comments.partition_point(|c| c.span.end <= end);
        if lo >= hi {
            &[]
        } else {
            &self.comments[lo..hi]
        }
    }
}

impl<'a> IntoIterator for &'a CommentList {
    type Item = &'a Comment;
    type IntoIter = std::slice::Iter<'a, Comment>;

    fn into_iter(self) -> Self::IntoIter {
        self.comments.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn comment(start: u32, end: u32, kind: CommentKind) -> Comment {
        Comment::new(Name::EMPTY, Span::new(start, end), kind)
    }

    #[test]
    fn in_range_selects_enclosed_comments() {
        let mut list = CommentList::new();
        list.push(comment(0, 5, CommentKind::Line));
        list.push(comment(6, 12, CommentKind::Doc));
        list.push(comment(13, 20, CommentKind::Doc));
        list.push(comment(30, 35, CommentKind::Line));

        let docs = list.in_range(6, 25);
        assert_eq!(docs.len(), 2);
        assert!(docs.iter().all(Comment::is_doc));
        assert!(list.in_range(21, 29).is_empty());
        assert_eq!(list.in_range(0, 100).len(), 4);
    }
}
