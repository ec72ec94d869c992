//! Attribute parsing.
//!
//! Grammar: `attribute = "@" path [ "(" [ expr { "," expr } [","] ] ")" ] .`
//!
//! Attributes may sit on their own lines above the declaration they
//! annotate:
//!
//! ```text
//! @inline
//! @deprecated("use bar")
//! foo (x: Nat) : Nat
//! ```

use asena_ir::ast::Attribute;
use asena_ir::TokenTag;

use crate::{ParseError, Parser};

impl Parser<'_> {
    /// Zero or more attributes, with the line breaks that follow each.
    pub(super) fn parse_attributes(&mut self) -> Result<Vec<Attribute>, ParseError> {
        let mut attrs = Vec::new();
        while let Some(at) = self.cursor.eat(TokenTag::At) {
            let path = self.parse_path()?;
            let args = if self.cursor.check(TokenTag::LParen) {
                let group = self.open_group();
                let context = self.context.nested();
                let (args, _) = self.with_context(context, |p| {
                    p.comma_list(TokenTag::RParen, Self::parse_expr)
                })?;
                self.close(group)?;
                Some(args)
            } else {
                None
            };
            attrs.push(Attribute {
                path,
                args,
                span: at.merge(self.cursor.previous_span()),
            });
            self.cursor.skip_line_breaks();
        }
        Ok(attrs)
    }
}
