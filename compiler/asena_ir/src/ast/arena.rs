//! Node storage for one parsed file.

use super::{Expr, ExprId, Pattern, PatternId, Stmt, StmtId};

/// Owns every expression, pattern and statement of one file.
///
/// Allocation is append-only; ids handed out are stable for the life of
/// the arena.
#[derive(Clone, Default, Eq, PartialEq, Debug)]
pub struct AstArena {
    exprs: Vec<Expr>,
    patterns: Vec<Pattern>,
    stmts: Vec<Stmt>,
}

fn next_index(len: usize) -> u32 {
    // The arena holds at most one node per source byte and sources are
    // capped at u32::MAX bytes by the lexer.
    u32::try_from(len).unwrap_or(u32::MAX)
}

impl AstArena {
    pub fn new() -> Self {
        AstArena::default()
    }

    pub fn alloc_expr(&mut self, expr: Expr) -> ExprId {
        let id = ExprId::new(next_index(self.exprs.len()));
        self.exprs.push(expr);
        id
    }

    pub fn alloc_pattern(&mut self, pattern: Pattern) -> PatternId {
        let id = PatternId::new(next_index(self.patterns.len()));
        self.patterns.push(pattern);
        id
    }

    pub fn alloc_stmt(&mut self, stmt: Stmt) -> StmtId {
        let id = StmtId::new(next_index(self.stmts.len()));
        self.stmts.push(stmt);
        id
    }

    /// # Panics
    /// Panics if `id` came from a different arena.
    #[inline]
    pub fn expr(&self, id: ExprId) -> &Expr {
        &self.exprs[id.index()]
    }

    #[inline]
    pub fn pattern(&self, id: PatternId) -> &Pattern {
        &self.patterns[id.index()]
    }

    #[inline]
    pub fn stmt(&self, id: StmtId) -> &Stmt {
        &self.stmts[id.index()]
    }

    pub fn expr_count(&self) -> usize {
        self.exprs.len()
    }

    pub fn pattern_count(&self) -> usize {
        self.patterns.len()
    }

    pub fn stmt_count(&self) -> usize {
        self.stmts.len()
    }
}
