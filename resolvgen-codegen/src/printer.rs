//! Pretty-printer for the emission tree.
//!
//! Output uses four-space indentation and one blank line between items,
//! except inside runs of `use` declarations and runs of statics.

use crate::ast::{Arm, ArmBody, Expr, Function, Item, Module, Signature, Stmt};

const INDENT: &str = "    ";

/// Renders a module to source text.
#[must_use]
pub fn print_module(module: &Module) -> String {
    let mut printer = Printer::new();
    printer.module(module);
    printer.finish()
}

/// Renders a single item at top level.
#[must_use]
pub fn print_item(item: &Item) -> String {
    let mut printer = Printer::new();
    printer.item(item);
    printer.finish()
}

/// Renders statements at top level, one per line.
#[must_use]
pub fn print_stmts(stmts: &[Stmt]) -> String {
    let mut printer = Printer::new();
    for stmt in stmts {
        printer.stmt(stmt);
    }
    printer.finish()
}

/// Returns the raw string literal for `text` with just enough `#`s.
///
/// Text containing a carriage return falls back to an escaped literal, since
/// raw strings may not contain a bare CR.
#[must_use]
pub fn raw_string_literal(text: &str) -> String {
    if text.contains('\r') {
        return format!("{text:?}");
    }

    let mut longest = 0;
    let mut run: Option<usize> = None;
    for c in text.chars() {
        run = match (c, run) {
            ('"', _) => Some(0),
            ('#', Some(n)) => Some(n + 1),
            _ => None,
        };
        if let Some(n) = run {
            longest = longest.max(n);
        }
    }

    let hashes = "#".repeat(longest + 1);
    format!("r{hashes}\"{text}\"{hashes}")
}

/// Indentation-tracking text writer.
struct Printer {
    out: String,
    indent: usize,
}

impl Printer {
    fn new() -> Self {
        Self {
            out: String::new(),
            indent: 0,
        }
    }

    fn finish(self) -> String {
        self.out
    }

    fn start_line(&mut self) {
        for _ in 0..self.indent {
            self.out.push_str(INDENT);
        }
    }

    fn end_line(&mut self) {
        self.out.push('\n');
    }

    fn line(&mut self, text: &str) {
        self.start_line();
        self.out.push_str(text);
        self.end_line();
    }

    fn blank(&mut self) {
        self.out.push('\n');
    }

    fn module(&mut self, module: &Module) {
        for comment in &module.header {
            if comment.is_empty() {
                self.line("//");
            } else {
                self.line(&format!("// {comment}"));
            }
        }
        if !module.header.is_empty() {
            self.blank();
        }
        for attr in &module.attrs {
            self.line(&format!("#[{attr}]"));
        }
        self.line(&format!("pub mod {} {{", module.name));
        self.indent += 1;

        let mut previous: Option<&Item> = None;
        for item in &module.items {
            if let Some(prev) = previous
                && !same_group(prev, item)
            {
                self.blank();
            }
            self.item(item);
            previous = Some(item);
        }

        self.indent -= 1;
        self.line("}");
    }

    fn item(&mut self, item: &Item) {
        match item {
            Item::Use { path, alias } => match alias {
                Some(alias) => self.line(&format!("use {path} as {alias};")),
                None => self.line(&format!("use {path};")),
            },
            Item::UseGroup { path, names } => {
                self.line(&format!("use {path}::{{{}}};", names.join(", ")));
            }
            Item::Trait { name, methods } => {
                if methods.is_empty() {
                    self.line(&format!("pub trait {name} {{}}"));
                    return;
                }
                self.line(&format!("pub trait {name} {{"));
                self.indent += 1;
                for method in methods {
                    self.start_line();
                    self.signature(method);
                    self.out.push(';');
                    self.end_line();
                }
                self.indent -= 1;
                self.line("}");
            }
            Item::Static { name, ty, value } => self.binding_item("pub static", name, ty, value),
            Item::Const { name, ty, value } => self.binding_item("pub const", name, ty, value),
            Item::Fn(function) => self.function(function),
        }
    }

    fn binding_item(&mut self, keyword: &str, name: &str, ty: &str, value: &Expr) {
        self.start_line();
        self.out.push_str(&format!("{keyword} {name}: {ty} = "));
        self.expr(value);
        self.out.push(';');
        self.end_line();
    }

    fn signature(&mut self, sig: &Signature) {
        self.out.push_str("fn ");
        self.out.push_str(&sig.name);
        if let Some(generics) = &sig.generics {
            self.out.push_str(&format!("<{generics}>"));
        }
        let mut params: Vec<String> = Vec::with_capacity(sig.params.len() + 1);
        if sig.self_ref {
            params.push("&self".to_string());
        }
        params.extend(sig.params.iter().map(|p| format!("{}: {}", p.name, p.ty)));
        self.out.push_str(&format!("({}) -> {}", params.join(", "), sig.ret));
    }

    fn function(&mut self, function: &Function) {
        self.start_line();
        self.out.push_str("pub ");
        self.signature(&function.sig);
        self.out.push_str(" {");
        self.end_line();
        self.block_body(&function.body);
        self.line("}");
    }

    fn block_body(&mut self, stmts: &[Stmt]) {
        self.indent += 1;
        for stmt in stmts {
            self.stmt(stmt);
        }
        self.indent -= 1;
    }

    fn stmt(&mut self, stmt: &Stmt) {
        match stmt {
            Stmt::Let {
                name,
                mutable,
                value,
            } => {
                self.start_line();
                let keyword = if *mutable { "let mut" } else { "let" };
                self.out.push_str(&format!("{keyword} {name} = "));
                self.expr(value);
                self.out.push(';');
                self.end_line();
            }
            Stmt::Assign { target, value } => {
                self.start_line();
                self.out.push_str(&format!("{target} = "));
                self.expr(value);
                self.out.push(';');
                self.end_line();
            }
            Stmt::IfLet {
                pattern,
                value,
                body,
            } => {
                self.start_line();
                self.out.push_str(&format!("if let {pattern} = "));
                self.expr(value);
                self.out.push_str(" {");
                self.end_line();
                self.block_body(body);
                self.line("}");
            }
            Stmt::For {
                binding,
                iter,
                body,
            } => {
                self.start_line();
                self.out.push_str(&format!("for {binding} in "));
                self.expr(iter);
                self.out.push_str(" {");
                self.end_line();
                self.block_body(body);
                self.line("}");
            }
            Stmt::Expr(expr) => {
                self.start_line();
                self.expr(expr);
                if !expr.is_block_like() {
                    self.out.push(';');
                }
                self.end_line();
            }
            Stmt::Tail(expr) => {
                self.start_line();
                self.expr(expr);
                self.end_line();
            }
            Stmt::Continue => self.line("continue;"),
        }
    }

    fn exprs(&mut self, exprs: &[Expr]) {
        for (i, expr) in exprs.iter().enumerate() {
            if i > 0 {
                self.out.push_str(", ");
            }
            self.expr(expr);
        }
    }

    /// Writes an expression starting at the current column.
    fn expr(&mut self, expr: &Expr) {
        match expr {
            Expr::Path(text) => self.out.push_str(text),
            Expr::Ref(inner) => {
                self.out.push('&');
                self.expr(inner);
            }
            Expr::Str(text) => self.out.push_str(&format!("{text:?}")),
            Expr::RawStr(text) => self.out.push_str(&raw_string_literal(text)),
            Expr::Slice(items) => {
                self.out.push_str("&[");
                self.exprs(items);
                self.out.push(']');
            }
            Expr::Call { func, args } => {
                self.out.push_str(func);
                self.out.push('(');
                self.exprs(args);
                self.out.push(')');
            }
            Expr::MethodCall {
                receiver,
                method,
                args,
            } => {
                self.expr(receiver);
                self.out.push('.');
                self.out.push_str(method);
                self.out.push('(');
                self.exprs(args);
                self.out.push(')');
            }
            Expr::Match { scrutinee, arms } => {
                self.out.push_str("match ");
                self.expr(scrutinee);
                self.out.push_str(" {");
                self.end_line();
                self.indent += 1;
                for arm in arms {
                    self.arm(arm);
                }
                self.indent -= 1;
                self.start_line();
                self.out.push('}');
            }
            Expr::Macro { name, args } => {
                self.out.push_str(name);
                self.out.push_str("!(");
                self.exprs(args);
                self.out.push(')');
            }
        }
    }

    fn arm(&mut self, arm: &Arm) {
        self.start_line();
        self.out.push_str(&arm.pattern);
        self.out.push_str(" => ");
        match &arm.body {
            ArmBody::Expr(expr) => {
                self.expr(expr);
                self.out.push(',');
                self.end_line();
            }
            ArmBody::Block(stmts) => {
                self.out.push('{');
                self.end_line();
                self.block_body(stmts);
                self.line("}");
            }
        }
    }
}

/// Returns true if no blank line separates the two items.
fn same_group(prev: &Item, next: &Item) -> bool {
    let is_use = |item: &Item| matches!(item, Item::Use { .. } | Item::UseGroup { .. });
    let is_static = |item: &Item| matches!(item, Item::Static { .. });
    (is_use(prev) && is_use(next)) || (is_static(prev) && is_static(next))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ast::Param;

    #[test]
    fn test_raw_string_literal_hashes() {
        assert_eq!(raw_string_literal("type Query {}"), "r#\"type Query {}\"#");
        assert_eq!(raw_string_literal("a \"# b"), "r##\"a \"# b\"##");
        assert_eq!(raw_string_literal("\"### x"), "r####\"\"### x\"####");
        assert_eq!(raw_string_literal("# not after quote"), "r#\"# not after quote\"#");
    }

    #[test]
    fn test_raw_string_literal_carriage_return() {
        assert_eq!(raw_string_literal("a\r\nb"), "\"a\\r\\nb\"");
    }

    #[test]
    fn test_print_stmts_nesting() {
        let stmts = vec![
            Stmt::let_mut("json", Expr::path("Value::Null")),
            Stmt::IfLet {
                pattern: "Some(res1)".to_string(),
                value: Expr::borrow(Expr::path("res")),
                body: vec![
                    Stmt::let_(
                        "json1",
                        Expr::call("Value::string", vec![Expr::path("res1")]),
                    ),
                    Stmt::Assign {
                        target: "json".to_string(),
                        value: Expr::path("json1"),
                    },
                ],
            },
        ];

        let expected = "\
let mut json = Value::Null;
if let Some(res1) = &res {
    let json1 = Value::string(res1);
    json = json1;
}
";
        assert_eq!(print_stmts(&stmts), expected);
    }

    #[test]
    fn test_print_match_arms() {
        let stmts = vec![Stmt::let_(
            "res",
            Expr::match_(
                Expr::call("load", vec![]),
                vec![
                    Arm::expr("Ok(res)", Expr::path("res")),
                    Arm::block(
                        "Err(err)",
                        vec![
                            Stmt::Expr(Expr::method(
                                Expr::path("ec"),
                                "error",
                                vec![Expr::path("err")],
                            )),
                            Stmt::Continue,
                        ],
                    ),
                ],
            ),
        )];

        let expected = "\
let res = match load() {
    Ok(res) => res,
    Err(err) => {
        ec.error(err);
        continue;
    }
};
";
        assert_eq!(print_stmts(&stmts), expected);
    }

    #[test]
    fn test_print_trait_and_statics() {
        let item = Item::Trait {
            name: "Resolvers".to_string(),
            methods: vec![Signature {
                name: "post_author".to_string(),
                generics: None,
                self_ref: true,
                params: vec![Param::new("ctx", "&Context"), Param::new("it", "&Post")],
                ret: "Result<Option<User>, Error>".to_string(),
            }],
        };
        assert_eq!(
            print_item(&item),
            "pub trait Resolvers {\n    fn post_author(&self, ctx: &Context, it: &Post) -> Result<Option<User>, Error>;\n}\n"
        );

        let empty = Item::Trait {
            name: "Resolvers".to_string(),
            methods: vec![],
        };
        assert_eq!(print_item(&empty), "pub trait Resolvers {}\n");

        let table = Item::Static {
            name: "POST_SATISFIES".to_string(),
            ty: "&[&str]".to_string(),
            value: Expr::Slice(vec![Expr::Str("Post".to_string()), Expr::Str("Node".to_string())]),
        };
        assert_eq!(
            print_item(&table),
            "pub static POST_SATISFIES: &[&str] = &[\"Post\", \"Node\"];\n"
        );
    }

    #[test]
    fn test_print_module_grouping() {
        let module = Module {
            header: vec!["generated".to_string()],
            attrs: vec!["allow(unused)".to_string()],
            name: "blog".to_string(),
            items: vec![
                Item::Use {
                    path: "crate::models".to_string(),
                    alias: None,
                },
                Item::Use {
                    path: "crate::util".to_string(),
                    alias: Some("u".to_string()),
                },
                Item::Const {
                    name: "SCHEMA".to_string(),
                    ty: "&str".to_string(),
                    value: Expr::RawStr("type Query".to_string()),
                },
            ],
        };

        let expected = "\
// generated

#[allow(unused)]
pub mod blog {
    use crate::models;
    use crate::util as u;

    pub const SCHEMA: &str = r#\"type Query\"#;
}
";
        assert_eq!(print_module(&module), expected);
    }
}
