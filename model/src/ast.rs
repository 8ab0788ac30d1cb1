use std::fmt;

/// Parse root: the ordered statements of one input unit
#[derive(Debug, PartialEq, Clone, Default)]
pub struct Program {
    pub statements: Vec<Statement>,
}

#[derive(Debug, PartialEq, Clone)]
pub enum Statement {
    Let {
        name: Identifier,
        value: Expression,
    },
    Return(Expression),
    Expression(Expression),
    Block(BlockStatement),
}

#[derive(Debug, PartialEq, Clone, Default)]
pub struct BlockStatement {
    pub statements: Vec<Statement>,
}

#[derive(Debug, PartialEq, Eq, Clone)]
pub struct Identifier {
    pub name: String,
}

impl Identifier {
    pub fn new(name: impl Into<String>) -> Self {
        Identifier { name: name.into() }
    }
}

#[derive(Debug, PartialEq, Clone)]
pub enum Expression {
    Identifier(Identifier),
    IntegerLiteral(i64),
    BooleanLiteral(bool),
    Prefix {
        op: PrefixOp,
        right: Box<Expression>,
    },
    Infix {
        left: Box<Expression>,
        op: InfixOp,
        right: Box<Expression>,
    },
    If {
        predicate: Box<Expression>,
        then_branch: BlockStatement,
        else_branch: Option<BlockStatement>,
    },
    FunctionLiteral {
        name: Option<Identifier>,
        parameters: Vec<Identifier>,
        body: BlockStatement,
    },
    Call {
        callee: Box<Expression>, // Identifier for named calls, any expression otherwise
        arguments: Vec<Expression>,
    },
    Block(BlockStatement),
}

impl Expression {
    pub fn identifier(name: impl Into<String>) -> Self {
        Expression::Identifier(Identifier::new(name))
    }

    pub fn prefix(op: PrefixOp, right: Expression) -> Self {
        Expression::Prefix {
            op,
            right: Box::new(right),
        }
    }

    pub fn infix(left: Expression, op: InfixOp, right: Expression) -> Self {
        Expression::Infix {
            left: Box::new(left),
            op,
            right: Box::new(right),
        }
    }
}

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum PrefixOp {
    LogicalNot,
    Minus,
}

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum InfixOp {
    Add,
    Sub,
    Mul,
    Div,
    EqualEqual,
    NotEqual,
    Less,
    Greater,
    LogicalAnd,
    LogicalOr,
}

impl PrefixOp {
    pub fn symbol(self) -> &'static str {
        match self {
            PrefixOp::LogicalNot => "!",
            PrefixOp::Minus => "-",
        }
    }
}

impl InfixOp {
    pub fn symbol(self) -> &'static str {
        match self {
            InfixOp::Add => "+",
            InfixOp::Sub => "-",
            InfixOp::Mul => "*",
            InfixOp::Div => "/",
            InfixOp::EqualEqual => "==",
            InfixOp::NotEqual => "!=",
            InfixOp::Less => "<",
            InfixOp::Greater => ">",
            InfixOp::LogicalAnd => "&&",
            InfixOp::LogicalOr => "||",
        }
    }
}

// Rendering. Every form written here parses back to the same tree: infix
// and prefix nodes are fully parenthesised and statements end in ';'.

impl fmt::Display for PrefixOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

impl fmt::Display for InfixOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

impl fmt::Display for Program {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for stmt in &self.statements {
            write!(f, "{stmt}")?;
        }
        Ok(())
    }
}

impl fmt::Display for Statement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Statement::Let { name, value } => write!(f, "let {name} = {value};"),
            Statement::Return(value) => write!(f, "return {value};"),
            Statement::Expression(expr) => write!(f, "{expr};"),
            Statement::Block(block) => write!(f, "{block}"),
        }
    }
}

impl fmt::Display for BlockStatement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("{ ")?;
        for stmt in &self.statements {
            write!(f, "{stmt} ")?;
        }
        f.write_str("}")
    }
}

impl fmt::Display for Identifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

impl fmt::Display for Expression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Expression::Identifier(ident) => write!(f, "{ident}"),
            Expression::IntegerLiteral(value) => write!(f, "{value}"),
            Expression::BooleanLiteral(value) => write!(f, "{value}"),
            Expression::Prefix { op, right } => write!(f, "({op}{right})"),
            Expression::Infix { left, op, right } => write!(f, "({left} {op} {right})"),
            Expression::If {
                predicate,
                then_branch,
                else_branch,
            } => {
                write!(f, "if ({predicate}) {then_branch}")?;
                if let Some(else_branch) = else_branch {
                    write!(f, " else {else_branch}")?;
                }
                Ok(())
            }
            Expression::FunctionLiteral {
                name,
                parameters,
                body,
            } => {
                f.write_str("fun")?;
                if let Some(name) = name {
                    write!(f, " {name}")?;
                }
                f.write_str("(")?;
                write_comma_separated(f, parameters)?;
                write!(f, ") {body}")
            }
            Expression::Call { callee, arguments } => {
                write!(f, "{callee}(")?;
                write_comma_separated(f, arguments)?;
                f.write_str(")")
            }
            Expression::Block(block) => write!(f, "{block}"),
        }
    }
}

fn write_comma_separated<T: fmt::Display>(f: &mut fmt::Formatter<'_>, items: &[T]) -> fmt::Result {
    for (i, item) in items.iter().enumerate() {
        if i > 0 {
            f.write_str(", ")?;
        }
        write!(f, "{item}")?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn render_let_statements() {
        let program = Program {
            statements: vec![
                Statement::Let {
                    name: Identifier::new("myVar"),
                    value: Expression::identifier("anotherVar"),
                },
                Statement::Let {
                    name: Identifier::new("myVar"),
                    value: Expression::identifier("anotherVar"),
                },
            ],
        };
        assert_eq!(program.to_string(), "let myVar = anotherVar;let myVar = anotherVar;");
    }

    #[test]
    fn render_nested_operators() {
        let expr = Expression::infix(
            Expression::prefix(PrefixOp::Minus, Expression::identifier("a")),
            InfixOp::Mul,
            Expression::infix(Expression::IntegerLiteral(2), InfixOp::Add, Expression::BooleanLiteral(true)),
        );
        assert_eq!(expr.to_string(), "((-a) * (2 + true))");
    }

    #[test]
    fn render_if_with_and_without_else() {
        let then_branch = BlockStatement {
            statements: vec![Statement::Expression(Expression::identifier("x"))],
        };
        let predicate = Box::new(Expression::infix(
            Expression::identifier("x"),
            InfixOp::Less,
            Expression::identifier("y"),
        ));
        let without_else = Expression::If {
            predicate: predicate.clone(),
            then_branch: then_branch.clone(),
            else_branch: None,
        };
        assert_eq!(without_else.to_string(), "if ((x < y)) { x; }");

        let with_else = Expression::If {
            predicate,
            then_branch,
            else_branch: Some(BlockStatement::default()),
        };
        assert_eq!(with_else.to_string(), "if ((x < y)) { x; } else { }");
    }

    #[test]
    fn render_function_and_call() {
        let function = Expression::FunctionLiteral {
            name: Some(Identifier::new("add")),
            parameters: vec![Identifier::new("a"), Identifier::new("b")],
            body: BlockStatement {
                statements: vec![Statement::Return(Expression::infix(
                    Expression::identifier("a"),
                    InfixOp::Add,
                    Expression::identifier("b"),
                ))],
            },
        };
        assert_eq!(function.to_string(), "fun add(a, b) { return (a + b); }");

        let anonymous = Expression::FunctionLiteral {
            name: None,
            parameters: vec![],
            body: BlockStatement::default(),
        };
        assert_eq!(anonymous.to_string(), "fun() { }");

        let call = Expression::Call {
            callee: Box::new(Expression::identifier("add")),
            arguments: vec![Expression::IntegerLiteral(1), Expression::IntegerLiteral(2)],
        };
        assert_eq!(call.to_string(), "add(1, 2)");
    }

    #[test]
    fn render_block_statement() {
        let stmt = Statement::Block(BlockStatement {
            statements: vec![
                Statement::Let {
                    name: Identifier::new("x"),
                    value: Expression::IntegerLiteral(6),
                },
                Statement::Return(Expression::identifier("x")),
            ],
        });
        assert_eq!(stmt.to_string(), "{ let x = 6; return x; }");
    }
}
