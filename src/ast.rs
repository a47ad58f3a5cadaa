use std::fmt;

/// Name of the single implicit variable.
pub const VARIABLE_NAME: &str = "x";

/// Binary operators in the expression language.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BinaryOperator {
    /// `+`
    Add,
    /// `-`
    Sub,
    /// `*`
    Mul,
    /// `/`
    Div,
    /// `^`, left operand is the base.
    Pow,
}

impl BinaryOperator {
    /// Maps an operator character to its operator.
    ///
    /// # Example
    /// ```
    /// use exprwalk::ast::BinaryOperator;
    ///
    /// assert_eq!(BinaryOperator::from_char('^'), Some(BinaryOperator::Pow));
    /// assert_eq!(BinaryOperator::from_char('%'), None);
    /// ```
    #[must_use]
    pub const fn from_char(c: char) -> Option<Self> {
        match c {
            '+' => Some(Self::Add),
            '-' => Some(Self::Sub),
            '*' => Some(Self::Mul),
            '/' => Some(Self::Div),
            '^' => Some(Self::Pow),
            _ => None,
        }
    }

    /// The operator's source character.
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Self::Add => '+',
            Self::Sub => '-',
            Self::Mul => '*',
            Self::Div => '/',
            Self::Pow => '^',
        }
    }
}

impl fmt::Display for BinaryOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// Functions the evaluator knows how to apply.
///
/// Names outside this set still parse; they evaluate to `0.0`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Function {
    /// `sin`, argument in radians.
    Sin,
}

impl Function {
    /// Looks up a builtin by name.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "sin" => Some(Self::Sin),
            _ => None,
        }
    }
}

/// An abstract syntax tree node for an arithmetic expression.
///
/// Composite variants exclusively own their children, so a tree is never
/// shared or cyclic, and nothing mutates it after the parser builds it.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    /// A numeric literal.
    Number {
        /// The literal's value.
        value: f64,
    },
    /// Reference to the implicit variable `x`.
    Variable,
    /// Single-argument function call such as `sin(x)`.
    FunctionCall {
        /// Name of the called function, unvalidated.
        name:     String,
        /// The argument expression.
        argument: Box<Self>,
    },
    /// A binary operation.
    BinaryOp {
        /// Left operand.
        left:  Box<Self>,
        /// The operator.
        op:    BinaryOperator,
        /// Right operand.
        right: Box<Self>,
    },
}

impl Expr {
    /// Builds a [`Expr::Number`].
    #[must_use]
    pub const fn number(value: f64) -> Self {
        Self::Number { value }
    }

    /// Builds a [`Expr::BinaryOp`] from owned operands.
    #[must_use]
    pub fn binary(left: Self, op: BinaryOperator, right: Self) -> Self {
        Self::BinaryOp { left: Box::new(left),
                         op,
                         right: Box::new(right) }
    }

    /// Builds a [`Expr::FunctionCall`].
    #[must_use]
    pub fn call(name: impl Into<String>, argument: Self) -> Self {
        Self::FunctionCall { name:     name.into(),
                             argument: Box::new(argument), }
    }

    /// Returns the builtin this node calls, if it is a call to a known name.
    #[must_use]
    pub fn function(&self) -> Option<Function> {
        match self {
            Self::FunctionCall { name, .. } => Function::from_name(name),
            _ => None,
        }
    }

    /// True when the tree references `x` anywhere.
    #[must_use]
    pub fn depends_on_variable(&self) -> bool {
        match self {
            Self::Number { .. } => false,
            Self::Variable => true,
            Self::FunctionCall { argument, .. } => argument.depends_on_variable(),
            Self::BinaryOp { left, right, .. } => {
                left.depends_on_variable() || right.depends_on_variable()
            },
        }
    }

    /// Height of the tree; a leaf has depth 1.
    ///
    /// # Example
    /// ```
    /// assert_eq!(exprwalk::parse("x").unwrap().depth(), 1);
    /// assert_eq!(exprwalk::parse("sin(1+x)*2").unwrap().depth(), 4);
    /// ```
    #[must_use]
    pub fn depth(&self) -> usize {
        match self {
            Self::Number { .. } | Self::Variable => 1,
            Self::FunctionCall { argument, .. } => argument.depth() + 1,
            Self::BinaryOp { left, right, .. } => left.depth().max(right.depth()) + 1,
        }
    }

    /// Renders the tree in fully parenthesized prefix form.
    ///
    /// Binary nodes render as `(<op>,<left>,<right>)`, calls as
    /// `<name>(<argument>)`, and leaves as their value or `x`.
    ///
    /// # Example
    /// ```
    /// let expr = exprwalk::parse("5+2-2").unwrap();
    /// assert_eq!(expr.render(), "(-,(+,5,2),2)");
    /// ```
    #[must_use]
    pub fn render(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number { value } => write!(f, "{value}"),
            Self::Variable => f.write_str(VARIABLE_NAME),
            Self::FunctionCall { name, argument } => write!(f, "{name}({argument})"),
            Self::BinaryOp { left, op, right } => write!(f, "({op},{left},{right})"),
        }
    }
}
