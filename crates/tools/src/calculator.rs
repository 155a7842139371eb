//! Calculator capability — evaluates arithmetic expressions.
//!
//! Supports `+`, `-`, `*`, `/`, parentheses, unary negation, and
//! decimal numbers. Parses the expression in a single pass over the
//! character stream. No dependencies beyond std.

use async_trait::async_trait;
use hynicl_core::error::ToolError;
use hynicl_core::tool::{Tool, ToolResult};

pub struct CalculatorTool;

#[async_trait]
impl Tool for CalculatorTool {
    fn name(&self) -> &str {
        "calculator"
    }

    fn description(&self) -> &str {
        "Evaluate an arithmetic expression. Supports +, -, *, /, parentheses, and decimals."
    }

    fn parameters_schema(&self) -> serde_json::Value {
        serde_json::json!({
            "type": "object",
            "properties": {
                "expression": {
                    "type": "string",
                    "description": "The expression to evaluate, e.g. '(2 + 3) * 4'"
                }
            },
            "required": ["expression"]
        })
    }

    async fn execute(&self, arguments: serde_json::Value) -> Result<ToolResult, ToolError> {
        let expr = arguments["expression"]
            .as_str()
            .ok_or_else(|| ToolError::InvalidArguments("Missing 'expression' argument".into()))?;

        match evaluate(expr) {
            Ok(value) => {
                // Whole numbers print without a trailing .0
                let formatted = if value.fract() == 0.0 && value.abs() < 1e15 {
                    format!("{}", value as i64)
                } else {
                    value.to_string()
                };
                Ok(ToolResult {
                    success: true,
                    output: formatted,
                    data: Some(serde_json::json!({"result": value})),
                })
            }
            Err(e) => Ok(ToolResult::fail(format!("Error: {e}"))),
        }
    }
}

/// Evaluate an arithmetic expression string.
pub fn evaluate(expr: &str) -> Result<f64, String> {
    let mut eval = Eval {
        chars: expr.chars().peekable(),
    };
    let value = eval.expr()?;
    eval.skip_whitespace();
    if let Some(c) = eval.chars.peek() {
        return Err(format!("Unexpected character: '{c}'"));
    }
    Ok(value)
}

/// Single-pass recursive-descent evaluator over the raw character stream.
struct Eval<'a> {
    chars: std::iter::Peekable<std::str::Chars<'a>>,
}

impl Eval<'_> {
    fn skip_whitespace(&mut self) {
        while matches!(self.chars.peek(), Some(c) if c.is_whitespace()) {
            self.chars.next();
        }
    }

    /// Peek the next non-whitespace character without consuming it.
    fn peek(&mut self) -> Option<char> {
        self.skip_whitespace();
        self.chars.peek().copied()
    }

    // expr = term (('+' | '-') term)*
    fn expr(&mut self) -> Result<f64, String> {
        let mut left = self.term()?;
        loop {
            match self.peek() {
                Some('+') => {
                    self.chars.next();
                    left += self.term()?;
                }
                Some('-') => {
                    self.chars.next();
                    left -= self.term()?;
                }
                _ => return Ok(left),
            }
        }
    }

    // term = unary (('*' | '/') unary)*
    fn term(&mut self) -> Result<f64, String> {
        let mut left = self.unary()?;
        loop {
            match self.peek() {
                Some('*') => {
                    self.chars.next();
                    left *= self.unary()?;
                }
                Some('/') => {
                    self.chars.next();
                    let right = self.unary()?;
                    if right == 0.0 {
                        return Err("Division by zero".into());
                    }
                    left /= right;
                }
                _ => return Ok(left),
            }
        }
    }

    // unary = '-' unary | primary
    fn unary(&mut self) -> Result<f64, String> {
        if self.peek() == Some('-') {
            self.chars.next();
            return Ok(-self.unary()?);
        }
        self.primary()
    }

    // primary = NUMBER | '(' expr ')'
    fn primary(&mut self) -> Result<f64, String> {
        match self.peek() {
            Some('(') => {
                self.chars.next();
                let value = self.expr()?;
                if self.peek() != Some(')') {
                    return Err("Expected closing parenthesis".into());
                }
                self.chars.next();
                Ok(value)
            }
            Some(c) if c.is_ascii_digit() || c == '.' => self.number(),
            Some(c) => Err(format!("Unexpected character: '{c}'")),
            None => Err("Unexpected end of expression".into()),
        }
    }

    fn number(&mut self) -> Result<f64, String> {
        let mut literal = String::new();
        while matches!(self.chars.peek(), Some(c) if c.is_ascii_digit() || *c == '.') {
            literal.push(self.chars.next().unwrap_or_default());
        }
        literal
            .parse()
            .map_err(|_| format!("Invalid number: {literal}"))
    }
}
