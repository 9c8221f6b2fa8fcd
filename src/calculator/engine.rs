//! Calculator input state machine.
//!
//! Models numeric entry, pending-operator algebra, chained operations and
//! error-state recovery for a running-total calculator: every operator has
//! equal, immediate precedence, so chains collapse left-to-right. The engine
//! is pure state; it knows nothing about rendering or persistence.

use super::format::format_result;

/// Display sentinel produced by dividing by zero.
///
/// Not a numeric value: it is self-healing in that the next digit entry
/// replaces it and starts a fresh number.
pub const DIVIDE_BY_ZERO: &str = "Cannot divide by zero";

/// A binary arithmetic operator.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Operator {
    Add,
    Subtract,
    Multiply,
    Divide,
}

impl Operator {
    /// The symbol used on the keypad and in the demo command protocol.
    pub fn symbol(&self) -> char {
        match self {
            Self::Add => '+',
            Self::Subtract => '-',
            Self::Multiply => '*',
            Self::Divide => '/',
        }
    }

    /// Parse a keypad symbol.
    pub fn from_symbol(symbol: char) -> Option<Self> {
        match symbol {
            '+' => Some(Self::Add),
            '-' => Some(Self::Subtract),
            '*' => Some(Self::Multiply),
            '/' => Some(Self::Divide),
            _ => None,
        }
    }
}

/// The committed left-hand side of an expression awaiting its right-hand
/// value. Operand and operator always travel together.
#[derive(Clone, Debug, PartialEq)]
struct Pending {
    operand: String,
    operator: Operator,
}

/// Calculator state: the entry being typed, the pending expression, and a
/// flag marking that the next digit starts a fresh number.
#[derive(Clone, Debug)]
pub struct Calculator {
    entry: String,
    pending: Option<Pending>,
    reset_on_next_digit: bool,
}

impl Default for Calculator {
    fn default() -> Self {
        Self::new()
    }
}

impl Calculator {
    pub fn new() -> Self {
        Self {
            entry: "0".to_string(),
            pending: None,
            reset_on_next_digit: false,
        }
    }

    /// The string currently shown on the display.
    pub fn display(&self) -> &str {
        &self.entry
    }

    /// Whether the display shows the divide-by-zero sentinel.
    pub fn is_error(&self) -> bool {
        self.entry == DIVIDE_BY_ZERO
    }

    /// Enter a digit or the decimal point. Anything else is ignored.
    pub fn enter_digit(&mut self, digit: char) {
        if !digit.is_ascii_digit() && digit != '.' {
            return;
        }

        if self.reset_on_next_digit || self.is_error() {
            self.entry = if digit == '.' {
                "0.".to_string()
            } else {
                digit.to_string()
            };
            self.reset_on_next_digit = false;
            return;
        }

        if digit == '.' {
            // At most one decimal point per entry.
            if !self.entry.contains('.') {
                self.entry.push('.');
            }
            return;
        }

        if self.entry == "0" {
            self.entry = digit.to_string();
        } else {
            self.entry.push(digit);
        }
    }

    /// Commit the current entry as the pending operand for `operator`.
    ///
    /// Chaining operators without evaluating collapses the chain
    /// left-to-right: the pending pair is evaluated against the current
    /// entry before the new operator is stored.
    pub fn choose_operator(&mut self, operator: Operator) {
        if self.is_error() {
            self.entry = "0".to_string();
        }

        if let Some(pending) = self.pending.take()
            && !self.reset_on_next_digit
        {
            self.entry = compute(&pending.operand, &self.entry, pending.operator);
        }

        self.pending = Some(Pending {
            operand: self.entry.clone(),
            operator,
        });
        self.reset_on_next_digit = true;
    }

    /// Divide the current entry by 100 in place.
    ///
    /// Deliberately leaves the pending expression alone, so a subsequent
    /// operator treats the percent result as a fresh operand. This matches
    /// the common mobile-calculator convention.
    pub fn percent(&mut self) {
        if self.is_error() {
            self.entry = "0".to_string();
        }

        let value = self.entry.parse::<f64>().unwrap_or(f64::NAN);
        self.entry = if value.is_finite() {
            format!("{}", value / 100.0)
        } else {
            "0".to_string()
        };
    }

    /// Evaluate the pending expression against the current entry.
    /// No-op when nothing is pending.
    pub fn evaluate(&mut self) {
        if let Some(pending) = self.pending.take() {
            self.entry = compute(&pending.operand, &self.entry, pending.operator);
            self.reset_on_next_digit = true;
        }
    }

    /// Reset everything back to a fresh "0".
    pub fn clear_all(&mut self) {
        self.entry = "0".to_string();
        self.pending = None;
        self.reset_on_next_digit = false;
    }

    /// Drop the last character of the entry.
    ///
    /// When the reset flag is set this clears the just-computed value
    /// instead; emptying the entry resets it to "0".
    pub fn delete_last(&mut self) {
        if self.reset_on_next_digit {
            self.entry = "0".to_string();
            self.reset_on_next_digit = false;
        } else if self.entry.len() > 1 {
            self.entry.pop();
        } else {
            self.entry = "0".to_string();
        }
    }
}

/// Compute `lhs operator rhs` over decimal numeral strings.
///
/// An unparseable operand recovers silently to "0". Division by zero yields
/// the error sentinel; any other non-finite result also recovers to "0".
fn compute(lhs: &str, rhs: &str, operator: Operator) -> String {
    let (Ok(a), Ok(b)) = (lhs.parse::<f64>(), rhs.parse::<f64>()) else {
        return "0".to_string();
    };

    let result = match operator {
        Operator::Add => a + b,
        Operator::Subtract => a - b,
        Operator::Multiply => a * b,
        Operator::Divide => {
            if b == 0.0 {
                return DIVIDE_BY_ZERO.to_string();
            }
            a / b
        }
    };

    if result.is_finite() {
        format_result(result)
    } else {
        "0".to_string()
    }
}
