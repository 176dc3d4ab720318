pub mod error;
pub mod formatter;
pub mod operator;

use compact_str::{CompactString, CompactStringExt};
use error::RuntimeErrorKind;
use operator::{ArithmeticOperator, ComparisonOperator};

#[derive(Debug, Clone, PartialEq)]
pub enum GrinValue {
    Integer(i64),
    Float(f64),
    String(CompactString),
}

impl Default for GrinValue {
    fn default() -> Self {
        GrinValue::Integer(0)
    }
}

impl From<i64> for GrinValue {
    fn from(value: i64) -> Self {
        GrinValue::Integer(value)
    }
}

impl From<f64> for GrinValue {
    fn from(value: f64) -> Self {
        GrinValue::Float(value)
    }
}

impl From<&str> for GrinValue {
    fn from(value: &str) -> Self {
        GrinValue::String(value.into())
    }
}

impl std::fmt::Display for GrinValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Integer(v) => write!(f, "{v}"),
            Self::Float(v) => write!(f, "{}", formatter::format_float(*v)),
            Self::String(v) => write!(f, "{v}"),
        }
    }
}

impl GrinValue {
    pub fn type_name(&self) -> &'static str {
        match self {
            GrinValue::Integer(_) => "integer",
            GrinValue::Float(_) => "float",
            GrinValue::String(_) => "string",
        }
    }

    pub fn is_numeric(&self) -> bool {
        matches!(self, GrinValue::Integer(_) | GrinValue::Float(_))
    }

    fn as_float(&self) -> Option<f64> {
        match self {
            GrinValue::Integer(v) => Some(*v as f64),
            GrinValue::Float(v) => Some(*v),
            GrinValue::String(_) => None,
        }
    }

    fn invalid_operands(
        &self,
        operator: ArithmeticOperator,
        other: &GrinValue,
    ) -> RuntimeErrorKind {
        RuntimeErrorKind::InvalidOperands {
            operator,
            lhs: self.type_name(),
            rhs: other.type_name(),
        }
    }

    fn numeric(
        &self,
        other: &GrinValue,
        operator: ArithmeticOperator,
        integer: impl FnOnce(i64, i64) -> Option<i64>,
        float: impl FnOnce(f64, f64) -> f64,
    ) -> Option<Result<GrinValue, RuntimeErrorKind>> {
        match (self, other) {
            (GrinValue::Integer(lhs), GrinValue::Integer(rhs)) => Some(
                integer(*lhs, *rhs)
                    .map(GrinValue::Integer)
                    .ok_or(RuntimeErrorKind::IntegerOverflow(operator)),
            ),
            (lhs, rhs) => {
                let (lhs, rhs) = (lhs.as_float()?, rhs.as_float()?);
                Some(Ok(GrinValue::Float(float(lhs, rhs))))
            }
        }
    }
}

fn repeat(text: &str, count: i64) -> Result<CompactString, RuntimeErrorKind> {
    let times = usize::try_from(count).map_err(|_| RuntimeErrorKind::NegativeRepetition(count))?;
    if text.is_empty() || times == 0 {
        return Ok(CompactString::default());
    }
    let too_large = || RuntimeErrorKind::RepetitionTooLarge(count);
    let length = text.len().checked_mul(times).ok_or_else(too_large)?;
    let mut repeated = String::new();
    repeated.try_reserve_exact(length).map_err(|_| too_large())?;
    for _ in 0..times {
        repeated.push_str(text);
    }
    Ok(repeated.into())
}

// Arithmetic
impl GrinValue {
    pub fn add(&self, other: &GrinValue) -> Result<GrinValue, RuntimeErrorKind> {
        let operator = ArithmeticOperator::Add;
        if let (GrinValue::String(lhs), GrinValue::String(rhs)) = (self, other) {
            return Ok(GrinValue::String([lhs, rhs].concat_compact()));
        }
        self.numeric(other, operator, i64::checked_add, |lhs, rhs| lhs + rhs)
            .unwrap_or_else(|| Err(self.invalid_operands(operator, other)))
    }

    pub fn subtract(&self, other: &GrinValue) -> Result<GrinValue, RuntimeErrorKind> {
        let operator = ArithmeticOperator::Subtract;
        self.numeric(other, operator, i64::checked_sub, |lhs, rhs| lhs - rhs)
            .unwrap_or_else(|| Err(self.invalid_operands(operator, other)))
    }

    pub fn multiply(&self, other: &GrinValue) -> Result<GrinValue, RuntimeErrorKind> {
        let operator = ArithmeticOperator::Multiply;
        match (self, other) {
            (GrinValue::String(text), GrinValue::Integer(count))
            | (GrinValue::Integer(count), GrinValue::String(text)) => {
                repeat(text, *count).map(GrinValue::String)
            }
            _ => self
                .numeric(other, operator, i64::checked_mul, |lhs, rhs| lhs * rhs)
                .unwrap_or_else(|| Err(self.invalid_operands(operator, other))),
        }
    }

    pub fn divide(&self, other: &GrinValue) -> Result<GrinValue, RuntimeErrorKind> {
        let operator = ArithmeticOperator::Divide;
        match other {
            GrinValue::Integer(0) if self.is_numeric() => {
                return Err(RuntimeErrorKind::DivisionByZero)
            }
            GrinValue::Float(v) if *v == 0.0 && self.is_numeric() => {
                return Err(RuntimeErrorKind::DivisionByZero)
            }
            _ => {}
        }
        self.numeric(other, operator, i64::checked_div, |lhs, rhs| lhs / rhs)
            .unwrap_or_else(|| Err(self.invalid_operands(operator, other)))
    }

    pub fn apply(
        &self,
        operator: ArithmeticOperator,
        other: &GrinValue,
    ) -> Result<GrinValue, RuntimeErrorKind> {
        match operator {
            ArithmeticOperator::Add => self.add(other),
            ArithmeticOperator::Subtract => self.subtract(other),
            ArithmeticOperator::Multiply => self.multiply(other),
            ArithmeticOperator::Divide => self.divide(other),
        }
    }
}

// Comparison
impl GrinValue {
    pub fn compare(
        &self,
        operator: ComparisonOperator,
        other: &GrinValue,
    ) -> Result<bool, RuntimeErrorKind> {
        match (self, other) {
            (GrinValue::String(lhs), GrinValue::String(rhs)) => {
                Ok(operator.apply(lhs.as_str(), rhs.as_str()))
            }
            (lhs, rhs) => match (lhs.as_float(), rhs.as_float()) {
                (Some(lhs), Some(rhs)) => Ok(operator.apply(&lhs, &rhs)),
                _ => Err(RuntimeErrorKind::InvalidComparison {
                    lhs: self.type_name(),
                    rhs: other.type_name(),
                }),
            },
        }
    }
}
