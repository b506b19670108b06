use thiserror::Error;

pub type NumericResult<T> = Result<T, NumericError>;

#[derive(Error, Debug, Clone, Copy, PartialEq)]
pub enum NumericError {
    #[error("divide by zero")]
    DivideByZero,

    /// A non-zero value collapsed to exactly zero.
    #[error("underflow: {value:e} scaled by 10^{exponent} is zero")]
    Underflow { value: f64, exponent: i32 },

    #[error("overflow: {value:e} scaled by 10^{exponent} is not finite")]
    Overflow { value: f64, exponent: i32 },
}
