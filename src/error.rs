use thiserror::Error;

#[derive(Error, Debug)]
pub enum StatsError {
    #[error("IO Error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Statistic {0} not found")]
    Missing(String),
    #[error("Statistic {0} is a vector, expected a scalar")]
    NotScalar(String),
    #[error("Statistic {name} has non-numeric value {value:?}")]
    NotNumeric { name: String, value: String },
    #[error("Division by zero: {numerator} / {denominator}")]
    DivisionByZero {
        numerator: String,
        denominator: String,
    },
}
