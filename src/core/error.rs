use std::fmt;

#[derive(Debug, Clone, PartialEq)]
pub enum SimError {
    InvalidGrid(String),
    InvalidConfig(String),
    ThreadPool(String),
}

impl fmt::Display for SimError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SimError::InvalidGrid(msg) => write!(f, "Invalid Grid: {}", msg),
            SimError::InvalidConfig(msg) => write!(f, "Invalid Config: {}", msg),
            SimError::ThreadPool(msg) => write!(f, "Thread Pool Error: {}", msg),
        }
    }
}

impl std::error::Error for SimError {}

impl SimError {
    pub fn invalid_grid(message: &str) -> Self { SimError::InvalidGrid(message.to_string()) }
    pub fn invalid_config(message: &str) -> Self { SimError::InvalidConfig(message.to_string()) }
    pub fn thread_pool(message: &str) -> Self { SimError::ThreadPool(message.to_string()) }
}
