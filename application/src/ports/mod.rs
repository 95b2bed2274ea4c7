pub mod churn_gateway;
pub mod conversation_logger;
pub mod progress;
