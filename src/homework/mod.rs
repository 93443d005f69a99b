mod parser;
mod validator;
mod verdict;

pub use parser::{HomeworkError, parse_status};
pub use validator::{ResponseError, check_response};
