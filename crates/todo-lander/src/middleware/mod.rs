pub mod add_todo_form_middleware;
pub mod logging;

pub use add_todo_form_middleware::AddTodoFormMiddleware;
pub use logging::LoggingMiddleware;
