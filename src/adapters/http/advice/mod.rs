//! HTTP adapter for the stateless advice endpoint.

mod dto;
mod handlers;
mod routes;

pub use dto::{
    answers_from_body, AdviceErrorResponse, AdviceResponse, BodyError, GENERATION_FAILED_MESSAGE,
};
pub use handlers::AdviceAppState;
pub use routes::advice_router;
