pub mod open_trivia;

pub use open_trivia::{
    CategoryCountResponse, CategoryItem, CategoryListResponse, CategoryQuestionCount,
    QuestionItem, QuestionListResponse, ResponseCode, TokenResponse,
};
