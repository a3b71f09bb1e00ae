pub mod login_user;
pub mod logout_user;
pub mod refresh_token;
pub mod register_user;

pub use login_user::{login_user_handler, LoginRequestDto, LoginResponse};
pub use logout_user::logout_user_handler;
pub use refresh_token::{refresh_token_handler, RefreshTokenRequestDto, RefreshTokenResponseBody};
pub use register_user::{
    register_user_handler, CreateUserRequest, RegisterUserResponse, RegisteredUser,
};
