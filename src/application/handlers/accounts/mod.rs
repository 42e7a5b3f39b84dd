//! Account command handlers.

mod login;
mod logout;
mod signup;

pub use login::{LoginCommand, LoginHandler, LoginResult};
pub use logout::{LogoutCommand, LogoutHandler};
pub use signup::{SignupCommand, SignupHandler, SignupResult};
