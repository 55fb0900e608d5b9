mod current_admin;
mod login_admin;

pub use current_admin::current_admin_handler;
pub use current_admin::__path_current_admin_handler;
pub use login_admin::{login_admin_handler, LoginRequestDto};
pub use login_admin::__path_login_admin_handler;
