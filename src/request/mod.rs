mod login_data;
mod register_data;

pub use login_data::LoginData;
pub use register_data::RegisterData;
