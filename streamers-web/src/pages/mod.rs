mod home;
mod layout;
mod not_found;

pub use home::Home;
pub use layout::AppLayout;
pub use not_found::NotFound;
