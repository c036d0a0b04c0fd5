pub mod constants;
pub mod home;
pub mod page;

pub use home::HomePage;
pub use page::Page;
