mod about;
mod blog;
mod catalogues;
mod contact;
mod home;
mod products;

pub use about::About;
pub use blog::{Blog, NotFound};
pub use catalogues::Catalogues;
pub use contact::Contact;
pub use home::Home;
pub use products::{CategoryView, ProductDetail, ProductsIndex, SubcategoryView};
