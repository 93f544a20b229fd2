pub mod cloud;
pub mod collage;
pub mod color;
pub mod config;
pub mod constants;
pub mod inference;
pub mod scene;
pub mod session;
pub mod toast;
pub mod upload;
pub mod view;

pub use cloud::*;
pub use color::*;
pub use config::*;
pub use inference::*;
pub use scene::*;
pub use session::*;
pub use toast::*;
pub use upload::*;
pub use view::*;
