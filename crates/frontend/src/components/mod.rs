pub mod guards;
pub mod layout;
pub mod spinner;
pub mod toast_container;

pub use guards::{RequireAuth, RequireGuest};
pub use layout::Layout;
pub use spinner::LoadingSpinner;
pub use toast_container::ToastContainer;
