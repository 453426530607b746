pub mod auth;
pub mod theme;
pub mod toast;

pub use auth::{use_auth, AuthHandle, AuthProvider, Session};
pub use theme::{use_theme, Appearance, Theme, ThemeHandle, ThemeProvider};
pub use toast::{use_toast, ToastHandle, ToastKind, ToastProvider};
