pub mod chat;
pub mod config;
pub mod contact;
pub mod content;
mod errors;
mod lifecycle;
pub mod scroll_spy;
pub mod sections;
pub mod splash;
pub mod theme;
pub mod typing;

pub use chat::{ChatMessage, ChatRole, ChatWidget, SendOutcome};
pub use config::SiteConfig;
pub use contact::{ContactFields, ContactForm, FormField, FormStatus, SubmitOutcome};
pub use content::{ContentCatalog, PORTFOLIO};
pub use errors::{SiteError, SiteResult};
pub use lifecycle::{Lifecycle, LifecycleHandle};
pub use scroll_spy::{ScrollSpy, ScrollSpyState};
pub use splash::{start_splash, SplashPhase};
pub use theme::{ThemeState, ThemeStore};
pub use typing::{TypingEffect, TypingTimings};
