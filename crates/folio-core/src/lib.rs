pub mod classify;
pub mod contact;
pub mod content;
pub mod error;
pub mod fallback;
pub mod feed;
pub mod models;
pub mod traits;
pub mod view;

pub use classify::{to_project_record, ImageKey};
pub use contact::{
    submit, ContactForm, FormField, SimulatedSender, DEFAULT_SUBMIT_DELAY, FAILED_MESSAGE,
    SENDING_LABEL, SENT_MESSAGE,
};
pub use error::{FolioError, Result};
pub use fallback::fallback_projects;
pub use feed::{load_feed, resolve, FallbackReason, Feed, FeedOrigin, LOAD_ERROR_MESSAGE};
pub use models::*;
pub use traits::{ContactMessage, MessageSender, RepositorySource};
pub use view::{PortfolioView, SubmitOutcome, ViewEvent};
