pub mod messaging;
pub mod partners;

pub use messaging::{participants_of, MessagingService};
pub use partners::conversation_partners;
