pub mod blog_service;
pub mod contact_service;
pub mod notification;
pub mod project_service;
pub mod query;
pub mod read_time;
pub mod testimonial_service;

pub use blog_service::{BlogPage, BlogService};
pub use contact_service::ContactService;
pub use notification::{
    ContactNotification, Delivery, Mailer, MemoryMailer, NotificationDispatcher,
    NotificationError, SmtpMailer,
};
pub use project_service::ProjectService;
pub use query::{Filter, FilterValue, ListQuery};
pub use read_time::estimate_read_time;
pub use testimonial_service::TestimonialService;
