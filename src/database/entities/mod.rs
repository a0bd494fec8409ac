pub mod blog_posts;
pub mod contacts;
pub mod projects;
pub mod testimonials;
