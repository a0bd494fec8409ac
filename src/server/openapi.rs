use utoipa::OpenApi;

use super::handlers::{blog, contact, projects, root, testimonials};
use crate::database::entities::{
    blog_posts, contacts, projects as project_entity, testimonials as testimonial_entity,
};
use crate::schemas::{
    CreateBlogPostRequest, CreateContactRequest, CreateProjectRequest, CreateTestimonialRequest,
};

#[derive(OpenApi)]
#[openapi(
    info(title = "Portfolio API", description = "Contact form, blog, testimonials and projects"),
    paths(
        root::api_status,
        contact::submit_contact,
        contact::list_contacts,
        blog::list_blog_posts,
        blog::get_blog_post,
        blog::create_blog_post,
        testimonials::list_testimonials,
        testimonials::submit_testimonial,
        projects::list_projects,
        projects::create_project,
    ),
    components(schemas(
        root::ApiStatus,
        contact::ContactResponse,
        contact::ContactList,
        blog::BlogListResponse,
        testimonials::TestimonialList,
        projects::ProjectList,
        contacts::Model,
        blog_posts::Model,
        testimonial_entity::Model,
        project_entity::Model,
        CreateContactRequest,
        CreateBlogPostRequest,
        CreateTestimonialRequest,
        CreateProjectRequest,
    )),
    tags(
        (name = "portfolio", description = "Public portfolio endpoints")
    )
)]
pub struct ApiDoc;
