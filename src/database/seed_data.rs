use anyhow::Result;
use chrono::{Duration, Utc};
use sea_orm::*;
use tracing::info;
use uuid::Uuid;

use crate::database::entities::{
    blog_posts, projects, projects::Technologies, testimonials,
};
use crate::services::estimate_read_time;

/// Inserts a small published portfolio so a fresh database renders something.
/// Does nothing when any project already exists.
pub async fn create_example_content(db: &DatabaseConnection) -> Result<()> {
    let existing = projects::Entity::find().count(db).await?;
    if existing > 0 {
        info!("Projects already present, skipping seed data creation");
        return Ok(());
    }

    info!("Creating example portfolio content");
    let now = Utc::now();

    let sample_projects = [
        (
            "E-Commerce Platform",
            "A full-stack e-commerce solution featuring user authentication, product management, and payment integration.",
            vec!["React", "Laravel", "MySQL", "Bootstrap"],
            "Full Stack",
            true,
        ),
        (
            "Business Analytics Dashboard",
            "Interactive dashboard for business intelligence with data visualization, reporting features, and real-time analytics.",
            vec!["Python", "React", "MySQL", "Chart.js"],
            "Data Analysis",
            true,
        ),
        (
            "Task Management System",
            "Collaborative task management application with real-time updates, team collaboration features, and project tracking.",
            vec!["React", "PHP", "MySQL", "WebSockets"],
            "Web Application",
            false,
        ),
    ];

    for (offset, (title, description, technologies, category, featured)) in
        sample_projects.into_iter().enumerate()
    {
        projects::ActiveModel {
            id: Set(Uuid::new_v4().to_string()),
            title: Set(title.to_string()),
            description: Set(description.to_string()),
            technologies: Set(Technologies(
                technologies.into_iter().map(str::to_string).collect(),
            )),
            category: Set(category.to_string()),
            image: Set(None),
            github_url: Set(None),
            live_url: Set(None),
            featured: Set(featured),
            created_at: Set(now - Duration::days(offset as i64)),
        }
        .insert(db)
        .await?;
    }

    let sample_testimonials = [
        (
            "Sarah Johnson",
            "Project Manager",
            "Tech Solutions Inc.",
            "Technical expertise combined with business analysis skills made for an invaluable team member who bridges requirements and delivery.",
        ),
        (
            "Michael Chen",
            "Senior Developer",
            "Digital Innovations Ltd.",
            "Excellent code quality and a keen eye for user experience design. Highly recommended for any development project.",
        ),
    ];

    for (offset, (name, position, company, content)) in sample_testimonials.into_iter().enumerate() {
        testimonials::ActiveModel {
            id: Set(Uuid::new_v4().to_string()),
            name: Set(name.to_string()),
            position: Set(position.to_string()),
            company: Set(company.to_string()),
            content: Set(content.to_string()),
            avatar: Set(None),
            rating: Set(5),
            approved: Set(true),
            created_at: Set(now - Duration::days(offset as i64)),
        }
        .insert(db)
        .await?;
    }

    let content = "Full-stack development keeps moving: typed APIs, server-side rendering \
                   and edge deployments change how web applications are built. This post \
                   walks through the trends worth following and the ones worth waiting out.";
    blog_posts::ActiveModel {
        id: Set(Uuid::new_v4().to_string()),
        title: Set("The Future of Full-Stack Development".to_string()),
        excerpt: Set("Exploring emerging trends in full-stack development.".to_string()),
        content: Set(content.to_string()),
        category: Set("Development".to_string()),
        image: Set(None),
        date: Set(now),
        read_time: Set(estimate_read_time(content)),
        published: Set(true),
        created_at: Set(now),
        updated_at: Set(now),
    }
    .insert(db)
    .await?;

    info!("Example portfolio content created");
    Ok(())
}
