use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Create contacts table
        manager
            .create_table(
                Table::create()
                    .table(Contacts::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Contacts::Id).string().not_null().primary_key())
                    .col(ColumnDef::new(Contacts::Name).string().not_null())
                    .col(ColumnDef::new(Contacts::Email).string().not_null())
                    .col(ColumnDef::new(Contacts::Subject).string().not_null())
                    .col(ColumnDef::new(Contacts::Message).text().not_null())
                    .col(ColumnDef::new(Contacts::IsRead).boolean().not_null().default(false))
                    .col(ColumnDef::new(Contacts::CreatedAt).timestamp_with_time_zone().not_null())
                    .to_owned(),
            )
            .await?;

        // Create blog_posts table
        manager
            .create_table(
                Table::create()
                    .table(BlogPosts::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(BlogPosts::Id).string().not_null().primary_key())
                    .col(ColumnDef::new(BlogPosts::Title).string().not_null())
                    .col(ColumnDef::new(BlogPosts::Excerpt).string().not_null())
                    .col(ColumnDef::new(BlogPosts::Content).text().not_null())
                    .col(ColumnDef::new(BlogPosts::Category).string().not_null())
                    .col(ColumnDef::new(BlogPosts::Image).string())
                    .col(ColumnDef::new(BlogPosts::Date).timestamp_with_time_zone().not_null())
                    .col(ColumnDef::new(BlogPosts::ReadTime).string().not_null())
                    .col(ColumnDef::new(BlogPosts::Published).boolean().not_null().default(false))
                    .col(ColumnDef::new(BlogPosts::CreatedAt).timestamp_with_time_zone().not_null())
                    .col(ColumnDef::new(BlogPosts::UpdatedAt).timestamp_with_time_zone().not_null())
                    .to_owned(),
            )
            .await?;

        // Create testimonials table
        manager
            .create_table(
                Table::create()
                    .table(Testimonials::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Testimonials::Id).string().not_null().primary_key())
                    .col(ColumnDef::new(Testimonials::Name).string().not_null())
                    .col(ColumnDef::new(Testimonials::Position).string().not_null())
                    .col(ColumnDef::new(Testimonials::Company).string().not_null())
                    .col(ColumnDef::new(Testimonials::Content).text().not_null())
                    .col(ColumnDef::new(Testimonials::Avatar).string())
                    .col(ColumnDef::new(Testimonials::Rating).integer().not_null().default(5))
                    .col(ColumnDef::new(Testimonials::Approved).boolean().not_null().default(false))
                    .col(ColumnDef::new(Testimonials::CreatedAt).timestamp_with_time_zone().not_null())
                    .to_owned(),
            )
            .await?;

        // Create projects table
        manager
            .create_table(
                Table::create()
                    .table(Projects::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Projects::Id).string().not_null().primary_key())
                    .col(ColumnDef::new(Projects::Title).string().not_null())
                    .col(ColumnDef::new(Projects::Description).text().not_null())
                    .col(ColumnDef::new(Projects::Technologies).json().not_null())
                    .col(ColumnDef::new(Projects::Category).string().not_null())
                    .col(ColumnDef::new(Projects::Image).string())
                    .col(ColumnDef::new(Projects::GithubUrl).string())
                    .col(ColumnDef::new(Projects::LiveUrl).string())
                    .col(ColumnDef::new(Projects::Featured).boolean().not_null().default(false))
                    .col(ColumnDef::new(Projects::CreatedAt).timestamp_with_time_zone().not_null())
                    .to_owned(),
            )
            .await?;

        // Indexes for the list filters and sort keys
        manager
            .create_index(
                Index::create()
                    .name("idx_contacts_created_at")
                    .table(Contacts::Table)
                    .col(Contacts::CreatedAt)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_blog_posts_published_date")
                    .table(BlogPosts::Table)
                    .col(BlogPosts::Published)
                    .col(BlogPosts::Date)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_blog_posts_category")
                    .table(BlogPosts::Table)
                    .col(BlogPosts::Category)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_testimonials_approved_created_at")
                    .table(Testimonials::Table)
                    .col(Testimonials::Approved)
                    .col(Testimonials::CreatedAt)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_projects_category")
                    .table(Projects::Table)
                    .col(Projects::Category)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_projects_featured")
                    .table(Projects::Table)
                    .col(Projects::Featured)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Projects::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Testimonials::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(BlogPosts::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Contacts::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
enum Contacts {
    Table,
    Id,
    Name,
    Email,
    Subject,
    Message,
    IsRead,
    CreatedAt,
}

#[derive(DeriveIden)]
enum BlogPosts {
    Table,
    Id,
    Title,
    Excerpt,
    Content,
    Category,
    Image,
    Date,
    ReadTime,
    Published,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum Testimonials {
    Table,
    Id,
    Name,
    Position,
    Company,
    Content,
    Avatar,
    Rating,
    Approved,
    CreatedAt,
}

#[derive(DeriveIden)]
enum Projects {
    Table,
    Id,
    Title,
    Description,
    Technologies,
    Category,
    Image,
    GithubUrl,
    LiveUrl,
    Featured,
    CreatedAt,
}
