//! Testimonials service

use validator::Validate;

use crate::{
    error::AppResult,
    models::testimonial::{CreateTestimonial, Testimonial, TestimonialQuery, UpdateTestimonial},
    repository::Repository,
};

#[derive(Clone)]
pub struct TestimonialsService {
    repository: Repository,
}

impl TestimonialsService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    pub async fn list(&self, query: &TestimonialQuery) -> AppResult<Vec<Testimonial>> {
        self.repository
            .testimonials
            .list(query.featured, query.min_rating)
            .await
    }

    pub async fn create(&self, data: &CreateTestimonial) -> AppResult<Testimonial> {
        data.validate()?;
        self.repository.testimonials.create(data).await
    }

    pub async fn update(&self, id: i32, data: &UpdateTestimonial) -> AppResult<Testimonial> {
        data.validate()?;
        self.repository.testimonials.update(id, data).await
    }

    pub async fn delete(&self, id: i32) -> AppResult<()> {
        self.repository.testimonials.delete(id).await
    }
}
