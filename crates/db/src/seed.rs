//! Sample catalog content for fresh installs.

use crate::error::StoreError;
use crate::models::blog_post::CreateBlogPost;
use crate::models::testimonial::CreateTestimonial;
use crate::models::tour::{CreateTour, TourFilter};
use crate::store::Storage;

/// Insert the sample tours, testimonials and blog posts, unless the
/// catalog already has tours. Returns whether anything was inserted.
pub async fn seed_sample_data(store: &dyn Storage) -> Result<bool, StoreError> {
    let existing = store
        .tours()
        .list(&TourFilter {
            category: None,
            include_inactive: true,
        })
        .await?;
    if !existing.is_empty() {
        tracing::debug!(tours = existing.len(), "Catalog not empty, skipping sample data");
        return Ok(false);
    }

    for tour in sample_tours() {
        store.tours().create(tour).await?;
    }
    for testimonial in sample_testimonials() {
        store.testimonials().create(testimonial).await?;
    }
    for post in sample_blog_posts() {
        store.blog_posts().create(post).await?;
    }

    tracing::info!(backend = store.backend(), "Seeded sample catalog");
    Ok(true)
}

#[allow(clippy::too_many_arguments)]
fn tour(
    name: &str,
    description: &str,
    duration: i32,
    price: i32,
    category: &str,
    image_url: &str,
    rating: &str,
    review_count: i32,
    highlights: &[&str],
) -> CreateTour {
    CreateTour {
        name: name.to_string(),
        description: description.to_string(),
        duration,
        price,
        category: category.to_string(),
        image_url: image_url.to_string(),
        rating: Some(rating.to_string()),
        review_count: Some(review_count),
        highlights: highlights.iter().map(|h| h.to_string()).collect(),
        is_active: Some(true),
        max_group_size: None,
        difficulty: None,
        best_season: None,
        includes: Vec::new(),
        excludes: Vec::new(),
    }
}

fn sample_tours() -> Vec<CreateTour> {
    vec![
        tour(
            "Cultural Immersion Experience",
            "Deep dive into Bhutanese culture with monastery visits, traditional ceremonies, and authentic local experiences.",
            10,
            2450,
            "cultural",
            "https://images.unsplash.com/photo-1582510003544-4d00b7f74220?w=800&h=600&fit=crop",
            "4.9",
            24,
            &["Monastery Visits", "Traditional Ceremonies", "Local Family Stay"],
        ),
        tour(
            "Himalayan Trek Adventure",
            "Challenge yourself with breathtaking treks to Tiger's Nest and remote mountain villages.",
            14,
            3200,
            "adventure",
            "https://images.unsplash.com/photo-1506905925346-21bda4d32df4?w=800&h=600&fit=crop",
            "4.8",
            18,
            &["Tiger's Nest Trek", "High Altitude Adventure", "Mountain Villages"],
        ),
        tour(
            "Spiritual Awakening Journey",
            "Find inner peace through meditation retreats, mindfulness training, and spiritual teachings.",
            7,
            1890,
            "spiritual",
            "https://images.unsplash.com/photo-1599901860904-17e6ed7083a0?w=800&h=600&fit=crop",
            "5.0",
            31,
            &["Meditation Retreats", "Spiritual Teachings", "Mindfulness Training"],
        ),
        tour(
            "Photography Expedition",
            "Capture Bhutan's beauty with professional guidance and access to the most photogenic locations.",
            12,
            2800,
            "photography",
            "https://images.unsplash.com/photo-1544735716-392fe2489ffa?w=800&h=600&fit=crop",
            "4.7",
            15,
            &["Professional Guidance", "Exclusive Locations", "Photo Workshops"],
        ),
        tour(
            "Wellness & Happiness Tour",
            "Experience Bhutan's Gross National Happiness philosophy through wellness practices and cultural immersion.",
            8,
            2150,
            "spiritual",
            "https://images.unsplash.com/photo-1599901860904-17e6ed7083a0?w=800&h=600&fit=crop",
            "4.9",
            22,
            &["Happiness Philosophy", "Wellness Practices", "Cultural Immersion"],
        ),
        tour(
            "Royal Heritage Tour",
            "Exclusive access to royal palaces, private audiences, and premium accommodations in luxury resorts.",
            9,
            4500,
            "cultural",
            "https://images.unsplash.com/photo-1582510003544-4d00b7f74220?w=800&h=600&fit=crop",
            "5.0",
            12,
            &["Royal Palaces", "Private Audiences", "Luxury Accommodations"],
        ),
    ]
}

fn testimonial(
    name: &str,
    country: &str,
    image_url: &str,
    text: &str,
    trip_name: &str,
    duration: &str,
) -> CreateTestimonial {
    CreateTestimonial {
        name: name.to_string(),
        country: country.to_string(),
        image_url: image_url.to_string(),
        text: text.to_string(),
        rating: 5,
        trip_name: trip_name.to_string(),
        duration: duration.to_string(),
        is_active: Some(true),
    }
}

fn sample_testimonials() -> Vec<CreateTestimonial> {
    vec![
        testimonial(
            "Sarah Mitchell",
            "Australia",
            "https://images.unsplash.com/photo-1438761681033-6461ffad8d80?w=100&h=100&fit=crop",
            "Bhutan changed my perspective on life. The team didn't just show us temples, they showed us a way of being.",
            "Cultural Immersion Tour",
            "10 days",
        ),
        testimonial(
            "Marcus Weber",
            "Germany",
            "https://images.unsplash.com/photo-1500648767791-00dcc994a43e?w=100&h=100&fit=crop",
            "The Tiger's Nest trek was incredible, but what made it special was understanding its spiritual significance through our guide's eyes.",
            "Himalayan Trek",
            "14 days",
        ),
        testimonial(
            "Yuki Tanaka",
            "Japan",
            "https://images.unsplash.com/photo-1489424731084-a5d8b219a5bb?w=100&h=100&fit=crop",
            "Bhutan's happiness philosophy and this team's genuine warmth were truly unique. Every day brought new insights into mindful living.",
            "Happiness & Wellness Journey",
            "7 days",
        ),
    ]
}

fn blog_post(
    title: &str,
    excerpt: &str,
    image_url: &str,
    category: &str,
    author: &str,
    author_image: &str,
    read_time: &str,
) -> CreateBlogPost {
    CreateBlogPost {
        title: title.to_string(),
        excerpt: excerpt.to_string(),
        content: "Full article content here...".to_string(),
        image_url: image_url.to_string(),
        category: category.to_string(),
        author: author.to_string(),
        author_image: author_image.to_string(),
        read_time: read_time.to_string(),
        is_published: Some(true),
    }
}

fn sample_blog_posts() -> Vec<CreateBlogPost> {
    vec![
        blog_post(
            "Understanding Bhutan's Gross National Happiness",
            "Discover how Bhutan measures progress not just in economic terms, but through the holistic well-being of its people and environment.",
            "https://images.unsplash.com/photo-1582510003544-4d00b7f74220?w=600&h=400&fit=crop",
            "Culture",
            "Tenzin Norbu",
            "https://images.unsplash.com/photo-1507003211169-0a1dd7228f2d?w=40&h=40&fit=crop",
            "5 min read",
        ),
        blog_post(
            "Essential Gear for Himalayan Trekking",
            "A comprehensive guide to packing for high-altitude adventures in Bhutan, from base layers to emergency supplies.",
            "https://images.unsplash.com/photo-1551632811-561732d1e306?w=600&h=400&fit=crop",
            "Adventure",
            "Pema Choden",
            "https://images.unsplash.com/photo-1494790108755-2616b612b786?w=40&h=40&fit=crop",
            "8 min read",
        ),
        blog_post(
            "A Culinary Journey Through Bhutan",
            "From fiery ema datshi to traditional butter tea, explore the unique flavors that define Bhutanese cuisine and culture.",
            "https://images.unsplash.com/photo-1567620832903-9fc6debc209f?w=600&h=400&fit=crop",
            "Food",
            "Karma Wangchuk",
            "https://images.unsplash.com/photo-1472099645785-5658abf4ff4e?w=40&h=40&fit=crop",
            "6 min read",
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::memory::MemStorage;
    use crate::models::blog_post::BlogPostFilter;
    use crate::models::testimonial::TestimonialFilter;

    #[tokio::test]
    async fn seeds_once_into_an_empty_catalog() {
        let store = MemStorage::new();
        assert!(seed_sample_data(&store).await.unwrap());
        assert!(!seed_sample_data(&store).await.unwrap());

        let tours = store.tours().list(&TourFilter::default()).await.unwrap();
        assert_eq!(tours.len(), 6);
        assert_eq!(tours[0].name, "Cultural Immersion Experience");
        assert_eq!(tours[0].max_group_size, 12);

        let testimonials = store
            .testimonials()
            .list(&TestimonialFilter::default())
            .await
            .unwrap();
        assert_eq!(testimonials.len(), 3);
        let posts = store.blog_posts().list(&BlogPostFilter::default()).await.unwrap();
        assert_eq!(posts.len(), 3);
    }
}
