// Product detail view state.
// Quantity picker, image gallery, busy flag for adds, and the review board.

use chrono::{DateTime, Duration, Utc};
use thiserror::Error;

use crate::catalog::Product;
use crate::catalog::products::{GALLERY_PHOTOS, image_url};

pub const MIN_QUANTITY: u32 = 1;
pub const MAX_QUANTITY: u32 = 10;

/// A community review on the product page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Review {
    pub id: u32,
    pub author: String,
    pub text: String,
    /// Star rating, 1 to 5.
    pub rating: u8,
    pub posted_at: DateTime<Utc>,
    /// Seeded reviews come from verified buyers.
    pub verified: bool,
}

/// Reasons a review submission is refused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ReviewError {
    #[error("review needs an alias")]
    MissingAuthor,
    #[error("review needs some text")]
    MissingText,
}

/// Review form field that receives keystrokes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ReviewField {
    #[default]
    Author,
    Text,
}

/// Draft review being typed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReviewForm {
    pub author: String,
    pub text: String,
    pub rating: u8,
    pub field: ReviewField,
}

impl Default for ReviewForm {
    fn default() -> Self {
        Self {
            author: String::new(),
            text: String::new(),
            rating: 5,
            field: ReviewField::Author,
        }
    }
}

impl ReviewForm {
    pub fn push(&mut self, c: char) {
        match self.field {
            ReviewField::Author => self.author.push(c),
            ReviewField::Text => self.text.push(c),
        }
    }

    pub fn pop(&mut self) {
        match self.field {
            ReviewField::Author => self.author.pop(),
            ReviewField::Text => self.text.pop(),
        };
    }

    pub fn next_field(&mut self) {
        self.field = match self.field {
            ReviewField::Author => ReviewField::Text,
            ReviewField::Text => ReviewField::Author,
        };
    }

    pub fn set_rating(&mut self, rating: u8) {
        self.rating = rating.clamp(1, 5);
    }
}

fn seeded_reviews(now: DateTime<Utc>) -> Vec<Review> {
    vec![
        Review {
            id: 1,
            author: "KAI_ZEN".to_string(),
            text: "Quality is insane. The fit is exactly what I wanted. Worth every credit."
                .to_string(),
            rating: 5,
            posted_at: now - Duration::days(2),
            verified: true,
        },
        Review {
            id: 2,
            author: "NEON_RIDER".to_string(),
            text: "Shipping was faster than light. Hoodie is heavy, feels armored.".to_string(),
            rating: 5,
            posted_at: now - Duration::weeks(1),
            verified: true,
        },
        Review {
            id: 3,
            author: "GLITCH_BOY".to_string(),
            text: "A bit pricey but the aesthetic is unmatched. V2 update is legit.".to_string(),
            rating: 4,
            posted_at: now - Duration::weeks(2),
            verified: true,
        },
    ]
}

/// State for the product detail view. Rebuilt when a different product is viewed.
#[derive(Debug, Clone)]
pub struct ProductDetailState {
    pub product_id: String,
    pub quantity: u32,
    /// An add-to-cart is in flight; further adds are ignored.
    pub adding: bool,
    pub gallery_index: usize,
    pub reviews: Vec<Review>,
    pub form: ReviewForm,
    /// Whether keystrokes go to the review form.
    pub writing_review: bool,
}

impl ProductDetailState {
    pub fn new(product_id: &str) -> Self {
        Self {
            product_id: product_id.to_string(),
            quantity: MIN_QUANTITY,
            adding: false,
            gallery_index: 0,
            reviews: seeded_reviews(Utc::now()),
            form: ReviewForm::default(),
            writing_review: false,
        }
    }

    pub fn is_for(&self, product: &Product) -> bool {
        self.product_id == product.id
    }

    pub fn increment(&mut self) {
        if !self.adding {
            self.quantity = (self.quantity + 1).min(MAX_QUANTITY);
        }
    }

    pub fn decrement(&mut self) {
        if !self.adding {
            self.quantity = self.quantity.saturating_sub(1).max(MIN_QUANTITY);
        }
    }

    /// Start an add-to-cart. Returns the quantity to commit, or None if one is pending.
    pub fn begin_add(&mut self) -> Option<u32> {
        if self.adding {
            return None;
        }
        self.adding = true;
        Some(self.quantity)
    }

    pub fn finish_add(&mut self) {
        self.adding = false;
    }

    /// Image URLs: the product shot followed by stock gallery photos.
    pub fn gallery(product: &Product) -> Vec<String> {
        std::iter::once(product.image.clone())
            .chain(GALLERY_PHOTOS.iter().map(|p| image_url(p)))
            .collect()
    }

    pub fn next_image(&mut self) {
        let len = GALLERY_PHOTOS.len() + 1;
        self.gallery_index = (self.gallery_index + 1) % len;
    }

    pub fn prev_image(&mut self) {
        let len = GALLERY_PHOTOS.len() + 1;
        self.gallery_index = (self.gallery_index + len - 1) % len;
    }

    /// Mean star rating, e.g. "4.7".
    pub fn average_rating(&self) -> String {
        if self.reviews.is_empty() {
            return "0.0".to_string();
        }
        let sum: u32 = self.reviews.iter().map(|r| u32::from(r.rating)).sum();
        format!("{:.1}", f64::from(sum) / self.reviews.len() as f64)
    }

    /// Publish the draft review at the top of the board and clear the form.
    pub fn post_review(&mut self, now: DateTime<Utc>) -> Result<&Review, ReviewError> {
        let author = self.form.author.trim();
        let text = self.form.text.trim();
        if author.is_empty() {
            return Err(ReviewError::MissingAuthor);
        }
        if text.is_empty() {
            return Err(ReviewError::MissingText);
        }

        let review = Review {
            id: self.reviews.len() as u32 + 1,
            author: author.to_string(),
            text: text.to_string(),
            rating: self.form.rating,
            posted_at: now,
            verified: false,
        };
        self.reviews.insert(0, review);
        self.form = ReviewForm::default();
        self.writing_review = false;
        Ok(&self.reviews[0])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;

    #[test]
    fn test_quantity_clamped() {
        let mut state = ProductDetailState::new("1");
        state.decrement();
        assert_eq!(state.quantity, 1);
        for _ in 0..20 {
            state.increment();
        }
        assert_eq!(state.quantity, MAX_QUANTITY);
    }

    #[test]
    fn test_add_suppressed_while_busy() {
        let mut state = ProductDetailState::new("1");
        state.increment();
        assert_eq!(state.begin_add(), Some(2));
        assert_eq!(state.begin_add(), None);

        // The picker is locked while busy
        state.increment();
        assert_eq!(state.quantity, 2);

        state.finish_add();
        assert_eq!(state.begin_add(), Some(2));
    }

    #[test]
    fn test_average_rating() {
        let state = ProductDetailState::new("1");
        assert_eq!(state.average_rating(), "4.7");
    }

    #[test]
    fn test_post_review_validation() {
        let mut state = ProductDetailState::new("1");
        let now = Utc::now();

        assert_eq!(state.post_review(now), Err(ReviewError::MissingAuthor));

        for c in "ZERO_COOL".chars() {
            state.form.push(c);
        }
        assert_eq!(state.post_review(now), Err(ReviewError::MissingText));

        state.form.next_field();
        for c in "  ".chars() {
            state.form.push(c);
        }
        assert_eq!(state.post_review(now), Err(ReviewError::MissingText));
        assert_eq!(state.reviews.len(), 3);
    }

    #[test]
    fn test_post_review_prepends_and_clears() {
        let mut state = ProductDetailState::new("1");
        state.writing_review = true;
        state.form.author = "ZERO_COOL".to_string();
        state.form.text = "Hack the planet".to_string();
        state.form.set_rating(9);

        let review = state.post_review(Utc::now()).unwrap();
        assert_eq!(review.id, 4);
        assert_eq!(review.rating, 5);
        assert!(!review.verified);

        assert_eq!(state.reviews[0].author, "ZERO_COOL");
        assert_eq!(state.reviews.len(), 4);
        assert_eq!(state.form, ReviewForm::default());
        assert!(!state.writing_review);
    }

    #[test]
    fn test_gallery_cycles() {
        let catalog = Catalog::builtin();
        let product = catalog.find("7").unwrap();
        let images = ProductDetailState::gallery(product);
        assert_eq!(images.len(), 4);
        assert_eq!(images[0], product.image);

        let mut state = ProductDetailState::new("7");
        state.prev_image();
        assert_eq!(state.gallery_index, 3);
        state.next_image();
        assert_eq!(state.gallery_index, 0);
        assert!(state.is_for(product));
    }
}
